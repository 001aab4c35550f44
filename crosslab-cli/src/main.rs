//! CrossLab CLI — run a moving-average crossover backtest.
//!
//! Commands:
//! - `run` — execute a backtest from a TOML config file or inline flags,
//!   over a CSV price series or a synthetic random walk, print a report,
//!   and optionally export trades.csv / result.json

use std::fs::File;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use crosslab_core::config::RunConfig;
use crosslab_core::data::{csv_io, generate_series, SyntheticConfig};
use crosslab_core::domain::PricePoint;
use crosslab_core::engine::{run_backtest, BacktestResult};
use crosslab_core::signals::{CrossoverStrategy, WindowMode};

#[derive(Parser)]
#[command(
    name = "crosslab",
    about = "CrossLab CLI — moving-average crossover backtesting engine"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute a backtest and print a performance report.
    Run {
        /// Path to a TOML config file (overrides the inline strategy flags).
        #[arg(long)]
        config: Option<PathBuf>,

        /// Short moving-average period.
        #[arg(long, default_value_t = 3)]
        short: usize,

        /// Long moving-average period.
        #[arg(long, default_value_t = 10)]
        long: usize,

        /// Annualized risk-free rate as a fraction (0.02 = 2%).
        #[arg(long, default_value_t = 0.02)]
        risk_free_rate: f64,

        /// Use conventional trailing (causal) windows instead of the
        /// reference suffix windowing.
        #[arg(long, default_value_t = false)]
        trailing: bool,

        /// Price series CSV (timestamp,price with header). Omit for
        /// synthetic data.
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Number of synthetic trading days (ignored with --csv).
        #[arg(long, default_value_t = 250)]
        days: usize,

        /// Seed for the synthetic random walk.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Directory for trades.csv and result.json artifacts.
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            config,
            short,
            long,
            risk_free_rate,
            trailing,
            csv,
            days,
            seed,
            output_dir,
        } => {
            let run_config = match config {
                Some(path) => load_config(&path)?,
                None => {
                    if short == 0 || long == 0 {
                        bail!("periods must be >= 1");
                    }
                    let window = if trailing {
                        WindowMode::Trailing
                    } else {
                        WindowMode::Suffix
                    };
                    RunConfig {
                        strategy: CrossoverStrategy::new(short, long, window),
                        risk_free_rate,
                    }
                }
            };

            let series = load_series(csv.as_deref(), days, seed)?;
            if series.is_empty() {
                bail!("price series is empty");
            }

            let result = run_backtest(&series, &run_config)
                .with_context(|| "backtest failed".to_string())?;

            print_report(&result, series.len());

            if let Some(dir) = output_dir {
                export_artifacts(&dir, &result)?;
            }
            Ok(())
        }
    }
}

fn load_config(path: &std::path::Path) -> Result<RunConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: RunConfig = toml::from_str(&text)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    if config.strategy.short_period == 0 || config.strategy.long_period == 0 {
        bail!("periods must be >= 1 in {}", path.display());
    }
    Ok(config)
}

fn load_series(csv: Option<&std::path::Path>, days: usize, seed: u64) -> Result<Vec<PricePoint>> {
    match csv {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open price CSV {}", path.display()))?;
            csv_io::read_series(file)
                .with_context(|| format!("failed to parse price CSV {}", path.display()))
        }
        None => {
            let start = chrono::NaiveDate::from_ymd_opt(2024, 1, 2)
                .expect("valid start date");
            Ok(generate_series(
                start,
                &SyntheticConfig {
                    days,
                    seed,
                    ..SyntheticConfig::default()
                },
            ))
        }
    }
}

fn print_report(result: &BacktestResult, series_len: usize) {
    let summary = &result.summary;
    println!("run id:        {}", result.run_id);
    println!(
        "strategy:      SMA {}/{} ({:?} windows)",
        result.config.strategy.short_period,
        result.config.strategy.long_period,
        result.config.strategy.window
    );
    println!("price points:  {series_len}");
    println!(
        "trades:        {} ({} closed)",
        summary.trade_count, summary.closed_trades
    );
    println!("mean return:   {:+.2}%", summary.mean_return * 100.0);
    println!("win rate:      {:.1}%", summary.win_rate * 100.0);
    match summary.sharpe {
        Some(sharpe) => println!("sharpe ratio:  {sharpe:.3}"),
        None => println!("sharpe ratio:  undefined (zero variance)"),
    }

    if !result.trades.is_empty() {
        println!();
        println!("trade tape:");
        for trade in &result.trades {
            let exit = match trade.exit {
                Some(e) => format!("exit {:.2} @ t={}", e.price, e.time),
                None => "still open".to_string(),
            };
            println!(
                "  {:?} entry {:.2} @ t={}  {}  ({:+.2}%)",
                trade.position,
                trade.entry_price,
                trade.entry_time,
                exit,
                trade.return_fraction() * 100.0
            );
        }
    }
}

fn export_artifacts(dir: &std::path::Path, result: &BacktestResult) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output dir {}", dir.display()))?;

    let trades_path = dir.join("trades.csv");
    let file = File::create(&trades_path)
        .with_context(|| format!("failed to create {}", trades_path.display()))?;
    csv_io::write_trades(file, &result.trades)
        .with_context(|| format!("failed to write {}", trades_path.display()))?;

    let json_path = dir.join("result.json");
    let json = serde_json::to_string_pretty(result).context("failed to serialize result")?;
    std::fs::write(&json_path, json)
        .with_context(|| format!("failed to write {}", json_path.display()))?;

    println!();
    println!("artifacts written to {}", dir.display());
    Ok(())
}
