//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::csv_report_adapter::CsvReportAdapter;
use crate::adapters::default_data::DefaultDataAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::domain::backtest::{BacktestParams, run_backtest};
use crate::domain::config_validation::validate_backtest_config;
use crate::domain::error::SmacrossError;
use crate::domain::price::{PricePoint, summarize};
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::DataPort;
use crate::ports::report_port::ReportPort;

#[derive(Parser, Debug)]
#[command(name = "smacross", about = "Moving-average crossover backtester")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a backtest
    Backtest {
        #[arg(short, long)]
        config: PathBuf,
        /// CSV dataset, overrides [data] csv_path
        #[arg(short, long)]
        data: Option<PathBuf>,
        /// Write the decorated series as a CSV report
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show dataset range
    Info {
        /// CSV dataset; bundled data when omitted
        #[arg(short, long)]
        data: Option<PathBuf>,
    },
    /// Validate a configuration file
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Backtest {
            config,
            data,
            output,
        } => run_backtest_command(&config, data.as_ref(), output.as_ref()),
        Command::Info { data } => run_info(data.as_ref()),
        Command::Validate { config } => run_validate(&config),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = SmacrossError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

/// Map config keys to backtest parameters, using the original defaults
/// for anything absent.
pub fn build_backtest_params(config: &dyn ConfigPort) -> BacktestParams {
    BacktestParams {
        min_price: config.get_float("filter", "min_price", 1.0),
        max_price: config.get_float("filter", "max_price", 100_000.0),
        window_size: config.get_int("strategy", "window_size", 10) as usize,
        starting_capital: config.get_float("strategy", "starting_capital", 100_000.0),
    }
}

/// Load the configured dataset, falling back to the bundled one when no
/// path is given or the user file fails schema/data validation.
pub fn load_series_with_fallback(
    data_override: Option<&PathBuf>,
    csv_path: Option<String>,
) -> Result<Vec<PricePoint>, SmacrossError> {
    let path = data_override
        .cloned()
        .or_else(|| csv_path.map(PathBuf::from));

    let Some(path) = path else {
        return DefaultDataAdapter::new().load_series();
    };

    match CsvAdapter::new(path).load_series() {
        Ok(series) => Ok(series),
        Err(err) => {
            eprintln!("warning: {err}");
            eprintln!("falling back to the bundled dataset");
            DefaultDataAdapter::new().load_series()
        }
    }
}

fn run_backtest_command(
    config_path: &PathBuf,
    data_override: Option<&PathBuf>,
    output_path: Option<&PathBuf>,
) -> ExitCode {
    eprintln!("Loading config from {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    if let Err(e) = validate_backtest_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }
    let params = build_backtest_params(&adapter);

    let series = match load_series_with_fallback(
        data_override,
        adapter.get_string("data", "csv_path"),
    ) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    eprintln!("Loaded {} price points", series.len());

    let result = match run_backtest(&series, &params) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            if matches!(e, SmacrossError::EmptyRange { .. }) {
                print_summary("Unfiltered dataset", &series);
            }
            return (&e).into();
        }
    };

    println!("Performance Metrics");
    println!("  Total Return: {:.2}%", result.metrics.total_return * 100.0);
    println!("  Max Drawdown: {:.2}", result.metrics.max_drawdown);
    println!("  Sharpe Ratio: {:.2}", result.metrics.sharpe_ratio);

    if let Some(path) = output_path {
        if let Err(e) = CsvReportAdapter::new().write(&result, path) {
            eprintln!("error: {e}");
            return (&e).into();
        }
        eprintln!("Report written to {}", path.display());
    }

    ExitCode::SUCCESS
}

fn run_info(data_override: Option<&PathBuf>) -> ExitCode {
    let series = match load_series_with_fallback(data_override, None) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    print_summary("Dataset", &series);
    ExitCode::SUCCESS
}

fn print_summary(label: &str, series: &[PricePoint]) {
    match summarize(series) {
        Some(summary) => {
            println!("{label}");
            println!("  Rows: {}", summary.rows);
            println!("  Dates: {} to {}", summary.first_date, summary.last_date);
            println!("  Minimum Close Price: {}", summary.min_close);
            println!("  Maximum Close Price: {}", summary.max_close);
        }
        None => println!("{label}: empty"),
    }
}

fn run_validate(config_path: &PathBuf) -> ExitCode {
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    match validate_backtest_config(&adapter) {
        Ok(()) => {
            println!("Configuration OK");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}
