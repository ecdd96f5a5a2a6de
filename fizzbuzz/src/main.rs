//! FizzBuzz over `1..=COUNT`, one value per line.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use fizzbuzz::args::parse_count_or;
use fizzbuzz::exit_codes;
use fizzbuzz::io::config::{FizzBuzzConfig, load_config};
use fizzbuzz::logging;
use fizzbuzz::run::run;

#[derive(Parser)]
#[command(name = "fizzbuzz", version, about = "Print the FizzBuzz sequence")]
struct Cli {
    /// Number of iterations (default: 100).
    #[arg(value_name = "COUNT", allow_negative_numbers = true)]
    count: Option<String>,

    /// Number of iterations, as a flag.
    #[arg(
        long = "count",
        value_name = "COUNT",
        conflicts_with = "count",
        allow_hyphen_values = true
    )]
    count_flag: Option<String>,

    /// TOML config file; a missing file means defaults.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() {
    logging::init();
    if let Err(err) = run_cli() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            load_config(path)?
        }
        None => FizzBuzzConfig::default(),
    };
    let args: Vec<String> = cli.count.into_iter().chain(cli.count_flag).collect();
    let count = parse_count_or(&args, config.default_count)?;
    debug!(count, from_args = !args.is_empty(), "resolved count");
    run(count).context("write sequence to stdout")?;
    Ok(())
}
