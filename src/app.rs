//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - initializes tracing
//! - parses CLI arguments and validates the string inputs
//! - calls the series assembler
//! - prints formatted output (and optional timing)

use std::time::Instant;

use chrono::NaiveDate;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::cli::{Cli, Command, PricesArgs, RandomArgs, TableArgs};
use crate::error::SimError;
use crate::series::NoiseMode;
use crate::{model, report, series};

/// Entry point for the `mktsim` binary.
pub fn run() -> Result<(), SimError> {
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Command::Prices(args) => handle_prices(args),
        Command::Table(args) => handle_table(args),
        Command::Random(args) => handle_random(args),
    }
}

fn handle_prices(args: PricesArgs) -> Result<(), SimError> {
    let date = parse_date(&args.date)?;

    let started = Instant::now();
    let series = match args.commodity {
        Some(commodity) => {
            series::commodity_series(date, args.country, args.granularity, commodity, args.seed)?
        }
        None => series::country_series(date, args.country, args.granularity, args.seed)?,
    };
    let elapsed = started.elapsed();

    if args.timing {
        eprintln!("Runtime of {} points: {:.2}s", series.len(), elapsed.as_secs_f64());
    }
    print!("{}", report::format_series(&series));
    Ok(())
}

fn handle_table(args: TableArgs) -> Result<(), SimError> {
    let date = parse_date(&args.date)?;
    let noise = if args.shared_noise {
        NoiseMode::Shared
    } else {
        NoiseMode::Independent
    };

    let started = Instant::now();
    let table = series::commodity_table(date, args.country, args.granularity, args.seed, noise)?;
    let elapsed = started.elapsed();

    if args.timing {
        eprintln!("Runtime of {} rows: {:.2}s", table.stamps.len(), elapsed.as_secs_f64());
    }
    print!("{}", report::format_table(&table));
    Ok(())
}

fn handle_random(args: RandomArgs) -> Result<(), SimError> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let started = Instant::now();
    let prices = model::uniform_prices(args.num, &mut rng);
    let elapsed = started.elapsed();

    if args.timing {
        eprintln!("Runtime of {} prices: {:.2}s", prices.len(), elapsed.as_secs_f64());
    }
    println!("{}", report::format_prices(&prices));
    Ok(())
}

fn parse_date(value: &str) -> Result<NaiveDate, SimError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| SimError::validation(format!("invalid date {value:?}, expected YYYY-MM-DD")))
}

fn init_tracing() {
    // Logs go to stderr so stdout stays machine-readable; ignore a second
    // init when called from tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
