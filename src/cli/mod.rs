//! Command-line parsing for the synthetic price generator.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the calendar/model code. Dates and counts arrive
//! as strings here and are validated in `app.rs` before the core runs.

use clap::{Parser, Subcommand};

use crate::domain::{Commodity, CountryCode, Granularity};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "mktsim",
    version,
    about = "Synthetic intraday commodity price generator"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a one-day price series for a country.
    ///
    /// With `--commodity` this uses the layered seasonal/peak/noise model;
    /// without it, the legacy country-level normal model.
    Prices(PricesArgs),
    /// Generate aligned power/natgas/crude series as one table.
    Table(TableArgs),
    /// Generate uniform random prices on [0, 100] (baseline utility).
    Random(RandomArgs),
}

/// Options shared by the series-producing commands.
#[derive(Debug, Parser, Clone)]
pub struct PricesArgs {
    /// Local calendar date, YYYY-MM-DD.
    #[arg(value_name = "DATE")]
    pub date: String,

    /// Country code (GB, FR, NL, DE).
    #[arg(value_enum, value_name = "COUNTRY")]
    pub country: CountryCode,

    /// Spacing of series points.
    #[arg(short = 'g', long, value_enum, default_value_t = Granularity::Hourly)]
    pub granularity: Granularity,

    /// Commodity model; omit for the legacy country-level model.
    #[arg(short = 'c', long, value_enum)]
    pub commodity: Option<Commodity>,

    /// Random seed; omitted means a fresh entropy seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the generation runtime to stderr.
    #[arg(long)]
    pub timing: bool,
}

/// Options for the all-commodities table.
#[derive(Debug, Parser, Clone)]
pub struct TableArgs {
    /// Local calendar date, YYYY-MM-DD.
    #[arg(value_name = "DATE")]
    pub date: String,

    /// Country code (GB, FR, NL, DE).
    #[arg(value_enum, value_name = "COUNTRY")]
    pub country: CountryCode,

    /// Spacing of series points.
    #[arg(short = 'g', long, value_enum, default_value_t = Granularity::Hourly)]
    pub granularity: Granularity,

    /// Random seed; omitted means a fresh entropy seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Draw all commodities from one noise stream instead of independent
    /// per-commodity streams.
    #[arg(long)]
    pub shared_noise: bool,

    /// Print the generation runtime to stderr.
    #[arg(long)]
    pub timing: bool,
}

/// Options for the uniform random baseline.
#[derive(Debug, Parser, Clone)]
pub struct RandomArgs {
    /// Number of prices to generate.
    #[arg(value_name = "NUM")]
    pub num: usize,

    /// Random seed; omitted means a fresh entropy seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the generation runtime to stderr.
    #[arg(long)]
    pub timing: bool,
}
