//! Series assembly: one timestamp series joined with synthesized prices.
//!
//! Every entry point takes `seed: Option<u64>`; `None` draws a fresh entropy
//! seed, so there is no process-global generator anywhere in the crate and
//! parallel callers each own an isolated stream.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::calendar;
use crate::domain::{
    Commodity, CountryCode, Granularity, PriceColumn, PricePoint, PriceSeries, PriceTable,
};
use crate::error::SimError;
use crate::model;

/// How per-commodity noise streams relate when assembling a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoiseMode {
    /// Each commodity draws from its own sub-seeded generator. A table
    /// column is then identical to the standalone series for the same seed.
    #[default]
    Independent,
    /// All commodities draw sequentially from one generator.
    Shared,
}

/// One-day synthetic series for a single commodity.
pub fn commodity_series(
    date: NaiveDate,
    country: CountryCode,
    granularity: Granularity,
    commodity: Commodity,
    seed: Option<u64>,
) -> Result<PriceSeries, SimError> {
    let stamps = calendar::day_series(date, country.timezone(), granularity)?;
    let profile = model::profile(country, commodity);
    let mut rng = seeded_rng(seed.map(|s| stream_seed(s, commodity)));
    let prices = synthesize_series(&stamps, &profile, &mut rng)?;
    Ok(zip_series(stamps, prices))
}

/// One-day synthetic series for every commodity, aligned on one timestamp
/// series, in [`Commodity::ALL`] column order.
pub fn commodity_table(
    date: NaiveDate,
    country: CountryCode,
    granularity: Granularity,
    seed: Option<u64>,
    noise: NoiseMode,
) -> Result<PriceTable, SimError> {
    let stamps = calendar::day_series(date, country.timezone(), granularity)?;

    let mut columns = Vec::with_capacity(Commodity::ALL.len());
    match noise {
        NoiseMode::Independent => {
            for commodity in Commodity::ALL {
                let profile = model::profile(country, commodity);
                let mut rng = seeded_rng(seed.map(|s| stream_seed(s, commodity)));
                let prices = synthesize_series(&stamps, &profile, &mut rng)?;
                columns.push(PriceColumn { commodity, prices });
            }
        }
        NoiseMode::Shared => {
            let mut rng = seeded_rng(seed);
            for commodity in Commodity::ALL {
                let profile = model::profile(country, commodity);
                let prices = synthesize_series(&stamps, &profile, &mut rng)?;
                columns.push(PriceColumn { commodity, prices });
            }
        }
    }

    debug!(%date, %country, %granularity, rows = stamps.len(), "assembled commodity table");
    Ok(PriceTable { stamps, columns })
}

/// Legacy country-only model: plain normal draws centered on the country
/// reference price, with no seasonal or peak structure.
pub fn country_series(
    date: NaiveDate,
    country: CountryCode,
    granularity: Granularity,
    seed: Option<u64>,
) -> Result<PriceSeries, SimError> {
    let stamps = calendar::day_series(date, country.timezone(), granularity)?;
    let mut rng = seeded_rng(seed);
    let prices = model::normal_prices(model::reference_price(country), 1.0, stamps.len(), &mut rng)?;
    Ok(zip_series(stamps, prices))
}

/// Synthesize one price per timestamp from a caller-owned generator.
pub fn synthesize_series(
    stamps: &[DateTime<Tz>],
    profile: &model::PriceProfile,
    rng: &mut StdRng,
) -> Result<Vec<f64>, SimError> {
    stamps
        .iter()
        .map(|stamp| model::synthesize(stamp, profile, rng))
        .collect()
}

fn zip_series(stamps: Vec<DateTime<Tz>>, prices: Vec<f64>) -> PriceSeries {
    let points = stamps
        .into_iter()
        .zip(prices)
        .map(|(stamp, price)| PricePoint { stamp, price })
        .collect();
    PriceSeries { points }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

/// Derive a per-commodity sub-seed so independent streams never overlap
/// even though they share one user-facing seed.
fn stream_seed(seed: u64, commodity: Commodity) -> u64 {
    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    commodity.hash(&mut hasher);
    hasher.finish()
}
