//! Per-timestamp price synthesis and the standalone random price utilities.
//!
//! Every price produced anywhere in the crate goes through [`round2`], so
//! terminal display with two decimals is a no-op format.

use chrono::{DateTime, Datelike, Timelike};
use chrono_tz::Tz;
use rand::Rng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

use crate::error::SimError;
use crate::model::PriceProfile;

/// Days per year used by the seasonal cycle.
const DAYS_PER_YEAR: f64 = 365.25;

/// Round half away from zero to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Smooth double annual cycle: two peaks (start and mid year) and two
/// troughs (quarter and three-quarter year) per year.
///
/// Ranges over `[amplitude * 0.5, amplitude * 1.5]`.
pub fn seasonal_component(day_of_year: f64, amplitude: f64) -> f64 {
    let cycle = 4.0 * std::f64::consts::PI * (day_of_year - DAYS_PER_YEAR / 2.0) / DAYS_PER_YEAR;
    amplitude * (1.0 + 0.5 * cycle.cos())
}

/// Intraday peak premium: `+peak_amplitude` inside the profile's inclusive
/// peak window, `-peak_amplitude` outside it.
pub fn peak_component(local_hour: u32, profile: &PriceProfile) -> f64 {
    if (profile.peak_start_hour..=profile.peak_end_hour).contains(&local_hour) {
        profile.peak_amplitude
    } else {
        -profile.peak_amplitude
    }
}

/// The noise-free part of the model: base + seasonal + peak.
///
/// Day-of-year and hour are read from the stamp's local calendar, so a
/// fall-back day's repeated local hour prices both occurrences identically
/// up to noise.
pub fn deterministic_price(stamp: &DateTime<Tz>, profile: &PriceProfile) -> f64 {
    let seasonal = seasonal_component(f64::from(stamp.ordinal()), profile.seasonal_amplitude);
    let peak = peak_component(stamp.hour(), profile);
    profile.base_price + seasonal + peak
}

/// Synthesize one price for one timestamp.
///
/// Pure given the rng state: identical `(stamp, profile, seed)` reproduces
/// the identical price. Never fails for the profiles built in
/// [`crate::model::profile`]; the error arm only guards a hand-built profile
/// with a non-finite or negative noise stddev.
pub fn synthesize(
    stamp: &DateTime<Tz>,
    profile: &PriceProfile,
    rng: &mut StdRng,
) -> Result<f64, SimError> {
    let normal = noise_distribution(0.0, profile.noise_stddev)?;
    let noise = normal.sample(rng);
    Ok(round2(deterministic_price(stamp, profile) + noise))
}

/// Build the noise distribution, rejecting a non-finite or negative stddev.
///
/// `rand_distr`'s own constructor accepts a negative std_dev (it mirrors the
/// samples), so the sign check has to happen here.
fn noise_distribution(mean: f64, stddev: f64) -> Result<Normal<f64>, SimError> {
    if !(stddev.is_finite() && stddev >= 0.0) {
        return Err(SimError::configuration(format!(
            "invalid noise stddev {stddev}, expected a finite non-negative value"
        )));
    }
    Normal::new(mean, stddev)
        .map_err(|e| SimError::configuration(format!("noise distribution error: {e}")))
}

/// Independent uniform draws on `[0, 100]`, rounded to two decimals.
///
/// A baseline/testing utility with no time or commodity dependence.
pub fn uniform_prices(num: usize, rng: &mut StdRng) -> Vec<f64> {
    (0..num).map(|_| round2(rng.gen_range(0.0..=100.0))).collect()
}

/// Normal draws around `mean`, rounded to two decimals.
///
/// This is the legacy country-level model's draw; the caller supplies the
/// country reference price as the mean.
pub fn normal_prices(
    mean: f64,
    stddev: f64,
    num: usize,
    rng: &mut StdRng,
) -> Result<Vec<f64>, SimError> {
    let normal = noise_distribution(mean, stddev)?;
    Ok((0..num).map(|_| round2(normal.sample(rng))).collect())
}
