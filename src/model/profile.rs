//! Commodity price profiles and country lookup tables.
//!
//! The enums in [`crate::domain`] stay plain tagged unions; every mapping
//! from a variant to numbers lives here as a side-effect-free function.

use crate::domain::{Commodity, CountryCode};

/// Shape parameters for one (country, commodity) synthetic price model.
///
/// Units follow the underlying market convention: €/MWh for power and
/// natgas, $/barrel for crude. Only the base price varies by country; the
/// shape parameters are fixed per commodity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceProfile {
    pub base_price: f64,
    /// Magnitude of the double annual seasonal cycle.
    pub seasonal_amplitude: f64,
    /// Intraday peak premium; subtracted off-peak. Zero for crude, which has
    /// no intraday structure.
    pub peak_amplitude: f64,
    /// First local hour of the peak window.
    pub peak_start_hour: u32,
    /// Last local hour of the peak window (inclusive).
    pub peak_end_hour: u32,
    /// Standard deviation of the additive normal noise.
    pub noise_stddev: f64,
}

/// Country-specific base price for a commodity.
pub fn base_price(country: CountryCode, commodity: Commodity) -> f64 {
    match (country, commodity) {
        (CountryCode::Gb, Commodity::Power) => 55.0,
        (CountryCode::Gb, Commodity::Natgas) => 25.0,
        (CountryCode::Gb, Commodity::Crude) => 72.0,
        (CountryCode::Fr, Commodity::Power) => 50.0,
        (CountryCode::Fr, Commodity::Natgas) => 20.0,
        (CountryCode::Fr, Commodity::Crude) => 70.0,
        (CountryCode::Nl, Commodity::Power) => 48.0,
        (CountryCode::Nl, Commodity::Natgas) => 18.0,
        (CountryCode::Nl, Commodity::Crude) => 69.0,
        (CountryCode::De, Commodity::Power) => 45.0,
        (CountryCode::De, Commodity::Natgas) => 22.0,
        (CountryCode::De, Commodity::Crude) => 68.0,
    }
}

/// Country-level reference price used by the legacy country-only model.
pub fn reference_price(country: CountryCode) -> f64 {
    match country {
        CountryCode::Gb => 61.0,
        CountryCode::Fr => 58.0,
        CountryCode::Nl => 52.0,
        CountryCode::De => 57.0,
    }
}

/// Full profile for a (country, commodity) pair.
pub fn profile(country: CountryCode, commodity: Commodity) -> PriceProfile {
    let base = base_price(country, commodity);
    match commodity {
        Commodity::Power => PriceProfile {
            base_price: base,
            seasonal_amplitude: 10.0,
            peak_amplitude: 5.0,
            peak_start_hour: 16,
            peak_end_hour: 20,
            noise_stddev: 1.0,
        },
        Commodity::Natgas => PriceProfile {
            base_price: base,
            seasonal_amplitude: 5.0,
            peak_amplitude: 2.0,
            peak_start_hour: 16,
            peak_end_hour: 20,
            noise_stddev: 0.5,
        },
        Commodity::Crude => PriceProfile {
            base_price: base,
            seasonal_amplitude: 5.0,
            peak_amplitude: 0.0,
            peak_start_hour: 16,
            peak_end_hour: 20,
            noise_stddev: 0.75,
        },
    }
}
