//! Shared domain types.
//!
//! The input enums are closed sets: adding a market means adding a variant
//! plus an entry in the lookup functions in [`crate::model::profile`]. The
//! mappings themselves live outside the enums as plain functions, so there is
//! no runtime table dispatch hidden behind a variant.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration};
use chrono_tz::Tz;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// Supported delivery countries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum CountryCode {
    #[value(name = "GB")]
    Gb,
    #[value(name = "FR")]
    Fr,
    #[value(name = "NL")]
    Nl,
    #[value(name = "DE")]
    De,
}

impl CountryCode {
    pub const ALL: [CountryCode; 4] = [
        CountryCode::Gb,
        CountryCode::Fr,
        CountryCode::Nl,
        CountryCode::De,
    ];

    /// IANA timezone governing the country's local trading day.
    pub fn timezone(self) -> Tz {
        match self {
            CountryCode::Gb => chrono_tz::Europe::London,
            CountryCode::Fr => chrono_tz::Europe::Paris,
            CountryCode::Nl => chrono_tz::Europe::Amsterdam,
            CountryCode::De => chrono_tz::Europe::Berlin,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CountryCode::Gb => "GB",
            CountryCode::Fr => "FR",
            CountryCode::Nl => "NL",
            CountryCode::De => "DE",
        }
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CountryCode {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CountryCode::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                SimError::configuration(format!(
                    "unsupported country code {s:?}, expected one of GB, FR, NL, DE"
                ))
            })
    }
}

/// Spacing of intraday series points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Granularity {
    Hourly,
    #[value(name = "half-hourly")]
    HalfHourly,
}

impl Granularity {
    /// Interval between successive points.
    pub fn interval(self) -> Duration {
        match self {
            Granularity::Hourly => Duration::minutes(60),
            Granularity::HalfHourly => Duration::minutes(30),
        }
    }

    /// Nominal point count for a day without a DST transition.
    pub fn points_per_day(self) -> usize {
        match self {
            Granularity::Hourly => 24,
            Granularity::HalfHourly => 48,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Granularity::Hourly => "hourly",
            Granularity::HalfHourly => "half-hourly",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hourly" => Ok(Granularity::Hourly),
            "half-hourly" | "half_hourly" => Ok(Granularity::HalfHourly),
            _ => Err(SimError::configuration(format!(
                "unsupported granularity {s:?}, expected \"hourly\" or \"half-hourly\""
            ))),
        }
    }
}

/// Commodities with a synthetic intraday price model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Commodity {
    Power,
    Natgas,
    Crude,
}

impl Commodity {
    /// Column order used by table output and shared-noise draws.
    pub const ALL: [Commodity; 3] = [Commodity::Power, Commodity::Natgas, Commodity::Crude];

    pub fn as_str(self) -> &'static str {
        match self {
            Commodity::Power => "power",
            Commodity::Natgas => "natgas",
            Commodity::Crude => "crude",
        }
    }
}

impl fmt::Display for Commodity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Commodity {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "power" => Ok(Commodity::Power),
            "natgas" => Ok(Commodity::Natgas),
            "crude" => Ok(Commodity::Crude),
            _ => Err(SimError::configuration(format!(
                "unsupported commodity {s:?}, expected one of power, natgas, crude"
            ))),
        }
    }
}

/// One timestamped price.
///
/// The stamp keeps its timezone, so both the local display label and the
/// absolute UTC instant are recoverable from the same value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricePoint {
    pub stamp: DateTime<Tz>,
    pub price: f64,
}

/// An ordered one-day price series aligned with its timestamp series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSeries {
    pub points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn prices(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.price).collect()
    }
}

/// One commodity's column in a [`PriceTable`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceColumn {
    pub commodity: Commodity,
    pub prices: Vec<f64>,
}

/// Aligned per-commodity series over one shared timestamp series.
///
/// Invariant: every column has `prices.len() == stamps.len()`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceTable {
    pub stamps: Vec<DateTime<Tz>>,
    pub columns: Vec<PriceColumn>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn country_parse_roundtrip() {
        for country in CountryCode::ALL {
            let parsed: CountryCode = country.as_str().parse().unwrap();
            assert_eq!(parsed, country);
        }
        // Lowercase tokens are accepted too.
        assert_eq!("gb".parse::<CountryCode>().unwrap(), CountryCode::Gb);
    }

    #[test]
    fn unknown_country_is_configuration_error() {
        let err = "US".parse::<CountryCode>().unwrap_err();
        assert!(matches!(err, SimError::Configuration(_)), "got {err:?}");
    }

    #[test]
    fn country_timezones() {
        assert_eq!(CountryCode::Gb.timezone(), chrono_tz::Europe::London);
        assert_eq!(CountryCode::Fr.timezone(), chrono_tz::Europe::Paris);
        assert_eq!(CountryCode::Nl.timezone(), chrono_tz::Europe::Amsterdam);
        assert_eq!(CountryCode::De.timezone(), chrono_tz::Europe::Berlin);
    }

    #[test]
    fn granularity_intervals_and_counts() {
        assert_eq!(Granularity::Hourly.interval(), Duration::minutes(60));
        assert_eq!(Granularity::HalfHourly.interval(), Duration::minutes(30));
        assert_eq!(Granularity::Hourly.points_per_day(), 24);
        assert_eq!(Granularity::HalfHourly.points_per_day(), 48);
    }

    #[test]
    fn granularity_parse_accepts_both_spellings() {
        assert_eq!(
            "half-hourly".parse::<Granularity>().unwrap(),
            Granularity::HalfHourly
        );
        assert_eq!(
            "HALF_HOURLY".parse::<Granularity>().unwrap(),
            Granularity::HalfHourly
        );
        assert!("daily".parse::<Granularity>().is_err());
    }

    #[test]
    fn commodity_parse() {
        assert_eq!("POWER".parse::<Commodity>().unwrap(), Commodity::Power);
        assert!("gold".parse::<Commodity>().is_err());
    }

    #[test]
    fn enums_roundtrip_through_their_wire_names() {
        assert_eq!(serde_json::to_string(&CountryCode::Gb).unwrap(), "\"GB\"");
        assert_eq!(
            serde_json::to_string(&Granularity::HalfHourly).unwrap(),
            "\"half-hourly\""
        );
        assert_eq!(
            serde_json::to_string(&Commodity::Natgas).unwrap(),
            "\"natgas\""
        );

        assert_eq!(
            serde_json::from_str::<CountryCode>("\"NL\"").unwrap(),
            CountryCode::Nl
        );
        assert_eq!(
            serde_json::from_str::<Granularity>("\"hourly\"").unwrap(),
            Granularity::Hourly
        );
        assert_eq!(
            serde_json::from_str::<Commodity>("\"crude\"").unwrap(),
            Commodity::Crude
        );
    }

    #[test]
    fn price_series_serializes_with_stamps_and_prices() {
        let stamp = chrono_tz::Europe::London
            .with_ymd_and_hms(2024, 3, 20, 0, 0, 0)
            .unwrap();
        let series = PriceSeries {
            points: vec![PricePoint { stamp, price: 61.25 }],
        };
        let json = serde_json::to_string(&series).unwrap();
        assert!(json.contains("2024-03-20T00:00:00"), "{json}");
        assert!(json.contains("61.25"), "{json}");
    }

    #[test]
    fn price_table_serializes_column_commodities() {
        let stamp = chrono_tz::Europe::Berlin
            .with_ymd_and_hms(2024, 6, 1, 12, 0, 0)
            .unwrap();
        let table = PriceTable {
            stamps: vec![stamp],
            columns: vec![PriceColumn {
                commodity: Commodity::Power,
                prices: vec![48.5],
            }],
        };
        let json = serde_json::to_string(&table).unwrap();
        assert!(json.contains("\"power\""), "{json}");
        assert!(json.contains("48.5"), "{json}");
    }
}
