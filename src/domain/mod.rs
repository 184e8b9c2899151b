//! Domain types used throughout the generator.
//!
//! This module defines:
//!
//! - the closed input enums (`CountryCode`, `Granularity`, `Commodity`)
//! - the assembled output types (`PricePoint`, `PriceSeries`, `PriceTable`)

pub mod types;

pub use types::*;
