//! Terminal formatting for generated series.

pub mod format;

pub use format::*;
