//! `mktsim` library crate.
//!
//! The binary (`mktsim`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - generated series are reusable from other test suites and tools
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod calendar;
pub mod cli;
pub mod domain;
pub mod error;
pub mod model;
pub mod report;
pub mod series;
