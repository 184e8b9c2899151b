//! Synthetic price modeling: commodity profiles and per-timestamp synthesis.

pub mod profile;
pub mod synth;

pub use profile::*;
pub use synth::*;
