//! Financial Health Benchmarks
//!
//! The fixed rating scales and target values every indicator is judged
//! against. These are part of the engine's contract, not runtime
//! configuration.

pub mod scale;

pub use scale::*;
