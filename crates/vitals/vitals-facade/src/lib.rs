//! Financial Health Facade
//!
//! Unified re-exports for the vitals module.
//!
//! This facade provides access to all financial health components:
//! - models - figures, indicator results, statuses, overall assessment
//! - benchmarks - fixed rating scales and targets
//! - calculators - the six indicator calculators and `analyze_complete`

// Re-export everything from SPI (traits, errors, types)
pub use vitals_spi::*;

// Re-export everything from API (benchmarks)
pub use vitals_api::*;

// Re-export everything from Core (implementations)
pub use vitals_core::*;
