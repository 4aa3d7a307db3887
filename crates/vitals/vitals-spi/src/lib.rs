//! Financial Health Service Provider Interface
//!
//! Defines traits and types for classified business indicators:
//! raw financial figures in, benchmarked indicator results out.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::*;
pub use error::*;
pub use model::*;
