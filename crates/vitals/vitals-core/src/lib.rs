//! Financial Health Core
//!
//! Implementations of the six indicator calculators and the aggregator
//! that rolls partial results into one overall assessment.

pub mod assess;
pub mod break_even;
pub mod dso;
pub mod ebitda;
pub mod margin;
pub mod markup;
pub mod turnover;

pub use assess::*;
pub use break_even::*;
pub use dso::*;
pub use ebitda::*;
pub use margin::*;
pub use markup::*;
pub use turnover::*;
