//! Error types for financial health assessment.

mod assessment_error;

pub use assessment_error::*;
