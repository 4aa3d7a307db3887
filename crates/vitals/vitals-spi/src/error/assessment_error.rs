//! Assessment error types.

use thiserror::Error;

/// Domain errors raised by individual indicator calculators.
///
/// There is one variant per degenerate-input case and nothing else: the
/// engine performs no I/O, so no transient or retryable failures exist.
#[derive(Debug, Error)]
pub enum AssessmentError {
    #[error("Revenue is zero: margin ratios are undefined")]
    ZeroRevenue,

    #[error("Unit cost is zero: markup is undefined")]
    ZeroUnitCost,

    #[error("Average inventory is zero: turnover is undefined")]
    ZeroAverageInventory,

    #[error("Contribution margin is not positive: break-even is undefined")]
    NonPositiveContributionMargin,
}

/// Result type alias for assessment operations.
pub type Result<T> = std::result::Result<T, AssessmentError>;
