//! Overall assessment model.

use serde::{Deserialize, Serialize};

use super::{IndicatorResult, Status};

/// Combined view over every indicator that could be computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallAssessment {
    /// Successfully computed indicators, in canonical evaluation order.
    pub indicators: Vec<IndicatorResult>,
    /// Arithmetic mean of per-indicator status scores, 0-100.
    pub overall_score: f64,
    /// Status derived from `overall_score`.
    pub overall_status: Status,
    /// Recommendations drawn from warning/critical indicators, in indicator
    /// order, capped at five entries. Repeated phrases are kept as-is.
    pub priority_actions: Vec<String>,
}
