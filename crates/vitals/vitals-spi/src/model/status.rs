//! Health status classification.

use serde::{Deserialize, Serialize};

/// Health classification for an indicator or a whole assessment.
///
/// Variants are declared in decreasing order of health: `Excellent` is the
/// strongest rating and `Critical` the weakest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Excellent,
    Good,
    Warning,
    Critical,
}

impl Status {
    /// Numeric score used for aggregation: Excellent = 100, Good = 75,
    /// Warning = 50, Critical = 25.
    pub fn score(&self) -> f64 {
        match self {
            Status::Excellent => 100.0,
            Status::Good => 75.0,
            Status::Warning => 50.0,
            Status::Critical => 25.0,
        }
    }

    /// Map an aggregate 0-100 score back to a status.
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Status::Excellent
        } else if score >= 70.0 {
            Status::Good
        } else if score >= 50.0 {
            Status::Warning
        } else {
            Status::Critical
        }
    }

    /// True for the two ratings that demand corrective action.
    pub fn needs_action(&self) -> bool {
        matches!(self, Status::Warning | Status::Critical)
    }
}
