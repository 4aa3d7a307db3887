//! Indicator identity and result models.

use serde::{Deserialize, Serialize};

use super::Status;

/// The six business indicators, in canonical evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKind {
    Margin,
    Markup,
    Ebitda,
    Dso,
    InventoryTurnover,
    BreakEven,
}

impl IndicatorKind {
    /// All indicators in canonical evaluation order.
    pub const ALL: [IndicatorKind; 6] = [
        IndicatorKind::Margin,
        IndicatorKind::Markup,
        IndicatorKind::Ebitda,
        IndicatorKind::Dso,
        IndicatorKind::InventoryTurnover,
        IndicatorKind::BreakEven,
    ];

    /// Stable identifier for display and logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorKind::Margin => "margin",
            IndicatorKind::Markup => "markup",
            IndicatorKind::Ebitda => "ebitda",
            IndicatorKind::Dso => "dso",
            IndicatorKind::InventoryTurnover => "inventory_turnover",
            IndicatorKind::BreakEven => "break_even",
        }
    }
}

/// One classified, benchmarked indicator.
///
/// A plain value type: two computations over the same figures produce equal
/// results. `status` is the machine-readable signal; `interpretation` and
/// `recommendations` are display-only strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorResult {
    /// Which indicator this is.
    pub kind: IndicatorKind,
    /// Computed numeric result.
    pub value: f64,
    /// Unit of `value`, e.g. "%", "x", "days", "currency/month".
    pub unit: String,
    /// Health classification against the benchmark.
    pub status: Status,
    /// Benchmark value used for classification.
    pub target: f64,
    /// One-line natural-language summary.
    pub interpretation: String,
    /// Suggested actions, most important first.
    pub recommendations: Vec<String>,
}
