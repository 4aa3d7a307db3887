//! Rating scales and benchmark targets.

use vitals_spi::Status;

// ============================================================================
// Benchmark Targets
// ============================================================================

/// Contribution margin benchmark, percent of revenue.
pub const MARGIN_TARGET_PCT: f64 = 30.0;

/// Markup benchmark, multiple of unit cost.
pub const MARKUP_TARGET: f64 = 2.0;

/// Recommended markup band, multiples of unit cost.
pub const MARKUP_BAND: (f64, f64) = (2.0, 2.5);

/// EBITDA margin benchmark, fraction of revenue.
pub const EBITDA_TARGET_MARGIN: f64 = 0.15;

/// Days-sales-outstanding benchmark, days.
pub const DSO_TARGET_DAYS: f64 = 45.0;

/// Inventory turnover benchmark, turns per year.
pub const TURNOVER_TARGET: f64 = 6.0;

// ============================================================================
// Rating Scales
// ============================================================================

/// Direction in which larger values are healthier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleDirection {
    /// Larger values are healthier; a band matches when `value >= threshold`.
    HigherIsBetter,
    /// Smaller values are healthier; a band matches when `value <= threshold`.
    LowerIsBetter,
}

/// Ordered list of `(threshold, status)` bands evaluated top-down.
///
/// The first matching band wins; a value matching no band is `Critical`.
/// Band thresholds are inclusive in the scale's healthy direction.
#[derive(Debug, Clone)]
pub struct RatingScale {
    direction: ScaleDirection,
    bands: [(f64, Status); 3],
}

impl RatingScale {
    /// Scale where larger values rate better.
    pub const fn higher_is_better(bands: [(f64, Status); 3]) -> Self {
        Self {
            direction: ScaleDirection::HigherIsBetter,
            bands,
        }
    }

    /// Scale where smaller values rate better.
    pub const fn lower_is_better(bands: [(f64, Status); 3]) -> Self {
        Self {
            direction: ScaleDirection::LowerIsBetter,
            bands,
        }
    }

    pub fn direction(&self) -> ScaleDirection {
        self.direction
    }

    /// Classify a value against the bands, top-down.
    pub fn classify(&self, value: f64) -> Status {
        for (threshold, status) in self.bands {
            let matched = match self.direction {
                ScaleDirection::HigherIsBetter => value >= threshold,
                ScaleDirection::LowerIsBetter => value <= threshold,
            };
            if matched {
                return status;
            }
        }
        Status::Critical
    }
}

/// Contribution margin scale, percent: 30 / 25 / 20.
pub fn margin_scale() -> RatingScale {
    RatingScale::higher_is_better([
        (30.0, Status::Excellent),
        (25.0, Status::Good),
        (20.0, Status::Warning),
    ])
}

/// Markup scale, multiple of unit cost: 2.5 / 2.0 / 1.5.
pub fn markup_scale() -> RatingScale {
    RatingScale::higher_is_better([
        (2.5, Status::Excellent),
        (2.0, Status::Good),
        (1.5, Status::Warning),
    ])
}

/// EBITDA margin scale, percent: 20 / 15 / 10.
pub fn ebitda_margin_scale() -> RatingScale {
    RatingScale::higher_is_better([
        (20.0, Status::Excellent),
        (15.0, Status::Good),
        (10.0, Status::Warning),
    ])
}

/// Days-sales-outstanding scale, days: 30 / 45 / 60. Lower is healthier.
pub fn dso_scale() -> RatingScale {
    RatingScale::lower_is_better([
        (30.0, Status::Excellent),
        (45.0, Status::Good),
        (60.0, Status::Warning),
    ])
}

/// Inventory turnover scale, turns per year: 8 / 6 / 4.
pub fn inventory_turnover_scale() -> RatingScale {
    RatingScale::higher_is_better([
        (8.0, Status::Excellent),
        (6.0, Status::Good),
        (4.0, Status::Warning),
    ])
}

/// Break-even coverage scale, revenue as percent of break-even: 150 / 120 / 100.
pub fn break_even_scale() -> RatingScale {
    RatingScale::higher_is_better([
        (150.0, Status::Excellent),
        (120.0, Status::Good),
        (100.0, Status::Warning),
    ])
}
