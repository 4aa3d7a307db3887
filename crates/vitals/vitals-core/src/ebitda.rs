//! EBITDA margin calculator.

use vitals_api::{ebitda_margin_scale, EBITDA_TARGET_MARGIN};
use vitals_spi::{
    FinancialFigures, IndicatorCalculator, IndicatorKind, IndicatorResult, Result, Status,
};

/// EBITDA as a percentage of revenue.
#[derive(Debug, Clone, Copy, Default)]
pub struct EbitdaCalculator;

impl IndicatorCalculator for EbitdaCalculator {
    fn kind(&self) -> IndicatorKind {
        IndicatorKind::Ebitda
    }

    fn applicable(&self, figures: &FinancialFigures) -> bool {
        // A zero operating profit is a meaningful figure, not a missing one.
        figures.operating_profit.is_some()
    }

    fn evaluate(&self, figures: &FinancialFigures) -> Result<IndicatorResult> {
        calculate_ebitda(figures)
    }
}

/// Compute the EBITDA margin:
/// `(operating_profit + depreciation + amortization) / revenue * 100`.
///
/// Depreciation and amortization default to 0 when absent. A missing or
/// zero revenue falls back to 1 instead of raising an error, so the margin
/// is meaningless in that case; the upstream data layer is expected to
/// supply revenue alongside operating profit.
pub fn calculate_ebitda(figures: &FinancialFigures) -> Result<IndicatorResult> {
    let operating_profit = figures.operating_profit.unwrap_or(0.0);
    let depreciation = figures.depreciation.unwrap_or(0.0);
    let amortization = figures.amortization.unwrap_or(0.0);
    let revenue = match figures.revenue {
        Some(v) if v != 0.0 => v,
        _ => 1.0,
    };

    let ebitda = operating_profit + depreciation + amortization;
    let ebitda_margin = ebitda / revenue * 100.0;
    let status = ebitda_margin_scale().classify(ebitda_margin);

    Ok(IndicatorResult {
        kind: IndicatorKind::Ebitda,
        value: ebitda_margin,
        unit: "%".to_string(),
        status,
        target: revenue * EBITDA_TARGET_MARGIN,
        interpretation: format!(
            "EBITDA of {ebitda:.0} is {ebitda_margin:.1}% of revenue; healthy operations run at 15% or more"
        ),
        recommendations: recommendations(status),
    })
}

fn recommendations(status: Status) -> Vec<String> {
    match status {
        Status::Excellent => vec![
            "Operating cash generation is strong; plan reinvestment deliberately".to_string(),
        ],
        Status::Good => vec![
            "Trim overhead to push the EBITDA margin past 20%".to_string(),
        ],
        Status::Warning => vec![
            "Review fixed overhead line by line".to_string(),
            "Defer non-essential operating spend this quarter".to_string(),
        ],
        Status::Critical => vec![
            "Operating result does not cover the cost structure; restructure overhead".to_string(),
            "Rebuild the budget from zero on the largest cost centers".to_string(),
        ],
    }
}
