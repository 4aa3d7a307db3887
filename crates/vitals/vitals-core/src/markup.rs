//! Markup calculator.

use vitals_api::{markup_scale, MARKUP_BAND, MARKUP_TARGET};
use vitals_spi::{
    AssessmentError, FinancialFigures, IndicatorCalculator, IndicatorKind, IndicatorResult,
    Result, Status,
};

/// Markup as a multiple of unit cost.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupCalculator;

impl IndicatorCalculator for MarkupCalculator {
    fn kind(&self) -> IndicatorKind {
        IndicatorKind::Markup
    }

    fn applicable(&self, figures: &FinancialFigures) -> bool {
        figures.selling_price.is_some() && figures.unit_cost.is_some()
    }

    fn evaluate(&self, figures: &FinancialFigures) -> Result<IndicatorResult> {
        calculate_markup(figures)
    }
}

/// Compute the markup multiple: `selling_price / unit_cost`.
pub fn calculate_markup(figures: &FinancialFigures) -> Result<IndicatorResult> {
    let selling_price = figures.selling_price.unwrap_or(0.0);
    let unit_cost = figures.unit_cost.unwrap_or(0.0);

    if unit_cost == 0.0 {
        return Err(AssessmentError::ZeroUnitCost);
    }

    let markup = selling_price / unit_cost;
    // The margin a customer-facing price implies: (markup - 1) / markup.
    let equivalent_margin = (markup - 1.0) / markup * 100.0;
    let status = markup_scale().classify(markup);

    let (band_low, band_high) = MARKUP_BAND;
    let interpretation = format!(
        "Markup of {markup:.1}x equals a {equivalent_margin:.1}% margin; \
         price between {band_low:.1}x and {band_high:.1}x over unit cost"
    );

    Ok(IndicatorResult {
        kind: IndicatorKind::Markup,
        value: markup,
        unit: "x".to_string(),
        status,
        target: MARKUP_TARGET,
        interpretation,
        recommendations: recommendations(status),
    })
}

fn recommendations(status: Status) -> Vec<String> {
    match status {
        Status::Excellent => vec![
            "Keep the current markup; watch competitors before discounting".to_string(),
        ],
        Status::Good => vec![
            "Test price increases on low-sensitivity items toward 2.5x".to_string(),
        ],
        Status::Warning => vec![
            "Move the average markup above 2.0x".to_string(),
            "Cut unit cost through supplier negotiation or substitution".to_string(),
        ],
        Status::Critical => vec![
            "Reprice the catalog toward a 2.0x-2.5x markup".to_string(),
            "Stop selling items priced below 1.5x unit cost".to_string(),
        ],
    }
}
