//! Contribution margin calculator.

use vitals_api::{margin_scale, MARGIN_TARGET_PCT};
use vitals_spi::{
    AssessmentError, FinancialFigures, IndicatorCalculator, IndicatorKind, IndicatorResult,
    Result, Status,
};

/// Contribution margin as a percentage of revenue.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarginCalculator;

impl IndicatorCalculator for MarginCalculator {
    fn kind(&self) -> IndicatorKind {
        IndicatorKind::Margin
    }

    fn applicable(&self, figures: &FinancialFigures) -> bool {
        figures.revenue.is_some() && figures.variable_costs.is_some()
    }

    fn evaluate(&self, figures: &FinancialFigures) -> Result<IndicatorResult> {
        calculate_margin(figures)
    }
}

/// Compute the contribution margin: `(revenue - variable_costs) / revenue * 100`.
pub fn calculate_margin(figures: &FinancialFigures) -> Result<IndicatorResult> {
    let revenue = figures.revenue.unwrap_or(0.0);
    let variable_costs = figures.variable_costs.unwrap_or(0.0);

    if revenue == 0.0 {
        return Err(AssessmentError::ZeroRevenue);
    }

    let margin = (revenue - variable_costs) / revenue * 100.0;
    let status = margin_scale().classify(margin);

    Ok(IndicatorResult {
        kind: IndicatorKind::Margin,
        value: margin,
        unit: "%".to_string(),
        status,
        target: MARGIN_TARGET_PCT,
        interpretation: interpretation(margin, status),
        recommendations: recommendations(status),
    })
}

fn interpretation(margin: f64, status: Status) -> String {
    match status {
        Status::Excellent => format!(
            "Contribution margin of {margin:.1}% is above the {MARGIN_TARGET_PCT:.0}% benchmark"
        ),
        Status::Good => format!(
            "Contribution margin of {margin:.1}% is close to the {MARGIN_TARGET_PCT:.0}% benchmark"
        ),
        Status::Warning => format!(
            "Contribution margin of {margin:.1}% is eroding against the {MARGIN_TARGET_PCT:.0}% benchmark"
        ),
        Status::Critical => format!(
            "Contribution margin of {margin:.1}% is far below the {MARGIN_TARGET_PCT:.0}% benchmark"
        ),
    }
}

fn recommendations(status: Status) -> Vec<String> {
    let mut actions: Vec<String> = match status {
        Status::Excellent => {
            vec!["Hold pricing discipline to keep the margin above 30%".to_string()]
        }
        Status::Good => vec!["Shift the sales mix toward higher-margin lines".to_string()],
        Status::Warning => vec![
            "Renegotiate terms with your top suppliers".to_string(),
            "Review pricing on your best-selling items".to_string(),
        ],
        Status::Critical => vec![
            "Freeze new investment until the margin recovers".to_string(),
            "Audit unprofitable product and service lines".to_string(),
        ],
    };

    if status != Status::Excellent {
        actions.push("Reach a 30% contribution margin within 90 days".to_string());
    }

    actions
}
