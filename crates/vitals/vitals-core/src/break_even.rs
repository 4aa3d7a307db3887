//! Break-even point calculator.

use vitals_api::break_even_scale;
use vitals_spi::{
    AssessmentError, FinancialFigures, IndicatorCalculator, IndicatorKind, IndicatorResult,
    Result, Status,
};

/// Monthly revenue needed to cover all costs.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreakEvenCalculator;

impl IndicatorCalculator for BreakEvenCalculator {
    fn kind(&self) -> IndicatorKind {
        IndicatorKind::BreakEven
    }

    fn applicable(&self, figures: &FinancialFigures) -> bool {
        figures.fixed_costs.is_some()
            && figures.revenue.is_some()
            && figures.variable_costs.is_some()
    }

    fn evaluate(&self, figures: &FinancialFigures) -> Result<IndicatorResult> {
        calculate_break_even(figures)
    }
}

/// Compute the break-even point: `fixed_costs / contribution_ratio`.
///
/// Classification uses how far current revenue sits above the break-even
/// point; `value` and `target` are both the monetary break-even itself.
pub fn calculate_break_even(figures: &FinancialFigures) -> Result<IndicatorResult> {
    let fixed_costs = figures.fixed_costs.unwrap_or(0.0);
    let revenue = figures.revenue.unwrap_or(0.0);
    let variable_costs = figures.variable_costs.unwrap_or(0.0);

    if revenue == 0.0 {
        return Err(AssessmentError::ZeroRevenue);
    }

    let contribution_ratio = (revenue - variable_costs) / revenue;
    if contribution_ratio <= 0.0 {
        return Err(AssessmentError::NonPositiveContributionMargin);
    }

    let break_even = fixed_costs / contribution_ratio;
    let percent_of_break_even = revenue / break_even * 100.0;
    let status = break_even_scale().classify(percent_of_break_even);

    Ok(IndicatorResult {
        kind: IndicatorKind::BreakEven,
        value: break_even,
        unit: "currency/month".to_string(),
        status,
        target: break_even,
        interpretation: format!(
            "Break-even sits at {break_even:.0} per month; current revenue covers {percent_of_break_even:.0}% of it"
        ),
        recommendations: recommendations(status),
    })
}

fn recommendations(status: Status) -> Vec<String> {
    match status {
        Status::Excellent => vec![
            "Revenue clears break-even with a wide safety margin".to_string(),
        ],
        Status::Good => vec![
            "Grow the buffer above break-even to 50% before expanding fixed costs".to_string(),
        ],
        Status::Warning => vec![
            "Revenue barely clears break-even; cut fixed costs or lift volume".to_string(),
            "Avoid new fixed commitments until the buffer widens".to_string(),
        ],
        Status::Critical => vec![
            "Urgent: revenue is below the break-even point".to_string(),
            "Reduce fixed costs immediately and review contribution per sale".to_string(),
        ],
    }
}
