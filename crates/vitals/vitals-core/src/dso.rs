//! Days-sales-outstanding calculator.

use vitals_api::{dso_scale, DSO_TARGET_DAYS};
use vitals_spi::{
    FinancialFigures, IndicatorCalculator, IndicatorKind, IndicatorResult, Result, Status,
};

/// Fraction of receivables assumed collectable by a 20% DSO reduction.
const CASH_RELEASE_RATIO: f64 = 0.20;

/// Average days to collect receivables.
#[derive(Debug, Clone, Copy, Default)]
pub struct DsoCalculator;

impl IndicatorCalculator for DsoCalculator {
    fn kind(&self) -> IndicatorKind {
        IndicatorKind::Dso
    }

    fn applicable(&self, figures: &FinancialFigures) -> bool {
        figures.receivables.is_some() && figures.monthly_revenue.is_some()
    }

    fn evaluate(&self, figures: &FinancialFigures) -> Result<IndicatorResult> {
        calculate_dso(figures)
    }
}

/// Compute days sales outstanding: `receivables / monthly_revenue * 30`.
///
/// A missing or zero monthly revenue falls back to 1, mirroring the EBITDA
/// revenue fallback; lower DSO is healthier.
pub fn calculate_dso(figures: &FinancialFigures) -> Result<IndicatorResult> {
    let receivables = figures.receivables.unwrap_or(0.0);
    let monthly_revenue = match figures.monthly_revenue {
        Some(v) if v != 0.0 => v,
        _ => 1.0,
    };

    let dso = receivables / monthly_revenue * 30.0;
    let status = dso_scale().classify(dso);
    let cash_release = receivables * CASH_RELEASE_RATIO;

    Ok(IndicatorResult {
        kind: IndicatorKind::Dso,
        value: dso,
        unit: "days".to_string(),
        status,
        target: DSO_TARGET_DAYS,
        interpretation: format!(
            "Receivables take {dso:.0} days to collect on average; the benchmark is {DSO_TARGET_DAYS:.0} days"
        ),
        recommendations: recommendations(status, cash_release),
    })
}

fn recommendations(status: Status, cash_release: f64) -> Vec<String> {
    let cash_line = format!(
        "Cutting DSO by 20% would free roughly {cash_release:.0} in cash"
    );

    match status {
        Status::Excellent => vec![
            "Keep collection cycles under 30 days".to_string(),
        ],
        Status::Good => vec![
            "Invoice on delivery instead of month-end".to_string(),
            cash_line,
        ],
        Status::Warning => vec![
            "Tighten credit terms for new customers".to_string(),
            "Chase invoices past 45 days weekly".to_string(),
            cash_line,
        ],
        Status::Critical => vec![
            "Start a collections task force on overdue accounts".to_string(),
            "Offer early-payment discounts to the largest debtors".to_string(),
            "Suspend credit for repeat late payers".to_string(),
            cash_line,
        ],
    }
}
