//! Complete assessment over whatever figures are present.

use log::debug;

use vitals_spi::{
    FinancialFigures, IndicatorCalculator, IndicatorResult, OverallAssessment, Status,
};

use crate::{
    BreakEvenCalculator, DsoCalculator, EbitdaCalculator, InventoryTurnoverCalculator,
    MarginCalculator, MarkupCalculator,
};

/// Maximum number of priority actions surfaced by one assessment.
pub const MAX_PRIORITY_ACTIONS: usize = 5;

/// The six calculators in canonical evaluation order.
pub fn calculators() -> [&'static dyn IndicatorCalculator; 6] {
    [
        &MarginCalculator,
        &MarkupCalculator,
        &EbitdaCalculator,
        &DsoCalculator,
        &InventoryTurnoverCalculator,
        &BreakEvenCalculator,
    ]
}

/// Run every applicable calculator and roll the results into one assessment.
///
/// Each calculator runs guarded: an indicator whose figures turn out to be
/// degenerate is dropped from the assessment instead of failing it. Partial
/// ledgers are the normal case, and one bad ratio must not block the rest of
/// the report. Direct calculator calls keep the strict error behavior.
pub fn analyze_complete(figures: &FinancialFigures) -> OverallAssessment {
    let mut indicators = Vec::new();

    for calculator in calculators() {
        if !calculator.applicable(figures) {
            continue;
        }
        match calculator.evaluate(figures) {
            Ok(result) => indicators.push(result),
            Err(err) => {
                debug!("skipping {} indicator: {err}", calculator.kind().as_str());
            }
        }
    }

    if indicators.is_empty() {
        return OverallAssessment {
            indicators,
            overall_score: 0.0,
            overall_status: Status::Critical,
            priority_actions: Vec::new(),
        };
    }

    let overall_score =
        indicators.iter().map(|i| i.status.score()).sum::<f64>() / indicators.len() as f64;
    let overall_status = Status::from_score(overall_score);
    let priority_actions = priority_actions(&indicators);

    OverallAssessment {
        indicators,
        overall_score,
        overall_status,
        priority_actions,
    }
}

/// Flatten the recommendations of unhealthy indicators, in indicator order,
/// capped at [`MAX_PRIORITY_ACTIONS`]. Repeated phrases are kept: dropping
/// them would shift which actions survive the cap.
pub fn priority_actions(indicators: &[IndicatorResult]) -> Vec<String> {
    indicators
        .iter()
        .filter(|i| i.status.needs_action())
        .flat_map(|i| i.recommendations.iter().cloned())
        .take(MAX_PRIORITY_ACTIONS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitals_spi::IndicatorKind;

    /// A dataset where every indicator rates excellent.
    fn healthy_figures() -> FinancialFigures {
        FinancialFigures::new()
            .with_revenue(100_000.0)
            .with_variable_costs(60_000.0)
            .with_fixed_costs(20_000.0)
            .with_receivables(40_000.0)
            .with_monthly_revenue(50_000.0)
            .with_cost_of_goods_sold(480_000.0)
            .with_opening_inventory(50_000.0)
            .with_closing_inventory(70_000.0)
            .with_operating_profit(15_000.0)
            .with_depreciation(3_000.0)
            .with_amortization(2_000.0)
            .with_selling_price(250.0)
            .with_unit_cost(100.0)
    }

    #[test]
    fn test_full_dataset_produces_all_six_in_order() {
        let assessment = analyze_complete(&healthy_figures());

        let kinds: Vec<IndicatorKind> = assessment.indicators.iter().map(|i| i.kind).collect();
        assert_eq!(kinds, IndicatorKind::ALL);
    }

    #[test]
    fn test_all_excellent_scores_100() {
        let assessment = analyze_complete(&healthy_figures());

        assert_eq!(assessment.overall_score, 100.0);
        assert_eq!(assessment.overall_status, Status::Excellent);
        assert!(assessment.priority_actions.is_empty());
    }

    #[test]
    fn test_margin_only_dataset() {
        let figures = FinancialFigures::new()
            .with_revenue(100.0)
            .with_variable_costs(70.0);
        let assessment = analyze_complete(&figures);

        assert_eq!(assessment.indicators.len(), 1);
        assert_eq!(assessment.indicators[0].kind, IndicatorKind::Margin);
        assert_eq!(
            assessment.overall_score,
            assessment.indicators[0].status.score()
        );
    }

    #[test]
    fn test_empty_figures() {
        let assessment = analyze_complete(&FinancialFigures::new());

        assert!(assessment.indicators.is_empty());
        assert_eq!(assessment.overall_score, 0.0);
        assert_eq!(assessment.overall_status, Status::Critical);
        assert!(assessment.priority_actions.is_empty());
    }

    #[test]
    fn test_domain_error_skips_only_that_indicator() {
        // Unit cost present but zero: markup raises, everything else present.
        let figures = healthy_figures().with_unit_cost(0.0);
        let assessment = analyze_complete(&figures);

        assert_eq!(assessment.indicators.len(), 5);
        assert!(assessment
            .indicators
            .iter()
            .all(|i| i.kind != IndicatorKind::Markup));
    }

    #[test]
    fn test_zero_revenue_skips_margin_and_break_even() {
        let figures = healthy_figures().with_revenue(0.0);
        let assessment = analyze_complete(&figures);

        let kinds: Vec<IndicatorKind> = assessment.indicators.iter().map(|i| i.kind).collect();
        assert!(!kinds.contains(&IndicatorKind::Margin));
        assert!(!kinds.contains(&IndicatorKind::BreakEven));
        // EBITDA keeps its silent revenue fallback and still reports.
        assert!(kinds.contains(&IndicatorKind::Ebitda));
    }

    #[test]
    fn test_mixed_statuses_average() {
        // Margin at 22% (warning) and DSO at 90 days (critical).
        let figures = FinancialFigures::new()
            .with_revenue(100_000.0)
            .with_variable_costs(78_000.0)
            .with_receivables(150_000.0)
            .with_monthly_revenue(50_000.0);
        let assessment = analyze_complete(&figures);

        assert_eq!(assessment.indicators.len(), 2);
        assert_eq!(assessment.overall_score, 37.5);
        assert_eq!(assessment.overall_status, Status::Critical);
    }

    #[test]
    fn test_priority_actions_capped_at_five_in_indicator_order() {
        // Margin warning contributes 3 actions, DSO critical 4: capped at 5.
        let figures = FinancialFigures::new()
            .with_revenue(100_000.0)
            .with_variable_costs(78_000.0)
            .with_receivables(150_000.0)
            .with_monthly_revenue(50_000.0);
        let assessment = analyze_complete(&figures);

        assert_eq!(assessment.priority_actions.len(), MAX_PRIORITY_ACTIONS);
        // Margin's actions come first, then DSO's lead actions.
        assert_eq!(
            assessment.priority_actions[0],
            "Renegotiate terms with your top suppliers"
        );
        assert_eq!(
            assessment.priority_actions[3],
            "Start a collections task force on overdue accounts"
        );
    }

    #[test]
    fn test_priority_actions_keep_duplicates() {
        let result = |kind, recommendations: &[&str]| IndicatorResult {
            kind,
            value: 0.0,
            unit: "%".to_string(),
            status: Status::Critical,
            target: 0.0,
            interpretation: String::new(),
            recommendations: recommendations.iter().map(|r| r.to_string()).collect(),
        };

        let indicators = vec![
            result(IndicatorKind::Margin, &["Cut costs", "Raise prices"]),
            result(IndicatorKind::Dso, &["Cut costs"]),
        ];

        let actions = priority_actions(&indicators);
        assert_eq!(actions, vec!["Cut costs", "Raise prices", "Cut costs"]);
    }

    #[test]
    fn test_healthy_indicators_contribute_no_actions() {
        let indicators = vec![IndicatorResult {
            kind: IndicatorKind::Margin,
            value: 40.0,
            unit: "%".to_string(),
            status: Status::Good,
            target: 30.0,
            interpretation: String::new(),
            recommendations: vec!["Shift the sales mix toward higher-margin lines".to_string()],
        }];

        assert!(priority_actions(&indicators).is_empty());
    }

    #[test]
    fn test_analyze_is_deterministic() {
        let figures = healthy_figures().with_variable_costs(81_234.5);
        assert_eq!(analyze_complete(&figures), analyze_complete(&figures));
    }
}
