//! Inventory turnover calculator.

use vitals_api::{inventory_turnover_scale, TURNOVER_TARGET};
use vitals_spi::{
    AssessmentError, FinancialFigures, IndicatorCalculator, IndicatorKind, IndicatorResult,
    Result, Status,
};

/// Annual inventory turns over average inventory.
#[derive(Debug, Clone, Copy, Default)]
pub struct InventoryTurnoverCalculator;

impl IndicatorCalculator for InventoryTurnoverCalculator {
    fn kind(&self) -> IndicatorKind {
        IndicatorKind::InventoryTurnover
    }

    fn applicable(&self, figures: &FinancialFigures) -> bool {
        figures.cost_of_goods_sold.is_some()
            && figures.opening_inventory.is_some()
            && figures.closing_inventory.is_some()
    }

    fn evaluate(&self, figures: &FinancialFigures) -> Result<IndicatorResult> {
        calculate_inventory_turnover(figures)
    }
}

/// Compute inventory turnover: `cost_of_goods_sold / average_inventory`,
/// with the average taken over opening and closing stock.
pub fn calculate_inventory_turnover(figures: &FinancialFigures) -> Result<IndicatorResult> {
    let cost_of_goods_sold = figures.cost_of_goods_sold.unwrap_or(0.0);
    let opening_inventory = figures.opening_inventory.unwrap_or(0.0);
    let closing_inventory = figures.closing_inventory.unwrap_or(0.0);

    let average_inventory = (opening_inventory + closing_inventory) / 2.0;
    if average_inventory == 0.0 {
        return Err(AssessmentError::ZeroAverageInventory);
    }

    let turnover = cost_of_goods_sold / average_inventory;
    let status = inventory_turnover_scale().classify(turnover);
    let days_of_inventory = (365.0 / turnover).round();

    Ok(IndicatorResult {
        kind: IndicatorKind::InventoryTurnover,
        value: turnover,
        unit: "x".to_string(),
        status,
        target: TURNOVER_TARGET,
        interpretation: format!(
            "Inventory turns {turnover:.1}x per year against a {TURNOVER_TARGET:.0}x benchmark"
        ),
        recommendations: recommendations(status, days_of_inventory),
    })
}

fn recommendations(status: Status, days_of_inventory: f64) -> Vec<String> {
    let days_line = format!("Stock on hand covers about {days_of_inventory:.0} days of sales");

    match status {
        Status::Excellent => vec![days_line],
        Status::Good => vec![
            days_line,
            "Rebalance slow movers toward fast-selling lines".to_string(),
        ],
        Status::Warning => vec![
            days_line,
            "Run down overstocked items before reordering".to_string(),
            "Shorten reorder cycles on the top movers".to_string(),
        ],
        Status::Critical => vec![
            days_line,
            "Liquidate dead stock, even at a discount".to_string(),
            "Cut purchase volumes until turnover recovers".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turnover_excellent() {
        let figures = FinancialFigures::new()
            .with_cost_of_goods_sold(480_000.0)
            .with_opening_inventory(50_000.0)
            .with_closing_inventory(70_000.0);
        let result = calculate_inventory_turnover(&figures).unwrap();

        // average = 60_000, turnover = 8
        assert_eq!(result.value, 8.0);
        assert_eq!(result.status, Status::Excellent);
        assert_eq!(result.unit, "x");
        assert_eq!(result.target, 6.0);
    }

    #[test]
    fn test_turnover_boundaries() {
        let classify = |cogs: f64| {
            calculate_inventory_turnover(
                &FinancialFigures::new()
                    .with_cost_of_goods_sold(cogs)
                    .with_opening_inventory(100.0)
                    .with_closing_inventory(100.0),
            )
            .unwrap()
            .status
        };

        assert_eq!(classify(800.0), Status::Excellent); // 8x
        assert_eq!(classify(600.0), Status::Good); // 6x
        assert_eq!(classify(400.0), Status::Warning); // 4x
        assert_eq!(classify(399.0), Status::Critical);
    }

    #[test]
    fn test_days_of_inventory_in_recommendations() {
        let figures = FinancialFigures::new()
            .with_cost_of_goods_sold(480_000.0)
            .with_opening_inventory(50_000.0)
            .with_closing_inventory(70_000.0);
        let result = calculate_inventory_turnover(&figures).unwrap();

        // 365 / 8 = 45.625, rounded to 46
        assert!(result.recommendations[0].contains("46 days"));
    }

    #[test]
    fn test_days_line_present_for_every_status() {
        for cogs in [800.0, 600.0, 400.0, 100.0] {
            let result = calculate_inventory_turnover(
                &FinancialFigures::new()
                    .with_cost_of_goods_sold(cogs)
                    .with_opening_inventory(100.0)
                    .with_closing_inventory(100.0),
            )
            .unwrap();
            assert!(
                result.recommendations[0].contains("days of sales"),
                "days line missing at turnover {}",
                result.value
            );
        }
    }

    #[test]
    fn test_zero_average_inventory_is_error() {
        let figures = FinancialFigures::new()
            .with_cost_of_goods_sold(1_000.0)
            .with_opening_inventory(0.0)
            .with_closing_inventory(0.0);
        let err = calculate_inventory_turnover(&figures).unwrap_err();
        assert!(matches!(err, AssessmentError::ZeroAverageInventory));
    }

    #[test]
    fn test_one_sided_inventory_still_averages() {
        let figures = FinancialFigures::new()
            .with_cost_of_goods_sold(600.0)
            .with_opening_inventory(200.0)
            .with_closing_inventory(0.0);
        let result = calculate_inventory_turnover(&figures).unwrap();
        assert_eq!(result.value, 6.0);
    }

    #[test]
    fn test_applicable_requires_all_three_fields() {
        let calc = InventoryTurnoverCalculator;
        assert!(!calc.applicable(
            &FinancialFigures::new()
                .with_cost_of_goods_sold(100.0)
                .with_opening_inventory(10.0)
        ));
        assert!(calc.applicable(
            &FinancialFigures::new()
                .with_cost_of_goods_sold(100.0)
                .with_opening_inventory(10.0)
                .with_closing_inventory(10.0)
        ));
    }
}
