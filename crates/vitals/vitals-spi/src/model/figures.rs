//! Raw financial figures model.

use serde::{Deserialize, Serialize};

/// Raw financial figures for one reporting period.
///
/// Every field is independently optional: the upstream data layer supplies
/// whatever it has, and each calculator declares its own required subset.
/// An absent field and a field supplied as zero are different things — the
/// EBITDA and DSO calculators rely on that distinction.
///
/// Values are plain amounts in a single currency unit; no conversion or
/// formatting happens here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialFigures {
    pub revenue: Option<f64>,
    pub variable_costs: Option<f64>,
    pub fixed_costs: Option<f64>,
    pub receivables: Option<f64>,
    pub monthly_revenue: Option<f64>,
    pub cost_of_goods_sold: Option<f64>,
    pub opening_inventory: Option<f64>,
    pub closing_inventory: Option<f64>,
    pub operating_profit: Option<f64>,
    pub depreciation: Option<f64>,
    pub amortization: Option<f64>,
    pub selling_price: Option<f64>,
    pub unit_cost: Option<f64>,
}

impl FinancialFigures {
    /// Empty record with no figures supplied.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_revenue(mut self, revenue: f64) -> Self {
        self.revenue = Some(revenue);
        self
    }

    pub fn with_variable_costs(mut self, variable_costs: f64) -> Self {
        self.variable_costs = Some(variable_costs);
        self
    }

    pub fn with_fixed_costs(mut self, fixed_costs: f64) -> Self {
        self.fixed_costs = Some(fixed_costs);
        self
    }

    pub fn with_receivables(mut self, receivables: f64) -> Self {
        self.receivables = Some(receivables);
        self
    }

    pub fn with_monthly_revenue(mut self, monthly_revenue: f64) -> Self {
        self.monthly_revenue = Some(monthly_revenue);
        self
    }

    pub fn with_cost_of_goods_sold(mut self, cost_of_goods_sold: f64) -> Self {
        self.cost_of_goods_sold = Some(cost_of_goods_sold);
        self
    }

    pub fn with_opening_inventory(mut self, opening_inventory: f64) -> Self {
        self.opening_inventory = Some(opening_inventory);
        self
    }

    pub fn with_closing_inventory(mut self, closing_inventory: f64) -> Self {
        self.closing_inventory = Some(closing_inventory);
        self
    }

    pub fn with_operating_profit(mut self, operating_profit: f64) -> Self {
        self.operating_profit = Some(operating_profit);
        self
    }

    pub fn with_depreciation(mut self, depreciation: f64) -> Self {
        self.depreciation = Some(depreciation);
        self
    }

    pub fn with_amortization(mut self, amortization: f64) -> Self {
        self.amortization = Some(amortization);
        self
    }

    pub fn with_selling_price(mut self, selling_price: f64) -> Self {
        self.selling_price = Some(selling_price);
        self
    }

    pub fn with_unit_cost(mut self, unit_cost: f64) -> Self {
        self.unit_cost = Some(unit_cost);
        self
    }
}
