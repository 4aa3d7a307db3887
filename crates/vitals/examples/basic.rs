//! Basic example demonstrating the financial health engine
//!
//! Run with: cargo run --example basic -p vitals

use vitals::{analyze_complete, calculate_margin, FinancialFigures};

fn main() {
    println!("=== vitals Basic Examples ===\n");

    // A month of figures for a small field-service business.
    let figures = FinancialFigures::new()
        .with_revenue(100_000.0)
        .with_variable_costs(72_000.0)
        .with_fixed_costs(18_000.0)
        .with_receivables(130_000.0)
        .with_monthly_revenue(100_000.0)
        .with_operating_profit(10_000.0)
        .with_depreciation(2_500.0);

    // 1. Direct calculator use: strict, surfaces domain errors.
    match calculate_margin(&figures) {
        Ok(margin) => println!(
            "1. Margin: {:.1}{} ({:?})\n   {}",
            margin.value, margin.unit, margin.status, margin.interpretation
        ),
        Err(err) => println!("1. Margin unavailable: {err}"),
    }

    // 2. Complete assessment: best-effort over whatever is present.
    let assessment = analyze_complete(&figures);
    println!(
        "\n2. Overall: {:.0}/100 ({:?}), {} indicators computed",
        assessment.overall_score,
        assessment.overall_status,
        assessment.indicators.len()
    );

    for indicator in &assessment.indicators {
        println!(
            "   - {:<18} {:>10.1} {:<14} {:?}",
            indicator.kind.as_str(),
            indicator.value,
            indicator.unit,
            indicator.status
        );
    }

    // 3. Priority actions: what to fix first.
    println!("\n3. Priority actions:");
    for (i, action) in assessment.priority_actions.iter().enumerate() {
        println!("   {}. {}", i + 1, action);
    }

    println!("\n=== Examples Complete ===");
}
