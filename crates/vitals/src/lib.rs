//! Financial Health Indicator Engine
//!
//! Turns raw financial figures into classified, benchmarked business
//! indicators — contribution margin, markup, EBITDA margin, days sales
//! outstanding, inventory turnover and break-even point — and aggregates
//! whatever subset could be computed into one overall health assessment.
//!
//! The whole engine is synchronous and side-effect free: every calculator
//! and the aggregator are pure functions of their inputs, safe under
//! arbitrary concurrent invocation.
//!
//! ```
//! use vitals::{analyze_complete, FinancialFigures};
//!
//! let figures = FinancialFigures::new()
//!     .with_revenue(100_000.0)
//!     .with_variable_costs(60_000.0);
//!
//! let assessment = analyze_complete(&figures);
//! assert_eq!(assessment.indicators.len(), 1);
//! ```

pub use vitals_facade::*;
