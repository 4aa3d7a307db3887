//! Indicator calculator trait.

use crate::error::Result;
use crate::model::{FinancialFigures, IndicatorKind, IndicatorResult};

/// Indicator calculator trait.
///
/// Implementations turn a figures record into one classified indicator.
/// Calculators are pure: same figures in, identical result out, and no
/// calculator depends on another.
pub trait IndicatorCalculator: Send + Sync {
    /// Which indicator this calculator produces.
    fn kind(&self) -> IndicatorKind;

    /// True when the minimum required fields for this indicator are
    /// populated. Presence only — a populated field may still make
    /// `evaluate` return a domain error.
    fn applicable(&self, figures: &FinancialFigures) -> bool;

    /// Compute the classified indicator.
    fn evaluate(&self, figures: &FinancialFigures) -> Result<IndicatorResult>;
}
