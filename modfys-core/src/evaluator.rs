//! Formula evaluation context
//!
//! An [`Evaluator`] binds the formula set to one [`PhysicalConstants`]
//! value. The formulas themselves live in [`crate::relativity`] and
//! [`crate::quantum`] as `impl Evaluator` blocks, each with a free-function
//! twin that evaluates against the course constants.

use crate::constants::PhysicalConstants;
use crate::validation::{check_speed_with, NumericInput};
use crate::{ModfysError, Result};

/// Stateless formula evaluator over a fixed set of constants
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Evaluator {
    constants: PhysicalConstants,
}

impl Evaluator {
    /// Create an evaluator for the given constants
    pub const fn new(constants: PhysicalConstants) -> Self {
        Self { constants }
    }

    /// Get the constants this evaluator runs against
    pub const fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    /// Validate a velocity against this evaluator's speed of light
    pub fn check_speed<'a>(&self, value: impl Into<NumericInput<'a>>) -> Result<f64> {
        check_speed_with(value, self.constants.c)
    }
}

/// Reject NaN and infinite results
pub(crate) fn finite(value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        log::warn!("Evaluation left the representable range: {value}");
        Err(ModfysError::NumericOverflow)
    }
}

/// Reject a zero denominator
pub(crate) fn nonzero(denominator: f64) -> Result<f64> {
    if denominator == 0.0 {
        log::warn!("Tried to divide by 0");
        Err(ModfysError::DivisionByZero)
    } else {
        Ok(denominator)
    }
}
