//! Velocity range checks
//!
//! A relative velocity must lie in (-c, c]. Equality with +c passes here
//! and is caught by the Lorentz factor as a singular evaluation.

use super::numeric::{check_number, NumericInput};
use crate::constants::SPEED_OF_LIGHT;
use crate::{ModfysError, Result};

/// Validate a velocity against a given speed of light
pub fn check_speed_with<'a>(value: impl Into<NumericInput<'a>>, c: f64) -> Result<f64> {
    let v = check_number(value)?;

    if v > c || v <= -c {
        log::warn!("Tried to enter a velocity higher than the speed of light: {v} (c = {c})");
        return Err(ModfysError::ExceedsLightSpeed);
    }

    Ok(v)
}

/// Validate a velocity against the course speed of light
pub fn check_speed<'a>(value: impl Into<NumericInput<'a>>) -> Result<f64> {
    check_speed_with(value, SPEED_OF_LIGHT)
}

/// Check whether a value is a valid velocity
pub fn is_valid_speed<'a>(value: impl Into<NumericInput<'a>>) -> bool {
    check_speed(value).is_ok()
}
