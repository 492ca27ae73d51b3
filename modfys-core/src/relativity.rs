//! Special relativity
//!
//! Frame S' moves with velocity `v` relative to frame S. Every velocity is
//! validated to lie in (-c, c] before use; auxiliary quantities must be
//! finite numbers.

use crate::evaluator::{finite, nonzero, Evaluator};
use crate::validation::check_number;
use crate::{ModfysError, Result};

impl Evaluator {
    /// Lorentz factor γ = 1/√(1 − v²/c²)
    ///
    /// Fails with [`ModfysError::UndefinedAtLightSpeed`] at v = c.
    pub fn lorentz_factor(&self, v: f64) -> Result<f64> {
        let v = self.check_speed(v)?;
        let c = self.constants().c;

        let denominator = 1.0 - v.powi(2) / c.powi(2);
        if denominator <= 0.0 {
            log::warn!("Lorentz factor is singular at v = {v} (c = {c})");
            return Err(ModfysError::UndefinedAtLightSpeed);
        }

        finite((1.0 / denominator).sqrt())
    }

    /// Dilated time t = t0·γ for proper time `t0`
    pub fn time_dilation(&self, v: f64, t0: f64) -> Result<f64> {
        let t0 = check_number(t0)?;
        let gamma = self.lorentz_factor(v)?;
        finite(t0 * gamma)
    }

    /// Contracted length l = l0/γ for proper length `l0`
    pub fn length_contraction(&self, v: f64, l0: f64) -> Result<f64> {
        let l0 = check_number(l0)?;
        let gamma = self.lorentz_factor(v)?;
        finite(l0 / gamma)
    }

    /// Total relativistic energy E = γ·m·c²
    pub fn relativistic_energy(&self, v: f64, m: f64) -> Result<f64> {
        let m = check_number(m)?;
        let gamma = self.lorentz_factor(v)?;
        finite(gamma * m * self.constants().c.powi(2))
    }

    /// Relativistic kinetic energy KE = (γ − 1)·m·c²
    pub fn relativistic_kinetic_energy(&self, v: f64, m: f64) -> Result<f64> {
        let m = check_number(m)?;
        let gamma = self.lorentz_factor(v)?;
        finite((gamma - 1.0) * m * self.constants().c.powi(2))
    }

    /// Relativistic momentum p = γ·m·v
    pub fn relativistic_momentum(&self, v: f64, m: f64) -> Result<f64> {
        let m = check_number(m)?;
        let gamma = self.lorentz_factor(v)?;
        finite(gamma * m * v)
    }

    /// Velocity addition w = (u + v)/(1 + uv/c²)
    ///
    /// `v` is the velocity of S' and `u` the velocity of the object in S';
    /// both are validated as speeds. If either equals c the result is c.
    pub fn relative_velocity(&self, v: f64, u: f64) -> Result<f64> {
        let v = self.check_speed(v)?;
        let u = self.check_speed(u)?;
        let c = self.constants().c;

        // 1 + uv/c² cancels when one speed is c and the other is near -c
        if v == c || u == c {
            return Ok(c);
        }

        let denominator = nonzero(1.0 + (u * v) / c.powi(2))?;
        finite((u + v) / denominator)
    }
}

/// Lorentz factor with the course constants
pub fn lorentz_factor(v: f64) -> Result<f64> {
    Evaluator::default().lorentz_factor(v)
}

/// Time dilation with the course constants
pub fn time_dilation(v: f64, t0: f64) -> Result<f64> {
    Evaluator::default().time_dilation(v, t0)
}

/// Length contraction with the course constants
pub fn length_contraction(v: f64, l0: f64) -> Result<f64> {
    Evaluator::default().length_contraction(v, l0)
}

/// Relativistic energy with the course constants
pub fn relativistic_energy(v: f64, m: f64) -> Result<f64> {
    Evaluator::default().relativistic_energy(v, m)
}

/// Relativistic kinetic energy with the course constants
pub fn relativistic_kinetic_energy(v: f64, m: f64) -> Result<f64> {
    Evaluator::default().relativistic_kinetic_energy(v, m)
}

/// Relativistic momentum with the course constants
pub fn relativistic_momentum(v: f64, m: f64) -> Result<f64> {
    Evaluator::default().relativistic_momentum(v, m)
}

/// Velocity addition with the course constants
pub fn relative_velocity(v: f64, u: f64) -> Result<f64> {
    Evaluator::default().relative_velocity(v, u)
}
