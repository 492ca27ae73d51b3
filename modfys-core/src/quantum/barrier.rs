//! Scattering on a rectangular potential barrier
//!
//! A particle of mass `m` and energy `e` meets a barrier of height `u0` and
//! width `a`. With wave factor `w = 2πa/h` the two coefficients share one
//! oscillation term `s` and one kinetic term `q`:
//!
//! | regime          | `s`                       | `q`                 |
//! |-----------------|---------------------------|---------------------|
//! | `e > u0`        | sin²(√(2m(e − u0))·w)     | 4e(e/u0 − 1)/u0     |
//! | `e <= u0`       | sinh²(√(2m(u0 − e))·w)    | 4e(1 − e/u0)/u0     |
//!
//! transmission = s/(s + q), reflection = q/(s + q). Both always come from
//! the same branch, so they sum to one. At `e == u0` both terms vanish and
//! the evaluation fails with [`crate::ModfysError::DivisionByZero`]. The mass
//! must be positive and the energy non-negative, otherwise the evaluation
//! fails with [`crate::ModfysError::OutOfDomain`].

use core::f64::consts::PI;

use crate::evaluator::{finite, nonzero, Evaluator};
use crate::validation::check_number;
use crate::{ModfysError, Result};

/// Which side of the barrier top the particle energy lies on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BarrierRegime {
    /// `e > u0`, oscillating solution inside the barrier
    AboveBarrier,
    /// `e <= u0`, classically forbidden, evanescent solution
    Tunneling,
}

impl BarrierRegime {
    /// Select the regime for a particle energy and barrier height
    pub fn select(e: f64, u0: f64) -> Self {
        if e > u0 {
            BarrierRegime::AboveBarrier
        } else {
            BarrierRegime::Tunneling
        }
    }
}

/// Both scattering coefficients from one evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarrierScattering {
    /// Branch the coefficients were computed from
    pub regime: BarrierRegime,
    /// Transmission coefficient
    pub transmission: f64,
    /// Reflection coefficient
    pub reflection: f64,
}

impl Evaluator {
    /// Evaluate transmission and reflection together
    pub fn barrier_scattering(&self, m: f64, a: f64, u0: f64, e: f64) -> Result<BarrierScattering> {
        let m = check_number(m)?;
        let a = check_number(a)?;
        let u0 = check_number(u0)?;
        let e = check_number(e)?;

        if m <= 0.0 || e < 0.0 {
            log::warn!("Barrier scattering needs m > 0 and e >= 0, got m = {m}, e = {e}");
            return Err(ModfysError::OutOfDomain);
        }
        nonzero(u0)?;
        let wave = 2.0 * PI * a / self.constants().h;
        let regime = BarrierRegime::select(e, u0);

        let (oscillation, kinetic) = match regime {
            BarrierRegime::AboveBarrier => (
                ((2.0 * m * (e - u0)).sqrt() * wave).sin().powi(2),
                (4.0 * e * (e / u0 - 1.0)) / u0,
            ),
            BarrierRegime::Tunneling => (
                ((2.0 * m * (u0 - e)).sqrt() * wave).sinh().powi(2),
                (4.0 * e * (1.0 - e / u0)) / u0,
            ),
        };

        // s = ∞ leaves q/s below the smallest subnormal
        if oscillation.is_infinite() && kinetic.is_finite() {
            return Ok(BarrierScattering {
                regime,
                transmission: 1.0,
                reflection: 0.0,
            });
        }

        let denominator = nonzero(oscillation + kinetic)?;
        Ok(BarrierScattering {
            regime,
            transmission: finite(oscillation / denominator)?,
            reflection: finite(kinetic / denominator)?,
        })
    }

    /// Transmission coefficient for a rectangular barrier
    pub fn transmission_coefficient(&self, m: f64, a: f64, u0: f64, e: f64) -> Result<f64> {
        self.barrier_scattering(m, a, u0, e)
            .map(|scattering| scattering.transmission)
    }

    /// Reflection coefficient for a rectangular barrier
    pub fn reflection_coefficient(&self, m: f64, a: f64, u0: f64, e: f64) -> Result<f64> {
        self.barrier_scattering(m, a, u0, e)
            .map(|scattering| scattering.reflection)
    }
}

/// Barrier scattering with the course constants
pub fn barrier_scattering(m: f64, a: f64, u0: f64, e: f64) -> Result<BarrierScattering> {
    Evaluator::default().barrier_scattering(m, a, u0, e)
}

/// Transmission coefficient with the course constants
pub fn transmission_coefficient(m: f64, a: f64, u0: f64, e: f64) -> Result<f64> {
    Evaluator::default().transmission_coefficient(m, a, u0, e)
}

/// Reflection coefficient with the course constants
pub fn reflection_coefficient(m: f64, a: f64, u0: f64, e: f64) -> Result<f64> {
    Evaluator::default().reflection_coefficient(m, a, u0, e)
}
