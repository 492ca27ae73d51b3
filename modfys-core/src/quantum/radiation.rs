//! Planck's law for black-body radiation

use crate::evaluator::{finite, nonzero, Evaluator};
use crate::validation::check_number;
use crate::Result;

impl Evaluator {
    /// Spectral radiance I = 2hf³ / (c²·(e^(hf/kT) − 1))
    ///
    /// `f` is the frequency and `t` the absolute temperature. A zero
    /// temperature or zero frequency makes a denominator vanish and is
    /// reported as [`crate::ModfysError::DivisionByZero`]; an exponent too
    /// large for `f64` is [`crate::ModfysError::NumericOverflow`].
    pub fn planck_spectral_radiance(&self, f: f64, t: f64) -> Result<f64> {
        let f = check_number(f)?;
        let t = check_number(t)?;
        let constants = self.constants();

        let thermal = nonzero(constants.k * t)?;
        let exponent = (constants.h * f) / thermal;

        // e^x - 1 without cancellation in the Rayleigh-Jeans regime
        let occupation = finite(exponent.exp_m1())?;
        let denominator = nonzero(constants.c.powi(2) * occupation)?;

        finite((2.0 * constants.h * f.powi(3)) / denominator)
    }
}

/// Planck's law with the course constants
pub fn planck_spectral_radiance(f: f64, t: f64) -> Result<f64> {
    Evaluator::default().planck_spectral_radiance(f, t)
}
