//! Particle in a one-dimensional box

use crate::evaluator::{finite, nonzero, Evaluator};
use crate::validation::{check_number, QuantumNumber};
use crate::{ModfysError, Result};

impl Evaluator {
    /// Energy of level `n` for mass `m` in a box of width `a`
    ///
    /// Eₙ = (n·h)² / (8·m·a²). `n` accepts anything convertible into a
    /// [`QuantumNumber`]; zero, negative or fractional values fail with
    /// [`ModfysError::InvalidQuantumNumber`].
    pub fn energy_level<N>(&self, m: f64, a: f64, n: N) -> Result<f64>
    where
        N: TryInto<QuantumNumber>,
    {
        let m = check_number(m)?;
        let a = check_number(a)?;
        let n = n.try_into().map_err(|_| {
            log::warn!("n can only be a positive integer");
            ModfysError::InvalidQuantumNumber
        })?;

        let denominator = nonzero(8.0 * m * a.powi(2))?;
        finite((n.get() as f64 * self.constants().h).powi(2) / denominator)
    }
}

/// Box energy level with the course constants
pub fn energy_level<N>(m: f64, a: f64, n: N) -> Result<f64>
where
    N: TryInto<QuantumNumber>,
{
    Evaluator::default().energy_level(m, a, n)
}
