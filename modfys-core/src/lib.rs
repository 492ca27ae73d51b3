//! modfys core - validated modern physics formulas
//!
//! This crate provides the input validators and the closed-form formulas of
//! a first modern physics course: special relativity and introductory
//! quantum mechanics. Every function is pure and returns a [`Result`];
//! nothing is computed on rejected input.
//!
//! ```
//! use modfys_core::{lorentz_factor, ModfysError, SPEED_OF_LIGHT};
//!
//! let gamma = lorentz_factor(0.6 * SPEED_OF_LIGHT).unwrap();
//! assert!((gamma - 1.25).abs() < 1e-12);
//! assert_eq!(lorentz_factor(SPEED_OF_LIGHT), Err(ModfysError::UndefinedAtLightSpeed));
//! ```

pub mod constants;
pub mod error;
pub mod evaluator;
pub mod quantum;
pub mod relativity;
pub mod validation;

#[cfg(test)]
mod test_util;

pub use constants::*;
pub use error::*;
pub use evaluator::Evaluator;
pub use quantum::*;
pub use relativity::*;
pub use validation::*;
