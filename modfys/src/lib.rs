//! modfys - modern physics calculator
//!
//! Closed-form formulas from special relativity and introductory quantum
//! mechanics, plus a reference catalog of the Standard Model.
//!
//! ## Architecture
//!
//! modfys follows a core/implementation split:
//!
//! - **modfys-core**: constants, validators and formulas (pure, no I/O)
//! - **modfys**: catalog loading, lookups, configuration and the calculator facade
//!
//! ## Quick Start
//!
//! ```rust
//! use modfys::{Calculator, SPEED_OF_LIGHT};
//!
//! fn example() -> modfys::Result<()> {
//!     let calculator = Calculator::standard_model()?;
//!
//!     let gamma = calculator.evaluator().lorentz_factor(0.9 * SPEED_OF_LIGHT)?;
//!     println!("γ = {gamma}");
//!
//!     // Particle records render as ordered JSON
//!     println!("{}", calculator.lookup("e"));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Features
//!
//! - **Validated inputs**: numeric and velocity checks with a typed error on rejection
//! - **Relativity**: Lorentz factor, time dilation, length contraction, energy, momentum, velocity addition
//! - **Quantum mechanics**: Planck's law, barrier transmission/reflection, box energy levels
//! - **Catalog**: particles and interactions by symbol or name

// Re-export core abstractions and formulas
pub use modfys_core::{
    // Constants
    PhysicalConstants, BOLTZMANN, PLANCK, SPEED_OF_LIGHT,
    // Error handling
    ErrorCategory, ModfysError,
    // Validation
    check_number, check_speed, check_speed_with, is_numeric, is_numeric_literal, is_valid_speed,
    NumericInput, QuantumNumber,
    // Formulas
    barrier_scattering, energy_level, length_contraction, lorentz_factor,
    planck_spectral_radiance, reflection_coefficient, relative_velocity, relativistic_energy,
    relativistic_kinetic_energy, relativistic_momentum, time_dilation, transmission_coefficient,
    BarrierRegime, BarrierScattering, Evaluator,
};

// Implementation modules
pub mod calculator;
pub mod catalog;
pub mod config;
pub mod error;
pub mod lookup;

// Public exports
pub use calculator::Calculator;
pub use catalog::{Catalog, InteractionRecord, ParticleClass, ParticleKind, ParticleRecord};
pub use config::{CatalogSource, ModfysConfig};
pub use error::{Error, Result};
pub use lookup::{Lookup, INTERACTIONS_KEY, NOT_FOUND_GUIDANCE, PARTICLES_KEY};
