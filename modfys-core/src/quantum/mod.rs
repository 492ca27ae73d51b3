//! Introductory quantum mechanics
//!
//! Black-body radiation, scattering on a rectangular potential barrier and
//! the levels of a particle in a one-dimensional box.

pub mod barrier;
pub mod levels;
pub mod radiation;

pub use barrier::{
    barrier_scattering, reflection_coefficient, transmission_coefficient, BarrierRegime,
    BarrierScattering,
};
pub use levels::energy_level;
pub use radiation::planck_spectral_radiance;
