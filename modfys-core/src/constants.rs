//! Physical constants used by the formula layer
//!
//! The defaults are the rounded values of the course formula sheet, so
//! results line up with hand calculations. [`PhysicalConstants::CODATA`]
//! carries the exact SI values for callers that want them.

/// Speed of light in vacuum (m/s), course value
pub const SPEED_OF_LIGHT: f64 = 3e8;

/// Planck's constant (J·s), course value
pub const PLANCK: f64 = 6.62618e-34;

/// Boltzmann's constant (J/K), course value
pub const BOLTZMANN: f64 = 1.38065e-23;

/// The set of constants a formula evaluation runs against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    /// Speed of light `c`
    pub c: f64,
    /// Planck's constant `h`
    pub h: f64,
    /// Boltzmann's constant `k`
    pub k: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::COURSE
    }
}

impl PhysicalConstants {
    /// Rounded course values (c = 3e8)
    pub const COURSE: Self = Self {
        c: SPEED_OF_LIGHT,
        h: PLANCK,
        k: BOLTZMANN,
    };

    /// Exact SI values (2019 redefinition)
    pub const CODATA: Self = Self {
        c: 299_792_458.0,
        h: 6.626_070_15e-34,
        k: 1.380_649e-23,
    };

    /// Set the speed of light
    pub const fn with_speed_of_light(mut self, c: f64) -> Self {
        self.c = c;
        self
    }

    /// Set Planck's constant
    pub const fn with_planck(mut self, h: f64) -> Self {
        self.h = h;
        self
    }

    /// Set Boltzmann's constant
    pub const fn with_boltzmann(mut self, k: f64) -> Self {
        self.k = k;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_course_values() {
        let constants = PhysicalConstants::default();
        assert_eq!(constants.c, 3e8);
        assert_eq!(constants.h, 6.62618e-34);
        assert_eq!(constants.k, 1.38065e-23);
    }

    #[test]
    fn test_builders() {
        let constants = PhysicalConstants::COURSE
            .with_speed_of_light(1.0)
            .with_planck(2.0)
            .with_boltzmann(3.0);
        assert_eq!(
            constants,
            PhysicalConstants {
                c: 1.0,
                h: 2.0,
                k: 3.0
            }
        );
        assert_ne!(PhysicalConstants::CODATA, PhysicalConstants::COURSE);
    }
}
