//! Error types for modfys operations

/// Errors that can occur while validating inputs or evaluating formulas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModfysError {
    /// Input is not a finite number or a numeric string
    NotANumber,
    /// Velocity lies outside (-c, c]
    ExceedsLightSpeed,
    /// Lorentz factor is singular at v = c
    UndefinedAtLightSpeed,
    /// A formula denominator evaluated to zero
    DivisionByZero,
    /// An intermediate or final value left the representable range
    NumericOverflow,
    /// Quantum number is not a positive integer
    InvalidQuantumNumber,
    /// A number outside the physical domain of the formula, such as a negative mass
    OutOfDomain,
    /// Catalog key is unknown
    NotFound,
}

/// Coarse classification of [`ModfysError`] values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The input was rejected before any computation
    Validation,
    /// The input was accepted but the formula has no finite value there
    Singularity,
    /// A catalog key could not be resolved
    Lookup,
}

impl ModfysError {
    /// Get the category of this error
    pub const fn category(&self) -> ErrorCategory {
        match self {
            ModfysError::NotANumber
            | ModfysError::ExceedsLightSpeed
            | ModfysError::InvalidQuantumNumber
            | ModfysError::OutOfDomain => ErrorCategory::Validation,
            ModfysError::UndefinedAtLightSpeed
            | ModfysError::DivisionByZero
            | ModfysError::NumericOverflow => ErrorCategory::Singularity,
            ModfysError::NotFound => ErrorCategory::Lookup,
        }
    }
}

impl core::fmt::Display for ModfysError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            ModfysError::NotANumber => "Tried to enter something else than a number",
            ModfysError::ExceedsLightSpeed => {
                "Tried to enter a velocity higher than the speed of light"
            }
            ModfysError::UndefinedAtLightSpeed => {
                "Lorentz factor is undefined at the speed of light"
            }
            ModfysError::DivisionByZero => "Tried to divide by 0",
            ModfysError::NumericOverflow => "Result is outside the representable range",
            ModfysError::InvalidQuantumNumber => "n can only be a positive integer",
            ModfysError::OutOfDomain => "Input lies outside the physical domain of the formula",
            ModfysError::NotFound => "The requested name was not found",
        };
        write!(f, "{msg}")
    }
}

impl std::error::Error for ModfysError {}

/// Result type for modfys operations
pub type Result<T> = core::result::Result<T, ModfysError>;
