//! Principal quantum number

use core::num::NonZeroU32;

use crate::{ModfysError, Result};

/// A positive integer level index `n = 1, 2, 3, ...`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QuantumNumber(NonZeroU32);

impl QuantumNumber {
    /// The ground state, `n = 1`
    pub const GROUND: Self = Self(NonZeroU32::MIN);

    /// Create a quantum number, rejecting zero
    pub const fn new(n: u32) -> Result<Self> {
        match NonZeroU32::new(n) {
            Some(n) => Ok(Self(n)),
            None => Err(ModfysError::InvalidQuantumNumber),
        }
    }

    /// Get the level index
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl core::fmt::Display for QuantumNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for QuantumNumber {
    type Error = ModfysError;

    fn try_from(n: u32) -> Result<Self> {
        Self::new(n)
    }
}

impl TryFrom<u64> for QuantumNumber {
    type Error = ModfysError;

    fn try_from(n: u64) -> Result<Self> {
        let n = u32::try_from(n).map_err(|_| ModfysError::InvalidQuantumNumber)?;
        Self::new(n)
    }
}

impl TryFrom<i32> for QuantumNumber {
    type Error = ModfysError;

    fn try_from(n: i32) -> Result<Self> {
        let n = u32::try_from(n).map_err(|_| ModfysError::InvalidQuantumNumber)?;
        Self::new(n)
    }
}

impl TryFrom<i64> for QuantumNumber {
    type Error = ModfysError;

    fn try_from(n: i64) -> Result<Self> {
        let n = u32::try_from(n).map_err(|_| ModfysError::InvalidQuantumNumber)?;
        Self::new(n)
    }
}

impl TryFrom<f64> for QuantumNumber {
    type Error = ModfysError;

    fn try_from(n: f64) -> Result<Self> {
        if !n.is_finite() || n.fract() != 0.0 || n < 1.0 || n > u32::MAX as f64 {
            return Err(ModfysError::InvalidQuantumNumber);
        }
        Self::new(n as u32)
    }
}

impl TryFrom<&str> for QuantumNumber {
    type Error = ModfysError;

    fn try_from(text: &str) -> Result<Self> {
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ModfysError::InvalidQuantumNumber);
        }
        let n = text
            .parse::<u32>()
            .map_err(|_| ModfysError::InvalidQuantumNumber)?;
        Self::new(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        assert_eq!(QuantumNumber::new(1), Ok(QuantumNumber::GROUND));
        assert_eq!(QuantumNumber::new(3).map(QuantumNumber::get), Ok(3));
        assert_eq!(
            QuantumNumber::new(0),
            Err(ModfysError::InvalidQuantumNumber)
        );
    }

    #[test]
    fn test_try_from_integers() {
        assert_eq!(QuantumNumber::try_from(2i32).map(QuantumNumber::get), Ok(2));
        assert_eq!(QuantumNumber::try_from(7u64).map(QuantumNumber::get), Ok(7));
        assert_eq!(
            QuantumNumber::try_from(-1i32),
            Err(ModfysError::InvalidQuantumNumber)
        );
        assert_eq!(
            QuantumNumber::try_from(0i64),
            Err(ModfysError::InvalidQuantumNumber)
        );
        assert_eq!(
            QuantumNumber::try_from(u64::MAX),
            Err(ModfysError::InvalidQuantumNumber)
        );
    }

    #[test]
    fn test_try_from_float() {
        assert_eq!(QuantumNumber::try_from(4.0).map(QuantumNumber::get), Ok(4));
        assert_eq!(
            QuantumNumber::try_from(1.5),
            Err(ModfysError::InvalidQuantumNumber)
        );
        assert_eq!(
            QuantumNumber::try_from(0.0),
            Err(ModfysError::InvalidQuantumNumber)
        );
        assert_eq!(
            QuantumNumber::try_from(-2.0),
            Err(ModfysError::InvalidQuantumNumber)
        );
        assert_eq!(
            QuantumNumber::try_from(f64::NAN),
            Err(ModfysError::InvalidQuantumNumber)
        );
    }

    #[test]
    fn test_try_from_text() {
        assert_eq!(QuantumNumber::try_from("12").map(QuantumNumber::get), Ok(12));
        assert_eq!(
            QuantumNumber::try_from("0"),
            Err(ModfysError::InvalidQuantumNumber)
        );
        assert_eq!(
            QuantumNumber::try_from("-1"),
            Err(ModfysError::InvalidQuantumNumber)
        );
        assert_eq!(
            QuantumNumber::try_from("1.0"),
            Err(ModfysError::InvalidQuantumNumber)
        );
        assert_eq!(
            QuantumNumber::try_from(""),
            Err(ModfysError::InvalidQuantumNumber)
        );
    }
}
