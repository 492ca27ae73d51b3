//! Input validation for the formula layer
//!
//! Every check returns a definite `Result`; rejections are also logged at
//! `warn` so an interactive session sees why a value was refused.

pub mod numeric;
pub mod quantum_number;
pub mod speed;

pub use numeric::{check_number, is_numeric, is_numeric_literal, NumericInput};
pub use quantum_number::QuantumNumber;
pub use speed::{check_speed, check_speed_with, is_valid_speed};
