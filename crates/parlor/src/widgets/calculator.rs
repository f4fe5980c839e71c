//! Two-operand arithmetic.

use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Arithmetic operation, parsed from a name or a symbol.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Operation {
    /// a + b
    #[strum(serialize = "add", serialize = "+", to_string = "Add")]
    Add,
    /// a - b
    #[strum(serialize = "subtract", serialize = "-", to_string = "Subtract")]
    Subtract,
    /// a * b
    #[strum(
        serialize = "multiply",
        serialize = "*",
        serialize = "x",
        to_string = "Multiply"
    )]
    Multiply,
    /// a / b
    #[strum(serialize = "divide", serialize = "/", to_string = "Divide")]
    Divide,
}

/// Calculator failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CalcError {
    /// Divisor was zero.
    #[display("Error! Division by zero.")]
    DivisionByZero,
}

/// Applies `op` to `a` and `b`.
///
/// # Errors
///
/// Returns [`CalcError::DivisionByZero`] when dividing by zero.
#[instrument]
pub fn calculate(a: f64, b: f64, op: Operation) -> Result<f64, CalcError> {
    match op {
        Operation::Add => Ok(a + b),
        Operation::Subtract => Ok(a - b),
        Operation::Multiply => Ok(a * b),
        Operation::Divide if b == 0.0 => {
            warn!(a, "Division by zero");
            Err(CalcError::DivisionByZero)
        }
        Operation::Divide => Ok(a / b),
    }
}
