//! Shared error types used across submodules.

use thiserror::Error;

use crate::circuits::InvalidInput;
use crate::input::ParseError;

/// Top-level error type for the crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculatorError {
    /// Inputs were parsed but are ambiguous or mathematically undefined.
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),
    /// Form text could not be converted to numbers.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Result alias for calculator operations.
pub type CalculatorResult<T> = Result<T, CalculatorError>;
