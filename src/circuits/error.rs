use thiserror::Error;

use super::ohms_law::Quantity;

/// Raised when inputs are ambiguous or the requested value is mathematically undefined.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidInput {
    /// All three Ohm's-law quantities were given, so there is nothing to solve for.
    #[error("exactly one of voltage, current, or resistance must be left empty")]
    Overdetermined,
    /// Fewer than two Ohm's-law quantities were given.
    #[error("two of voltage, current, and resistance are required, got {known}")]
    Underdetermined {
        /// Number of quantities that were supplied.
        known: usize,
    },
    /// The quantity used as a divisor is zero.
    #[error("{quantity} cannot be zero when it is the divisor")]
    ZeroDivisor {
        /// Which quantity was zero.
        quantity: Quantity,
    },
    /// A reciprocal sum met a zero-valued element.
    #[error("value at position {index} is zero; reciprocal is undefined")]
    ZeroElement {
        /// Zero-based position of the offending value.
        index: usize,
    },
    /// A reciprocal sum was requested over no values.
    #[error("at least one value is required for a reciprocal sum")]
    EmptyReciprocalSum,
    /// The reciprocals cancelled out, leaving nothing to invert.
    #[error("reciprocals sum to zero; equivalent value is undefined")]
    ZeroReciprocalSum,
    /// The solved quantity does not fit in a finite `f64`.
    #[error("{quantity} is out of range")]
    OutOfRange {
        /// Which quantity overflowed.
        quantity: Quantity,
    },
}

/// Result alias for circuit computations.
pub type CircuitResult<T> = Result<T, InvalidInput>;
