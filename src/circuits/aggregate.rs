use std::fmt;

use crate::math::{first_zero, reciprocal_sum, Scalar};

use super::error::{CircuitResult, InvalidInput};

/// Connection topology for a group of same-kind elements.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionKind {
    /// Elements share one path.
    Series,
    /// Elements share both terminals.
    Parallel,
}

impl fmt::Display for ConnectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Series => f.write_str("Series"),
            Self::Parallel => f.write_str("Parallel"),
        }
    }
}

/// Passive element families that can be combined into an equivalent value.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Resistance in ohms.
    Resistor,
    /// Capacitance in farads.
    Capacitor,
    /// Inductance in henries.
    Inductor,
}

impl ElementKind {
    /// SI unit symbol of the element's value.
    #[must_use]
    pub const fn unit_symbol(self) -> &'static str {
        match self {
            Self::Resistor => "Ω",
            Self::Capacitor => "F",
            Self::Inductor => "H",
        }
    }

    /// Name of the aggregated quantity (e.g. `Resistance`).
    #[must_use]
    pub const fn quantity_name(self) -> &'static str {
        match self {
            Self::Resistor => "Resistance",
            Self::Capacitor => "Capacitance",
            Self::Inductor => "Inductance",
        }
    }

    /// True when this kind combines as a reciprocal sum for `connection`.
    ///
    /// Capacitors are the inverse of resistors and inductors.
    #[must_use]
    pub const fn is_reciprocal(self, connection: ConnectionKind) -> bool {
        matches!(
            (self, connection),
            (Self::Resistor | Self::Inductor, ConnectionKind::Parallel)
                | (Self::Capacitor, ConnectionKind::Series)
        )
    }
}

/// Arithmetic sum; zero for an empty slice.
#[must_use]
pub fn series_sum(values: &[Scalar]) -> Scalar {
    values.iter().sum()
}

/// Reciprocal of the sum of reciprocals, `1 / Σ(1/v)`.
///
/// Fails when any value is zero, when `values` is empty, or when the
/// reciprocals cancel out.
pub fn parallel_sum(values: &[Scalar]) -> CircuitResult<Scalar> {
    if let Some(index) = first_zero(values) {
        return Err(InvalidInput::ZeroElement { index });
    }
    if values.is_empty() {
        return Err(InvalidInput::EmptyReciprocalSum);
    }
    // Cancelling reciprocals invert to inf, or NaN when they overflowed first.
    let total = reciprocal_sum(values).recip();
    if !total.is_finite() {
        return Err(InvalidInput::ZeroReciprocalSum);
    }
    Ok(total)
}

/// Capacitors in series combine as a reciprocal sum.
pub fn capacitance_series(values: &[Scalar]) -> CircuitResult<Scalar> {
    parallel_sum(values)
}

/// Capacitors in parallel add.
#[must_use]
pub fn capacitance_parallel(values: &[Scalar]) -> Scalar {
    series_sum(values)
}

/// Equivalent value of `values` of one element kind connected per `connection`.
pub fn equivalent(
    kind: ElementKind,
    connection: ConnectionKind,
    values: &[Scalar],
) -> CircuitResult<Scalar> {
    if kind.is_reciprocal(connection) {
        parallel_sum(values)
    } else {
        Ok(series_sum(values))
    }
}

/// Total resistance of resistors in series.
#[must_use]
pub fn total_resistance_series(resistors: &[Scalar]) -> Scalar {
    series_sum(resistors)
}

/// Total resistance of resistors in parallel.
pub fn total_resistance_parallel(resistors: &[Scalar]) -> CircuitResult<Scalar> {
    parallel_sum(resistors)
}

/// Total capacitance of capacitors in series.
pub fn total_capacitance_series(capacitors: &[Scalar]) -> CircuitResult<Scalar> {
    capacitance_series(capacitors)
}

/// Total capacitance of capacitors in parallel.
#[must_use]
pub fn total_capacitance_parallel(capacitors: &[Scalar]) -> Scalar {
    capacitance_parallel(capacitors)
}

/// Total inductance of inductors in series.
#[must_use]
pub fn total_inductance_series(inductors: &[Scalar]) -> Scalar {
    series_sum(inductors)
}

/// Total inductance of inductors in parallel.
pub fn total_inductance_parallel(inductors: &[Scalar]) -> CircuitResult<Scalar> {
    parallel_sum(inductors)
}
