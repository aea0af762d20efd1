use std::fmt;

use crate::math::Scalar;

use super::error::{CircuitResult, InvalidInput};

/// One of the three quantities related by Ohm's law.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    /// Potential difference in volts.
    Voltage,
    /// Current in amperes.
    Current,
    /// Resistance in ohms.
    Resistance,
}

impl Quantity {
    /// SI unit symbol.
    #[must_use]
    pub const fn unit_symbol(self) -> &'static str {
        match self {
            Self::Voltage => "V",
            Self::Current => "A",
            Self::Resistance => "Ω",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Voltage => "voltage",
            Self::Current => "current",
            Self::Resistance => "resistance",
        };
        f.write_str(name)
    }
}

/// Ohm's-law problem with exactly one unknown.
///
/// Each variant carries the two known values, so an over- or under-specified
/// problem cannot be represented.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OhmsLaw {
    /// `V = I * R`.
    SolveForVoltage {
        /// Current in amperes.
        current: Scalar,
        /// Resistance in ohms.
        resistance: Scalar,
    },
    /// `I = V / R`.
    SolveForCurrent {
        /// Voltage in volts.
        voltage: Scalar,
        /// Resistance in ohms.
        resistance: Scalar,
    },
    /// `R = V / I`.
    SolveForResistance {
        /// Voltage in volts.
        voltage: Scalar,
        /// Current in amperes.
        current: Scalar,
    },
}

impl OhmsLaw {
    /// Builds a problem from three optional values, exactly one of which must be `None`.
    pub fn from_known(
        voltage: Option<Scalar>,
        current: Option<Scalar>,
        resistance: Option<Scalar>,
    ) -> CircuitResult<Self> {
        match (voltage, current, resistance) {
            (None, Some(current), Some(resistance)) => Ok(Self::SolveForVoltage {
                current,
                resistance,
            }),
            (Some(voltage), None, Some(resistance)) => Ok(Self::SolveForCurrent {
                voltage,
                resistance,
            }),
            (Some(voltage), Some(current), None) => Ok(Self::SolveForResistance {
                voltage,
                current,
            }),
            (Some(_), Some(_), Some(_)) => Err(InvalidInput::Overdetermined),
            (v, i, r) => {
                let known = [v, i, r].iter().filter(|x| x.is_some()).count();
                Err(InvalidInput::Underdetermined { known })
            }
        }
    }

    /// The quantity this problem solves for.
    #[must_use]
    pub const fn unknown(&self) -> Quantity {
        match self {
            Self::SolveForVoltage { .. } => Quantity::Voltage,
            Self::SolveForCurrent { .. } => Quantity::Current,
            Self::SolveForResistance { .. } => Quantity::Resistance,
        }
    }

    /// Computes the unknown quantity.
    ///
    /// A zero divisor is reported as [`InvalidInput::ZeroDivisor`] and a result
    /// too large for `f64` as [`InvalidInput::OutOfRange`], so the value is
    /// always finite.
    pub fn solve(&self) -> CircuitResult<Scalar> {
        let value = match *self {
            Self::SolveForVoltage {
                current,
                resistance,
            } => current * resistance,
            Self::SolveForCurrent {
                voltage,
                resistance,
            } => divide(voltage, resistance, Quantity::Resistance)?,
            Self::SolveForResistance { voltage, current } => {
                divide(voltage, current, Quantity::Current)?
            }
        };
        if !value.is_finite() {
            return Err(InvalidInput::OutOfRange {
                quantity: self.unknown(),
            });
        }
        Ok(value)
    }
}

fn divide(numerator: Scalar, divisor: Scalar, quantity: Quantity) -> CircuitResult<Scalar> {
    if divisor == 0.0 {
        return Err(InvalidInput::ZeroDivisor { quantity });
    }
    Ok(numerator / divisor)
}

/// Solves Ohm's law for whichever of the three arguments is `None`.
pub fn ohms_law(
    voltage: Option<Scalar>,
    current: Option<Scalar>,
    resistance: Option<Scalar>,
) -> CircuitResult<Scalar> {
    let problem = OhmsLaw::from_known(voltage, current, resistance)?;
    let value = problem.solve()?;
    log::debug!("ohm's law: {} = {value}", problem.unknown());
    Ok(value)
}
