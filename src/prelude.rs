//! Convenience re-exports for front ends and scripts.

pub use crate::calculator::{
    Calculator, CalculatorConfig, OhmsLawResult, SeriesParallelReport, Totals, COMPONENT_ADDED,
};
pub use crate::circuits::aggregate::{
    capacitance_parallel, capacitance_series, equivalent, parallel_sum, series_sum,
    total_capacitance_parallel, total_capacitance_series, total_inductance_parallel,
    total_inductance_series, total_resistance_parallel, total_resistance_series, ConnectionKind,
    ElementKind,
};
pub use crate::circuits::{ohms_law, Component, ComponentRegistry, InvalidInput, OhmsLaw, Quantity};
pub use crate::errors::{CalculatorError, CalculatorResult};
pub use crate::input::{parse_list, parse_optional, parse_required, ParseError};
pub use crate::math::Scalar;
