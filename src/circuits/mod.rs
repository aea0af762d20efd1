//! Ohm's law and series/parallel aggregation, plus the component registry.

/// Series/parallel equivalent values for resistors, capacitors, and inductors.
pub mod aggregate;
/// Named component records.
pub mod component;
/// The single error kind raised by circuit computations.
pub mod error;
/// Ohm's-law solving with exactly one unknown.
pub mod ohms_law;
/// Insertion-ordered component collection.
pub mod registry;

pub use aggregate::{
    capacitance_parallel, capacitance_series, equivalent, parallel_sum, series_sum,
    ConnectionKind, ElementKind,
};
pub use component::Component;
pub use error::{CircuitResult, InvalidInput};
pub use ohms_law::{ohms_law, OhmsLaw, Quantity};
pub use registry::ComponentRegistry;
