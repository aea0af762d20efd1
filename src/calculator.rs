//! Headless calculator controller.
//!
//! [`Calculator`] accepts the raw text a front end collects, runs the circuit
//! math or registry operation, and returns values whose `Display` output is
//! the message to show the user. It owns its [`ComponentRegistry`].

use std::fmt;

use crate::circuits::aggregate::{equivalent, ConnectionKind, ElementKind};
use crate::circuits::ohms_law::{OhmsLaw, Quantity};
use crate::circuits::registry::ComponentRegistry;
use crate::errors::{CalculatorError, CalculatorResult};
use crate::input::{parse_list, parse_optional, parse_required};
use crate::math::Scalar;

/// Confirmation shown after a component is registered.
pub const COMPONENT_ADDED: &str = "Component added successfully.";

/// Presentation settings for rendered results.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorConfig {
    /// Digits after the decimal point; `None` prints the shortest exact form.
    pub precision: Option<usize>,
    /// Separator between entries of a value list.
    pub list_separator: char,
}

impl CalculatorConfig {
    /// Creates a configuration that rounds results to `digits` decimals.
    #[must_use]
    pub const fn with_precision(digits: usize) -> Self {
        Self {
            precision: Some(digits),
            list_separator: ',',
        }
    }

    /// Replaces the list separator.
    #[must_use]
    pub const fn separator(mut self, separator: char) -> Self {
        self.list_separator = separator;
        self
    }

    fn format(&self, value: Scalar) -> String {
        match self.precision {
            Some(digits) => format!("{value:.digits$}"),
            None => value.to_string(),
        }
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            precision: None,
            list_separator: ',',
        }
    }
}

/// Solved Ohm's-law unknown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OhmsLawResult {
    /// Which quantity was solved for.
    pub unknown: Quantity,
    /// Its value.
    pub value: Scalar,
    config: CalculatorConfig,
}

impl fmt::Display for OhmsLawResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Result: {}", self.config.format(self.value))
    }
}

/// Series and parallel totals for one element kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    /// Element family.
    pub kind: ElementKind,
    /// Equivalent value in series.
    pub series: Scalar,
    /// Equivalent value in parallel.
    pub parallel: Scalar,
}

impl Totals {
    fn compute(kind: ElementKind, values: &[Scalar]) -> CalculatorResult<Self> {
        Ok(Self {
            kind,
            series: equivalent(kind, ConnectionKind::Series, values)?,
            parallel: equivalent(kind, ConnectionKind::Parallel, values)?,
        })
    }
}

/// Six totals produced by [`Calculator::calculate_series_parallel`].
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesParallelReport {
    /// Resistor totals.
    pub resistance: Totals,
    /// Capacitor totals.
    pub capacitance: Totals,
    /// Inductor totals.
    pub inductance: Totals,
    config: CalculatorConfig,
}

impl SeriesParallelReport {
    /// Totals in display order.
    #[must_use]
    pub const fn totals(&self) -> [Totals; 3] {
        [self.resistance, self.capacitance, self.inductance]
    }
}

impl fmt::Display for SeriesParallelReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for totals in self.totals() {
            for (connection, value) in [
                (ConnectionKind::Series, totals.series),
                (ConnectionKind::Parallel, totals.parallel),
            ] {
                if !first {
                    f.write_str("\n")?;
                }
                first = false;
                write!(
                    f,
                    "Total {} ({connection}): {} {}",
                    totals.kind.quantity_name(),
                    self.config.format(value),
                    totals.kind.unit_symbol()
                )?;
            }
        }
        Ok(())
    }
}

/// Form controller owning a component registry.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    config: CalculatorConfig,
    registry: ComponentRegistry,
}

impl Calculator {
    /// Creates a calculator with an empty registry.
    #[must_use]
    pub fn new(config: CalculatorConfig) -> Self {
        Self::with_registry(config, ComponentRegistry::new())
    }

    /// Creates a calculator around an existing registry.
    #[must_use]
    pub const fn with_registry(config: CalculatorConfig, registry: ComponentRegistry) -> Self {
        Self { config, registry }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Registry of added components.
    #[must_use]
    pub const fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// Consumes the calculator, returning its registry.
    #[must_use]
    pub fn into_registry(self) -> ComponentRegistry {
        self.registry
    }

    /// Solves Ohm's law from three text fields, exactly one of which is blank.
    pub fn calculate_ohms_law(
        &self,
        voltage: &str,
        current: &str,
        resistance: &str,
    ) -> CalculatorResult<OhmsLawResult> {
        let outcome = self.solve_ohms_law(voltage, current, resistance);
        if let Err(err) = &outcome {
            log::warn!("ohm's law rejected: {err}");
        }
        outcome
    }

    fn solve_ohms_law(
        &self,
        voltage: &str,
        current: &str,
        resistance: &str,
    ) -> CalculatorResult<OhmsLawResult> {
        let problem = OhmsLaw::from_known(
            parse_optional("Voltage", voltage)?,
            parse_optional("Current", current)?,
            parse_optional("Resistance", resistance)?,
        )?;
        let value = problem.solve()?;
        log::debug!("ohm's law: {} = {value}", problem.unknown());
        Ok(OhmsLawResult {
            unknown: problem.unknown(),
            value,
            config: self.config,
        })
    }

    /// Computes series and parallel totals for three value lists.
    ///
    /// Every list feeds a reciprocal sum, so each must be non-empty and free of zeros.
    pub fn calculate_series_parallel(
        &self,
        resistors: &str,
        capacitors: &str,
        inductors: &str,
    ) -> CalculatorResult<SeriesParallelReport> {
        let outcome = self.aggregate(resistors, capacitors, inductors);
        if let Err(err) = &outcome {
            log::warn!("series/parallel rejected: {err}");
        }
        outcome
    }

    fn aggregate(
        &self,
        resistors: &str,
        capacitors: &str,
        inductors: &str,
    ) -> CalculatorResult<SeriesParallelReport> {
        let sep = self.config.list_separator;
        let resistors = parse_list("Resistors", resistors, sep)?;
        let capacitors = parse_list("Capacitors", capacitors, sep)?;
        let inductors = parse_list("Inductors", inductors, sep)?;

        let report = SeriesParallelReport {
            resistance: Totals::compute(ElementKind::Resistor, &resistors)?,
            capacitance: Totals::compute(ElementKind::Capacitor, &capacitors)?,
            inductance: Totals::compute(ElementKind::Inductor, &inductors)?,
            config: self.config,
        };
        log::debug!("series/parallel report: {:?}", report.totals());
        Ok(report)
    }

    /// Parses `value` and registers a component; returns the confirmation text.
    pub fn add_component(
        &mut self,
        name: &str,
        kind: &str,
        value: &str,
    ) -> CalculatorResult<&'static str> {
        let value = parse_required("Value", value).map_err(|err| {
            log::warn!("component {name:?} rejected: {err}");
            CalculatorError::from(err)
        })?;
        self.registry.add(name, kind, value);
        Ok(COMPONENT_ADDED)
    }

    /// Newline-separated listing of registered components.
    #[must_use]
    pub fn view_components(&self) -> String {
        self.registry.listing()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::circuits::InvalidInput;
    use crate::input::ParseError;

    #[test]
    fn ohms_law_from_text() {
        let calc = Calculator::default();
        let result = calc.calculate_ohms_law("10", "2", "").unwrap();
        assert_eq!(result.unknown, Quantity::Resistance);
        assert_relative_eq!(result.value, 5.0);
        assert_eq!(result.to_string(), "Result: 5");
    }

    #[test]
    fn precision_controls_rendering() {
        let calc = Calculator::new(CalculatorConfig::with_precision(3));
        let result = calc.calculate_ohms_law("1", "", "3").unwrap();
        assert_eq!(result.to_string(), "Result: 0.333");
    }

    #[test]
    fn parse_failure_is_not_invalid_input() {
        let calc = Calculator::default();
        let err = calc.calculate_ohms_law("ten", "2", "").unwrap_err();
        assert!(matches!(
            err,
            CalculatorError::Parse(ParseError::NotANumber { .. })
        ));
    }

    #[test]
    fn all_fields_filled_is_invalid_input() {
        let calc = Calculator::default();
        let err = calc.calculate_ohms_law("10", "2", "5").unwrap_err();
        assert_eq!(err, CalculatorError::InvalidInput(InvalidInput::Overdetermined));
    }

    #[test]
    fn series_parallel_report_lines() {
        let calc = Calculator::default();
        let report = calc
            .calculate_series_parallel("100,100", "2, 2", "4,4")
            .unwrap();
        assert_relative_eq!(report.resistance.series, 200.0);
        assert_relative_eq!(report.resistance.parallel, 50.0);
        assert_relative_eq!(report.capacitance.series, 1.0);
        assert_relative_eq!(report.capacitance.parallel, 4.0);
        assert_relative_eq!(report.inductance.series, 8.0);
        assert_relative_eq!(report.inductance.parallel, 2.0);
        assert_eq!(
            report.to_string(),
            "Total Resistance (Series): 200 Ω\n\
             Total Resistance (Parallel): 50 Ω\n\
             Total Capacitance (Series): 1 F\n\
             Total Capacitance (Parallel): 4 F\n\
             Total Inductance (Series): 8 H\n\
             Total Inductance (Parallel): 2 H"
        );
    }

    #[test]
    fn empty_list_fails_whole_report() {
        let calc = Calculator::default();
        let err = calc.calculate_series_parallel("1,2", "", "3").unwrap_err();
        assert_eq!(
            err,
            CalculatorError::InvalidInput(InvalidInput::EmptyReciprocalSum)
        );
    }

    #[test]
    fn custom_separator() {
        let calc = Calculator::new(CalculatorConfig::default().separator(';'));
        let report = calc.calculate_series_parallel("1;1", "1", "1").unwrap();
        assert_relative_eq!(report.resistance.parallel, 0.5);
    }

    #[test]
    fn add_and_view_components() {
        let mut calc = Calculator::default();
        assert_eq!(
            calc.add_component("R1", "resistor", "100").unwrap(),
            COMPONENT_ADDED
        );
        calc.add_component("L1", "inductor", "0.5").unwrap();
        assert_eq!(
            calc.view_components(),
            "R1 (resistor): 100\nL1 (inductor): 0.5"
        );
        assert_eq!(calc.registry().values_by_type("inductor"), vec![0.5]);
    }

    #[test]
    fn bad_component_value_leaves_registry_untouched() {
        let mut calc = Calculator::default();
        assert!(calc.add_component("R1", "resistor", "").is_err());
        assert!(calc.add_component("R1", "resistor", "1k").is_err());
        assert!(calc.registry().is_empty());
    }
}
