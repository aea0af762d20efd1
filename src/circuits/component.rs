use std::fmt;

use crate::math::Scalar;

/// Named component record held by a [`ComponentRegistry`](super::registry::ComponentRegistry).
///
/// `kind` is a free-text tag such as `"resistor"`. It is never validated and
/// only serves as a filter key; the unit of `value` is implied by it.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    kind: String,
    value: Scalar,
}

impl Component {
    /// Creates a component.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: impl Into<String>, value: Scalar) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            value,
        }
    }

    /// Human-readable identifier (e.g. `R1`).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Category tag.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Numeric magnitude.
    #[must_use]
    pub const fn value(&self) -> Scalar {
        self.value
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.name, self.kind, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_listing_format() {
        let c = Component::new("R1", "resistor", 100.5);
        assert_eq!(c.to_string(), "R1 (resistor): 100.5");
    }

    #[test]
    fn accessors_return_fields() {
        let c = Component::new("C1", "capacitor", 1e-6);
        assert_eq!(c.name(), "C1");
        assert_eq!(c.kind(), "capacitor");
        assert_eq!(c.value(), 1e-6);
    }
}
