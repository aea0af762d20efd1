use crate::math::Scalar;

use super::component::Component;

/// Append-only, insertion-ordered collection of [`Component`] records.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentRegistry {
    components: Vec<Component>,
}

impl ComponentRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            components: Vec::new(),
        }
    }

    /// Appends a component. Names need not be unique.
    pub fn add(&mut self, name: impl Into<String>, kind: impl Into<String>, value: Scalar) {
        let component = Component::new(name, kind, value);
        log::debug!("registered component {component}");
        self.components.push(component);
    }

    /// All components in insertion order.
    #[must_use]
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Iterates over components in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Component> {
        self.components.iter()
    }

    /// Formatted records, `"{name} ({type}): {value}"`, in insertion order.
    #[must_use]
    pub fn list_all(&self) -> Vec<String> {
        self.components.iter().map(ToString::to_string).collect()
    }

    /// Newline-separated listing of every record.
    #[must_use]
    pub fn listing(&self) -> String {
        self.list_all().join("\n")
    }

    /// Values of every component whose type matches `kind` exactly.
    #[must_use]
    pub fn values_by_type(&self, kind: &str) -> Vec<Scalar> {
        self.components
            .iter()
            .filter(|c| c.kind() == kind)
            .map(Component::value)
            .collect()
    }

    /// Returns the number of registered components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns true when no components are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl<'a> IntoIterator for &'a ComponentRegistry {
    type Item = &'a Component;
    type IntoIter = std::slice::Iter<'a, Component>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
