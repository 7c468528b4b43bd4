//! Interface declarations.
//!
//! Interfaces are flat: there is no nesting, and a program declares few
//! enough of them that lookup is a linear scan in declaration order.

use std::rc::Rc;

use tracing::trace;

use crate::display::RedefinitionPolicy;
use csf_values::{duplicate_definition, SemanticError};

/// An interface: a name and the method names an implementing class provides.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterfaceDefinition {
    name: String,
    methods: Vec<String>,
}

impl InterfaceDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        InterfaceDefinition {
            name: name.into(),
            methods: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_method(mut self, name: impl Into<String>) -> Self {
        self.methods.push(name.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    pub fn declares(&self, method: &str) -> bool {
        self.methods.iter().any(|m| m == method)
    }
}

/// Ordered collection of the interfaces a program declares.
#[derive(Debug, Default)]
pub struct InterfaceRegistry {
    interfaces: Vec<Rc<InterfaceDefinition>>,
}

impl InterfaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &mut self,
        definition: InterfaceDefinition,
        policy: RedefinitionPolicy,
    ) -> Result<Rc<InterfaceDefinition>, SemanticError> {
        let interface = Rc::new(definition);
        match self.position(interface.name()) {
            Some(_) if policy == RedefinitionPolicy::Reject => {
                return Err(duplicate_definition("interface", interface.name()));
            }
            Some(index) => self.interfaces[index] = Rc::clone(&interface),
            None => self.interfaces.push(Rc::clone(&interface)),
        }
        trace!(name = interface.name(), "interface added");
        Ok(interface)
    }

    pub fn find(&self, name: &str) -> Option<Rc<InterfaceDefinition>> {
        self.position(name)
            .map(|index| Rc::clone(&self.interfaces[index]))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.interfaces.iter().position(|i| i.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rc<InterfaceDefinition>> {
        self.interfaces.iter()
    }

    pub fn len(&self) -> usize {
        self.interfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty()
    }
}

#[cfg(test)]
mod tests;
