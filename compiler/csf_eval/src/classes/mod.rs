//! Class declarations and the program class registry.
//!
//! Classes are not lexically scoped the way variables are. Every top-level
//! class hangs off one implicit root, and nested classes hang off their
//! enclosing class. The registry stores declarations only; instance state is
//! created by the evaluator when a class is instantiated.

use std::rc::Rc;

use tracing::trace;

use crate::display::RedefinitionPolicy;
use crate::FunctionDefinition;
use csf_values::{duplicate_definition, SemanticError};

/// Name of the implicit root class that owns every top-level class.
pub const PROGRAM_CLASS: &str = "%program";

/// Upper bound on superclass chain walks; a longer chain must be cyclic.
const MAX_INHERITANCE_DEPTH: usize = 256;

/// A class declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassDefinition {
    name: String,
    superclass: Option<String>,
    interfaces: Vec<String>,
    methods: Vec<Rc<FunctionDefinition>>,
    classes: Vec<Rc<ClassDefinition>>,
}

impl ClassDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        ClassDefinition {
            name: name.into(),
            superclass: None,
            interfaces: Vec::new(),
            methods: Vec::new(),
            classes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_superclass(mut self, name: impl Into<String>) -> Self {
        self.superclass = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_interface(mut self, name: impl Into<String>) -> Self {
        self.interfaces.push(name.into());
        self
    }

    #[must_use]
    pub fn with_method(mut self, method: FunctionDefinition) -> Self {
        self.methods.push(Rc::new(method));
        self
    }

    /// Nest `class` inside this one.
    #[must_use]
    pub fn with_class(mut self, class: ClassDefinition) -> Self {
        self.classes.push(Rc::new(class));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn superclass(&self) -> Option<&str> {
        self.superclass.as_deref()
    }

    pub fn interfaces(&self) -> &[String] {
        &self.interfaces
    }

    pub fn methods(&self) -> &[Rc<FunctionDefinition>] {
        &self.methods
    }

    pub fn classes(&self) -> &[Rc<ClassDefinition>] {
        &self.classes
    }

    /// Method declared directly on this class.
    pub fn find_method(&self, name: &str) -> Option<&Rc<FunctionDefinition>> {
        self.methods.iter().find(|m| m.name() == name)
    }

    /// Immediate nested class called `name`.
    pub fn find_class(&self, name: &str) -> Option<&Rc<ClassDefinition>> {
        self.classes.iter().find(|c| c.name == name)
    }

    /// Nested class called `name` at any depth, depth-first in declaration
    /// order.
    pub fn find_class_deep(&self, name: &str) -> Option<&Rc<ClassDefinition>> {
        self.classes.iter().find_map(|class| {
            if class.name == name {
                Some(class)
            } else {
                class.find_class_deep(name)
            }
        })
    }
}

/// Registry of all classes declared by a program.
#[derive(Debug)]
pub struct ClassRegistry {
    root: ClassDefinition,
}

impl ClassRegistry {
    pub fn new() -> Self {
        ClassRegistry {
            root: ClassDefinition::new(PROGRAM_CLASS),
        }
    }

    /// The implicit `%program` root.
    pub fn root(&self) -> &ClassDefinition {
        &self.root
    }

    /// Register a top-level class.
    pub fn add_class(
        &mut self,
        definition: ClassDefinition,
        policy: RedefinitionPolicy,
    ) -> Result<Rc<ClassDefinition>, SemanticError> {
        let existing = self
            .root
            .classes
            .iter()
            .position(|c| c.name == definition.name);
        if existing.is_some() && policy == RedefinitionPolicy::Reject {
            return Err(duplicate_definition("class", &definition.name));
        }
        trace!(name = %definition.name, "class added");
        let class = Rc::new(definition);
        match existing {
            Some(index) => self.root.classes[index] = Rc::clone(&class),
            None => self.root.classes.push(Rc::clone(&class)),
        }
        Ok(class)
    }

    /// Top-level class called `name`.
    pub fn find_class(&self, name: &str) -> Option<Rc<ClassDefinition>> {
        self.root.find_class(name).cloned()
    }

    /// Class called `name` anywhere in the nesting tree.
    pub fn find_class_deep(&self, name: &str) -> Option<Rc<ClassDefinition>> {
        self.root.find_class_deep(name).cloned()
    }

    /// Find `method` on `class` or the nearest superclass that declares it.
    ///
    /// Returns `None` when the chain names an unknown class or loops.
    pub fn resolve_method(&self, class: &str, method: &str) -> Option<Rc<FunctionDefinition>> {
        let mut current = self.find_class_deep(class)?;
        for _ in 0..MAX_INHERITANCE_DEPTH {
            if let Some(found) = current.find_method(method) {
                return Some(Rc::clone(found));
            }
            let parent = current.superclass()?;
            current = self.find_class_deep(parent)?;
        }
        None
    }

    /// Whether `class` or one of its superclasses declares `interface`.
    pub fn implements(&self, class: &str, interface: &str) -> bool {
        let Some(mut current) = self.find_class_deep(class) else {
            return false;
        };
        for _ in 0..MAX_INHERITANCE_DEPTH {
            if current.interfaces.iter().any(|i| i == interface) {
                return true;
            }
            let next = current
                .superclass()
                .and_then(|parent| self.find_class_deep(parent));
            match next {
                Some(parent) => current = parent,
                None => return false,
            }
        }
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rc<ClassDefinition>> {
        self.root.classes.iter()
    }

    pub fn len(&self) -> usize {
        self.root.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.classes.is_empty()
    }
}

impl Default for ClassRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
