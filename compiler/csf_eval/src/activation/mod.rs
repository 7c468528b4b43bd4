//! Activation records: the live storage of one function instantiation.

use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::display::RedefinitionPolicy;
use crate::FunctionDefinition;
use csf_values::{
    argument_out_of_range, duplicate_definition, uninitialized_variable, SemanticError, Value,
};

/// Identity of an installed activation.
///
/// The display hands out a fresh id every time it installs an activation, so
/// a [`Reference`](crate::Reference) can tell whether the activation it was
/// issued for is still the one occupying its level.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ActivationId(pub(crate) u64);

#[derive(Clone, Debug)]
struct Slot {
    name: String,
    value: Option<Value>,
}

/// One live instantiation of a function or block.
///
/// Variables live in dense, append-only slots; the name table maps each
/// visible name to its slot. Removing a variable unmaps the name and clears
/// the slot, but never renumbers the remaining slots.
#[derive(Clone, Debug)]
pub struct Activation {
    definition: Rc<FunctionDefinition>,
    slot_numbers: FxHashMap<String, usize>,
    slots: Vec<Slot>,
    functions: Vec<Rc<FunctionDefinition>>,
}

impl Activation {
    /// Create an activation for `definition`, with one slot per parameter in
    /// declaration order.
    ///
    /// Parameter names must be distinct.
    pub fn new(definition: Rc<FunctionDefinition>) -> Result<Self, SemanticError> {
        let parameters = definition.parameters();
        for (index, parameter) in parameters.iter().enumerate() {
            if parameters[..index].contains(parameter) {
                return Err(duplicate_definition("parameter", parameter));
            }
        }
        Ok(Self::allocate(definition))
    }

    /// Activation with one slot per parameter, without checking for
    /// duplicates.
    pub(crate) fn allocate(definition: Rc<FunctionDefinition>) -> Self {
        let mut activation = Activation {
            slot_numbers: FxHashMap::default(),
            slots: Vec::with_capacity(definition.arity()),
            functions: Vec::new(),
            definition,
        };
        let parameters = activation.definition.parameters().to_vec();
        for parameter in parameters {
            activation.push_slot(parameter);
        }
        activation
    }

    pub fn definition(&self) -> &Rc<FunctionDefinition> {
        &self.definition
    }

    /// Static level this activation is installed at.
    pub fn level(&self) -> usize {
        self.definition.level()
    }

    fn push_slot(&mut self, name: String) -> usize {
        let slot = self.slots.len();
        self.slot_numbers.insert(name.clone(), slot);
        self.slots.push(Slot { name, value: None });
        slot
    }

    /// Bind the `index`th parameter.
    pub fn set_argument(&mut self, index: usize, value: Value) -> Result<(), SemanticError> {
        let arity = self.definition.arity();
        if index >= arity {
            return Err(argument_out_of_range(self.definition.name(), index, arity));
        }
        self.set_value(index, value)
    }

    /// Allocate a slot for `name` and return its number.
    pub fn define_variable(
        &mut self,
        name: &str,
        policy: RedefinitionPolicy,
    ) -> Result<usize, SemanticError> {
        if policy == RedefinitionPolicy::Reject && self.slot_numbers.contains_key(name) {
            return Err(duplicate_definition("variable", name));
        }
        Ok(self.push_slot(name.to_string()))
    }

    pub fn slot_number(&self, name: &str) -> Option<usize> {
        self.slot_numbers.get(name).copied()
    }

    pub fn slot_name(&self, slot: usize) -> Option<&str> {
        self.slots.get(slot).map(|s| s.name.as_str())
    }

    pub fn value(&self, slot: usize) -> Result<&Value, SemanticError> {
        match self.slots.get(slot) {
            Some(Slot {
                value: Some(value), ..
            }) => Ok(value),
            Some(Slot { name, value: None }) => Err(uninitialized_variable(name)),
            None => Err(self.missing_slot(slot)),
        }
    }

    pub fn set_value(&mut self, slot: usize, value: Value) -> Result<(), SemanticError> {
        match self.slots.get_mut(slot) {
            Some(s) => {
                s.value = Some(value);
                Ok(())
            }
            None => Err(self.missing_slot(slot)),
        }
    }

    #[cold]
    fn missing_slot(&self, slot: usize) -> SemanticError {
        SemanticError::new(format!(
            "slot {slot} does not exist in {}",
            self.definition.name()
        ))
    }

    /// Unmap `name`. Returns whether it was defined.
    pub fn remove_slot(&mut self, name: &str) -> bool {
        let Some(slot) = self.slot_numbers.remove(name) else {
            return false;
        };
        if let Some(s) = self.slots.get_mut(slot) {
            s.value = None;
        }
        true
    }

    /// Visible variable names, in slot order.
    pub fn slot_names(&self) -> Vec<String> {
        let mut visible: Vec<(usize, &String)> = self
            .slot_numbers
            .iter()
            .map(|(name, slot)| (*slot, name))
            .collect();
        visible.sort_unstable_by_key(|(slot, _)| *slot);
        visible.into_iter().map(|(_, name)| name.clone()).collect()
    }

    pub fn add_function(
        &mut self,
        definition: Rc<FunctionDefinition>,
        policy: RedefinitionPolicy,
    ) -> Result<(), SemanticError> {
        if let Some(index) = self.function_index(definition.name()) {
            if policy == RedefinitionPolicy::Reject {
                return Err(duplicate_definition("function", definition.name()));
            }
            self.functions.remove(index);
        }
        self.functions.push(definition);
        Ok(())
    }

    pub fn find_function(&self, name: &str) -> Option<&Rc<FunctionDefinition>> {
        self.functions.iter().find(|f| f.name() == name)
    }

    pub fn remove_function(&mut self, name: &str) -> Option<Rc<FunctionDefinition>> {
        self.function_index(name)
            .map(|index| self.functions.remove(index))
    }

    /// Functions declared in this activation, in declaration order.
    pub fn functions(&self) -> &[Rc<FunctionDefinition>] {
        &self.functions
    }

    fn function_index(&self, name: &str) -> Option<usize> {
        self.functions.iter().position(|f| f.name() == name)
    }
}
