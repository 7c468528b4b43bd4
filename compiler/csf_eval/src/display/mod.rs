//! The display: run-time access to variables in statically nested scopes.
//!
//! The display holds exactly one active [`Activation`] per static nesting
//! level. Level `n` is always the activation currently running for the
//! function whose body sits at lexical depth `n`, so a name resolves by
//! scanning from the current level down to 0. Because a function's slots
//! live at its declared level, this scan is lexical scoping without closure
//! objects.
//!
//! Calling a function installs its activation at the function's own level,
//! not on top of the stack. Whatever occupied that level is saved and put
//! back when the call returns, which keeps a recursive caller's locals intact.

mod builder;
mod guard;
mod reference;

use std::rc::Rc;

use tracing::{trace, warn};

use crate::{
    ensure_sufficient_stack, Activation, ActivationId, ClassDefinition, ClassRegistry,
    Evaluator, FunctionDefinition, InterfaceDefinition, InterfaceRegistry, MAIN_FUNCTION,
};
use csf_values::{
    constant_assignment, nesting_limit_exceeded, stale_reference, undefined_class,
    undefined_function, undefined_interface, undefined_variable, EvalResult, SemanticError,
    Value,
};
use guard::ActivationGuard;

pub use builder::{DisplayBuilder, RedefinitionPolicy, DEFAULT_MAX_DEPTH};
pub use reference::Reference;

/// An installed activation and the id references check against.
#[derive(Debug)]
struct Frame {
    id: ActivationId,
    activation: Activation,
}

/// Environment stack indexed by static nesting level.
///
/// Each interpreter owns its own `Display`, including its class and interface
/// registries. Nothing here is shared between instances.
#[derive(Debug)]
pub struct Display {
    frames: Vec<Option<Frame>>,
    current_level: usize,
    next_activation: u64,
    max_depth: usize,
    redefinition: RedefinitionPolicy,
    classes: ClassRegistry,
    interfaces: InterfaceRegistry,
}

impl Display {
    /// Create a display with the default limits and level 0 occupied by the
    /// implicit main function.
    pub fn new() -> Self {
        DisplayBuilder::new().build()
    }

    pub fn builder() -> DisplayBuilder {
        DisplayBuilder::new()
    }

    fn with_config(max_depth: usize, redefinition: RedefinitionPolicy) -> Self {
        let main = Activation::allocate(Rc::new(FunctionDefinition::new(MAIN_FUNCTION, 0)));
        let mut display = Display {
            frames: Vec::with_capacity(max_depth.min(DEFAULT_MAX_DEPTH)),
            current_level: 0,
            next_activation: 0,
            max_depth,
            redefinition,
            classes: ClassRegistry::new(),
            interfaces: InterfaceRegistry::new(),
        };
        let frame = display.frame(main);
        display.frames.push(Some(frame));
        display
    }

    /// Level of the innermost running activation.
    pub fn level(&self) -> usize {
        self.current_level
    }

    /// Number of static levels this display can hold.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn redefinition_policy(&self) -> RedefinitionPolicy {
        self.redefinition
    }

    fn frame(&mut self, activation: Activation) -> Frame {
        let id = ActivationId(self.next_activation);
        self.next_activation = self.next_activation.wrapping_add(1);
        Frame { id, activation }
    }

    fn check_level(&self, level: usize) -> Result<(), SemanticError> {
        if level < self.max_depth {
            Ok(())
        } else {
            warn!(level, max = self.max_depth, "function nesting limit exceeded");
            Err(nesting_limit_exceeded(level, self.max_depth))
        }
    }

    fn installed(&self, level: usize) -> Option<&Frame> {
        self.frames.get(level).and_then(Option::as_ref)
    }

    fn current(&self) -> Option<&Frame> {
        self.installed(self.current_level)
    }

    fn current_mut(&mut self) -> Result<&mut Frame, SemanticError> {
        let level = self.current_level;
        self.frames
            .get_mut(level)
            .and_then(Option::as_mut)
            .ok_or_else(|| SemanticError::new(format!("no activation at level {level}")))
    }

    /// The activation running at `level`, if any.
    pub fn activation(&self, level: usize) -> Option<&Activation> {
        self.installed(level).map(|frame| &frame.activation)
    }

    // Execution

    /// Level a function declared in the current scope runs at.
    pub fn nested_level(&self) -> Result<usize, SemanticError> {
        let level = self.current_level + 1;
        self.check_level(level)?;
        Ok(level)
    }

    /// Run `activation` at its static level.
    ///
    /// The activation replaces the current occupant of its level for the
    /// duration of the call. The previous occupant and the previous current
    /// level are restored afterwards, whether the evaluator returns a value
    /// or an error.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(function = %activation.definition().name(), level = activation.level())
    )]
    pub fn execute<E>(&mut self, activation: Activation, evaluator: &mut E) -> EvalResult
    where
        E: Evaluator + ?Sized,
    {
        let level = activation.level();
        self.check_level(level)?;
        let definition = Rc::clone(activation.definition());
        let frame = self.frame(activation);
        let mut guard = ActivationGuard::install(self, level, frame);
        ensure_sufficient_stack(|| evaluator.evaluate(&mut guard, &definition))
    }

    // Variables

    /// Find the innermost variable called `name`, searching from the current
    /// level down to level 0.
    pub fn resolve_variable(&self, name: &str) -> Option<Reference> {
        for depth in (0..=self.current_level).rev() {
            let Some(frame) = self.installed(depth) else {
                continue;
            };
            if let Some(slot) = frame.activation.slot_number(name) {
                return Some(Reference {
                    depth,
                    slot,
                    activation: frame.id,
                });
            }
        }
        trace!(name, level = self.current_level, "variable not found");
        None
    }

    /// Resolve `name` and read it, failing if it is not in scope.
    pub fn lookup(&self, name: &str) -> EvalResult {
        let reference = self
            .resolve_variable(name)
            .ok_or_else(|| undefined_variable(name))?;
        self.get(reference)
    }

    /// Allocate a variable in the current activation.
    pub fn define_variable(&mut self, name: &str) -> Result<Reference, SemanticError> {
        let policy = self.redefinition;
        let depth = self.current_level;
        let frame = self.current_mut()?;
        let slot = frame.activation.define_variable(name, policy)?;
        trace!(name, depth, slot, "variable defined");
        Ok(Reference {
            depth,
            slot,
            activation: frame.id,
        })
    }

    /// Names of the variables defined in the current activation only.
    pub fn accessible_variables(&self) -> Vec<String> {
        self.current()
            .map(|frame| frame.activation.slot_names())
            .unwrap_or_default()
    }

    /// Remove a variable from the current activation. Returns whether it
    /// existed there.
    pub fn remove_variable(&mut self, name: &str) -> bool {
        let removed = self
            .current_mut()
            .is_ok_and(|frame| frame.activation.remove_slot(name));
        if removed {
            trace!(name, level = self.current_level, "variable removed");
        }
        removed
    }

    fn referenced(&self, reference: Reference) -> Result<&Frame, SemanticError> {
        match self.installed(reference.depth) {
            Some(frame) if frame.id == reference.activation => Ok(frame),
            _ => {
                warn!(depth = reference.depth, "stale reference");
                Err(stale_reference(reference.depth))
            }
        }
    }

    fn referenced_mut(&mut self, reference: Reference) -> Result<&mut Frame, SemanticError> {
        match self.frames.get_mut(reference.depth).and_then(Option::as_mut) {
            Some(frame) if frame.id == reference.activation => Ok(frame),
            _ => {
                warn!(depth = reference.depth, "stale reference");
                Err(stale_reference(reference.depth))
            }
        }
    }

    pub fn get(&self, reference: Reference) -> EvalResult {
        let frame = self.referenced(reference)?;
        frame.activation.value(reference.slot).cloned()
    }

    /// Store through `reference` without checking constness.
    pub fn set(&mut self, reference: Reference, value: Value) -> Result<(), SemanticError> {
        let frame = self.referenced_mut(reference)?;
        frame.activation.set_value(reference.slot, value)
    }

    /// Store through `reference`, refusing to overwrite a const value.
    pub fn assign(&mut self, reference: Reference, value: Value) -> Result<(), SemanticError> {
        let frame = self.referenced_mut(reference)?;
        let activation = &mut frame.activation;
        if let Ok(current) = activation.value(reference.slot) {
            if current.is_const() {
                let name = activation.slot_name(reference.slot).unwrap_or_default();
                return Err(constant_assignment(name));
            }
        }
        activation.set_value(reference.slot, value)
    }

    // Functions

    /// Find a function, searching from the current level down to level 0.
    pub fn find_function(&self, name: &str) -> Option<Rc<FunctionDefinition>> {
        (0..=self.current_level)
            .rev()
            .filter_map(|depth| self.installed(depth))
            .find_map(|frame| frame.activation.find_function(name))
            .cloned()
    }

    pub fn find_function_or_err(&self, name: &str) -> Result<Rc<FunctionDefinition>, SemanticError> {
        self.find_function(name)
            .ok_or_else(|| undefined_function(name))
    }

    pub fn find_function_in_current_level(&self, name: &str) -> Option<Rc<FunctionDefinition>> {
        self.current()
            .and_then(|frame| frame.activation.find_function(name))
            .cloned()
    }

    /// Add a function to the current activation.
    pub fn add_function(&mut self, definition: Rc<FunctionDefinition>) -> Result<(), SemanticError> {
        let policy = self.redefinition;
        let level = self.current_level;
        trace!(name = definition.name(), level, "function added");
        self.current_mut()?
            .activation
            .add_function(definition, policy)
    }

    /// Declare a function in the current scope. Its body runs one level
    /// deeper than the declaration.
    pub fn define_function<I, S>(
        &mut self,
        name: &str,
        parameters: I,
    ) -> Result<Rc<FunctionDefinition>, SemanticError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let level = self.nested_level()?;
        let definition = Rc::new(FunctionDefinition::new(name, level).with_parameters(parameters));
        self.add_function(Rc::clone(&definition))?;
        Ok(definition)
    }

    pub fn remove_function(&mut self, name: &str) -> Option<Rc<FunctionDefinition>> {
        self.current_mut()
            .ok()
            .and_then(|frame| frame.activation.remove_function(name))
    }

    /// Functions declared in the current activation only.
    pub fn accessible_functions(&self) -> Vec<Rc<FunctionDefinition>> {
        self.current()
            .map(|frame| frame.activation.functions().to_vec())
            .unwrap_or_default()
    }

    // Classes

    pub fn find_class(&self, name: &str) -> Option<Rc<ClassDefinition>> {
        self.classes.find_class(name)
    }

    pub fn find_class_deep(&self, name: &str) -> Option<Rc<ClassDefinition>> {
        self.classes.find_class_deep(name)
    }

    pub fn find_class_or_err(&self, name: &str) -> Result<Rc<ClassDefinition>, SemanticError> {
        self.find_class_deep(name)
            .ok_or_else(|| undefined_class(name))
    }

    pub fn add_class(
        &mut self,
        definition: ClassDefinition,
    ) -> Result<Rc<ClassDefinition>, SemanticError> {
        self.classes.add_class(definition, self.redefinition)
    }

    pub fn classes(&self) -> &ClassRegistry {
        &self.classes
    }

    // Interfaces

    pub fn find_interface(&self, name: &str) -> Option<Rc<InterfaceDefinition>> {
        self.interfaces.find(name)
    }

    pub fn find_interface_or_err(
        &self,
        name: &str,
    ) -> Result<Rc<InterfaceDefinition>, SemanticError> {
        self.find_interface(name)
            .ok_or_else(|| undefined_interface(name))
    }

    pub fn add_interface(
        &mut self,
        definition: InterfaceDefinition,
    ) -> Result<Rc<InterfaceDefinition>, SemanticError> {
        self.interfaces.add(definition, self.redefinition)
    }

    pub fn interfaces(&self) -> &InterfaceRegistry {
        &self.interfaces
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}
