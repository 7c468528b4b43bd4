#![allow(
    clippy::result_large_err,
    reason = "SemanticError is the only error type; boxing it buys nothing here"
)]
//! `csf_eval` - scope resolution and activation management.
//!
//! This crate is the environment core of the tree-walking interpreter. The
//! parser and statement walker live elsewhere and plug in through the
//! [`Evaluator`] trait.
//!
//! # Architecture
//!
//! - `Display`: one active [`Activation`] per static nesting level, giving
//!   direct access to every lexically enclosing scope by level number
//! - `Reference`: a (level, slot) handle checked against the activation that
//!   issued it
//! - `ClassRegistry` / `InterfaceRegistry`: declarations, owned per `Display`
//!
//! Values and errors come from `csf_values` and are re-exported here.

mod activation;
mod classes;
mod display;
mod evaluator;
mod function;
mod interfaces;
mod stack;

pub use activation::{Activation, ActivationId};
pub use classes::{ClassDefinition, ClassRegistry, PROGRAM_CLASS};
pub use display::{Display, DisplayBuilder, RedefinitionPolicy, Reference, DEFAULT_MAX_DEPTH};
pub use evaluator::Evaluator;
pub use function::{FunctionDefinition, MAIN_FUNCTION};
pub use interfaces::{InterfaceDefinition, InterfaceRegistry};
pub use stack::ensure_sufficient_stack;

// Re-export value types from csf_values
pub use csf_values::{
    evaluate_binary, evaluate_unary, BinaryOp, EvalResult, ObjectValue, SemanticError,
    SemanticErrorKind, UnaryOp, Value, ValueKind,
};
