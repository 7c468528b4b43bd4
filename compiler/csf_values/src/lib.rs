#![allow(
    clippy::result_large_err,
    reason = "SemanticError is the only error type; boxing it buys nothing here"
)]
//! `csf_values` - runtime values for the interpreter core.
//!
//! This crate provides:
//! - `Value`, a closed family of runtime kinds (boolean, integer, float,
//!   double, string, object) with an `is_const` latch
//! - the operator calculus on those kinds (logical, comparison, arithmetic,
//!   relational, coercions)
//! - `SemanticError`, the single error type of the interpreter core, and its
//!   factory functions
//!
//! # Dispatch
//!
//! The evaluator can call operator methods directly (`left.add(&right)`) or
//! go through `evaluate_binary` / `evaluate_unary` with an operator tag.

mod errors;
mod op;
mod operators;
mod value;

pub use errors::{EvalResult, SemanticError, SemanticErrorKind};
pub use op::{BinaryOp, UnaryOp};
pub use operators::{evaluate_binary, evaluate_unary};
pub use value::{ObjectValue, Value, ValueKind};

// Re-export error constructors for use by other crates
pub use errors::{
    // Storage errors
    argument_out_of_range,
    // Operator errors
    binary_type_mismatch,
    constant_assignment,
    // Arithmetic errors
    division_by_zero,
    // Name resolution errors
    duplicate_definition,
    integer_overflow,
    invalid_binary_op,
    // Construction and coercion errors
    invalid_cast,
    invalid_coercion,
    invalid_unary_op,
    modulo_by_zero,
    nesting_limit_exceeded,
    not_comparable,
    stale_reference,
    undefined_class,
    undefined_function,
    undefined_interface,
    undefined_variable,
    uninitialized_variable,
};
