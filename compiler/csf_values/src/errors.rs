//! Semantic errors raised by the value layer and the environment core.
//!
//! There is a single error type, [`SemanticError`]. It carries a structured
//! [`SemanticErrorKind`] for programmatic matching and a rendered message for
//! the user. Factory functions (e.g. [`division_by_zero`]) are the public way
//! to build errors; they populate both fields from the same source so the two
//! never disagree.

use crate::op::{BinaryOp, UnaryOp};
use crate::value::Value;

/// Result of evaluating an operation that yields a value.
pub type EvalResult = Result<Value, SemanticError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SemanticErrorKind {
    // Arithmetic
    #[error("division by zero")]
    DivisionByZero,
    #[error("modulo by zero")]
    ModuloByZero,
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: String },

    // Construction and coercion
    #[error("could not cast {value} to {target}")]
    InvalidCast { value: String, target: String },
    #[error("cannot convert {type_name} to {target}")]
    InvalidCoercion { type_name: String, target: String },

    // Operators
    #[error("operator `{op}` cannot be applied to {type_name}")]
    InvalidUnaryOp { type_name: String, op: UnaryOp },
    #[error("operator `{op}` cannot be applied to {type_name}")]
    InvalidBinaryOp { type_name: String, op: BinaryOp },
    #[error("operator `{op}` cannot be applied to {left} and {right}")]
    BinaryTypeMismatch {
        left: String,
        right: String,
        op: BinaryOp,
    },
    #[error("cannot compare {left} with {right}")]
    NotComparable { left: String, right: String },

    // Name resolution
    #[error("undefined variable: {name}")]
    UndefinedVariable { name: String },
    #[error("undefined function: {name}")]
    UndefinedFunction { name: String },
    #[error("undefined class: {name}")]
    UndefinedClass { name: String },
    #[error("undefined interface: {name}")]
    UndefinedInterface { name: String },
    #[error("variable {name} is used before it is assigned")]
    UninitializedVariable { name: String },
    #[error("{what} {name} is already defined in this scope")]
    DuplicateDefinition { what: String, name: String },

    // Storage
    #[error("cannot assign to constant {name}")]
    ConstantAssignment { name: String },
    #[error("reference to level {depth} outlived its activation")]
    StaleReference { depth: usize },
    #[error("argument {index} is out of range for {function}, which takes {arity}")]
    ArgumentOutOfRange {
        function: String,
        index: usize,
        arity: usize,
    },
    #[error("function nesting level {level} exceeds the maximum of {max}")]
    NestingLimitExceeded { level: usize, max: usize },

    /// Catch-all for messages supplied by the embedding evaluator.
    #[error("{message}")]
    Custom { message: String },
}

/// The sole error condition of the interpreter core.
///
/// Semantic errors are never recovered from inside the core; they propagate
/// to the caller, which aborts the running program.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct SemanticError {
    pub kind: SemanticErrorKind,
    pub message: String,
}

impl SemanticError {
    /// Create an uncategorized error with a free-form message.
    #[cold]
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        SemanticError {
            kind: SemanticErrorKind::Custom {
                message: message.clone(),
            },
            message,
        }
    }

    #[cold]
    pub fn from_kind(kind: SemanticErrorKind) -> Self {
        let message = kind.to_string();
        SemanticError { kind, message }
    }
}

// Arithmetic Errors

#[cold]
pub fn division_by_zero() -> SemanticError {
    SemanticError::from_kind(SemanticErrorKind::DivisionByZero)
}

#[cold]
pub fn modulo_by_zero() -> SemanticError {
    SemanticError::from_kind(SemanticErrorKind::ModuloByZero)
}

#[cold]
pub fn integer_overflow(operation: &str) -> SemanticError {
    SemanticError::from_kind(SemanticErrorKind::IntegerOverflow {
        operation: operation.to_string(),
    })
}

// Construction and Coercion Errors

/// A primitive could not be turned into a value of the target kind.
#[cold]
pub fn invalid_cast(value: &impl std::fmt::Display, target: &str) -> SemanticError {
    SemanticError::from_kind(SemanticErrorKind::InvalidCast {
        value: value.to_string(),
        target: target.to_string(),
    })
}

/// A value kind has no meaningful conversion to `target`.
#[cold]
pub fn invalid_coercion(type_name: &str, target: &str) -> SemanticError {
    SemanticError::from_kind(SemanticErrorKind::InvalidCoercion {
        type_name: type_name.to_string(),
        target: target.to_string(),
    })
}

// Operator Errors

#[cold]
pub fn invalid_unary_op(type_name: &str, op: UnaryOp) -> SemanticError {
    SemanticError::from_kind(SemanticErrorKind::InvalidUnaryOp {
        type_name: type_name.to_string(),
        op,
    })
}

#[cold]
pub fn invalid_binary_op(type_name: &str, op: BinaryOp) -> SemanticError {
    SemanticError::from_kind(SemanticErrorKind::InvalidBinaryOp {
        type_name: type_name.to_string(),
        op,
    })
}

#[cold]
pub fn binary_type_mismatch(left: &str, right: &str, op: BinaryOp) -> SemanticError {
    SemanticError::from_kind(SemanticErrorKind::BinaryTypeMismatch {
        left: left.to_string(),
        right: right.to_string(),
        op,
    })
}

#[cold]
pub fn not_comparable(left: &str, right: &str) -> SemanticError {
    SemanticError::from_kind(SemanticErrorKind::NotComparable {
        left: left.to_string(),
        right: right.to_string(),
    })
}

// Name Resolution Errors

#[cold]
pub fn undefined_variable(name: &str) -> SemanticError {
    SemanticError::from_kind(SemanticErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn undefined_function(name: &str) -> SemanticError {
    SemanticError::from_kind(SemanticErrorKind::UndefinedFunction {
        name: name.to_string(),
    })
}

#[cold]
pub fn undefined_class(name: &str) -> SemanticError {
    SemanticError::from_kind(SemanticErrorKind::UndefinedClass {
        name: name.to_string(),
    })
}

#[cold]
pub fn undefined_interface(name: &str) -> SemanticError {
    SemanticError::from_kind(SemanticErrorKind::UndefinedInterface {
        name: name.to_string(),
    })
}

#[cold]
pub fn uninitialized_variable(name: &str) -> SemanticError {
    SemanticError::from_kind(SemanticErrorKind::UninitializedVariable {
        name: name.to_string(),
    })
}

/// A name was declared twice in one scope. `what` is "variable", "function", ...
#[cold]
pub fn duplicate_definition(what: &str, name: &str) -> SemanticError {
    SemanticError::from_kind(SemanticErrorKind::DuplicateDefinition {
        what: what.to_string(),
        name: name.to_string(),
    })
}

// Storage Errors

#[cold]
pub fn constant_assignment(name: &str) -> SemanticError {
    SemanticError::from_kind(SemanticErrorKind::ConstantAssignment {
        name: name.to_string(),
    })
}

#[cold]
pub fn stale_reference(depth: usize) -> SemanticError {
    SemanticError::from_kind(SemanticErrorKind::StaleReference { depth })
}

#[cold]
pub fn argument_out_of_range(function: &str, index: usize, arity: usize) -> SemanticError {
    SemanticError::from_kind(SemanticErrorKind::ArgumentOutOfRange {
        function: function.to_string(),
        index,
        arity,
    })
}

#[cold]
pub fn nesting_limit_exceeded(level: usize, max: usize) -> SemanticError {
    SemanticError::from_kind(SemanticErrorKind::NestingLimitExceeded { level, max })
}
