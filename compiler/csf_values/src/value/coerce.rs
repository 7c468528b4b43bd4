//! Coercions from a value to host primitives.
//!
//! Each coercion is best-effort for kinds where it has an obvious meaning and
//! a semantic error everywhere else. None of them return a sentinel.

use super::{Value, ValueKind};
use crate::errors::{invalid_cast, invalid_coercion, SemanticError};

impl Value {
    /// Integers follow the boolean domain rule (0 or 1); strings must spell
    /// `true` or `false`.
    pub fn boolean_value(&self) -> Result<bool, SemanticError> {
        match &self.kind {
            ValueKind::Bool(b) => Ok(*b),
            ValueKind::Int(0) => Ok(false),
            ValueKind::Int(1) => Ok(true),
            ValueKind::Int(n) => Err(invalid_cast(n, "a boolean")),
            ValueKind::Str(s) => match &**s {
                "true" => Ok(true),
                "false" => Ok(false),
                _ => Err(invalid_cast(&format!("\"{s}\""), "a boolean")),
            },
            ValueKind::Float(_) | ValueKind::Double(_) | ValueKind::Object(_) => {
                Err(invalid_coercion(self.type_name(), "boolean"))
            }
        }
    }

    /// Floating kinds truncate toward zero.
    pub fn long_value(&self) -> Result<i64, SemanticError> {
        match &self.kind {
            ValueKind::Int(n) => Ok(*n),
            ValueKind::Float(x) => Value::int_from_double(f64::from(*x))?.long_value(),
            ValueKind::Double(x) => Value::int_from_double(*x)?.long_value(),
            ValueKind::Str(s) => Value::parse_int(s)?.long_value(),
            ValueKind::Bool(_) | ValueKind::Object(_) => {
                Err(invalid_coercion(self.type_name(), "integer"))
            }
        }
    }

    pub fn float_value(&self) -> Result<f32, SemanticError> {
        match &self.kind {
            #[expect(
                clippy::cast_precision_loss,
                reason = "integer to float widening loses precision by definition"
            )]
            ValueKind::Int(n) => Ok(*n as f32),
            ValueKind::Float(x) => Ok(*x),
            ValueKind::Double(x) => Value::float_from_double(*x)?.float_value(),
            ValueKind::Str(s) => Value::parse_double(s)?.float_value(),
            ValueKind::Bool(_) | ValueKind::Object(_) => {
                Err(invalid_coercion(self.type_name(), "float"))
            }
        }
    }

    pub fn double_value(&self) -> Result<f64, SemanticError> {
        match &self.kind {
            #[expect(
                clippy::cast_precision_loss,
                reason = "integer to double widening loses precision by definition"
            )]
            ValueKind::Int(n) => Ok(*n as f64),
            ValueKind::Float(x) => Ok(f64::from(*x)),
            ValueKind::Double(x) => Ok(*x),
            ValueKind::Str(s) => Value::parse_double(s)?.double_value(),
            ValueKind::Bool(_) | ValueKind::Object(_) => {
                Err(invalid_coercion(self.type_name(), "double"))
            }
        }
    }

    /// Textual form of a scalar. Objects have none.
    pub fn string_value(&self) -> Result<String, SemanticError> {
        match &self.kind {
            ValueKind::Object(_) => Err(invalid_coercion(self.type_name(), "string")),
            ValueKind::Str(s) => Ok(s.to_string()),
            ValueKind::Bool(_) | ValueKind::Int(_) | ValueKind::Float(_) | ValueKind::Double(_) => {
                Ok(self.to_string())
            }
        }
    }
}
