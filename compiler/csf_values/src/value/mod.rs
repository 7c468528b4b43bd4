//! Runtime values for the interpreter.
//!
//! The set of kinds is closed: every operator is an exhaustive `match` over
//! [`ValueKind`], so a new kind is a compile error at each operator rather
//! than a runtime surprise.
//!
//! A [`Value`] pairs its kind with an `is_const` latch. The latch is only a
//! flag: the value layer never refuses an assignment itself, the environment
//! checks it before writing through a reference.

mod coerce;
mod object;

use std::fmt;
use std::rc::Rc;

use crate::errors::{invalid_cast, EvalResult};

pub use object::ObjectValue;

/// The data carried by a [`Value`].
#[derive(Clone, Debug, PartialEq)]
pub enum ValueKind {
    Bool(bool),
    /// 64-bit signed integer ("integer" in diagnostics).
    Int(i64),
    Float(f32),
    Double(f64),
    Str(Rc<str>),
    /// Instance of a user class.
    Object(ObjectValue),
}

/// A runtime datum.
#[derive(Clone, Debug)]
pub struct Value {
    kind: ValueKind,
    is_const: bool,
}

// Factory Methods

impl Value {
    pub fn from_kind(kind: ValueKind) -> Self {
        Value {
            kind,
            is_const: false,
        }
    }

    #[inline]
    pub fn boolean(b: bool) -> Self {
        Self::from_kind(ValueKind::Bool(b))
    }

    #[inline]
    pub fn int(n: i64) -> Self {
        Self::from_kind(ValueKind::Int(n))
    }

    #[inline]
    pub fn float(f: f32) -> Self {
        Self::from_kind(ValueKind::Float(f))
    }

    #[inline]
    pub fn double(d: f64) -> Self {
        Self::from_kind(ValueKind::Double(d))
    }

    pub fn string(s: impl Into<Rc<str>>) -> Self {
        Self::from_kind(ValueKind::Str(s.into()))
    }

    pub fn object(object: ObjectValue) -> Self {
        Self::from_kind(ValueKind::Object(object))
    }

    /// Boolean from an integer literal. Only `0` and `1` are accepted.
    pub fn boolean_from_int(n: i64) -> EvalResult {
        match n {
            0 => Ok(Self::boolean(false)),
            1 => Ok(Self::boolean(true)),
            _ => Err(invalid_cast(&n, "a boolean")),
        }
    }

    /// Integer from a double, truncating toward zero.
    ///
    /// Fails for NaN, infinities, and magnitudes outside the `i64` range.
    pub fn int_from_double(d: f64) -> EvalResult {
        // i64::MIN is exactly representable; i64::MAX rounds up to 2^63.
        const LOWER: f64 = -9_223_372_036_854_775_808.0;
        const UPPER: f64 = 9_223_372_036_854_775_808.0;

        let truncated = d.trunc();
        if d.is_finite() && (LOWER..UPPER).contains(&truncated) {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "range checked above"
            )]
            let n = truncated as i64;
            Ok(Self::int(n))
        } else {
            Err(invalid_cast(&d, "an integer"))
        }
    }

    /// Float from a double. Finite doubles must fit in `f32`.
    pub fn float_from_double(d: f64) -> EvalResult {
        if d.is_finite() && d.abs() > f64::from(f32::MAX) {
            return Err(invalid_cast(&d, "a float"));
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "magnitude checked above; precision loss is the point of narrowing"
        )]
        let narrowed = d as f32;
        Ok(Self::float(narrowed))
    }

    /// Integer from source text, e.g. a literal or a string being cast.
    pub fn parse_int(text: &str) -> EvalResult {
        text.trim()
            .parse::<i64>()
            .map(Self::int)
            .map_err(|_| invalid_cast(&format!("\"{text}\""), "an integer"))
    }

    /// Double from source text.
    pub fn parse_double(text: &str) -> EvalResult {
        text.trim()
            .parse::<f64>()
            .map(Self::double)
            .map_err(|_| invalid_cast(&format!("\"{text}\""), "a double"))
    }
}

// Inspection

impl Value {
    #[inline]
    pub fn kind(&self) -> &ValueKind {
        &self.kind
    }

    pub fn into_kind(self) -> ValueKind {
        self.kind
    }

    /// Name of this value's type, as used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self.kind {
            ValueKind::Bool(_) => "boolean",
            ValueKind::Int(_) => "integer",
            ValueKind::Float(_) => "float",
            ValueKind::Double(_) => "double",
            ValueKind::Str(_) => "string",
            ValueKind::Object(_) => "object",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match &self.kind {
            ValueKind::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectValue> {
        match &self.kind {
            ValueKind::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self.kind,
            ValueKind::Int(_) | ValueKind::Float(_) | ValueKind::Double(_)
        )
    }

    #[inline]
    pub fn is_const(&self) -> bool {
        self.is_const
    }

    /// Latch this value as constant. Latching twice has no further effect.
    pub fn set_const(&mut self) {
        self.is_const = true;
    }

    #[must_use]
    pub fn into_const(mut self) -> Self {
        self.set_const();
        self
    }
}

/// Equality of data. Constness does not participate.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ValueKind::Bool(b) => write!(f, "{b}"),
            ValueKind::Int(n) => write!(f, "{n}"),
            // Debug keeps the trailing `.0` on integral floats.
            ValueKind::Float(x) => write!(f, "{x:?}"),
            ValueKind::Double(x) => write!(f, "{x:?}"),
            ValueKind::Str(s) => f.write_str(s),
            ValueKind::Object(o) => write!(f, "{o}"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::boolean(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::int(n)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::float(x)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::double(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

#[cfg(test)]
mod tests;
