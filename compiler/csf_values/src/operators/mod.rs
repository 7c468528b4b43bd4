//! Operator semantics for runtime values.
//!
//! Dispatch is on the left operand (the receiver), matching how the evaluator
//! calls `left.add(&right)`. Numeric operands are promoted to the widest
//! representation present: integer, then float, then double.
//!
//! Integer arithmetic is checked. Zero divisors fail on every numeric kind,
//! including the floating ones, so no operator produces an infinity or NaN
//! from a division.

use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Rem, Sub};

use crate::errors::{
    binary_type_mismatch, division_by_zero, integer_overflow, invalid_binary_op,
    invalid_unary_op, modulo_by_zero, not_comparable, EvalResult, SemanticError,
};
use crate::op::{BinaryOp, UnaryOp};
use crate::value::{Value, ValueKind};

// Numeric Promotion

#[derive(Copy, Clone, Debug)]
enum Numeric {
    Int(i64),
    Float(f32),
    Double(f64),
}

/// Both operands widened to a common representation.
enum Promoted {
    Int(i64, i64),
    Float(f32, f32),
    Double(f64, f64),
}

impl Numeric {
    fn of(value: &Value) -> Option<Self> {
        match value.kind() {
            ValueKind::Int(n) => Some(Numeric::Int(*n)),
            ValueKind::Float(x) => Some(Numeric::Float(*x)),
            ValueKind::Double(x) => Some(Numeric::Double(*x)),
            ValueKind::Bool(_) | ValueKind::Str(_) | ValueKind::Object(_) => None,
        }
    }

    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        reason = "promotion to float is lossy by definition"
    )]
    fn to_f32(self) -> f32 {
        match self {
            Numeric::Int(n) => n as f32,
            Numeric::Float(x) => x,
            Numeric::Double(x) => x as f32,
        }
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "promotion to double is lossy by definition"
    )]
    fn to_f64(self) -> f64 {
        match self {
            Numeric::Int(n) => n as f64,
            Numeric::Float(x) => f64::from(x),
            Numeric::Double(x) => x,
        }
    }
}

fn promote(a: Numeric, b: Numeric) -> Promoted {
    match (a, b) {
        (Numeric::Int(x), Numeric::Int(y)) => Promoted::Int(x, y),
        (Numeric::Double(_), _) | (_, Numeric::Double(_)) => {
            Promoted::Double(a.to_f64(), b.to_f64())
        }
        _ => Promoted::Float(a.to_f32(), b.to_f32()),
    }
}

// Type-Specific Arithmetic

fn int_arithmetic(a: i64, b: i64, op: BinaryOp) -> EvalResult {
    let result = match op {
        BinaryOp::Add => a.checked_add(b).ok_or_else(|| integer_overflow("addition")),
        BinaryOp::Sub => a
            .checked_sub(b)
            .ok_or_else(|| integer_overflow("subtraction")),
        BinaryOp::Mul => a
            .checked_mul(b)
            .ok_or_else(|| integer_overflow("multiplication")),
        BinaryOp::Div if b == 0 => Err(division_by_zero()),
        BinaryOp::Div => a.checked_div(b).ok_or_else(|| integer_overflow("division")),
        BinaryOp::Mod if b == 0 => Err(modulo_by_zero()),
        BinaryOp::Mod => a.checked_rem(b).ok_or_else(|| integer_overflow("remainder")),
        _ => Err(invalid_binary_op("integer", op)),
    };
    result.map(Value::int)
}

fn float_arithmetic<T>(a: T, b: T, op: BinaryOp, wrap: fn(T) -> Value) -> EvalResult
where
    T: Copy
        + Default
        + PartialEq
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + Rem<Output = T>,
{
    let zero = T::default();
    match op {
        BinaryOp::Add => Ok(wrap(a + b)),
        BinaryOp::Sub => Ok(wrap(a - b)),
        BinaryOp::Mul => Ok(wrap(a * b)),
        BinaryOp::Div if b == zero => Err(division_by_zero()),
        BinaryOp::Div => Ok(wrap(a / b)),
        BinaryOp::Mod if b == zero => Err(modulo_by_zero()),
        BinaryOp::Mod => Ok(wrap(a % b)),
        _ => Err(invalid_binary_op("floating point values", op)),
    }
}

fn partial_order<T: PartialOrd>(
    a: T,
    b: T,
    left: &Value,
    right: &Value,
) -> Result<Ordering, SemanticError> {
    a.partial_cmp(&b)
        .ok_or_else(|| not_comparable(left.type_name(), right.type_name()))
}

// Value Operators

impl Value {
    /// Arithmetic shared by `+ - * / %` on numeric receivers.
    fn arithmetic(&self, other: &Value, op: BinaryOp) -> EvalResult {
        let Some(a) = Numeric::of(self) else {
            return Err(invalid_binary_op(self.type_name(), op));
        };
        let Some(b) = Numeric::of(other) else {
            return Err(binary_type_mismatch(self.type_name(), other.type_name(), op));
        };
        match promote(a, b) {
            Promoted::Int(x, y) => int_arithmetic(x, y, op),
            Promoted::Float(x, y) => float_arithmetic(x, y, op, Value::float),
            Promoted::Double(x, y) => float_arithmetic(x, y, op, Value::double),
        }
    }

    /// The receiver's boolean, or an error naming `op`.
    fn logical_operand(&self, op: BinaryOp) -> Result<bool, SemanticError> {
        match self.kind() {
            ValueKind::Bool(b) => Ok(*b),
            _ => Err(invalid_binary_op(self.type_name(), op)),
        }
    }

    pub fn or(&self, other: &Value) -> EvalResult {
        let a = self.logical_operand(BinaryOp::Or)?;
        let b = other.boolean_value()?;
        Ok(Value::boolean(a || b))
    }

    pub fn and(&self, other: &Value) -> EvalResult {
        let a = self.logical_operand(BinaryOp::And)?;
        let b = other.boolean_value()?;
        Ok(Value::boolean(a && b))
    }

    pub fn not(&self) -> EvalResult {
        match self.kind() {
            ValueKind::Bool(b) => Ok(Value::boolean(!b)),
            _ => Err(invalid_unary_op(self.type_name(), UnaryOp::Not)),
        }
    }

    /// Three-way comparison.
    ///
    /// Booleans compare against the other operand's boolean coercion
    /// (`false < true`), strings against its string coercion. Numbers compare
    /// after promotion; NaN is unordered and reported as an error. Objects
    /// have no ordering.
    pub fn compare(&self, other: &Value) -> Result<Ordering, SemanticError> {
        match self.kind() {
            ValueKind::Bool(a) => Ok(a.cmp(&other.boolean_value()?)),
            ValueKind::Str(a) => Ok((**a).cmp(other.string_value()?.as_str())),
            ValueKind::Object(_) => Err(not_comparable(self.type_name(), other.type_name())),
            ValueKind::Int(_) | ValueKind::Float(_) | ValueKind::Double(_) => {
                let (Some(a), Some(b)) = (Numeric::of(self), Numeric::of(other)) else {
                    return Err(not_comparable(self.type_name(), other.type_name()));
                };
                match promote(a, b) {
                    Promoted::Int(x, y) => Ok(x.cmp(&y)),
                    Promoted::Float(x, y) => partial_order(x, y, self, other),
                    Promoted::Double(x, y) => partial_order(x, y, self, other),
                }
            }
        }
    }

    /// Addition, or concatenation when the receiver is a string.
    pub fn add(&self, other: &Value) -> EvalResult {
        match self.kind() {
            ValueKind::Str(a) => Ok(Value::string(format!("{a}{}", other.string_value()?))),
            _ => self.arithmetic(other, BinaryOp::Add),
        }
    }

    pub fn subtract(&self, other: &Value) -> EvalResult {
        self.arithmetic(other, BinaryOp::Sub)
    }

    pub fn mult(&self, other: &Value) -> EvalResult {
        self.arithmetic(other, BinaryOp::Mul)
    }

    /// Division. Integer division truncates toward zero.
    pub fn div(&self, other: &Value) -> EvalResult {
        self.arithmetic(other, BinaryOp::Div)
    }

    pub fn modulo(&self, other: &Value) -> EvalResult {
        self.arithmetic(other, BinaryOp::Mod)
    }

    /// Unary plus yields a fresh, non-const copy of a numeric value.
    pub fn unary_plus(&self) -> EvalResult {
        if self.is_numeric() {
            Ok(Value::from_kind(self.kind().clone()))
        } else {
            Err(invalid_unary_op(self.type_name(), UnaryOp::Plus))
        }
    }

    pub fn unary_minus(&self) -> EvalResult {
        match self.kind() {
            ValueKind::Int(n) => n
                .checked_neg()
                .map(Value::int)
                .ok_or_else(|| integer_overflow("negation")),
            ValueKind::Float(x) => Ok(Value::float(-x)),
            ValueKind::Double(x) => Ok(Value::double(-x)),
            ValueKind::Bool(_) | ValueKind::Str(_) | ValueKind::Object(_) => {
                Err(invalid_unary_op(self.type_name(), UnaryOp::Neg))
            }
        }
    }

    /// Equality. Objects compare by identity and are never equal to scalars.
    pub fn eq(&self, other: &Value) -> EvalResult {
        self.equals(other).map(Value::boolean)
    }

    pub fn neq(&self, other: &Value) -> EvalResult {
        self.equals(other).map(|equal| Value::boolean(!equal))
    }

    pub fn gte(&self, other: &Value) -> EvalResult {
        Ok(Value::boolean(self.compare(other)?.is_ge()))
    }

    pub fn lte(&self, other: &Value) -> EvalResult {
        Ok(Value::boolean(self.compare(other)?.is_le()))
    }

    pub fn gt(&self, other: &Value) -> EvalResult {
        Ok(Value::boolean(self.compare(other)?.is_gt()))
    }

    pub fn lt(&self, other: &Value) -> EvalResult {
        Ok(Value::boolean(self.compare(other)?.is_lt()))
    }

    fn equals(&self, other: &Value) -> Result<bool, SemanticError> {
        match (self.kind(), other.kind()) {
            (ValueKind::Object(a), ValueKind::Object(b)) => Ok(a.same_instance(b)),
            (ValueKind::Object(_), _) | (_, ValueKind::Object(_)) => Ok(false),
            _ => Ok(self.compare(other)?.is_eq()),
        }
    }
}

// Direct Dispatch Functions

/// Evaluate a binary operator on two values.
///
/// Entry point for the expression evaluator; forwards to the receiver's
/// operator method.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Or => left.or(right),
        BinaryOp::And => left.and(right),
        BinaryOp::Add => left.add(right),
        BinaryOp::Sub => left.subtract(right),
        BinaryOp::Mul => left.mult(right),
        BinaryOp::Div => left.div(right),
        BinaryOp::Mod => left.modulo(right),
        BinaryOp::Eq => left.eq(right),
        BinaryOp::NotEq => left.neq(right),
        BinaryOp::Lt => left.lt(right),
        BinaryOp::LtEq => left.lte(right),
        BinaryOp::Gt => left.gt(right),
        BinaryOp::GtEq => left.gte(right),
    }
}

/// Evaluate a prefix operator on a value.
pub fn evaluate_unary(value: &Value, op: UnaryOp) -> EvalResult {
    match op {
        UnaryOp::Not => value.not(),
        UnaryOp::Plus => value.unary_plus(),
        UnaryOp::Neg => value.unary_minus(),
    }
}
