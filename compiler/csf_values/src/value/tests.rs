#![allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]

use super::*;
use crate::errors::SemanticErrorKind;
use pretty_assertions::assert_eq;

#[test]
fn test_type_names() {
    assert_eq!(Value::boolean(true).type_name(), "boolean");
    assert_eq!(Value::int(1).type_name(), "integer");
    assert_eq!(Value::float(1.0).type_name(), "float");
    assert_eq!(Value::double(1.0).type_name(), "double");
    assert_eq!(Value::string("a").type_name(), "string");
    assert_eq!(Value::object(ObjectValue::new("Point")).type_name(), "object");
}

#[test]
fn test_value_display() {
    assert_eq!(Value::int(42).to_string(), "42");
    assert_eq!(Value::boolean(false).to_string(), "false");
    assert_eq!(Value::double(2.0).to_string(), "2.0");
    assert_eq!(Value::float(0.5).to_string(), "0.5");
    assert_eq!(Value::string("hello").to_string(), "hello");
    assert_eq!(
        Value::object(ObjectValue::new("Point")).to_string(),
        "<Point instance>"
    );
}

#[test]
fn test_boolean_from_int_accepts_zero_and_one() {
    assert_eq!(Value::boolean_from_int(0), Ok(Value::boolean(false)));
    assert_eq!(Value::boolean_from_int(1), Ok(Value::boolean(true)));
}

#[test]
fn test_boolean_from_int_rejects_other_values() {
    let err = Value::boolean_from_int(2).unwrap_err();
    assert_eq!(
        err.kind,
        SemanticErrorKind::InvalidCast {
            value: "2".to_string(),
            target: "a boolean".to_string(),
        }
    );
    assert_eq!(err.message, "could not cast 2 to a boolean");
    assert!(Value::boolean_from_int(-1).is_err());
}

#[test]
fn test_int_from_double_truncates() {
    assert_eq!(Value::int_from_double(3.9), Ok(Value::int(3)));
    assert_eq!(Value::int_from_double(-3.9), Ok(Value::int(-3)));
}

#[test]
fn test_int_from_double_rejects_non_finite_and_out_of_range() {
    assert!(Value::int_from_double(f64::NAN).is_err());
    assert!(Value::int_from_double(f64::INFINITY).is_err());
    assert!(Value::int_from_double(1e19).is_err());
    assert!(Value::int_from_double(-1e19).is_err());
}

#[test]
fn test_float_from_double_checks_magnitude() {
    assert_eq!(Value::float_from_double(1.5), Ok(Value::float(1.5)));
    assert!(Value::float_from_double(1e300).is_err());
}

#[test]
fn test_parse_literals() {
    assert_eq!(Value::parse_int(" 12 "), Ok(Value::int(12)));
    assert_eq!(Value::parse_double("2.5"), Ok(Value::double(2.5)));
    assert!(Value::parse_int("twelve").is_err());
    assert!(Value::parse_double("").is_err());
}

#[test]
fn test_const_latch() {
    let mut v = Value::int(5);
    assert!(!v.is_const());
    v.set_const();
    assert!(v.is_const());
    // Latching again keeps it const.
    v.set_const();
    assert!(v.is_const());
}

#[test]
fn test_constness_ignored_by_equality() {
    assert_eq!(Value::int(5).into_const(), Value::int(5));
}

#[test]
fn test_object_identity() {
    let a = ObjectValue::new("Point");
    let b = ObjectValue::new("Point");
    assert_eq!(Value::object(a.clone()), Value::object(a.clone()));
    assert_ne!(Value::object(a), Value::object(b));
}

#[test]
fn test_object_fields_are_shared_between_handles() {
    let a = ObjectValue::new("Point");
    let alias = a.clone();
    a.set_field("x", Value::int(3));
    assert_eq!(alias.field("x"), Some(Value::int(3)));
    assert_eq!(alias.field("y"), None);
    assert_eq!(alias.class_name(), "Point");
}

// Coercions

#[test]
fn test_boolean_value() {
    assert_eq!(Value::boolean(true).boolean_value(), Ok(true));
    assert_eq!(Value::int(0).boolean_value(), Ok(false));
    assert_eq!(Value::string("true").boolean_value(), Ok(true));
    assert!(Value::int(7).boolean_value().is_err());
    assert!(Value::double(1.0).boolean_value().is_err());
    assert!(Value::string("yes").boolean_value().is_err());
}

#[test]
fn test_long_value() {
    assert_eq!(Value::int(9).long_value(), Ok(9));
    assert_eq!(Value::double(9.7).long_value(), Ok(9));
    assert_eq!(Value::float(-2.5).long_value(), Ok(-2));
    assert_eq!(Value::string("41").long_value(), Ok(41));
    let err = Value::boolean(true).long_value().unwrap_err();
    assert_eq!(
        err.kind,
        SemanticErrorKind::InvalidCoercion {
            type_name: "boolean".to_string(),
            target: "integer".to_string(),
        }
    );
}

#[test]
fn test_float_and_double_value() {
    assert_eq!(Value::int(2).float_value(), Ok(2.0));
    assert_eq!(Value::int(2).double_value(), Ok(2.0));
    assert_eq!(Value::float(0.5).double_value(), Ok(0.5));
    assert_eq!(Value::string("0.25").double_value(), Ok(0.25));
    assert!(Value::boolean(false).double_value().is_err());
    assert!(Value::double(1e300).float_value().is_err());
}

#[test]
fn test_string_value() {
    assert_eq!(Value::boolean(true).string_value(), Ok("true".to_string()));
    assert_eq!(Value::int(-4).string_value(), Ok("-4".to_string()));
    assert_eq!(Value::string("s").string_value(), Ok("s".to_string()));
    assert!(Value::object(ObjectValue::new("A")).string_value().is_err());
}

#[test]
fn test_object_has_no_numeric_value() {
    let object = Value::object(ObjectValue::new("A"));
    assert!(object.long_value().is_err());
    assert!(object.float_value().is_err());
    assert!(object.double_value().is_err());
    assert!(object.boolean_value().is_err());
}

mod proptest_values {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn boolean_from_int_domain(n in any::<i64>()) {
            let result = Value::boolean_from_int(n);
            prop_assert_eq!(result.is_ok(), n == 0 || n == 1);
        }

        #[test]
        fn int_string_value_parses_back(n in any::<i64>()) {
            let text = Value::int(n).string_value();
            prop_assert_eq!(text.map(|t| Value::parse_int(&t)), Ok(Ok(Value::int(n))));
        }
    }
}
