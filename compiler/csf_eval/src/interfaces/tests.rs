#![allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]

use super::*;
use csf_values::SemanticErrorKind;
use pretty_assertions::assert_eq;

#[test]
fn test_add_and_find() {
    let mut registry = InterfaceRegistry::new();
    assert!(registry.is_empty());
    registry
        .add(
            InterfaceDefinition::new("Shape").with_method("area"),
            RedefinitionPolicy::Reject,
        )
        .unwrap();
    let shape = registry.find("Shape").unwrap();
    assert_eq!(shape.name(), "Shape");
    assert!(shape.declares("area"));
    assert!(!shape.declares("perimeter"));
    assert_eq!(registry.find("Missing"), None);
}

#[test]
fn test_declaration_order_is_kept() {
    let mut registry = InterfaceRegistry::new();
    for name in ["A", "B", "C"] {
        registry
            .add(InterfaceDefinition::new(name), RedefinitionPolicy::Reject)
            .unwrap();
    }
    let names: Vec<&str> = registry.iter().map(|i| i.name()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
    assert_eq!(registry.len(), 3);
}

#[test]
fn test_duplicate_rejected() {
    let mut registry = InterfaceRegistry::new();
    registry
        .add(InterfaceDefinition::new("A"), RedefinitionPolicy::Reject)
        .unwrap();
    let err = registry
        .add(InterfaceDefinition::new("A"), RedefinitionPolicy::Reject)
        .unwrap_err();
    assert_eq!(
        err.kind,
        SemanticErrorKind::DuplicateDefinition {
            what: "interface".to_string(),
            name: "A".to_string(),
        }
    );
}

#[test]
fn test_duplicate_replaced_in_place_when_shadowing() {
    let mut registry = InterfaceRegistry::new();
    registry
        .add(InterfaceDefinition::new("A"), RedefinitionPolicy::Shadow)
        .unwrap();
    registry
        .add(InterfaceDefinition::new("B"), RedefinitionPolicy::Shadow)
        .unwrap();
    registry
        .add(
            InterfaceDefinition::new("A").with_method("run"),
            RedefinitionPolicy::Shadow,
        )
        .unwrap();
    assert_eq!(registry.len(), 2);
    assert!(registry.find("A").unwrap().declares("run"));
    assert_eq!(registry.iter().next().unwrap().name(), "A");
}
