#![allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]

use super::*;
use csf_values::SemanticErrorKind;
use pretty_assertions::assert_eq;

fn registry_with_outer() -> ClassRegistry {
    let mut registry = ClassRegistry::new();
    let outer = ClassDefinition::new("Outer")
        .with_class(ClassDefinition::new("Inner").with_class(ClassDefinition::new("Innermost")));
    registry.add_class(outer, RedefinitionPolicy::Reject).unwrap();
    registry
}

#[test]
fn test_root_is_program_class() {
    let registry = ClassRegistry::new();
    assert_eq!(registry.root().name(), PROGRAM_CLASS);
    assert!(registry.is_empty());
}

#[test]
fn test_shallow_lookup_sees_only_top_level() {
    let registry = registry_with_outer();
    assert!(registry.find_class("Outer").is_some());
    assert!(registry.find_class("Inner").is_none());
}

#[test]
fn test_deep_lookup_recurses_into_nested_classes() {
    let registry = registry_with_outer();
    assert_eq!(registry.find_class_deep("Inner").unwrap().name(), "Inner");
    assert_eq!(
        registry.find_class_deep("Innermost").unwrap().name(),
        "Innermost"
    );
    assert!(registry.find_class_deep("Nowhere").is_none());
}

#[test]
fn test_class_level_lookup() {
    let outer = ClassDefinition::new("Outer").with_class(ClassDefinition::new("Inner"));
    assert!(outer.find_class("Inner").is_some());
    assert!(outer.find_class("Outer").is_none());
}

#[test]
fn test_duplicate_class_rejected() {
    let mut registry = registry_with_outer();
    let err = registry
        .add_class(ClassDefinition::new("Outer"), RedefinitionPolicy::Reject)
        .unwrap_err();
    assert_eq!(
        err.kind,
        SemanticErrorKind::DuplicateDefinition {
            what: "class".to_string(),
            name: "Outer".to_string(),
        }
    );
}

#[test]
fn test_duplicate_class_replaced_when_shadowing() {
    let mut registry = registry_with_outer();
    registry
        .add_class(ClassDefinition::new("Outer"), RedefinitionPolicy::Shadow)
        .unwrap();
    assert_eq!(registry.len(), 1);
    assert!(registry.find_class_deep("Inner").is_none());
}

#[test]
fn test_resolve_method_walks_superclasses() {
    let mut registry = ClassRegistry::new();
    registry
        .add_class(
            ClassDefinition::new("Animal").with_method(FunctionDefinition::new("speak", 1)),
            RedefinitionPolicy::Reject,
        )
        .unwrap();
    registry
        .add_class(
            ClassDefinition::new("Dog").with_superclass("Animal"),
            RedefinitionPolicy::Reject,
        )
        .unwrap();

    let method = registry.resolve_method("Dog", "speak").unwrap();
    assert_eq!(method.name(), "speak");
    assert!(registry.resolve_method("Dog", "fly").is_none());
    assert!(registry.resolve_method("Cat", "speak").is_none());
}

#[test]
fn test_resolve_method_stops_on_cycles() {
    let mut registry = ClassRegistry::new();
    registry
        .add_class(
            ClassDefinition::new("A").with_superclass("B"),
            RedefinitionPolicy::Reject,
        )
        .unwrap();
    registry
        .add_class(
            ClassDefinition::new("B").with_superclass("A"),
            RedefinitionPolicy::Reject,
        )
        .unwrap();
    assert!(registry.resolve_method("A", "missing").is_none());
    assert!(!registry.implements("A", "Missing"));
}

#[test]
fn test_implements_follows_superclasses() {
    let mut registry = ClassRegistry::new();
    registry
        .add_class(
            ClassDefinition::new("Base").with_interface("Printable"),
            RedefinitionPolicy::Reject,
        )
        .unwrap();
    registry
        .add_class(
            ClassDefinition::new("Derived").with_superclass("Base"),
            RedefinitionPolicy::Reject,
        )
        .unwrap();
    assert!(registry.implements("Derived", "Printable"));
    assert!(!registry.implements("Derived", "Comparable"));
}

#[test]
fn test_shadowed_class_keeps_declaration_order() {
    let mut registry = ClassRegistry::new();
    for name in ["A", "B"] {
        registry
            .add_class(ClassDefinition::new(name), RedefinitionPolicy::Shadow)
            .unwrap();
    }
    registry
        .add_class(
            ClassDefinition::new("A").with_interface("Runnable"),
            RedefinitionPolicy::Shadow,
        )
        .unwrap();

    let names: Vec<&str> = registry.iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["A", "B"]);
    assert!(registry.implements("A", "Runnable"));
}
