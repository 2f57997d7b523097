// Tests for naming rules driven by how task paths decompose

use tasklint_core::builder::GraphBuilder;
use tasklint_core::identity::TaskRegistry;
use tasklint_core::types::TypeRef;
use tasklint_enforce::rules::Rule;

use crate::common::fixtures::{check, codes, of_rule};

/// `Ns.Type.Method` with one method returning void.
fn task_graph(namespace: &str, type_name: &str, method: &str) -> GraphBuilder {
    let mut b = GraphBuilder::new("Task.cs");
    let ns = b.namespace(namespace);
    let class = b.static_class(ns, type_name);
    b.method(class, method, TypeRef::primitive("void"));
    b
}

#[test]
fn test_names_must_follow_path_segments() {
    let b = task_graph("Frends.Echo.Execute", "Helper", "Run");
    let registry = TaskRegistry::from_delimited("Frends.Echo.Execute.Helper.Run", None).unwrap();
    let result = check(b, &registry);

    let type_names = of_rule(&result, Rule::TypeNameMismatch);
    assert_eq!(type_names.len(), 1);
    assert_eq!(type_names[0].message, "Type name should be 'Echo'");
    let method_names = of_rule(&result, Rule::MethodNameMismatch);
    assert_eq!(method_names.len(), 1);
    assert_eq!(method_names[0].message, "Method name should be 'Execute'");
    assert!(of_rule(&result, Rule::NamespaceFormatInvalid).is_empty());
}

#[test]
fn test_short_path_is_unresolved() {
    let b = task_graph("Frends", "Echo", "Execute");
    let registry = TaskRegistry::from_delimited("Frends.Echo.Execute", None).unwrap();
    let result = check(b, &registry);

    let namespace = of_rule(&result, Rule::NamespaceFormatInvalid);
    assert_eq!(namespace.len(), 1);
    assert_eq!(
        namespace[0].message,
        "Standard namespace format is 'Vendor.System.Action'"
    );
    assert!(of_rule(&result, Rule::TypeNameMismatch).is_empty());
    assert!(of_rule(&result, Rule::MethodNameMismatch).is_empty());
}

#[test]
fn test_three_segment_root_namespace_confirms_decomposition() {
    let b = task_graph("Frends.Echo.Execute", "Echo", "Execute");
    let registry = TaskRegistry::from_delimited(
        "Frends.Echo.Execute.Echo.Execute",
        Some("Frends.Echo.Execute"),
    )
    .unwrap();
    let result = check(b, &registry);
    assert!(!codes(&result).contains(&"TL0001"), "{:?}", codes(&result));
}

#[test]
fn test_other_root_namespace_suppresses_decomposition() {
    let b = task_graph("Frends.Echo.Execute", "Echo", "Execute");
    let registry =
        TaskRegistry::from_delimited("Frends.Echo.Execute.Echo.Execute", Some("Frends.Echo"))
            .unwrap();
    let result = check(b, &registry);
    assert_eq!(of_rule(&result, Rule::NamespaceFormatInvalid).len(), 1);
}

#[test]
fn test_unrelated_root_namespace_is_ignored() {
    let b = task_graph("Frends.Echo.Execute", "Echo", "Execute");
    let registry =
        TaskRegistry::from_delimited("Frends.Echo.Execute.Echo.Execute", Some("Acme.Tools"))
            .unwrap();
    let result = check(b, &registry);
    assert!(of_rule(&result, Rule::NamespaceFormatInvalid).is_empty());
}

#[test]
fn test_malformed_path_is_rejected() {
    assert!(TaskRegistry::from_delimited("Frends.Echo", None).is_err());
    assert!(TaskRegistry::from_delimited(".Frends.Echo.Execute", None).is_err());
}
