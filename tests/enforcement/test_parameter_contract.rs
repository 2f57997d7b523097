// Tests for the canonical parameter list

use tasklint_core::builder::GraphBuilder;
use tasklint_core::identity::TaskRegistry;
use tasklint_core::types::TypeRef;
use tasklint_enforce::rules::{Rule, Severity};

use crate::common::fixtures::{check, of_rule};

const NS: &str = "Frends.Echo.Execute";
const PATH: &str = "Frends.Echo.Execute.Echo.Execute";

fn registry() -> TaskRegistry {
    TaskRegistry::from_delimited(PATH, None).unwrap()
}

/// Build the task method with parameters `(name, type, marked)`.
fn method_with(params: &[(&str, TypeRef, bool)]) -> GraphBuilder {
    let mut b = GraphBuilder::new("Echo.cs");
    let ns = b.namespace(NS);
    let class = b.static_class(ns, "Echo");
    let method = b.method(class, "Execute", TypeRef::primitive("void"));
    for (name, ty, marked) in params {
        if *marked {
            b.marked_parameter(method, name, ty.clone(), "PropertyTab");
        } else {
            b.parameter(method, name, ty.clone());
        }
    }
    b
}

fn own(name: &str) -> TypeRef {
    TypeRef::named(NS, name)
}

#[test]
fn test_empty_parameter_list() {
    let result = check(method_with(&[]), &registry());
    let missing = of_rule(&result, Rule::MissingRequiredParameter);
    let mut types: Vec<&str> = missing.iter().map(|d| d.arguments[0].as_str()).collect();
    types.sort();
    assert_eq!(types, vec!["CancellationToken", "Options"]);
}

#[test]
fn test_reordered_parameters() {
    let result = check(
        method_with(&[
            ("options", own("Options"), true),
            ("input", own("Input"), true),
            ("cancellationToken", TypeRef::cancellation_token(), false),
        ]),
        &registry(),
    );
    let order = of_rule(&result, Rule::ParametersOutOfOrder);
    assert_eq!(order.len(), 1);
    assert_eq!(order[0].severity, Severity::Warning);
    assert!(of_rule(&result, Rule::MissingRequiredParameter).is_empty());
}

#[test]
fn test_unmarked_and_misnamed_parameters() {
    let result = check(
        method_with(&[
            ("input", own("Input"), false),
            ("opts", own("Options"), true),
            ("token", TypeRef::cancellation_token(), false),
        ]),
        &registry(),
    );
    let marker = of_rule(&result, Rule::MissingPropertyMarker);
    assert_eq!(marker.len(), 1);
    assert_eq!(
        marker[0].message,
        "Parameter should be attributed with 'PropertyTab'"
    );
    let names = of_rule(&result, Rule::ParameterNameSuggestion);
    let mut suggested: Vec<&str> = names.iter().map(|d| d.arguments[0].as_str()).collect();
    suggested.sort();
    assert_eq!(suggested, vec!["cancellationToken", "options"]);
    assert!(names.iter().all(|d| d.severity == Severity::Info));
}

#[test]
fn test_unknown_parameter() {
    let result = check(
        method_with(&[
            ("options", own("Options"), true),
            ("retries", TypeRef::primitive("int"), false),
            ("cancellationToken", TypeRef::cancellation_token(), false),
        ]),
        &registry(),
    );
    let unknown = of_rule(&result, Rule::UnknownParameter);
    assert_eq!(unknown.len(), 1);
    assert_eq!(unknown[0].arguments, vec!["int"]);
    assert!(of_rule(&result, Rule::ParametersOutOfOrder).is_empty());
}
