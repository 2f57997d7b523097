// Tests for third-party types leaking through task parameters and results

use tasklint_core::builder::GraphBuilder;
use tasklint_core::identity::TaskRegistry;
use tasklint_core::types::TypeRef;
use tasklint_enforce::rules::Rule;

use crate::common::fixtures::{add_task, check, of_rule, task_path};

fn registry() -> TaskRegistry {
    TaskRegistry::from_delimited(&task_path("Frends", "Echo", "Execute"), None).unwrap()
}

fn generic(name: &str, args: Vec<TypeRef>) -> TypeRef {
    TypeRef::generic("System.Collections.Generic", name, args)
}

fn documented_property(b: &mut GraphBuilder, owner: tasklint_core::types::DeclId, name: &str, ty: TypeRef) -> tasklint_core::types::DeclId {
    let id = b.property(owner, name, ty);
    b.set_documentation(id, "<summary>Value.</summary><example>x</example>");
    id
}

#[test]
fn test_list_of_own_type_is_allowed() {
    let mut b = GraphBuilder::new("Echo.cs");
    let task = add_task(&mut b, "Frends", "Echo", "Execute");
    let item = b.class(task.ns, "Item");
    b.property(item, "Name", TypeRef::primitive("string"));
    documented_property(
        &mut b,
        task.input,
        "Items",
        generic("List", vec![TypeRef::named("Frends.Echo.Execute", "Item")]),
    );

    let result = check(b, &registry());
    assert!(of_rule(&result, Rule::ExposedThirdPartyType).is_empty());
    assert_eq!(result.status, "ok", "{:#?}", result.errors);
}

#[test]
fn test_list_of_third_party_type_names_the_property() {
    let mut b = GraphBuilder::new("Echo.cs");
    let task = add_task(&mut b, "Frends", "Echo", "Execute");
    let clients = documented_property(
        &mut b,
        task.input,
        "Clients",
        generic(
            "List",
            vec![TypeRef::named("System.Net.Http", "HttpClient")],
        ),
    );

    let result = check(b, &registry());
    let exposed = of_rule(&result, Rule::ExposedThirdPartyType);
    assert_eq!(exposed.len(), 1);
    assert_eq!(exposed[0].arguments, vec!["Clients"]);
    assert_eq!(exposed[0].declaration, Some(clients));
}

#[test]
fn test_dictionary_array_and_nullable_recurse() {
    let mut b = GraphBuilder::new("Echo.cs");
    let task = add_task(&mut b, "Frends", "Echo", "Execute");
    let vendor = || TypeRef::named("Vendor.Sdk", "Session");
    documented_property(
        &mut b,
        task.options,
        "Headers",
        generic(
            "Dictionary",
            vec![TypeRef::primitive("string"), TypeRef::primitive("string")],
        ),
    );
    documented_property(&mut b, task.options, "Sessions", TypeRef::array(vendor()));
    documented_property(&mut b, task.result, "Session", TypeRef::nullable(vendor()));

    let result = check(b, &registry());
    let mut exposed: Vec<&str> = of_rule(&result, Rule::ExposedThirdPartyType)
        .iter()
        .map(|d| d.arguments[0].as_str())
        .collect();
    exposed.sort();
    assert_eq!(exposed, vec!["Session", "Sessions"]);
}

#[test]
fn test_json_token_is_allow_listed() {
    let mut b = GraphBuilder::new("Echo.cs");
    let task = add_task(&mut b, "Frends", "Echo", "Execute");
    documented_property(
        &mut b,
        task.result,
        "Data",
        TypeRef::named("Newtonsoft.Json.Linq", "JToken"),
    );
    let result = check(b, &registry());
    assert!(of_rule(&result, Rule::ExposedThirdPartyType).is_empty());
}

#[test]
fn test_configured_allow_list_replaces_default() {
    let mut b = GraphBuilder::new("Echo.cs");
    let task = add_task(&mut b, "Frends", "Echo", "Execute");
    documented_property(
        &mut b,
        task.result,
        "Data",
        TypeRef::named("Newtonsoft.Json.Linq", "JToken"),
    );
    documented_property(
        &mut b,
        task.result,
        "Document",
        TypeRef::named("System.Xml.Linq", "XDocument"),
    );

    let mut config = tasklint_core::config::TasklintConfig::default();
    config.types.allowed_types = vec!["System.Xml.Linq.XDocument".to_string()];
    let result = tasklint_enforce::engine::EnforcementEngine::with_config(&config)
        .check(&b.build(), &registry());
    let exposed = of_rule(&result, Rule::ExposedThirdPartyType);
    assert_eq!(exposed.len(), 1);
    assert_eq!(exposed[0].arguments, vec!["Data"]);
}
