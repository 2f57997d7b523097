/// Contract tests for `identity` output JSON schema compliance.
use tasklint_core::identity::TaskIdentity;
use tasklint_enforce::types::IdentityResult;

use super::test_schema_helpers::{assert_output_schema, OutputSchema};

fn identity_json(path: &str, root: Option<&str>) -> serde_json::Value {
    let identity = TaskIdentity::parse(path, root).unwrap();
    assert_output_schema(&IdentityResult::from(&identity), OutputSchema::Identity)
}

#[test]
fn resolved_identity_matches_schema() {
    let value = identity_json("Frends.Echo.Execute.Echo.Execute", None);
    assert_eq!(value["resolved"], true);
    assert_eq!(value["namespace"], "Frends.Echo.Execute");
    assert!(value.get("converter").is_none());
}

#[test]
fn unresolved_identity_matches_schema() {
    let value = identity_json("Frends.Echo.Execute", None);
    assert_eq!(value["resolved"], false);
    assert!(value["vendor"].is_null());
}

#[test]
fn converter_identity_matches_schema() {
    let value = identity_json("Frends.Json.ConvertXmlToJson.Json.ConvertXmlToJson", None);
    assert_eq!(value["converter"]["from"], "Xml");
    assert_eq!(value["converter"]["to"], "Json");
}
