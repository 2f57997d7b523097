/// Contract tests for `check` output JSON schema compliance.
use std::collections::BTreeMap;

use tasklint_core::config::TasklintConfig;
use tasklint_core::identity::TaskRegistry;
use tasklint_core::types::Location;
use tasklint_enforce::engine::EnforcementEngine;
use tasklint_enforce::project;
use tasklint_enforce::rules::Rule;
use tasklint_enforce::types::{CheckInfo, CheckResult, Diagnostic};

use super::common::fixture_dir;
use super::test_schema_helpers::{assert_output_schema, OutputSchema};

#[test]
fn check_output_ok_matches_schema() {
    let result = CheckResult {
        version: "0.1.0".to_string(),
        command: "check".to_string(),
        status: "ok".to_string(),
        identities: vec!["Frends.Echo.Execute.Echo.Execute".to_string()],
        errors: vec![],
        warnings: vec![],
        notes: vec![],
        info: CheckInfo {
            declarations_analyzed: 12,
            tasks_matched: 1,
            metadata_source: "config".to_string(),
            cancelled: false,
        },
    };
    assert_output_schema(&result, OutputSchema::Check);
}

#[test]
fn pass_scoped_diagnostic_matches_schema() {
    let mut result = EnforcementEngine::new().check(
        &tasklint_core::graph::DeclarationGraph::new(vec![]).unwrap(),
        &TaskRegistry::empty(),
    );
    assert_eq!(result.warnings.len(), 1);
    let value = assert_output_schema(&result, OutputSchema::Check);

    // Pass-scoped diagnostics carry no declaration and no locations.
    let warning = &value["warnings"][0];
    assert!(warning.get("declaration").is_none());
    assert_eq!(warning["locations"], serde_json::json!([]));
    assert_eq!(warning["rule"], "ConfigurationMissing");

    result.warnings[0] = Diagnostic::new(
        Rule::UnsupportedTagUsed,
        vec!["see".to_string(), "cref".to_string()],
        vec![Location::new("Echo.cs", 3, 5).with_end(3, 30)],
    );
    assert_output_schema(&result, OutputSchema::Check);
}

#[test]
fn fixture_check_output_matches_schema() {
    let root = fixture_dir("http_task");
    let config = TasklintConfig::default();
    let graph = project::load_graph(&root.join("graph.json")).unwrap();
    let (registry, source) =
        project::load_metadata(&BTreeMap::new(), &project::sidecar_path(&root, &config))
            .unwrap();
    let result = EnforcementEngine::new().check_with_source(&graph, &registry, source);

    let value = assert_output_schema(&result, OutputSchema::Check);
    assert_eq!(value["status"], "error");
    assert_eq!(value["errors"][0]["severity"], "ERROR");
    assert_eq!(value["errors"][0]["category"], "types");
    assert_eq!(value["warnings"][0]["severity"], "WARNING");
}

#[test]
fn check_result_round_trips() {
    let original = EnforcementEngine::new().check(
        &tasklint_core::graph::DeclarationGraph::new(vec![]).unwrap(),
        &TaskRegistry::empty(),
    );
    let json = serde_json::to_string(&original).unwrap();
    let back: CheckResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back.status, original.status);
    assert_eq!(back.warnings, original.warnings);
    assert_eq!(back.info.metadata_source, "none");
}
