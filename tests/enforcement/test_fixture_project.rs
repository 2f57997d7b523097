// End-to-end check of the checked-in HTTP task fixture

use std::collections::BTreeMap;

use tasklint_core::config::TasklintConfig;
use tasklint_core::metadata::MetadataSource;
use tasklint_enforce::engine::EnforcementEngine;
use tasklint_enforce::project;

use crate::common::fixture_dir;

fn check_fixture() -> tasklint_enforce::types::CheckResult {
    let root = fixture_dir("http_task");
    let config = TasklintConfig::default();
    let graph = project::load_graph(&root.join("graph.json")).unwrap();
    let (registry, source) =
        project::load_metadata(&BTreeMap::new(), &project::sidecar_path(&root, &config))
            .unwrap();
    assert_eq!(source, MetadataSource::Sidecar);
    EnforcementEngine::with_config(&config).check_with_source(&graph, &registry, source)
}

#[test]
fn test_fixture_diagnostics() {
    let result = check_fixture();
    assert_eq!(result.status, "error");
    assert_eq!(result.info.metadata_source, "sidecar");
    assert_eq!(result.info.tasks_matched, 1);
    assert_eq!(result.info.declarations_analyzed, 18);

    let errors: Vec<(&str, String)> = result
        .errors
        .iter()
        .map(|d| (d.code.as_str(), d.position()))
        .collect();
    assert_eq!(
        errors,
        vec![
            ("TL0017", "Definitions/Input.cs:18".to_string()),
            ("TL0016", "Definitions/Options.cs:18".to_string()),
            ("TL0013", "Definitions/Result.cs:6".to_string()),
        ]
    );
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].code, "TL0011");
    assert_eq!(
        result.warnings[0].message,
        "Class should include a 'StatusCode' property"
    );
    assert!(result.notes.is_empty());
}

#[test]
fn test_fixture_default_value_location() {
    let result = check_fixture();
    let default = result
        .errors
        .iter()
        .find(|d| d.code == "TL0016")
        .unwrap();
    assert_eq!(default.locations[0].column, 52);
    assert_eq!(
        default.message,
        "Default value for property 'ErrorMessageOnFailure' should be '\"\"'"
    );
}

#[test]
fn test_fixture_is_stable_across_runs() {
    let first = check_fixture();
    for _ in 0..10 {
        let again = check_fixture();
        assert_eq!(again.errors, first.errors);
        assert_eq!(again.warnings, first.warnings);
    }
}
