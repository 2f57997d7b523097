/// Contract tests for the rule catalog printed by `tasklint rules`.
use std::collections::HashSet;

use tasklint_enforce::rules::{Category, Rule, Severity};
use tasklint_enforce::types::RulesResult;

use super::test_schema_helpers::{assert_output_schema, OutputSchema};

#[test]
fn rules_output_matches_schema() {
    let value = assert_output_schema(&RulesResult::catalog(), OutputSchema::Rules);
    assert_eq!(value["rules"][0]["code"], "TL0001");
}

#[test]
fn codes_are_unique_and_sequential() {
    let catalog = RulesResult::catalog();
    let codes: Vec<&str> = catalog.rules.iter().map(|r| r.code.as_str()).collect();
    let expected: Vec<String> = (1..=21).map(|i| format!("TL{:04}", i)).collect();
    assert_eq!(codes, expected);
    assert_eq!(codes.iter().collect::<HashSet<_>>().len(), 21);
}

#[test]
fn codes_resolve_back_to_rules() {
    for rule in Rule::ALL {
        assert_eq!(Rule::from_code(rule.code()), Some(rule));
    }
}

#[test]
fn default_severities() {
    let errors: Vec<&str> = Rule::ALL
        .iter()
        .filter(|r| r.default_severity() == Severity::Error)
        .map(|r| r.code())
        .collect();
    assert_eq!(
        errors,
        vec![
            "TL0001", "TL0002", "TL0003", "TL0007", "TL0009", "TL0012", "TL0013",
            "TL0014", "TL0015", "TL0016", "TL0017", "TL0021",
        ]
    );
    assert_eq!(Rule::ParameterNameSuggestion.default_severity(), Severity::Info);
    assert_eq!(Rule::ConfigurationMissing.default_severity(), Severity::Warning);
}

#[test]
fn every_category_has_rules() {
    let categories: HashSet<Category> = Rule::ALL.iter().map(|r| r.category()).collect();
    assert_eq!(categories.len(), 6);
}

#[test]
fn templates_take_their_arguments() {
    let catalog = RulesResult::catalog();
    let naming = catalog
        .rules
        .iter()
        .find(|r| r.code == "TL0002")
        .unwrap();
    assert_eq!(naming.message, "Type name should be '{0}'");
    let tag = catalog
        .rules
        .iter()
        .find(|r| r.code == "TL0013")
        .unwrap();
    assert!(tag.message.contains("{0}") && tag.message.contains("{1}"));
}
