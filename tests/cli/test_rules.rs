// Tests for `tasklint rules`

use crate::common::{create_project, run_tasklint};

#[test]
fn test_rules_human_lists_all_codes() {
    let (_dir, root) = create_project(&[]);
    let (code, stdout, _) = run_tasklint(&root, &["rules"]);
    assert_eq!(code, 0);
    for i in 1..=21 {
        assert!(stdout.contains(&format!("TL{:04} ", i)), "missing TL{:04}", i);
    }
    assert!(stdout.contains("TL0008 info     parameters"));
}

#[test]
fn test_rules_json() {
    let (_dir, root) = create_project(&[]);
    let (code, stdout, _) = run_tasklint(&root, &["rules", "--json"]);
    assert_eq!(code, 0);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["command"], "rules");
    let rules = value["rules"].as_array().unwrap();
    assert_eq!(rules.len(), 21);
    assert_eq!(rules[19]["code"], "TL0020");
    assert_eq!(rules[19]["severity"], "WARNING");
    assert_eq!(rules[19]["category"], "configuration");
}
