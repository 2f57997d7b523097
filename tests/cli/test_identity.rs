// Tests for `tasklint identity`

use crate::common::{create_project, run_tasklint};

#[test]
fn test_identity_human() {
    let (_dir, root) = create_project(&[]);
    let (code, stdout, _) = run_tasklint(&root, &["identity", "Frends.Http.Request.Http.Request"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("  vendor:    Frends\n"));
    assert!(stdout.contains("  system:    Http\n"));
    assert!(stdout.contains("  action:    Request\n"));
    assert!(stdout.contains("  namespace: Frends.Http.Request\n"));
}

#[test]
fn test_identity_json_with_root_namespace() {
    let (_dir, root) = create_project(&[]);
    let (code, stdout, _) = run_tasklint(
        &root,
        &[
            "identity",
            "--json",
            "--root-namespace",
            "Frends.Http",
            "Frends.Http.Request.Http.Request",
        ],
    );
    assert_eq!(code, 0);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["command"], "identity");
    assert_eq!(value["resolved"], false);
    assert!(value["system"].is_null());
}

#[test]
fn test_identity_converter() {
    let (_dir, root) = create_project(&[]);
    let (_, stdout, _) = run_tasklint(
        &root,
        &["identity", "Frends.Xml.ConvertXmlToCsv.Xml.ConvertXmlToCsv"],
    );
    assert!(stdout.contains("  converts:  Xml -> Csv\n"));
}

#[test]
fn test_identity_invalid_path_exits_2() {
    let (_dir, root) = create_project(&[]);
    let (code, stdout, stderr) = run_tasklint(&root, &["identity", "Frends.Echo."]);
    assert_eq!(code, 2);
    assert!(stdout.is_empty());
    assert!(stderr.contains("tasklint identity: invalid task identity 'Frends.Echo.'"));
}
