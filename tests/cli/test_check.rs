// Tests for `tasklint check` against project directories

use std::process::Command;

use crate::common::{create_project, run_tasklint, setup_fixture_project, tasklint_bin};

#[test]
fn test_check_fixture_human_output() {
    let (_dir, root) = setup_fixture_project("http_task");
    let (code, stdout, _) = run_tasklint(&root, &["check"]);

    assert_eq!(code, 1);
    assert!(stdout.starts_with("error[TL0017]: Property 'Handler' exposes a third-party type\n  --> Definitions/Input.cs:18\n"));
    assert!(stdout.contains("warning[TL0011]: Class should include a 'StatusCode' property"));
    assert!(stdout.contains("3 error(s), 1 warning(s), 0 note(s) in 1 task(s)"));
}

#[test]
fn test_check_fixture_json_output() {
    let (_dir, root) = setup_fixture_project("http_task");
    let (code, stdout, _) = run_tasklint(&root, &["check", "--json"]);

    assert_eq!(code, 1);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["command"], "check");
    assert_eq!(value["status"], "error");
    assert_eq!(value["info"]["metadata_source"], "sidecar");
    assert_eq!(value["identities"][0], "Frends.Http.Request.Http.Request");
    let codes: Vec<&str> = value["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["TL0017", "TL0016", "TL0013"]);
}

#[test]
fn test_suppress_flag_turns_errors_into_notes() {
    let (_dir, root) = setup_fixture_project("http_task");
    let (code, stdout, _) = run_tasklint(
        &root,
        &[
            "check",
            "--suppress",
            "TL0013",
            "--suppress",
            "TL0016",
            "--suppress",
            "TL0017",
        ],
    );
    assert_eq!(code, 0, "warnings alone do not fail the check");
    assert!(stdout.contains("0 error(s), 1 warning(s), 3 note(s)"));
    assert!(stdout.contains("note[TL0017]"));
    assert!(stdout.contains("= Suppressed TL0017"));
}

#[test]
fn test_strict_fails_on_warnings() {
    let (_dir, root) = setup_fixture_project("http_task");
    let args = [
        "check", "--strict", "--suppress", "TL0013", "--suppress", "TL0016", "--suppress",
        "TL0017",
    ];
    let (code, _, _) = run_tasklint(&root, &args);
    assert_eq!(code, 1);
}

#[test]
fn test_config_file_suppresses() {
    let (_dir, root) = setup_fixture_project("http_task");
    crate::common::write_file(
        &root,
        ".tasklint/tasklint.json",
        r#"{ "suppress": ["TL0011", "TL0013", "TL0016", "TL0017"] }"#,
    );
    let (code, stdout, _) = run_tasklint(&root, &["check", "--json"]);
    assert_eq!(code, 0);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["status"], "ok");
    assert_eq!(value["notes"].as_array().unwrap().len(), 4);
}

#[test]
fn test_task_methods_env_overrides_sidecar() {
    let (_dir, root) = setup_fixture_project("http_task");
    let out = Command::new(tasklint_bin())
        .args(["check", "--json"])
        .current_dir(&root)
        .env_remove("RUST_LOG")
        .env("TASKLINT_TASK_METHODS", "Acme.Other.Run.Other.Run")
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["info"]["metadata_source"], "config");
    assert_eq!(value["info"]["tasks_matched"], 0);
    assert_eq!(value["status"], "ok");
    assert_eq!(out.status.code(), Some(0));
}

#[test]
fn test_no_metadata_warns() {
    let (_dir, root) = create_project(&[("graph.json", r#"{ "declarations": [] }"#)]);
    let (code, stdout, _) = run_tasklint(&root, &["check"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("warning[TL0020]: There is no task metadata in the project"));
    assert!(stdout.contains("--> <project>"));
}

#[test]
fn test_clean_project_prints_nothing() {
    let (_dir, root) = create_project(&[
        ("graph.json", r#"{ "declarations": [] }"#),
        ("TaskMetadata.json", r#"{ "Tasks": [ { "TaskMethod": "Acme.Tools.Run.Tools.Run" } ] }"#),
    ]);
    let (code, stdout, _) = run_tasklint(&root, &["check"]);
    assert_eq!(code, 0);
    assert!(stdout.is_empty(), "unexpected output: {}", stdout);
}

#[test]
fn test_explicit_graph_and_metadata_paths() {
    let (_dir, root) = setup_fixture_project("http_task");
    let (code, _, _) = run_tasklint(
        root.parent().unwrap(),
        &[
            "check",
            "--graph",
            root.join("graph.json").to_str().unwrap(),
            "--metadata",
            root.join("TaskMetadata.json").to_str().unwrap(),
        ],
    );
    assert_eq!(code, 1);
}
