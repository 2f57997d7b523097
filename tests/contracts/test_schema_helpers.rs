/// Output schemas under `tests/schemas`, one per tasklint command.
#[derive(Debug, Clone, Copy)]
pub enum OutputSchema {
    Check,
    Rules,
    Identity,
}

impl OutputSchema {
    fn source(self) -> &'static str {
        match self {
            OutputSchema::Check => include_str!("../schemas/check_output.schema.json"),
            OutputSchema::Rules => include_str!("../schemas/rules_output.schema.json"),
            OutputSchema::Identity => include_str!("../schemas/identity_output.schema.json"),
        }
    }
}

/// Serialize `output` as `--json` would and validate it against the schema of
/// its command. Returns the JSON value for further assertions.
pub fn assert_output_schema<T: serde::Serialize>(
    output: &T,
    schema: OutputSchema,
) -> serde_json::Value {
    let value = serde_json::to_value(output).unwrap();
    let schema_json: serde_json::Value = serde_json::from_str(schema.source()).unwrap();
    let validator = jsonschema::validator_for(&schema_json).unwrap();

    let violations: Vec<String> = validator
        .iter_errors(&value)
        .map(|e| format!("  {} at '{}'", e, e.instance_path))
        .collect();
    assert!(
        violations.is_empty(),
        "tasklint {:?} output does not match its schema:\n{}\n{}",
        schema,
        violations.join("\n"),
        serde_json::to_string_pretty(&value).unwrap_or_default()
    );
    value
}
