use crate::OutputFormatter;
use tasklint_enforce::types::{CheckResult, IdentityResult, RulesResult};

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_check(&self, result: &CheckResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_default()
    }
    fn format_rules(&self, result: &RulesResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_default()
    }
    fn format_identity(&self, result: &IdentityResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_default()
    }
}
