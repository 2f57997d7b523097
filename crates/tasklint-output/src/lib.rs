//! Output formatters for tasklint command results.
//!
//! Provides two output modes:
//! - **JSON** (`--json`): Machine-readable structured output
//! - **Human** (default): Compiler-style diagnostics for terminal users

pub mod human;
pub(crate) mod human_helpers;
pub mod json;

use tasklint_enforce::types::{CheckResult, IdentityResult, RulesResult};

pub trait OutputFormatter {
    fn format_check(&self, result: &CheckResult) -> String;
    fn format_rules(&self, result: &RulesResult) -> String;
    fn format_identity(&self, result: &IdentityResult) -> String;
}
