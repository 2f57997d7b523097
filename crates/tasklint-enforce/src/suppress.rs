use std::collections::{HashMap, HashSet};

use crate::rules::Severity;
use crate::types::Diagnostic;

/// Manages suppressed rule codes and per-rule severity overrides.
///
/// When a code is suppressed, diagnostics with that code are:
/// - Changed to severity `INFO` and marked suppressed=true
/// - Given a suppress_hint explaining the suppression
///
/// Overrides are applied first, so a suppressed rule always ends as `INFO`.
#[derive(Debug, Default)]
pub struct SuppressionManager {
    suppressed_codes: HashSet<String>,
    overrides: HashMap<String, Severity>,
}

impl SuppressionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a code to suppress (e.g., "TL0008").
    pub fn suppress(&mut self, code: &str) {
        self.suppressed_codes.insert(code.to_string());
    }

    pub fn override_severity(&mut self, code: &str, severity: Severity) {
        self.overrides.insert(code.to_string(), severity);
    }

    pub fn is_suppressed(&self, code: &str) -> bool {
        self.suppressed_codes.contains(code)
    }

    pub fn apply(&self, mut diagnostic: Diagnostic) -> Diagnostic {
        if let Some(severity) = self.overrides.get(&diagnostic.code) {
            diagnostic.severity = *severity;
        }
        if self.is_suppressed(&diagnostic.code) {
            diagnostic.suppress_hint = Some(format!(
                "Suppressed {} via configuration or --suppress flag",
                diagnostic.code
            ));
            diagnostic.suppressed = true;
            diagnostic.severity = Severity::Info;
        }
        diagnostic
    }

    /// Number of active suppressions.
    pub fn count(&self) -> usize {
        self.suppressed_codes.len()
    }
}
