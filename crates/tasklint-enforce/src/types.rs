use serde::{Deserialize, Serialize};
use tasklint_core::identity::TaskIdentity;
use tasklint_core::types::{DeclId, Location};

use crate::rules::{Category, Rule, Severity};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    pub version: String,
    pub command: String,
    pub status: String, // "ok" | "error" | "warning"
    pub identities: Vec<String>,
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
    /// Info-level and suppressed diagnostics.
    pub notes: Vec<Diagnostic>,
    pub info: CheckInfo,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckInfo {
    pub declarations_analyzed: u32,
    pub tasks_matched: u32,
    pub metadata_source: String,
    pub cancelled: bool,
}

/// One reported convention violation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub code: String,
    pub rule: Rule,
    pub category: Category,
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub arguments: Vec<String>,
    /// Empty for pass-scoped diagnostics.
    pub locations: Vec<Location>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub declaration: Option<DeclId>,
    pub suppressed: bool,
    pub suppress_hint: Option<String>,
}

impl Diagnostic {
    pub fn new(rule: Rule, arguments: Vec<String>, locations: Vec<Location>) -> Self {
        Self {
            code: rule.code().to_string(),
            rule,
            category: rule.category(),
            severity: rule.default_severity(),
            title: rule.title().to_string(),
            message: rule.format_message(&arguments),
            arguments,
            locations,
            declaration: None,
            suppressed: false,
            suppress_hint: None,
        }
    }

    pub fn on(mut self, declaration: DeclId) -> Self {
        self.declaration = Some(declaration);
        self
    }

    pub fn primary_location(&self) -> Option<&Location> {
        self.locations.first()
    }

    /// `file:line` of the primary location, or `<project>` for pass-scoped diagnostics.
    pub fn position(&self) -> String {
        match self.primary_location() {
            Some(loc) => format!("{}:{}", loc.file, loc.line),
            None => "<project>".to_string(),
        }
    }
}

/// Catalog entry as printed by `tasklint rules`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleInfo {
    pub code: String,
    pub rule: Rule,
    pub category: Category,
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl From<Rule> for RuleInfo {
    fn from(rule: Rule) -> Self {
        Self {
            code: rule.code().to_string(),
            rule,
            category: rule.category(),
            severity: rule.default_severity(),
            title: rule.title().to_string(),
            message: rule.template().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesResult {
    pub version: String,
    pub command: String,
    pub rules: Vec<RuleInfo>,
}

impl RulesResult {
    pub fn catalog() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            command: "rules".to_string(),
            rules: Rule::ALL.iter().copied().map(RuleInfo::from).collect(),
        }
    }
}

/// Decomposition of one identity path, as printed by `tasklint identity`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityResult {
    pub version: String,
    pub command: String,
    pub path: String,
    pub resolved: bool,
    pub vendor: Option<String>,
    pub system: Option<String>,
    pub action: Option<String>,
    /// Namespace the task's own types must live in.
    pub namespace: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub converter: Option<ConverterFormats>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConverterFormats {
    pub from: String,
    pub to: String,
}

impl From<&TaskIdentity> for IdentityResult {
    fn from(identity: &TaskIdentity) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            command: "identity".to_string(),
            path: identity.path().to_string(),
            resolved: identity.is_resolved(),
            vendor: identity.vendor().map(str::to_string),
            system: identity.system().map(str::to_string),
            action: identity.action().map(str::to_string),
            namespace: identity.namespace().to_string(),
            converter: identity.converter_formats().map(|(from, to)| ConverterFormats {
                from: from.to_string(),
                to: to.to_string(),
            }),
        }
    }
}
