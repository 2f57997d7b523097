//! Pass-level check that there is anything to match against.

use tasklint_core::identity::TaskRegistry;

use crate::reporter::{ReportedKey, Reporter};
use crate::rules::Rule;

/// Report `ConfigurationMissing` once when the registry is empty.
/// Returns true when the pass has identities to check.
pub fn check_registry(reporter: &Reporter<'_>, registry: &TaskRegistry) -> bool {
    if !registry.is_empty() {
        return true;
    }
    tracing::debug!("no task metadata, skipping declaration rules");
    reporter.emit(
        ReportedKey::pass(Rule::ConfigurationMissing),
        Rule::ConfigurationMissing,
        vec![],
        vec![],
    );
    false
}
