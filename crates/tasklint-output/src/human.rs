use crate::human_helpers::format_diagnostic_human;
use crate::OutputFormatter;
use tasklint_enforce::types::{CheckResult, IdentityResult, RulesResult};

pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_check(&self, result: &CheckResult) -> String {
        let reported = result.errors.len() + result.warnings.len() + result.notes.len();
        if reported == 0 {
            return String::new(); // Clean check = empty stdout
        }

        let mut out = String::new();
        for d in result
            .errors
            .iter()
            .chain(&result.warnings)
            .chain(&result.notes)
        {
            out.push_str(&format_diagnostic_human(d));
        }

        out.push_str(&format!(
            "\n{} error(s), {} warning(s), {} note(s) in {} task(s)\n",
            result.errors.len(),
            result.warnings.len(),
            result.notes.len(),
            result.info.tasks_matched,
        ));
        if result.info.cancelled {
            out.push_str("analysis cancelled before all declarations were checked\n");
        }
        out
    }

    fn format_rules(&self, result: &RulesResult) -> String {
        let mut out = String::new();
        for r in &result.rules {
            out.push_str(&format!(
                "{} {:<8} {:<14} {}\n         {}\n",
                r.code,
                r.severity.as_str().to_ascii_lowercase(),
                r.category.as_str(),
                r.title,
                r.message,
            ));
        }
        out
    }

    fn format_identity(&self, result: &IdentityResult) -> String {
        let mut out = format!("{}\n", result.path);
        if !result.resolved {
            out.push_str("  unresolved: expected Vendor.System.Action.Type.Method\n");
            return out;
        }
        let part = |p: &Option<String>| p.clone().unwrap_or_default();
        out.push_str(&format!("  vendor:    {}\n", part(&result.vendor)));
        out.push_str(&format!("  system:    {}\n", part(&result.system)));
        out.push_str(&format!("  action:    {}\n", part(&result.action)));
        out.push_str(&format!("  namespace: {}\n", result.namespace));
        if let Some(c) = &result.converter {
            out.push_str(&format!("  converts:  {} -> {}\n", c.from, c.to));
        }
        out
    }
}
