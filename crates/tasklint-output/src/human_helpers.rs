use tasklint_enforce::rules::Severity;
use tasklint_enforce::types::Diagnostic;

pub(crate) fn format_diagnostic_human(d: &Diagnostic) -> String {
    let severity_label = match d.severity {
        _ if d.suppressed => "note",
        Severity::Error => "error",
        Severity::Warning => "warning",
        Severity::Info => "info",
    };

    let mut out = format!(
        "{}[{}]: {}\n  --> {}\n",
        severity_label,
        d.code,
        d.message,
        d.position(),
    );

    if d.locations.len() > 1 {
        let also: Vec<String> = d.locations[1..]
            .iter()
            .map(|l| format!("{}:{}", l.file, l.line))
            .collect();
        out.push_str(&format!("   = also at: {}\n", also.join(", ")));
    }

    if d.suppressed {
        if let Some(hint) = &d.suppress_hint {
            out.push_str(&format!("   = {}\n", hint));
        }
    }

    out
}
