//! Documentation contract for task-facing declarations.
//!
//! Doc comments are XML fragments. They are parsed with a synthetic root so
//! several top-level tags (`<summary>`, `<example>`, `<param>`) form one document.

use tasklint_core::types::{DeclKind, Declaration};

use crate::context::PassContext;
use crate::reporter::ReportedKey;
use crate::rules::Rule;

pub const REQUIRED_TAGS: [&str; 1] = ["summary"];
pub const REQUIRED_PROPERTY_TAGS: [&str; 1] = ["example"];

/// Wildcard attribute: the tag itself is unsupported.
pub const ANY_ATTRIBUTE: &str = "*";

/// Cross-reference tags that do not render in the task catalog.
pub const UNSUPPORTED_TAGS: [(&str, &str); 3] = [
    ("see", "cref"),
    ("seealso", "cref"),
    ("cref", ANY_ATTRIBUTE),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocFinding {
    MissingTag(&'static str),
    UnsupportedTag(&'static str, &'static str),
    LinkMissing,
    Invalid,
}

/// Inspect one doc comment. Absent or blank text only yields missing tags.
pub fn inspect(
    text: Option<&str>,
    is_property: bool,
    link_marker: Option<&str>,
) -> Vec<DocFinding> {
    let required = || {
        let extra: &'static [&'static str] = if is_property {
            &REQUIRED_PROPERTY_TAGS
        } else {
            &[]
        };
        let base: &'static [&'static str] = &REQUIRED_TAGS;
        extra.iter().chain(base).copied()
    };

    let Some(text) = text.filter(|t| !t.trim().is_empty()) else {
        return required().map(DocFinding::MissingTag).collect();
    };

    let wrapped = format!("<doc>{}</doc>", text);
    let doc = match roxmltree::Document::parse(&wrapped) {
        Ok(doc) => doc,
        Err(e) => {
            tracing::debug!(error = %e, "unparsable documentation");
            return vec![DocFinding::Invalid];
        }
    };

    let has_element = |tag: &str| {
        doc.descendants()
            .any(|n| n.is_element() && n.tag_name().name() == tag)
    };

    let mut findings: Vec<DocFinding> = required()
        .filter(|tag| !has_element(tag))
        .map(DocFinding::MissingTag)
        .collect();

    for (tag, attribute) in UNSUPPORTED_TAGS {
        let used = doc.descendants().any(|n| {
            n.is_element()
                && n.tag_name().name() == tag
                && (attribute == ANY_ATTRIBUTE || n.has_attribute(attribute))
        });
        if used {
            findings.push(DocFinding::UnsupportedTag(tag, attribute));
        }
    }

    if let Some(marker) = link_marker {
        let linked = doc
            .descendants()
            .filter(|n| n.is_text())
            .any(|n| n.text().is_some_and(|t| t.contains(marker)));
        if !linked {
            findings.push(DocFinding::LinkMissing);
        }
    }

    findings
}

/// Whether `decl` is part of a task's public surface.
fn in_scope(ctx: &PassContext<'_>, decl: &Declaration) -> bool {
    if !decl.is_public() {
        return false;
    }
    match decl.kind {
        DeclKind::Type { .. } => ctx.is_documented_type(decl.id),
        DeclKind::Method { .. } | DeclKind::Property { .. } => decl
            .parent
            .is_some_and(|owner| ctx.is_documented_type(owner)),
        DeclKind::Namespace | DeclKind::Parameter { .. } => false,
    }
}

pub fn check_declaration(ctx: &PassContext<'_>, decl: &Declaration) {
    if !in_scope(ctx, decl) {
        return;
    }
    let is_property = matches!(decl.kind, DeclKind::Property { .. });
    let entry_point = matches!(decl.kind, DeclKind::Method { .. })
        && ctx.identity_of_method(decl.id).is_some();
    let link_marker = entry_point.then_some(ctx.settings.link_marker.as_str());
    let location: Vec<_> = decl.primary_location().cloned().into_iter().collect();

    for finding in inspect(decl.documentation_text(), is_property, link_marker) {
        let (key, rule, arguments) = match finding {
            DocFinding::MissingTag(tag) => (
                ReportedKey::with_argument(decl.id, Rule::RequiredTagMissing, tag),
                Rule::RequiredTagMissing,
                vec![tag.to_string()],
            ),
            DocFinding::UnsupportedTag(tag, attribute) => (
                ReportedKey::with_argument(
                    decl.id,
                    Rule::UnsupportedTagUsed,
                    &format!("{}@{}", tag, attribute),
                ),
                Rule::UnsupportedTagUsed,
                vec![tag.to_string(), attribute.to_string()],
            ),
            DocFinding::LinkMissing => (
                ReportedKey::new(decl.id, Rule::DocumentationLinkMissing),
                Rule::DocumentationLinkMissing,
                vec![ctx.settings.link_marker.clone()],
            ),
            DocFinding::Invalid => (
                ReportedKey::new(decl.id, Rule::DocumentationInvalid),
                Rule::DocumentationInvalid,
                vec![],
            ),
        };
        ctx.reporter.emit(key, rule, arguments, location.clone());
    }
}

#[cfg(test)]
#[path = "documentation_tests.rs"]
mod tests;
