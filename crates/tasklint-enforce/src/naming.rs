//! Naming rules: namespace, type and method names must follow the
//! vendor / system / action decomposition of the task identity.

use tasklint_core::types::Declaration;

use crate::context::PassContext;
use crate::reporter::ReportedKey;
use crate::rules::Rule;

/// TL0003: the task method must be named after the action.
pub fn check_method(ctx: &PassContext<'_>, method: &Declaration) {
    let Some(identity) = ctx.identity_of_method(method.id) else {
        return;
    };
    let Some(action) = identity.action() else {
        return;
    };
    if method.name != action {
        ctx.reporter.emit(
            ReportedKey::new(method.id, Rule::MethodNameMismatch),
            Rule::MethodNameMismatch,
            vec![action.to_string()],
            method.locations.clone(),
        );
    }
}

/// TL0002: the task class must be named after the system.
pub fn check_type(ctx: &PassContext<'_>, ty: &Declaration) {
    let Some(identity) = ctx.identity_of_type(ty.id) else {
        return;
    };
    let Some(system) = identity.system() else {
        return;
    };
    if ty.name != system {
        ctx.reporter.emit(
            ReportedKey::new(ty.id, Rule::TypeNameMismatch),
            Rule::TypeNameMismatch,
            vec![system.to_string()],
            ty.locations.clone(),
        );
    }
}

/// TL0001: a namespace holding a task whose identity did not decompose.
pub fn check_namespace(ctx: &PassContext<'_>, namespace: &Declaration) {
    let Some(identity) = ctx.identity_of_namespace(namespace.id) else {
        return;
    };
    if identity.is_resolved() {
        return;
    }
    ctx.reporter.emit(
        ReportedKey::new(namespace.id, Rule::NamespaceFormatInvalid),
        Rule::NamespaceFormatInvalid,
        vec![],
        namespace.locations.clone(),
    );
}

#[cfg(test)]
#[path = "naming_tests.rs"]
mod tests;
