//! Structural contract: static task classes and methods, no overloads, and a
//! `Result` (or `Task<Result>`) return type carrying the fields its category
//! requires.

use tasklint_core::types::{DeclKind, Declaration, TypeRef};

use crate::category::TaskCategory;
use crate::context::PassContext;
use crate::reporter::ReportedKey;
use crate::rules::Rule;

pub const RESULT_TYPE: &str = "Result";
pub const EXPECTED_RETURN: &str = "Result or Task<Result>";

/// Properties every result type declares, whatever the category.
pub const BASE_RESULT_PROPERTIES: [&str; 2] = ["Success", "Error"];

/// The `Result` type a valid task return type carries, unwrapping `Task<Result>`.
pub fn task_result_type(return_type: &TypeRef) -> Option<&TypeRef> {
    if is_result(return_type) {
        return Some(return_type);
    }
    match return_type {
        TypeRef::Named { type_args, .. } if return_type.is_async_wrapper() => {
            type_args.first().filter(|arg| is_result(arg))
        }
        _ => None,
    }
}

fn is_result(ty: &TypeRef) -> bool {
    matches!(ty, TypeRef::Named { name, .. } if name == RESULT_TYPE)
}

/// TL0004
pub fn check_type(ctx: &PassContext<'_>, ty: &Declaration) {
    if ctx.identity_of_type(ty.id).is_none() || ty.is_static() {
        return;
    }
    ctx.reporter.emit(
        ReportedKey::new(ty.id, Rule::ClassShouldBeStatic),
        Rule::ClassShouldBeStatic,
        vec![ty.name.clone()],
        ty.primary_location().cloned().into_iter().collect(),
    );
}

/// TL0005, TL0006, TL0010, TL0011
pub fn check_method(ctx: &PassContext<'_>, method: &Declaration) {
    if ctx.identity_of_method(method.id).is_none() {
        return;
    }
    let DeclKind::Method {
        return_type,
        return_type_location,
        ..
    } = &method.kind
    else {
        return;
    };
    let location: Vec<_> = method.primary_location().cloned().into_iter().collect();

    if !method.is_static() {
        ctx.reporter.emit(
            ReportedKey::new(method.id, Rule::MethodShouldBeStatic),
            Rule::MethodShouldBeStatic,
            vec![method.name.clone()],
            location.clone(),
        );
    }

    if let Some(owner) = method.parent {
        let mut same_name = ctx
            .graph
            .methods_of(owner)
            .filter(|m| m.name == method.name);
        let first = same_name.next();
        if same_name.next().is_some() && first.is_some_and(|f| f.id == method.id) {
            ctx.reporter.emit(
                ReportedKey::new(method.id, Rule::MethodOverloadNotAllowed),
                Rule::MethodOverloadNotAllowed,
                vec![method.name.clone()],
                location.clone(),
            );
        }
    }

    let Some(result) = task_result_type(return_type) else {
        ctx.reporter.emit(
            ReportedKey::new(method.id, Rule::ReturnTypeIncorrect),
            Rule::ReturnTypeIncorrect,
            vec![EXPECTED_RETURN.to_string()],
            location,
        );
        return;
    };

    let Some(result_decl) = ctx.graph.resolve_type(result) else {
        tracing::debug!(
            method = %method.name,
            result = %result,
            "result type not declared in graph, skipping property check"
        );
        return;
    };

    let declared: Vec<&str> = ctx
        .graph
        .properties_of(result_decl.id)
        .map(|p| p.name.as_str())
        .collect();
    let category = TaskCategory::of(method);
    let return_location: Vec<_> = return_type_location
        .clone()
        .or_else(|| method.primary_location().cloned())
        .into_iter()
        .collect();

    for required in BASE_RESULT_PROPERTIES
        .iter()
        .chain(category.required_result_properties())
    {
        if declared.contains(required) {
            continue;
        }
        ctx.reporter.emit(
            ReportedKey::with_argument(method.id, Rule::ReturnTypeMissingProperty, required),
            Rule::ReturnTypeMissingProperty,
            vec![required.to_string()],
            return_location.clone(),
        );
    }
}

#[cfg(test)]
#[path = "structure_tests.rs"]
mod tests;
