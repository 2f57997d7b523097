//! Type exposure and parameter type contracts.
//!
//! Tasks may only expose their own types, scalars and a short allow-list
//! through their parameters and results. Generic containers, arrays and
//! nullable wrappers are transparent: their element types are checked instead.
//! Same-namespace types declared in the graph are walked property by property.

use std::collections::HashSet;

use serde_json::Value;
use tasklint_core::identity::TaskIdentity;
use tasklint_core::types::{DeclId, DeclKind, Declaration, TypeRef};

use crate::category::TaskCategory;
use crate::context::PassContext;
use crate::reporter::ReportedKey;
use crate::rules::Rule;

pub const OPTIONS_TYPE: &str = "Options";
pub const INPUT_TYPE: &str = "Input";

/// `(property, required default, default as displayed)`
pub const OPTIONS_CONTRACT: [(&str, fn(&Value) -> bool, &str); 2] = [
    ("ThrowErrorOnFailure", |v| v == &Value::Bool(true), "true"),
    ("ErrorMessageOnFailure", |v| v.as_str() == Some(""), "\"\""),
];

const SYSTEM_SCALARS: &[&str] = &[
    "String", "Boolean", "Byte", "SByte", "Char", "Int16", "Int32", "Int64", "UInt16", "UInt32",
    "UInt64", "Single", "Double", "Decimal", "DateTime", "DateTimeOffset", "TimeSpan", "Guid",
];

/// Walks one type reference against the allow-list for a task namespace.
pub struct ExposurePolicy<'a> {
    namespace: &'a str,
    allowed_types: &'a [String],
}

impl<'a> ExposurePolicy<'a> {
    pub fn new(namespace: &'a str, allowed_types: &'a [String]) -> Self {
        Self {
            namespace,
            allowed_types,
        }
    }

    /// True when `namespace` is the task namespace or nested inside it.
    pub fn owns_namespace(&self, namespace: &str) -> bool {
        !self.namespace.is_empty()
            && (namespace == self.namespace
                || namespace
                    .strip_prefix(self.namespace)
                    .is_some_and(|rest| rest.starts_with('.')))
    }

    pub fn is_allowed(&self, ty: &TypeRef) -> bool {
        match ty {
            TypeRef::Primitive { .. } => true,
            TypeRef::Array { element } => self.is_allowed(element),
            TypeRef::Nullable { inner } => self.is_allowed(inner),
            TypeRef::Named {
                namespace,
                name,
                type_args,
            } => {
                let args_allowed = || type_args.iter().all(|a| self.is_allowed(a));
                let qualified = ty.qualified_name().unwrap_or_default();
                if self.allowed_types.iter().any(|t| *t == qualified) {
                    return true;
                }
                match namespace.as_str() {
                    "System" if name == "Nullable" => args_allowed(),
                    "System" => SYSTEM_SCALARS.contains(&name.as_str()),
                    "System.Threading" => name == "CancellationToken",
                    _ if ty.is_async_wrapper() => args_allowed(),
                    ns if ns == "System.Collections" || ns.starts_with("System.Collections.") => {
                        args_allowed()
                    }
                    ns if self.owns_namespace(ns) => args_allowed(),
                    _ => false,
                }
            }
        }
    }
}

/// Named types mentioned anywhere in `ty`, including element and argument types.
fn named_parts<'t>(ty: &'t TypeRef, out: &mut Vec<&'t TypeRef>) {
    match ty {
        TypeRef::Primitive { .. } => {}
        TypeRef::Array { element } => named_parts(element, out),
        TypeRef::Nullable { inner } => named_parts(inner, out),
        TypeRef::Named { type_args, .. } => {
            out.push(ty);
            for arg in type_args {
                named_parts(arg, out);
            }
        }
    }
}

pub fn check_method(ctx: &PassContext<'_>, method: &Declaration) {
    let Some(identity) = ctx.identity_of_method(method.id) else {
        return;
    };
    let category = TaskCategory::of(method);
    let policy = ExposurePolicy::new(identity.namespace(), &ctx.settings.allowed_types);

    let mut roots: Vec<DeclId> = Vec::new();
    for param in ctx.graph.parameters_of(method.id) {
        let Some(ty) = param.declared_type() else {
            continue;
        };
        if !policy.is_allowed(ty) {
            report_exposed(ctx, param);
            continue;
        }
        roots.extend(owned_types(ctx, &policy, ty));
    }

    if let DeclKind::Method {
        return_type,
        return_type_location,
        ..
    } = &method.kind
    {
        if let Some(result) = crate::structure::task_result_type(return_type) {
            if policy.is_allowed(result) {
                roots.extend(owned_types(ctx, &policy, result));
            } else {
                let location = return_type_location
                    .clone()
                    .or_else(|| method.primary_location().cloned());
                ctx.reporter.emit(
                    ReportedKey::new(method.id, Rule::ExposedThirdPartyType),
                    Rule::ExposedThirdPartyType,
                    vec![method.name.clone()],
                    location.into_iter().collect(),
                );
            }
        }
    }

    for root in &roots {
        let decl = ctx.graph.decl(*root);
        check_contracts(ctx, identity, category, decl);
    }
    walk_properties(ctx, &policy, roots);
}

/// Graph-declared types inside the task namespace that `ty` mentions.
fn owned_types(ctx: &PassContext<'_>, policy: &ExposurePolicy<'_>, ty: &TypeRef) -> Vec<DeclId> {
    let mut parts = Vec::new();
    named_parts(ty, &mut parts);
    parts
        .into_iter()
        .filter_map(|part| ctx.graph.resolve_type(part))
        .filter(|decl| policy.owns_namespace(ctx.graph.namespace_of(decl.id)))
        .map(|decl| decl.id)
        .collect()
}

fn walk_properties(ctx: &PassContext<'_>, policy: &ExposurePolicy<'_>, roots: Vec<DeclId>) {
    let mut visited: HashSet<DeclId> = HashSet::new();
    let mut stack = roots;
    while let Some(type_id) = stack.pop() {
        if !visited.insert(type_id) {
            continue;
        }
        for prop in ctx.graph.properties_of(type_id).filter(|p| p.is_public()) {
            let Some(ty) = prop.declared_type() else {
                continue;
            };
            if policy.is_allowed(ty) {
                stack.extend(owned_types(ctx, policy, ty));
            } else {
                report_exposed(ctx, prop);
            }
        }
    }
}

fn report_exposed(ctx: &PassContext<'_>, member: &Declaration) {
    ctx.reporter.emit(
        ReportedKey::new(member.id, Rule::ExposedThirdPartyType),
        Rule::ExposedThirdPartyType,
        vec![member.name.clone()],
        member.primary_location().cloned().into_iter().collect(),
    );
}

/// Options and converter Input contracts, keyed on the type's name.
fn check_contracts(
    ctx: &PassContext<'_>,
    identity: &TaskIdentity,
    category: TaskCategory,
    ty: &Declaration,
) {
    let properties: Vec<&Declaration> = ctx.graph.properties_of(ty.id).collect();
    let find = |name: &str| properties.iter().copied().find(|p| p.name == name);

    match ty.name.as_str() {
        OPTIONS_TYPE => {
            for (name, accepts, expected) in OPTIONS_CONTRACT {
                match find(name) {
                    None => report_missing_property(ctx, ty, name),
                    Some(prop) => check_default(ctx, prop, accepts, expected),
                }
            }
        }
        INPUT_TYPE if category == TaskCategory::Converter => {
            if let Some((from, _)) = identity.converter_formats() {
                if find(from).is_none() {
                    report_missing_property(ctx, ty, from);
                }
            }
        }
        _ => {}
    }
}

fn report_missing_property(ctx: &PassContext<'_>, ty: &Declaration, property: &str) {
    ctx.reporter.emit(
        ReportedKey::with_argument(ty.id, Rule::RequiredPropertyMissing, property),
        Rule::RequiredPropertyMissing,
        vec![ty.name.clone(), property.to_string()],
        ty.primary_location().cloned().into_iter().collect(),
    );
}

fn check_default(
    ctx: &PassContext<'_>,
    prop: &Declaration,
    accepts: fn(&Value) -> bool,
    expected: &str,
) {
    let DeclKind::Property {
        default_value: Some(default),
        ..
    } = &prop.kind
    else {
        return;
    };
    if accepts(&default.value) {
        return;
    }
    let location = default
        .location
        .clone()
        .or_else(|| prop.primary_location().cloned());
    ctx.reporter.emit(
        ReportedKey::new(prop.id, Rule::IncorrectPropertyDefaultValue),
        Rule::IncorrectPropertyDefaultValue,
        vec![prop.name.clone(), expected.to_string()],
        location.into_iter().collect(),
    );
}

#[cfg(test)]
#[path = "exposure_tests.rs"]
mod tests;
