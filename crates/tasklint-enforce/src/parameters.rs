//! Parameter contract for task methods.
//!
//! A task method takes an ordered subset of the canonical sequence
//! `Input, Connection, Options, CancellationToken`, matched by the simple
//! name of each parameter's type.

use tasklint_core::types::Declaration;

use crate::context::PassContext;
use crate::reporter::ReportedKey;
use crate::rules::Rule;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpectedParameter {
    pub type_name: &'static str,
    pub canonical_name: &'static str,
    pub required: bool,
    pub is_property: bool,
}

/// Canonical order. Position in this list is the ordering rank.
pub const EXPECTED_PARAMETERS: [ExpectedParameter; 4] = [
    ExpectedParameter {
        type_name: "Input",
        canonical_name: "input",
        required: false,
        is_property: true,
    },
    ExpectedParameter {
        type_name: "Connection",
        canonical_name: "connection",
        required: false,
        is_property: true,
    },
    ExpectedParameter {
        type_name: "Options",
        canonical_name: "options",
        required: true,
        is_property: true,
    },
    ExpectedParameter {
        type_name: "CancellationToken",
        canonical_name: "cancellationToken",
        required: true,
        is_property: false,
    },
];

/// Index into [`EXPECTED_PARAMETERS`] for a parameter type name.
pub fn expected_index(type_name: &str) -> Option<usize> {
    EXPECTED_PARAMETERS
        .iter()
        .position(|e| e.type_name == type_name)
}

pub fn check_method(ctx: &PassContext<'_>, method: &Declaration) {
    if ctx.identity_of_method(method.id).is_none() {
        return;
    }
    let parameters: Vec<(&Declaration, String)> = ctx
        .graph
        .parameters_of(method.id)
        .filter_map(|p| Some((p, p.declared_type()?.simple_name())))
        .collect();
    let method_location: Vec<_> = method.primary_location().cloned().into_iter().collect();

    // TL0007
    for expected in EXPECTED_PARAMETERS.iter().filter(|e| e.required) {
        if !parameters.iter().any(|(_, ty)| ty == expected.type_name) {
            ctx.reporter.emit(
                ReportedKey::with_argument(
                    method.id,
                    Rule::MissingRequiredParameter,
                    expected.type_name,
                ),
                Rule::MissingRequiredParameter,
                vec![expected.type_name.to_string()],
                method_location.clone(),
            );
        }
    }

    let mut order_index = 0;
    let mut order_reported = false;
    for (param, type_name) in &parameters {
        let location: Vec<_> = param.primary_location().cloned().into_iter().collect();

        let Some(index) = expected_index(type_name) else {
            // TL0018; unknown parameters take no part in naming or ordering.
            ctx.reporter.emit(
                ReportedKey::new(param.id, Rule::UnknownParameter),
                Rule::UnknownParameter,
                vec![type_name.clone()],
                location,
            );
            continue;
        };
        let expected = &EXPECTED_PARAMETERS[index];

        // TL0008
        if param.name != expected.canonical_name {
            ctx.reporter.emit(
                ReportedKey::new(param.id, Rule::ParameterNameSuggestion),
                Rule::ParameterNameSuggestion,
                vec![expected.canonical_name.to_string()],
                location.clone(),
            );
        }

        // TL0009
        if expected.is_property && !param.has_attribute(&ctx.settings.property_marker) {
            ctx.reporter.emit(
                ReportedKey::new(param.id, Rule::MissingPropertyMarker),
                Rule::MissingPropertyMarker,
                vec![ctx.settings.property_marker.clone()],
                location,
            );
        }

        // TL0019
        if !order_reported {
            if index >= order_index {
                order_index = index + 1;
            } else {
                ctx.reporter.emit(
                    ReportedKey::new(method.id, Rule::ParametersOutOfOrder),
                    Rule::ParametersOutOfOrder,
                    vec![],
                    method_location.clone(),
                );
                order_reported = true;
            }
        }
    }
}

#[cfg(test)]
#[path = "parameters_tests.rs"]
mod tests;
