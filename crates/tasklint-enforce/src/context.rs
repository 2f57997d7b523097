//! Per-pass state handed explicitly to every rule module.

use std::collections::HashSet;

use tasklint_core::config::TasklintConfig;
use tasklint_core::graph::DeclarationGraph;
use tasklint_core::identity::{TaskIdentity, TaskRegistry};
use tasklint_core::types::{DeclId, DeclKind, Declaration, TypeRef};

use crate::matcher::IdentityMatcher;
use crate::reporter::Reporter;
use crate::structure::task_result_type;

/// Rule knobs resolved from configuration.
#[derive(Debug, Clone)]
pub struct RuleSettings {
    pub naming: bool,
    pub parameters: bool,
    pub structure: bool,
    pub documentation: bool,
    pub types: bool,
    pub property_marker: String,
    pub link_marker: String,
    pub allowed_types: Vec<String>,
}

impl Default for RuleSettings {
    fn default() -> Self {
        Self::from(&TasklintConfig::default())
    }
}

impl From<&TasklintConfig> for RuleSettings {
    fn from(config: &TasklintConfig) -> Self {
        Self {
            naming: config.enforce.naming,
            parameters: config.enforce.parameters,
            structure: config.enforce.structure,
            documentation: config.enforce.documentation,
            types: config.enforce.types,
            property_marker: config.parameters.property_marker.clone(),
            link_marker: config.documentation.link_marker.clone(),
            allowed_types: config.types.allowed_types.clone(),
        }
    }
}

pub struct PassContext<'a> {
    pub graph: &'a DeclarationGraph,
    pub registry: &'a TaskRegistry,
    pub matcher: IdentityMatcher,
    pub reporter: &'a Reporter<'a>,
    pub settings: &'a RuleSettings,
    documented_types: HashSet<DeclId>,
}

impl<'a> PassContext<'a> {
    pub fn new(
        graph: &'a DeclarationGraph,
        registry: &'a TaskRegistry,
        reporter: &'a Reporter<'a>,
        settings: &'a RuleSettings,
    ) -> Self {
        let matcher = IdentityMatcher::new(graph, registry);
        let documented_types = documented_types(graph, &matcher);
        Self {
            graph,
            registry,
            matcher,
            reporter,
            settings,
            documented_types,
        }
    }

    pub fn identity_of_method(&self, method: DeclId) -> Option<&'a TaskIdentity> {
        self.matcher
            .match_method(method)
            .and_then(|i| self.registry.get(i))
    }

    pub fn identity_of_type(&self, type_id: DeclId) -> Option<&'a TaskIdentity> {
        self.matcher
            .match_type(self.graph, type_id)
            .and_then(|i| self.registry.get(i))
    }

    pub fn identity_of_namespace(&self, namespace: DeclId) -> Option<&'a TaskIdentity> {
        self.matcher
            .match_namespace(self.graph, namespace)
            .and_then(|i| self.registry.get(i))
    }

    /// Task types plus the parameter and result types their tasks declare.
    pub fn is_documented_type(&self, type_id: DeclId) -> bool {
        self.documented_types.contains(&type_id)
    }

    /// Parameter types and the result type of a method, as written.
    pub fn signature_types(&self, method: &'a Declaration) -> Vec<&'a TypeRef> {
        let mut types: Vec<&TypeRef> = self
            .graph
            .parameters_of(method.id)
            .filter_map(|p| p.declared_type())
            .collect();
        if let DeclKind::Method { return_type, .. } = &method.kind {
            if let Some(result) = task_result_type(return_type) {
                types.push(result);
            }
        }
        types
    }
}

fn documented_types(graph: &DeclarationGraph, matcher: &IdentityMatcher) -> HashSet<DeclId> {
    let mut types = HashSet::new();
    for (method_id, _) in matcher.matched_methods() {
        let method = graph.decl(method_id);
        if let Some(owner) = graph.containing_type(method_id) {
            types.insert(owner.id);
        }
        for param in graph.parameters_of(method_id) {
            if let Some(decl) = param.declared_type().and_then(|t| graph.resolve_type(t)) {
                types.insert(decl.id);
            }
        }
        if let DeclKind::Method { return_type, .. } = &method.kind {
            if let Some(decl) = task_result_type(return_type).and_then(|t| graph.resolve_type(t)) {
                types.insert(decl.id);
            }
        }
    }
    types
}
