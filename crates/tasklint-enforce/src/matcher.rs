//! Binds declarations to the task identities they implement.
//!
//! A method matches when its reference string equals an identity path; the
//! first registry entry wins. Types and namespaces inherit the lowest registry
//! index among the methods they contain.

use std::collections::HashMap;

use tasklint_core::graph::DeclarationGraph;
use tasklint_core::identity::TaskRegistry;
use tasklint_core::types::{DeclId, DeclKind};

#[derive(Debug, Clone, Default)]
pub struct IdentityMatcher {
    methods: HashMap<DeclId, usize>,
}

impl IdentityMatcher {
    pub fn new(graph: &DeclarationGraph, registry: &TaskRegistry) -> Self {
        let mut first_position: HashMap<&str, usize> = HashMap::new();
        for (index, identity) in registry.iter().enumerate() {
            first_position.entry(identity.path()).or_insert(index);
        }

        let methods = graph
            .declarations()
            .iter()
            .filter(|d| matches!(d.kind, DeclKind::Method { .. }))
            .filter_map(|d| {
                let reference = graph.reference_string(d.id)?;
                first_position.get(reference.as_str()).map(|i| (d.id, *i))
            })
            .collect();
        Self { methods }
    }

    /// Registry index of the identity a method implements.
    pub fn match_method(&self, method: DeclId) -> Option<usize> {
        self.methods.get(&method).copied()
    }

    /// Lowest registry index among the type's own methods.
    pub fn match_type(&self, graph: &DeclarationGraph, type_id: DeclId) -> Option<usize> {
        graph
            .methods_of(type_id)
            .filter_map(|m| self.match_method(m.id))
            .min()
    }

    /// Lowest registry index among types transitively inside the namespace.
    pub fn match_namespace(&self, graph: &DeclarationGraph, namespace: DeclId) -> Option<usize> {
        graph
            .types_within(namespace)
            .into_iter()
            .filter_map(|t| self.match_type(graph, t))
            .min()
    }

    /// Matched methods in declaration order.
    pub fn matched_methods(&self) -> Vec<(DeclId, usize)> {
        let mut matched: Vec<_> = self.methods.iter().map(|(d, i)| (*d, *i)).collect();
        matched.sort();
        matched
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}
