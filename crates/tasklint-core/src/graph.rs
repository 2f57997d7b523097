//! Read-only declaration graph.
//!
//! The front-end produces a flat arena of [`Declaration`]s linked by parent ids.
//! [`DeclarationGraph`] validates that arena once and answers the structural
//! queries the rule modules need (children, enclosing namespace, reference
//! strings, type resolution). It is immutable after construction and safe to
//! share across threads.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::{DeclId, DeclKind, Declaration, GraphError, TypeRef};

/// On-disk shape of a declaration graph.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphFile {
    pub declarations: Vec<Declaration>,
}

#[derive(Debug, Clone)]
pub struct DeclarationGraph {
    decls: Vec<Declaration>,
    children: Vec<Vec<DeclId>>,
    types_by_name: HashMap<String, DeclId>,
}

impl DeclarationGraph {
    /// Build a graph from declarations whose ids are `0..n` in order. Every
    /// parent precedes its children, so parent chains cannot loop.
    pub fn new(decls: Vec<Declaration>) -> Result<Self, GraphError> {
        let mut children = vec![Vec::new(); decls.len()];

        for (index, decl) in decls.iter().enumerate() {
            if decl.id.index() != index {
                return Err(GraphError::NonDenseId {
                    expected: index as u32,
                    found: decl.id.0,
                });
            }
            let Some(parent) = decl.parent else { continue };
            if parent.index() >= index && parent.index() < decls.len() {
                return Err(GraphError::ParentNotBeforeChild {
                    id: decl.id,
                    parent,
                });
            }
            let Some(parent_decl) = decls.get(parent.index()) else {
                return Err(GraphError::UnknownParent {
                    id: decl.id,
                    parent,
                });
            };
            if !nesting_allowed(&decl.kind, &parent_decl.kind) {
                return Err(GraphError::InvalidNesting {
                    id: decl.id,
                    kind: decl.kind.as_str(),
                    parent_kind: parent_decl.kind.as_str(),
                });
            }
            children[parent.index()].push(decl.id);
        }

        let mut graph = Self {
            decls,
            children,
            types_by_name: HashMap::new(),
        };
        let mut types_by_name = HashMap::new();
        for decl in &graph.decls {
            if matches!(decl.kind, DeclKind::Type { .. }) {
                types_by_name
                    .entry(graph.qualified_name(decl.id))
                    .or_insert(decl.id);
            }
        }
        graph.types_by_name = types_by_name;
        Ok(graph)
    }

    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        let file: GraphFile = serde_json::from_str(json)?;
        Self::new(file.declarations)
    }

    pub fn load(path: &Path) -> Result<Self, GraphError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn to_file(&self) -> GraphFile {
        GraphFile {
            declarations: self.decls.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.decls
    }

    pub fn get(&self, id: DeclId) -> Option<&Declaration> {
        self.decls.get(id.index())
    }

    /// Panics on an id that did not come from this graph.
    pub fn decl(&self, id: DeclId) -> &Declaration {
        &self.decls[id.index()]
    }

    pub fn parent(&self, id: DeclId) -> Option<&Declaration> {
        self.get(id)?.parent.and_then(|p| self.get(p))
    }

    pub fn children(&self, id: DeclId) -> impl Iterator<Item = &Declaration> + '_ {
        self.children
            .get(id.index())
            .into_iter()
            .flatten()
            .map(move |c| self.decl(*c))
    }

    pub fn methods_of(&self, type_id: DeclId) -> impl Iterator<Item = &Declaration> + '_ {
        self.children(type_id)
            .filter(|d| matches!(d.kind, DeclKind::Method { .. }))
    }

    pub fn properties_of(&self, type_id: DeclId) -> impl Iterator<Item = &Declaration> + '_ {
        self.children(type_id)
            .filter(|d| matches!(d.kind, DeclKind::Property { .. }))
    }

    pub fn parameters_of(&self, method_id: DeclId) -> impl Iterator<Item = &Declaration> + '_ {
        self.children(method_id)
            .filter(|d| matches!(d.kind, DeclKind::Parameter { .. }))
    }

    pub fn nested_types_of(&self, id: DeclId) -> impl Iterator<Item = &Declaration> + '_ {
        self.children(id)
            .filter(|d| matches!(d.kind, DeclKind::Type { .. }))
    }

    /// Nearest type declaration enclosing `id` (not `id` itself).
    pub fn containing_type(&self, id: DeclId) -> Option<&Declaration> {
        let mut current = self.parent(id);
        while let Some(decl) = current {
            if matches!(decl.kind, DeclKind::Type { .. }) {
                return Some(decl);
            }
            current = self.parent(decl.id);
        }
        None
    }

    /// Nearest namespace declaration enclosing `id` (or `id` itself if it is one).
    pub fn enclosing_namespace(&self, id: DeclId) -> Option<&Declaration> {
        let mut current = self.get(id);
        while let Some(decl) = current {
            if matches!(decl.kind, DeclKind::Namespace) {
                return Some(decl);
            }
            current = self.parent(decl.id);
        }
        None
    }

    /// Dotted namespace name enclosing `id`; empty for the global namespace.
    pub fn namespace_of(&self, id: DeclId) -> &str {
        self.enclosing_namespace(id)
            .map(|ns| ns.name.as_str())
            .unwrap_or("")
    }

    /// `Ns.Outer.Inner` for a type declaration, without generic parameters.
    pub fn qualified_name(&self, type_id: DeclId) -> String {
        let mut segments = Vec::new();
        let mut current = self.get(type_id);
        while let Some(decl) = current {
            match decl.kind {
                DeclKind::Type { .. } => segments.push(decl.name.as_str()),
                DeclKind::Namespace => {
                    segments.push(decl.name.as_str());
                    break;
                }
                _ => {}
            }
            current = self.parent(decl.id);
        }
        segments.reverse();
        segments.join(".")
    }

    /// Namespace-qualified reference of a method: containing types and the
    /// method name, generic parameter lists included, no parameter list.
    pub fn reference_string(&self, method_id: DeclId) -> Option<String> {
        let method = self.get(method_id)?;
        let DeclKind::Method {
            type_parameters, ..
        } = &method.kind
        else {
            return None;
        };

        let mut segments = vec![with_type_parameters(&method.name, type_parameters)];
        let mut current = self.parent(method_id);
        while let Some(decl) = current {
            match &decl.kind {
                DeclKind::Type {
                    type_parameters, ..
                } => segments.push(with_type_parameters(&decl.name, type_parameters)),
                DeclKind::Namespace => {
                    if !decl.name.is_empty() {
                        segments.push(decl.name.clone());
                    }
                    break;
                }
                _ => {}
            }
            current = self.parent(decl.id);
        }
        segments.reverse();
        Some(segments.join("."))
    }

    /// Type declared in this graph that a named reference points at.
    pub fn resolve_type(&self, ty: &TypeRef) -> Option<&Declaration> {
        let name = ty.qualified_name()?;
        self.types_by_name.get(&name).map(|id| self.decl(*id))
    }

    /// All types nested (transitively) in a namespace or type, in declaration
    /// order. Nested namespace blocks are walked through.
    pub fn types_within(&self, id: DeclId) -> Vec<DeclId> {
        let mut out = Vec::new();
        let mut stack = self.container_children(id);
        while let Some(next) = stack.pop() {
            if matches!(self.decl(next).kind, DeclKind::Type { .. }) {
                out.push(next);
            }
            stack.extend(self.container_children(next));
        }
        out
    }

    /// Namespace and type children of `id`, reversed for stack traversal.
    fn container_children(&self, id: DeclId) -> Vec<DeclId> {
        let mut ids: Vec<DeclId> = self
            .children(id)
            .filter(|d| matches!(d.kind, DeclKind::Namespace | DeclKind::Type { .. }))
            .map(|d| d.id)
            .collect();
        ids.reverse();
        ids
    }
}

fn nesting_allowed(child: &DeclKind, parent: &DeclKind) -> bool {
    match child {
        DeclKind::Namespace => matches!(parent, DeclKind::Namespace),
        DeclKind::Type { .. } => matches!(parent, DeclKind::Namespace | DeclKind::Type { .. }),
        DeclKind::Method { .. } | DeclKind::Property { .. } => {
            matches!(parent, DeclKind::Type { .. })
        }
        DeclKind::Parameter { .. } => matches!(parent, DeclKind::Method { .. }),
    }
}

fn with_type_parameters(name: &str, type_parameters: &[String]) -> String {
    if type_parameters.is_empty() {
        name.to_string()
    } else {
        format!("{}<{}>", name, type_parameters.join(","))
    }
}
