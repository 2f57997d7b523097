//! Programmatic construction of declaration graphs.
//!
//! Front-ends that walk a syntax tree and tests that need a small graph both
//! go through [`GraphBuilder`]: every `add_*` call appends a declaration with
//! the next id and a fresh one-line location in the builder's file.

use crate::graph::DeclarationGraph;
use crate::types::{
    Attribute, DeclId, DeclKind, Declaration, DefaultValue, Location, TypeRef, Visibility,
};

#[derive(Debug, Clone)]
pub struct GraphBuilder {
    file: String,
    decls: Vec<Declaration>,
}

impl GraphBuilder {
    pub fn new(file: &str) -> Self {
        Self {
            file: file.to_string(),
            decls: Vec::new(),
        }
    }

    fn push(&mut self, parent: Option<DeclId>, name: &str, kind: DeclKind) -> DeclId {
        let id = DeclId(self.decls.len() as u32);
        let line = id.0 + 1;
        let location = Location::new(&self.file, line, 1).with_end(line, 1 + name.len() as u32);
        self.decls.push(Declaration {
            id,
            parent,
            name: name.to_string(),
            kind,
            visibility: Visibility::Public,
            attributes: vec![],
            documentation: None,
            locations: vec![location],
        });
        id
    }

    pub fn namespace(&mut self, name: &str) -> DeclId {
        self.push(None, name, DeclKind::Namespace)
    }

    pub fn nested_namespace(&mut self, parent: DeclId, name: &str) -> DeclId {
        self.push(Some(parent), name, DeclKind::Namespace)
    }

    /// Public, non-static class.
    pub fn class(&mut self, parent: DeclId, name: &str) -> DeclId {
        self.push(
            Some(parent),
            name,
            DeclKind::Type {
                is_static: false,
                type_parameters: vec![],
            },
        )
    }

    pub fn static_class(&mut self, parent: DeclId, name: &str) -> DeclId {
        self.push(
            Some(parent),
            name,
            DeclKind::Type {
                is_static: true,
                type_parameters: vec![],
            },
        )
    }

    /// Class in the global namespace.
    pub fn root_class(&mut self, name: &str) -> DeclId {
        self.push(
            None,
            name,
            DeclKind::Type {
                is_static: false,
                type_parameters: vec![],
            },
        )
    }

    /// Public static method.
    pub fn method(&mut self, parent: DeclId, name: &str, return_type: TypeRef) -> DeclId {
        let id = self.push(
            Some(parent),
            name,
            DeclKind::Method {
                is_static: true,
                return_type,
                return_type_location: None,
                type_parameters: vec![],
            },
        );
        let line = id.0 + 1;
        if let DeclKind::Method {
            return_type_location,
            ..
        } = &mut self.decls[id.index()].kind
        {
            *return_type_location = Some(Location::new(&self.file, line, 15));
        }
        id
    }

    pub fn parameter(&mut self, method: DeclId, name: &str, ty: TypeRef) -> DeclId {
        self.push(Some(method), name, DeclKind::Parameter { ty })
    }

    /// Parameter carrying the given marker attribute.
    pub fn marked_parameter(
        &mut self,
        method: DeclId,
        name: &str,
        ty: TypeRef,
        marker: &str,
    ) -> DeclId {
        let id = self.parameter(method, name, ty);
        self.add_attribute(id, Attribute::new(marker));
        id
    }

    pub fn property(&mut self, parent: DeclId, name: &str, ty: TypeRef) -> DeclId {
        self.push(
            Some(parent),
            name,
            DeclKind::Property {
                ty,
                default_value: None,
            },
        )
    }

    pub fn decl_mut(&mut self, id: DeclId) -> &mut Declaration {
        &mut self.decls[id.index()]
    }

    pub fn set_static(&mut self, id: DeclId, value: bool) -> &mut Self {
        match &mut self.decls[id.index()].kind {
            DeclKind::Type { is_static, .. } | DeclKind::Method { is_static, .. } => {
                *is_static = value
            }
            _ => {}
        }
        self
    }

    pub fn set_visibility(&mut self, id: DeclId, visibility: Visibility) -> &mut Self {
        self.decls[id.index()].visibility = visibility;
        self
    }

    pub fn set_documentation(&mut self, id: DeclId, doc: &str) -> &mut Self {
        self.decls[id.index()].documentation = Some(doc.to_string());
        self
    }

    pub fn add_attribute(&mut self, id: DeclId, attribute: Attribute) -> &mut Self {
        self.decls[id.index()].attributes.push(attribute);
        self
    }

    pub fn add_location(&mut self, id: DeclId, location: Location) -> &mut Self {
        self.decls[id.index()].locations.push(location);
        self
    }

    pub fn set_type_parameters(&mut self, id: DeclId, params: &[&str]) -> &mut Self {
        let params: Vec<String> = params.iter().map(|p| p.to_string()).collect();
        match &mut self.decls[id.index()].kind {
            DeclKind::Type {
                type_parameters, ..
            }
            | DeclKind::Method {
                type_parameters, ..
            } => *type_parameters = params,
            _ => {}
        }
        self
    }

    pub fn set_default_value(&mut self, id: DeclId, value: serde_json::Value) -> &mut Self {
        let line = id.0 + 1;
        let location = Location::new(&self.file, line, 40);
        if let DeclKind::Property { default_value, .. } = &mut self.decls[id.index()].kind {
            *default_value = Some(DefaultValue {
                value,
                location: Some(location),
            });
        }
        self
    }

    /// Finish the graph. The builder only produces well-formed arenas, so
    /// validation cannot fail unless a caller nested declarations illegally.
    pub fn try_build(self) -> Result<DeclarationGraph, crate::types::GraphError> {
        DeclarationGraph::new(self.decls)
    }

    /// Like [`try_build`](Self::try_build) for code that controls its nesting.
    pub fn build(self) -> DeclarationGraph {
        match self.try_build() {
            Ok(graph) => graph,
            Err(e) => panic!("GraphBuilder produced an invalid graph: {}", e),
        }
    }
}
