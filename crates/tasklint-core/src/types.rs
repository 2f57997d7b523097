use serde::{Deserialize, Serialize};

/// Index of a declaration inside a [`DeclarationGraph`](crate::graph::DeclarationGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeclId(pub u32);

impl DeclId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for DeclId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A source span. Lines and columns are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    pub file: String,
    pub line: u32,
    pub column: u32,
    #[serde(default)]
    pub end_line: u32,
    #[serde(default)]
    pub end_column: u32,
}

impl Location {
    pub fn new(file: &str, line: u32, column: u32) -> Self {
        Self {
            file: file.to_string(),
            line,
            column,
            end_line: line,
            end_column: column,
        }
    }

    pub fn with_end(mut self, end_line: u32, end_column: u32) -> Self {
        self.end_line = end_line;
        self.end_column = end_column;
        self
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Declared accessibility of a declaration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Public,
    Internal,
    Protected,
    Private,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Internal => "internal",
            Visibility::Protected => "protected",
            Visibility::Private => "private",
        }
    }
}

/// A type as written at a use site (parameter, property, return type).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "form", rename_all = "snake_case")]
pub enum TypeRef {
    /// A named type, possibly generic. `namespace` is empty for the global namespace.
    Named {
        #[serde(default)]
        namespace: String,
        name: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        type_args: Vec<TypeRef>,
    },
    Array { element: Box<TypeRef> },
    Nullable { inner: Box<TypeRef> },
    /// A language keyword scalar such as `string`, `int` or `bool`.
    Primitive { name: String },
}

pub const ASYNC_NAMESPACE: &str = "System.Threading.Tasks";
pub const ASYNC_WRAPPER: &str = "Task";

impl TypeRef {
    pub fn named(namespace: &str, name: &str) -> Self {
        TypeRef::Named {
            namespace: namespace.to_string(),
            name: name.to_string(),
            type_args: vec![],
        }
    }

    pub fn generic(namespace: &str, name: &str, type_args: Vec<TypeRef>) -> Self {
        TypeRef::Named {
            namespace: namespace.to_string(),
            name: name.to_string(),
            type_args,
        }
    }

    pub fn primitive(name: &str) -> Self {
        TypeRef::Primitive {
            name: name.to_string(),
        }
    }

    pub fn array(element: TypeRef) -> Self {
        TypeRef::Array {
            element: Box::new(element),
        }
    }

    pub fn nullable(inner: TypeRef) -> Self {
        TypeRef::Nullable {
            inner: Box::new(inner),
        }
    }

    /// `System.Threading.Tasks.Task<inner>`
    pub fn task_of(inner: TypeRef) -> Self {
        TypeRef::generic(ASYNC_NAMESPACE, ASYNC_WRAPPER, vec![inner])
    }

    pub fn cancellation_token() -> Self {
        TypeRef::named("System.Threading", "CancellationToken")
    }

    /// The simple name used for parameter matching: `Options`, `string`,
    /// `Input[]`, `Input?`.
    pub fn simple_name(&self) -> String {
        match self {
            TypeRef::Named { name, .. } | TypeRef::Primitive { name } => name.clone(),
            TypeRef::Array { element } => format!("{}[]", element.simple_name()),
            TypeRef::Nullable { inner } => format!("{}?", inner.simple_name()),
        }
    }

    /// Fully qualified display form, e.g. `System.Collections.Generic.List<Ns.Item>`.
    pub fn display_name(&self) -> String {
        match self {
            TypeRef::Named {
                namespace,
                name,
                type_args,
            } => {
                let mut out = if namespace.is_empty() {
                    name.clone()
                } else {
                    format!("{}.{}", namespace, name)
                };
                if !type_args.is_empty() {
                    let args: Vec<String> = type_args.iter().map(|a| a.display_name()).collect();
                    out.push('<');
                    out.push_str(&args.join(", "));
                    out.push('>');
                }
                out
            }
            TypeRef::Primitive { name } => name.clone(),
            TypeRef::Array { element } => format!("{}[]", element.display_name()),
            TypeRef::Nullable { inner } => format!("{}?", inner.display_name()),
        }
    }

    /// Qualified name without type arguments, used to resolve against declared types.
    pub fn qualified_name(&self) -> Option<String> {
        match self {
            TypeRef::Named {
                namespace, name, ..
            } => Some(if namespace.is_empty() {
                name.clone()
            } else {
                format!("{}.{}", namespace, name)
            }),
            _ => None,
        }
    }

    /// True for `Task<T>` (and the non-generic `Task`).
    pub fn is_async_wrapper(&self) -> bool {
        matches!(self, TypeRef::Named { namespace, name, .. }
            if namespace == ASYNC_NAMESPACE && name == ASYNC_WRAPPER)
    }
}

impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_name())
    }
}

/// An attribute (annotation) applied to a declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    /// As written or fully qualified: `PropertyTab`, `System.ComponentModel.PropertyTabAttribute`.
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl Attribute {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            arguments: vec![],
            location: None,
        }
    }

    pub fn with_argument(mut self, value: serde_json::Value) -> Self {
        self.arguments.push(value);
        self
    }

    /// Compare against a short attribute name, ignoring namespace qualification
    /// and the conventional `Attribute` suffix.
    pub fn is(&self, short_name: &str) -> bool {
        let simple = self.name.rsplit('.').next().unwrap_or(&self.name);
        let simple = simple.strip_suffix("Attribute").unwrap_or(simple);
        let wanted = short_name.strip_suffix("Attribute").unwrap_or(short_name);
        simple == wanted
    }

    pub fn first_string_argument(&self) -> Option<&str> {
        self.arguments.first().and_then(|v| v.as_str())
    }
}

/// A property's declared default (initializer or default-value attribute).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultValue {
    pub value: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

/// Kind-specific payload of a declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeclKind {
    /// `name` of a namespace declaration is its full dotted name.
    Namespace,
    Type {
        #[serde(default)]
        is_static: bool,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        type_parameters: Vec<String>,
    },
    Method {
        #[serde(default)]
        is_static: bool,
        return_type: TypeRef,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        return_type_location: Option<Location>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        type_parameters: Vec<String>,
    },
    Parameter {
        ty: TypeRef,
    },
    Property {
        ty: TypeRef,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default_value: Option<DefaultValue>,
    },
}

impl DeclKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclKind::Namespace => "namespace",
            DeclKind::Type { .. } => "type",
            DeclKind::Method { .. } => "method",
            DeclKind::Parameter { .. } => "parameter",
            DeclKind::Property { .. } => "property",
        }
    }
}

impl std::fmt::Display for DeclKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node of the declaration graph supplied by the front-end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    pub id: DeclId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<DeclId>,
    pub name: String,
    #[serde(flatten)]
    pub kind: DeclKind,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,
    /// Raw documentation markup (the XML fragment of a doc comment).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    #[serde(default)]
    pub locations: Vec<Location>,
}

impl Declaration {
    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }

    pub fn is_static(&self) -> bool {
        match &self.kind {
            DeclKind::Type { is_static, .. } | DeclKind::Method { is_static, .. } => *is_static,
            _ => false,
        }
    }

    pub fn has_attribute(&self, short_name: &str) -> bool {
        self.attributes.iter().any(|a| a.is(short_name))
    }

    pub fn attribute(&self, short_name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.is(short_name))
    }

    pub fn primary_location(&self) -> Option<&Location> {
        self.locations.first()
    }

    /// The declared type of a parameter or property.
    pub fn declared_type(&self) -> Option<&TypeRef> {
        match &self.kind {
            DeclKind::Parameter { ty } | DeclKind::Property { ty, .. } => Some(ty),
            _ => None,
        }
    }

    /// Documentation text, treating blank text as absent.
    pub fn documentation_text(&self) -> Option<&str> {
        self.documentation
            .as_deref()
            .filter(|d| !d.trim().is_empty())
    }
}

/// Errors raised while building or loading a declaration graph.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("declaration {found} is out of order: expected id {expected}")]
    NonDenseId { expected: u32, found: u32 },

    #[error("declaration {id} references unknown parent {parent}")]
    UnknownParent { id: DeclId, parent: DeclId },

    #[error("declaration {id} must come after its parent {parent}")]
    ParentNotBeforeChild { id: DeclId, parent: DeclId },

    #[error("declaration {id} ({kind}) cannot be nested in a {parent_kind}")]
    InvalidNesting {
        id: DeclId,
        kind: &'static str,
        parent_kind: &'static str,
    },

    #[error("invalid declaration graph JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read declaration graph: {0}")]
    Io(#[from] std::io::Error),
}
