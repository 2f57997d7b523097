//! Rule catalog: stable ids, titles, message templates, categories and
//! default severities for every diagnostic tasklint can emit.

use serde::{Deserialize, Serialize};

/// Diagnostic severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
        }
    }

    /// Parse `error`, `warning` or `info` (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "error" => Some(Severity::Error),
            "warning" | "warn" => Some(Severity::Warning),
            "info" => Some(Severity::Info),
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rule module a diagnostic belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Naming,
    Parameters,
    Structure,
    Documentation,
    Types,
    Configuration,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Naming => "naming",
            Category::Parameters => "parameters",
            Category::Structure => "structure",
            Category::Documentation => "documentation",
            Category::Types => "types",
            Category::Configuration => "configuration",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rule {
    NamespaceFormatInvalid,
    TypeNameMismatch,
    MethodNameMismatch,
    ClassShouldBeStatic,
    MethodShouldBeStatic,
    MethodOverloadNotAllowed,
    MissingRequiredParameter,
    ParameterNameSuggestion,
    MissingPropertyMarker,
    ReturnTypeIncorrect,
    ReturnTypeMissingProperty,
    DocumentationLinkMissing,
    UnsupportedTagUsed,
    RequiredTagMissing,
    RequiredPropertyMissing,
    IncorrectPropertyDefaultValue,
    ExposedThirdPartyType,
    UnknownParameter,
    ParametersOutOfOrder,
    ConfigurationMissing,
    DocumentationInvalid,
}

impl Rule {
    /// Every rule, in id order.
    pub const ALL: [Rule; 21] = [
        Rule::NamespaceFormatInvalid,
        Rule::TypeNameMismatch,
        Rule::MethodNameMismatch,
        Rule::ClassShouldBeStatic,
        Rule::MethodShouldBeStatic,
        Rule::MethodOverloadNotAllowed,
        Rule::MissingRequiredParameter,
        Rule::ParameterNameSuggestion,
        Rule::MissingPropertyMarker,
        Rule::ReturnTypeIncorrect,
        Rule::ReturnTypeMissingProperty,
        Rule::DocumentationLinkMissing,
        Rule::UnsupportedTagUsed,
        Rule::RequiredTagMissing,
        Rule::RequiredPropertyMissing,
        Rule::IncorrectPropertyDefaultValue,
        Rule::ExposedThirdPartyType,
        Rule::UnknownParameter,
        Rule::ParametersOutOfOrder,
        Rule::ConfigurationMissing,
        Rule::DocumentationInvalid,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Rule::NamespaceFormatInvalid => "TL0001",
            Rule::TypeNameMismatch => "TL0002",
            Rule::MethodNameMismatch => "TL0003",
            Rule::ClassShouldBeStatic => "TL0004",
            Rule::MethodShouldBeStatic => "TL0005",
            Rule::MethodOverloadNotAllowed => "TL0006",
            Rule::MissingRequiredParameter => "TL0007",
            Rule::ParameterNameSuggestion => "TL0008",
            Rule::MissingPropertyMarker => "TL0009",
            Rule::ReturnTypeIncorrect => "TL0010",
            Rule::ReturnTypeMissingProperty => "TL0011",
            Rule::DocumentationLinkMissing => "TL0012",
            Rule::UnsupportedTagUsed => "TL0013",
            Rule::RequiredTagMissing => "TL0014",
            Rule::RequiredPropertyMissing => "TL0015",
            Rule::IncorrectPropertyDefaultValue => "TL0016",
            Rule::ExposedThirdPartyType => "TL0017",
            Rule::UnknownParameter => "TL0018",
            Rule::ParametersOutOfOrder => "TL0019",
            Rule::ConfigurationMissing => "TL0020",
            Rule::DocumentationInvalid => "TL0021",
        }
    }

    pub fn from_code(code: &str) -> Option<Rule> {
        Rule::ALL.iter().copied().find(|r| r.code() == code)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Rule::NamespaceFormatInvalid => "Namespace does not follow the standard format",
            Rule::TypeNameMismatch => "Type should match the task system",
            Rule::MethodNameMismatch => "Method should match the task action",
            Rule::ClassShouldBeStatic => "Task class should be static",
            Rule::MethodShouldBeStatic => "Task method must be static",
            Rule::MethodOverloadNotAllowed => "Task method overloading is not allowed",
            Rule::MissingRequiredParameter => "Missing a required parameter",
            Rule::ParameterNameSuggestion => "Recommended parameter name",
            Rule::MissingPropertyMarker => "Missing property marker attribute",
            Rule::ReturnTypeIncorrect => "Task method return type incorrect",
            Rule::ReturnTypeMissingProperty => "Task return type missing required properties",
            Rule::DocumentationLinkMissing => "Documentation link is missing",
            Rule::UnsupportedTagUsed => "Documentation is using unsupported tags",
            Rule::RequiredTagMissing => "Documentation required tags are missing",
            Rule::RequiredPropertyMissing => "Task parameter missing required property",
            Rule::IncorrectPropertyDefaultValue => {
                "Task parameter property has incorrect default value"
            }
            Rule::ExposedThirdPartyType => "Task exposes third-party types",
            Rule::UnknownParameter => "Parameter is not recognized",
            Rule::ParametersOutOfOrder => "Parameters are not in the correct order",
            Rule::ConfigurationMissing => "Metadata is missing",
            Rule::DocumentationInvalid => "Documentation markup is invalid",
        }
    }

    /// Message template with `{0}`, `{1}` positional placeholders.
    pub fn template(&self) -> &'static str {
        match self {
            Rule::NamespaceFormatInvalid => "Standard namespace format is 'Vendor.System.Action'",
            Rule::TypeNameMismatch => "Type name should be '{0}'",
            Rule::MethodNameMismatch => "Method name should be '{0}'",
            Rule::ClassShouldBeStatic => "Task class '{0}' should be static",
            Rule::MethodShouldBeStatic => "Task method '{0}' must be static",
            Rule::MethodOverloadNotAllowed => "Task method '{0}' cannot be overloaded",
            Rule::MissingRequiredParameter => {
                "Task method is missing required parameter of type '{0}'"
            }
            Rule::ParameterNameSuggestion => {
                "For consistency, the recommended name for this parameter is '{0}'"
            }
            Rule::MissingPropertyMarker => "Parameter should be attributed with '{0}'",
            Rule::ReturnTypeIncorrect => "Task return type should be '{0}'",
            Rule::ReturnTypeMissingProperty => "Class should include a '{0}' property",
            Rule::DocumentationLinkMissing => "Missing the task '{0}' link",
            Rule::UnsupportedTagUsed => {
                "Documentation should not use tag '{0}' with attribute '{1}'"
            }
            Rule::RequiredTagMissing => "Missing a required documentation tag '{0}'",
            Rule::RequiredPropertyMissing => "Parameter '{0}' is missing required property '{1}'",
            Rule::IncorrectPropertyDefaultValue => {
                "Default value for property '{0}' should be '{1}'"
            }
            Rule::ExposedThirdPartyType => "Property '{0}' exposes a third-party type",
            Rule::UnknownParameter => {
                "Parameter of type '{0}' is not recognized. Expected parameters are: \
                 'Input', 'Connection', 'Options', 'CancellationToken'."
            }
            Rule::ParametersOutOfOrder => {
                "Parameters standard order is: 'Input', 'Connection', 'Options', 'CancellationToken'"
            }
            Rule::ConfigurationMissing => "There is no task metadata in the project",
            Rule::DocumentationInvalid => "Documentation markup is not parsable",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Rule::NamespaceFormatInvalid | Rule::TypeNameMismatch | Rule::MethodNameMismatch => {
                Category::Naming
            }
            Rule::ClassShouldBeStatic
            | Rule::MethodShouldBeStatic
            | Rule::MethodOverloadNotAllowed
            | Rule::ReturnTypeIncorrect
            | Rule::ReturnTypeMissingProperty => Category::Structure,
            Rule::MissingRequiredParameter
            | Rule::ParameterNameSuggestion
            | Rule::MissingPropertyMarker
            | Rule::UnknownParameter
            | Rule::ParametersOutOfOrder => Category::Parameters,
            Rule::DocumentationLinkMissing
            | Rule::UnsupportedTagUsed
            | Rule::RequiredTagMissing
            | Rule::DocumentationInvalid => Category::Documentation,
            Rule::RequiredPropertyMissing
            | Rule::IncorrectPropertyDefaultValue
            | Rule::ExposedThirdPartyType => Category::Types,
            Rule::ConfigurationMissing => Category::Configuration,
        }
    }

    pub fn default_severity(&self) -> Severity {
        match self {
            Rule::ParameterNameSuggestion => Severity::Info,
            Rule::ClassShouldBeStatic
            | Rule::MethodShouldBeStatic
            | Rule::MethodOverloadNotAllowed
            | Rule::ReturnTypeIncorrect
            | Rule::ReturnTypeMissingProperty
            | Rule::UnknownParameter
            | Rule::ParametersOutOfOrder
            | Rule::ConfigurationMissing => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Substitute positional arguments into the template.
    pub fn format_message(&self, arguments: &[String]) -> String {
        format_template(self.template(), arguments)
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Replace `{n}` with `arguments[n]`. Placeholders without an argument are kept.
pub fn format_template(template: &str, arguments: &[String]) -> String {
    let mut out = template.to_string();
    for (i, arg) in arguments.iter().enumerate() {
        out = out.replace(&format!("{{{}}}", i), arg);
    }
    out
}
