//! Configuration file loading for tasklint.
//!
//! Reads `.tasklint/tasklint.json` and provides typed access to all settings.
//! Falls back to sensible defaults when the config file is missing or incomplete.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::metadata::DEFAULT_METADATA_FILE;

pub const CONFIG_DIR: &str = ".tasklint";
pub const CONFIG_FILE: &str = "tasklint.json";

/// Top-level tasklint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TasklintConfig {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub enforce: EnforceConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub documentation: DocumentationConfig,
    #[serde(default)]
    pub types: TypesConfig,
    /// Key-value metadata channel (task method list, root namespace).
    #[serde(default)]
    pub options: BTreeMap<String, String>,
    #[serde(default = "default_metadata_file")]
    pub metadata_file: String,
    /// Rule ids whose diagnostics are reported as suppressed.
    #[serde(default)]
    pub suppress: Vec<String>,
    /// Per-rule severity overrides (`error`, `warning`, `info`).
    #[serde(default)]
    pub severity: BTreeMap<String, String>,
}

/// Rule module toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnforceConfig {
    #[serde(default = "default_true")]
    pub naming: bool,
    #[serde(default = "default_true")]
    pub parameters: bool,
    #[serde(default = "default_true")]
    pub structure: bool,
    #[serde(default = "default_true")]
    pub documentation: bool,
    #[serde(default = "default_true")]
    pub types: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParametersConfig {
    /// Attribute that marks a parameter as a grouped property tab.
    #[serde(default = "default_property_marker")]
    pub property_marker: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentationConfig {
    /// Literal the task entry point's documentation must contain.
    #[serde(default = "default_link_marker")]
    pub link_marker: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypesConfig {
    /// Fully qualified third-party types that tasks may expose anyway.
    #[serde(default = "default_allowed_types")]
    pub allowed_types: Vec<String>,
}

fn default_true() -> bool {
    true
}
fn default_version() -> String {
    "0.1.0".to_string()
}
fn default_metadata_file() -> String {
    DEFAULT_METADATA_FILE.to_string()
}
fn default_property_marker() -> String {
    "PropertyTab".to_string()
}
fn default_link_marker() -> String {
    "[Documentation]".to_string()
}
fn default_allowed_types() -> Vec<String> {
    vec![
        "Newtonsoft.Json.Linq.JToken".to_string(),
        "Newtonsoft.Json.Linq.JObject".to_string(),
        "Newtonsoft.Json.Linq.JArray".to_string(),
    ]
}

impl Default for EnforceConfig {
    fn default() -> Self {
        Self {
            naming: true,
            parameters: true,
            structure: true,
            documentation: true,
            types: true,
        }
    }
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            property_marker: default_property_marker(),
        }
    }
}

impl Default for DocumentationConfig {
    fn default() -> Self {
        Self {
            link_marker: default_link_marker(),
        }
    }
}

impl Default for TypesConfig {
    fn default() -> Self {
        Self {
            allowed_types: default_allowed_types(),
        }
    }
}

impl Default for TasklintConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            enforce: EnforceConfig::default(),
            parameters: ParametersConfig::default(),
            documentation: DocumentationConfig::default(),
            types: TypesConfig::default(),
            options: BTreeMap::new(),
            metadata_file: default_metadata_file(),
            suppress: vec![],
            severity: BTreeMap::new(),
        }
    }
}

impl TasklintConfig {
    /// Load configuration from `tasklint.json` inside the given config directory.
    /// Returns defaults if the file doesn't exist or can't be parsed.
    pub fn load(config_dir: &Path) -> Self {
        let config_path = config_dir.join(CONFIG_FILE);
        let content = match std::fs::read_to_string(&config_path) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!(
                    path = %config_path.display(),
                    error = %e,
                    "failed to parse config, using defaults"
                );
                Self::default()
            }
        }
    }
}
