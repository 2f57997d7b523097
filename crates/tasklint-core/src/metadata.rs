//! Loading task identities from the two metadata channels.
//!
//! Channel A is a key-value configuration map (`task_analyzers.task_methods`
//! holding a `;`-delimited list, plus the project root namespace). Channel B
//! is a side-car JSON document `{ "Tasks": [ { "TaskMethod": "..." } ] }`.
//! Channel A wins when it is present and non-blank.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::identity::{IdentityError, TaskRegistry};

pub const TASK_METHODS_KEY: &str = "task_analyzers.task_methods";
pub const ROOT_NAMESPACE_KEY: &str = "build_property.rootnamespace";
pub const DEFAULT_METADATA_FILE: &str = "TaskMetadata.json";

/// Which channel produced a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataSource {
    Config,
    Sidecar,
    None,
}

impl MetadataSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetadataSource::Config => "config",
            MetadataSource::Sidecar => "sidecar",
            MetadataSource::None => "none",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error(transparent)]
    Identity(#[from] IdentityError),

    #[error("invalid task metadata document: {0}")]
    Sidecar(#[from] serde_json::Error),

    #[error("failed to read task metadata file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Deserialize)]
struct SidecarDocument {
    #[serde(rename = "Tasks")]
    tasks: Option<serde_json::Value>,
}

/// Resolve the registry for one pass from both channels.
///
/// Returns an empty registry (source `None`) when neither channel has
/// metadata; a malformed identity anywhere aborts with an error.
pub fn load_registry(
    options: &BTreeMap<String, String>,
    sidecar: Option<&str>,
) -> Result<(TaskRegistry, MetadataSource), MetadataError> {
    load_registry_with(options, || Ok(sidecar.map(str::to_string)))
}

/// Like [`load_registry`], but the side-car is only fetched when channel A
/// is absent or blank.
pub fn load_registry_with<F>(
    options: &BTreeMap<String, String>,
    fetch_sidecar: F,
) -> Result<(TaskRegistry, MetadataSource), MetadataError>
where
    F: FnOnce() -> Result<Option<String>, MetadataError>,
{
    let root_namespace = options.get(ROOT_NAMESPACE_KEY).map(String::as_str);

    if let Some(list) = options
        .get(TASK_METHODS_KEY)
        .filter(|v| !v.trim().is_empty())
    {
        let registry = TaskRegistry::from_delimited(list, root_namespace)?;
        tracing::debug!(count = registry.len(), "task identities from config");
        return Ok((registry, MetadataSource::Config));
    }

    if let Some(text) = fetch_sidecar()? {
        if let Some(registry) = registry_from_sidecar(&text, root_namespace)? {
            tracing::debug!(count = registry.len(), "task identities from side-car");
            return Ok((registry, MetadataSource::Sidecar));
        }
    }

    Ok((TaskRegistry::empty(), MetadataSource::None))
}

/// Parse a side-car document. `None` when it has no `Tasks` array or the
/// array names no task.
pub fn registry_from_sidecar(
    text: &str,
    root_namespace: Option<&str>,
) -> Result<Option<TaskRegistry>, MetadataError> {
    let doc: SidecarDocument = serde_json::from_str(text)?;
    let Some(serde_json::Value::Array(tasks)) = doc.tasks else {
        return Ok(None);
    };

    let paths = tasks
        .iter()
        .filter_map(|t| t.get("TaskMethod").and_then(|m| m.as_str()))
        .map(str::trim)
        .filter(|p| !p.is_empty());
    let registry = TaskRegistry::parse(paths, root_namespace)?;
    Ok((!registry.is_empty()).then_some(registry))
}

/// Read the side-car file if it exists.
pub fn read_sidecar(path: &Path) -> Result<Option<String>, MetadataError> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(MetadataError::Io {
            path: path.display().to_string(),
            source: e,
        }),
    }
}
