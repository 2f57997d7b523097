//! Loading the inputs of one pass from disk.

use std::collections::BTreeMap;
use std::path::Path;

use tasklint_core::config::TasklintConfig;
use tasklint_core::graph::DeclarationGraph;
use tasklint_core::identity::TaskRegistry;
use tasklint_core::metadata::{self, MetadataSource};

use crate::error::EngineError;

pub fn load_graph(path: &Path) -> Result<DeclarationGraph, EngineError> {
    let graph = DeclarationGraph::load(path)?;
    tracing::debug!(path = %path.display(), declarations = graph.len(), "loaded graph");
    Ok(graph)
}

/// Resolve the registry from the configured options map, falling back to
/// the side-car file at `sidecar_path` when it exists. The file is not
/// touched when the options map names the task methods.
pub fn load_metadata(
    options: &BTreeMap<String, String>,
    sidecar_path: &Path,
) -> Result<(TaskRegistry, MetadataSource), EngineError> {
    let (registry, source) =
        metadata::load_registry_with(options, || metadata::read_sidecar(sidecar_path))?;
    tracing::debug!(
        source = source.as_str(),
        identities = registry.len(),
        "resolved task metadata"
    );
    Ok((registry, source))
}

/// The side-car location for a project root: `<root>/<metadata_file>`.
pub fn sidecar_path(root: &Path, config: &TasklintConfig) -> std::path::PathBuf {
    root.join(&config.metadata_file)
}
