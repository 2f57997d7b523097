use tasklint_core::types::GraphError;
use tasklint_core::identity::IdentityError;
use tasklint_core::metadata::MetadataError;

/// Failures loading the inputs of a pass. Rule findings are diagnostics, never errors.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to load declaration graph: {0}")]
    Graph(#[from] GraphError),

    #[error("failed to load task metadata: {0}")]
    Metadata(#[from] MetadataError),

    #[error(transparent)]
    Identity(#[from] IdentityError),
}
