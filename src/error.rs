//! Error types for topology loading.

use std::path::PathBuf;

/// Errors returned by [`crate::config_loader::load_environment`].
///
/// Every variant is terminal for the load: no partial `Environment` is ever
/// produced alongside one of these.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read topology file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Topology file is not valid YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Topology schema error: {0}")]
    Schema(#[from] SchemaError),
    #[error("Invalid topology configuration: {0}")]
    Semantic(String),
}

/// A single shape violation, reported at the first offending entry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{path}: {message}")]
pub struct SchemaError {
    /// Entry the violation was found in: `<root>`, `network`, `nodes[1]`
    /// or `network.rules[0]`.
    pub path: String,
    /// serde's description, naming the field or value at fault.
    pub message: String,
}

impl SchemaError {
    pub(crate) fn new(path: impl Into<String>, err: serde_yaml::Error) -> Self {
        Self {
            path: path.into(),
            message: err.to_string(),
        }
    }
}
