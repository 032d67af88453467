use crate::error::ConfigError;
use crate::mapper;
use crate::schema;
use crate::topology::types::Environment;
use log::{debug, info};
use std::path::Path;

/// Load, validate and normalize a topology file
///
/// The file is read to completion and closed before validation begins.
/// I/O failures carry the offending path; shape, parse and semantic failures
/// are returned as the corresponding [`ConfigError`] variant.
pub fn load_environment(config_path: &Path) -> Result<Environment, ConfigError> {
    info!("Loading topology from: {:?}", config_path);

    let content = std::fs::read_to_string(config_path).map_err(|source| ConfigError::Io {
        path: config_path.to_path_buf(),
        source,
    })?;

    let env = load_environment_from_str(&content)?;

    info!(
        "Loaded topology with {} nodes and {} directed rules",
        env.nodes.len(),
        env.network.rules.len()
    );
    Ok(env)
}

/// Run the validation pipeline on an in-memory YAML document
///
/// `<<` merge keys are resolved before the schema sees the document, so
/// nodes and rules may share settings through anchors.
pub fn load_environment_from_str(content: &str) -> Result<Environment, ConfigError> {
    let mut raw: serde_yaml::Value = serde_yaml::from_str(content)?;
    raw.apply_merge()?;

    let validated = schema::validate(&raw)?;
    debug!(
        "Schema validation passed: {} nodes, {} declared rules",
        validated.nodes.len(),
        validated.network.rules.len()
    );

    mapper::map(validated)
}
