//! Mapping of validated configuration into the topology model.

use log::debug;

use crate::error::ConfigError;
use crate::schema::{NodeSpec, ValidatedConfig};
use crate::topology::rules::expand;
use crate::topology::types::{Environment, Network, Node};

/// Build an [`Environment`] from a validated config.
///
/// Fails with [`ConfigError::Semantic`] if no nodes are declared. The check
/// runs after mapping because an empty sequence is shape-valid.
pub fn map(config: ValidatedConfig) -> Result<Environment, ConfigError> {
    let ValidatedConfig {
        flags,
        nodes,
        network,
    } = config;

    let nodes: Vec<Node> = nodes.into_iter().map(map_node).collect();
    let network = Network {
        rules: expand(&network.rules),
    };
    debug!(
        "Mapped {} nodes and {} directed rules",
        nodes.len(),
        network.rules.len()
    );

    if nodes.is_empty() {
        return Err(ConfigError::Semantic(
            "At least one node needs to be defined in the config file".to_string(),
        ));
    }

    Ok(Environment {
        flags,
        nodes,
        network,
    })
}

/// Resolve node defaults: not a seed, `follower` role, no ports or flags.
pub fn map_node(spec: NodeSpec) -> Node {
    Node {
        name: spec.name,
        seed: spec.seed.unwrap_or(false),
        role: spec.role.unwrap_or_default(),
        ui_port: spec.ui_port,
        api_port: spec.api_port,
        flags: spec.flags,
    }
}
