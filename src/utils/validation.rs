//! Advisory consistency checks for a loaded topology.
//!
//! These checks never fail a load. Duplicate node names and rule endpoints
//! that name no declared node are accepted by the loader; this module only
//! reports them so a harness can surface likely typos.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::topology::types::{Environment, WILDCARD};

/// A finding from [`lint_environment`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lint {
    /// More than one node declares this name.
    DuplicateNodeName { name: String, count: usize },
    /// A rule endpoint that is neither the wildcard nor a declared node.
    UnknownRuleEndpoint { endpoint: String },
}

impl fmt::Display for Lint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateNodeName { name, count } => {
                write!(f, "Node name '{}' is declared {} times", name, count)
            }
            Self::UnknownRuleEndpoint { endpoint } => write!(
                f,
                "Rule endpoint '{}' does not match any declared node",
                endpoint
            ),
        }
    }
}

/// Check node-name uniqueness and rule endpoint references
///
/// Each finding is logged at warn level and returned. Findings appear in
/// declaration order, each reported once.
///
/// # Examples
/// ```
/// use netsim_topology::config_loader::load_environment_from_str;
/// use netsim_topology::utils::validation::lint_environment;
///
/// let env = load_environment_from_str(
///     "nodes: [{name: A}]\nnetwork:\n  rules: [{action: allow, source: A, target: B}]\n",
/// ).unwrap();
/// assert_eq!(lint_environment(&env).len(), 1);
/// ```
pub fn lint_environment(env: &Environment) -> Vec<Lint> {
    let mut findings = Vec::new();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order = Vec::new();
    for node in &env.nodes {
        let count = counts.entry(node.name.as_str()).or_insert(0);
        if *count == 0 {
            order.push(node.name.as_str());
        }
        *count += 1;
    }
    for name in order {
        let count = counts[name];
        if count > 1 {
            findings.push(Lint::DuplicateNodeName {
                name: name.to_string(),
                count,
            });
        }
    }

    let mut reported = HashSet::new();
    for rule in &env.network.rules {
        for endpoint in [&rule.source, &rule.target] {
            let endpoint = endpoint.as_str();
            if endpoint == WILDCARD || counts.contains_key(endpoint) {
                continue;
            }
            if reported.insert(endpoint) {
                findings.push(Lint::UnknownRuleEndpoint {
                    endpoint: endpoint.to_string(),
                });
            }
        }
    }

    for finding in &findings {
        log::warn!("{}", finding);
    }

    findings
}
