//! Topology type definitions.
//!
//! Immutable value records produced by a successful load: the environment,
//! its nodes, and the expanded directed rule set.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Token matching any node in a rule endpoint. Never resolved by this crate.
pub const WILDCARD: &str = "*";

/// Behavioral category of a node
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular participant
    #[default]
    Follower,
    /// Participates in federation
    Federated,
    /// Observes without voting
    Audit,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Follower => "follower",
            Self::Federated => "federated",
            Self::Audit => "audit",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "follower" => Ok(Self::Follower),
            "federated" => Ok(Self::Federated),
            "audit" => Ok(Self::Audit),
            other => Err(format!("unknown role '{}'", other)),
        }
    }
}

/// Connectivity decision carried by a rule
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Allow,
    #[default]
    Deny,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Allow => "allow",
            Self::Deny => "deny",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "allow" => Ok(Self::Allow),
            "deny" => Ok(Self::Deny),
            other => Err(format!("unknown action '{}'", other)),
        }
    }
}

/// Top-level result of a load
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Environment {
    /// Free-text flags passed to every node by the harness
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<String>,
    /// Declared nodes, in file order. Never empty.
    pub nodes: Vec<Node>,
    pub network: Network,
}

impl Environment {
    /// First node declared with `name`, if any. Names are not guaranteed unique.
    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.name == name)
    }

    /// Nodes flagged to bootstrap discovery
    pub fn seed_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|node| node.seed)
    }

    pub fn nodes_with_role(&self, role: Role) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(move |node| node.role == role)
    }
}

/// A single participant in the topology
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Node {
    pub name: String,
    pub seed: bool,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui_port: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_port: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<String>,
}

/// Expanded connectivity model
#[derive(Debug, Serialize, Clone, PartialEq, Default)]
pub struct Network {
    /// Directed rules. A bidirectional declaration contributes its forward
    /// rule followed immediately by the reverse.
    pub rules: Vec<Rule>,
}

impl Network {
    /// Rules whose source is exactly `source` (wildcards are not matched).
    pub fn rules_from<'a>(&'a self, source: &'a str) -> impl Iterator<Item = &'a Rule> + 'a {
        self.rules.iter().filter(move |rule| rule.source == source)
    }
}

/// A directed connectivity rule
#[derive(Debug, Serialize, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    pub source: String,
    pub target: String,
    pub action: Action,
}

impl Rule {
    pub fn new(source: impl Into<String>, target: impl Into<String>, action: Action) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            action,
        }
    }

    /// True if either endpoint is the wildcard
    pub fn is_wildcard(&self) -> bool {
        self.source == WILDCARD || self.target == WILDCARD
    }

    /// Same rule with endpoints swapped
    pub fn reversed(&self) -> Self {
        Self {
            source: self.target.clone(),
            target: self.source.clone(),
            action: self.action,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -> {}", self.action, self.source, self.target)
    }
}
