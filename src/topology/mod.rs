//! Network topology module.
//!
//! This module contains the immutable topology model and the expansion of
//! declared connectivity rules into directed rules.

pub mod types;
pub mod rules;

// Re-export key types and functions for easier access
pub use types::{Action, Environment, Network, Node, Role, Rule, WILDCARD};
pub use rules::expand;
