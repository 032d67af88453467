//! # Netsim Topology - Loader for declarative test-network descriptions
//!
//! This library reads a YAML description of a test network, validates its
//! shape and produces an immutable topology model for a network-simulation
//! or network-testing harness.
//!
//! ## Pipeline
//!
//! - `schema`: checks the raw YAML value against the expected shape,
//!   stopping at the first violation
//! - `mapper`: resolves defaults and builds the `Environment`
//! - `topology`: the model types and the expansion of declared rules into
//!   directed rules
//! - `config_loader`: file-level entry point tying the stages together
//! - `utils`: advisory checks that warn without failing a load; the loader
//!   never runs them, callers decide
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use netsim_topology::config_loader;
//! use std::path::Path;
//!
//! let env = config_loader::load_environment(Path::new("network.yaml"))?;
//! for rule in &env.network.rules {
//!     println!("{}", rule);
//! }
//! # Ok::<(), netsim_topology::ConfigError>(())
//! ```
//!
//! ## Configuration Format
//!
//! ```yaml
//! nodes:
//!   - name: alpha
//!     seed: true
//!     api_port: 8088
//!   - name: beta
//!     role: audit
//! network:
//!   rules:
//!     - action: deny                 # symmetric: alpha->beta and beta->alpha
//!       source: alpha
//!       target: beta
//!     - action: allow
//!       source: beta
//!       one-way: true                # beta->* only
//! flags: "--log-level=debug"
//! ```
//!
//! ## Error Handling
//!
//! Library functions return [`ConfigError`]. Nothing in this crate exits the
//! process; the binary wraps errors with `color_eyre` for reporting.

pub mod config_loader;
pub mod error;
pub mod mapper;
pub mod schema;
pub mod topology;
pub mod utils;

#[cfg(test)]
mod config_tests;

pub use config_loader::{load_environment, load_environment_from_str};
pub use error::{ConfigError, SchemaError};
pub use topology::{Action, Environment, Network, Node, Role, Rule, WILDCARD};
