//! Shared utilities: advisory topology checks.

pub mod validation;

pub use validation::{lint_environment, Lint};
