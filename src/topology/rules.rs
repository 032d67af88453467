//! Rule expansion.
//!
//! Declared rules are symmetric unless marked `one-way`. Expansion turns each
//! declaration into the directed rules a harness can apply as-is.

use crate::schema::RuleSpec;
use crate::topology::types::{Action, Rule, WILDCARD};

/// Expand declared rules into directed rules, preserving declaration order.
///
/// A bidirectional declaration `(s, t, a)` yields `(s, t, a)` immediately
/// followed by `(t, s, a)`. A one-way declaration yields only `(s, t, a)`.
/// Missing endpoints become [`WILDCARD`] and a missing action becomes `deny`.
pub fn expand(specs: &[RuleSpec]) -> Vec<Rule> {
    let mut rules = Vec::with_capacity(specs.len() * 2);

    for spec in specs {
        let source = spec.source.as_deref().unwrap_or(WILDCARD);
        let target = spec.target.as_deref().unwrap_or(WILDCARD);
        let action = spec.action.unwrap_or(Action::Deny);
        let one_way = spec.one_way.unwrap_or(false);

        let forward = Rule::new(source, target, action);
        let reverse = (!one_way).then(|| forward.reversed());
        rules.push(forward);
        rules.extend(reverse);
    }

    rules
}
