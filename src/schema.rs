//! Schema validation of the raw topology document.
//!
//! Shape checking is done by serde: every record denies unknown fields, and
//! enum fields deserialize straight into [`Role`] and [`Action`]. Nodes and
//! rules are deserialized one entry at a time so a failure can be reported
//! against its index (`nodes[1]`, `network.rules[0]`). Defaults are not
//! applied here; absent optional fields stay `None` so the mapper resolves
//! each default exactly once.

use serde::de::{self, DeserializeOwned, Deserializer, Unexpected};
use serde::Deserialize;
use serde_yaml::Value;

use crate::error::SchemaError;
use crate::topology::types::{Action, Role};

/// Shape-checked document, prior to default resolution
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedConfig {
    pub flags: Option<String>,
    pub nodes: Vec<NodeSpec>,
    pub network: NetworkSpec,
}

/// Shape-checked node entry
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename = "node", deny_unknown_fields)]
pub struct NodeSpec {
    pub name: String,
    #[serde(default, deserialize_with = "present")]
    pub seed: Option<bool>,
    #[serde(default, deserialize_with = "present")]
    pub role: Option<Role>,
    #[serde(default, deserialize_with = "present")]
    pub ui_port: Option<i64>,
    #[serde(default, deserialize_with = "present")]
    pub api_port: Option<i64>,
    #[serde(default, deserialize_with = "present")]
    pub flags: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NetworkSpec {
    pub rules: Vec<RuleSpec>,
}

/// Shape-checked rule declaration
///
/// `action` is required by the schema and always `Some` after validation; it
/// stays optional so the expander keeps its `deny` default should the schema
/// ever stop requiring it.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename = "rule", deny_unknown_fields)]
pub struct RuleSpec {
    #[serde(deserialize_with = "present")]
    pub action: Option<Action>,
    #[serde(default, deserialize_with = "present")]
    pub source: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub target: Option<String>,
    #[serde(rename = "one-way", default, deserialize_with = "present")]
    pub one_way: Option<bool>,
}

/// Top-level keys. Entries stay raw until they are checked with their index.
#[derive(Deserialize)]
#[serde(rename = "topology", deny_unknown_fields)]
struct Document {
    #[serde(deserialize_with = "non_null")]
    nodes: Vec<Value>,
    #[serde(deserialize_with = "non_null")]
    network: Value,
    #[serde(default, deserialize_with = "present")]
    flags: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename = "network", deny_unknown_fields)]
struct NetworkDocument {
    #[serde(deserialize_with = "non_null")]
    rules: Vec<Value>,
}

/// Validate a raw document against the topology schema
///
/// Merge keys (`<<`) must already be resolved; see
/// [`serde_yaml::Value::apply_merge`].
pub fn validate(raw: &Value) -> Result<ValidatedConfig, SchemaError> {
    let document = Document::deserialize(raw).map_err(|err| SchemaError::new("<root>", err))?;

    let nodes = document
        .nodes
        .into_iter()
        .enumerate()
        .map(|(i, node)| {
            NodeSpec::deserialize(node).map_err(|err| SchemaError::new(format!("nodes[{}]", i), err))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let network = NetworkDocument::deserialize(document.network)
        .map_err(|err| SchemaError::new("network", err))?;
    let rules = network
        .rules
        .into_iter()
        .enumerate()
        .map(|(i, rule)| {
            RuleSpec::deserialize(rule)
                .map_err(|err| SchemaError::new(format!("network.rules[{}]", i), err))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ValidatedConfig {
        flags: document.flags,
        nodes,
        network: NetworkSpec { rules },
    })
}

/// Required value that may not be written as `null`.
///
/// serde_yaml reads `null` as an empty sequence or mapping, which would let
/// `nodes: ~` through as an empty list.
fn non_null<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Err(de::Error::invalid_type(
            Unexpected::Other("null"),
            &"a value (omit optional keys instead of writing null)",
        )),
        value => T::deserialize(value).map_err(de::Error::custom),
    }
}

/// Optional key: absent means `None` (via `default`), present must not be null.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    non_null(deserializer).map(Some)
}
