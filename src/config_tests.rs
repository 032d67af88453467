use crate::config_loader::load_environment_from_str;
use crate::error::ConfigError;
use crate::topology::types::{Action, Node, Role, Rule, WILDCARD};

fn node(name: &str, role: Role) -> Node {
    Node {
        name: name.to_string(),
        seed: false,
        role,
        ui_port: None,
        api_port: None,
        flags: None,
    }
}

#[test]
fn test_symmetric_rule_example() {
    let yaml = r#"
nodes:
  - name: A
  - name: B
    role: audit
network:
  rules:
    - action: allow
      source: A
      target: B
"#;

    let env = load_environment_from_str(yaml).unwrap();
    assert_eq!(env.nodes, vec![node("A", Role::Follower), node("B", Role::Audit)]);
    assert_eq!(
        env.network.rules,
        vec![
            Rule::new("A", "B", Action::Allow),
            Rule::new("B", "A", Action::Allow),
        ]
    );
    assert_eq!(env.flags, None);
}

#[test]
fn test_one_way_rule_example() {
    let yaml = r#"
nodes:
  - name: A
  - name: B
    role: audit
network:
  rules:
    - action: deny
      source: A
      target: B
      one-way: true
"#;

    let env = load_environment_from_str(yaml).unwrap();
    assert_eq!(env.network.rules, vec![Rule::new("A", "B", Action::Deny)]);
}

#[test]
fn test_wildcard_defaults_and_mixed_rules() {
    let yaml = r#"
nodes:
  - name: gateway
    seed: true
  - name: worker
network:
  rules:
    - action: deny
    - action: allow
      source: gateway
      one-way: true
    - action: allow
      target: worker
      one-way: false
"#;

    let env = load_environment_from_str(yaml).unwrap();
    assert_eq!(
        env.network.rules,
        vec![
            Rule::new(WILDCARD, WILDCARD, Action::Deny),
            Rule::new(WILDCARD, WILDCARD, Action::Deny),
            Rule::new("gateway", WILDCARD, Action::Allow),
            Rule::new(WILDCARD, "worker", Action::Allow),
            Rule::new("worker", WILDCARD, Action::Allow),
        ]
    );
}

#[test]
fn test_every_pair_is_consecutive_and_swapped() {
    let yaml = r#"
nodes: [{name: a}, {name: b}, {name: c}]
network:
  rules:
    - {action: allow, source: a, target: b}
    - {action: deny, source: b, target: c, one-way: true}
    - {action: deny, source: c, target: a}
"#;

    let env = load_environment_from_str(yaml).unwrap();
    let rules = &env.network.rules;
    assert_eq!(rules.len(), 5);
    assert_eq!(rules[1], rules[0].reversed());
    assert_eq!(rules[2], Rule::new("b", "c", Action::Deny));
    assert_eq!(rules[4], rules[3].reversed());
    assert_eq!(rules[3].action, rules[4].action);
}

#[test]
fn test_node_fields_and_top_level_flags() {
    let yaml = r#"
flags: "--network-id=7"
nodes:
  - name: seed-1
    seed: true
    role: federated
    ui_port: 8090
    api_port: 8088
    flags: "--debug"
network:
  rules: []
"#;

    let env = load_environment_from_str(yaml).unwrap();
    assert_eq!(env.flags.as_deref(), Some("--network-id=7"));
    assert_eq!(
        env.nodes[0],
        Node {
            name: "seed-1".to_string(),
            seed: true,
            role: Role::Federated,
            ui_port: Some(8090),
            api_port: Some(8088),
            flags: Some("--debug".to_string()),
        }
    );
    assert!(env.network.rules.is_empty());
}

#[test]
fn test_empty_nodes_fails_after_schema() {
    let err = load_environment_from_str("nodes: []\nnetwork:\n  rules: []\n").unwrap_err();
    assert!(matches!(err, ConfigError::Semantic(_)));
    assert!(err.to_string().contains("At least one node"));
}

#[test]
fn test_missing_nodes_fails_schema() {
    let err = load_environment_from_str("network:\n  rules: []\n").unwrap_err();
    match err {
        ConfigError::Schema(schema_err) => {
            assert_eq!(schema_err.path, "<root>");
            assert!(schema_err.message.contains("missing field `nodes`"));
        }
        other => panic!("expected schema error, got {:?}", other),
    }
}

#[test]
fn test_invalid_action_fails_schema() {
    let yaml = r#"
nodes: [{name: A}]
network:
  rules:
    - action: permit
      source: A
"#;

    let err = load_environment_from_str(yaml).unwrap_err();
    assert!(matches!(err, ConfigError::Schema(_)));
    let message = err.to_string();
    assert!(message.contains("network.rules[0]"));
    assert!(message.contains("permit"));
}

#[test]
fn test_undeclared_endpoints_and_duplicate_names_are_accepted() {
    let yaml = r#"
nodes: [{name: A}, {name: A}]
network:
  rules:
    - {action: allow, source: A, target: nowhere}
"#;

    let env = load_environment_from_str(yaml).unwrap();
    assert_eq!(env.nodes.len(), 2);
    assert_eq!(env.network.rules[1], Rule::new("nowhere", "A", Action::Allow));
}

#[test]
fn test_loading_is_idempotent() {
    let yaml = r#"
nodes: [{name: A, seed: true}, {name: B, role: federated}]
network:
  rules:
    - {action: allow, source: A, target: B}
    - {action: deny, one-way: true}
"#;

    let first = load_environment_from_str(yaml).unwrap();
    let second = load_environment_from_str(yaml).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_merge_keys_share_node_settings() {
    let yaml = r#"
nodes:
  - &a {name: A, role: audit}
  - {<<: *a, name: B}
network:
  rules: []
"#;

    let env = load_environment_from_str(yaml).unwrap();
    assert_eq!(env.nodes, vec![node("A", Role::Audit), node("B", Role::Audit)]);
}

#[test]
fn test_merge_keys_in_rules_and_local_override() {
    let yaml = r#"
nodes: [{name: A}, {name: B}, {name: C}]
network:
  rules:
    - &lan {action: allow, source: A, target: B, one-way: true}
    - <<: *lan
      target: C
    - <<: [*lan, {action: deny}]
      one-way: false
"#;

    let env = load_environment_from_str(yaml).unwrap();
    assert_eq!(
        env.network.rules,
        vec![
            Rule::new("A", "B", Action::Allow),
            Rule::new("A", "C", Action::Allow),
            Rule::new("A", "B", Action::Allow),
            Rule::new("B", "A", Action::Allow),
        ]
    );
}
