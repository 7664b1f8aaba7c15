// SPDX-FileCopyrightText: 2026 Semroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Semroute configuration system.

use semroute_config::diagnostic::suggest_key;
use semroute_config::{load_and_validate_str, load_config_from_str};
use semroute_core::Tier;

/// Valid TOML with all known sections deserializes successfully.
#[test]
fn valid_toml_deserializes_into_semroute_config() {
    let toml = r#"
[agent]
name = "test-router"
log_level = "debug"

[routing]
decay_constant = 5.0
high_confidence_threshold = 0.9
moderate_confidence_threshold = 0.6

[complexity]
long_query_word_threshold = 6
very_long_query_word_threshold = 12

[index]
cache_path = "/tmp/semroute-index.json"

[[handlers]]
id = "only"
name = "Only Handler"
description = "Handles everything."
complexity = "medium"
cost = "low"
latency = "low"
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.agent.name, "test-router");
    assert_eq!(config.agent.log_level, "debug");
    assert_eq!(config.routing.decay_constant, 5.0);
    assert_eq!(config.routing.high_confidence_threshold, 0.9);
    assert_eq!(config.complexity.long_query_word_threshold, 6);
    assert_eq!(
        config.index.cache_path.as_deref(),
        Some("/tmp/semroute-index.json")
    );
    assert_eq!(config.handlers.len(), 1);
    assert_eq!(config.handlers[0].id, "only");
    assert_eq!(config.handlers[0].complexity, Tier::Medium);
}

/// Empty TOML falls back to compiled defaults (reference catalog).
#[test]
fn empty_toml_uses_defaults() {
    let config = load_and_validate_str("").expect("defaults are valid");
    assert_eq!(config.agent.name, "semroute");
    assert_eq!(config.handlers.len(), 4);
    assert_eq!(config.routing.decay_constant, 10.0);
    assert!(config.index.cache_path.is_none());
}

/// Unknown field in a section is rejected.
#[test]
fn unknown_field_is_rejected() {
    let toml = r#"
[routing]
decay_constnat = 5.0
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("decay_constnat"),
        "error should mention the bad key, got: {err_str}"
    );
}

/// The diagnostic path produces a "did you mean" suggestion for typos.
#[test]
fn typo_produces_suggestion() {
    let errors = load_and_validate_str(
        r#"
[agent]
naem = "oops"
"#,
    )
    .expect_err("typo should fail");

    let rendered: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    assert!(
        rendered.iter().any(|m| m.contains("naem")),
        "diagnostics should name the offending key: {rendered:?}"
    );
    assert_eq!(suggest_key("naem", &["name", "log_level"]), Some("name".to_string()));
}

/// Overriding only one handler keyword list keeps the rest at defaults.
#[test]
fn partial_intent_override_keeps_other_defaults() {
    let toml = r#"
[intent]
creative_keywords = ["limerick"]
"#;

    let config = load_and_validate_str(toml).expect("valid override");
    assert_eq!(config.intent.creative_keywords, vec!["limerick"]);
    assert!(config
        .intent
        .mathematical_keywords
        .contains(&"solve".to_string()));
}

/// Validation failures surface through load_and_validate_str.
#[test]
fn semantic_validation_errors_are_surfaced() {
    let toml = r#"
[routing]
decay_constant = -3.0
"#;

    let errors = load_and_validate_str(toml).expect_err("negative decay");
    assert!(errors
        .iter()
        .any(|e| e.to_string().contains("decay_constant")));
}

/// Duplicate handler ids in the TOML catalog are a validation error.
#[test]
fn duplicate_handler_ids_fail_validation() {
    let toml = r#"
[[handlers]]
id = "dup"
name = "First"
description = "First entry."
complexity = "low"
cost = "low"
latency = "low"

[[handlers]]
id = "dup"
name = "Second"
description = "Second entry."
complexity = "low"
cost = "low"
latency = "low"
"#;

    let errors = load_and_validate_str(toml).expect_err("duplicate ids");
    assert!(errors
        .iter()
        .any(|e| e.to_string().contains("duplicate handler id")));
}

/// A bad tier value fails deserialization, not silently defaulting.
#[test]
fn invalid_tier_value_is_rejected() {
    let toml = r#"
[[handlers]]
id = "x"
name = "X"
description = "X."
complexity = "extreme"
cost = "low"
latency = "low"
"#;

    assert!(load_config_from_str(toml).is_err());
}
