// SPDX-FileCopyrightText: 2026 Semroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Semroute query router.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup. The numeric constants here (decay constant,
//! confidence thresholds, word-count thresholds) are tuning parameters
//! preserved from the reference catalog; they are exposed as named settings
//! rather than derived values.

use serde::{Deserialize, Serialize};

use semroute_catalog::HandlerDescriptor;
use semroute_core::Tier;

/// Top-level Semroute configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. Every section defaults to the reference setup, so an
/// empty file is a valid configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SemrouteConfig {
    /// Process identity and logging.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Routing engine thresholds.
    #[serde(default)]
    pub routing: RoutingConfig,

    /// Intent classifier keyword sets.
    #[serde(default)]
    pub intent: IntentConfig,

    /// Complexity analyzer keyword tiers and length thresholds.
    #[serde(default)]
    pub complexity: ComplexityConfig,

    /// Similarity index snapshot settings.
    #[serde(default)]
    pub index: IndexConfig,

    /// The handler catalog, in registration order.
    #[serde(default = "default_handlers")]
    pub handlers: Vec<HandlerDescriptor>,
}

impl Default for SemrouteConfig {
    fn default() -> Self {
        Self {
            agent: AgentConfig::default(),
            routing: RoutingConfig::default(),
            intent: IntentConfig::default(),
            complexity: ComplexityConfig::default(),
            index: IndexConfig::default(),
            handlers: default_handlers(),
        }
    }
}

/// Process identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name of the router instance.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_agent_name() -> String {
    "semroute".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Routing engine thresholds.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RoutingConfig {
    /// Decay constant for the distance-to-similarity mapping
    /// `similarity = exp(-distance / decay_constant)`. Must be positive.
    #[serde(default = "default_decay_constant")]
    pub decay_constant: f32,

    /// Similarity at or above this is high confidence.
    #[serde(default = "default_high_confidence")]
    pub high_confidence_threshold: f32,

    /// Similarity at or above this (but below high) is moderate confidence.
    #[serde(default = "default_moderate_confidence")]
    pub moderate_confidence_threshold: f32,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            decay_constant: default_decay_constant(),
            high_confidence_threshold: default_high_confidence(),
            moderate_confidence_threshold: default_moderate_confidence(),
        }
    }
}

fn default_decay_constant() -> f32 {
    10.0
}

fn default_high_confidence() -> f32 {
    0.8
}

fn default_moderate_confidence() -> f32 {
    0.5
}

/// Intent classifier keyword sets, one per rule, in priority order.
///
/// The arithmetic rule is a pattern, not a keyword set, so it has no
/// configuration here. Matching is case-insensitive substring containment.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct IntentConfig {
    /// Keywords marking advanced mathematical reasoning.
    #[serde(default = "default_mathematical_keywords")]
    pub mathematical_keywords: Vec<String>,

    /// Keywords marking requests for explanation.
    #[serde(default = "default_explanatory_keywords")]
    pub explanatory_keywords: Vec<String>,

    /// Keywords marking creative or humorous requests.
    #[serde(default = "default_creative_keywords")]
    pub creative_keywords: Vec<String>,
}

impl Default for IntentConfig {
    fn default() -> Self {
        Self {
            mathematical_keywords: default_mathematical_keywords(),
            explanatory_keywords: default_explanatory_keywords(),
            creative_keywords: default_creative_keywords(),
        }
    }
}

fn default_mathematical_keywords() -> Vec<String> {
    to_strings(&[
        "solve",
        "equation",
        "derivative",
        "integral",
        "matrix",
        "algebra",
        "calculus",
        "theorem",
        "proof",
        "differential",
        "formula",
        "calculate",
        "optimization",
    ])
}

fn default_explanatory_keywords() -> Vec<String> {
    to_strings(&[
        "explain",
        "what is",
        "how does",
        "why",
        "describe",
        "tell me about",
        "definition",
        "meaning",
        "clarify",
        "elaborate",
        "detail",
        "architecture",
        "overview",
    ])
}

fn default_creative_keywords() -> Vec<String> {
    to_strings(&[
        "roast",
        "joke",
        "funny",
        "humor",
        "creative",
        "story",
        "poem",
        "imagine",
        "pretend",
        "make me laugh",
    ])
}

/// Complexity analyzer configuration: three keyword tiers plus the
/// word-count thresholds of the length fallback.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ComplexityConfig {
    /// Keywords forcing the high complexity tier.
    #[serde(default = "default_high_keywords")]
    pub high_keywords: Vec<String>,

    /// Keywords forcing at least the medium complexity tier.
    #[serde(default = "default_medium_keywords")]
    pub medium_keywords: Vec<String>,

    /// Keywords marking the low complexity tier.
    #[serde(default = "default_low_keywords")]
    pub low_keywords: Vec<String>,

    /// Word count above which a query counts as long.
    #[serde(default = "default_long_query_words")]
    pub long_query_word_threshold: usize,

    /// Word count above which a query escalates to at least medium.
    #[serde(default = "default_very_long_query_words")]
    pub very_long_query_word_threshold: usize,
}

impl Default for ComplexityConfig {
    fn default() -> Self {
        Self {
            high_keywords: default_high_keywords(),
            medium_keywords: default_medium_keywords(),
            low_keywords: default_low_keywords(),
            long_query_word_threshold: default_long_query_words(),
            very_long_query_word_threshold: default_very_long_query_words(),
        }
    }
}

fn default_high_keywords() -> Vec<String> {
    to_strings(&[
        "explain",
        "describe",
        "architecture",
        "how does",
        "why does",
        "comprehensive",
        "detailed",
        "in-depth",
        "analysis",
        "research",
        "differential",
        "integral",
        "theorem",
        "proof",
        "derive",
        "framework",
        "mechanism",
        "implementation",
    ])
}

fn default_medium_keywords() -> Vec<String> {
    to_strings(&[
        "solve",
        "calculate",
        "equation",
        "formula",
        "algorithm",
        "algebra",
        "calculus",
        "matrix",
        "function",
        "optimize",
        "compare",
        "contrast",
        "evaluate",
    ])
}

fn default_low_keywords() -> Vec<String> {
    to_strings(&[
        "add", "subtract", "multiply", "divide", "sum", "total", "simple", "basic", "quick",
        "what is",
    ])
}

fn default_long_query_words() -> usize {
    8
}

fn default_very_long_query_words() -> usize {
    15
}

/// Similarity index snapshot settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct IndexConfig {
    /// Path for the persisted index snapshot. `None` disables caching and
    /// the index is rebuilt on every startup.
    #[serde(default)]
    pub cache_path: Option<String>,
}

/// The four-handler reference catalog.
fn default_handlers() -> Vec<HandlerDescriptor> {
    vec![
        HandlerDescriptor {
            id: "arithmetic".to_string(),
            name: "Quick-Math".to_string(),
            description: "Specialized in basic arithmetic operations like addition, \
                          subtraction, multiplication, and division. Handles simple \
                          mathematical calculations quickly and efficiently. Best for \
                          elementary arithmetic problems."
                .to_string(),
            complexity: Tier::Low,
            cost: Tier::Low,
            latency: Tier::Low,
        },
        HandlerDescriptor {
            id: "reasoning".to_string(),
            name: "Deep-Math".to_string(),
            description: "Advanced mathematical reasoning capable of solving algebra, \
                          calculus, differential equations, and multi-step mathematical \
                          problems. Provides step-by-step solutions and mathematical \
                          proofs. Ideal for complex mathematical reasoning tasks."
                .to_string(),
            complexity: Tier::Medium,
            cost: Tier::Medium,
            latency: Tier::Medium,
        },
        HandlerDescriptor {
            id: "explainer".to_string(),
            name: "Research-Explainer".to_string(),
            description: "High-capacity handler designed for in-depth explanations, \
                          research-level analysis, technical documentation, and \
                          comprehensive educational content. Excels at breaking down \
                          complex topics like machine learning architectures, scientific \
                          concepts, and theoretical frameworks."
                .to_string(),
            complexity: Tier::High,
            cost: Tier::High,
            latency: Tier::High,
        },
        HandlerDescriptor {
            id: "creative".to_string(),
            name: "Roast-Writer".to_string(),
            description: "Creative and humorous handler specialized in witty responses, \
                          roasting, jokes, and entertaining content. Designed for casual, \
                          fun interactions with a comedic twist. Perfect for light-hearted \
                          banter and creative wordplay."
                .to_string(),
            complexity: Tier::Low,
            cost: Tier::Low,
            latency: Tier::Low,
        },
    ]
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
