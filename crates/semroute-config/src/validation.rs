// SPDX-FileCopyrightText: 2026 Semroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints serde attributes cannot express: catalog
//! well-formedness, threshold ordering, and positivity of the decay
//! constant. Collects every failure instead of stopping at the first.

use std::collections::HashSet;

use crate::diagnostic::ConfigError;
use crate::model::SemrouteConfig;

/// Validate a deserialized configuration for semantic correctness.
pub fn validate_config(config: &SemrouteConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.handlers.is_empty() {
        errors.push(ConfigError::Validation {
            message: "handlers must contain at least one entry".to_string(),
        });
    }

    let mut seen_ids = HashSet::new();
    for (i, handler) in config.handlers.iter().enumerate() {
        for (field, value) in [
            ("id", &handler.id),
            ("name", &handler.name),
            ("description", &handler.description),
        ] {
            if value.trim().is_empty() {
                errors.push(ConfigError::Validation {
                    message: format!("handlers[{i}].{field} must not be empty"),
                });
            }
        }
        if !handler.id.trim().is_empty() && !seen_ids.insert(&handler.id) {
            errors.push(ConfigError::Validation {
                message: format!(
                    "duplicate handler id `{}` in [[handlers]] array",
                    handler.id
                ),
            });
        }
    }

    if config.routing.decay_constant <= 0.0 {
        errors.push(ConfigError::Validation {
            message: format!(
                "routing.decay_constant must be positive, got {}",
                config.routing.decay_constant
            ),
        });
    }

    // The moderate bound is exclusive at zero: with moderate = 0 every
    // similarity in (0, 1] clears it and the low tier becomes unreachable.
    let high = config.routing.high_confidence_threshold;
    let moderate = config.routing.moderate_confidence_threshold;
    if !(0.0..=1.0).contains(&high) || moderate <= 0.0 || moderate > 1.0 {
        errors.push(ConfigError::Validation {
            message: format!(
                "confidence thresholds must satisfy 0 < moderate <= high <= 1, \
                 got high={high} moderate={moderate}"
            ),
        });
    }
    if moderate > high {
        errors.push(ConfigError::Validation {
            message: format!(
                "routing.moderate_confidence_threshold ({moderate}) must not exceed \
                 routing.high_confidence_threshold ({high})"
            ),
        });
    }

    if config.complexity.long_query_word_threshold
        >= config.complexity.very_long_query_word_threshold
    {
        errors.push(ConfigError::Validation {
            message: format!(
                "complexity.long_query_word_threshold ({}) must be below \
                 complexity.very_long_query_word_threshold ({})",
                config.complexity.long_query_word_threshold,
                config.complexity.very_long_query_word_threshold
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
