// SPDX-FileCopyrightText: 2026 Semroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared across the Semroute crates.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Coarse low/medium/high scale used for handler cost, latency, and
/// computational complexity, and for the complexity of a query itself.
///
/// The derived `Ord` puts `Low < Medium < High`, which the complexity
/// analyzer relies on for monotonic escalation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Tier {
    Low,
    Medium,
    High,
}

/// Coarse rule-derived category of a query's purpose.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Intent {
    /// Two numeric operands joined by `+ - * /`.
    Arithmetic,
    /// Advanced mathematical reasoning (solve, equation, proof, ...).
    Mathematical,
    /// Requests for explanation or research-level content.
    Explanatory,
    /// Humorous, creative, or entertainment-focused queries.
    Creative,
    /// Default when no rule matches.
    General,
}

/// Confidence bucket derived from the similarity score of the chosen handler.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Confidence {
    High,
    Moderate,
    Low,
}
