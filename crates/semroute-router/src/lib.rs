// SPDX-FileCopyrightText: 2026 Semroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query classification and handler routing for Semroute.
//!
//! This crate provides:
//! - [`IntentClassifier`]: ordered, data-driven intent rules
//! - [`ComplexityAnalyzer`]: keyword tiers plus monotonic length escalation
//! - [`RoutingEngine`]: fuses classification, embedding, and
//!   nearest-neighbor search into one [`RoutingDecision`]
//!
//! The engine is synchronous and deterministic; the catalog/index pair is
//! one atomically swappable snapshot so concurrent routing needs no locks.

pub mod classifier;
pub mod complexity;
pub mod engine;

pub use classifier::{IntentClassifier, IntentRule};
pub use complexity::ComplexityAnalyzer;
pub use engine::{
    build_index, confidence_for, similarity_from_distance, RoutingDecision, RoutingEngine,
    RoutingTable,
};
