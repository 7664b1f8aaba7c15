// SPDX-FileCopyrightText: 2026 Semroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The routing engine: classification, similarity search, and decision
//! assembly.
//!
//! `route` is pure and deterministic given a fixed catalog, index, and
//! configuration: no retries, no randomness, no network. The catalog and
//! index live in one atomically swappable snapshot, so concurrent `route`
//! calls read lock-free and a rebuild can never expose a half-replaced
//! pair.

use std::sync::{Arc, Mutex};

use arc_swap::ArcSwap;
use serde::Serialize;
use tracing::{debug, info};

use semroute_catalog::{Catalog, HandlerDescriptor};
use semroute_config::model::{RoutingConfig, SemrouteConfig};
use semroute_core::{Confidence, Embedder, Intent, SemrouteError, Tier};
use semroute_index::SimilarityIndex;

use crate::classifier::IntentClassifier;
use crate::complexity::ComplexityAnalyzer;

/// One routing decision, owned by the caller and never mutated.
///
/// The explanation text is part of the observable contract: identical
/// inputs must reproduce it word for word, which is what makes decisions
/// auditable and diffable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutingDecision {
    /// The original query.
    pub query: String,
    /// Id of the selected handler.
    pub selected_handler_id: String,
    /// Rule-derived query intent.
    pub intent: Intent,
    /// Estimated query complexity.
    pub complexity: Tier,
    /// Similarity score of the selected handler, in (0, 1].
    pub similarity_score: f32,
    /// Confidence bucket derived from the similarity score.
    pub confidence: Confidence,
    /// Human-readable justification of the decision.
    pub explanation: String,
}

/// Consistent snapshot of a catalog and the index built from it.
///
/// The two are constructed together and replaced together; handing out the
/// pair as one `Arc` is what keeps the index slot -> descriptor mapping
/// valid for every in-flight read.
#[derive(Debug)]
pub struct RoutingTable {
    catalog: Catalog,
    index: SimilarityIndex,
}

impl RoutingTable {
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn index(&self) -> &SimilarityIndex {
        &self.index
    }
}

/// Orchestrates intent/complexity classification, query embedding, and
/// nearest-neighbor selection into a single [`RoutingDecision`].
pub struct RoutingEngine {
    embedder: Arc<dyn Embedder>,
    intent: IntentClassifier,
    complexity: ComplexityAnalyzer,
    config: RoutingConfig,
    table: ArcSwap<RoutingTable>,
    /// Serializes rebuilds; reads never take it.
    rebuild_lock: Mutex<()>,
}

impl std::fmt::Debug for RoutingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoutingEngine").finish_non_exhaustive()
    }
}

impl RoutingEngine {
    /// Build the engine, embedding every catalog description into a fresh
    /// similarity index.
    pub fn new(
        catalog: Catalog,
        embedder: Arc<dyn Embedder>,
        config: &SemrouteConfig,
    ) -> Result<Self, SemrouteError> {
        let index = build_index(&catalog, embedder.as_ref())?;
        Self::with_index(catalog, index, embedder, config)
    }

    /// Build the engine around an already-built index (e.g. one restored
    /// from the snapshot cache).
    ///
    /// Fails with [`SemrouteError::Config`] if the index does not line up
    /// with the catalog: the two must always be built from the same
    /// snapshot.
    pub fn with_index(
        catalog: Catalog,
        index: SimilarityIndex,
        embedder: Arc<dyn Embedder>,
        config: &SemrouteConfig,
    ) -> Result<Self, SemrouteError> {
        if index.len() != catalog.len() {
            return Err(SemrouteError::Config(format!(
                "similarity index holds {} vectors but the catalog has {} handlers",
                index.len(),
                catalog.len()
            )));
        }
        if index.dimension() != embedder.dimension() {
            return Err(SemrouteError::Config(format!(
                "similarity index dimension {} does not match embedder dimension {}",
                index.dimension(),
                embedder.dimension()
            )));
        }

        info!(
            handlers = catalog.len(),
            dimension = index.dimension(),
            model_version = embedder.model_version(),
            "routing engine initialized"
        );

        Ok(Self {
            embedder,
            intent: IntentClassifier::new(&config.intent),
            complexity: ComplexityAnalyzer::new(&config.complexity),
            config: config.routing.clone(),
            table: ArcSwap::from_pointee(RoutingTable { catalog, index }),
            rebuild_lock: Mutex::new(()),
        })
    }

    /// Route a query to the best-matching handler.
    pub fn route(&self, query: &str) -> Result<RoutingDecision, SemrouteError> {
        if query.trim().is_empty() {
            return Err(SemrouteError::Input(
                "query must not be empty or whitespace-only".to_string(),
            ));
        }

        // Rule-based signals, independent of the embedding and the index.
        let intent = self.intent.classify(query);
        let complexity = self.complexity.analyze(query, intent);

        let query_vector = self.embedder.encode(query)?;

        let table = self.table.load();
        let hits = table.index().search(&query_vector, 1);
        let best = hits.first().ok_or_else(|| {
            SemrouteError::Internal("similarity index returned no results".to_string())
        })?;

        let similarity = similarity_from_distance(best.distance, self.config.decay_constant);
        let confidence = confidence_for(similarity, &self.config);
        let descriptor = table.catalog().get(&best.handler_id)?;

        debug!(
            intent = %intent,
            complexity = %complexity,
            handler = %best.handler_id,
            similarity = similarity,
            "routed query"
        );

        Ok(RoutingDecision {
            query: query.to_string(),
            selected_handler_id: descriptor.id.clone(),
            intent,
            complexity,
            similarity_score: similarity,
            confidence,
            explanation: compose_explanation(intent, complexity, descriptor, similarity, confidence),
        })
    }

    /// Replace the catalog, rebuilding the index from the new descriptions
    /// and swapping both in as one snapshot.
    ///
    /// Rebuilds are mutually exclusive with each other; in-flight `route`
    /// calls keep the snapshot they loaded and never block.
    pub fn rebuild(&self, catalog: Catalog) -> Result<(), SemrouteError> {
        let _guard = self
            .rebuild_lock
            .lock()
            .map_err(|e| SemrouteError::Internal(format!("rebuild lock poisoned: {e}")))?;

        let index = build_index(&catalog, self.embedder.as_ref())?;
        info!(handlers = catalog.len(), "catalog replaced, index rebuilt");
        self.table.store(Arc::new(RoutingTable { catalog, index }));
        Ok(())
    }

    /// The current catalog/index snapshot.
    pub fn snapshot(&self) -> Arc<RoutingTable> {
        self.table.load_full()
    }
}

/// Embed every catalog description in insertion order and build the index.
pub fn build_index(
    catalog: &Catalog,
    embedder: &dyn Embedder,
) -> Result<SimilarityIndex, SemrouteError> {
    let mut pairs = Vec::with_capacity(catalog.len());
    for descriptor in catalog.list() {
        let vector = embedder.encode(&descriptor.description)?;
        pairs.push((vector, descriptor.id.clone()));
    }
    SimilarityIndex::build(pairs)
}

/// Map an L2 distance to a similarity score in (0, 1].
///
/// `exp(-distance / decay_constant)`: 1 at distance 0, strictly decreasing,
/// and positive for every finite non-negative distance.
pub fn similarity_from_distance(distance: f32, decay_constant: f32) -> f32 {
    (-distance / decay_constant).exp()
}

/// Bucket a similarity score into a confidence tier.
///
/// Boundaries are inclusive on the lower bound of each tier.
pub fn confidence_for(similarity: f32, config: &RoutingConfig) -> Confidence {
    if similarity >= config.high_confidence_threshold {
        Confidence::High
    } else if similarity >= config.moderate_confidence_threshold {
        Confidence::Moderate
    } else {
        Confidence::Low
    }
}

/// Compose the human-readable justification.
///
/// Deterministic by construction: plain formatting over the decision
/// inputs, no timestamps, no randomness.
fn compose_explanation(
    intent: Intent,
    complexity: Tier,
    descriptor: &HandlerDescriptor,
    similarity: f32,
    confidence: Confidence,
) -> String {
    let intent_reason = match intent {
        Intent::Arithmetic => "the query involves basic arithmetic operations",
        Intent::Mathematical => "the query requires advanced mathematical reasoning",
        Intent::Explanatory => "the query asks for detailed explanation or research-level content",
        Intent::Creative => "the query is creative, humorous, or entertainment-focused",
        Intent::General => "no intent rule matched the query",
    };

    let complexity_reason = match complexity {
        Tier::Low => "it has low computational complexity",
        Tier::Medium => "it involves multi-step reasoning",
        Tier::High => "it requires deep analysis and a comprehensive response",
    };

    format!(
        "Selected {name} because {intent_reason} and {complexity_reason}; embedding \
         similarity {similarity:.4} indicates a {confidence} confidence match. \
         {name} is rated {complexity_tier} complexity, {cost} cost, {latency} latency: \
         {description}",
        name = descriptor.name,
        complexity_tier = descriptor.complexity,
        cost = descriptor.cost,
        latency = descriptor.latency,
        description = descriptor.description,
    )
}
