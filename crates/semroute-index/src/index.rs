// SPDX-FileCopyrightText: 2026 Semroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Exact L2 nearest-neighbor index over embedded handler descriptions.

use serde::{Deserialize, Serialize};

use semroute_core::SemrouteError;

/// One stored vector and the handler id it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct IndexEntry {
    pub(crate) handler_id: String,
    pub(crate) vector: Vec<f32>,
}

/// A single search result: handler id and true L2 distance.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub handler_id: String,
    pub distance: f32,
}

/// Read-only snapshot of `(vector, handler_id)` pairs.
///
/// Construction is the only way to obtain a value of this type, so a
/// "search before build" ordering bug is unrepresentable. Any change to the
/// catalog invalidates the snapshot and requires a full rebuild; there is
/// no incremental update.
#[derive(Debug, Clone)]
pub struct SimilarityIndex {
    dimension: usize,
    entries: Vec<IndexEntry>,
}

impl SimilarityIndex {
    /// Build an index from an ordered sequence of `(vector, handler_id)`
    /// pairs. The order must be catalog insertion order; it decides
    /// tie-breaking in `search`.
    ///
    /// Fails with [`SemrouteError::Config`] if `pairs` is empty or any two
    /// vectors disagree on dimensionality.
    pub fn build(pairs: Vec<(Vec<f32>, String)>) -> Result<Self, SemrouteError> {
        let Some(first) = pairs.first() else {
            return Err(SemrouteError::Config(
                "similarity index requires at least one vector".to_string(),
            ));
        };
        let dimension = first.0.len();

        let mut entries = Vec::with_capacity(pairs.len());
        for (vector, handler_id) in pairs {
            if vector.len() != dimension {
                return Err(SemrouteError::Config(format!(
                    "vector for handler `{handler_id}` has dimension {}, expected {dimension}",
                    vector.len()
                )));
            }
            entries.push(IndexEntry { handler_id, vector });
        }

        Ok(Self { dimension, entries })
    }

    /// Exact nearest-neighbor search.
    ///
    /// Scans every stored vector and computes true L2 distance; no pruning.
    /// Returns `min(k, len)` hits sorted by non-decreasing distance, ties
    /// broken by insertion order (stable sort keeps earlier entries first).
    ///
    /// A query vector of the wrong dimension is an initialization-order bug
    /// (catalog and query must share one embedder) and aborts.
    pub fn search(&self, query: &[f32], k: usize) -> Vec<SearchHit> {
        assert_eq!(
            query.len(),
            self.dimension,
            "query vector dimension {} does not match index dimension {}",
            query.len(),
            self.dimension
        );

        let mut hits: Vec<SearchHit> = self
            .entries
            .iter()
            .map(|entry| SearchHit {
                handler_id: entry.handler_id.clone(),
                distance: l2_distance(query, &entry.vector),
            })
            .collect();

        hits.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        hits.truncate(k);
        hits
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub(crate) fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub(crate) fn from_entries(dimension: usize, entries: Vec<IndexEntry>) -> Self {
        Self { dimension, entries }
    }
}

/// True Euclidean distance between two equal-length vectors.
fn l2_distance(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f32>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_of(pairs: &[(&[f32], &str)]) -> SimilarityIndex {
        SimilarityIndex::build(
            pairs
                .iter()
                .map(|(v, id)| (v.to_vec(), id.to_string()))
                .collect(),
        )
        .expect("valid pairs")
    }

    #[test]
    fn empty_pairs_are_a_configuration_error() {
        let err = SimilarityIndex::build(Vec::new()).expect_err("empty build");
        assert!(matches!(err, SemrouteError::Config(_)));
    }

    #[test]
    fn mixed_dimensions_are_a_configuration_error() {
        let err = SimilarityIndex::build(vec![
            (vec![1.0, 0.0], "a".to_string()),
            (vec![1.0, 0.0, 0.0], "b".to_string()),
        ])
        .expect_err("dimension mismatch");
        assert!(matches!(err, SemrouteError::Config(_)));
        assert!(err.to_string().contains("b"));
    }

    #[test]
    fn search_returns_non_decreasing_distances() {
        let index = index_of(&[
            (&[4.0, 0.0], "far"),
            (&[1.0, 0.0], "near"),
            (&[2.0, 0.0], "mid"),
        ]);

        let hits = index.search(&[0.0, 0.0], 3);
        let ids: Vec<&str> = hits.iter().map(|h| h.handler_id.as_str()).collect();
        assert_eq!(ids, vec!["near", "mid", "far"]);
        assert!(hits.windows(2).all(|w| w[0].distance <= w[1].distance));
    }

    #[test]
    fn search_clamps_k_to_index_size() {
        let index = index_of(&[(&[1.0], "only")]);
        assert_eq!(index.search(&[0.0], 5).len(), 1);
        assert_eq!(index.search(&[0.0], 0).len(), 0);
    }

    #[test]
    fn ties_break_by_insertion_order() {
        // Two identical vectors: the earlier catalog entry must win.
        let index = index_of(&[
            (&[1.0, 1.0], "registered-first"),
            (&[1.0, 1.0], "registered-second"),
        ]);

        let hits = index.search(&[0.0, 0.0], 2);
        assert_eq!(hits[0].handler_id, "registered-first");
        assert_eq!(hits[1].handler_id, "registered-second");
        assert_eq!(hits[0].distance, hits[1].distance);
    }

    #[test]
    fn distance_is_true_l2_not_squared() {
        let index = index_of(&[(&[3.0, 4.0], "a")]);
        let hits = index.search(&[0.0, 0.0], 1);
        assert!((hits[0].distance - 5.0).abs() < 1e-6);
    }

    #[test]
    #[should_panic(expected = "does not match index dimension")]
    fn wrong_query_dimension_aborts() {
        let index = index_of(&[(&[1.0, 0.0], "a")]);
        index.search(&[1.0, 0.0, 0.0], 1);
    }
}
