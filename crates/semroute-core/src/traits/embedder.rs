// SPDX-FileCopyrightText: 2026 Semroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Embedding trait for deterministic text-to-vector encoding.

use crate::error::SemrouteError;

/// Deterministic mapping from text to a fixed-length numeric vector.
///
/// Implementations must be pure: identical input text under the same
/// `model_version` always yields a bit-for-bit reproducible vector of
/// `dimension()` length. Empty or whitespace-only text is valid input and
/// must still produce a vector; downstream components decide how to treat
/// degenerate queries. Implementations must not mutate internal state, so
/// concurrent calls are safe without locking.
pub trait Embedder: Send + Sync {
    /// Fixed identifier for the embedding model and version. Any change to
    /// the encoding scheme must change this string, since it keys the
    /// persisted index cache.
    fn model_version(&self) -> &str;

    /// Output vector dimensionality, identical for every call.
    fn dimension(&self) -> usize;

    /// Encode text into a vector of `dimension()` f32 values.
    ///
    /// Fails with [`SemrouteError::Encoding`] only on malformed input.
    fn encode(&self, text: &str) -> Result<Vec<f32>, SemrouteError>;
}
