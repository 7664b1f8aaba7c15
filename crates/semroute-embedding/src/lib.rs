// SPDX-FileCopyrightText: 2026 Semroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deterministic feature-hashing text embedder.
//!
//! Produces 384-dimensional vectors from lowercased word tokens plus
//! per-token character trigrams, each hashed into a signed bucket and
//! accumulated, then L2-normalized. The scheme is pure and reproducible:
//! the same text always yields a bit-identical vector, which is what lets
//! the similarity index be cached and rebuilt deterministically. Trigram
//! features give related word forms ("explain"/"explanations") overlapping
//! mass, so description/query similarity survives inflection.

use sha2::{Digest, Sha256};

use semroute_core::{Embedder, SemrouteError};

/// Output dimensionality of [`HashEmbedder`].
pub const EMBEDDING_DIM: usize = 384;

/// Model/version identifier for [`HashEmbedder`].
///
/// Keys the persisted index cache together with the catalog content hash.
/// Any change to tokenization, hashing, or pooling must bump this string.
pub const MODEL_VERSION: &str = "semroute-hash-384-v1";

/// Deterministic embedder over hashed token and trigram features.
///
/// Holds no interior mutability, so concurrent `encode` calls are safe.
#[derive(Debug, Default, Clone, Copy)]
pub struct HashEmbedder;

impl HashEmbedder {
    pub fn new() -> Self {
        Self
    }
}

impl Embedder for HashEmbedder {
    fn model_version(&self) -> &str {
        MODEL_VERSION
    }

    fn dimension(&self) -> usize {
        EMBEDDING_DIM
    }

    /// Encode text into a normalized 384-dim vector.
    ///
    /// Empty or whitespace-only text is valid and yields the zero vector;
    /// downstream components decide how to treat degenerate queries. The
    /// only malformed input is text carrying an embedded NUL byte, which
    /// marks a binary payload smuggled through the text channel.
    fn encode(&self, text: &str) -> Result<Vec<f32>, SemrouteError> {
        if text.contains('\0') {
            return Err(SemrouteError::Encoding(
                "input contains an embedded NUL byte".to_string(),
            ));
        }

        let mut accumulator = vec![0.0f32; EMBEDDING_DIM];
        for token in tokenize(text) {
            accumulate_feature(&mut accumulator, token.as_bytes());
            for trigram in trigrams(&token) {
                accumulate_feature(&mut accumulator, trigram.as_bytes());
            }
        }

        Ok(l2_normalize(&accumulator))
    }
}

/// Split text into lowercased alphanumeric tokens.
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect()
}

/// Character trigrams of a token, empty for tokens shorter than 3 chars.
fn trigrams(token: &str) -> Vec<String> {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() < 3 {
        return Vec::new();
    }
    chars.windows(3).map(|w| w.iter().collect()).collect()
}

/// Hash a feature into a signed bucket contribution.
///
/// The first 8 digest bytes pick the bucket, the ninth picks the sign.
/// SHA-256 keeps the mapping stable across platforms and releases.
fn accumulate_feature(accumulator: &mut [f32], feature: &[u8]) {
    let digest = Sha256::digest(feature);
    let bucket_bytes: [u8; 8] = digest[..8].try_into().expect("digest is 32 bytes");
    let bucket = (u64::from_le_bytes(bucket_bytes) % accumulator.len() as u64) as usize;
    let sign = if digest[8] & 1 == 0 { 1.0 } else { -1.0 };
    accumulator[bucket] += sign;
}

/// L2-normalize a vector; the zero vector is returned unchanged.
fn l2_normalize(vec: &[f32]) -> Vec<f32> {
    let norm: f32 = vec.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm > f32::EPSILON {
        vec.iter().map(|v| v / norm).collect()
    } else {
        vec.to_vec()
    }
}
