// SPDX-FileCopyrightText: 2026 Semroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Exact nearest-neighbor similarity index for the Semroute query router.
//!
//! This crate provides:
//! - [`SimilarityIndex`]: read-only snapshot of embedded handler
//!   descriptions answering exact L2 nearest-neighbor queries
//! - [`cache`]: optional on-disk snapshot keyed by
//!   `(model_version, catalog_hash)`

pub mod cache;
pub mod index;

pub use index::{SearchHit, SimilarityIndex};
