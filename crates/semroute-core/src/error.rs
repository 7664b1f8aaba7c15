// SPDX-FileCopyrightText: 2026 Semroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Semroute query router.

use thiserror::Error;

/// The primary error type used across all Semroute crates.
///
/// Programming errors (e.g. a query vector of the wrong dimension reaching
/// the similarity index) are not represented here; they abort via assertion
/// because they indicate an initialization-order bug, not a runtime
/// condition a caller could recover from.
#[derive(Debug, Error)]
pub enum SemrouteError {
    /// Configuration errors: malformed catalog (duplicate id, missing
    /// required field, empty catalog), mismatched vector dimensionality,
    /// invalid TOML values. Fatal at startup.
    #[error("configuration error: {0}")]
    Config(String),

    /// The query passed to `route` was empty or whitespace-only.
    /// Rejected before any embedding or search work is done.
    #[error("input error: {0}")]
    Input(String),

    /// The embedding function could not process otherwise well-formed text.
    /// Propagated unchanged to the caller of `route`; no fallback encoding.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Lookup of a handler id that is not in the catalog or handler table.
    #[error("handler not found: {id}")]
    NotFound { id: String },

    /// Failure from the handler execution layer. Passed through unmodified;
    /// the core never retries or downgrades execution errors.
    #[error("handler execution error: {message}")]
    Handler {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
