// SPDX-FileCopyrightText: 2026 Semroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Semroute query router.
//!
//! This crate provides the foundational trait definitions, error type, and
//! domain enums used throughout the Semroute workspace. The embedding
//! function and the handler execution layer both plug in through traits
//! defined here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::SemrouteError;
pub use traits::{Embedder, Handler};
pub use types::{Confidence, Intent, Tier};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traits_are_object_safe() {
        // The engine holds `Arc<dyn Embedder>` and the capability table
        // holds `Box<dyn Handler>`; both must stay object-safe.
        fn _embedder(_: &dyn Embedder) {}
        fn _handler(_: &dyn Handler) {}
    }

    #[test]
    fn error_variants_cover_the_contract() {
        let _ = SemrouteError::Config("x".into());
        let _ = SemrouteError::Input("x".into());
        let _ = SemrouteError::Encoding("x".into());
        let _ = SemrouteError::NotFound { id: "x".into() };
        let _ = SemrouteError::Handler {
            message: "x".into(),
            source: None,
        };
        let _ = SemrouteError::Internal("x".into());
    }
}
