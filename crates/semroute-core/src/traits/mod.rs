// SPDX-FileCopyrightText: 2026 Semroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait definitions for Semroute's injectable seams.

pub mod embedder;
pub mod handler;

pub use embedder::Embedder;
pub use handler::Handler;
