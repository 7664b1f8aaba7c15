// SPDX-FileCopyrightText: 2026 Semroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Handler execution layer for Semroute.
//!
//! The routing core stops at a handler id; this crate holds the
//! [`HandlerTable`] capability table that turns ids into responses, plus
//! the reference handlers that back the default catalog. Failures raised
//! here surface as [`semroute_core::SemrouteError::Handler`] and are never
//! retried or altered by the router.

pub mod builtin;
pub mod table;

pub use builtin::{
    register_builtins, ArithmeticHandler, CreativeHandler, ExplainerHandler, ReasoningHandler,
};
pub use table::HandlerTable;
