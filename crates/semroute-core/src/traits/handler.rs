// SPDX-FileCopyrightText: 2026 Semroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Handler trait for the execution layer at the routing boundary.

use crate::error::SemrouteError;

/// A named backend capability that can answer a routed query.
///
/// The routing core treats execution as an opaque capability: once a
/// handler id is chosen, the caller layer invokes `execute` through a
/// capability table. Failures surface as [`SemrouteError::Handler`] and are
/// never retried or altered by the routing core.
pub trait Handler: Send + Sync {
    /// Produce a response for the query.
    fn execute(&self, query: &str) -> Result<String, SemrouteError>;
}
