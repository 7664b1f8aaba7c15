// SPDX-FileCopyrightText: 2026 Semroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Handler descriptor record.

use serde::{Deserialize, Serialize};

use semroute_core::{SemrouteError, Tier};

/// Metadata describing one routable handler.
///
/// Immutable once registered in a [`crate::Catalog`]. The description text
/// is what gets embedded into the similarity index, so editing it changes
/// the catalog content hash and invalidates any cached index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HandlerDescriptor {
    /// Unique handler id, the key into the execution-layer capability table.
    pub id: String,
    /// Human-readable display name.
    pub name: String,
    /// Capability description; the embedding source text.
    pub description: String,
    /// Computational complexity tier of the handler.
    pub complexity: Tier,
    /// Cost tier of the handler.
    pub cost: Tier,
    /// Response latency tier of the handler.
    pub latency: Tier,
}

impl HandlerDescriptor {
    /// Check that all required text fields are non-empty.
    pub(crate) fn validate(&self) -> Result<(), SemrouteError> {
        for (field, value) in [
            ("id", &self.id),
            ("name", &self.name),
            ("description", &self.description),
        ] {
            if value.trim().is_empty() {
                return Err(SemrouteError::Config(format!(
                    "handler descriptor field `{field}` must not be empty"
                )));
            }
        }
        Ok(())
    }
}
