// SPDX-FileCopyrightText: 2026 Semroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Immutable, ordered handler catalog.
//!
//! The catalog is built once at process startup from static configuration
//! and frozen afterwards. Insertion order is load-bearing: it determines
//! the slot-to-descriptor mapping of the similarity index, so replacing a
//! catalog always requires rebuilding the index from the new snapshot.

pub mod descriptor;

pub use descriptor::HandlerDescriptor;

use std::collections::HashSet;

use sha2::{Digest, Sha256};

use semroute_core::SemrouteError;

/// Init-time accumulator for catalog entries.
///
/// `register` is the only mutation the catalog model allows, and it exists
/// only here: once `build` succeeds the resulting [`Catalog`] has no
/// mutating operations. Deleting a handler means constructing a new catalog
/// (and a new index) from scratch.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    entries: Vec<HandlerDescriptor>,
    ids: HashSet<String>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler descriptor.
    ///
    /// Fails with [`SemrouteError::Config`] if the id is already present or
    /// a required field is empty. Never silently overwrites.
    pub fn register(mut self, descriptor: HandlerDescriptor) -> Result<Self, SemrouteError> {
        descriptor.validate()?;
        if !self.ids.insert(descriptor.id.clone()) {
            return Err(SemrouteError::Config(format!(
                "duplicate handler id `{}` in catalog",
                descriptor.id
            )));
        }
        self.entries.push(descriptor);
        Ok(self)
    }

    /// Freeze the accumulated entries into an immutable catalog.
    ///
    /// Fails with [`SemrouteError::Config`] if no handler was registered.
    pub fn build(self) -> Result<Catalog, SemrouteError> {
        if self.entries.is_empty() {
            return Err(SemrouteError::Config(
                "catalog must contain at least one handler".to_string(),
            ));
        }
        Ok(Catalog {
            entries: self.entries,
        })
    }
}

/// The fixed, ordered set of registered handlers.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<HandlerDescriptor>,
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// Build a catalog from an ordered descriptor list in one step.
    pub fn from_descriptors(
        descriptors: Vec<HandlerDescriptor>,
    ) -> Result<Self, SemrouteError> {
        let mut builder = CatalogBuilder::new();
        for descriptor in descriptors {
            builder = builder.register(descriptor)?;
        }
        builder.build()
    }

    /// The ordered descriptor sequence (insertion order).
    pub fn list(&self) -> &[HandlerDescriptor] {
        &self.entries
    }

    /// Look up a handler by id.
    pub fn get(&self, id: &str) -> Result<&HandlerDescriptor, SemrouteError> {
        self.entries
            .iter()
            .find(|d| d.id == id)
            .ok_or_else(|| SemrouteError::NotFound { id: id.to_string() })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stable hex digest of the catalog contents in insertion order.
    ///
    /// Combined with the embedder's model version, this keys the persisted
    /// index snapshot: any change to ids, descriptions, order, or tiers
    /// produces a different hash and forces a full index rebuild.
    pub fn content_hash(&self) -> String {
        let mut hasher = Sha256::new();
        for descriptor in &self.entries {
            hasher.update(descriptor.id.as_bytes());
            hasher.update([0u8]);
            hasher.update(descriptor.name.as_bytes());
            hasher.update([0u8]);
            hasher.update(descriptor.description.as_bytes());
            hasher.update([0u8]);
            hasher.update(descriptor.complexity.to_string().as_bytes());
            hasher.update(descriptor.cost.to_string().as_bytes());
            hasher.update(descriptor.latency.to_string().as_bytes());
            hasher.update([0xff]);
        }
        hex::encode(hasher.finalize())
    }
}
