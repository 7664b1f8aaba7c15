// SPDX-FileCopyrightText: 2026 Semroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Optional on-disk snapshot of a built similarity index.
//!
//! The snapshot is keyed by `(model_version, catalog_hash)`. On startup a
//! matching snapshot is loaded instead of re-embedding the catalog; any
//! mismatch (different embedder version, edited catalog, unreadable file)
//! falls back to a full rebuild, after which the snapshot is overwritten.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use semroute_core::SemrouteError;

use crate::index::{IndexEntry, SimilarityIndex};

/// Serialized form of a built index plus its cache key.
#[derive(Debug, Serialize, Deserialize)]
struct IndexSnapshot {
    model_version: String,
    catalog_hash: String,
    dimension: usize,
    entries: Vec<IndexEntry>,
}

/// Load a cached index if the snapshot at `path` matches both keys.
///
/// Returns `Ok(None)` when the file is absent, unreadable, or keyed for a
/// different embedder version or catalog; the caller rebuilds in all those
/// cases. Only genuinely unexpected I/O states surface as errors, and today
/// there are none: a corrupt cache is never fatal.
pub fn load(
    path: &Path,
    model_version: &str,
    catalog_hash: &str,
) -> Result<Option<SimilarityIndex>, SemrouteError> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no index snapshot on disk");
            return Ok(None);
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "index snapshot unreadable, rebuilding");
            return Ok(None);
        }
    };

    let snapshot: IndexSnapshot = match serde_json::from_slice(&bytes) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "index snapshot corrupt, rebuilding");
            return Ok(None);
        }
    };

    if snapshot.model_version != model_version || snapshot.catalog_hash != catalog_hash {
        debug!(
            path = %path.display(),
            cached_model = %snapshot.model_version,
            cached_catalog = %snapshot.catalog_hash,
            "index snapshot key mismatch, rebuilding"
        );
        return Ok(None);
    }

    debug!(path = %path.display(), vectors = snapshot.entries.len(), "loaded index snapshot");
    Ok(Some(SimilarityIndex::from_entries(
        snapshot.dimension,
        snapshot.entries,
    )))
}

/// Write the snapshot for a built index, overwriting any existing file.
pub fn save(
    path: &Path,
    index: &SimilarityIndex,
    model_version: &str,
    catalog_hash: &str,
) -> Result<(), SemrouteError> {
    let snapshot = IndexSnapshot {
        model_version: model_version.to_string(),
        catalog_hash: catalog_hash.to_string(),
        dimension: index.dimension(),
        entries: index.entries().to_vec(),
    };

    let json = serde_json::to_vec(&snapshot)
        .map_err(|e| SemrouteError::Internal(format!("failed to serialize index snapshot: {e}")))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            SemrouteError::Internal(format!(
                "failed to create cache directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(path, json).map_err(|e| {
        SemrouteError::Internal(format!(
            "failed to write index snapshot {}: {e}",
            path.display()
        ))
    })?;

    debug!(path = %path.display(), vectors = index.len(), "wrote index snapshot");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_index() -> SimilarityIndex {
        SimilarityIndex::build(vec![
            (vec![1.0, 0.0, 0.0], "alpha".to_string()),
            (vec![0.0, 1.0, 0.0], "beta".to_string()),
        ])
        .expect("valid index")
    }

    #[test]
    fn snapshot_round_trip_restores_search_results() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("cache/index.json");
        let index = sample_index();

        save(&path, &index, "model-v1", "hash-1").expect("save");
        let restored = load(&path, "model-v1", "hash-1")
            .expect("load")
            .expect("matching snapshot");

        assert_eq!(restored.len(), index.len());
        assert_eq!(restored.dimension(), index.dimension());
        assert_eq!(
            restored.search(&[0.9, 0.1, 0.0], 2),
            index.search(&[0.9, 0.1, 0.0], 2)
        );
    }

    #[test]
    fn missing_file_means_rebuild() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("absent.json");
        assert!(load(&path, "model-v1", "hash-1").expect("load").is_none());
    }

    #[test]
    fn model_version_mismatch_means_rebuild() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("index.json");
        save(&path, &sample_index(), "model-v1", "hash-1").expect("save");

        assert!(load(&path, "model-v2", "hash-1").expect("load").is_none());
    }

    #[test]
    fn catalog_hash_mismatch_means_rebuild() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("index.json");
        save(&path, &sample_index(), "model-v1", "hash-1").expect("save");

        assert!(load(&path, "model-v1", "hash-2").expect("load").is_none());
    }

    #[test]
    fn corrupt_snapshot_means_rebuild() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("index.json");
        std::fs::write(&path, b"not json").expect("write");

        assert!(load(&path, "model-v1", "hash-1").expect("load").is_none());
    }

    #[test]
    fn save_overwrites_existing_snapshot() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("index.json");

        save(&path, &sample_index(), "model-v1", "hash-1").expect("save");
        save(&path, &sample_index(), "model-v1", "hash-2").expect("overwrite");

        assert!(load(&path, "model-v1", "hash-1").expect("load").is_none());
        assert!(load(&path, "model-v1", "hash-2").expect("load").is_some());
    }
}
