//! File-backed JSON document store for the lead collection.
//!
//! The whole collection lives in one JSON document mapping `id -> Lead`,
//! addressed by a sanitized storage key under the configured data directory.
//! The only mutation is a whole-collection replace; concurrent uploads race
//! at last-write-wins granularity, which is the documented consistency model.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::errors::AppError;
use crate::models::Lead;

/// Fixed storage key for the lead collection document.
const LEADS_STORAGE_KEY: &str = "leads";

/// Strips every character outside `[A-Za-z0-9._-]` from a storage key.
pub fn sanitize_storage_key(key: &str) -> String {
    key.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect()
}

/// Durable holder of the full lead collection.
///
/// Constructed once at startup and shared through application state; there is
/// no ambient global handle.
#[derive(Debug, Clone)]
pub struct LeadStore {
    path: PathBuf,
}

impl LeadStore {
    /// Store addressing the default `"leads"` document under `data_dir`.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self::with_key(data_dir, LEADS_STORAGE_KEY)
    }

    /// Store addressing an explicit document key, sanitized before use.
    pub fn with_key(data_dir: impl AsRef<Path>, key: &str) -> Self {
        let file = format!("{}.json", sanitize_storage_key(key));
        Self {
            path: data_dir.as_ref().join(file),
        }
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Atomically replaces the entire stored collection.
    ///
    /// The document is serialized keyed by lead id, written to a temp file in
    /// the same directory, and renamed into place. A failure at any step
    /// leaves the previously stored document intact.
    ///
    /// Ids are assumed unique (the normalizer always generates fresh ones);
    /// a colliding id within one batch would leave only one survivor, which
    /// is not additionally validated here.
    pub async fn replace_all(&self, leads: &[Lead]) -> Result<(), AppError> {
        let by_id: BTreeMap<String, &Lead> =
            leads.iter().map(|l| (l.id.to_string(), l)).collect();
        let json = serde_json::to_vec_pretty(&by_id)
            .map_err(|e| AppError::Storage(format!("failed to serialize leads: {}", e)))?;

        if let Some(dir) = self.path.parent() {
            tokio::fs::create_dir_all(dir).await.map_err(|e| {
                AppError::Storage(format!(
                    "failed to create data directory {}: {}",
                    dir.display(),
                    e
                ))
            })?;
        }

        // Unique temp name: concurrent replaces race at last-write-wins, but
        // one writer must never rename a peer's half-written temp into place.
        let tmp = self
            .path
            .with_extension(format!("json.{}.tmp", Uuid::new_v4()));
        tokio::fs::write(&tmp, &json)
            .await
            .map_err(|e| AppError::Storage(format!("failed to write lead document: {}", e)))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| AppError::Storage(format!("failed to commit lead document: {}", e)))?;

        tracing::info!(
            "Stored {} leads at {}",
            leads.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Reads every currently stored lead.
    ///
    /// A missing document is genuine absence and yields an empty collection.
    /// An unreadable or corrupt document is a storage error rather than being
    /// silently treated as empty.
    pub async fn get_all(&self) -> Result<Vec<Lead>, AppError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(AppError::Storage(format!(
                    "failed to read lead document: {}",
                    e
                )))
            }
        };

        let by_id: BTreeMap<String, Lead> = serde_json::from_slice(&bytes)
            .map_err(|e| AppError::Storage(format!("lead document is corrupt: {}", e)))?;
        Ok(by_id.into_values().collect())
    }
}
