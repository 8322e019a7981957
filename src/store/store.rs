use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::record::Record;
use crate::error::SessionError;

/// Durable whole-snapshot persistence for the record list
///
/// The on-disk layout is a single JSON array of `{logs, path}` objects at a
/// fixed per-install location. Every `save` rewrites the full snapshot;
/// the write goes to a sibling temp file first and is renamed over the
/// snapshot so a crash mid-write never corrupts committed data.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted record list.
    ///
    /// A missing file yields an empty list, as does any read or parse
    /// failure. Load never raises; failures degrade to a warning.
    pub fn load(&self) -> Vec<Record> {
        if !self.path.exists() {
            debug!("No record snapshot at {}", self.path.display());
            return Vec::new();
        }

        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) => {
                warn!("Failed to read record snapshot: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Record>>(&text) {
            Ok(records) => {
                info!(
                    "Loaded {} records from {}",
                    records.len(),
                    self.path.display()
                );
                records
            }
            Err(e) => {
                warn!("Failed to parse record snapshot, starting empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Overwrite the snapshot with the full current record list.
    pub fn save(&self, records: &[Record]) -> Result<(), SessionError> {
        let json = serde_json::to_string(records)
            .map_err(|e| SessionError::Persistence(format!("serialize records: {}", e)))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Temp file in the same directory so the rename stays on one
        // filesystem.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        debug!(
            "Saved {} records to {}",
            records.len(),
            self.path.display()
        );

        Ok(())
    }
}
