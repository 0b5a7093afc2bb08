//! Filesystem-backed checkpoint store

use crate::persistence::{
    checkpoint_file_name, CheckpointEnvelope, CheckpointError, CheckpointSummary,
    CHECKPOINT_FORMAT_VERSION, CHECKPOINT_PREFIX,
};
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// Persists and restores full pipeline-state snapshots, keyed by step name.
///
/// Saves go through a temp file in the target directory followed by a rename,
/// so a crash mid-write never leaves a torn checkpoint behind. The directory
/// is assumed to have a single writer; concurrent runs against the same path
/// are undefined.
pub struct CheckpointStore {
    dir: PathBuf,
}

impl CheckpointStore {
    /// Create a store rooted at the given directory.
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    /// Create a store rooted at the process-relative default location.
    pub fn with_default_path() -> Self {
        Self::new(".")
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, step: &str) -> PathBuf {
        self.dir.join(checkpoint_file_name(step))
    }

    /// Serialize the full state and persist it under the step's checkpoint
    /// name. The write is atomic: temp file first, then rename.
    pub fn save<S: Serialize>(
        &self,
        state: &S,
        step: &str,
        run_id: Uuid,
    ) -> Result<(), CheckpointError> {
        fs::create_dir_all(&self.dir)?;

        let envelope = CheckpointEnvelope {
            format_version: CHECKPOINT_FORMAT_VERSION,
            run_id,
            step: step.to_string(),
            saved_at: Utc::now(),
            state: serde_json::to_value(state)?,
        };

        let final_path = self.path_for(step);
        let tmp_path = self.dir.join(format!(".{}.tmp", checkpoint_file_name(step)));

        fs::write(&tmp_path, serde_json::to_vec(&envelope)?)?;
        fs::rename(&tmp_path, &final_path)?;

        debug!(step, path = %final_path.display(), "checkpoint saved");
        Ok(())
    }

    /// Whether a checkpoint exists for the given step.
    pub fn exists(&self, step: &str) -> bool {
        self.path_for(step).is_file()
    }

    /// Load and deserialize the full state saved after the given step.
    pub fn load<S: DeserializeOwned>(&self, step: &str) -> Result<S, CheckpointError> {
        let envelope = self.read_envelope(step)?;
        Ok(serde_json::from_value(envelope.state)?)
    }

    /// Read a step's checkpoint envelope without decoding the state payload.
    pub fn read_envelope(&self, step: &str) -> Result<CheckpointEnvelope, CheckpointError> {
        let path = self.path_for(step);
        let bytes = fs::read(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CheckpointError::NotFound {
                    step: step.to_string(),
                }
            } else {
                CheckpointError::Io(e)
            }
        })?;

        let envelope: CheckpointEnvelope = serde_json::from_slice(&bytes)?;
        if envelope.format_version != CHECKPOINT_FORMAT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: envelope.format_version,
                expected: CHECKPOINT_FORMAT_VERSION,
            });
        }
        Ok(envelope)
    }

    /// List all checkpoints in the store's directory, oldest first.
    pub fn list(&self) -> Result<Vec<CheckpointSummary>, CheckpointError> {
        let mut summaries = Vec::new();

        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(summaries),
            Err(e) => return Err(e.into()),
        };

        for entry in entries {
            let entry = entry?;
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            let Some(step) = name.strip_prefix(&format!("{CHECKPOINT_PREFIX}_")) else {
                continue;
            };

            let envelope = self.read_envelope(step)?;
            summaries.push(CheckpointSummary {
                step: envelope.step,
                run_id: envelope.run_id,
                saved_at: envelope.saved_at,
                size_bytes: entry.metadata()?.len(),
            });
        }

        summaries.sort_by(|a, b| a.saved_at.cmp(&b.saved_at));
        Ok(summaries)
    }
}
