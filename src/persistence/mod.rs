//! Checkpoint persistence for pipeline state
//!
//! A checkpoint is the full serialized pipeline state wrapped in a small
//! versioned envelope, written after every executed step. Files are named
//! `blueprint_checkpoint_{step}` under a configurable directory; skipped
//! steps never produce one, so resuming a skipped step fails loudly instead
//! of returning stale state.

pub mod store;

pub use store::CheckpointStore;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Supported envelope format version. Anything else is rejected on load.
pub const CHECKPOINT_FORMAT_VERSION: u32 = 1;

/// Fixed prefix of every checkpoint file name.
pub const CHECKPOINT_PREFIX: &str = "blueprint_checkpoint";

/// File name for a step's checkpoint: `blueprint_checkpoint_{step}`.
pub fn checkpoint_file_name(step: &str) -> String {
    format!("{CHECKPOINT_PREFIX}_{step}")
}

/// Versioned on-disk wrapper around a serialized pipeline state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckpointEnvelope {
    /// Envelope format version
    pub format_version: u32,

    /// Run that produced this checkpoint
    pub run_id: Uuid,

    /// Step after which the state was captured
    pub step: String,

    /// When the checkpoint was written
    pub saved_at: DateTime<Utc>,

    /// The full pipeline state, opaque to the store
    pub state: serde_json::Value,
}

/// Listing entry for one checkpoint file.
#[derive(Debug, Clone, Serialize)]
pub struct CheckpointSummary {
    pub step: String,
    pub run_id: Uuid,
    pub saved_at: DateTime<Utc>,
    pub size_bytes: u64,
}

/// Error types for checkpoint storage.
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("no checkpoint found for step '{step}' (only executed steps produce checkpoints)")]
    NotFound { step: String },

    #[error("no checkpoint has been reached in this run")]
    NothingReached,

    #[error("unsupported checkpoint format version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("checkpoint I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("checkpoint serialization failed: {0}")]
    Serde(#[from] serde_json::Error),
}
