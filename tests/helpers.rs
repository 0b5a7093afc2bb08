//! Test utility functions for prepline

use prepline::execution::Orchestrator;
use prepline::persistence::CheckpointStore;
use std::path::Path;

/// Fresh orchestrator backed by a temp checkpoint directory.
///
/// The TempDir must stay alive for the duration of the test.
pub fn temp_orchestrator() -> (tempfile::TempDir, Orchestrator) {
    let dir = tempfile::tempdir().unwrap();
    let orchestrator = Orchestrator::new(CheckpointStore::new(dir.path()));
    (dir, orchestrator)
}

/// File names in a checkpoint directory, sorted.
pub fn checkpoint_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
