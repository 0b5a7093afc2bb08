//! Orchestrator - drives the checkpointed preprocessing run
//!
//! Transitions are strictly sequential and forward-only within one run.
//! Re-entry across runs happens only through [`Orchestrator::resume`]: the
//! loaded state's completion flags make every already-finished step skip, so
//! execution effectively continues from the first incomplete step.

use crate::core::blueprint::Blueprint;
use crate::core::error::PipelineError;
use crate::core::registry::OperationRegistry;
use crate::core::step::{StepName, TRAIN_TEST_SPLIT};
use crate::execution::dispatcher;
use crate::persistence::{CheckpointError, CheckpointStore};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

/// Why a step did or did not execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StepDisposition {
    Execute,
    /// Disabled in the user's selection
    Disabled,
    /// Completed in a previous run of this state
    AlreadyComplete,
    /// NLP-only step with no text columns designated
    GatedNoTextColumns,
}

fn disposition<B: Blueprint>(blueprint: &B, step: StepName) -> StepDisposition {
    if !blueprint.selection().is_enabled(step) {
        return StepDisposition::Disabled;
    }
    if blueprint.completion().is_complete(step) {
        return StepDisposition::AlreadyComplete;
    }
    if step.is_nlp_gated() && blueprint.nlp_columns().is_empty() {
        return StepDisposition::GatedNoTextColumns;
    }
    StepDisposition::Execute
}

/// Drives the ordered step loop and owns the resume bookkeeping.
pub struct Orchestrator {
    store: CheckpointStore,
    run_id: Uuid,
    last_checkpoint: Option<String>,
}

impl Orchestrator {
    /// Create an orchestrator writing checkpoints through the given store.
    pub fn new(store: CheckpointStore) -> Self {
        Self {
            store,
            run_id: Uuid::new_v4(),
            last_checkpoint: None,
        }
    }

    /// Create an orchestrator with the process-relative default store.
    pub fn with_default_store() -> Self {
        Self::new(CheckpointStore::with_default_path())
    }

    pub fn store(&self) -> &CheckpointStore {
        &self.store
    }

    /// Identifier of the most recent run.
    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// The most recently reached checkpoint name, used as the default
    /// resume target. `train_test_split` right after the split; then the
    /// last executed step.
    pub fn last_checkpoint(&self) -> Option<&str> {
        self.last_checkpoint.as_deref()
    }

    /// Run the preprocessing pipeline over the given state.
    ///
    /// The state is mutated in place and persisted after every executed
    /// step. A step failure aborts the run; the last saved checkpoint stays
    /// valid as the recovery point.
    pub fn run<B>(
        &mut self,
        blueprint: &mut B,
        predict_frame: Option<B::Frame>,
    ) -> Result<(), PipelineError>
    where
        B: Blueprint + Serialize,
    {
        self.run_id = Uuid::new_v4();
        info!(run_id = %self.run_id, "starting preprocessing run");

        blueprint
            .check_prediction_mode(predict_frame)
            .map_err(|source| PipelineError::Lifecycle {
                operation: "check_prediction_mode",
                source,
            })?;
        blueprint
            .train_test_split()
            .map_err(|source| PipelineError::Lifecycle {
                operation: "train_test_split",
                source,
            })?;
        // Virtual zeroth checkpoint: tracked, never written to disk.
        self.last_checkpoint = Some(TRAIN_TEST_SPLIT.to_string());

        let registry = OperationRegistry::<B>::standard();

        for entry in registry.entries() {
            match disposition(blueprint, entry.name) {
                StepDisposition::Disabled => {
                    info!(step = %entry.name, "skipping step: not selected by user");
                    continue;
                }
                StepDisposition::AlreadyComplete => {
                    debug!(step = %entry.name, "step already completed, skipping");
                    continue;
                }
                StepDisposition::GatedNoTextColumns => {
                    info!(step = %entry.name, "skipping NLP step: no text columns designated");
                    continue;
                }
                StepDisposition::Execute => {}
            }

            dispatcher::invoke(entry, blueprint)?;

            blueprint.completion_mut().mark_complete(entry.name);
            self.last_checkpoint = Some(entry.name.as_str().to_string());
            self.store
                .save(&*blueprint, entry.name.as_str(), self.run_id)?;
            debug!(step = %entry.name, "step completed, checkpoint saved");
        }

        info!(run_id = %self.run_id, "preprocessing run finished");
        Ok(())
    }

    /// Load a previously saved pipeline state.
    ///
    /// With no step given, resolves to the most recently reached checkpoint
    /// of this orchestrator. Only executed steps have checkpoints; requesting
    /// a skipped step fails with [`CheckpointError::NotFound`].
    pub fn resume<B>(&self, step: Option<&str>) -> Result<B, CheckpointError>
    where
        B: DeserializeOwned,
    {
        let step = match step {
            Some(step) => step.to_string(),
            None => self
                .last_checkpoint
                .clone()
                .ok_or(CheckpointError::NothingReached)?,
        };

        info!(step = %step, "loading checkpoint");
        self.store.load(&step)
    }
}
