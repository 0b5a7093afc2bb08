//! Orchestration error type

use crate::core::args::ArgError;
use crate::core::blueprint::StepError;
use crate::core::step::StepName;
use crate::persistence::CheckpointError;
use thiserror::Error;

/// Error aborting a pipeline run.
///
/// A step failure leaves the last saved checkpoint as the recovery point for
/// a future resume; no rollback is attempted.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("preprocessing step '{step}' failed: {source}")]
    Step {
        step: StepName,
        #[source]
        source: StepError,
    },

    #[error("invalid arguments for step '{step}': {source}")]
    Arguments {
        step: StepName,
        #[source]
        source: ArgError,
    },

    #[error("lifecycle operation '{operation}' failed: {source}")]
    Lifecycle {
        operation: &'static str,
        #[source]
        source: StepError,
    },

    #[error(transparent)]
    Checkpoint(#[from] CheckpointError),
}
