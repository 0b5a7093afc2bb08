//! prepline - checkpointed preprocessing pipelines for tabular ML workflows

pub mod cli;
pub mod core;
pub mod execution;
pub mod persistence;

// Re-export commonly used types
pub use crate::core::{ArgError, ArgSpec, ArgValue, Blueprint, StepError};
pub use crate::core::{CompletionFlags, SelectionConfig, StepSelection};
pub use crate::core::{OperationRegistry, PipelineError, StepName, STEP_ORDER, TRAIN_TEST_SPLIT};
pub use crate::execution::Orchestrator;
pub use crate::persistence::{CheckpointEnvelope, CheckpointError, CheckpointStore};
