//! Scenario-based tests for prepline

mod checkpoint_roundtrip;
mod failure_recovery;
mod nlp_gating;
mod rerun_idempotence;
mod selection;
