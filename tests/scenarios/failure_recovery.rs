//! Test: a failed step aborts the run, and the last checkpoint recovers it

use crate::helpers::*;
use crate::mock_blueprint::RecordingBlueprint;
use prepline::core::{PipelineError, StepName, StepSelection};
use prepline::execution::Orchestrator;
use prepline::persistence::CheckpointStore;

#[test]
fn test_failed_step_aborts_and_preserves_prior_checkpoints() {
    let (_dir, mut orchestrator) = temp_orchestrator();
    let mut blueprint = RecordingBlueprint::with_selection(StepSelection::only([
        StepName::AutomaticTypeDetectionCasting,
        StepName::DataBinning,
        StepName::ScaleData,
    ]))
    .failing_at("data_binning");

    let err = orchestrator.run(&mut blueprint, None).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Step {
            step: StepName::DataBinning,
            ..
        }
    ));

    // The failing step never completed; the step after it never ran.
    assert!(!blueprint.completion.is_complete(StepName::DataBinning));
    assert_eq!(blueprint.count("data_scaling"), 0);
    assert!(!orchestrator.store().exists("data_binning"));

    assert_eq!(
        orchestrator.last_checkpoint(),
        Some("automatic_type_detection_casting")
    );
}

#[test]
fn test_recovered_state_finishes_the_run() {
    let (dir, mut orchestrator) = temp_orchestrator();
    let mut blueprint = RecordingBlueprint::with_selection(StepSelection::only([
        StepName::AutomaticTypeDetectionCasting,
        StepName::DataBinning,
        StepName::ScaleData,
    ]))
    .failing_at("data_binning");

    orchestrator.run(&mut blueprint, None).unwrap_err();

    // Load the last good state, clear the injected failure, run to the end.
    let mut recovered: RecordingBlueprint = orchestrator.resume(None).unwrap();
    recovered.fail_at = None;

    let mut second = Orchestrator::new(CheckpointStore::new(dir.path()));
    second.run(&mut recovered, None).unwrap();

    // The completed first step was not re-invoked; the rest ran once each.
    assert_eq!(recovered.count("automatic_type_detection_casting"), 1);
    assert_eq!(recovered.count("data_binning"), 1);
    assert_eq!(recovered.count("data_scaling"), 1);
    assert_eq!(second.last_checkpoint(), Some("scale_data"));
    assert!(second.store().exists("data_binning"));
    assert!(second.store().exists("scale_data"));
}
