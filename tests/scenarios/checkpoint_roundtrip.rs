//! Test: checkpoints reproduce the full pipeline state

use crate::helpers::*;
use crate::mock_blueprint::RecordingBlueprint;
use prepline::core::{StepName, StepSelection};
use prepline::persistence::CheckpointError;

#[test]
fn test_roundtrip_reproduces_state() {
    let (_dir, mut orchestrator) = temp_orchestrator();
    let mut blueprint = RecordingBlueprint::with_selection(StepSelection::only([
        StepName::AutomaticTypeDetectionCasting,
        StepName::DataBinning,
        StepName::OutlierCare,
    ]));

    orchestrator.run(&mut blueprint, None).unwrap();

    let loaded: RecordingBlueprint = orchestrator.resume(None).unwrap();
    assert_eq!(loaded, blueprint);
}

/// A checkpoint taken after step K carries completion flags for steps 1..K
/// and nothing beyond.
#[test]
fn test_intermediate_checkpoint_has_prior_flags_only() {
    let (_dir, mut orchestrator) = temp_orchestrator();
    let mut blueprint = RecordingBlueprint::with_selection(StepSelection::only([
        StepName::AutomaticTypeDetectionCasting,
        StepName::DataBinning,
        StepName::ScaleData,
    ]));

    orchestrator.run(&mut blueprint, None).unwrap();

    let at_binning: RecordingBlueprint = orchestrator.resume(Some("data_binning")).unwrap();
    assert!(at_binning
        .completion
        .is_complete(StepName::AutomaticTypeDetectionCasting));
    assert!(at_binning.completion.is_complete(StepName::DataBinning));
    assert!(!at_binning.completion.is_complete(StepName::ScaleData));

    // Call history at that point stops after data_binning.
    assert_eq!(
        at_binning.calls,
        vec![
            "automatic_type_detection_casting()".to_string(),
            "data_binning()".to_string(),
        ]
    );
}

/// Skipped steps have no checkpoint; asking for one fails instead of
/// returning stale state.
#[test]
fn test_resume_of_skipped_step_fails() {
    let (_dir, mut orchestrator) = temp_orchestrator();
    let mut blueprint =
        RecordingBlueprint::with_selection(StepSelection::only([StepName::DataBinning]));

    orchestrator.run(&mut blueprint, None).unwrap();

    let err = orchestrator
        .resume::<RecordingBlueprint>(Some("smote"))
        .unwrap_err();
    assert!(matches!(err, CheckpointError::NotFound { step } if step == "smote"));
}

/// Envelopes carry the run id that produced them.
#[test]
fn test_envelope_carries_run_id() {
    let (_dir, mut orchestrator) = temp_orchestrator();
    let mut blueprint =
        RecordingBlueprint::with_selection(StepSelection::only([StepName::DataBinning]));

    orchestrator.run(&mut blueprint, None).unwrap();

    let envelope = orchestrator.store().read_envelope("data_binning").unwrap();
    assert_eq!(envelope.run_id, orchestrator.run_id());
    assert_eq!(envelope.step, "data_binning");
}
