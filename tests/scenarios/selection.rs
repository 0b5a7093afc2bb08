//! Test: user selection drives which steps run and checkpoint

use crate::helpers::*;
use crate::mock_blueprint::RecordingBlueprint;
use prepline::core::{StepName, StepSelection};

/// The two-step selection scenario: exactly those steps complete, exactly
/// two checkpoint files exist, and the last checkpoint is the second step.
#[test]
fn test_two_step_selection() {
    let (dir, mut orchestrator) = temp_orchestrator();
    let mut blueprint = RecordingBlueprint::with_selection(StepSelection::only([
        StepName::AutomaticTypeDetectionCasting,
        StepName::FillNullsStatic,
    ]));

    orchestrator.run(&mut blueprint, None).unwrap();

    assert_eq!(
        blueprint.completion.completed_steps(),
        vec![
            StepName::AutomaticTypeDetectionCasting,
            StepName::FillNullsStatic,
        ]
    );
    assert_eq!(
        checkpoint_files(dir.path()),
        vec![
            "blueprint_checkpoint_automatic_type_detection_casting".to_string(),
            "blueprint_checkpoint_fill_nulls_static".to_string(),
        ]
    );
    assert_eq!(orchestrator.last_checkpoint(), Some("fill_nulls_static"));
}

/// Resume with no explicit step loads the checkpoint of the last executed
/// step.
#[test]
fn test_resume_defaults_to_last_checkpoint() {
    let (_dir, mut orchestrator) = temp_orchestrator();
    let mut blueprint = RecordingBlueprint::with_selection(StepSelection::only([
        StepName::AutomaticTypeDetectionCasting,
        StepName::FillNullsStatic,
    ]));

    orchestrator.run(&mut blueprint, None).unwrap();

    let loaded: RecordingBlueprint = orchestrator.resume(None).unwrap();
    assert!(loaded
        .completion
        .is_complete(StepName::AutomaticTypeDetectionCasting));
    assert!(loaded.completion.is_complete(StepName::FillNullsStatic));
    assert_eq!(loaded, blueprint);
}

/// Disabled steps are never invoked, never flagged, never checkpointed.
#[test]
fn test_disabled_steps_leave_no_trace() {
    let (_dir, mut orchestrator) = temp_orchestrator();
    let mut blueprint =
        RecordingBlueprint::with_selection(StepSelection::only([StepName::DataBinning]));

    orchestrator.run(&mut blueprint, None).unwrap();

    assert_eq!(blueprint.count("smote_binary_multiclass"), 0);
    assert!(!blueprint.completion.is_complete(StepName::Smote));
    assert!(!orchestrator.store().exists("smote"));
    assert_eq!(blueprint.completion.completed_count(), 1);
}
