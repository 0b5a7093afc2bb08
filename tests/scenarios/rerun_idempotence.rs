//! Test: re-running over completed state is a no-op per completed step

use crate::helpers::*;
use crate::mock_blueprint::RecordingBlueprint;
use prepline::core::{StepName, StepSelection};
use prepline::persistence::checkpoint_file_name;
use std::fs;

#[test]
fn test_rerun_does_not_reinvoke_completed_steps() {
    let (dir, mut orchestrator) = temp_orchestrator();
    let mut blueprint = RecordingBlueprint::with_selection(StepSelection::only([
        StepName::DataBinning,
        StepName::ScaleData,
    ]));

    orchestrator.run(&mut blueprint, None).unwrap();
    assert_eq!(blueprint.count("data_binning"), 1);
    assert_eq!(blueprint.count("data_scaling"), 1);

    // Plant a sentinel in the existing checkpoint; a re-run must not touch it.
    let path = dir.path().join(checkpoint_file_name("data_binning"));
    fs::write(&path, b"sentinel").unwrap();

    orchestrator.run(&mut blueprint, None).unwrap();

    assert_eq!(blueprint.count("data_binning"), 1);
    assert_eq!(blueprint.count("data_scaling"), 1);
    assert_eq!(fs::read(&path).unwrap(), b"sentinel");
}

#[test]
fn test_rerun_executes_newly_enabled_steps_only() {
    let (_dir, mut orchestrator) = temp_orchestrator();
    let mut blueprint =
        RecordingBlueprint::with_selection(StepSelection::only([StepName::DataBinning]));

    orchestrator.run(&mut blueprint, None).unwrap();
    assert_eq!(blueprint.completion.completed_count(), 1);

    // Enable one more step and re-run: only the new step executes.
    blueprint.selection.set(StepName::ScaleData, true);
    orchestrator.run(&mut blueprint, None).unwrap();

    assert_eq!(blueprint.count("data_binning"), 1);
    assert_eq!(blueprint.count("data_scaling"), 1);
    assert_eq!(orchestrator.last_checkpoint(), Some("scale_data"));
}
