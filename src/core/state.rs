//! Selection and completion state carried by pipeline-state objects

use crate::core::step::{StepName, STEP_ORDER};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// User configuration of which steps are enabled.
///
/// Read-only during a run. Steps missing from the map count as disabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepSelection {
    steps: BTreeMap<StepName, bool>,
}

impl StepSelection {
    /// Every catalog step enabled.
    pub fn all_enabled() -> Self {
        Self {
            steps: STEP_ORDER.iter().map(|step| (*step, true)).collect(),
        }
    }

    /// Every catalog step disabled.
    pub fn none() -> Self {
        Self {
            steps: STEP_ORDER.iter().map(|step| (*step, false)).collect(),
        }
    }

    /// Only the given steps enabled; everything else disabled.
    pub fn only<I: IntoIterator<Item = StepName>>(enabled: I) -> Self {
        let mut selection = Self::none();
        for step in enabled {
            selection.set(step, true);
        }
        selection
    }

    pub fn set(&mut self, step: StepName, enabled: bool) {
        self.steps.insert(step, enabled);
    }

    pub fn is_enabled(&self, step: StepName) -> bool {
        self.steps.get(&step).copied().unwrap_or(false)
    }

    /// Enabled steps in execution order.
    pub fn enabled_steps(&self) -> Vec<StepName> {
        STEP_ORDER
            .iter()
            .copied()
            .filter(|step| self.is_enabled(*step))
            .collect()
    }
}

impl Default for StepSelection {
    fn default() -> Self {
        Self::all_enabled()
    }
}

/// Record of which steps have already executed for a given state.
///
/// Set by the orchestrator immediately after a step succeeds and never
/// cleared within a run; persisting it inside each checkpoint is what makes
/// resumption land on the first incomplete step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionFlags {
    reached: BTreeMap<StepName, bool>,
}

impl CompletionFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_complete(&self, step: StepName) -> bool {
        self.reached.get(&step).copied().unwrap_or(false)
    }

    pub fn mark_complete(&mut self, step: StepName) {
        self.reached.insert(step, true);
    }

    /// Completed steps in execution order.
    pub fn completed_steps(&self) -> Vec<StepName> {
        STEP_ORDER
            .iter()
            .copied()
            .filter(|step| self.is_complete(*step))
            .collect()
    }

    pub fn completed_count(&self) -> usize {
        self.reached.values().filter(|done| **done).count()
    }
}
