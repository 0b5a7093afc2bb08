//! Selection configuration from YAML

use crate::core::state::StepSelection;
use crate::core::step::StepName;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Step selection loaded from a YAML file.
///
/// Unknown step keys are rejected during deserialization. The `steps` map
/// holds per-step overrides applied on top of `default_enabled`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Optional human-readable name for this selection
    #[serde(default)]
    pub name: Option<String>,

    /// Directory for checkpoint files (overrides the process-relative default)
    #[serde(default)]
    pub checkpoint_path: Option<String>,

    /// Whether steps not mentioned under `steps` are enabled
    #[serde(default = "default_enabled")]
    pub default_enabled: bool,

    /// Per-step overrides
    #[serde(default)]
    pub steps: BTreeMap<StepName, bool>,
}

fn default_enabled() -> bool {
    true
}

impl SelectionConfig {
    /// Load a selection configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a selection configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: SelectionConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        let selection = self.to_selection();
        if selection.enabled_steps().is_empty() {
            anyhow::bail!("selection enables no steps");
        }
        Ok(())
    }

    /// Resolve into a concrete step selection.
    pub fn to_selection(&self) -> StepSelection {
        let mut selection = if self.default_enabled {
            StepSelection::all_enabled()
        } else {
            StepSelection::none()
        };
        for (step, enabled) in &self.steps {
            selection.set(*step, *enabled);
        }
        selection
    }

    /// Number of enabled steps after resolving overrides.
    pub fn enabled_count(&self) -> usize {
        self.to_selection().enabled_steps().len()
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            name: None,
            checkpoint_path: None,
            default_enabled: true,
            steps: BTreeMap::new(),
        }
    }
}
