//! CLI command definitions

use clap::Args;

/// Print the step catalog
#[derive(Debug, Args, Clone)]
pub struct StepsCommand {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// List checkpoints in a directory
#[derive(Debug, Args, Clone)]
pub struct ListCommand {
    /// Checkpoint directory
    #[arg(short, long, default_value = ".")]
    pub path: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Show one checkpoint's envelope
#[derive(Debug, Args, Clone)]
pub struct ShowCommand {
    /// Step whose checkpoint to show
    pub step: String,

    /// Checkpoint directory
    #[arg(short, long, default_value = ".")]
    pub path: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Dump the full state payload
    #[arg(long)]
    pub full: bool,
}

/// Validate a selection configuration file
#[derive(Debug, Args, Clone)]
pub struct ValidateCommand {
    /// Path to selection YAML file
    #[arg(short, long)]
    pub file: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}
