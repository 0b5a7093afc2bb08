//! Command-line interface

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use commands::{ListCommand, ShowCommand, StepsCommand, ValidateCommand};

/// Checkpoint inspection tool for preprocessing pipelines
#[derive(Debug, Parser, Clone)]
#[command(name = "prepline")]
#[command(author = "Prepline Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Checkpointed preprocessing pipelines for tabular ML", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print the step catalog in execution order
    Steps(StepsCommand),

    /// List checkpoints in a directory
    List(ListCommand),

    /// Show one checkpoint's envelope
    Show(ShowCommand),

    /// Validate a selection configuration file
    Validate(ValidateCommand),
}

impl Cli {
    /// Parse CLI arguments from environment
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Parse CLI arguments from a slice
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(itr)
    }
}

use std::ffi::OsString;
