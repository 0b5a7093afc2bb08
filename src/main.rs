use anyhow::{Context, Result};
use prepline::cli::commands::{ListCommand, ShowCommand, StepsCommand, ValidateCommand};
use prepline::cli::output::*;
use prepline::cli::{Cli, Command};
use prepline::core::registry::declared_args;
use prepline::core::{SelectionConfig, STEP_ORDER};
use prepline::persistence::CheckpointStore;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = Cli::from_args();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")?;

    // Execute command
    match &cli.command {
        Command::Steps(cmd) => show_steps(cmd)?,
        Command::List(cmd) => list_checkpoints(cmd)?,
        Command::Show(cmd) => show_checkpoint(cmd)?,
        Command::Validate(cmd) => validate_selection(cmd)?,
    }

    Ok(())
}

fn show_steps(cmd: &StepsCommand) -> Result<()> {
    if cmd.json {
        let steps: Vec<_> = STEP_ORDER
            .iter()
            .map(|step| {
                serde_json::json!({
                    "position": step.position() + 1,
                    "name": step.as_str(),
                    "args": declared_args(*step).to_string(),
                    "nlp_gated": step.is_nlp_gated(),
                })
            })
            .collect();
        let data = serde_json::json!({ "steps": steps });
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    println!(
        "{} Step catalog ({} steps, execution order):",
        INFO,
        style(STEP_ORDER.len()).cyan()
    );
    for step in STEP_ORDER {
        println!("  {}", format_step_row(*step));
    }

    Ok(())
}

fn list_checkpoints(cmd: &ListCommand) -> Result<()> {
    let store = CheckpointStore::new(&cmd.path);
    let summaries = store.list().context("Failed to list checkpoints")?;

    if summaries.is_empty() {
        println!("{} No checkpoints found in {}", WARN, style(&cmd.path).dim());
        return Ok(());
    }

    if cmd.json {
        let data = serde_json::json!({ "checkpoints": summaries });
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    println!(
        "{} Checkpoints in {} (oldest first):",
        INFO,
        style(&cmd.path).dim()
    );
    for summary in &summaries {
        println!("  {}", format_checkpoint_summary(summary));
    }

    Ok(())
}

fn show_checkpoint(cmd: &ShowCommand) -> Result<()> {
    let store = CheckpointStore::new(&cmd.path);
    let envelope = store
        .read_envelope(&cmd.step)
        .with_context(|| format!("Failed to read checkpoint for step '{}'", cmd.step))?;

    if cmd.json {
        let data = if cmd.full {
            serde_json::to_value(&envelope)?
        } else {
            serde_json::json!({
                "format_version": envelope.format_version,
                "run_id": envelope.run_id,
                "step": envelope.step,
                "saved_at": envelope.saved_at,
            })
        };
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    println!("{} Checkpoint Details", INFO);
    println!("  Step: {}", style(&envelope.step).bold());
    println!("  Run: {}", style(envelope.run_id).cyan());
    println!(
        "  Saved: {}",
        style(envelope.saved_at.to_rfc3339()).dim()
    );
    println!(
        "  Format version: {}",
        style(envelope.format_version).cyan()
    );

    if cmd.full {
        println!("\n  {}", style("State payload:").bold());
        let json = serde_json::to_string_pretty(&envelope.state)?;
        for line in json.lines() {
            println!("    {}", line);
        }
    }

    Ok(())
}

fn validate_selection(cmd: &ValidateCommand) -> Result<()> {
    println!("{} Validating selection...", INFO);

    let result = SelectionConfig::from_file(&cmd.file);

    match result {
        Ok(config) => {
            println!("{} Selection configuration is valid!", CHECK);
            if let Some(name) = &config.name {
                println!("  Name: {}", style(name).bold());
            }
            println!(
                "  Enabled steps: {} / {}",
                style(config.enabled_count()).cyan(),
                style(STEP_ORDER.len()).cyan()
            );
            if let Some(path) = &config.checkpoint_path {
                println!("  Checkpoint path: {}", style(path).dim());
            }

            if cmd.json {
                let json = serde_json::to_string_pretty(&config)?;
                println!("\n{}", json);
            }
            Ok(())
        }
        Err(e) => {
            println!("{} Validation failed:", CROSS);
            println!("  {}", style(e).red());
            std::process::exit(1);
        }
    }
}
