//! CLI output formatting

use crate::core::step::StepName;
use crate::core::registry::declared_args;
use crate::persistence::CheckpointSummary;
use console::Emoji;

// Re-export style
pub use console::style;

// Emojis for output
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "✓ ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "✗ ");
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "i ");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "!");

/// Format one row of the step catalog for display.
pub fn format_step_row(step: StepName) -> String {
    let gated = if step.is_nlp_gated() {
        style(" [nlp]").yellow().to_string()
    } else {
        String::new()
    };

    format!(
        "{:>3}. {}{} {}",
        step.position() + 1,
        style(step.as_str()).cyan(),
        gated,
        style(format!("args: {}", declared_args(step))).dim()
    )
}

/// Format a checkpoint listing entry for display.
pub fn format_checkpoint_summary(summary: &CheckpointSummary) -> String {
    format!(
        "{} {} - {} - {} - {}",
        CHECK,
        style(&summary.step).bold(),
        style(&summary.run_id.to_string()[..8]).dim(),
        style(summary.saved_at.to_rfc3339()).dim(),
        style(format_size(summary.size_bytes)).cyan()
    )
}

/// Human-readable byte size.
pub fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KiB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MiB", bytes as f64 / (1024.0 * 1024.0))
    }
}
