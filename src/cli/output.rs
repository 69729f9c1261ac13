//! CLI output formatting

use crate::core::{PipelineStatus, RunReport, StepStatus};
use console::Emoji;

// Re-export style
pub use console::style;

// Emojis for output
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "✓ ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "✗ ");
pub static SKIP: Emoji<'_, '_> = Emoji("⏭️  ", "- ");
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "i ");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "! ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", "> ");

/// Format one per-step status line
///
/// The verbose toggle only changes density: skip reasons and error detail
/// are appended when it is set, the status itself renders either way.
pub fn format_step_line(title: &str, status: &StepStatus, verbose: bool) -> String {
    match status {
        StepStatus::Pending => format!("{} {}", INFO, style(title).dim()),
        StepStatus::Running { .. } => format!("{} {}", ROCKET, style(title).cyan()),
        StepStatus::Succeeded { .. } => format!("{} {}", CHECK, style(title).green()),
        StepStatus::Skipped { reason } => {
            if verbose {
                format!(
                    "{} {} ({})",
                    SKIP,
                    style(title).dim(),
                    style(reason).dim()
                )
            } else {
                format!("{} {} {}", SKIP, style(title).dim(), style("[skipped]").dim())
            }
        }
        StepStatus::Failed { error } => {
            format!("{} {}: {}", CROSS, style(title).red(), style(error).dim())
        }
    }
}

/// Format a pipeline status for display
pub fn format_status(status: PipelineStatus) -> String {
    match status {
        PipelineStatus::Idle => style("IDLE").dim().to_string(),
        PipelineStatus::Running => style("RUNNING").yellow().to_string(),
        PipelineStatus::Completed => style("COMPLETED").green().to_string(),
        PipelineStatus::Aborted => style("ABORTED").red().to_string(),
    }
}

/// Print the full run report as pretty JSON (verbose mode)
pub fn print_report(report: &RunReport) -> anyhow::Result<()> {
    println!("\n{}", style("Run report:").bold());
    println!("  ID: {}", style(report.run_id).cyan());
    println!("  Status: {}", format_status(report.status));
    println!(
        "  Progress: {} ({}/{})",
        style(format!("{:.0}%", report.progress() * 100.0)).cyan(),
        report.settled_steps(),
        report.records.len()
    );

    let json = serde_json::to_string_pretty(report)?;
    for line in json.lines() {
        println!("    {}", line);
    }

    Ok(())
}

/// Print the informational epilogue after a setup command finishes
pub fn print_epilogue(command: &str, description: &str, topic_id: &str) {
    println!();
    println!(
        "{} {}: {}",
        INFO,
        style(command).bold(),
        description
    );
    println!(
        "  {}",
        style(format!(
            "This is an experimental feature. Follow along at topic {}.",
            topic_id
        ))
        .dim()
    );
}
