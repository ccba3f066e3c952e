//! Text layout for the sync report.

use docsync_core::config::{RepositoryConfig, SyncEntry};
use docsync_core::sync::{EntryOutcome, SyncReport};

use crate::style;

const RULE_WIDTH: usize = 50;

pub fn banner(repository: &RepositoryConfig) -> Vec<String> {
    vec![
        style::header("GitHub Template Synchronization Tool"),
        format!("Repository: {}", repository.slug()),
        "-".repeat(RULE_WIDTH),
    ]
}

pub fn processing(entry: &SyncEntry) -> String {
    format!("\nProcessing: {}", entry.source_path)
}

/// Indented `✓` / `✗` line for a finished entry.
pub fn outcome(outcome: &EntryOutcome) -> String {
    match (&outcome.result, outcome.failed_stage()) {
        (Ok(message), _) => format!("  {}", style::success(message)),
        (Err(e), Some(stage)) => {
            format!("  {}", style::error(&format!("{} failed: {}", stage, e)))
        }
        (Err(e), None) => format!("  {}", style::error(&e.to_string())),
    }
}

pub fn summary(report: &SyncReport) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        "=".repeat(RULE_WIDTH),
        report.summary_line(),
    ];

    if report.is_success() {
        lines.push(String::new());
        lines.push("All files updated successfully!".to_string());
        return lines;
    }

    lines.push(String::new());
    lines.push("Failed files:".to_string());
    for failed in report.failures() {
        if let Err(e) = &failed.result {
            lines.push(format!("  - {}: {}", failed.entry.dest_path, e));
        }
    }
    lines.push(String::new());
    lines.push(style::dim(
        "Some files failed to update. Please check the errors above.",
    ));
    lines
}
