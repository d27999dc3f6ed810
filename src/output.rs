//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.
//!
//! ## Convert
//!
//! ```text
//! data_input/prayers.json
//!     молитвы/utrennyaya/ru.md
//!     молитвы/utrennyaya/uk.md
//!     skipped: record has no id
//! data_input/broken.json
//!     error: JSON error: EOF while parsing an object at line 1 column 9
//!
//! Converted 2 files: 2 documents, 1 skipped record, 1 failed file
//! ```
//!
//! ## Check
//!
//! ```text
//! data_input/genesis.json (2 documents)
//!     библия/old/genesis/chapter-01/ru.md
//!     библия/old/genesis/chapter-01/uk.md
//! ```

use crate::config::Config;
use crate::convert::{ConvertEvent, FileCheck, Outcome, Summary};
use std::path::Path;

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Show `path` relative to `root` when it lies inside it.
fn display_relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// `1 document`, `2 documents`
fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

// ============================================================================
// Convert
// ============================================================================

/// Format a single progress event as display lines.
pub fn format_convert_event(event: &ConvertEvent, config: &Config) -> Vec<String> {
    match event {
        ConvertEvent::FileStarted { path } => vec![path.display().to_string()],
        ConvertEvent::DocumentWritten { path } => vec![format!(
            "{}{}",
            indent(1),
            display_relative(path, &config.output_dir)
        )],
        ConvertEvent::RecordSkipped { reason, .. } => {
            vec![format!("{}skipped: {}", indent(1), reason)]
        }
        ConvertEvent::FileFailed { error, .. } => {
            vec![format!("{}error: {}", indent(1), error)]
        }
    }
}

pub fn format_summary(summary: &Summary) -> String {
    let mut parts = vec![plural(summary.documents, "document")];
    if summary.skipped_records > 0 {
        parts.push(plural(summary.skipped_records, "skipped record"));
    }
    if summary.failed_files > 0 {
        parts.push(plural(summary.failed_files, "failed file"));
    }
    format!(
        "Converted {}: {}",
        plural(summary.files, "file"),
        parts.join(", ")
    )
}

/// Closing lines for a run, including the guidance shown when there was
/// nothing to convert.
pub fn format_outcome(outcome: &Outcome) -> Vec<String> {
    match outcome {
        Outcome::InputCreated(dir) => vec![
            format!("Input folder '{}' was not found, created it.", dir.display()),
            format!(
                "Put your JSON files in '{}' and run again.",
                dir.display()
            ),
        ],
        Outcome::InputEmpty(dir) => vec![format!(
            "Input folder '{}' is empty. Add .json files with prayers, psalms or Bible books.",
            dir.display()
        )],
        Outcome::Completed(summary) => vec![String::new(), format_summary(summary)],
    }
}

pub fn print_outcome(outcome: &Outcome) {
    for line in format_outcome(outcome) {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

/// Format the dry-run result: planned output paths per input file.
pub fn format_check_output(checks: &[FileCheck], config: &Config) -> Vec<String> {
    let mut lines = Vec::new();

    if checks.is_empty() {
        lines.push(format!(
            "No .json files in '{}'",
            config.input_dir.display()
        ));
        return lines;
    }

    for check in checks {
        match &check.plan {
            Ok(plan) => {
                lines.push(format!(
                    "{} ({})",
                    check.path.display(),
                    plural(plan.documents.len(), "document")
                ));
                for doc in &plan.documents {
                    lines.push(format!(
                        "{}{}",
                        indent(1),
                        display_relative(&doc.path, &config.output_dir)
                    ));
                }
                for skip in &plan.skipped {
                    lines.push(format!("{}skipped: {}", indent(1), skip));
                }
            }
            Err(e) => {
                lines.push(check.path.display().to_string());
                lines.push(format!("{}error: {}", indent(1), e));
            }
        }
    }
    lines
}

pub fn print_check_output(checks: &[FileCheck], config: &Config) {
    for line in format_check_output(checks, config) {
        println!("{}", line);
    }
}
