//! Shared console output for commands

use owo_colors::OwoColorize;

use crate::patch::{EditOutcome, FileReport, FileStatus};

/// Width of the banner rules
const RULE_WIDTH: usize = 60;

/// Number of characters of a search text shown when it is not found
const PREVIEW_CHARS: usize = 60;

/// How a command reports its results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Progress lines and summary on stdout
    Text,
    /// A single JSON report on stdout, nothing else
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }

    pub fn is_text(&self) -> bool {
        *self == OutputFormat::Text
    }
}

/// First `max_chars` characters of `text`, never splitting a character
pub fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Print a `====` framed heading
pub fn print_banner(title: &str) {
    let rule = "=".repeat(RULE_WIDTH);
    println!("{}", rule);
    println!("{}", title.bold());
    println!("{}", rule);
}

/// Print the per-edit lines and the final save line for one file
pub fn print_file_report(report: &FileReport, dry_run: bool) {
    if report.status == FileStatus::Missing {
        println!(
            "  {} File not found: {}",
            "✗".red(),
            report.path.display()
        );
        return;
    }

    for edit in &report.edits {
        match edit.outcome {
            EditOutcome::Applied => {
                println!("  {} {}", "✓".green(), edit.description);
            }
            EditOutcome::NotFound => {
                println!(
                    "  {} Not found (may already be fixed): {}...",
                    "⚠".yellow(),
                    preview(edit.search, PREVIEW_CHARS).dimmed()
                );
            }
            EditOutcome::AlreadyPresent => {
                println!(
                    "  {} Already present: {}",
                    "—".dimmed(),
                    edit.description
                );
            }
        }
    }

    let applied = report
        .edits
        .iter()
        .filter(|e| e.outcome == EditOutcome::Applied)
        .count();

    match report.status {
        FileStatus::Fixed if dry_run => println!(
            "  {} Would save ({} changes)",
            "[DRY-RUN]".blue(),
            applied
        ),
        FileStatus::Fixed => println!("  {} Saved ({} changes)", "✓".green(), applied),
        _ => println!("  {} No changes needed", "—".dimmed()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_truncates() {
        let text = "x".repeat(80);
        assert_eq!(preview(&text, 60).len(), 60);
    }

    #[test]
    fn test_preview_short_text_unchanged() {
        assert_eq!(preview("short", 60), "short");
    }

    #[test]
    fn test_preview_respects_char_boundaries() {
        // "—" is three bytes; slicing by bytes would panic
        let text = "——————";
        assert_eq!(preview(text, 2), "——");
    }
}
