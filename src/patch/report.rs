//! Per-run results, used for the summary table and `--json` output

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use serde::Serialize;
use std::path::PathBuf;

use super::edit::{Edit, EditOutcome};
use super::file::FilePatch;

/// Final state of one target file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    Fixed,
    Unchanged,
    Missing,
}

impl FileStatus {
    pub fn label(&self) -> &'static str {
        match self {
            FileStatus::Fixed => "✓ Fixed",
            FileStatus::Unchanged => "— No changes",
            FileStatus::Missing => "✗ File not found",
        }
    }
}

/// Outcome of a single edit, with its description
#[derive(Debug, Clone, Serialize)]
pub struct EditReport {
    pub description: &'static str,
    /// Text the edit searched for
    #[serde(skip)]
    pub search: &'static str,
    pub outcome: EditOutcome,
}

/// Everything that happened to one target file
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// Human name of the fix, e.g. "Types (CFPB)"
    pub name: String,
    pub path: PathBuf,
    pub status: FileStatus,
    pub edits: Vec<EditReport>,
    pub written: bool,
}

impl FileReport {
    /// Build a report from the result of `patch_file_if_exists`
    pub fn new(
        name: impl Into<String>,
        path: PathBuf,
        edits: &[Edit],
        patch: Option<&FilePatch>,
    ) -> Self {
        let Some(patch) = patch else {
            return Self {
                name: name.into(),
                path,
                status: FileStatus::Missing,
                edits: Vec::new(),
                written: false,
            };
        };

        let status = if patch.changed {
            FileStatus::Fixed
        } else {
            FileStatus::Unchanged
        };

        Self {
            name: name.into(),
            path,
            status,
            edits: edits
                .iter()
                .zip(&patch.outcomes)
                .map(|(edit, outcome)| EditReport {
                    description: edit.description(),
                    search: edit.search_text(),
                    outcome: *outcome,
                })
                .collect(),
            written: patch.written,
        }
    }

    pub fn changed(&self) -> bool {
        self.status == FileStatus::Fixed
    }
}

/// Results of a whole command run
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub dry_run: bool,
    pub files: Vec<FileReport>,
}

impl RunReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            files: Vec::new(),
        }
    }

    pub fn any_changed(&self) -> bool {
        self.files.iter().any(FileReport::changed)
    }

    /// Render the fix name → status table
    pub fn summary_table(&self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL_CONDENSED)
            .set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec![Cell::new("Fix"), Cell::new("Status")]);

        for file in &self.files {
            table.add_row(vec![Cell::new(&file.name), Cell::new(file.status.label())]);
        }

        table
    }
}
