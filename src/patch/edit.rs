//! Literal text edits
//!
//! Every match is an exact substring match. Edits run in order, each one
//! against the output of the previous edit.

use serde::Serialize;

/// A literal (search, replacement) pair with replace-all semantics
#[derive(Debug, Clone, Copy)]
pub struct Replacement {
    pub old: &'static str,
    pub new: &'static str,
    /// Shown in the report when the replacement is applied
    pub description: &'static str,
}

/// A single step applied to file content
#[derive(Debug, Clone, Copy)]
pub enum Edit {
    /// Replace every occurrence of `old` with `new`
    Replace(Replacement),

    /// Insert `text` right before `anchor`, unless `marker` already occurs
    /// anywhere in the content
    InsertBefore {
        anchor: &'static str,
        text: &'static str,
        marker: &'static str,
        description: &'static str,
    },
}

/// What happened to one edit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EditOutcome {
    Applied,
    /// Search text or anchor missing (already fixed, or content differs)
    NotFound,
    /// Marker present, insertion skipped
    AlreadyPresent,
}

impl Edit {
    pub fn description(&self) -> &'static str {
        match self {
            Edit::Replace(r) => r.description,
            Edit::InsertBefore { description, .. } => *description,
        }
    }

    /// The text this edit searches for
    pub fn search_text(&self) -> &'static str {
        match self {
            Edit::Replace(r) => r.old,
            Edit::InsertBefore { anchor, .. } => *anchor,
        }
    }

    /// Apply this edit to `content`, returning the new content if it matched
    pub fn apply(&self, content: &str) -> (Option<String>, EditOutcome) {
        match self {
            Edit::Replace(r) => {
                if content.contains(r.old) {
                    (Some(content.replace(r.old, r.new)), EditOutcome::Applied)
                } else {
                    (None, EditOutcome::NotFound)
                }
            }
            Edit::InsertBefore {
                anchor,
                text,
                marker,
                ..
            } => {
                if content.contains(marker) {
                    return (None, EditOutcome::AlreadyPresent);
                }
                if !content.contains(anchor) {
                    return (None, EditOutcome::NotFound);
                }
                let replacement = format!("{}{}", text, anchor);
                (
                    Some(content.replace(anchor, &replacement)),
                    EditOutcome::Applied,
                )
            }
        }
    }
}

impl From<Replacement> for Edit {
    fn from(r: Replacement) -> Self {
        Edit::Replace(r)
    }
}

/// Apply `edits` in order and collect one outcome per edit
pub fn apply_edits(content: &str, edits: &[Edit]) -> (String, Vec<EditOutcome>) {
    let mut current = content.to_string();
    let mut outcomes = Vec::with_capacity(edits.len());

    for edit in edits {
        let (updated, outcome) = edit.apply(&current);
        tracing::debug!(edit = edit.description(), ?outcome, "applied edit");
        if let Some(updated) = updated {
            current = updated;
        }
        outcomes.push(outcome);
    }

    (current, outcomes)
}
