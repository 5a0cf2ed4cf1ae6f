//! Read-edit-write of a single target file

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::edit::{apply_edits, Edit, EditOutcome};
use crate::error::PatchError;

/// When to write the edited content back to disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritePolicy {
    /// Only when the content differs from what was read
    IfChanged,
    /// Every time, even if nothing matched
    Always,
}

/// Result of patching one file
#[derive(Debug)]
pub struct FilePatch {
    /// One outcome per edit, in edit order
    pub outcomes: Vec<EditOutcome>,
    /// Content differs from what was read
    pub changed: bool,
    /// Content was written back to disk
    pub written: bool,
}

/// Patch an existing file
///
/// Reads the whole file, applies `edits` in order, and writes back according
/// to `policy`. The write is a plain overwrite. With `dry_run`, nothing is
/// written.
pub fn patch_file(
    path: &Path,
    edits: &[Edit],
    policy: WritePolicy,
    dry_run: bool,
) -> Result<FilePatch> {
    if !path.exists() {
        return Err(PatchError::FileNotFound(path.to_path_buf()).into());
    }

    let original = fs::read_to_string(path)
        .with_context(|| format!("Failed to read: {}", path.display()))?;

    let (content, outcomes) = apply_edits(&original, edits);
    let changed = content != original;

    let should_write = match policy {
        WritePolicy::IfChanged => changed,
        WritePolicy::Always => true,
    };

    let written = should_write && !dry_run;
    if written {
        fs::write(path, &content)
            .with_context(|| format!("Failed to write: {}", path.display()))?;
        tracing::info!(path = %path.display(), changed, "wrote file");
    }

    Ok(FilePatch {
        outcomes,
        changed,
        written,
    })
}

/// Patch a file that may not exist
///
/// Returns `Ok(None)` for a missing file so callers can report it and move on.
pub fn patch_file_if_exists(
    path: &Path,
    edits: &[Edit],
    policy: WritePolicy,
    dry_run: bool,
) -> Result<Option<FilePatch>> {
    if !path.is_file() {
        tracing::debug!(path = %path.display(), "target file missing");
        return Ok(None);
    }

    patch_file(path, edits, policy, dry_run).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch::Replacement;
    use std::time::{Duration, SystemTime};

    const FIX: Replacement = Replacement {
        old: "/fda/enforcements",
        new: "/fda/recalls",
        description: "FDA path",
    };

    fn edits() -> Vec<Edit> {
        vec![FIX.into()]
    }

    #[test]
    fn test_patch_file_writes_when_changed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("client.ts");
        fs::write(&path, "get(\"/fda/enforcements\")").unwrap();

        let patch = patch_file(&path, &edits(), WritePolicy::IfChanged, false).unwrap();

        assert!(patch.changed);
        assert!(patch.written);
        assert_eq!(patch.outcomes, vec![EditOutcome::Applied]);
        assert_eq!(fs::read_to_string(&path).unwrap(), "get(\"/fda/recalls\")");
    }

    #[test]
    fn test_patch_file_if_changed_skips_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("client.ts");
        fs::write(&path, "already fine").unwrap();

        // Backdate so a write would be visible as a newer mtime
        let past = SystemTime::now() - Duration::from_secs(3600);
        fs::File::options()
            .write(true)
            .open(&path)
            .unwrap()
            .set_modified(past)
            .unwrap();

        let patch = patch_file(&path, &edits(), WritePolicy::IfChanged, false).unwrap();

        assert!(!patch.changed);
        assert!(!patch.written);
        let modified = fs::metadata(&path).unwrap().modified().unwrap();
        assert!(modified < SystemTime::now() - Duration::from_secs(1800));
    }

    #[test]
    fn test_patch_file_always_writes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("client.ts");
        fs::write(&path, "already fine").unwrap();

        let patch = patch_file(&path, &edits(), WritePolicy::Always, false).unwrap();

        assert!(!patch.changed);
        assert!(patch.written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "already fine");
    }

    #[test]
    fn test_patch_file_dry_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("client.ts");
        fs::write(&path, "/fda/enforcements").unwrap();

        let patch = patch_file(&path, &edits(), WritePolicy::Always, true).unwrap();

        assert!(patch.changed);
        assert!(!patch.written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "/fda/enforcements");
    }

    #[test]
    fn test_patch_file_missing_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.ts");

        let err = patch_file(&path, &edits(), WritePolicy::Always, false).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PatchError>(),
            Some(PatchError::FileNotFound(_))
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_patch_file_if_exists_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.ts");

        let patch = patch_file_if_exists(&path, &edits(), WritePolicy::IfChanged, false).unwrap();
        assert!(patch.is_none());
        assert!(!path.exists());
    }
}
