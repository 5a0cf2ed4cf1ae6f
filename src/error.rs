//! Domain errors

use std::path::PathBuf;
use thiserror::Error;

/// Failures the patch commands report to the caller
#[derive(Debug, Error)]
pub enum PatchError {
    /// The configured frontend root is not a directory
    #[error("Directory not found: {}", .0.display())]
    FrontendDirNotFound(PathBuf),

    /// A target file that must exist is missing
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_include_path() {
        let err = PatchError::FrontendDirNotFound(PathBuf::from("/tmp/nowhere"));
        assert_eq!(err.to_string(), "Directory not found: /tmp/nowhere");

        let err = PatchError::FileNotFound(PathBuf::from("/tmp/nowhere/a.ts"));
        assert_eq!(err.to_string(), "File not found: /tmp/nowhere/a.ts");
    }
}
