//! Literal substring patching of source files

pub mod edit;
pub mod file;
pub mod report;

// Re-exports for library consumers
#[allow(unused_imports)]
pub use edit::{apply_edits, Edit, EditOutcome, Replacement};
#[allow(unused_imports)]
pub use file::{patch_file, patch_file_if_exists, FilePatch, WritePolicy};
#[allow(unused_imports)]
pub use report::{FileReport, FileStatus, RunReport};
