//! Patch-api-client command - Fix FDA endpoints in `lib/api-client.ts`
//!
//! 1. `/fda/enforcements` becomes `/fda/recalls`, matching the OpenAPI spec
//! 2. `getFDARecalls` alias and `getFDADeviceRecalls` are added before
//!    `getFDASummary`, unless the device recalls method already exists

use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;

use super::utils::{self, OutputFormat};
use crate::config;
use crate::patch::{self, Edit, FileReport, Replacement, RunReport, WritePolicy};

const FDA_ENDPOINT: Replacement = Replacement {
    old: r#"return this.get("/fda/enforcements", params)"#,
    new: r#"return this.get("/fda/recalls", params)"#,
    description: "FDA: /fda/enforcements → /fda/recalls",
};

/// Presence of this name means the methods were already added
const DEVICE_RECALLS_MARKER: &str = "getFDADeviceRecalls";

const FDA_SUMMARY_METHOD: &str = r#"  async getFDASummary() {
    return this.get("/fda/summary")
  }"#;

const FDA_RECALL_METHODS: &str = r#"  async getFDARecalls(params?: Record<string, any>) {
    return this.get("/fda/recalls", params)
  }

  async getFDADeviceRecalls(params?: Record<string, any>) {
    return this.get("/fda/device-recalls", params)
  }

"#;

/// Edits applied to the API client, in order
pub const EDITS: [Edit; 2] = [
    Edit::Replace(FDA_ENDPOINT),
    Edit::InsertBefore {
        anchor: FDA_SUMMARY_METHOD,
        text: FDA_RECALL_METHODS,
        marker: DEVICE_RECALLS_MARKER,
        description: "FDA: Added getFDARecalls and getFDADeviceRecalls",
    },
];

/// Execute the patch-api-client command
///
/// Unlike fix-routes, a missing file is fatal and the file is always written
/// back.
pub fn execute(file: Option<&Path>, dry_run: bool, format: OutputFormat) -> Result<()> {
    let path = config::api_client_path(file);
    let report = run(&path, dry_run)?;

    match format {
        OutputFormat::Text => {
            if dry_run {
                for file in &report.files {
                    utils::print_file_report(file, dry_run);
                }
                println!("\n{}", "(DRY-RUN) No changes made.".blue());
            } else {
                println!(
                    "✅ api-client.ts patched — FDA endpoint fixed, device recalls method added"
                );
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

/// Patch the API client at `path`
pub fn run(path: &Path, dry_run: bool) -> Result<RunReport> {
    tracing::debug!(path = %path.display(), "patching api client");

    let patch = patch::patch_file(path, &EDITS, WritePolicy::Always, dry_run)?;

    let mut report = RunReport::new(dry_run);
    report.files.push(FileReport::new(
        "API client (FDA)",
        path.to_path_buf(),
        &EDITS,
        Some(&patch),
    ));
    Ok(report)
}
