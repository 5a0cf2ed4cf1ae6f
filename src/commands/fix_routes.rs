//! Fix-routes command - Correct market intel routes and disable CFPB
//!
//! 1. SEC: `/sec/filings` becomes `/sec-edgar/filings` (the real backend path)
//! 2. CFPB: feed and summary queries are disabled until the backend
//!    registers `/api/v1/cfpb/*`

use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};

use super::utils::{self, OutputFormat};
use crate::config;
use crate::error::PatchError;
use crate::patch::{self, Edit, FileReport, Replacement, RunReport, WritePolicy};

/// One target file and the edits applied to it
#[derive(Debug)]
pub struct Fix {
    /// Name shown in the summary table
    pub name: &'static str,
    /// Path relative to the frontend root
    pub file: &'static str,
    pub edits: &'static [Edit],
}

const SEC_PATH: Replacement = Replacement {
    old: r#""/sec/filings""#,
    new: r#""/sec-edgar/filings""#,
    description: "SEC: /sec/filings → /sec-edgar/filings",
};

const CFPB_FEED_QUERY: Replacement = Replacement {
    old: r#"    {
      key: "cfpb",
      queryFn: () => apiClient.get("/cfpb/complaints", { per_page: 10 }),
      extractKey: ["complaints"],
      mapper: mapCFPBComplaint,
    },"#,
    new: r#"    // CFPB disabled — no backend routes yet (re-enable when /api/v1/cfpb/* is deployed)
    // {
    //   key: "cfpb",
    //   queryFn: () => apiClient.get("/cfpb/complaints", { per_page: 10 }),
    //   extractKey: ["complaints"],
    //   mapper: mapCFPBComplaint,
    // },"#,
    description: "CFPB: Disabled feed query (no backend routes)",
};

const CFPB_SUMMARY_QUERY: Replacement = Replacement {
    old: r#"  const cfpb = useQuery({
    queryKey: ["market-intel", "summary", "cfpb"],
    queryFn: () => apiClient.get("/cfpb/summary") as Promise<any>,
    staleTime: 5 * 60 * 1000,
    retry: 1,
  })"#,
    new: r#"  // CFPB summary disabled — no backend routes yet
  const cfpb = {
    data: null,
    isLoading: false,
  } as { data: any; isLoading: boolean }"#,
    description: "CFPB: Disabled summary query (stub returns null)",
};

const CFPB_ACTIVE_SOURCE: Replacement = Replacement {
    old: r#"  { key: "cfpb", label: "CFPB", type: "regulatory", active: true },"#,
    new: r#"  // { key: "cfpb", label: "CFPB", type: "regulatory", active: true },  // Disabled — no backend routes yet"#,
    description: "CFPB removed from ACTIVE_SOURCES",
};

const CFPB_SUMMARY_CARD: Replacement = Replacement {
    old: r#"    {
      label: "CFPB",
      icon: Shield,
      color: "text-blue-500",
      stat: summaries.cfpb?.complaints_last_7_days ?? "—",
      sub: summaries.cfpb?.top_company
        ? `Top: ${summaries.cfpb.top_company}`
        : `${summaries.cfpb?.total_complaints?.toLocaleString() ?? "—"} total`,
    },"#,
    new: r#"    {
      label: "CFPB",
      icon: Shield,
      color: "text-blue-500",
      stat: summaries.cfpb?.complaints_last_7_days ?? "—",
      sub: summaries.cfpb?.top_company
        ? `Top: ${summaries.cfpb.top_company}`
        : summaries.cfpb ? `${summaries.cfpb?.total_complaints?.toLocaleString() ?? "—"} total` : "API coming soon",
    },"#,
    description: "CFPB summary card shows 'API coming soon' when no data",
};

/// The fixes, in the order they run
pub const FIXES: [Fix; 3] = [
    Fix {
        name: "Hooks (SEC + CFPB)",
        file: config::HOOKS_FILE,
        edits: &[
            Edit::Replace(SEC_PATH),
            Edit::Replace(CFPB_FEED_QUERY),
            Edit::Replace(CFPB_SUMMARY_QUERY),
        ],
    },
    Fix {
        name: "Types (CFPB)",
        file: config::TYPES_FILE,
        edits: &[Edit::Replace(CFPB_ACTIVE_SOURCE)],
    },
    Fix {
        name: "Component (CFPB card)",
        file: config::COMPONENT_FILE,
        edits: &[Edit::Replace(CFPB_SUMMARY_CARD)],
    },
];

/// Backend defects these fixes work around
const PENDING_BACKEND_ISSUES: [&str; 2] = [
    "CFPB: Need to register /api/v1/cfpb/* routes in FastAPI",
    "NHTSA: Fix 'NHTSAComplaint.first_seen_at' in summary endpoint",
];

const NEXT_STEP: &str = "npm run build && pm2 restart all";

/// Execute the fix-routes command
pub fn execute(frontend_dir: Option<&Path>, dry_run: bool, format: OutputFormat) -> Result<()> {
    let frontend_dir = config::frontend_dir(frontend_dir)?;
    let report = run(&frontend_dir, dry_run, format)?;

    if format.is_text() {
        print_summary(&report);
    } else {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}

/// Apply every fix under `frontend_dir`
///
/// A missing target file is reported and skipped. A missing `frontend_dir`
/// is an error.
pub fn run(frontend_dir: &Path, dry_run: bool, format: OutputFormat) -> Result<RunReport> {
    if format.is_text() {
        utils::print_banner("Market Intel Route Fixes");
        println!("Frontend dir: {}", frontend_dir.display());
    }

    if !frontend_dir.is_dir() {
        return Err(PatchError::FrontendDirNotFound(frontend_dir.to_path_buf()).into());
    }

    let mut report = RunReport::new(dry_run);

    for (i, fix) in FIXES.iter().enumerate() {
        if format.is_text() {
            println!("\n[{}/{}] Fixing {}...", i + 1, FIXES.len(), fix.file);
        }

        let file_report = apply_fix(frontend_dir, fix, dry_run)?;

        if format.is_text() {
            utils::print_file_report(&file_report, dry_run);
        }
        report.files.push(file_report);
    }

    Ok(report)
}

/// Apply one fix, treating a missing file as unfixed
fn apply_fix(frontend_dir: &Path, fix: &Fix, dry_run: bool) -> Result<FileReport> {
    let path: PathBuf = frontend_dir.join(fix.file);
    tracing::debug!(fix = fix.name, path = %path.display(), "applying fix");

    let patch = patch::patch_file_if_exists(&path, fix.edits, WritePolicy::IfChanged, dry_run)?;
    Ok(FileReport::new(fix.name, path, fix.edits, patch.as_ref()))
}

fn print_summary(report: &RunReport) {
    println!();
    utils::print_banner("Summary");
    println!("{}", report.summary_table());

    if report.any_changed() {
        if report.dry_run {
            println!(
                "\n{}",
                "(DRY-RUN) No changes made. Run without --dry-run to apply.".blue()
            );
        } else {
            println!("\n→ Next: Run '{}'", NEXT_STEP.cyan());
        }
    } else {
        println!("\n→ No changes applied.");
    }

    println!("\n{} Backend issues still pending:", "⚠".yellow());
    for (i, issue) in PENDING_BACKEND_ISSUES.iter().enumerate() {
        println!("  {}. {}", i + 1, issue);
    }
}
