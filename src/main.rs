//! frontend-patcher: maintenance fixes for the bnf-frontend sources
//!
//! Each command edits known files by exact text match. Check the result with
//! the frontend build before deploying.

use anyhow::Result;
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod error;
mod patch;

use commands::utils::OutputFormat;

#[derive(Parser)]
#[command(name = "frontend-patcher")]
#[command(about = "Apply known route fixes to the bnf-frontend sources", long_about = None)]
#[command(version)]
struct Cli {
    /// Log edit and write details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fix market intel routes: SEC path, disable CFPB feed, summary and card
    FixRoutes {
        /// Frontend project root (default: $BNF_FRONTEND_DIR or ~/bnf-frontend)
        #[arg(long)]
        frontend_dir: Option<PathBuf>,

        /// Show what would be done without making changes
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Print a JSON report instead of progress lines
        #[arg(long)]
        json: bool,
    },

    /// Fix the FDA endpoint and add recall methods to lib/api-client.ts
    PatchApiClient {
        /// API client file (default: /home/mmendes/bnf-frontend/lib/api-client.ts)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Show what would be done without making changes
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Print a JSON report instead of the success line
        #[arg(long)]
        json: bool,
    },
}

/// Logs go to stderr so stdout stays clean for the report
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::FixRoutes {
            frontend_dir,
            dry_run,
            json,
        } => {
            let format = OutputFormat::from_json_flag(json);
            if dry_run && format.is_text() {
                println!("{}", "(DRY-RUN MODE - no changes will be made)".blue());
            }
            commands::fix_routes::execute(frontend_dir.as_deref(), dry_run, format)?;
        }

        Commands::PatchApiClient {
            file,
            dry_run,
            json,
        } => {
            let format = OutputFormat::from_json_flag(json);
            if dry_run && format.is_text() {
                println!("{}", "(DRY-RUN MODE - no changes will be made)".blue());
            }
            commands::patch_api_client::execute(file.as_deref(), dry_run, format)?;
        }
    }

    Ok(())
}
