//! Main workflow orchestration logic
//!
//! Keeps the changelog workflow out of main.rs so it can be called
//! programmatically without depending on clap.

use anyhow::Result;
use std::path::Path;
use tracing::{info, instrument};

use crate::boundary::BoundaryWarning;
use crate::changelog;
use crate::config::{self, Config};
use crate::git::Git2Repository;
use crate::render::OutputFormat;

/// Arguments for the changelog workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChangelogWorkflowArgs {
    /// Path to custom config file
    pub config_path: Option<String>,

    /// Tag to mark as the current release
    pub current: Option<String>,

    /// Output format
    pub format: OutputFormat,
}

/// Result of a successful changelog workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// The rendered document
    pub document: String,

    /// Non-fatal issues to show the user
    pub warnings: Vec<BoundaryWarning>,
}

/// Main changelog workflow
///
/// 1. Load configuration
/// 2. Open the repository at the configured path
/// 3. Load tags and build one section per tag
/// 4. Render with the selected format
pub fn run_changelog_workflow(args: &ChangelogWorkflowArgs) -> Result<WorkflowResult> {
    let config = config::load_config(args.config_path.as_deref())?;
    generate_changelog(&config, args.current.as_deref(), args.format)
}

/// Generate a changelog for an already loaded configuration
#[instrument(skip(config), fields(repository = %config.git_path))]
pub fn generate_changelog(
    config: &Config,
    current: Option<&str>,
    format: OutputFormat,
) -> Result<WorkflowResult> {
    let repo = Git2Repository::open(Path::new(&config.git_path))?;
    let changelog = changelog::generate(&repo, config)?;

    let mut warnings = changelog.warnings;
    if let Some(current) = current {
        if !changelog.sections.iter().any(|s| s.tag_name == current) {
            warnings.push(BoundaryWarning::CurrentTagNotFound {
                current: current.to_string(),
            });
        }
    }

    let document = format.renderer(config).render(&changelog.sections, current);
    info!(
        sections = changelog.sections.len(),
        warnings = warnings.len(),
        "changelog generated"
    );

    Ok(WorkflowResult { document, warnings })
}
