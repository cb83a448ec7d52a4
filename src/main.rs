use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use git_changelog::cli::{run_changelog_workflow, ChangelogWorkflowArgs};
use git_changelog::render::OutputFormat;
use git_changelog::ui;

#[derive(clap::Parser)]
#[command(
    name = "git-changelog",
    version,
    about = "Generate a changelog from git tags and conventional commits"
)]
struct Args {
    #[arg(long, help = "Mark version tag as the current release")]
    current: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Markdown, help = "Output format")]
    format: OutputFormat,
}

fn main() {
    init_tracing();

    let args = Args::parse();
    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let workflow_args = ChangelogWorkflowArgs {
        config_path: args.config,
        current: args.current.filter(|c| !c.is_empty()),
        format: args.format,
    };

    let result = run_changelog_workflow(&workflow_args)?;
    for warning in &result.warnings {
        ui::display_boundary_warning(warning);
    }

    print!("{}", result.document);
    Ok(())
}

/// Console logging controlled by RUST_LOG (default: warn), on stderr
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
