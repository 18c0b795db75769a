use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gitver::cli::{run_pipeline, WorkflowArgs};
use gitver::config;
use gitver::git::GitCliRepository;
use gitver::ui;

#[derive(clap::Parser)]
#[command(
    name = "gitver",
    version,
    about = "Compute the next semantic version from conventional commits"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        short = 'C',
        long,
        default_value = ".",
        help = "Path inside the repository to analyse"
    )]
    repo: PathBuf,

    #[arg(long, help = "Only consider commits after this revision instead of the latest tag")]
    since: Option<String>,

    #[arg(
        short,
        long,
        value_delimiter = ',',
        help = "Only consider these commit types (comma separated)"
    )]
    include: Option<Vec<String>>,

    #[arg(short, long, help = "Print only the next version")]
    quiet: bool,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref())?;
    let repo = GitCliRepository::discover(&args.repo)?;

    if !args.quiet {
        ui::display_status(&format!(
            "Analysing commits in {}",
            repo.workdir().display()
        ));
    }

    let workflow_args = WorkflowArgs {
        since: args.since.clone(),
        include: args.include.clone(),
    };
    let result = run_pipeline(&repo, &config, &workflow_args)?;

    if args.quiet {
        println!("{}", result.decision.next);
        return Ok(());
    }

    for warning in &result.warnings {
        ui::display_boundary_warning(warning);
    }
    ui::display_report(&result.decision);

    Ok(())
}
