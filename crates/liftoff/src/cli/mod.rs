//! CLI definition and command handling

pub mod output;
mod prompt;
mod report;

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use liftoff_adapters::GitHubCli;
use liftoff_core::config::load_config_or_default;
use liftoff_core::{BranchOverride, ReleaseOptions, ReleaseWorkflow};
use liftoff_git::GitRepo;

/// Liftoff - tag, changelog and publish a release in one command
#[derive(Debug, Parser)]
#[command(name = "liftoff")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Version to release, e.g. v1.2.3 or v1.2.3-beta.1
    #[arg(value_name = "VERSION")]
    pub release_version: String,

    /// Path to a release notes file, or the notes text itself
    #[arg(value_name = "RELEASE_NOTES")]
    pub release_notes: Option<String>,

    /// Proceed without asking when not on the release branch
    #[arg(short = 'y', long, conflicts_with = "strict_branch")]
    pub yes: bool,

    /// Abort when not on the release branch
    #[arg(long)]
    pub strict_branch: bool,

    /// Run every check but change nothing
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Working directory
    #[arg(short = 'C', long)]
    pub directory: Option<PathBuf>,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

impl Cli {
    fn branch_override(&self) -> Option<BranchOverride> {
        if self.yes {
            Some(BranchOverride::Proceed)
        } else if self.strict_branch {
            Some(BranchOverride::Abort)
        } else {
            None
        }
    }

    fn options(&self) -> ReleaseOptions {
        let options = ReleaseOptions::new(&self.release_version)
            .with_dry_run(self.dry_run)
            .with_branch_override(self.branch_override());

        match &self.release_notes {
            Some(notes) => options.with_notes(notes),
            None => options,
        }
    }

    /// Execute the release
    pub fn execute(self) -> anyhow::Result<()> {
        // Change to specified directory if provided
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        info!(
            version = %self.release_version,
            notes = ?self.release_notes,
            dry_run = self.dry_run,
            "executing release command"
        );

        let cwd = std::env::current_dir()?;
        let (config, config_path) = load_config_or_default(&cwd)?;
        if let Some(path) = &config_path {
            info!(path = %path.display(), "using config file");
        }

        let host = GitHubCli::new(&config.publish.tool).with_workdir(&cwd);
        let confirm = prompt::for_terminal();

        let report = ReleaseWorkflow::new(&config, self.options(), &host, &*confirm)
            .execute(|| Ok(GitRepo::discover(&cwd)?))?;

        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            OutputFormat::Text => {
                if !self.quiet {
                    for line in report::render(&report, &config) {
                        println!("{}", line);
                    }
                }
            }
        }

        Ok(())
    }
}
