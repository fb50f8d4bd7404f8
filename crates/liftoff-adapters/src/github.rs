//! GitHub release host driven through the `gh` CLI

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::Instant;

use tracing::{debug, info, instrument};

use liftoff_core::error::{PublishError, Result};
use liftoff_core::traits::{NotesRef, PublishRequest, ReleaseHost};

const INSTALL_HINT: &str = "Install GitHub CLI from https://cli.github.com and run `gh auth login`";

/// GitHub CLI release host
#[derive(Debug, Clone)]
pub struct GitHubCli {
    program: String,
    workdir: Option<PathBuf>,
}

impl GitHubCli {
    /// Create a host that runs `program` (normally "gh")
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            workdir: None,
        }
    }

    /// Run the CLI in this directory instead of the current one
    pub fn with_workdir(mut self, workdir: impl AsRef<Path>) -> Self {
        self.workdir = Some(workdir.as_ref().to_path_buf());
        self
    }

    fn run(&self, args: &[String]) -> std::io::Result<Output> {
        let start = Instant::now();
        let mut cmd = Command::new(&self.program);
        cmd.args(args);
        if let Some(ref dir) = self.workdir {
            cmd.current_dir(dir);
        }

        let output = cmd.output()?;
        info!(
            program = %self.program,
            subcommand = args.get(1).map(String::as_str).unwrap_or_default(),
            duration_ms = start.elapsed().as_millis(),
            success = output.status.success(),
            "release host CLI"
        );
        Ok(output)
    }

    fn command_line(&self, args: &[String]) -> String {
        format!("{} {}", self.program, args[..2.min(args.len())].join(" "))
    }
}

impl Default for GitHubCli {
    fn default() -> Self {
        Self::new("gh")
    }
}

/// Arguments for `gh release create`
pub fn create_args(request: &PublishRequest) -> Vec<String> {
    let mut args = vec![
        "release".to_string(),
        "create".to_string(),
        request.tag.clone(),
        "--title".to_string(),
        request.title.clone(),
    ];

    match &request.notes {
        NotesRef::File(path) => {
            args.push("--notes-file".to_string());
            args.push(path.to_string_lossy().to_string());
        }
        NotesRef::Text(text) => {
            args.push("--notes".to_string());
            args.push(text.clone());
        }
    }

    if request.prerelease {
        args.push("--prerelease".to_string());
    }

    args
}

/// Arguments for looking up the URL of a release
pub fn view_url_args(tag: &str) -> Vec<String> {
    ["release", "view", tag, "--json", "url", "--jq", ".url"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn stderr_reason(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if stderr.is_empty() {
        format!("exited with {}", output.status)
    } else {
        stderr
    }
}

impl ReleaseHost for GitHubCli {
    fn name(&self) -> &str {
        &self.program
    }

    fn is_available(&self) -> bool {
        match which::which(&self.program) {
            Ok(path) => {
                debug!(path = %path.display(), "found release host CLI");
                true
            }
            Err(_) => false,
        }
    }

    fn install_hint(&self) -> &str {
        INSTALL_HINT
    }

    #[instrument(skip(self, request), fields(tag = %request.tag, prerelease = request.prerelease))]
    fn create_release(&self, request: &PublishRequest) -> Result<()> {
        let args = create_args(request);
        let output = self.run(&args).map_err(|e| PublishError::CommandFailed {
            command: self.command_line(&args),
            reason: e.to_string(),
        })?;

        if !output.status.success() {
            return Err(PublishError::ReleaseFailed {
                tag: request.tag.clone(),
                reason: stderr_reason(&output),
            }
            .into());
        }

        Ok(())
    }

    #[instrument(skip(self))]
    fn release_url(&self, tag: &str) -> Result<Option<String>> {
        let args = view_url_args(tag);
        let output = self.run(&args).map_err(|e| PublishError::CommandFailed {
            command: self.command_line(&args),
            reason: e.to_string(),
        })?;

        if !output.status.success() {
            return Err(PublishError::LookupFailed {
                tag: tag.to_string(),
                reason: stderr_reason(&output),
            }
            .into());
        }

        let url = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Ok(if url.is_empty() { None } else { Some(url) })
    }
}
