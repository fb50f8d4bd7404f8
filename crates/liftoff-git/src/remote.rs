//! Remote operations

use std::path::Path;
use std::process::{Command, Output};
use std::time::Instant;

use tracing::{debug, info, instrument};

use liftoff_core::error::GitError;

use crate::repository::{GitRepo, Result};

impl GitRepo {
    /// Get list of remote names
    pub fn remotes(&self) -> Result<Vec<String>> {
        let remotes = self.repo.remotes()?;
        Ok(remotes
            .iter()
            .filter_map(|r| r.map(|s| s.to_string()))
            .collect())
    }

    /// Check if a remote exists
    pub fn has_remote(&self, name: &str) -> Result<bool> {
        Ok(self.remotes()?.iter().any(|r| r == name))
    }

    /// Fetch from a remote using the git CLI
    #[instrument(skip(self))]
    pub fn fetch_cli(&self, remote: &str) -> Result<()> {
        let output = run_git(self.path(), &["fetch", remote]).map_err(|e| sync_failed(remote, e))?;
        check_output(&output).map_err(|reason| GitError::SyncFailed {
            remote: remote.to_string(),
            reason,
        })
    }

    /// Pull a branch from a remote using the git CLI
    #[instrument(skip(self))]
    pub fn pull_cli(&self, remote: &str, branch: &str) -> Result<()> {
        let output =
            run_git(self.path(), &["pull", remote, branch]).map_err(|e| sync_failed(remote, e))?;
        check_output(&output).map_err(|reason| GitError::SyncFailed {
            remote: remote.to_string(),
            reason,
        })
    }

    /// Push a single tag using the git CLI (uses the user's credential setup)
    #[instrument(skip(self))]
    pub fn push_tag_cli(&self, remote: &str, tag: &str) -> Result<()> {
        let refspec = format!("refs/tags/{}", tag);
        let output = run_git(self.path(), &["push", remote, &refspec])
            .map_err(|e| GitError::PushFailed(format!("{}: {}", remote, e)))?;
        check_output(&output)
            .map_err(|reason| GitError::PushFailed(format!("{}: {}", remote, reason)))
    }
}

fn sync_failed(remote: &str, e: std::io::Error) -> GitError {
    GitError::SyncFailed {
        remote: remote.to_string(),
        reason: e.to_string(),
    }
}

/// Map a non-zero exit to its trimmed stderr
fn check_output(output: &Output) -> std::result::Result<(), String> {
    if output.status.success() {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if stderr.is_empty() {
        Err(format!("git exited with {}", output.status))
    } else {
        Err(stderr)
    }
}

/// Run the git CLI in `workdir`, capturing its output
pub(crate) fn run_git(workdir: &Path, args: &[&str]) -> std::io::Result<Output> {
    let start = Instant::now();
    debug!(args = ?args, "running git");
    let output = Command::new("git").args(args).current_dir(workdir).output()?;
    info!(
        args = ?args,
        duration_ms = start.elapsed().as_millis(),
        success = output.status.success(),
        "git (CLI)"
    );
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::setup_repo;
    use git2::Repository;
    use tempfile::TempDir;

    #[test]
    fn test_remotes_empty() {
        let (_temp, repo) = setup_repo();
        assert!(repo.remotes().unwrap().is_empty());
        assert!(!repo.has_remote("origin").unwrap());
    }

    #[test]
    fn test_has_remote() {
        let (_temp, repo) = setup_repo();
        repo.repo
            .remote("origin", "https://github.com/acme/wt.git")
            .unwrap();
        assert!(repo.has_remote("origin").unwrap());
        assert!(!repo.has_remote("upstream").unwrap());
        assert_eq!(repo.remotes().unwrap(), vec!["origin"]);
    }

    #[test]
    fn test_push_tag_to_local_bare_remote() {
        let (_temp, repo) = setup_repo();
        let remote_dir = TempDir::new().unwrap();
        let bare = Repository::init_bare(remote_dir.path()).unwrap();
        repo.repo
            .remote("origin", &remote_dir.path().to_string_lossy())
            .unwrap();

        repo.create_tag("v1.0.1", "Release v1.0.1").unwrap();
        repo.push_tag_cli("origin", "v1.0.1").unwrap();

        assert!(bare.find_reference("refs/tags/v1.0.1").is_ok());
    }

    #[test]
    fn test_fetch_and_pull_from_local_remote() {
        let (_temp, repo) = setup_repo();
        let remote_dir = TempDir::new().unwrap();
        Repository::init_bare(remote_dir.path()).unwrap();
        repo.repo
            .remote("origin", &remote_dir.path().to_string_lossy())
            .unwrap();
        let output = run_git(repo.path(), &["push", "origin", "main"]).unwrap();
        assert!(output.status.success());

        repo.fetch_cli("origin").unwrap();
        repo.pull_cli("origin", "main").unwrap();
    }

    #[test]
    fn test_push_to_missing_remote_fails() {
        let (_temp, repo) = setup_repo();
        repo.create_tag("v1.0.1", "Release v1.0.1").unwrap();
        let result = repo.push_tag_cli("upstream", "v1.0.1");
        assert!(matches!(result, Err(GitError::PushFailed(msg)) if msg.starts_with("upstream")));
    }

    #[test]
    fn test_fetch_missing_remote_is_sync_failure() {
        let (_temp, repo) = setup_repo();
        let result = repo.fetch_cli("origin");
        assert!(matches!(result, Err(GitError::SyncFailed { .. })));
    }
}
