//! Pre-release checks

use tracing::{debug, info};

use crate::config::BranchPolicy;
use crate::error::{GitError, PublishError, Result, WorkflowError};
use crate::traits::{Confirm, ReleaseHost, SourceControl};

/// Command-line override of the configured branch policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchOverride {
    /// Continue without asking
    Proceed,
    /// Abort without asking
    Abort,
}

/// Result of a branch check that did not abort
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchCheck {
    /// The branch HEAD is on, `None` when detached
    pub current: Option<String>,
    /// Warning to surface when not on the release branch
    pub warning: Option<String>,
}

/// Fail with a dependency error when the release host CLI is missing
pub fn check_tooling(host: &dyn ReleaseHost) -> Result<()> {
    if host.is_available() {
        debug!(tool = host.name(), "release host CLI found");
        return Ok(());
    }

    Err(PublishError::ToolMissing {
        tool: host.name().to_string(),
        hint: host.install_hint().to_string(),
    }
    .into())
}

/// Check the current branch against the release branch.
///
/// On a mismatch the override wins, then the policy; `Prompt` asks the
/// `Confirm` implementation. Declining is an abort.
pub fn check_branch<S: SourceControl + ?Sized>(
    scm: &S,
    release_branch: &str,
    policy: BranchPolicy,
    branch_override: Option<BranchOverride>,
    confirm: &dyn Confirm,
) -> Result<BranchCheck> {
    let current = scm.current_branch()?;
    if current.as_deref() == Some(release_branch) {
        return Ok(BranchCheck {
            current,
            warning: None,
        });
    }

    let shown = current.as_deref().unwrap_or("detached HEAD");
    let warning = format!(
        "Not on release branch '{}' (currently on '{}')",
        release_branch, shown
    );
    info!(release_branch, current = shown, "releasing from another branch");

    let proceed = match branch_override {
        Some(BranchOverride::Proceed) => true,
        Some(BranchOverride::Abort) => false,
        None => match policy {
            BranchPolicy::Proceed => true,
            BranchPolicy::Abort => false,
            BranchPolicy::Prompt => confirm.confirm(&format!("{}. Continue anyway?", warning))?,
        },
    };

    if !proceed {
        return Err(WorkflowError::Cancelled(warning).into());
    }

    Ok(BranchCheck {
        current,
        warning: Some(warning),
    })
}

/// Fail with a conflict error when the tag already exists
pub fn check_tag_available<S: SourceControl + ?Sized>(scm: &S, tag: &str) -> Result<()> {
    if scm.tag_exists(tag)? {
        return Err(GitError::TagExists(tag.to_string()).into());
    }
    Ok(())
}

/// Fail with a dirty-state error listing every uncommitted path
pub fn check_clean<S: SourceControl + ?Sized>(scm: &S) -> Result<()> {
    let changes = scm.uncommitted_changes()?;
    if !changes.is_empty() {
        return Err(GitError::DirtyWorkingDirectory(changes).into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::testing::{FakeHost, FakeRepo, FixedConfirm};
    use tempfile::TempDir;

    fn repo_on(branch: Option<&str>) -> (TempDir, FakeRepo) {
        let temp = TempDir::new().unwrap();
        let mut repo = FakeRepo::new(temp.path());
        repo.branch = branch.map(str::to_string);
        (temp, repo)
    }

    #[test]
    fn test_check_tooling() {
        let mut host = FakeHost::new();
        assert!(check_tooling(&host).is_ok());

        host.available = false;
        let err = check_tooling(&host).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Dependency);
        assert!(err.to_string().contains("install gh"));
    }

    #[test]
    fn test_on_release_branch_never_asks() {
        let (_temp, repo) = repo_on(Some("main"));
        let confirm = FixedConfirm::new(false);
        let check = check_branch(&repo, "main", BranchPolicy::Prompt, None, &confirm).unwrap();
        assert_eq!(check.current.as_deref(), Some("main"));
        assert!(check.warning.is_none());
        assert_eq!(confirm.asked.get(), 0);
    }

    #[test]
    fn test_policy_proceed_warns() {
        let (_temp, repo) = repo_on(Some("develop"));
        let confirm = FixedConfirm::new(false);
        let check = check_branch(&repo, "main", BranchPolicy::Proceed, None, &confirm).unwrap();
        assert!(check.warning.unwrap().contains("develop"));
        assert_eq!(confirm.asked.get(), 0);
    }

    #[test]
    fn test_prompt_accepted_and_declined() {
        let (_temp, repo) = repo_on(Some("develop"));

        let yes = FixedConfirm::new(true);
        assert!(check_branch(&repo, "main", BranchPolicy::Prompt, None, &yes).is_ok());
        assert_eq!(yes.asked.get(), 1);

        let no = FixedConfirm::new(false);
        let err = check_branch(&repo, "main", BranchPolicy::Prompt, None, &no).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Aborted);
    }

    #[test]
    fn test_override_beats_policy() {
        let (_temp, repo) = repo_on(Some("develop"));
        let confirm = FixedConfirm::new(true);

        let err = check_branch(
            &repo,
            "main",
            BranchPolicy::Proceed,
            Some(BranchOverride::Abort),
            &confirm,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Aborted);

        assert!(check_branch(
            &repo,
            "main",
            BranchPolicy::Abort,
            Some(BranchOverride::Proceed),
            &confirm,
        )
        .is_ok());
        assert_eq!(confirm.asked.get(), 0);
    }

    #[test]
    fn test_check_tag_available() {
        let (_temp, repo) = repo_on(Some("main"));
        repo.tags.borrow_mut().push("v1.0.0".to_string());

        assert!(check_tag_available(&repo, "v1.0.1").is_ok());
        let err = check_tag_available(&repo, "v1.0.0").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert!(err.to_string().contains("v1.0.0"));
    }

    #[test]
    fn test_check_clean() {
        let (_temp, mut repo) = repo_on(Some("main"));
        assert!(check_clean(&repo).is_ok());

        repo.changes = vec!["README.md".to_string()];
        let err = check_clean(&repo).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DirtyState);
        assert!(err.to_string().contains("  README.md"));
    }
}
