//! Repository status operations

use git2::{Status, StatusOptions};

use crate::repository::{GitRepo, Result};

/// Anything staged or in the work tree that a release would leave behind
fn is_uncommitted(status: Status) -> bool {
    status.intersects(
        Status::INDEX_NEW
            | Status::INDEX_MODIFIED
            | Status::INDEX_DELETED
            | Status::INDEX_RENAMED
            | Status::INDEX_TYPECHANGE
            | Status::WT_NEW
            | Status::WT_MODIFIED
            | Status::WT_DELETED
            | Status::WT_RENAMED
            | Status::WT_TYPECHANGE
            | Status::CONFLICTED,
    )
}

impl GitRepo {
    /// Paths with staged, unstaged or untracked changes; ignored files are skipped
    pub fn uncommitted_changes(&self) -> Result<Vec<String>> {
        let mut opts = StatusOptions::new();
        opts.include_untracked(true)
            .recurse_untracked_dirs(true)
            .include_ignored(false);

        let statuses = self.repo.statuses(Some(&mut opts))?;
        let files = statuses
            .iter()
            .filter(|entry| is_uncommitted(entry.status()))
            .filter_map(|entry| entry.path().map(|p| p.to_string()))
            .collect();

        Ok(files)
    }

    /// Get the current branch name
    pub fn current_branch(&self) -> Result<Option<String>> {
        let head = match self.repo.head() {
            Ok(head) => head,
            Err(e) if e.code() == git2::ErrorCode::UnbornBranch => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if head.is_branch() {
            Ok(head.shorthand().map(|s| s.to_string()))
        } else {
            // Detached HEAD
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::setup_repo;

    #[test]
    fn test_fresh_repo_is_clean() {
        let (_temp, repo) = setup_repo();
        assert!(repo.uncommitted_changes().unwrap().is_empty());
    }

    #[test]
    fn test_untracked_file_is_dirty() {
        let (temp, repo) = setup_repo();
        std::fs::write(temp.path().join("new_file.txt"), "new").unwrap();
        assert_eq!(repo.uncommitted_changes().unwrap(), vec!["new_file.txt"]);
    }

    #[test]
    fn test_lists_every_change() {
        let (temp, repo) = setup_repo();
        std::fs::write(temp.path().join("README.md"), "changed").unwrap();
        std::fs::create_dir(temp.path().join("src")).unwrap();
        std::fs::write(temp.path().join("src").join("lib.rs"), "").unwrap();

        let mut changes = repo.uncommitted_changes().unwrap();
        changes.sort();
        assert_eq!(changes, vec!["README.md", "src/lib.rs"]);
    }

    #[test]
    fn test_ignored_files_are_clean() {
        let (temp, repo) = setup_repo();
        let info = temp.path().join(".git").join("info");
        std::fs::create_dir_all(&info).unwrap();
        std::fs::write(info.join("exclude"), "target/\n").unwrap();
        std::fs::create_dir(temp.path().join("target")).unwrap();
        std::fs::write(temp.path().join("target").join("out"), "bin").unwrap();
        assert!(repo.uncommitted_changes().unwrap().is_empty());
    }

    #[test]
    fn test_current_branch() {
        let (_temp, repo) = setup_repo();
        assert_eq!(repo.current_branch().unwrap().as_deref(), Some("main"));
    }

    #[test]
    fn test_detached_head() {
        let (_temp, repo) = setup_repo();
        let head = repo.head_commit().unwrap().id();
        repo.repo.set_head_detached(head).unwrap();
        assert_eq!(repo.current_branch().unwrap(), None);
    }
}
