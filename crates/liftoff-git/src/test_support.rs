//! Temporary repositories for tests

use std::path::Path;

use git2::{Repository, RepositoryInitOptions, Signature};
use tempfile::TempDir;

use crate::repository::GitRepo;

/// A repository on `main` with one commit of README.md and a committer identity
pub fn setup_repo() -> (TempDir, GitRepo) {
    let temp = TempDir::new().unwrap();
    let mut opts = RepositoryInitOptions::new();
    opts.initial_head("main");
    let repo = Repository::init_opts(temp.path(), &opts).unwrap();

    let mut config = repo.config().unwrap();
    config.set_str("user.name", "Test").unwrap();
    config.set_str("user.email", "test@example.com").unwrap();

    let sig = Signature::now("Test", "test@example.com").unwrap();
    std::fs::write(temp.path().join("README.md"), "# wt\n\n## Changelog\n").unwrap();
    let mut index = repo.index().unwrap();
    index.add_path(Path::new("README.md")).unwrap();
    index.write().unwrap();

    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    repo.commit(Some("HEAD"), &sig, &sig, "Initial commit", &tree, &[])
        .unwrap();

    let git_repo = GitRepo::discover(temp.path()).unwrap();
    (temp, git_repo)
}
