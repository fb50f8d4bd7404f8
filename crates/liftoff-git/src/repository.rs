//! Git repository operations

use std::path::{Path, PathBuf};

use git2::Repository;
use tracing::{info, instrument};

use liftoff_core::error::GitError;

/// Result type for git operations
pub type Result<T> = std::result::Result<T, GitError>;

/// Git repository wrapper
pub struct GitRepo {
    pub(crate) repo: Repository,
    path: PathBuf,
}

impl GitRepo {
    /// Discover and open a repository by searching parent directories
    #[instrument(fields(start_path = %start_path.display()))]
    pub fn discover(start_path: &Path) -> Result<Self> {
        info!(start_path = %start_path.display(), "discovering git repository");
        let repo = Repository::discover(start_path).map_err(|e| map_open_error(e, start_path))?;
        Self::from_repository(repo, start_path)
    }

    fn from_repository(repo: Repository, requested: &Path) -> Result<Self> {
        // Releases need a work tree for the README and status checks
        let path = repo
            .workdir()
            .map(Path::to_path_buf)
            .ok_or_else(|| GitError::NotARepository(requested.to_path_buf()))?;

        Ok(Self { repo, path })
    }

    /// Root of the work tree
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the HEAD commit
    pub fn head_commit(&self) -> Result<git2::Commit<'_>> {
        let head = self.repo.head()?;
        head.peel_to_commit().map_err(GitError::Git2)
    }
}

fn map_open_error(e: git2::Error, path: &Path) -> GitError {
    if e.code() == git2::ErrorCode::NotFound {
        GitError::NotARepository(path.to_path_buf())
    } else {
        GitError::OpenFailed(e.to_string())
    }
}
