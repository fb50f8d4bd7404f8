//! Tag operations

use tracing::{debug, info, instrument};

use liftoff_core::error::GitError;
use liftoff_core::version::ReleaseVersion;

use crate::repository::{GitRepo, Result};

impl GitRepo {
    /// Names of tags in release version form, newest first
    #[instrument(skip(self))]
    pub fn version_tags(&self) -> Result<Vec<String>> {
        let names = self.repo.tag_names(None)?;
        let mut versions: Vec<ReleaseVersion> = names
            .iter()
            .flatten()
            .filter_map(|name| ReleaseVersion::parse(name).ok())
            .collect();

        versions.sort_by(|a, b| b.to_semver().cmp(&a.to_semver()));
        debug!(count = versions.len(), "listed version tags");
        Ok(versions.iter().map(|v| v.as_str().to_string()).collect())
    }

    /// Whether a tag with this exact name exists
    pub fn tag_exists(&self, name: &str) -> Result<bool> {
        match self.repo.find_reference(&format!("refs/tags/{}", name)) {
            Ok(_) => Ok(true),
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(false),
            Err(e) => Err(GitError::Git2(e)),
        }
    }

    /// Create an annotated tag on HEAD
    #[instrument(skip(self, message))]
    pub fn create_tag(&self, name: &str, message: &str) -> Result<()> {
        if self.tag_exists(name)? {
            return Err(GitError::TagExists(name.to_string()));
        }

        let head = self.head_commit()?;
        let creation_failed = |e: git2::Error| GitError::TagCreationFailed {
            name: name.to_string(),
            reason: e.message().to_string(),
        };

        let sig = self.repo.signature().map_err(creation_failed)?;
        self.repo
            .tag(name, head.as_object(), &sig, message, false)
            .map_err(creation_failed)?;

        info!(name, "created tag");
        Ok(())
    }
}
