//! Traits for the external collaborators a release run drives

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;

/// Source-control operations needed by the release workflow
pub trait SourceControl {
    /// Root of the working tree
    fn workdir(&self) -> &Path;

    /// Current branch name, `None` when HEAD is detached or unborn
    fn current_branch(&self) -> Result<Option<String>>;

    /// Whether a tag with this exact name exists
    fn tag_exists(&self, name: &str) -> Result<bool>;

    /// Names of all tags that look like release versions
    fn version_tags(&self) -> Result<Vec<String>>;

    /// Paths with staged, unstaged or untracked changes
    fn uncommitted_changes(&self) -> Result<Vec<String>>;

    /// Whether a remote with this name is configured
    fn has_remote(&self, name: &str) -> Result<bool>;

    /// Fetch from a remote
    fn fetch(&self, remote: &str) -> Result<()>;

    /// Pull a branch from a remote into the current branch
    fn pull(&self, remote: &str, branch: &str) -> Result<()>;

    /// Create an annotated tag on HEAD
    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()>;

    /// Push a single tag to a remote
    fn push_tag(&self, remote: &str, tag: &str) -> Result<()>;
}

impl<T: SourceControl + ?Sized> SourceControl for &T {
    fn workdir(&self) -> &Path {
        (**self).workdir()
    }

    fn current_branch(&self) -> Result<Option<String>> {
        (**self).current_branch()
    }

    fn tag_exists(&self, name: &str) -> Result<bool> {
        (**self).tag_exists(name)
    }

    fn version_tags(&self) -> Result<Vec<String>> {
        (**self).version_tags()
    }

    fn uncommitted_changes(&self) -> Result<Vec<String>> {
        (**self).uncommitted_changes()
    }

    fn has_remote(&self, name: &str) -> Result<bool> {
        (**self).has_remote(name)
    }

    fn fetch(&self, remote: &str) -> Result<()> {
        (**self).fetch(remote)
    }

    fn pull(&self, remote: &str, branch: &str) -> Result<()> {
        (**self).pull(remote, branch)
    }

    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()> {
        (**self).create_annotated_tag(name, message)
    }

    fn push_tag(&self, remote: &str, tag: &str) -> Result<()> {
        (**self).push_tag(remote, tag)
    }
}

/// Release notes handed to the release host
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum NotesRef {
    /// Notes stored in a file
    File(PathBuf),
    /// Notes given inline
    Text(String),
}

/// A release to create on the hosting service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishRequest {
    /// Tag the release points at
    pub tag: String,
    /// Release title
    pub title: String,
    /// Release notes
    pub notes: NotesRef,
    /// Whether to mark the release as a prerelease
    pub prerelease: bool,
}

/// An external release-hosting service, driven through its CLI
pub trait ReleaseHost {
    /// Program name, e.g. "gh"
    fn name(&self) -> &str;

    /// Whether the CLI is installed and on PATH
    fn is_available(&self) -> bool;

    /// How to install the CLI
    fn install_hint(&self) -> &str;

    /// Create a release
    fn create_release(&self, request: &PublishRequest) -> Result<()>;

    /// Look up the URL of a published release
    fn release_url(&self, tag: &str) -> Result<Option<String>>;
}

/// Yes/no confirmation from the operator
pub trait Confirm {
    /// Ask the question; `Ok(false)` means declined
    fn confirm(&self, prompt: &str) -> Result<bool>;
}
