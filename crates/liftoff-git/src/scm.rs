//! `SourceControl` implementation for the release workflow

use std::path::Path;

use liftoff_core::error::Result;
use liftoff_core::traits::SourceControl;

use crate::repository::GitRepo;

impl SourceControl for GitRepo {
    fn workdir(&self) -> &Path {
        self.path()
    }

    fn current_branch(&self) -> Result<Option<String>> {
        Ok(GitRepo::current_branch(self)?)
    }

    fn tag_exists(&self, name: &str) -> Result<bool> {
        Ok(GitRepo::tag_exists(self, name)?)
    }

    fn version_tags(&self) -> Result<Vec<String>> {
        Ok(GitRepo::version_tags(self)?)
    }

    fn uncommitted_changes(&self) -> Result<Vec<String>> {
        Ok(GitRepo::uncommitted_changes(self)?)
    }

    fn has_remote(&self, name: &str) -> Result<bool> {
        Ok(GitRepo::has_remote(self, name)?)
    }

    fn fetch(&self, remote: &str) -> Result<()> {
        Ok(self.fetch_cli(remote)?)
    }

    fn pull(&self, remote: &str, branch: &str) -> Result<()> {
        Ok(self.pull_cli(remote, branch)?)
    }

    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()> {
        Ok(self.create_tag(name, message)?)
    }

    fn push_tag(&self, remote: &str, tag: &str) -> Result<()> {
        Ok(self.push_tag_cli(remote, tag)?)
    }
}
