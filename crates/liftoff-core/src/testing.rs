//! In-memory collaborators for workflow tests

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{GitError, PublishError, Result};
use crate::traits::{Confirm, PublishRequest, ReleaseHost, SourceControl};

/// Scripted repository that records every call
pub struct FakeRepo {
    pub workdir: PathBuf,
    pub branch: Option<String>,
    pub tags: RefCell<Vec<String>>,
    pub changes: Vec<String>,
    pub remotes: Vec<String>,
    pub failing_pushes: HashSet<String>,
    pub fail_fetch: bool,
    pub calls: RefCell<Vec<String>>,
}

impl FakeRepo {
    pub fn new(workdir: &Path) -> Self {
        Self {
            workdir: workdir.to_path_buf(),
            branch: Some("main".to_string()),
            tags: RefCell::new(Vec::new()),
            changes: Vec::new(),
            remotes: vec!["origin".to_string(), "upstream".to_string()],
            failing_pushes: HashSet::new(),
            fail_fetch: false,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn called(&self, prefix: &str) -> bool {
        self.calls.borrow().iter().any(|c| c.starts_with(prefix))
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl SourceControl for FakeRepo {
    fn workdir(&self) -> &Path {
        &self.workdir
    }

    fn current_branch(&self) -> Result<Option<String>> {
        Ok(self.branch.clone())
    }

    fn tag_exists(&self, name: &str) -> Result<bool> {
        Ok(self.tags.borrow().iter().any(|t| t == name))
    }

    fn version_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags.borrow().clone())
    }

    fn uncommitted_changes(&self) -> Result<Vec<String>> {
        Ok(self.changes.clone())
    }

    fn has_remote(&self, name: &str) -> Result<bool> {
        Ok(self.remotes.iter().any(|r| r == name))
    }

    fn fetch(&self, remote: &str) -> Result<()> {
        self.record(format!("fetch {}", remote));
        if self.fail_fetch {
            return Err(GitError::SyncFailed {
                remote: remote.to_string(),
                reason: "could not resolve host".to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn pull(&self, remote: &str, branch: &str) -> Result<()> {
        self.record(format!("pull {} {}", remote, branch));
        Ok(())
    }

    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()> {
        self.record(format!("tag {}", name));
        self.record(format!("tag-message {}", message));
        self.tags.borrow_mut().push(name.to_string());
        Ok(())
    }

    fn push_tag(&self, remote: &str, tag: &str) -> Result<()> {
        self.record(format!("push {} {}", remote, tag));
        if self.failing_pushes.contains(remote) {
            return Err(GitError::PushFailed(format!("rejected by {}", remote)).into());
        }
        Ok(())
    }
}

/// Scripted release host that records every request
pub struct FakeHost {
    pub available: bool,
    pub fail_create: bool,
    pub fail_lookup: bool,
    pub url: Option<String>,
    pub requests: RefCell<Vec<PublishRequest>>,
    pub notes_seen: RefCell<Vec<String>>,
    pub lookups: Cell<usize>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self {
            available: true,
            fail_create: false,
            fail_lookup: false,
            url: Some("https://github.com/acme/wt/releases/tag/v1.0.1".to_string()),
            requests: RefCell::new(Vec::new()),
            notes_seen: RefCell::new(Vec::new()),
            lookups: Cell::new(0),
        }
    }
}

impl ReleaseHost for FakeHost {
    fn name(&self) -> &str {
        "gh"
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn install_hint(&self) -> &str {
        "install gh"
    }

    fn create_release(&self, request: &PublishRequest) -> Result<()> {
        if let crate::traits::NotesRef::File(path) = &request.notes {
            self.notes_seen
                .borrow_mut()
                .push(std::fs::read_to_string(path).unwrap_or_default());
        }
        self.requests.borrow_mut().push(request.clone());
        if self.fail_create {
            return Err(PublishError::ReleaseFailed {
                tag: request.tag.clone(),
                reason: "HTTP 422".to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn release_url(&self, tag: &str) -> Result<Option<String>> {
        self.lookups.set(self.lookups.get() + 1);
        if self.fail_lookup {
            return Err(PublishError::LookupFailed {
                tag: tag.to_string(),
                reason: "not found".to_string(),
            }
            .into());
        }
        Ok(self.url.clone())
    }
}

/// Confirmation with a fixed answer that counts how often it was asked
pub struct FixedConfirm {
    pub answer: bool,
    pub asked: Cell<usize>,
}

impl FixedConfirm {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            asked: Cell::new(0),
        }
    }
}

impl Confirm for FixedConfirm {
    fn confirm(&self, _prompt: &str) -> Result<bool> {
        self.asked.set(self.asked.get() + 1);
        Ok(self.answer)
    }
}
