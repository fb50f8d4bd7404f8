//! Scoped, all-or-nothing rewrites of a document on disk

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{ChangelogError, Result};

/// Exclusive lease on a document for the duration of one rewrite.
///
/// New content is staged in a temporary file next to the document and moved
/// over it with an atomic rename on [`commit`](Self::commit). Dropping the
/// lease without committing discards the staged copy; the document on disk is
/// never left half-written.
#[derive(Debug)]
pub struct DocumentLease {
    path: PathBuf,
    original: Vec<u8>,
    staged: Option<NamedTempFile>,
}

impl DocumentLease {
    /// Read the document and take the lease
    pub fn acquire(path: &Path) -> Result<Self> {
        let original = std::fs::read(path).map_err(ChangelogError::Io)?;
        debug!(path = %path.display(), bytes = original.len(), "acquired document lease");
        Ok(Self {
            path: path.to_path_buf(),
            original,
            staged: None,
        })
    }

    /// Content as it was when the lease was taken
    pub fn original(&self) -> &[u8] {
        &self.original
    }

    /// Stage replacement content without touching the document
    pub fn stage(&mut self, content: &[u8]) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let mut staged = NamedTempFile::new_in(&dir).map_err(|e| self.write_failed(e))?;
        staged
            .write_all(content)
            .and_then(|_| staged.as_file().sync_all())
            .map_err(|e| self.write_failed(e))?;

        let permissions = std::fs::metadata(&self.path)
            .map_err(ChangelogError::Io)?
            .permissions();
        staged
            .as_file()
            .set_permissions(permissions)
            .map_err(|e| self.write_failed(e))?;

        self.staged = Some(staged);
        Ok(())
    }

    /// Replace the document with the staged content.
    ///
    /// Returns `false` when nothing was staged; the document is left as is.
    pub fn commit(mut self) -> Result<bool> {
        let Some(staged) = self.staged.take() else {
            return Ok(false);
        };

        staged
            .persist(&self.path)
            .map_err(|e| self.write_failed(e.error))?;
        debug!(path = %self.path.display(), "document lease committed");
        Ok(true)
    }

    fn write_failed(&self, e: std::io::Error) -> ChangelogError {
        ChangelogError::WriteFailed {
            path: self.path.clone(),
            reason: e.to_string(),
        }
    }
}
