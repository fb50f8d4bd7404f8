//! Changelog section updates in the README

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::error::Result;

use super::document::DocumentLease;

/// Options for a changelog update
#[derive(Debug, Clone)]
pub struct ChangelogUpdate<'a> {
    /// Heading line that marks the changelog section
    pub marker: &'a str,
    /// Version heading to insert
    pub version: &'a str,
    /// Bullet text under the new heading
    pub placeholder: &'a str,
    /// Leave the document alone when the version already has a heading
    pub skip_existing: bool,
}

/// What a changelog update did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChangelogOutcome {
    /// A new entry was written
    Inserted,
    /// The document has no changelog marker
    MarkerMissing,
    /// The document does not exist
    FileMissing,
    /// An entry for the version exists and `skip_existing` is set
    AlreadyPresent,
    /// Changelog updates are disabled
    Disabled,
    /// Dry run, the entry would be inserted
    Planned,
}

/// Insert a version entry right after the first marker line.
///
/// Returns `None` when no line matches the marker. Every byte outside the
/// inserted block is preserved, so documents that are not valid UTF-8 are
/// still handled. The entry reuses the line ending of the marker line.
pub fn insert_entry(content: &[u8], marker: &str, version: &str, placeholder: &str) -> Option<Vec<u8>> {
    let marker = marker.trim().as_bytes();
    let mut offset = 0;

    for line in content.split_inclusive(|b| *b == b'\n') {
        let end = offset + line.len();
        if line.trim_ascii() == marker {
            let eol = if line.ends_with(b"\r\n") { "\r\n" } else { "\n" };
            let entry = format!("{eol}### {version}{eol}- {placeholder}{eol}");
            let mut updated = Vec::with_capacity(content.len() + entry.len() + eol.len());
            updated.extend_from_slice(&content[..end]);
            if !line.ends_with(b"\n") {
                updated.extend_from_slice(eol.as_bytes());
            }
            updated.extend_from_slice(entry.as_bytes());
            updated.extend_from_slice(&content[end..]);
            return Some(updated);
        }
        offset = end;
    }

    None
}

/// Whether the document already has a heading for this version
pub fn has_entry(content: &[u8], version: &str) -> bool {
    let heading = format!("### {}", version);
    content
        .split(|b| *b == b'\n')
        .any(|line| line.trim_ascii_end() == heading.as_bytes())
}

/// Apply a changelog update to a document on disk
#[instrument(skip(update), fields(path = %path.display(), version = update.version))]
pub fn update_changelog(path: &Path, update: &ChangelogUpdate<'_>) -> Result<ChangelogOutcome> {
    if !path.exists() {
        info!(path = %path.display(), "changelog document not found, skipping");
        return Ok(ChangelogOutcome::FileMissing);
    }

    let mut lease = DocumentLease::acquire(path)?;

    if update.skip_existing && has_entry(lease.original(), update.version) {
        info!(version = update.version, "changelog entry already present, skipping");
        return Ok(ChangelogOutcome::AlreadyPresent);
    }

    let Some(updated) = insert_entry(
        lease.original(),
        update.marker,
        update.version,
        update.placeholder,
    ) else {
        info!(marker = update.marker, "changelog marker not found, leaving document untouched");
        return Ok(ChangelogOutcome::MarkerMissing);
    };

    lease.stage(&updated)?;
    lease.commit()?;
    debug!(version = update.version, "changelog entry inserted");
    Ok(ChangelogOutcome::Inserted)
}

/// Report what [`update_changelog`] would do, without writing
pub fn plan_changelog(path: &Path, update: &ChangelogUpdate<'_>) -> Result<ChangelogOutcome> {
    if !path.exists() {
        return Ok(ChangelogOutcome::FileMissing);
    }

    let content = std::fs::read(path)?;
    if update.skip_existing && has_entry(&content, update.version) {
        return Ok(ChangelogOutcome::AlreadyPresent);
    }

    if insert_entry(&content, update.marker, update.version, update.placeholder).is_some() {
        Ok(ChangelogOutcome::Planned)
    } else {
        Ok(ChangelogOutcome::MarkerMissing)
    }
}
