//! Core types for liftoff

use serde::Serialize;

use crate::workflow::{ChangelogOutcome, NotesKind};

/// What the sync step did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SyncOutcome {
    /// Fetched and pulled from the remote
    Synced,
    /// Fetched only; HEAD is detached so there is no branch to pull
    FetchedOnly,
    /// The remote is not configured, sync skipped
    NoRemote,
    /// Sync failed and the best-effort policy let the run continue
    Failed,
    /// Dry run, sync would run
    Planned,
}

/// Result of a release run
#[derive(Debug, Clone, Serialize)]
pub struct ReleaseReport {
    /// Released version
    pub version: String,
    /// Tag that was created
    pub tag: String,
    /// Release title
    pub title: String,
    /// Product name used in title and notes
    pub product: String,
    /// Branch the release was cut from, `None` when detached
    pub branch: Option<String>,
    /// Whether the release is marked as a prerelease
    pub prerelease: bool,
    /// Sync step result
    pub sync: SyncOutcome,
    /// Changelog step result
    pub changelog: ChangelogOutcome,
    /// Remote the tag was pushed to
    pub pushed_to: Option<String>,
    /// Where the release notes came from
    pub notes: NotesKind,
    /// Whether the release was created on the hosting service
    pub published: bool,
    /// URL of the published release, when it could be looked up
    pub url: Option<String>,
    /// Warnings raised along the way
    pub warnings: Vec<String>,
    /// Whether this was a dry run
    pub dry_run: bool,
}
