//! Liftoff Core - Core library for the liftoff release orchestrator
//!
//! This crate provides the error types, configuration, version grammar,
//! collaborator traits and the release workflow itself.

pub mod config;
pub mod error;
pub mod traits;
pub mod types;
pub mod version;
pub mod workflow;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{BranchPolicy, Config, FailurePolicy};
pub use error::{ErrorKind, LiftoffError, Result};
pub use traits::{Confirm, NotesRef, PublishRequest, ReleaseHost, SourceControl};
pub use types::{ReleaseReport, SyncOutcome};
pub use version::ReleaseVersion;
pub use workflow::{BranchOverride, ReleaseOptions, ReleaseWorkflow};
