//! Error types for liftoff

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using LiftoffError
pub type Result<T> = std::result::Result<T, LiftoffError>;

/// Main error type for liftoff operations
#[derive(Debug, Error)]
pub enum LiftoffError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Git-related errors
    #[error(transparent)]
    Git(#[from] GitError),

    /// Version-related errors
    #[error(transparent)]
    Version(#[from] VersionError),

    /// Changelog-related errors
    #[error(transparent)]
    Changelog(#[from] ChangelogError),

    /// Release-hosting errors
    #[error(transparent)]
    Publish(#[from] PublishError),

    /// Workflow-related errors
    #[error(transparent)]
    Workflow(#[from] WorkflowError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Git-related errors
#[derive(Debug, Error)]
pub enum GitError {
    /// Not inside a git working tree
    #[error("Not inside a git working tree: {0}")]
    NotARepository(PathBuf),

    /// Failed to open repository
    #[error("Failed to open repository: {0}")]
    OpenFailed(String),

    /// Tag already exists
    #[error("Tag {0} already exists")]
    TagExists(String),

    /// Failed to create tag
    #[error("Failed to create tag {name}: {reason}")]
    TagCreationFailed { name: String, reason: String },

    /// Working directory is not clean
    #[error("Working directory has uncommitted changes:\n{}", format_changes(.0))]
    DirtyWorkingDirectory(Vec<String>),

    /// Fetch or pull failed
    #[error("Failed to sync with remote {remote}: {reason}")]
    SyncFailed { remote: String, reason: String },

    /// Failed to push
    #[error("Failed to push to remote: {0}")]
    PushFailed(String),

    /// Git2 library error
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),
}

fn format_changes(files: &[String]) -> String {
    files
        .iter()
        .map(|f| format!("  {}", f))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Version-related errors
#[derive(Debug, Error)]
pub enum VersionError {
    /// Invalid version format
    #[error("Invalid version format '{0}': expected vMAJOR.MINOR.PATCH[-PRERELEASE], e.g. v1.2.3 or v1.2.3-beta")]
    InvalidFormat(String),
}

/// Changelog-related errors
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// Failed to write changelog
    #[error("Failed to write changelog {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Release-hosting errors
#[derive(Debug, Error)]
pub enum PublishError {
    /// Release-hosting CLI is not installed
    #[error("{tool} is not installed or not on PATH. {hint}")]
    ToolMissing { tool: String, hint: String },

    /// Tag could not be pushed to any remote
    #[error("Failed to push tag {tag}: {attempts}")]
    TagPushFailed { tag: String, attempts: String },

    /// Release creation failed
    #[error("Failed to create release {tag}: {reason}")]
    ReleaseFailed { tag: String, reason: String },

    /// Release lookup failed
    #[error("Failed to look up release {tag}: {reason}")]
    LookupFailed { tag: String, reason: String },

    /// Command execution failed
    #[error("Command failed: {command} - {reason}")]
    CommandFailed { command: String, reason: String },
}

/// Workflow-related errors
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// User cancelled
    #[error("Release aborted: {0}")]
    Cancelled(String),
}

/// Classification of failures, one per terminal outcome of a release run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Missing required argument
    Usage,
    /// Invalid configuration file
    Config,
    /// Malformed version string
    Validation,
    /// Required external CLI missing
    Dependency,
    /// Not inside a source-control tree
    Environment,
    /// User declined to continue
    Aborted,
    /// Tag already exists
    Conflict,
    /// Uncommitted changes present
    DirtyState,
    /// Fetch/pull of remote failed
    Sync,
    /// Tag push or release creation failed
    Publish,
    /// Anything else
    Internal,
}

impl ErrorKind {
    /// Process exit code for this kind
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Internal => 1,
            Self::Usage => 2,
            Self::Config => 3,
            Self::Validation => 4,
            Self::Dependency => 5,
            Self::Environment => 6,
            Self::Conflict => 7,
            Self::DirtyState => 8,
            Self::Sync => 9,
            Self::Publish => 10,
            Self::Aborted => 130,
        }
    }

    /// Returns the string representation of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Usage => "usage",
            Self::Config => "config",
            Self::Validation => "validation",
            Self::Dependency => "dependency",
            Self::Environment => "environment",
            Self::Aborted => "aborted",
            Self::Conflict => "conflict",
            Self::DirtyState => "dirty-state",
            Self::Sync => "sync",
            Self::Publish => "publish",
            Self::Internal => "internal",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl LiftoffError {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(_) => ErrorKind::Config,
            Self::Version(_) => ErrorKind::Validation,
            Self::Git(e) => match e {
                GitError::NotARepository(_) | GitError::OpenFailed(_) => ErrorKind::Environment,
                GitError::TagExists(_) => ErrorKind::Conflict,
                GitError::DirtyWorkingDirectory(_) => ErrorKind::DirtyState,
                GitError::SyncFailed { .. } => ErrorKind::Sync,
                GitError::PushFailed(_) => ErrorKind::Publish,
                _ => ErrorKind::Internal,
            },
            Self::Publish(e) => match e {
                PublishError::ToolMissing { .. } => ErrorKind::Dependency,
                _ => ErrorKind::Publish,
            },
            Self::Workflow(WorkflowError::Cancelled(_)) => ErrorKind::Aborted,
            Self::Changelog(_) | Self::Io(_) | Self::Other(_) => ErrorKind::Internal,
        }
    }
}
