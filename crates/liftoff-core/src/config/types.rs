//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for liftoff
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Product name used in release titles and notes.
    /// Defaults to the repository directory name.
    pub name: Option<String>,

    /// Git configuration
    pub git: GitConfig,

    /// Changelog configuration
    pub changelog: ChangelogConfig,

    /// Publishing configuration
    pub publish: PublishConfig,

    /// Success report configuration
    pub report: ReportConfig,
}

/// What to do when releasing from a branch other than the main branch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BranchPolicy {
    /// Ask interactively; decline when no terminal is attached
    #[default]
    Prompt,
    /// Warn and continue
    Proceed,
    /// Warn and abort
    Abort,
}

/// How to treat failures of steps that are not essential to the release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Propagate the failure and stop
    Strict,
    /// Log the failure and continue
    BestEffort,
}

/// Git configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// Primary remote, used for sync and the first tag push
    pub remote: String,

    /// Remote for the second and last push attempt
    pub fallback_remote: Option<String>,

    /// Branch to release from
    pub branch: String,

    /// Behaviour when on another branch
    pub branch_policy: BranchPolicy,

    /// Behaviour when fetch/pull fails
    pub sync: FailurePolicy,

    /// Annotated tag message template ({version}, {product}, {date})
    pub tag_message: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            remote: "origin".to_string(),
            fallback_remote: Some("upstream".to_string()),
            branch: "main".to_string(),
            branch_policy: BranchPolicy::Prompt,
            sync: FailurePolicy::Strict,
            tag_message: DEFAULT_TAG_MESSAGE.to_string(),
        }
    }
}

/// Default annotated tag message
pub const DEFAULT_TAG_MESSAGE: &str = "Release {version}

{product} {version}
- Changelog entry added to the README
- Release notes published with this tag

Released-by: liftoff
Released-on: {date}";

/// Changelog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Whether to update the changelog section
    pub enabled: bool,

    /// Document holding the changelog section, relative to the repository root
    pub file: PathBuf,

    /// Heading line after which new entries are inserted
    pub marker: String,

    /// Bullet text placed under each new version heading
    pub placeholder: String,

    /// Skip insertion when a heading for the version already exists
    pub skip_existing: bool,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            file: PathBuf::from("README.md"),
            marker: "## Changelog".to_string(),
            placeholder: "See the release notes for details".to_string(),
            skip_existing: false,
        }
    }
}

/// Publishing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PublishConfig {
    /// Release-hosting CLI program
    pub tool: String,

    /// Emoji prefix for the release title
    pub emoji: String,

    /// Shell the product targets, used in the release title
    pub shell: String,

    /// Release title template ({emoji}, {version}, {product}, {shell})
    pub title: String,

    /// Behaviour when the release URL cannot be looked up
    pub url_lookup: FailurePolicy,

    /// Mark releases with a prerelease suffix as prereleases
    pub mark_prerelease: bool,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            tool: "gh".to_string(),
            emoji: "🚀".to_string(),
            shell: "Zsh".to_string(),
            title: "{emoji} {version}: {product} for {shell}".to_string(),
            url_lookup: FailurePolicy::BestEffort,
            mark_prerelease: true,
        }
    }
}

/// Success report configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Guidance printed after a successful release ({version}, {product})
    pub next_steps: Vec<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            next_steps: vec![
                "Existing users: update {product} to pick up {version}".to_string(),
                "New users: follow the installation section of the README".to_string(),
                "Share the release link so users know what changed".to_string(),
            ],
        }
    }
}
