//! Release workflow orchestration

use tracing::{debug, info, instrument, warn};

use crate::config::{Config, FailurePolicy};
use crate::error::{ErrorKind, GitError, PublishError, Result};
use crate::traits::{Confirm, PublishRequest, ReleaseHost, SourceControl};
use crate::types::{ReleaseReport, SyncOutcome};
use crate::version::ReleaseVersion;

use super::changelog::{plan_changelog, update_changelog, ChangelogOutcome, ChangelogUpdate};
use super::notes::{notes_kind_for, ResolvedNotes};
use super::template::render_template;
use super::validation::{check_branch, check_clean, check_tag_available, check_tooling, BranchOverride};

/// Options for a release
#[derive(Debug, Clone, Default)]
pub struct ReleaseOptions {
    /// Version to release, e.g. `v1.2.3`
    pub version: String,
    /// Notes file path or literal notes text
    pub notes: Option<String>,
    /// Whether this is a dry run
    pub dry_run: bool,
    /// Command-line override of the branch policy
    pub branch_override: Option<BranchOverride>,
}

impl ReleaseOptions {
    /// Create options for a version
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            ..Default::default()
        }
    }

    /// Set the release notes argument
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Make this a dry run
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Override the configured branch policy
    pub fn with_branch_override(mut self, branch_override: Option<BranchOverride>) -> Self {
        self.branch_override = branch_override;
        self
    }
}

/// Execute a release workflow
pub struct ReleaseWorkflow<'a> {
    config: &'a Config,
    options: ReleaseOptions,
    host: &'a dyn ReleaseHost,
    confirm: &'a dyn Confirm,
}

impl<'a> ReleaseWorkflow<'a> {
    /// Create a new release workflow
    pub fn new(
        config: &'a Config,
        options: ReleaseOptions,
        host: &'a dyn ReleaseHost,
        confirm: &'a dyn Confirm,
    ) -> Self {
        Self {
            config,
            options,
            host,
            confirm,
        }
    }

    /// Check if this is a dry run
    pub fn is_dry_run(&self) -> bool {
        self.options.dry_run
    }

    /// Execute the release.
    ///
    /// The repository is opened only after the version and tooling checks
    /// pass. Every check runs before the first mutation; the first failing
    /// step stops the run.
    #[instrument(skip_all, fields(version = %self.options.version, dry_run = self.options.dry_run))]
    pub fn execute<S, F>(&self, open_repo: F) -> Result<ReleaseReport>
    where
        S: SourceControl,
        F: FnOnce() -> Result<S>,
    {
        let version = ReleaseVersion::parse(&self.options.version)?;
        check_tooling(self.host)?;

        let scm = open_repo()?;
        let product = self.product(&scm);
        let tag = version.as_str().to_string();
        let mut warnings = Vec::new();

        info!(
            version = %version,
            product = %product,
            workdir = %scm.workdir().display(),
            "executing release workflow"
        );

        let branch = check_branch(
            &scm,
            &self.config.git.branch,
            self.config.git.branch_policy,
            self.options.branch_override,
            self.confirm,
        )?;
        warnings.extend(branch.warning);

        check_tag_available(&scm, &tag)?;
        warnings.extend(self.check_newer(&scm, &version)?);
        check_clean(&scm)?;

        let sync = self.sync(&scm, branch.current.as_deref(), &mut warnings)?;
        let changelog = self.changelog(&scm, &version)?;

        let title = render_template(
            &self.config.publish.title,
            &[
                ("emoji", self.config.publish.emoji.as_str()),
                ("version", version.as_str()),
                ("product", product.as_str()),
                ("shell", self.config.publish.shell.as_str()),
            ],
        );
        let prerelease = self.config.publish.mark_prerelease && version.is_prerelease();

        let mut report = ReleaseReport {
            version: version.to_string(),
            tag: tag.clone(),
            title,
            product,
            branch: branch.current,
            prerelease,
            sync,
            changelog,
            pushed_to: None,
            notes: notes_kind_for(self.options.notes.as_deref()),
            published: false,
            url: None,
            warnings,
            dry_run: self.is_dry_run(),
        };

        if self.is_dry_run() {
            info!("dry run complete, no changes made");
            return Ok(report);
        }

        report.pushed_to = Some(self.tag_and_push(&scm, &version, &report.product)?);

        let notes = ResolvedNotes::resolve(
            self.options.notes.as_deref(),
            version.as_str(),
            &report.product,
        )?;
        report.notes = notes.kind();

        let request = PublishRequest {
            tag: tag.clone(),
            title: report.title.clone(),
            notes: notes.to_notes_ref(),
            prerelease,
        };
        self.host.create_release(&request)?;
        report.published = true;
        info!(tag = %tag, host = self.host.name(), "release published");

        report.url = self.lookup_url(&tag)?;

        Ok(report)
    }

    /// Product name: the configured name, else the repository directory name
    fn product<S: SourceControl>(&self, scm: &S) -> String {
        self.config
            .name
            .clone()
            .or_else(|| {
                scm.workdir()
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
            })
            .unwrap_or_else(|| "project".to_string())
    }

    fn check_newer<S: SourceControl>(
        &self,
        scm: &S,
        version: &ReleaseVersion,
    ) -> Result<Option<String>> {
        let latest = scm
            .version_tags()?
            .into_iter()
            .filter_map(|t| {
                semver::Version::parse(t.strip_prefix('v').unwrap_or(&t))
                    .ok()
                    .map(|v| (v, t))
            })
            .max_by(|a, b| a.0.cmp(&b.0));

        match latest {
            Some((_, name)) if version.is_newer_than(&name) == Some(false) => {
                info!(version = %version, latest = %name, "version is not newer than the latest release");
                Ok(Some(format!(
                    "{} is not newer than the latest release {}",
                    version, name
                )))
            }
            _ => Ok(None),
        }
    }

    fn sync<S: SourceControl>(
        &self,
        scm: &S,
        branch: Option<&str>,
        warnings: &mut Vec<String>,
    ) -> Result<SyncOutcome> {
        let remote = &self.config.git.remote;

        if !scm.has_remote(remote)? {
            info!(remote = %remote, "remote not configured, skipping sync");
            warnings.push(format!("No '{}' remote configured, skipped sync", remote));
            return Ok(SyncOutcome::NoRemote);
        }

        if self.is_dry_run() {
            return Ok(SyncOutcome::Planned);
        }

        let result = scm.fetch(remote).and_then(|_| match branch {
            Some(branch) => scm.pull(remote, branch).map(|_| SyncOutcome::Synced),
            None => Ok(SyncOutcome::FetchedOnly),
        });

        match result {
            Ok(outcome) => {
                debug!(remote = %remote, ?outcome, "synced with remote");
                Ok(outcome)
            }
            Err(e) => match self.config.git.sync {
                FailurePolicy::Strict if e.kind() == ErrorKind::Sync => Err(e),
                FailurePolicy::Strict => Err(GitError::SyncFailed {
                    remote: remote.clone(),
                    reason: e.to_string(),
                }
                .into()),
                FailurePolicy::BestEffort => {
                    info!(remote = %remote, error = %e, "sync failed, continuing");
                    warnings.push(format!("Sync with '{}' failed: {}", remote, e));
                    Ok(SyncOutcome::Failed)
                }
            },
        }
    }

    fn changelog<S: SourceControl>(
        &self,
        scm: &S,
        version: &ReleaseVersion,
    ) -> Result<ChangelogOutcome> {
        let changelog = &self.config.changelog;
        if !changelog.enabled {
            return Ok(ChangelogOutcome::Disabled);
        }

        let path = scm.workdir().join(&changelog.file);
        let update = ChangelogUpdate {
            marker: &changelog.marker,
            version: version.as_str(),
            placeholder: &changelog.placeholder,
            skip_existing: changelog.skip_existing,
        };

        if self.is_dry_run() {
            plan_changelog(&path, &update)
        } else {
            update_changelog(&path, &update)
        }
    }

    /// Create the annotated tag and push it, falling back to the secondary remote
    fn tag_and_push<S: SourceControl>(
        &self,
        scm: &S,
        version: &ReleaseVersion,
        product: &str,
    ) -> Result<String> {
        let date = chrono::Utc::now().format("%Y-%m-%d").to_string();
        let message = render_template(
            &self.config.git.tag_message,
            &[
                ("version", version.as_str()),
                ("product", product),
                ("date", date.as_str()),
            ],
        );
        let tag = version.as_str();

        scm.create_annotated_tag(tag, &message)?;
        info!(tag, "created annotated tag");

        let remotes = std::iter::once(self.config.git.remote.as_str())
            .chain(self.config.git.fallback_remote.as_deref());

        let mut attempts = Vec::new();
        for remote in remotes {
            match scm.push_tag(remote, tag) {
                Ok(()) => {
                    info!(tag, remote, "pushed tag");
                    return Ok(remote.to_string());
                }
                Err(e) => {
                    warn!(tag, remote, error = %e, "tag push failed");
                    attempts.push(format!("{}: {}", remote, e));
                }
            }
        }

        Err(PublishError::TagPushFailed {
            tag: tag.to_string(),
            attempts: attempts.join("; "),
        }
        .into())
    }

    fn lookup_url(&self, tag: &str) -> Result<Option<String>> {
        match self.host.release_url(tag) {
            Ok(url) => Ok(url),
            Err(e) => match self.config.publish.url_lookup {
                FailurePolicy::Strict => Err(e),
                FailurePolicy::BestEffort => {
                    debug!(tag, error = %e, "release URL lookup failed");
                    Ok(None)
                }
            },
        }
    }
}
