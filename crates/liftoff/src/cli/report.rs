//! Human-readable release report

use liftoff_core::types::SyncOutcome;
use liftoff_core::workflow::{render_template, ChangelogOutcome, NotesKind};
use liftoff_core::{Config, ReleaseReport};

use super::output;

fn changelog_summary(report: &ReleaseReport, config: &Config) -> String {
    let file = config.changelog.file.display();
    match report.changelog {
        ChangelogOutcome::Inserted => format!("entry added to {} (not committed)", file),
        ChangelogOutcome::Planned => format!("entry would be added to {}", file),
        ChangelogOutcome::MarkerMissing => format!(
            "no '{}' section in {}, skipped",
            config.changelog.marker, file
        ),
        ChangelogOutcome::FileMissing => format!("{} not found, skipped", file),
        ChangelogOutcome::AlreadyPresent => {
            format!("{} already has an entry for {}", file, report.version)
        }
        ChangelogOutcome::Disabled => "disabled".to_string(),
    }
}

fn sync_summary(report: &ReleaseReport, config: &Config) -> String {
    let remote = &config.git.remote;
    match report.sync {
        SyncOutcome::Synced => format!("up to date with {}", remote),
        SyncOutcome::FetchedOnly => format!("fetched {} (detached HEAD, no pull)", remote),
        SyncOutcome::NoRemote => format!("no '{}' remote, skipped", remote),
        SyncOutcome::Failed => format!("sync with {} failed, continued", remote),
        SyncOutcome::Planned => format!("would fetch and pull from {}", remote),
    }
}

fn notes_summary(kind: NotesKind) -> &'static str {
    match kind {
        NotesKind::File => "from file",
        NotesKind::Text => "inline text",
        NotesKind::Generated => "generated",
    }
}

/// Render the report as terminal lines
pub fn render(report: &ReleaseReport, config: &Config) -> Vec<String> {
    let mut lines: Vec<String> = report
        .warnings
        .iter()
        .map(|w| output::warning_line(w))
        .collect();

    let version = output::version_style().apply_to(&report.version).to_string();
    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(if report.dry_run {
        output::success_line(&format!(
            "Dry run complete. {} of {} would be released, nothing was changed.",
            version, report.product
        ))
    } else {
        output::success_line(&format!("Released {} of {}", version, report.product))
    });

    lines.push(String::new());
    lines.push(output::header("What's available"));

    let tag = match (&report.pushed_to, report.dry_run) {
        (Some(remote), _) => format!("{} (pushed to {})", report.tag, remote),
        (None, true) => format!("{} (would be created and pushed)", report.tag),
        (None, false) => report.tag.clone(),
    };
    lines.push(output::key_value("Tag", &tag));

    let title = if report.prerelease {
        format!("{} (prerelease)", report.title)
    } else {
        report.title.clone()
    };
    lines.push(output::key_value("Release", &title));
    lines.push(output::key_value("Notes", notes_summary(report.notes)));
    lines.push(output::key_value("Changelog", &changelog_summary(report, config)));
    lines.push(output::key_value("Sync", &sync_summary(report, config)));
    lines.push(output::key_value(
        "Branch",
        report.branch.as_deref().unwrap_or("detached HEAD"),
    ));

    if let Some(url) = &report.url {
        lines.push(String::new());
        lines.push(output::info_line(
            &output::url_style().apply_to(url).to_string(),
        ));
    }

    if !report.dry_run && !config.report.next_steps.is_empty() {
        lines.push(String::new());
        lines.push(output::header("Next steps"));
        for step in &config.report.next_steps {
            let step = render_template(
                step,
                &[
                    ("product", report.product.as_str()),
                    ("version", report.version.as_str()),
                ],
            );
            lines.push(output::bullet(&step));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> ReleaseReport {
        ReleaseReport {
            version: "v1.0.1".to_string(),
            tag: "v1.0.1".to_string(),
            title: "🚀 v1.0.1: wt for Zsh".to_string(),
            product: "wt".to_string(),
            branch: Some("main".to_string()),
            prerelease: false,
            sync: SyncOutcome::Synced,
            changelog: ChangelogOutcome::Inserted,
            pushed_to: Some("origin".to_string()),
            notes: NotesKind::Generated,
            published: true,
            url: Some("https://github.com/acme/wt/releases/tag/v1.0.1".to_string()),
            warnings: Vec::new(),
            dry_run: false,
        }
    }

    fn plain(lines: Vec<String>) -> String {
        lines
            .iter()
            .map(|l| console::strip_ansi_codes(l).to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_success_report() {
        let text = plain(render(&report(), &Config::default()));
        assert!(text.starts_with("✓ Released v1.0.1 of wt"));
        assert!(text.contains("Tag: v1.0.1 (pushed to origin)"));
        assert!(text.contains("Changelog: entry added to README.md (not committed)"));
        assert!(text.contains("Notes: generated"));
        assert!(text.contains("→ https://github.com/acme/wt/releases/tag/v1.0.1"));
        assert!(text.contains("Next steps"));
        assert!(text.contains("update wt to pick up v1.0.1"));
    }

    #[test]
    fn test_report_without_url() {
        let mut report = report();
        report.url = None;
        let text = plain(render(&report, &Config::default()));
        assert!(!text.contains("→"));
    }

    #[test]
    fn test_warnings_come_first() {
        let mut report = report();
        report.warnings.push("No 'origin' remote configured, skipped sync".to_string());
        report.sync = SyncOutcome::NoRemote;

        let lines = render(&report, &Config::default());
        let first = console::strip_ansi_codes(&lines[0]).to_string();
        assert_eq!(first, "! No 'origin' remote configured, skipped sync");
        assert!(plain(lines).contains("Sync: no 'origin' remote, skipped"));
    }

    #[test]
    fn test_dry_run_report() {
        let mut report = report();
        report.dry_run = true;
        report.pushed_to = None;
        report.published = false;
        report.url = None;
        report.changelog = ChangelogOutcome::Planned;
        report.sync = SyncOutcome::Planned;

        let text = plain(render(&report, &Config::default()));
        assert!(text.contains("Dry run complete"));
        assert!(text.contains("(would be created and pushed)"));
        assert!(text.contains("entry would be added to README.md"));
        assert!(!text.contains("Next steps"));
    }

    #[test]
    fn test_prerelease_and_missing_marker() {
        let mut report = report();
        report.prerelease = true;
        report.changelog = ChangelogOutcome::MarkerMissing;

        let text = plain(render(&report, &Config::default()));
        assert!(text.contains("(prerelease)"));
        assert!(text.contains("no '## Changelog' section in README.md, skipped"));
    }
}
