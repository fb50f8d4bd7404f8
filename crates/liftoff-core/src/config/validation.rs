//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_git(config)?;
    validate_changelog(config)?;
    validate_publish(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn invalid(field: &str, message: &str) -> crate::error::LiftoffError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        message: message.to_string(),
    }
    .into()
}

fn validate_git(config: &Config) -> Result<()> {
    if config.git.remote.trim().is_empty() {
        return Err(invalid("git.remote", "remote cannot be empty"));
    }

    if let Some(fallback) = &config.git.fallback_remote {
        if fallback.trim().is_empty() {
            return Err(invalid("git.fallback_remote", "fallback remote cannot be empty"));
        }
        if fallback == &config.git.remote {
            return Err(invalid(
                "git.fallback_remote",
                "fallback remote must differ from git.remote",
            ));
        }
    }

    if config.git.branch.trim().is_empty() {
        return Err(invalid("git.branch", "branch cannot be empty"));
    }

    if !config.git.tag_message.contains("{version}") {
        return Err(invalid("git.tag_message", "must contain {version} placeholder"));
    }

    Ok(())
}

fn validate_changelog(config: &Config) -> Result<()> {
    if !config.changelog.enabled {
        return Ok(());
    }

    if config.changelog.marker.trim().is_empty() {
        return Err(invalid("changelog.marker", "marker cannot be empty"));
    }

    if config.changelog.file.is_absolute() {
        return Err(invalid(
            "changelog.file",
            "must be relative to the repository root",
        ));
    }

    Ok(())
}

fn validate_publish(config: &Config) -> Result<()> {
    if config.publish.tool.trim().is_empty() {
        return Err(invalid("publish.tool", "tool cannot be empty"));
    }

    if !config.publish.title.contains("{version}") {
        return Err(invalid("publish.title", "must contain {version} placeholder"));
    }

    Ok(())
}
