//! Release version grammar

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, VersionError};

static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^v(\d+)\.(\d+)\.(\d+)(?:-([A-Za-z0-9.-]+))?$").expect("valid version regex")
});

/// Returns true if `s` is a valid release version (`v1.2.3`, `v1.2.3-beta.1`)
pub fn is_valid_version(s: &str) -> bool {
    VERSION_REGEX.is_match(s)
}

/// A validated release version, always carrying its leading `v`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReleaseVersion(String);

impl ReleaseVersion {
    /// Parse and validate a version string
    pub fn parse(s: &str) -> Result<Self> {
        if is_valid_version(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(VersionError::InvalidFormat(s.to_string()).into())
        }
    }

    /// The version as given, e.g. `v1.2.3-beta`
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The prerelease suffix, without the hyphen
    pub fn prerelease(&self) -> Option<&str> {
        VERSION_REGEX
            .captures(&self.0)
            .and_then(|c| c.get(4))
            .map(|m| m.as_str())
    }

    /// Whether the version carries a prerelease suffix
    pub fn is_prerelease(&self) -> bool {
        self.prerelease().is_some()
    }

    /// Strict semver view, used for ordering against existing tags.
    ///
    /// `None` for versions the release grammar accepts but semver does not
    /// (leading zeros, empty dot-separated identifiers).
    pub fn to_semver(&self) -> Option<semver::Version> {
        semver::Version::parse(&self.0[1..]).ok()
    }

    /// Whether this version is strictly greater than `other` under semver ordering.
    ///
    /// Returns `None` when either side cannot be compared.
    pub fn is_newer_than(&self, other: &str) -> Option<bool> {
        let ours = self.to_semver()?;
        let theirs = semver::Version::parse(other.strip_prefix('v').unwrap_or(other)).ok()?;
        Some(ours > theirs)
    }
}

impl std::fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ReleaseVersion {
    type Err = crate::error::LiftoffError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ReleaseVersion {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        Self::parse(&value).map_err(|e| e.to_string())
    }
}

impl From<ReleaseVersion> for String {
    fn from(value: ReleaseVersion) -> Self {
        value.0
    }
}
