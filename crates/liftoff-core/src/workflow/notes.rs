//! Release notes resolution

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::Result;
use crate::traits::NotesRef;

/// Where the release notes for a run came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotesKind {
    /// An existing file named on the command line
    File,
    /// Literal text given on the command line
    Text,
    /// The built-in template
    Generated,
}

/// Release notes, resolved once before publication.
///
/// Generated notes live in a temporary file that is removed when this value
/// is dropped, whichever way the run ends.
#[derive(Debug)]
pub enum ResolvedNotes {
    /// Path to an existing notes file
    File(PathBuf),
    /// Inline notes text
    Text(String),
    /// Generated notes in a temporary file
    Generated(NamedTempFile),
}

impl ResolvedNotes {
    /// Resolve the optional notes argument.
    ///
    /// An argument naming an existing file is used as a file; any other
    /// argument is literal text; no argument generates notes for `version`.
    pub fn resolve(arg: Option<&str>, version: &str, product: &str) -> Result<Self> {
        match arg {
            Some(arg) if Path::new(arg).is_file() => {
                info!(path = arg, "using release notes file");
                Ok(Self::File(PathBuf::from(arg)))
            }
            Some(arg) => {
                info!(len = arg.len(), "using inline release notes");
                Ok(Self::Text(arg.to_string()))
            }
            None => {
                let mut file = tempfile::Builder::new()
                    .prefix("liftoff-notes-")
                    .suffix(".md")
                    .tempfile()?;
                file.write_all(generate_notes(version, product).as_bytes())?;
                file.flush()?;
                debug!(path = %file.path().display(), "generated release notes");
                Ok(Self::Generated(file))
            }
        }
    }

    /// Kind of notes, without the payload
    pub fn kind(&self) -> NotesKind {
        match self {
            Self::File(_) => NotesKind::File,
            Self::Text(_) => NotesKind::Text,
            Self::Generated(_) => NotesKind::Generated,
        }
    }

    /// Reference handed to the release host
    pub fn to_notes_ref(&self) -> NotesRef {
        match self {
            Self::File(path) => NotesRef::File(path.clone()),
            Self::Text(text) => NotesRef::Text(text.clone()),
            Self::Generated(file) => NotesRef::File(file.path().to_path_buf()),
        }
    }
}

/// Kind of notes an argument would resolve to, without creating anything
pub fn notes_kind_for(arg: Option<&str>) -> NotesKind {
    match arg {
        Some(arg) if Path::new(arg).is_file() => NotesKind::File,
        Some(_) => NotesKind::Text,
        None => NotesKind::Generated,
    }
}

/// Render the built-in release notes for a version
pub fn generate_notes(version: &str, product: &str) -> String {
    format!(
        "## {product} {version}\n\
         \n\
         ### What's new\n\
         \n\
         - See the changelog section of the README for the changes in {version}\n\
         \n\
         ### Upgrading\n\
         \n\
         Update your existing installation of {product} to pick up {version}, \
         or follow the installation section of the README for a fresh install.\n\
         \n\
         ### Full changelog\n\
         \n\
         Compare this tag with the previous release to see every commit.\n"
    )
}
