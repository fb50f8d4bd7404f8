//! Exit codes for the CLI

use liftoff_core::{ErrorKind, LiftoffError};

/// Exit code for an error that reached `main`.
///
/// Errors that are not a `LiftoffError` (I/O on the working directory,
/// JSON output) are internal.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<LiftoffError>()
        .map(LiftoffError::kind)
        .unwrap_or(ErrorKind::Internal)
        .exit_code()
}

#[cfg(test)]
mod tests {
    use super::*;
    use liftoff_core::error::{GitError, PublishError, VersionError, WorkflowError};

    #[test]
    fn test_liftoff_errors_keep_their_code() {
        let err = anyhow::Error::new(LiftoffError::from(GitError::TagExists("v1.0.0".into())));
        assert_eq!(exit_code(&err), 7);

        let err = anyhow::Error::new(LiftoffError::from(VersionError::InvalidFormat("1.0".into())));
        assert_eq!(exit_code(&err), 4);

        let err = anyhow::Error::new(LiftoffError::from(PublishError::ToolMissing {
            tool: "gh".into(),
            hint: String::new(),
        }));
        assert_eq!(exit_code(&err), 5);

        let err = anyhow::Error::new(LiftoffError::from(WorkflowError::Cancelled("no".into())));
        assert_eq!(exit_code(&err), 130);
    }

    #[test]
    fn test_other_errors_are_internal() {
        let err = anyhow::anyhow!("boom");
        assert_eq!(exit_code(&err), 1);
    }
}
