//! Error types for external command execution

use thiserror::Error;

/// Failure to run an external command at all.
///
/// A command that runs and exits non-zero is not a `ProcessError`; callers
/// inspect [`CommandOutput::success`](crate::CommandOutput::success) instead.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The executable could not be started (missing binary, bad cwd, ...)
    #[error("failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The command wrote bytes that are not valid UTF-8
    #[error("`{command}` wrote invalid UTF-8 to {stream}")]
    NonUtf8Output {
        command: String,
        stream: &'static str,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// The blocking worker running the command panicked or was cancelled
    #[error("`{command}` was aborted: {message}")]
    Aborted { command: String, message: String },
}

/// Failure of a single git step
#[derive(Debug, Error)]
pub enum GitError {
    #[error(transparent)]
    Process(#[from] ProcessError),

    /// git ran and exited non-zero
    #[error("`{command}` failed: {stderr}")]
    StepFailed {
        command: String,
        status: Option<i32>,
        stderr: String,
    },
}

impl GitError {
    /// The git command line that was attempted
    pub fn command(&self) -> &str {
        match self {
            GitError::Process(ProcessError::Spawn { command, .. })
            | GitError::Process(ProcessError::NonUtf8Output { command, .. })
            | GitError::Process(ProcessError::Aborted { command, .. })
            | GitError::StepFailed { command, .. } => command,
        }
    }

    /// What went wrong without the command line: git's stderr for a failed step
    pub fn reason(&self) -> String {
        match self {
            GitError::StepFailed { stderr, status, .. } if stderr.is_empty() => {
                format!("exit status {:?}", status)
            }
            GitError::StepFailed { stderr, .. } => stderr.clone(),
            GitError::Process(e) => e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_spawn_error_mentions_command_and_source() {
        let err = ProcessError::Spawn {
            command: "jira me".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("failed to start `jira me`"));
        assert!(rendered.contains("no such file"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_step_failed_renders_stderr() {
        let err = GitError::StepFailed {
            command: "git checkout development".to_string(),
            status: Some(1),
            stderr: "error: pathspec 'development' did not match".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "`git checkout development` failed: error: pathspec 'development' did not match"
        );
        assert_eq!(err.command(), "git checkout development");
        assert_eq!(err.reason(), "error: pathspec 'development' did not match");
    }

    #[test]
    fn test_process_error_converts_into_git_error() {
        let err: GitError = ProcessError::Aborted {
            command: "git push".to_string(),
            message: "task panicked".to_string(),
        }
        .into();
        assert_eq!(err.command(), "git push");
        assert!(err.to_string().contains("task panicked"));
    }
}
