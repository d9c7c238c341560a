//! External command execution
//!
//! Two runners implement [`CommandRunner`]:
//! - [`TokioRunner`] spawns through `tokio::process` and never blocks the caller
//! - [`BlockingRunner`] runs `std::process` on the blocking pool, converting
//!   worker panics into [`ProcessError::Aborted`]

use crate::error::ProcessError;
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::{Output, Stdio};

/// A command to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
    pub env: Vec<(String, String)>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            env: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, cwd: Option<PathBuf>) -> Self {
        self.cwd = cwd;
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Render the command line for logs and error messages
    pub fn render(&self) -> String {
        let mut rendered = self.program.clone();
        for arg in &self.args {
            rendered.push(' ');
            rendered.push_str(arg);
        }
        rendered
    }

    fn to_std(&self) -> std::process::Command {
        let mut command = std::process::Command::new(&self.program);
        command.args(&self.args).stdin(Stdio::null());
        if let Some(cwd) = &self.cwd {
            command.current_dir(cwd);
        }
        for (key, value) in &self.env {
            command.env(key, value);
        }
        command
    }
}

/// Captured result of a command that ran to completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when terminated by a signal
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// A successful run with the given stdout
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            status: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// A run that exited with `code` and the given stderr
    pub fn failed(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            status: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    fn from_output(command: &str, output: Output) -> Result<Self, ProcessError> {
        let stdout =
            String::from_utf8(output.stdout).map_err(|source| ProcessError::NonUtf8Output {
                command: command.to_string(),
                stream: "stdout",
                source,
            })?;
        // stderr is only ever shown to the user, a lossy decode is good enough
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        Ok(Self {
            status: output.status.code(),
            stdout,
            stderr,
        })
    }
}

/// Executes external commands
///
/// Implementations must be `Send + Sync` so a single runner can be shared
/// between the tasks spawned for each workflow step.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run a command to completion and capture its output
    async fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, ProcessError>;
}

/// Non-blocking runner backed by `tokio::process`
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioRunner;

#[async_trait]
impl CommandRunner for TokioRunner {
    async fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, ProcessError> {
        let rendered = spec.render();
        log::debug!("Running (async): {}", rendered);

        let output = tokio::process::Command::from(spec.to_std())
            .output()
            .await
            .map_err(|source| ProcessError::Spawn {
                command: rendered.clone(),
                source,
            })?;

        let output = CommandOutput::from_output(&rendered, output)?;
        log::debug!("`{}` exited with {:?}", rendered, output.status);
        Ok(output)
    }
}

/// Runner for blocking `std::process` invocations
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockingRunner;

impl BlockingRunner {
    /// Run a command on the current thread
    pub fn run_sync(spec: &CommandSpec) -> Result<CommandOutput, ProcessError> {
        let rendered = spec.render();
        log::debug!("Running (blocking): {}", rendered);

        let output = spec
            .to_std()
            .output()
            .map_err(|source| ProcessError::Spawn {
                command: rendered.clone(),
                source,
            })?;

        let output = CommandOutput::from_output(&rendered, output)?;
        log::debug!("`{}` exited with {:?}", rendered, output.status);
        Ok(output)
    }
}

#[async_trait]
impl CommandRunner for BlockingRunner {
    async fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, ProcessError> {
        let owned = spec.clone();
        tokio::task::spawn_blocking(move || Self::run_sync(&owned))
            .await
            .map_err(|join_err| ProcessError::Aborted {
                command: spec.render(),
                message: join_err.to_string(),
            })?
    }
}
