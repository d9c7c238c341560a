//! git CLI client
//!
//! Only the handful of commands the branch workflow needs. Every command runs
//! with `GIT_TERMINAL_PROMPT=0` so a push never hangs on a credential prompt
//! behind the TUI.

use crate::error::GitError;
use crate::process::{CommandOutput, CommandRunner, CommandSpec};
use std::path::PathBuf;
use std::sync::Arc;

/// Where a branch name was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchLocation {
    Local,
    Remote,
    Missing,
}

impl BranchLocation {
    pub fn exists(self) -> bool {
        !matches!(self, BranchLocation::Missing)
    }
}

#[derive(Clone)]
pub struct GitCli {
    runner: Arc<dyn CommandRunner>,
    binary: String,
    cwd: Option<PathBuf>,
    remote: String,
}

impl std::fmt::Debug for GitCli {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitCli")
            .field("binary", &self.binary)
            .field("cwd", &self.cwd)
            .field("remote", &self.remote)
            .finish()
    }
}

impl GitCli {
    pub fn new(
        runner: Arc<dyn CommandRunner>,
        binary: impl Into<String>,
        remote: impl Into<String>,
    ) -> Self {
        Self {
            runner,
            binary: binary.into(),
            cwd: None,
            remote: remote.into(),
        }
    }

    /// Run every command inside `cwd` instead of the process working directory
    pub fn in_dir(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    pub fn remote(&self) -> &str {
        &self.remote
    }

    fn spec<I, S>(&self, args: I) -> CommandSpec
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CommandSpec::new(&self.binary)
            .args(args)
            .current_dir(self.cwd.clone())
            .env("GIT_TERMINAL_PROMPT", "0")
    }

    async fn run<I, S>(&self, args: I) -> Result<CommandOutput, GitError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let spec = self.spec(args);
        let output = self.runner.run(&spec).await?;
        if output.success() {
            Ok(output)
        } else {
            Err(GitError::StepFailed {
                command: spec.render(),
                status: output.status,
                stderr: output.stderr.trim().to_string(),
            })
        }
    }

    /// Whether the working directory is inside a git work tree
    pub async fn is_repository(&self) -> Result<bool, GitError> {
        match self.run(["rev-parse", "--is-inside-work-tree"]).await {
            Ok(output) => Ok(output.stdout.trim() == "true"),
            Err(GitError::StepFailed { stderr, .. }) => {
                log::debug!("Not a git repository: {}", stderr);
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Whether `name` resolves to an object
    pub async fn verify_ref(&self, name: &str) -> Result<bool, GitError> {
        match self.run(["rev-parse", "--verify", "--quiet", name]).await {
            Ok(_) => Ok(true),
            Err(GitError::StepFailed { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Look `name` up locally, then on the configured remote
    pub async fn branch_exists(&self, name: &str) -> Result<BranchLocation, GitError> {
        if self.verify_ref(name).await? {
            return Ok(BranchLocation::Local);
        }
        if self.verify_ref(&format!("{}/{}", self.remote, name)).await? {
            return Ok(BranchLocation::Remote);
        }
        Ok(BranchLocation::Missing)
    }

    pub async fn checkout(&self, branch: &str) -> Result<(), GitError> {
        self.run(["checkout", branch]).await?;
        log::info!("Checked out {}", branch);
        Ok(())
    }

    /// Create `branch` from the current HEAD and switch to it
    pub async fn create_branch(&self, branch: &str) -> Result<(), GitError> {
        self.run(["checkout", "-b", branch]).await?;
        log::info!("Created branch {}", branch);
        Ok(())
    }

    /// Push `branch` and set its upstream on the configured remote
    pub async fn push_upstream(&self, branch: &str) -> Result<(), GitError> {
        self.run(["push", "--set-upstream", self.remote.as_str(), branch])
            .await?;
        log::info!("Pushed {} to {}", branch, self.remote);
        Ok(())
    }
}
