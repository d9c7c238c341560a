//! Issue tracker CLI client
//!
//! Talks to jira-cli (or a compatible tool) through a [`CommandRunner`]:
//! - `<tool> me` probes availability and authentication
//! - `<tool> issue list --plain ...` lists one page of issues

use crate::error::ProcessError;
use crate::process::{CommandOutput, CommandRunner, CommandSpec};
use std::sync::Arc;
use tb_config::IssueTrackerConfig;

/// One page of search results: `start` offset and page `size`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchPage {
    pub start: u32,
    pub size: u32,
}

impl SearchPage {
    /// `start:size`, the jira-cli `--paginate` syntax
    pub fn paginate_arg(&self) -> String {
        format!("{}:{}", self.start, self.size)
    }
}

/// Result of the availability probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    /// Tool installed and authenticated as `user`
    Available { user: String },
    /// Tool missing, unauthenticated or broken
    Unavailable { reason: String },
}

impl Availability {
    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available { .. })
    }
}

/// Escape a ticket query for use inside a double-quoted JQL string
///
/// Backslashes and double quotes are escaped and control characters dropped.
pub fn escape_query(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len());
    for c in query.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            c if c.is_control() => {}
            c => escaped.push(c),
        }
    }
    escaped
}

/// Issue tracker command-line client
#[derive(Clone)]
pub struct IssueTrackerCli {
    runner: Arc<dyn CommandRunner>,
    binary: String,
    extra_args: Vec<String>,
}

impl std::fmt::Debug for IssueTrackerCli {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IssueTrackerCli")
            .field("binary", &self.binary)
            .field("extra_args", &self.extra_args)
            .finish()
    }
}

impl IssueTrackerCli {
    pub fn new(runner: Arc<dyn CommandRunner>, binary: impl Into<String>) -> Self {
        Self {
            runner,
            binary: binary.into(),
            extra_args: Vec::new(),
        }
    }

    pub fn from_config(runner: Arc<dyn CommandRunner>, config: &IssueTrackerConfig) -> Self {
        Self::new(runner, config.binary.clone()).with_extra_args(config.extra_args.clone())
    }

    pub fn with_extra_args(mut self, extra_args: Vec<String>) -> Self {
        self.extra_args = extra_args;
        self
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// Check that the tool is installed and authenticated
    ///
    /// Never fails: every problem is reported as [`Availability::Unavailable`].
    pub async fn probe(&self) -> Availability {
        let spec = CommandSpec::new(&self.binary).arg("me");
        match self.runner.run(&spec).await {
            Ok(output) if output.success() && !output.stdout.trim().is_empty() => {
                let user = output.stdout.trim().to_string();
                log::info!("Issue tracker available, authenticated as {}", user);
                Availability::Available { user }
            }
            Ok(output) => {
                let reason = if output.stderr.trim().is_empty() {
                    format!("`{}` returned no user", spec.render())
                } else {
                    output.stderr.trim().to_string()
                };
                log::warn!("Issue tracker not authenticated: {}", reason);
                Availability::Unavailable { reason }
            }
            Err(e) => {
                log::warn!("Issue tracker not available: {}", e);
                Availability::Unavailable {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Build the listing command for one page filtered by issue key
    pub fn list_spec(&self, query: &str, page: SearchPage) -> CommandSpec {
        let jql = format!("key = \"{}\"", escape_query(query));
        CommandSpec::new(&self.binary)
            .args(["issue", "list", "--plain", "--no-headers", "--paginate"])
            .arg(page.paginate_arg())
            .args(["-q".to_string(), jql])
            .args(self.extra_args.iter().cloned())
    }

    /// List one page of issues matching `query`
    pub async fn list_page(
        &self,
        query: &str,
        page: SearchPage,
    ) -> Result<CommandOutput, ProcessError> {
        self.runner.run(&self.list_spec(query, page)).await
    }
}
