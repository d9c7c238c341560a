//! Executes the non-UI effects of a [`BranchFlow`](crate::BranchFlow)
//!
//! Each effect maps to one async call and yields the [`FlowInput`] to feed
//! back into the state machine. Nothing here fails: tool errors are folded
//! into the returned input.

use crate::flow::{EnvironmentReport, ExecutionReport, ExecutionRequest, FlowEffect, FlowInput};
use std::sync::Arc;
use tb_client::{
    BlockingRunner, CommandRunner, GitCli, IssueTrackerCli, TicketResolver, TokioRunner,
};
use tb_config::AppConfig;

/// git and issue tracker access for a workflow run
#[derive(Debug, Clone)]
pub struct FlowServices {
    git: GitCli,
    resolver: TicketResolver,
}

impl FlowServices {
    /// Real tools: git on the blocking pool, the tracker on tokio's process driver
    pub fn from_config(config: &AppConfig) -> Self {
        Self::with_runners(Arc::new(BlockingRunner), Arc::new(TokioRunner), config)
    }

    pub fn with_runners(
        git_runner: Arc<dyn CommandRunner>,
        tracker_runner: Arc<dyn CommandRunner>,
        config: &AppConfig,
    ) -> Self {
        let git = GitCli::new(git_runner, config.git_binary.clone(), config.remote.clone());
        let tracker = IssueTrackerCli::from_config(tracker_runner, &config.issue_tracker);
        Self {
            git,
            resolver: TicketResolver::from_config(tracker, &config.issue_tracker),
        }
    }

    /// Perform `effect`, or return `None` for effects the host UI handles
    pub async fn perform(&self, effect: FlowEffect) -> Option<FlowInput> {
        let input = match effect {
            FlowEffect::CheckEnvironment { probe_tracker } => {
                FlowInput::EnvironmentChecked(self.check_environment(probe_tracker).await)
            }
            FlowEffect::ResolveTitle { query } => {
                // availability was probed by the environment check
                FlowInput::TitleResolved(self.resolver.search(&query).await)
            }
            FlowEffect::CheckBase { base } => FlowInput::BaseChecked(
                self.git.branch_exists(&base).await.map_err(|e| e.to_string()),
            ),
            FlowEffect::CheckExisting { branch } => FlowInput::ExistingChecked(
                self.git
                    .branch_exists(&branch)
                    .await
                    .map_err(|e| e.to_string()),
            ),
            FlowEffect::Execute(request) => FlowInput::Executed(self.execute(request).await),
            FlowEffect::OpenPrompt { .. }
            | FlowEffect::OpenSelector { .. }
            | FlowEffect::Notify(_)
            | FlowEffect::Finished(_) => return None,
        };
        Some(input)
    }

    async fn check_environment(&self, probe_tracker: bool) -> EnvironmentReport {
        let repository = self.git.is_repository().await.map_err(|e| e.to_string());
        let tracker = match (&repository, probe_tracker) {
            (Ok(true), true) => Some(self.resolver.tracker().probe().await),
            _ => None,
        };
        EnvironmentReport {
            repository,
            tracker,
        }
    }

    async fn execute(&self, request: ExecutionRequest) -> ExecutionReport {
        let ExecutionRequest {
            branch,
            base,
            existing,
        } = request;

        if existing {
            return match self.git.checkout(&branch).await {
                Ok(()) => ExecutionReport::Switched { branch },
                Err(e) => ExecutionReport::Failed {
                    error: e.to_string(),
                },
            };
        }

        if let Err(e) = self.git.checkout(&base).await {
            return ExecutionReport::Failed {
                error: e.to_string(),
            };
        }
        if let Err(e) = self.git.create_branch(&branch).await {
            return ExecutionReport::Failed {
                error: e.to_string(),
            };
        }

        match self.git.push_upstream(&branch).await {
            Ok(()) => ExecutionReport::Created { branch, base },
            Err(e) => {
                log::warn!("Push of {} failed: {}", branch, e);
                ExecutionReport::PushFailed {
                    branch,
                    base,
                    reason: e.reason(),
                }
            }
        }
    }
}
