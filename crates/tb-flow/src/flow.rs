//! Branch creation state machine
//!
//! [`BranchFlow`] walks one ticket from the first prompt to a checked-out
//! branch. It never performs I/O: every step is requested as a [`FlowEffect`]
//! and its result comes back as a [`FlowInput`].
//!
//! ```text
//! Idle → CheckEnvironment → AwaitTicket → ResolveTitle → AwaitBranchName
//!                                                            ▲      │
//!                                      invalid choice /      │      ▼
//!                                      missing base ─────────┤ AwaitBaseBranch
//!                                                            │      │
//!                                                            └ ValidateBase
//!                                                                   │
//!                                        Done ← Execute ← ValidateExisting
//! ```
//!
//! `Cancelled` and `Failed` are reachable from every waiting state and absorb
//! all further input.

use crate::notification::Notification;
use crate::plan::BranchPlan;
use crate::prompt::{PromptId, PromptOutcome};
use crate::selector::SelectorOutcome;
use tb_client::{Availability, BranchLocation, Resolution, ResolveNotice};
use tb_config::{AppConfig, NotificationConfig};

pub const TICKET_LABEL: &str = "Ticket";
pub const BRANCH_NAME_LABEL: &str = "Branch name";
pub const BASE_BRANCH_TITLE: &str = "Base branch";

/// Read-only inputs of a workflow run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowSettings {
    pub branches: Vec<String>,
    pub tracker_enabled: bool,
    pub notifications: NotificationConfig,
}

impl FlowSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            branches: config.branches.clone(),
            tracker_enabled: config.issue_tracker.enabled,
            notifications: config.notifications.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    CheckEnvironment,
    AwaitTicket,
    ResolveTitle,
    AwaitBranchName,
    AwaitBaseBranch,
    ValidateBase,
    ValidateExisting,
    Execute,
    Done,
    Cancelled,
    Failed,
}

impl FlowState {
    pub fn is_terminal(self) -> bool {
        matches!(self, FlowState::Done | FlowState::Cancelled | FlowState::Failed)
    }

    /// Started and not yet finished
    pub fn is_active(self) -> bool {
        !self.is_terminal() && self != FlowState::Idle
    }
}

/// Result of the environment check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentReport {
    /// Whether the working directory is a git work tree, or why that is unknown
    pub repository: Result<bool, String>,
    /// Probe result, `None` when the tracker is disabled
    pub tracker: Option<Availability>,
}

/// Result of executing the plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionReport {
    Switched { branch: String },
    Created { branch: String, base: String },
    /// Branch created and checked out, push rejected
    PushFailed {
        branch: String,
        base: String,
        reason: String,
    },
    /// A checkout or branch creation step failed
    Failed { error: String },
}

/// Inputs the state machine consumes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowInput {
    Start,
    EnvironmentChecked(EnvironmentReport),
    PromptClosed { id: PromptId, outcome: PromptOutcome },
    TitleResolved(Resolution),
    BaseSelected(SelectorOutcome),
    BaseChecked(Result<BranchLocation, String>),
    ExistingChecked(Result<BranchLocation, String>),
    Executed(ExecutionReport),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionRequest {
    pub branch: String,
    pub base: String,
    /// Switch to the branch instead of creating it
    pub existing: bool,
}

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome {
    Created { branch: String, base: String },
    CreatedLocally { branch: String, base: String },
    Switched { branch: String },
    Cancelled,
    Failed { error: String },
}

/// Work requested by the state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowEffect {
    // === Host UI ===
    OpenPrompt {
        id: PromptId,
        label: String,
        default: String,
    },
    OpenSelector {
        title: String,
        options: Vec<String>,
    },
    Notify(Notification),
    Finished(FlowOutcome),

    // === External tools ===
    CheckEnvironment { probe_tracker: bool },
    ResolveTitle { query: String },
    CheckBase { base: String },
    CheckExisting { branch: String },
    Execute(ExecutionRequest),
}

impl FlowEffect {
    /// Effects the host UI handles itself rather than the executor
    pub fn is_ui(&self) -> bool {
        matches!(
            self,
            FlowEffect::OpenPrompt { .. }
                | FlowEffect::OpenSelector { .. }
                | FlowEffect::Notify(_)
                | FlowEffect::Finished(_)
        )
    }
}

/// One branch creation run
#[derive(Debug, Clone)]
pub struct BranchFlow {
    state: FlowState,
    settings: FlowSettings,
    plan: BranchPlan,
    tracker_available: bool,
}

impl BranchFlow {
    pub fn new(settings: FlowSettings) -> Self {
        Self {
            state: FlowState::Idle,
            settings,
            plan: BranchPlan::default(),
            tracker_available: false,
        }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn plan(&self) -> &BranchPlan {
        &self.plan
    }

    /// Feed one input and collect the effects it causes
    ///
    /// Inputs that do not belong to the current state (late results, stray
    /// prompt outcomes) are ignored.
    pub fn handle(&mut self, input: FlowInput) -> Vec<FlowEffect> {
        match (self.state, input) {
            (FlowState::Idle, FlowInput::Start) => {
                self.transition(FlowState::CheckEnvironment);
                vec![FlowEffect::CheckEnvironment {
                    probe_tracker: self.settings.tracker_enabled,
                }]
            }
            (FlowState::CheckEnvironment, FlowInput::EnvironmentChecked(report)) => {
                self.on_environment(report)
            }
            (
                FlowState::AwaitTicket,
                FlowInput::PromptClosed {
                    id: PromptId::Ticket,
                    outcome,
                },
            ) => self.on_ticket(outcome),
            (FlowState::ResolveTitle, FlowInput::TitleResolved(resolution)) => {
                self.on_title(resolution)
            }
            (
                FlowState::AwaitBranchName,
                FlowInput::PromptClosed {
                    id: PromptId::BranchName,
                    outcome,
                },
            ) => self.on_branch_name(outcome),
            (FlowState::AwaitBaseBranch, FlowInput::BaseSelected(outcome)) => {
                self.on_base_selected(outcome)
            }
            (FlowState::ValidateBase, FlowInput::BaseChecked(result)) => {
                self.on_base_checked(result)
            }
            (FlowState::ValidateExisting, FlowInput::ExistingChecked(result)) => {
                self.on_existing_checked(result)
            }
            (FlowState::Execute, FlowInput::Executed(report)) => self.on_executed(report),
            (state, input) => {
                log::debug!("Ignoring {:?} in state {:?}", input, state);
                Vec::new()
            }
        }
    }

    fn transition(&mut self, next: FlowState) {
        log::info!("Branch flow: {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    fn notify(&self, notification: Notification) -> FlowEffect {
        FlowEffect::Notify(notification.timed(&self.settings.notifications))
    }

    fn cancel(&mut self) -> Vec<FlowEffect> {
        self.plan = BranchPlan::default();
        self.transition(FlowState::Cancelled);
        vec![
            self.notify(Notification::warning("Branch creation cancelled")),
            FlowEffect::Finished(FlowOutcome::Cancelled),
        ]
    }

    fn fail(&mut self, error: String) -> Vec<FlowEffect> {
        log::error!("Branch flow failed: {}", error);
        self.transition(FlowState::Failed);
        vec![
            self.notify(Notification::error(error.clone())),
            FlowEffect::Finished(FlowOutcome::Failed { error }),
        ]
    }

    fn ask_ticket(&mut self) -> FlowEffect {
        self.transition(FlowState::AwaitTicket);
        FlowEffect::OpenPrompt {
            id: PromptId::Ticket,
            label: TICKET_LABEL.to_string(),
            default: String::new(),
        }
    }

    fn ask_branch_name(&mut self) -> FlowEffect {
        self.transition(FlowState::AwaitBranchName);
        FlowEffect::OpenPrompt {
            id: PromptId::BranchName,
            label: BRANCH_NAME_LABEL.to_string(),
            default: self.plan.branch_name_seed(),
        }
    }

    fn on_environment(&mut self, report: EnvironmentReport) -> Vec<FlowEffect> {
        match report.repository {
            Ok(true) => {}
            Ok(false) => return self.fail("Not inside a git repository".to_string()),
            Err(e) => return self.fail(format!("git is not usable: {}", e)),
        }

        let mut effects = Vec::new();
        let tracker_available = match report.tracker {
            Some(Availability::Available { .. }) => true,
            Some(Availability::Unavailable { reason }) => {
                effects.push(self.notify(Notification::warning(format!(
                    "Issue tracker unavailable: {}",
                    reason
                ))));
                false
            }
            None => false,
        };
        self.tracker_available = tracker_available;

        effects.push(self.ask_ticket());
        effects
    }

    fn on_ticket(&mut self, outcome: PromptOutcome) -> Vec<FlowEffect> {
        let Some(ticket) = outcome.into_text() else {
            return self.cancel();
        };
        self.plan.ticket = Some(ticket.clone());

        if !self.tracker_available {
            return vec![self.ask_branch_name()];
        }

        self.transition(FlowState::ResolveTitle);
        vec![
            FlowEffect::Notify(
                Notification::info("Fetching ticket title…")
                    .with_duration(self.settings.notifications.progress_duration()),
            ),
            FlowEffect::ResolveTitle { query: ticket },
        ]
    }

    fn on_title(&mut self, resolution: Resolution) -> Vec<FlowEffect> {
        let mut effects: Vec<FlowEffect> = resolution
            .notices
            .into_iter()
            .map(|notice| match notice {
                ResolveNotice::TrackerUnavailable { reason } => {
                    Notification::warning(format!("Issue tracker unavailable: {}", reason))
                }
                ResolveNotice::NotFound { query, .. } => Notification::warning(format!(
                    "Ticket {} not found, using it as the branch name",
                    query
                )),
            })
            .map(|notification| self.notify(notification))
            .collect();

        self.plan.title = Some(resolution.title);
        effects.push(self.ask_branch_name());
        effects
    }

    fn on_branch_name(&mut self, outcome: PromptOutcome) -> Vec<FlowEffect> {
        let Some(name) = outcome.into_text() else {
            return self.cancel();
        };
        self.plan.branch_name = Some(name.trim().to_string());

        self.transition(FlowState::AwaitBaseBranch);
        vec![FlowEffect::OpenSelector {
            title: BASE_BRANCH_TITLE.to_string(),
            options: self.settings.branches.clone(),
        }]
    }

    /// Back to the branch name prompt, keeping what was typed
    fn backtrack(&mut self, warning: String) -> Vec<FlowEffect> {
        self.plan.base_branch = None;
        vec![
            self.notify(Notification::warning(warning)),
            self.ask_branch_name(),
        ]
    }

    fn on_base_selected(&mut self, outcome: SelectorOutcome) -> Vec<FlowEffect> {
        let base = match outcome {
            SelectorOutcome::Selected(choice) => choice.resolve(&self.settings.branches),
            SelectorOutcome::Dismissed => None,
        };
        let Some(base) = base.map(str::to_string) else {
            return self.backtrack("Invalid base branch selection".to_string());
        };

        self.plan.base_branch = Some(base.clone());
        self.transition(FlowState::ValidateBase);
        vec![FlowEffect::CheckBase { base }]
    }

    fn on_base_checked(&mut self, result: Result<BranchLocation, String>) -> Vec<FlowEffect> {
        let base = self.plan.base_branch.clone().unwrap_or_default();
        match result {
            Ok(location) if location.exists() => {
                let branch = self.plan.branch_name.clone().unwrap_or_default();
                self.transition(FlowState::ValidateExisting);
                vec![FlowEffect::CheckExisting { branch }]
            }
            Ok(_) => self.backtrack(format!("Base branch '{}' does not exist", base)),
            Err(e) => self.fail(e),
        }
    }

    fn on_existing_checked(&mut self, result: Result<BranchLocation, String>) -> Vec<FlowEffect> {
        let existing = match result {
            Ok(location) => location.exists(),
            Err(e) => {
                // Execute reports the failing git step if the branch is unusable
                log::warn!("Existing branch check failed, assuming a new branch: {}", e);
                false
            }
        };
        let Some(ready) = self.plan.take_ready() else {
            return self.fail("Branch plan is incomplete".to_string());
        };

        self.transition(FlowState::Execute);
        vec![FlowEffect::Execute(ExecutionRequest {
            branch: ready.branch_name,
            base: ready.base_branch,
            existing,
        })]
    }

    fn on_executed(&mut self, report: ExecutionReport) -> Vec<FlowEffect> {
        let (notification, outcome) = match report {
            ExecutionReport::Switched { branch } => (
                Notification::info(format!("Switching to existing branch {}", branch)),
                FlowOutcome::Switched { branch },
            ),
            ExecutionReport::Created { branch, base } => (
                Notification::info(format!("Created and pushed branch {} from {}", branch, base)),
                FlowOutcome::Created { branch, base },
            ),
            ExecutionReport::PushFailed {
                branch,
                base,
                reason,
            } => (
                Notification::warning(format!(
                    "Branch {} created locally, push failed: {}",
                    branch, reason
                )),
                FlowOutcome::CreatedLocally { branch, base },
            ),
            ExecutionReport::Failed { error } => return self.fail(error),
        };

        self.transition(FlowState::Done);
        vec![self.notify(notification), FlowEffect::Finished(outcome)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::Severity;
    use crate::plan::BaseBranchChoice;
    use pretty_assertions::assert_eq;
    use tb_client::ResolvedTitle;

    fn flow() -> BranchFlow {
        BranchFlow::new(FlowSettings::from_config(&AppConfig::default()))
    }

    fn available() -> EnvironmentReport {
        EnvironmentReport {
            repository: Ok(true),
            tracker: Some(Availability::Available {
                user: "jdoe".into(),
            }),
        }
    }

    fn confirm(id: PromptId, text: &str) -> FlowInput {
        FlowInput::PromptClosed {
            id,
            outcome: PromptOutcome::Confirmed(text.to_string()),
        }
    }

    fn messages(effects: &[FlowEffect]) -> Vec<(Severity, String)> {
        effects
            .iter()
            .filter_map(|effect| match effect {
                FlowEffect::Notify(n) => Some((n.level, n.message.clone())),
                _ => None,
            })
            .collect()
    }

    fn prompt_default(effects: &[FlowEffect]) -> Option<(PromptId, String)> {
        effects.iter().find_map(|effect| match effect {
            FlowEffect::OpenPrompt { id, default, .. } => Some((*id, default.clone())),
            _ => None,
        })
    }

    /// Drive a flow up to the base branch selector with `branch` entered
    fn at_base_selection(branch: &str) -> BranchFlow {
        let mut flow = flow();
        flow.handle(FlowInput::Start);
        flow.handle(FlowInput::EnvironmentChecked(available()));
        flow.handle(confirm(PromptId::Ticket, "FEAT-123"));
        flow.handle(FlowInput::TitleResolved(Resolution {
            title: ResolvedTitle::Matched("FEAT-123-add-login".into()),
            notices: vec![],
        }));
        flow.handle(confirm(PromptId::BranchName, branch));
        assert_eq!(flow.state(), FlowState::AwaitBaseBranch);
        flow
    }

    #[test]
    fn test_start_checks_environment_first() {
        let mut flow = flow();
        assert_eq!(
            flow.handle(FlowInput::Start),
            vec![FlowEffect::CheckEnvironment {
                probe_tracker: true
            }]
        );
        assert_eq!(flow.state(), FlowState::CheckEnvironment);
        assert!(flow.state().is_active());
    }

    #[test]
    fn test_not_a_repository_fails_before_any_prompt() {
        let mut flow = flow();
        flow.handle(FlowInput::Start);
        let effects = flow.handle(FlowInput::EnvironmentChecked(EnvironmentReport {
            repository: Ok(false),
            tracker: None,
        }));
        assert_eq!(flow.state(), FlowState::Failed);
        assert_eq!(prompt_default(&effects), None);
        assert_eq!(
            messages(&effects),
            vec![(Severity::Error, "Not inside a git repository".to_string())]
        );
    }

    #[test]
    fn test_ticket_cancel_finishes_with_warning() {
        for outcome in [PromptOutcome::Cancelled, PromptOutcome::Confirmed("   ".into())] {
            let mut flow = flow();
            flow.handle(FlowInput::Start);
            flow.handle(FlowInput::EnvironmentChecked(available()));
            let effects = flow.handle(FlowInput::PromptClosed {
                id: PromptId::Ticket,
                outcome,
            });
            assert_eq!(flow.state(), FlowState::Cancelled);
            assert_eq!(
                messages(&effects),
                vec![(Severity::Warning, "Branch creation cancelled".to_string())]
            );
            assert_eq!(
                effects.last(),
                Some(&FlowEffect::Finished(FlowOutcome::Cancelled))
            );
        }
    }

    #[test]
    fn test_ticket_triggers_title_resolution_with_progress_notice() {
        let mut flow = flow();
        flow.handle(FlowInput::Start);
        flow.handle(FlowInput::EnvironmentChecked(available()));
        let effects = flow.handle(confirm(PromptId::Ticket, " ABC-42 "));

        assert_eq!(flow.state(), FlowState::ResolveTitle);
        match &effects[0] {
            FlowEffect::Notify(n) => {
                assert_eq!(n.message, "Fetching ticket title…");
                assert_eq!(n.duration, Some(std::time::Duration::from_secs(2)));
            }
            other => panic!("expected progress notice, got {other:?}"),
        }
        assert_eq!(
            effects[1],
            FlowEffect::ResolveTitle {
                query: " ABC-42 ".into()
            }
        );
    }

    #[test]
    fn test_unavailable_tracker_warns_once_and_skips_resolution() {
        let mut flow = flow();
        flow.handle(FlowInput::Start);
        let effects = flow.handle(FlowInput::EnvironmentChecked(EnvironmentReport {
            repository: Ok(true),
            tracker: Some(Availability::Unavailable {
                reason: "not logged in".into(),
            }),
        }));
        assert_eq!(
            messages(&effects),
            vec![(
                Severity::Warning,
                "Issue tracker unavailable: not logged in".to_string()
            )]
        );

        let effects = flow.handle(confirm(PromptId::Ticket, "ABC-42"));
        assert_eq!(flow.state(), FlowState::AwaitBranchName);
        assert!(messages(&effects).is_empty());
        assert_eq!(
            prompt_default(&effects),
            Some((PromptId::BranchName, "ABC-42".to_string()))
        );
    }

    #[test]
    fn test_not_found_notice_is_forwarded_and_query_seeds_prompt() {
        let mut flow = flow();
        flow.handle(FlowInput::Start);
        flow.handle(FlowInput::EnvironmentChecked(available()));
        flow.handle(confirm(PromptId::Ticket, "ABC-42"));
        let effects = flow.handle(FlowInput::TitleResolved(Resolution {
            title: ResolvedTitle::Fallback("ABC-42".into()),
            notices: vec![ResolveNotice::NotFound {
                query: "ABC-42".into(),
                pages_searched: 4,
            }],
        }));
        assert_eq!(
            messages(&effects),
            vec![(
                Severity::Warning,
                "Ticket ABC-42 not found, using it as the branch name".to_string()
            )]
        );
        assert_eq!(
            prompt_default(&effects),
            Some((PromptId::BranchName, "ABC-42".to_string()))
        );
    }

    #[test]
    fn test_out_of_range_choice_backtracks_with_text_preserved() {
        let mut flow = at_base_selection("FEAT-123-add-login");
        let effects = flow.handle(FlowInput::BaseSelected(SelectorOutcome::Selected(
            BaseBranchChoice::new(0),
        )));

        assert_eq!(flow.state(), FlowState::AwaitBranchName);
        assert_eq!(
            messages(&effects),
            vec![(Severity::Warning, "Invalid base branch selection".to_string())]
        );
        assert_eq!(
            prompt_default(&effects),
            Some((PromptId::BranchName, "FEAT-123-add-login".to_string()))
        );
    }

    #[test]
    fn test_dismissed_selector_backtracks() {
        let mut flow = at_base_selection("FEAT-123-add-login");
        flow.handle(FlowInput::BaseSelected(SelectorOutcome::Dismissed));
        assert_eq!(flow.state(), FlowState::AwaitBranchName);
    }

    #[test]
    fn test_edited_name_survives_repeated_backtracking() {
        let mut flow = at_base_selection("FEAT-123-login");
        flow.handle(FlowInput::BaseSelected(SelectorOutcome::Selected(
            BaseBranchChoice::new(9),
        )));
        flow.handle(confirm(PromptId::BranchName, "FEAT-123-login-v2"));
        let effects = flow.handle(FlowInput::BaseSelected(SelectorOutcome::Selected(
            BaseBranchChoice::new(0),
        )));
        assert_eq!(
            prompt_default(&effects),
            Some((PromptId::BranchName, "FEAT-123-login-v2".to_string()))
        );
    }

    #[test]
    fn test_missing_base_backtracks() {
        let mut flow = at_base_selection("FEAT-123-add-login");
        let effects = flow.handle(FlowInput::BaseSelected(SelectorOutcome::Selected(
            BaseBranchChoice::new(3),
        )));
        assert_eq!(
            effects,
            vec![FlowEffect::CheckBase {
                base: "pre-production".into()
            }]
        );

        let effects = flow.handle(FlowInput::BaseChecked(Ok(BranchLocation::Missing)));
        assert_eq!(flow.state(), FlowState::AwaitBranchName);
        assert_eq!(
            messages(&effects),
            vec![(
                Severity::Warning,
                "Base branch 'pre-production' does not exist".to_string()
            )]
        );
        assert_eq!(flow.plan().base_branch, None);
        assert_eq!(
            prompt_default(&effects),
            Some((PromptId::BranchName, "FEAT-123-add-login".to_string()))
        );
    }

    #[test]
    fn test_existing_branch_selects_switch() {
        let mut flow = at_base_selection("ABC-42-fix-crash");
        flow.handle(FlowInput::BaseSelected(SelectorOutcome::Selected(
            BaseBranchChoice::new(1),
        )));
        flow.handle(FlowInput::BaseChecked(Ok(BranchLocation::Remote)));
        let effects = flow.handle(FlowInput::ExistingChecked(Ok(BranchLocation::Local)));

        assert_eq!(
            effects,
            vec![FlowEffect::Execute(ExecutionRequest {
                branch: "ABC-42-fix-crash".into(),
                base: "development".into(),
                existing: true,
            })]
        );
        assert_eq!(flow.plan(), &BranchPlan::default());
    }

    #[test]
    fn test_failed_existing_check_creates_the_branch() {
        let mut flow = at_base_selection("ABC-1-x");
        flow.handle(FlowInput::BaseSelected(SelectorOutcome::Selected(
            BaseBranchChoice::new(2),
        )));
        flow.handle(FlowInput::BaseChecked(Ok(BranchLocation::Local)));
        let effects = flow.handle(FlowInput::ExistingChecked(Err(
            "failed to start `git rev-parse --verify --quiet ABC-1-x`".into(),
        )));

        assert_eq!(flow.state(), FlowState::Execute);
        assert_eq!(
            effects,
            vec![FlowEffect::Execute(ExecutionRequest {
                branch: "ABC-1-x".into(),
                base: "master".into(),
                existing: false,
            })]
        );
    }

    #[test]
    fn test_push_failure_is_a_warning_not_a_failure() {
        let mut flow = at_base_selection("ABC-42-fix-crash");
        flow.handle(FlowInput::BaseSelected(SelectorOutcome::Selected(
            BaseBranchChoice::new(1),
        )));
        flow.handle(FlowInput::BaseChecked(Ok(BranchLocation::Local)));
        flow.handle(FlowInput::ExistingChecked(Ok(BranchLocation::Missing)));
        let effects = flow.handle(FlowInput::Executed(ExecutionReport::PushFailed {
            branch: "ABC-42-fix-crash".into(),
            base: "development".into(),
            reason: "permission denied".into(),
        }));

        assert_eq!(flow.state(), FlowState::Done);
        assert_eq!(
            messages(&effects),
            vec![(
                Severity::Warning,
                "Branch ABC-42-fix-crash created locally, push failed: permission denied"
                    .to_string()
            )]
        );
    }

    #[test]
    fn test_checkout_failure_fails_the_run() {
        let mut flow = at_base_selection("ABC-42-fix-crash");
        flow.handle(FlowInput::BaseSelected(SelectorOutcome::Selected(
            BaseBranchChoice::new(1),
        )));
        flow.handle(FlowInput::BaseChecked(Ok(BranchLocation::Local)));
        flow.handle(FlowInput::ExistingChecked(Ok(BranchLocation::Missing)));
        let effects = flow.handle(FlowInput::Executed(ExecutionReport::Failed {
            error: "`git checkout development` failed: local changes".into(),
        }));

        assert_eq!(flow.state(), FlowState::Failed);
        assert_eq!(
            effects.last(),
            Some(&FlowEffect::Finished(FlowOutcome::Failed {
                error: "`git checkout development` failed: local changes".into()
            }))
        );
    }

    #[test]
    fn test_stray_inputs_are_ignored() {
        let mut flow = at_base_selection("ABC-42-x");
        // late prompt result from an earlier step
        assert!(flow.handle(confirm(PromptId::Ticket, "OTHER-1")).is_empty());
        assert!(flow
            .handle(FlowInput::BaseChecked(Ok(BranchLocation::Local)))
            .is_empty());
        assert_eq!(flow.state(), FlowState::AwaitBaseBranch);

        flow.handle(FlowInput::BaseSelected(SelectorOutcome::Dismissed));
        flow.handle(FlowInput::PromptClosed {
            id: PromptId::BranchName,
            outcome: PromptOutcome::Cancelled,
        });
        assert_eq!(flow.state(), FlowState::Cancelled);
        assert!(flow.handle(FlowInput::Start).is_empty());
        assert!(flow
            .handle(FlowInput::BaseSelected(SelectorOutcome::Dismissed))
            .is_empty());
        assert_eq!(flow.state(), FlowState::Cancelled);
    }

    #[test]
    fn test_ui_effect_classification() {
        assert!(FlowEffect::Notify(Notification::info("x")).is_ui());
        assert!(FlowEffect::Finished(FlowOutcome::Cancelled).is_ui());
        assert!(!FlowEffect::CheckBase {
            base: "master".into()
        }
        .is_ui());
    }
}
