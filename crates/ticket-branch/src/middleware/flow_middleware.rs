//! Flow Middleware
//!
//! Owns the branch creation state machine of the current run and routes its
//! effects:
//! - prompts, selector and notifications become actions for the UI
//! - git and issue tracker work is spawned on the middleware's tokio runtime,
//!   and the result comes back as `Flow(Input)` through the dispatcher
//!
//! Only one run is active at a time. Inputs tagged with another run number
//! are late results of an abandoned run and are dropped.

use crate::actions::{Action, FlowAction, PromptAction, SelectorAction, StatusBarAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use anyhow::Context;
use std::sync::Arc;
use tb_config::AppConfig;
use tb_flow::{BranchFlow, FlowEffect, FlowInput, FlowServices, FlowSettings};
use tokio::runtime::Runtime;

pub struct FlowMiddleware {
    /// Tokio runtime for git and issue tracker calls
    runtime: Runtime,
    services: Arc<FlowServices>,
    settings: FlowSettings,
    flow: Option<BranchFlow>,
    run: u64,
}

impl FlowMiddleware {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        Self::with_services(config, FlowServices::from_config(config))
    }

    pub fn with_services(config: &AppConfig, services: FlowServices) -> anyhow::Result<Self> {
        Ok(Self {
            runtime: Runtime::new().context("Failed to create tokio runtime")?,
            services: Arc::new(services),
            settings: FlowSettings::from_config(config),
            flow: None,
            run: 0,
        })
    }

    fn is_active(&self) -> bool {
        self.flow
            .as_ref()
            .is_some_and(|flow| flow.state().is_active())
    }

    fn start(&mut self, dispatcher: &Dispatcher) {
        if self.is_active() {
            dispatcher.dispatch(Action::StatusBar(StatusBarAction::info(
                "A branch is already being created",
            )));
            return;
        }

        self.run += 1;
        self.flow = Some(BranchFlow::new(self.settings.clone()));
        log::info!("FlowMiddleware: starting run {}", self.run);
        dispatcher.dispatch(Action::StatusBar(StatusBarAction::Clear));
        dispatcher.dispatch(Action::Flow(FlowAction::Started { run: self.run }));
        self.feed(FlowInput::Start, dispatcher);
    }

    fn feed(&mut self, input: FlowInput, dispatcher: &Dispatcher) {
        let Some(flow) = self.flow.as_mut() else {
            return;
        };
        let effects = flow.handle(input);
        dispatcher.dispatch(Action::Flow(FlowAction::StateChanged {
            run: self.run,
            state: flow.state(),
        }));

        for effect in effects {
            self.route(effect, dispatcher);
        }
    }

    fn route(&self, effect: FlowEffect, dispatcher: &Dispatcher) {
        let action = match effect {
            FlowEffect::OpenPrompt { id, label, default } => {
                Action::Prompt(PromptAction::Open { id, label, default })
            }
            FlowEffect::OpenSelector { title, options } => {
                Action::Selector(SelectorAction::Open { title, options })
            }
            FlowEffect::Notify(notification) => {
                Action::StatusBar(StatusBarAction::Push(notification))
            }
            FlowEffect::Finished(outcome) => {
                log::info!("FlowMiddleware: run {} finished: {:?}", self.run, outcome);
                Action::Flow(FlowAction::Finished {
                    run: self.run,
                    outcome,
                })
            }
            effect => {
                self.spawn(effect, dispatcher);
                return;
            }
        };
        dispatcher.dispatch(action);
    }

    fn spawn(&self, effect: FlowEffect, dispatcher: &Dispatcher) {
        let services = Arc::clone(&self.services);
        let dispatcher = dispatcher.clone();
        let run = self.run;

        self.runtime.spawn(async move {
            log::debug!("FlowMiddleware: performing {:?}", effect);
            if let Some(input) = services.perform(effect).await {
                dispatcher.dispatch(Action::Flow(FlowAction::Input { run, input }));
            }
        });
    }
}

impl Middleware for FlowMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Flow(FlowAction::Start) => {
                self.start(dispatcher);
                false
            }
            Action::Flow(FlowAction::Input { run, input }) => {
                if *run == self.run {
                    self.feed(input.clone(), dispatcher);
                } else {
                    log::debug!(
                        "FlowMiddleware: dropping input of run {} (current {})",
                        run,
                        self.run
                    );
                }
                false
            }
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::prompt_middleware::PromptMiddleware;
    use crate::middleware::selector_middleware::SelectorMiddleware;
    use crate::store::Store;
    use std::time::{Duration, Instant};
    use tb_client::testing::ScriptedRunner;
    use tb_client::CommandOutput;
    use tb_flow::{FlowOutcome, FlowState, PromptId, PromptTrigger, SelectorInput};

    fn store_with(git: ScriptedRunner, config: AppConfig) -> Store {
        let services = FlowServices::with_runners(
            Arc::new(git),
            Arc::new(ScriptedRunner::new()),
            &config,
        );
        let config = Arc::new(config);
        let mut store = Store::new(AppState::new(config.clone()));
        store.add_middleware(Box::new(PromptMiddleware::new()));
        store.add_middleware(Box::new(SelectorMiddleware::new()));
        store.add_middleware(Box::new(
            FlowMiddleware::with_services(&config, services).unwrap(),
        ));
        store
    }

    /// Process queued actions until `done` holds or a timeout expires
    fn wait_for(store: &mut Store, done: impl Fn(&AppState) -> bool) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while !done(store.state()) {
            assert!(Instant::now() < deadline, "timed out: {:?}", store.state().flow);
            std::thread::sleep(Duration::from_millis(5));
            store.process_pending();
        }
    }

    fn type_text(store: &mut Store, text: &str) {
        store.dispatch(Action::Prompt(PromptAction::Edit(
            tb_flow::PromptEdit::ClearLine,
        )));
        store.dispatch(Action::Prompt(PromptAction::Edit(
            tb_flow::PromptEdit::InsertStr(text.to_string()),
        )));
    }

    fn no_tracker() -> AppConfig {
        let mut config = AppConfig::default();
        config.issue_tracker.enabled = false;
        config
    }

    #[test]
    fn test_full_run_through_the_store() {
        let git = ScriptedRunner::new()
            .on_command("git rev-parse --is-inside-work-tree", CommandOutput::ok("true"))
            .on_command("git rev-parse --verify --quiet master", CommandOutput::ok("abc"))
            .on_prefix("git checkout", CommandOutput::ok(""))
            .on_prefix("git push", CommandOutput::ok(""));
        let mut store = store_with(git, no_tracker());

        store.dispatch(Action::Flow(FlowAction::Start));
        wait_for(&mut store, |s| s.open_prompt().is_some());
        assert_eq!(store.state().prompt.as_ref().map(|p| p.id), Some(PromptId::Ticket));

        type_text(&mut store, "ABC-42");
        store.dispatch(Action::Prompt(PromptAction::Finish(PromptTrigger::Confirm)));
        let prompt = store.state().open_prompt().cloned();
        assert_eq!(prompt.as_ref().map(|p| p.id), Some(PromptId::BranchName));
        assert_eq!(prompt.map(|p| p.buffer), Some("ABC-42".to_string()));

        type_text(&mut store, "ABC-42-fix-crash");
        store.dispatch(Action::Prompt(PromptAction::Finish(PromptTrigger::Confirm)));
        assert!(store.state().open_selector().is_some());

        store.dispatch(Action::Selector(SelectorAction::Input(SelectorInput::Digit(2))));
        assert!(store.state().selector.is_none());

        wait_for(&mut store, |s| s.flow.last_outcome.is_some());
        assert_eq!(store.state().flow.state, FlowState::Done);
        assert_eq!(
            store.state().flow.last_outcome,
            Some(FlowOutcome::Created {
                branch: "ABC-42-fix-crash".into(),
                base: "master".into(),
            })
        );
    }

    #[test]
    fn test_start_while_active_is_ignored() {
        let git = ScriptedRunner::new()
            .on_command("git rev-parse --is-inside-work-tree", CommandOutput::ok("true"));
        let mut store = store_with(git, no_tracker());

        store.dispatch(Action::Flow(FlowAction::Start));
        wait_for(&mut store, |s| s.open_prompt().is_some());
        store.dispatch(Action::Flow(FlowAction::Start));

        assert_eq!(store.state().flow.run, 1);
        assert_eq!(
            store
                .state()
                .status_bar
                .messages
                .back()
                .map(|m| m.message.as_str()),
            Some("A branch is already being created")
        );
    }

    #[test]
    fn test_late_input_of_previous_run_is_dropped() {
        let git = ScriptedRunner::new()
            .on_command("git rev-parse --is-inside-work-tree", CommandOutput::ok("true"));
        let mut store = store_with(git, no_tracker());

        store.dispatch(Action::Flow(FlowAction::Start));
        wait_for(&mut store, |s| s.open_prompt().is_some());
        store.dispatch(Action::Prompt(PromptAction::Finish(PromptTrigger::Cancel)));
        assert_eq!(store.state().flow.state, FlowState::Cancelled);

        store.dispatch(Action::Flow(FlowAction::Start));
        wait_for(&mut store, |s| s.open_prompt().is_some());
        store.dispatch(Action::Flow(FlowAction::Input {
            run: 1,
            input: FlowInput::PromptClosed {
                id: PromptId::Ticket,
                outcome: tb_flow::PromptOutcome::Confirmed("STALE-1".into()),
            },
        }));

        assert_eq!(store.state().flow.run, 2);
        assert_eq!(store.state().flow.state, FlowState::AwaitTicket);
        assert!(store.state().open_prompt().is_some());
    }
}
