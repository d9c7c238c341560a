//! # tb-flow
//!
//! The interactive branch-creation workflow: a text prompt, a base branch
//! selector and the state machine that strings them together with the issue
//! tracker and git.
//!
//! ## Design Principles
//!
//! This crate is **instrumented**. The state machines receive inputs and emit
//! effects without touching the terminal or running commands, so:
//!
//! - every transition is testable without a terminal
//! - the host decides how prompts look and where notifications go
//! - tool calls can run on any executor
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tb_flow::{BranchFlow, FlowInput, FlowServices, FlowSettings};
//!
//! let mut flow = BranchFlow::new(FlowSettings::from_config(&config));
//! let services = FlowServices::from_config(&config);
//!
//! for effect in flow.handle(FlowInput::Start) {
//!     if effect.is_ui() {
//!         // open prompt / selector, show notification
//!     } else if let Some(input) = services.perform(effect).await {
//!         flow.handle(input);
//!     }
//! }
//! ```

pub mod executor;
pub mod flow;
pub mod notification;
pub mod plan;
pub mod prompt;
pub mod selector;

pub use executor::FlowServices;
pub use flow::{
    BranchFlow, EnvironmentReport, ExecutionReport, ExecutionRequest, FlowEffect, FlowInput,
    FlowOutcome, FlowSettings, FlowState,
};
pub use notification::{Notification, Severity};
pub use plan::{BaseBranchChoice, BranchPlan, ReadyPlan};
pub use prompt::{PromptEdit, PromptId, PromptOutcome, PromptState, PromptTrigger};
pub use selector::{SelectorInput, SelectorOutcome, SelectorState};
