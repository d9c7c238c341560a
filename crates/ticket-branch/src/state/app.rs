//! Application State

use super::{FlowStatus, StatusBarState};
use std::sync::Arc;
use tb_config::AppConfig;
use tb_flow::{PromptState, SelectorState};

#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    /// Open text prompt, if any
    pub prompt: Option<PromptState>,
    /// Open base branch selector, if any
    pub selector: Option<SelectorState>,
    pub flow: FlowStatus,
    pub status_bar: StatusBarState,
    /// Read once at startup
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self {
            running: true,
            prompt: None,
            selector: None,
            flow: FlowStatus::default(),
            status_bar: StatusBarState::default(),
            config,
        }
    }

    /// A prompt that still accepts input
    pub fn open_prompt(&self) -> Option<&PromptState> {
        self.prompt.as_ref().filter(|prompt| !prompt.is_closed())
    }

    /// A selector that still accepts input
    pub fn open_selector(&self) -> Option<&SelectorState> {
        self.selector.as_ref().filter(|selector| !selector.is_closed())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(AppConfig::default()))
    }
}
