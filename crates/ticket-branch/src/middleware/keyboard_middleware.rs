//! KeyboardMiddleware - translates terminal input into targeted actions
//!
//! Routing depends on what currently has the user's attention:
//!
//! 1. **Prompt open**: keys edit the buffer; Enter, Esc and Ctrl+C close it.
//!    Ctrl+C cancels the prompt instead of quitting.
//! 2. **Selector open**: digits and arrows pick a base branch; Esc and Ctrl+C
//!    dismiss it.
//! 3. **Main screen**: `n` starts a new run, `q` and Ctrl+C quit.
//!
//! Focus loss closes an open prompt as cancelled.

use crate::actions::{Action, FlowAction, GlobalAction, PromptAction, SelectorAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tb_flow::{PromptEdit, PromptTrigger, SelectorInput};

pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

fn is_ctrl(key: &KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}

/// Prompt key bindings
fn prompt_action(key: &KeyEvent) -> Option<PromptAction> {
    if is_ctrl(key, 'c') {
        return Some(PromptAction::Finish(PromptTrigger::Quit));
    }
    if is_ctrl(key, 'u') {
        return Some(PromptAction::Edit(PromptEdit::ClearLine));
    }
    if is_ctrl(key, 'a') {
        return Some(PromptAction::Edit(PromptEdit::CursorHome));
    }
    if is_ctrl(key, 'e') {
        return Some(PromptAction::Edit(PromptEdit::CursorEnd));
    }

    let action = match key.code {
        KeyCode::Enter => PromptAction::Finish(PromptTrigger::Confirm),
        KeyCode::Esc => PromptAction::Finish(PromptTrigger::Cancel),
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            PromptAction::Edit(PromptEdit::Insert(c))
        }
        // Cmd+Backspace on Mac - clear entire line
        KeyCode::Backspace if key.modifiers.contains(KeyModifiers::SUPER) => {
            PromptAction::Edit(PromptEdit::ClearLine)
        }
        KeyCode::Backspace => PromptAction::Edit(PromptEdit::Backspace),
        KeyCode::Delete => PromptAction::Edit(PromptEdit::Delete),
        KeyCode::Left => PromptAction::Edit(PromptEdit::CursorLeft),
        KeyCode::Right => PromptAction::Edit(PromptEdit::CursorRight),
        KeyCode::Home => PromptAction::Edit(PromptEdit::CursorHome),
        KeyCode::End => PromptAction::Edit(PromptEdit::CursorEnd),
        _ => return None,
    };
    Some(action)
}

/// Selector key bindings
fn selector_input(key: &KeyEvent) -> Option<SelectorInput> {
    if is_ctrl(key, 'c') {
        return Some(SelectorInput::Dismiss);
    }

    let input = match key.code {
        KeyCode::Char(c) if c.is_ascii_digit() => {
            SelectorInput::Digit(c.to_digit(10).map(|d| d as u8).unwrap_or_default())
        }
        KeyCode::Up | KeyCode::Char('k') => SelectorInput::Up,
        KeyCode::Down | KeyCode::Char('j') => SelectorInput::Down,
        KeyCode::Enter => SelectorInput::Confirm,
        KeyCode::Esc => SelectorInput::Dismiss,
        _ => return None,
    };
    Some(input)
}

/// Main screen key bindings
fn main_screen_action(key: &KeyEvent) -> Option<Action> {
    if is_ctrl(key, 'c') {
        return Some(Action::Global(GlobalAction::Quit));
    }
    match key.code {
        KeyCode::Char('q') => Some(Action::Global(GlobalAction::Quit)),
        KeyCode::Char('n') => Some(Action::Flow(FlowAction::Start)),
        _ => None,
    }
}

impl KeyboardMiddleware {
    fn handle_key(&self, key: &KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
        let action = if state.open_prompt().is_some() {
            prompt_action(key).map(Action::Prompt)
        } else if state.open_selector().is_some() {
            selector_input(key).map(|input| Action::Selector(SelectorAction::Input(input)))
        } else {
            main_screen_action(key)
        };

        match action {
            Some(action) => dispatcher.dispatch(action),
            None => log::debug!("KeyboardMiddleware: unbound key {:?}", key),
        }
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Global(GlobalAction::KeyPressed(key)) => {
                self.handle_key(key, state, dispatcher);
                false
            }
            Action::Global(GlobalAction::Pasted(text)) => {
                if state.open_prompt().is_some() {
                    dispatcher.dispatch(Action::Prompt(PromptAction::Edit(PromptEdit::InsertStr(
                        text.clone(),
                    ))));
                }
                false
            }
            Action::Global(GlobalAction::FocusLost) => {
                if state.open_prompt().is_some() {
                    log::debug!("KeyboardMiddleware: focus lost, cancelling prompt");
                    dispatcher.dispatch(Action::Prompt(PromptAction::Finish(
                        PromptTrigger::FocusLost,
                    )));
                }
                false
            }
            _ => true,
        }
    }
}
