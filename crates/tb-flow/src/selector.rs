//! Single-choice selector over an ordered list of labels.

use crate::plan::BaseBranchChoice;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorInput {
    /// Digit key, picks the 1-based entry directly
    Digit(u8),
    Up,
    Down,
    /// Enter, picks the highlighted entry
    Confirm,
    /// Esc, Ctrl-C or focus loss
    Dismiss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorOutcome {
    Selected(BaseBranchChoice),
    Dismissed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorState {
    pub title: String,
    pub options: Vec<String>,
    /// 0-based index of the highlighted entry
    pub highlighted: usize,
    closed: bool,
}

impl SelectorState {
    pub fn open(title: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            title: title.into(),
            options,
            highlighted: 0,
            closed: false,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Feed one input. Returns the outcome once, when the selector closes.
    ///
    /// Digits are passed through unchecked; range validation belongs to
    /// whoever interprets the choice.
    pub fn handle(&mut self, input: SelectorInput) -> Option<SelectorOutcome> {
        if self.closed {
            return None;
        }

        let outcome = match input {
            SelectorInput::Up => {
                self.highlighted = self.highlighted.saturating_sub(1);
                return None;
            }
            SelectorInput::Down => {
                if self.highlighted + 1 < self.options.len() {
                    self.highlighted += 1;
                }
                return None;
            }
            SelectorInput::Digit(digit) => {
                SelectorOutcome::Selected(BaseBranchChoice::new(usize::from(digit)))
            }
            SelectorInput::Confirm if self.options.is_empty() => SelectorOutcome::Dismissed,
            SelectorInput::Confirm => {
                SelectorOutcome::Selected(BaseBranchChoice::new(self.highlighted + 1))
            }
            SelectorInput::Dismiss => SelectorOutcome::Dismissed,
        };

        self.closed = true;
        Some(outcome)
    }
}
