//! Modal text input prompt
//!
//! A prompt is opened with a label and a default text, edited with
//! [`PromptEdit`]s and closed by exactly one [`PromptTrigger`]. The terminal
//! transition is latched: [`PromptState::finish`] yields an outcome the first
//! time only, so a prompt can never deliver two results.

use tb_config::PromptStyle;

/// Which question a prompt asks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptId {
    Ticket,
    BranchName,
}

/// Editing operations on the prompt buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptEdit {
    Insert(char),
    /// Pasted text, inserted at the cursor
    InsertStr(String),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    ClearLine,
}

/// Events that close a prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptTrigger {
    /// Enter
    Confirm,
    /// Esc
    Cancel,
    /// Ctrl-C while the prompt is open
    Quit,
    /// The terminal lost focus
    FocusLost,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    /// Buffer contents at the time of confirmation, untrimmed
    Confirmed(String),
    Cancelled,
}

impl PromptOutcome {
    /// Confirmed text that is not blank
    pub fn into_text(self) -> Option<String> {
        match self {
            PromptOutcome::Confirmed(text) if !text.trim().is_empty() => Some(text),
            _ => None,
        }
    }
}

/// State of one open prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptState {
    pub id: PromptId,
    pub label: String,
    /// Text being edited
    pub buffer: String,
    /// Text the prompt was opened with
    pub default: String,
    /// Byte offset of the cursor within `buffer`
    pub cursor: usize,
    closed: bool,
}

impl PromptState {
    /// Open a prompt with `default` as initial text and the cursor at the end
    pub fn open(id: PromptId, label: impl Into<String>, default: impl Into<String>) -> Self {
        let default = default.into();
        Self {
            id,
            label: label.into(),
            buffer: default.clone(),
            cursor: default.len(),
            default,
            closed: false,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Apply an edit. Edits after close are ignored and return `false`.
    pub fn apply(&mut self, edit: PromptEdit) -> bool {
        if self.closed {
            log::debug!("Ignoring {:?} on closed prompt {:?}", edit, self.id);
            return false;
        }

        match edit {
            PromptEdit::Insert(c) => {
                self.buffer.insert(self.cursor, c);
                self.cursor += c.len_utf8();
            }
            PromptEdit::InsertStr(s) => {
                // single-line input
                let s: String = s.chars().filter(|c| !c.is_control()).collect();
                self.buffer.insert_str(self.cursor, &s);
                self.cursor += s.len();
            }
            PromptEdit::Backspace => {
                if let Some(prev) = self.prev_boundary() {
                    self.buffer.remove(prev);
                    self.cursor = prev;
                }
            }
            PromptEdit::Delete => {
                if self.cursor < self.buffer.len() {
                    self.buffer.remove(self.cursor);
                }
            }
            PromptEdit::CursorLeft => {
                if let Some(prev) = self.prev_boundary() {
                    self.cursor = prev;
                }
            }
            PromptEdit::CursorRight => {
                if let Some(c) = self.buffer[self.cursor..].chars().next() {
                    self.cursor += c.len_utf8();
                }
            }
            PromptEdit::CursorHome => self.cursor = 0,
            PromptEdit::CursorEnd => self.cursor = self.buffer.len(),
            PromptEdit::ClearLine => {
                self.buffer.clear();
                self.cursor = 0;
            }
        }
        true
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.buffer[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }

    /// Cursor position in characters, for rendering
    pub fn cursor_column(&self) -> usize {
        self.buffer[..self.cursor].chars().count()
    }

    /// Close the prompt. Returns the outcome on the first call, `None` after.
    pub fn finish(&mut self, trigger: PromptTrigger) -> Option<PromptOutcome> {
        if self.closed {
            log::debug!("Prompt {:?} already closed, ignoring {:?}", self.id, trigger);
            return None;
        }
        self.closed = true;

        let outcome = match trigger {
            PromptTrigger::Confirm => PromptOutcome::Confirmed(self.buffer.clone()),
            PromptTrigger::Cancel | PromptTrigger::Quit | PromptTrigger::FocusLost => {
                PromptOutcome::Cancelled
            }
        };
        log::debug!("Prompt {:?} closed by {:?}", self.id, trigger);
        Some(outcome)
    }

    /// [`finish`](Self::finish) with presentation-specific rules
    ///
    /// The inline line editor has no way to return "no text", so an empty
    /// confirmation there is reported as a cancellation.
    pub fn finish_styled(
        &mut self,
        trigger: PromptTrigger,
        style: PromptStyle,
    ) -> Option<PromptOutcome> {
        match (self.finish(trigger)?, style) {
            (PromptOutcome::Confirmed(text), PromptStyle::Inline) if text.is_empty() => {
                Some(PromptOutcome::Cancelled)
            }
            (outcome, _) => Some(outcome),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ticket_prompt(default: &str) -> PromptState {
        PromptState::open(PromptId::Ticket, "Ticket", default)
    }

    #[test]
    fn test_open_seeds_buffer_and_cursor_at_end() {
        let prompt = ticket_prompt("ABC-42");
        assert_eq!(prompt.buffer, "ABC-42");
        assert_eq!(prompt.cursor, 6);
        assert!(!prompt.is_closed());
    }

    #[test]
    fn test_editing() {
        let mut prompt = ticket_prompt("AB");
        prompt.apply(PromptEdit::Insert('C'));
        assert_eq!(prompt.buffer, "ABC");

        prompt.apply(PromptEdit::CursorHome);
        prompt.apply(PromptEdit::Delete);
        assert_eq!(prompt.buffer, "BC");

        prompt.apply(PromptEdit::CursorEnd);
        prompt.apply(PromptEdit::Backspace);
        assert_eq!(prompt.buffer, "B");

        prompt.apply(PromptEdit::InsertStr("-4\n2".to_string()));
        assert_eq!(prompt.buffer, "B-42");

        prompt.apply(PromptEdit::ClearLine);
        assert_eq!(prompt.buffer, "");
        assert_eq!(prompt.cursor, 0);
    }

    #[test]
    fn test_multibyte_cursor_movement() {
        let mut prompt = ticket_prompt("äö");
        prompt.apply(PromptEdit::CursorLeft);
        assert_eq!(prompt.cursor_column(), 1);
        prompt.apply(PromptEdit::Insert('x'));
        assert_eq!(prompt.buffer, "äxö");
        prompt.apply(PromptEdit::CursorRight);
        prompt.apply(PromptEdit::CursorRight);
        assert_eq!(prompt.cursor, prompt.buffer.len());
        prompt.apply(PromptEdit::Backspace);
        assert_eq!(prompt.buffer, "äx");
    }

    #[test]
    fn test_confirm_returns_untrimmed_buffer() {
        let mut prompt = ticket_prompt("  ABC-42 ");
        assert_eq!(
            prompt.finish(PromptTrigger::Confirm),
            Some(PromptOutcome::Confirmed("  ABC-42 ".to_string()))
        );
    }

    #[test]
    fn test_every_trigger_sequence_yields_exactly_one_outcome() {
        let triggers = [
            PromptTrigger::Confirm,
            PromptTrigger::Cancel,
            PromptTrigger::Quit,
            PromptTrigger::FocusLost,
        ];
        for first in triggers {
            for second in triggers {
                let mut prompt = ticket_prompt("x");
                let outcomes: Vec<_> = [first, second, first]
                    .into_iter()
                    .filter_map(|t| prompt.finish(t))
                    .collect();
                assert_eq!(outcomes.len(), 1, "{:?} then {:?}", first, second);
            }
        }
    }

    #[test]
    fn test_edits_after_close_are_ignored() {
        let mut prompt = ticket_prompt("ABC");
        prompt.finish(PromptTrigger::Cancel);
        assert!(!prompt.apply(PromptEdit::Insert('D')));
        assert_eq!(prompt.buffer, "ABC");
    }

    #[test]
    fn test_non_confirm_triggers_cancel() {
        for trigger in [PromptTrigger::Cancel, PromptTrigger::Quit, PromptTrigger::FocusLost] {
            let mut prompt = ticket_prompt("ABC");
            assert_eq!(prompt.finish(trigger), Some(PromptOutcome::Cancelled));
        }
    }

    #[test]
    fn test_inline_empty_confirm_is_cancel() {
        let mut inline = ticket_prompt("");
        assert_eq!(
            inline.finish_styled(PromptTrigger::Confirm, PromptStyle::Inline),
            Some(PromptOutcome::Cancelled)
        );
        assert_eq!(
            inline.finish_styled(PromptTrigger::Confirm, PromptStyle::Inline),
            None
        );

        let mut modal = ticket_prompt("");
        assert_eq!(
            modal.finish_styled(PromptTrigger::Confirm, PromptStyle::Modal),
            Some(PromptOutcome::Confirmed(String::new()))
        );
    }

    #[test]
    fn test_into_text_treats_blank_as_absent() {
        assert_eq!(PromptOutcome::Confirmed("  ".into()).into_text(), None);
        assert_eq!(PromptOutcome::Cancelled.into_text(), None);
        assert_eq!(
            PromptOutcome::Confirmed("ABC".into()).into_text(),
            Some("ABC".to_string())
        );
    }
}
