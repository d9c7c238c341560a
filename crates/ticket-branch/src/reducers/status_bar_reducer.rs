//! Status Bar Reducer

use crate::actions::StatusBarAction;
use crate::state::{StatusBarState, StatusMessage};

pub fn reduce_status_bar(mut state: StatusBarState, action: &StatusBarAction) -> StatusBarState {
    match action {
        StatusBarAction::Push(notification) => {
            state.push(StatusMessage::from_notification(
                notification,
                chrono::Local::now(),
            ));
        }
        StatusBarAction::Clear => {
            state.clear();
        }
    }
    state
}
