//! Status Bar Actions
//!
//! Actions for the status bar - user feedback for operations.

use tb_flow::Notification;

#[derive(Debug, Clone)]
pub enum StatusBarAction {
    /// Show a notification
    Push(Notification),
    /// Clear all status messages
    Clear,
}

impl StatusBarAction {
    pub fn info(message: impl Into<String>) -> Self {
        Self::Push(Notification::info(message))
    }
}
