//! Status Bar State

use chrono::{DateTime, Local, TimeDelta};
use std::collections::VecDeque;
use tb_flow::{Notification, Severity};

/// A single status message with metadata
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    /// When the message was created
    pub timestamp: DateTime<Local>,
    pub level: Severity,
    pub message: String,
    /// When the message stops being shown, `None` keeps it until replaced
    pub expires_at: Option<DateTime<Local>>,
}

impl StatusMessage {
    pub fn from_notification(notification: &Notification, now: DateTime<Local>) -> Self {
        let expires_at = notification
            .duration
            .and_then(|d| TimeDelta::from_std(d).ok())
            .map(|d| now + d);
        Self {
            timestamp: now,
            level: notification.level,
            message: notification.message.clone(),
            expires_at,
        }
    }

    pub fn is_expired(&self, now: DateTime<Local>) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}

/// Status bar state - history of messages
#[derive(Debug, Clone)]
pub struct StatusBarState {
    /// Message history (newest at back)
    pub messages: VecDeque<StatusMessage>,
    /// Maximum messages to keep
    pub max_history: usize,
}

impl Default for StatusBarState {
    fn default() -> Self {
        Self {
            messages: VecDeque::new(),
            max_history: 100,
        }
    }
}

impl StatusBarState {
    /// The latest message, unless it has expired
    pub fn visible(&self, now: DateTime<Local>) -> Option<&StatusMessage> {
        self.messages.back().filter(|msg| !msg.is_expired(now))
    }

    /// Push a new message, trimming oldest if over limit
    pub fn push(&mut self, message: StatusMessage) {
        self.messages.push_back(message);
        if self.messages.len() > self.max_history {
            self.messages.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}
