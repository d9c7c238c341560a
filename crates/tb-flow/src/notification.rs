//! User-facing notifications emitted by the workflow

use std::time::Duration;
use tb_config::NotificationConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// A message for the notification sink
///
/// `duration: None` keeps the message until it is replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: Severity,
    pub message: String,
    pub duration: Option<Duration>,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: Severity::Info,
            message: message.into(),
            duration: None,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: Severity::Warning,
            message: message.into(),
            duration: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Severity::Error,
            message: message.into(),
            duration: None,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Apply the configured duration for this severity, errors stay
    pub fn timed(self, config: &NotificationConfig) -> Self {
        match self.level {
            Severity::Info => self.with_duration(config.info_duration()),
            Severity::Warning => self.with_duration(config.warning_duration()),
            Severity::Error => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timed_uses_severity_duration() {
        let config = NotificationConfig::default();
        assert_eq!(
            Notification::info("hi").timed(&config).duration,
            Some(Duration::from_secs(4))
        );
        assert_eq!(
            Notification::warning("careful").timed(&config).duration,
            Some(Duration::from_secs(6))
        );
        assert_eq!(Notification::error("boom").timed(&config).duration, None);
    }
}
