//! Application configuration
//!
//! Configuration loaded from `.ticket-branch.toml`. The value is read once at
//! startup and handed to the workflow as read-only input.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How text prompts are presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptStyle {
    /// Centered floating popup
    #[default]
    Modal,
    /// Single input line above the status bar
    Inline,
}

/// Application configuration loaded from `.ticket-branch.toml`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Ordered candidate base branches offered for selection
    #[serde(default = "default_branches")]
    pub branches: Vec<String>,

    /// Prompt presentation style
    #[serde(default)]
    pub prompt_style: PromptStyle,

    /// Remote used for existence checks and the upstream push
    #[serde(default = "default_remote")]
    pub remote: String,

    /// git executable
    #[serde(default = "default_git_binary")]
    pub git_binary: String,

    #[serde(default)]
    pub issue_tracker: IssueTrackerConfig,

    #[serde(default)]
    pub notifications: NotificationConfig,
}

/// Issue tracker CLI settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct IssueTrackerConfig {
    /// Resolve ticket titles at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Issue tracker executable (jira-cli by default)
    #[serde(default = "default_tracker_binary")]
    pub binary: String,

    /// Number of issues requested per search page
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Last page offset that is still searched
    #[serde(default = "default_page_bound")]
    pub page_bound: u32,

    /// Column holding the issue key in the plain listing (0-based)
    #[serde(default = "default_key_column")]
    pub key_column: usize,

    /// Column holding the issue summary in the plain listing (0-based)
    #[serde(default = "default_summary_column")]
    pub summary_column: usize,

    /// Extra arguments appended to every listing command
    #[serde(default)]
    pub extra_args: Vec<String>,
}

/// Display durations for transient notifications
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct NotificationConfig {
    #[serde(default = "default_info_secs")]
    pub info_secs: u64,

    #[serde(default = "default_warning_secs")]
    pub warning_secs: u64,

    /// Progress notices such as "Fetching ticket title…"
    #[serde(default = "default_progress_secs")]
    pub progress_secs: u64,
}

fn default_branches() -> Vec<String> {
    vec![
        "development".to_string(),
        "master".to_string(),
        "pre-production".to_string(),
    ]
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_git_binary() -> String {
    "git".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tracker_binary() -> String {
    "jira".to_string()
}

fn default_page_size() -> u32 {
    100
}

fn default_page_bound() -> u32 {
    300
}

fn default_key_column() -> usize {
    1
}

fn default_summary_column() -> usize {
    2
}

fn default_info_secs() -> u64 {
    4
}

fn default_warning_secs() -> u64 {
    6
}

fn default_progress_secs() -> u64 {
    2
}

impl Default for IssueTrackerConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            binary: default_tracker_binary(),
            page_size: default_page_size(),
            page_bound: default_page_bound(),
            key_column: default_key_column(),
            summary_column: default_summary_column(),
            extra_args: Vec::new(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            info_secs: default_info_secs(),
            warning_secs: default_warning_secs(),
            progress_secs: default_progress_secs(),
        }
    }
}

impl NotificationConfig {
    pub fn info_duration(&self) -> Duration {
        Duration::from_secs(self.info_secs)
    }

    pub fn warning_duration(&self) -> Duration {
        Duration::from_secs(self.warning_secs)
    }

    pub fn progress_duration(&self) -> Duration {
        Duration::from_secs(self.progress_secs)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            branches: default_branches(),
            prompt_style: PromptStyle::default(),
            remote: default_remote(),
            git_binary: default_git_binary(),
            issue_tracker: IssueTrackerConfig::default(),
            notifications: NotificationConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home, then the config directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match Self::from_toml(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Parse a config from TOML text
    ///
    /// A page size of zero would never advance the search, so it is clamped to one.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let mut config: AppConfig = toml::from_str(content)?;
        if config.issue_tracker.page_size == 0 {
            log::warn!("issue_tracker.page_size = 0 is invalid, using 1");
            config.issue_tracker.page_size = 1;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(
            config.branches,
            vec!["development", "master", "pre-production"]
        );
        assert_eq!(config.prompt_style, PromptStyle::Modal);
        assert_eq!(config.remote, "origin");
        assert_eq!(config.git_binary, "git");
        assert!(config.issue_tracker.enabled);
        assert_eq!(config.issue_tracker.binary, "jira");
        assert_eq!(config.issue_tracker.page_size, 100);
        assert_eq!(config.issue_tracker.page_bound, 300);
        assert_eq!(config.issue_tracker.key_column, 1);
        assert_eq!(config.issue_tracker.summary_column, 2);
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            branches = ["main", "release"]
            prompt_style = "inline"

            [issue_tracker]
            binary = "/usr/local/bin/jira"
            key_column = 2
            summary_column = 3
        "#;
        let config = AppConfig::from_toml(toml).unwrap();
        assert_eq!(config.branches, vec!["main", "release"]);
        assert_eq!(config.prompt_style, PromptStyle::Inline);
        assert_eq!(config.issue_tracker.binary, "/usr/local/bin/jira");
        assert_eq!(config.issue_tracker.key_column, 2);
        assert_eq!(config.issue_tracker.summary_column, 3);
        // Unset fields fall back to defaults
        assert_eq!(config.issue_tracker.page_size, 100);
        assert_eq!(config.remote, "origin");
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            remote = "upstream"
        "#;
        let config = AppConfig::from_toml(toml).unwrap();
        assert_eq!(config.remote, "upstream");
        assert_eq!(config.branches.len(), 3);
        assert_eq!(config.notifications, NotificationConfig::default());
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        let toml = r#"
            [issue_tracker]
            page_size = 0
        "#;
        let config = AppConfig::from_toml(toml).unwrap();
        assert_eq!(config.issue_tracker.page_size, 1);
    }

    #[test]
    fn test_invalid_prompt_style_is_rejected() {
        let toml = r#"prompt_style = "floating""#;
        assert!(AppConfig::from_toml(toml).is_err());
    }

    #[test]
    fn test_notification_durations() {
        let config = NotificationConfig {
            info_secs: 2,
            warning_secs: 9,
            progress_secs: 1,
        };
        assert_eq!(config.info_duration(), Duration::from_secs(2));
        assert_eq!(config.warning_duration(), Duration::from_secs(9));
        assert_eq!(config.progress_duration(), Duration::from_secs(1));
    }
}
