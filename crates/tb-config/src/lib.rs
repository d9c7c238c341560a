//! Configuration and file management for ticket-branch
//!
//! This crate provides:
//! - File path utilities for config and cache files
//! - Configuration file discovery (TOML)
//! - Application configuration (AppConfig)

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::{AppConfig, IssueTrackerConfig, NotificationConfig, PromptStyle};
pub use config_file::load_config_file;
pub use paths::{app_config_path, cache_dir, config_dir};
