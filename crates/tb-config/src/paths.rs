//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/ticket-branch/`, `~/.cache/ticket-branch/`
//! - macOS: `~/Library/Application Support/ticket-branch/`, `~/Library/Caches/ticket-branch/`
//! - Windows: `%APPDATA%\ticket-branch\`, `%LOCALAPPDATA%\ticket-branch\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "ticket-branch";

/// Get the application config directory
/// Returns ~/.config/ticket-branch/ on Linux, ~/Library/Application Support/ticket-branch/ on macOS
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_NAME))
}

/// Get the application cache directory, creating it if needed
/// Returns ~/.cache/ticket-branch/ on Linux, ~/Library/Caches/ticket-branch/ on macOS
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create cache directory {}", dir.display()))?;
    Ok(dir)
}

/// Get path to app config file
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_dir_exists() {
        let dir = cache_dir().unwrap();
        assert!(dir.exists());
        assert!(dir.ends_with(APP_NAME));
    }

    #[test]
    fn test_app_config_path() {
        let path = app_config_path().unwrap();
        assert!(path.ends_with("ticket-branch/config.toml"));
    }
}
