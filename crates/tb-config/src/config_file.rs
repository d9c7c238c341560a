use std::{env, path::PathBuf};

const CONFIG_FILE: &str = ".ticket-branch.toml";

/// Load config file content, first match wins
///
/// Searches for the config in:
/// 1. Current working directory as .ticket-branch.toml
/// 2. Home directory as .ticket-branch.toml
/// 3. The application config directory as config.toml
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    config_candidates().into_iter().find_map(|path| {
        let content = std::fs::read_to_string(&path).ok()?;
        log::debug!("Loaded config from {}", path.display());
        Some(content)
    })
}

/// Candidate config locations in lookup order
fn config_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(CONFIG_FILE)];

    if let Some(home_config) = get_home_config_path() {
        candidates.push(home_config);
    }

    if let Ok(app_config) = crate::paths::app_config_path() {
        candidates.push(app_config);
    }

    candidates
}

/// Get the path to the config file in the home directory
///
/// Returns ~/.ticket-branch.toml if HOME environment variable is set.
fn get_home_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE))
}
