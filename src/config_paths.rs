//! Where jinja-highlight keeps its files
//!
//! Everything lives in one per-user directory: `config.yaml`, a `themes/`
//! folder for user themes, and `logs/` for the rolling log file. The
//! directory follows `XDG_CONFIG_HOME` (falling back to `~/.config`) on Unix
//! and macOS, and `%APPDATA%` on Windows.

use std::{env, fs, path::PathBuf};

const APP_DIR: &str = "jinja-highlight";

/// Per-user directory holding config, themes and logs
pub fn config_dir() -> Option<PathBuf> {
    platform_config_root().map(|root| root.join(APP_DIR))
}

#[cfg(target_os = "windows")]
fn platform_config_root() -> Option<PathBuf> {
    env::var_os("APPDATA").map(PathBuf::from)
}

// macOS included: ~/.config, not ~/Library/Application Support
#[cfg(not(target_os = "windows"))]
fn platform_config_root() -> Option<PathBuf> {
    env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
}

/// User theme files, one `{id}.yaml` each
pub fn themes_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("themes"))
}

pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

fn create(path: PathBuf) -> Result<PathBuf, String> {
    fs::create_dir_all(&path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))?;
    Ok(path)
}

/// Create the logs directory (and the config directory above it) if needed
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    logs_dir()
        .ok_or_else(|| "No config directory available".to_string())
        .and_then(create)
}
