//! Highlighter configuration persistence
//!
//! Stores user preferences in `~/.config/jinja-highlight/config.yaml`:
//!
//! ```yaml
//! general:
//!   enableForTextFiles: true
//! highlighting:
//!   enableForTextFiles: true
//!   debounceMs: 200
//! theme: default-dark
//! ```
//!
//! Loading never fails: a value or section of the wrong type falls back to
//! its own default, and an unreadable file falls back to all defaults.

use std::path::Path;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Debounce delay for edits, in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u64 = 200;

/// Highlighter configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightConfig {
    #[serde(default, deserialize_with = "section_or_default")]
    pub general: GeneralConfig,
    #[serde(default, deserialize_with = "section_or_default")]
    pub highlighting: HighlightingConfig,
    /// Selected theme id (e.g., "default-dark", "default-light")
    #[serde(default = "default_theme", deserialize_with = "theme_or_default")]
    pub theme: String,
}

/// `general.*` keys
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralConfig {
    #[serde(default = "default_true", deserialize_with = "bool_or_true")]
    pub enable_for_text_files: bool,
}

/// `highlighting.*` keys
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightingConfig {
    #[serde(default = "default_true", deserialize_with = "bool_or_true")]
    pub enable_for_text_files: bool,
    #[serde(default = "default_debounce_ms", deserialize_with = "debounce_or_default")]
    pub debounce_ms: u64,
}

fn default_true() -> bool {
    true
}

fn default_theme() -> String {
    "default-dark".to_string()
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

/// A section that is not a mapping keeps its defaults without touching the
/// other sections.
fn section_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_yaml::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(T::default());
    }
    if !value.is_mapping() {
        tracing::warn!("Expected a section, got {:?}; using defaults", value);
        return Ok(T::default());
    }
    Ok(serde_yaml::from_value(value).unwrap_or_else(|e| {
        tracing::warn!("Invalid config section: {}; using defaults", e);
        T::default()
    }))
}

fn bool_or_true<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let value = serde_yaml::Value::deserialize(deserializer)?;
    Ok(value.as_bool().unwrap_or_else(|| {
        tracing::warn!("Expected a boolean, got {:?}; using default", value);
        true
    }))
}

fn debounce_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let value = serde_yaml::Value::deserialize(deserializer)?;
    Ok(value.as_u64().unwrap_or_else(|| {
        tracing::warn!("Expected a delay in ms, got {:?}; using default", value);
        DEFAULT_DEBOUNCE_MS
    }))
}

fn theme_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = serde_yaml::Value::deserialize(deserializer)?;
    Ok(match value.as_str() {
        Some(theme) => theme.to_string(),
        None => default_theme(),
    })
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            enable_for_text_files: true,
        }
    }
}

impl Default for HighlightingConfig {
    fn default() -> Self {
        Self {
            enable_for_text_files: true,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            highlighting: HighlightingConfig::default(),
            theme: default_theme(),
        }
    }
}

impl HighlightConfig {
    /// Load config from the user config dir, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, or return defaults if missing or unreadable
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse config from YAML. An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))
    }

    /// Save config to `path`
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Save config to the user config dir
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Debounce delay applied to throttled updates
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.highlighting.debounce_ms)
    }

    /// Look up a boolean by its dotted key, e.g. `general.enableForTextFiles`
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match key {
            "general.enableForTextFiles" => Some(self.general.enable_for_text_files),
            "highlighting.enableForTextFiles" => Some(self.highlighting.enable_for_text_files),
            _ => None,
        }
    }
}
