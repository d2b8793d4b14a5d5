//! Outline engine configuration
//!
//! The heading marker, clock keyword and timestamp delimiters are
//! configuration constants rather than hardcoded literals, so the engine can
//! be pointed at org variants that use a different marker character.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Configuration constants for parsing and edit generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrgConfig {
    /// Character whose leading run marks a heading (org uses `*`).
    #[serde(default = "default_marker_char")]
    pub marker_char: char,

    /// Keyword that opens a clock line, written as `KEYWORD: [timestamp]`.
    #[serde(default = "default_clock_keyword")]
    pub clock_keyword: String,

    /// Delimiter pair for active timestamps, e.g. `<2026-08-07 Fri>`.
    #[serde(default = "default_active_delims")]
    pub timestamp_active_delims: (char, char),

    /// Delimiter pair for inactive timestamps, e.g. `[2026-08-07 Fri]`.
    #[serde(default = "default_inactive_delims")]
    pub timestamp_inactive_delims: (char, char),

    /// Quiet period before a text-change notification triggers a re-parse.
    #[serde(default = "default_reparse_debounce_ms")]
    pub reparse_debounce_ms: u64,
}

fn default_marker_char() -> char {
    '*'
}

fn default_clock_keyword() -> String {
    "CLOCK".to_string()
}

fn default_active_delims() -> (char, char) {
    ('<', '>')
}

fn default_inactive_delims() -> (char, char) {
    ('[', ']')
}

fn default_reparse_debounce_ms() -> u64 {
    crate::pipeline::REPARSE_DEBOUNCE_MS
}

impl Default for OrgConfig {
    fn default() -> Self {
        Self {
            marker_char: default_marker_char(),
            clock_keyword: default_clock_keyword(),
            timestamp_active_delims: default_active_delims(),
            timestamp_inactive_delims: default_inactive_delims(),
            reparse_debounce_ms: default_reparse_debounce_ms(),
        }
    }
}

impl OrgConfig {
    /// Load config from a YAML file, or return defaults if it is missing or
    /// unreadable.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!("Config file not found at {}, using defaults", path.display());
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
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

    /// Save config to a YAML file, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), String> {
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
}
