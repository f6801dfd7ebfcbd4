//! User settings for Cuentas Claras
//!
//! Manages the backend location, the UI tick rate, and activity logging.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::paths::ClarasPaths;
use crate::error::ClarasError;

/// Webhook host used when nothing else is configured
pub const DEFAULT_API_BASE_URL: &str = "https://n8n-motor.onrender.com";

/// User settings for Cuentas Claras
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Base URL of the webhook backend
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// How often the TUI wakes up to expire notifications (milliseconds)
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Optional request timeout; requests wait indefinitely when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,

    /// Whether API calls are appended to the activity log
    #[serde(default = "default_activity_log_enabled")]
    pub activity_log_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_activity_log_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            api_base_url: default_api_base_url(),
            tick_rate_ms: default_tick_rate_ms(),
            request_timeout_secs: None,
            activity_log_enabled: default_activity_log_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &ClarasPaths) -> Result<Self, ClarasError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| ClarasError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ClarasError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ClarasPaths) -> Result<(), ClarasError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ClarasError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ClarasError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Replace the API base URL when an override is given
    pub fn with_api_override(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.api_base_url = url;
        }
        self
    }

    /// Tick rate as a Duration (never zero)
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(10))
    }

    /// Request timeout as a Duration, if configured
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
