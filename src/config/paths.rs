//! Path management for Cuentas Claras
//!
//! ## Path Resolution Order
//!
//! 1. `CUENTAS_CLARAS_DATA_DIR` environment variable (if set)
//! 2. The platform config directory reported by `directories`
//! 3. `~/.config/cuentas-claras` as a last resort

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::ClarasError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "CUENTAS_CLARAS_DATA_DIR";

/// Manages all paths used by Cuentas Claras
#[derive(Debug, Clone)]
pub struct ClarasPaths {
    /// Base directory for settings and the activity log
    base_dir: PathBuf,
}

impl ClarasPaths {
    /// Create a new ClarasPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home or config directory can be determined.
    pub fn new() -> Result<Self, ClarasError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create ClarasPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the activity log
    pub fn activity_log(&self) -> PathBuf {
        self.base_dir.join("activity.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), ClarasError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ClarasError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if settings have been written (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, ClarasError> {
    if let Some(dirs) = ProjectDirs::from("", "", "cuentas-claras") {
        return Ok(dirs.config_dir().to_path_buf());
    }

    let home = std::env::var("HOME")
        .map_err(|_| ClarasError::Config("Could not determine home directory".into()))?;
    Ok(PathBuf::from(home).join(".config").join("cuentas-claras"))
}
