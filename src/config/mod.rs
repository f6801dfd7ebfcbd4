//! Configuration module for Cuentas Claras
//!
//! This module provides configuration management including:
//! - Config directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::ClarasPaths;
pub use settings::Settings;
