//! User configuration, loaded from `~/.config/haptica/config.toml`.
//!
//! Loading never fails: a missing or unparseable file falls back to
//! defaults, with a log line saying why.

use std::path::PathBuf;

use serde::Deserialize;

use crate::haptics::backend::{HapticBackend, NullBackend, SimBackend};

/// Which capability provider to bind the catalog against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Log-backed stand-in for real vibration hardware.
    #[default]
    Sim,
    /// Every effect silently does nothing (the "unsupported platform"
    /// behavior, opted into explicitly).
    Null,
}

impl BackendKind {
    pub fn backend(self) -> Box<dyn HapticBackend> {
        match self {
            BackendKind::Sim => Box::new(SimBackend::new()),
            BackendKind::Null => Box::new(NullBackend),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub backend: BackendKind,
    /// Re-arm effects immediately after they fire.
    pub prepare_after: bool,
    /// simplelog level filter: "off", "error", "warn", "info", "debug", "trace".
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendKind::Sim,
            prepare_after: false,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Path of the config file, if a config directory exists on this system.
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("haptica").join("config.toml"))
    }

    /// Load the config, falling back to defaults if absent or invalid.
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(text) => Self::from_toml(&text),
            Err(_) => Self::default(),
        }
    }

    fn from_toml(text: &str) -> Self {
        match toml::from_str(text) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("config unparseable, using defaults: {}", e);
                Self::default()
            }
        }
    }
}
