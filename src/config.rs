//! Configuration handling for the TUI

use crate::api::DEFAULT_API_BASE_URL;
use crate::state::DEFAULT_REDIRECT_DELAY;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable that overrides the user service base URL
pub const API_URL_ENV: &str = "SIGNUP_API_URL";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// User service base URL (without `/users/create`)
    pub api_base_url: Option<String>,
    /// Pause between a successful registration and the login view
    pub redirect_delay_ms: Option<u64>,
    /// Request deadline; unset means wait for the server indefinitely
    pub request_timeout_secs: Option<u64>,
}

impl TuiConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("co", "soloelectricos", "signup-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory for log files
    pub fn log_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().to_path_buf())
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    fn load_from(path: &std::path::Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: TuiConfig = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Base URL: environment, then config file, then the built-in host
    pub fn api_base_url(&self) -> String {
        self.resolve_api_base_url(std::env::var(API_URL_ENV).ok())
    }

    fn resolve_api_base_url(&self, env_value: Option<String>) -> String {
        env_value
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.api_base_url.clone())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
    }

    pub fn redirect_delay(&self) -> Duration {
        self.redirect_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_REDIRECT_DELAY)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}
