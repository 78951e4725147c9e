//! Application configuration structures.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Remote catalog API settings
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// HTTP listener and render shim settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Failure recovery settings
    #[serde(default)]
    pub recovery: RecoveryConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if Url::parse(&self.catalog.api_url).is_err() {
            return Err(AppError::validation("catalog.api_url is not a valid URL"));
        }
        if self.catalog.user_agent.trim().is_empty() {
            return Err(AppError::validation("catalog.user_agent is empty"));
        }
        if self.catalog.timeout_secs == 0 {
            return Err(AppError::validation("catalog.timeout_secs must be > 0"));
        }
        if self.server.marker.is_empty() {
            return Err(AppError::validation("server.marker is empty"));
        }
        if self.recovery.redirect_delay_secs == 0 {
            return Err(AppError::validation(
                "recovery.redirect_delay_secs must be > 0",
            ));
        }
        if self.recovery.redirect_target.is_empty() {
            return Err(AppError::validation("recovery.redirect_target is empty"));
        }
        Ok(())
    }
}

/// Remote catalog API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Base URL of the pet-listing API
    #[serde(default = "defaults::api_url")]
    pub api_url: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_url: defaults::api_url(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// HTTP listener and render shim settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listener port
    #[serde(default = "defaults::port")]
    pub port: u16,

    /// Directory of bundled static assets, served under /dist
    #[serde(default = "defaults::asset_dir")]
    pub asset_dir: String,

    /// HTML template containing the placeholder marker
    #[serde(default = "defaults::template_path")]
    pub template_path: String,

    /// Placeholder marker text, present exactly once in the template
    #[serde(default = "defaults::marker")]
    pub marker: String,
}

impl ServerConfig {
    /// Listener port, honoring the `PORT` environment variable.
    pub fn effective_port(&self) -> u16 {
        Self::port_from(std::env::var("PORT").ok().as_deref(), self.port)
    }

    fn port_from(env: Option<&str>, fallback: u16) -> u16 {
        env.and_then(|p| p.parse().ok()).unwrap_or(fallback)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: defaults::port(),
            asset_dir: defaults::asset_dir(),
            template_path: defaults::template_path(),
            marker: defaults::marker(),
        }
    }
}

/// Failure recovery settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoveryConfig {
    /// Seconds a failed detail view is shown before redirecting home
    #[serde(default = "defaults::redirect_delay")]
    pub redirect_delay_secs: u64,

    /// Route navigated to when the countdown expires
    #[serde(default = "defaults::redirect_target")]
    pub redirect_target: String,
}

impl RecoveryConfig {
    /// Countdown duration.
    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.redirect_delay_secs)
    }
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            redirect_delay_secs: defaults::redirect_delay(),
            redirect_target: defaults::redirect_target(),
        }
    }
}

mod defaults {
    pub fn api_url() -> String {
        "https://api.adoptme.dev/v1".to_string()
    }

    pub fn user_agent() -> String {
        concat!("adoptme/", env!("CARGO_PKG_VERSION")).to_string()
    }

    pub fn timeout() -> u64 {
        10
    }

    pub fn port() -> u16 {
        3000
    }

    pub fn asset_dir() -> String {
        "dist".to_string()
    }

    pub fn template_path() -> String {
        "dist/index.html".to_string()
    }

    pub fn marker() -> String {
        "not rendered".to_string()
    }

    pub fn redirect_delay() -> u64 {
        5
    }

    pub fn redirect_target() -> String {
        "/".to_string()
    }
}
