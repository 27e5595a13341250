//! Configuration for the Folio CLI application.
//!
//! Provides the [`FolioConfig`] struct that loads from TOML files,
//! environment variables, and defaults using the `confyg` crate.
//!
//! # Loading Priority
//!
//! 1. Explicit `--config <path>` flag
//! 2. `FOLIO_CONFIG` environment variable
//! 3. XDG default: `~/.config/folio/config.toml`
//! 4. Built-in defaults

use confyg::{env, Confygery};
use folio_core::traits::ConfigProvider;
use folio_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for the Folio CLI application.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Project name, used for env var prefixes and default paths.
    pub project_name: String,

    /// Content-related configuration.
    pub content: ContentConfig,

    /// View-metrics service configuration.
    pub metrics: MetricsConfig,
}

/// Content storage configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Path to the directory of raw document sources.
    pub path: Option<String>,
}

/// View-metrics service configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Base URL of the metrics service; `None` disables metrics.
    pub base_url: Option<String>,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            project_name: "folio".to_string(),
            content: ContentConfig::default(),
            metrics: MetricsConfig::default(),
        }
    }
}

impl FolioConfig {
    /// Load configuration from file, environment, and defaults.
    ///
    /// Loading priority:
    /// 1. Explicit `config_path` (from `--config` flag)
    /// 2. `FOLIO_CONFIG` env var
    /// 3. XDG default: `~/.config/folio/config.toml`
    /// 4. Built-in defaults
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder =
            Confygery::new().map_err(|e| Error::config(format!("config init: {e}")))?;

        if let Some(path) = Self::resolve_config_path(config_path) {
            if path.exists() {
                builder
                    .add_file(&path.to_string_lossy())
                    .map_err(|e| Error::config(format!("config file: {e}")))?;
            }
        }

        let mut env_opts = env::Options::with_top_level("FOLIO");
        env_opts.add_section("content");
        env_opts.add_section("metrics");
        builder
            .add_env(env_opts)
            .map_err(|e| Error::config(format!("config env: {e}")))?;

        let config: Self = builder
            .build()
            .map_err(|e| Error::config(format!("config build: {e}")))?;

        Ok(config)
    }

    /// Resolve the config file path from explicit flag, env var, or XDG default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        // 1. Explicit --config flag
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }

        // 2. FOLIO_CONFIG env var
        if let Ok(path) = std::env::var("FOLIO_CONFIG") {
            return Some(PathBuf::from(path));
        }

        // 3. XDG default
        Self::default_config_path()
    }

    /// Return the XDG default config path.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("folio").join("config.toml"))
    }

    /// Serialize this config to a pretty-printed TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}

impl ConfigProvider for FolioConfig {
    fn project_name(&self) -> &str {
        &self.project_name
    }

    fn content_path(&self) -> Result<PathBuf> {
        match &self.content.path {
            Some(p) => Ok(PathBuf::from(p)),
            None => std::env::current_dir()
                .map(|d| d.join("content"))
                .map_err(|e| Error::config(format!("could not determine content path: {e}"))),
        }
    }

    fn metrics_base_url(&self) -> Option<String> {
        self.metrics.base_url.clone()
    }
}
