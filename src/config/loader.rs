//! Configuration file loading with precedence handling.
//!
//! Precedence chain, lowest to highest:
//! Defaults -> config file -> environment variables -> CLI arguments.

use crate::model::{InvalidSortSpec, SortSpec};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Page size used when neither config nor CLI overrides it.
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read the config file.
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// The `sort` setting was not one of the known tokens.
    #[error("Invalid sort setting: {0}")]
    InvalidSort(#[from] InvalidSortSpec),
}

/// TOML configuration file structure.
///
/// All fields are optional; unset fields fall back to defaults.
/// Corresponds to `~/.config/cdv/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Default feed URL (or file path) when none is given on the CLI.
    #[serde(default)]
    pub feed_url: Option<String>,

    /// Companies per page.
    #[serde(default)]
    pub page_size: Option<usize>,

    /// Initial sort as a combined token, e.g. "employees-desc".
    #[serde(default)]
    pub sort: Option<String>,

    /// Path to the log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Feed URL/path, if any source is configured.
    pub feed_url: Option<String>,
    /// Companies per page.
    pub page_size: usize,
    /// Initial sort.
    pub sort: SortSpec,
    /// Path to the log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            feed_url: None,
            page_size: DEFAULT_PAGE_SIZE,
            sort: SortSpec::default(),
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve the default log file path.
///
/// `~/.local/state/cdv/cdv.log` on Unix-like systems, the platform
/// equivalent elsewhere, falling back to the current directory when no
/// state directory can be determined.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("cdv").join("cdv.log")
    } else {
        PathBuf::from("cdv.log")
    }
}

/// Resolve the default config file path (`~/.config/cdv/config.toml`).
/// `None` if the config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cdv").join("config.toml"))
}

/// Load a config file from a specific path.
///
/// A missing file is not an error (`Ok(None)`): defaults apply.
///
/// # Errors
///
/// Returns an error only if the file exists but cannot be read or
/// parsed.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration with path precedence:
/// explicit path (CLI `--config`) > `CDV_CONFIG` env var > default path.
///
/// # Errors
///
/// Returns an error only if a config file exists but cannot be read or
/// parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("CDV_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge a loaded config file into the defaults.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidSort`] when the file's `sort` token
/// is not one of the six known options.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let sort = match config.sort {
        Some(token) => SortSpec::parse(&token)?,
        None => defaults.sort,
    };

    Ok(ResolvedConfig {
        feed_url: config.feed_url.or(defaults.feed_url),
        page_size: config.page_size.unwrap_or(defaults.page_size),
        sort,
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    })
}

/// Apply environment variable overrides (`CDV_FEED_URL`).
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(url) = std::env::var("CDV_FEED_URL") {
        config.feed_url = Some(url);
    }
    config
}

/// Apply CLI argument overrides, the highest-precedence source.
/// Only explicitly set flags override.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    feed_override: Option<String>,
    sort_override: Option<SortSpec>,
    page_size_override: Option<usize>,
) -> ResolvedConfig {
    if let Some(feed) = feed_override {
        config.feed_url = Some(feed);
    }
    if let Some(sort) = sort_override {
        config.sort = sort;
    }
    if let Some(page_size) = page_size_override {
        config.page_size = page_size;
    }
    config
}
