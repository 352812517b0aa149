//! Configuration file loading with precedence handling.

use crate::model::{CaseSensitivity, HighlightColors};
use crate::view_state::highlighter::DEFAULT_THEME;
use ratatui::style::Color;
use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
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

    /// A color value could not be parsed.
    #[error("Invalid color for {field}: {value:?}")]
    InvalidColor {
        /// Config key holding the color.
        field: &'static str,
        /// Value as written.
        value: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/payview/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Syntax theme for raw mode (e.g., "base16-ocean-dark").
    #[serde(default)]
    pub theme: Option<String>,

    /// Match case exactly when searching.
    #[serde(default)]
    pub case_sensitive: Option<bool>,

    /// Start in raw text mode instead of tree mode.
    #[serde(default)]
    pub raw: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Highlight colors.
    #[serde(default)]
    pub colors: Option<ColorsSection>,
}

/// `[colors]` section. Values are color names (`"yellow"`) or `#rrggbb`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ColorsSection {
    /// Background of every match.
    #[serde(default)]
    pub match_background: Option<String>,
    /// Foreground of every match.
    #[serde(default)]
    pub match_foreground: Option<String>,
    /// Background of the current match.
    #[serde(default)]
    pub current_background: Option<String>,
    /// Foreground of the current match.
    #[serde(default)]
    pub current_foreground: Option<String>,
}

/// Highlight colors for all matches and for the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchColors {
    /// Colors of every match.
    pub matches: HighlightColors,
    /// Colors of the match the user navigated to.
    pub current: HighlightColors,
}

impl Default for SearchColors {
    fn default() -> Self {
        Self {
            matches: HighlightColors::new(Color::Yellow, Color::Black),
            current: HighlightColors::new(Color::LightRed, Color::Black),
        }
    }
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Theme name.
    pub theme: String,
    /// Search case handling.
    pub case: CaseSensitivity,
    /// Start in raw mode.
    pub raw: bool,
    /// Highlight colors.
    pub colors: SearchColors,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            case: CaseSensitivity::Insensitive,
            raw: false,
            colors: SearchColors::default(),
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/payview/payview.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("payview").join("payview.log")
    } else {
        PathBuf::from("payview.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
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

/// Resolve default config file path.
///
/// Returns `~/.config/payview/config.toml` on Unix, appropriate path on other platforms.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("payview").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `PAYVIEW_CONFIG` environment variable
/// 3. Default path `~/.config/payview/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("PAYVIEW_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidColor`] for an unparseable color.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let colors = config.colors.unwrap_or_default();
    let base = defaults.colors;

    Ok(ResolvedConfig {
        theme: config.theme.unwrap_or(defaults.theme),
        case: match config.case_sensitive {
            Some(true) => CaseSensitivity::Sensitive,
            Some(false) => CaseSensitivity::Insensitive,
            None => defaults.case,
        },
        raw: config.raw.unwrap_or(defaults.raw),
        colors: SearchColors {
            matches: HighlightColors::new(
                parse_color("match_background", colors.match_background, base.matches.background)?,
                parse_color("match_foreground", colors.match_foreground, base.matches.foreground)?,
            ),
            current: HighlightColors::new(
                parse_color("current_background", colors.current_background, base.current.background)?,
                parse_color("current_foreground", colors.current_foreground, base.current.foreground)?,
            ),
        },
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    })
}

fn parse_color(
    field: &'static str,
    value: Option<String>,
    default: Color,
) -> Result<Color, ConfigError> {
    match value {
        None => Ok(default),
        Some(value) => {
            Color::from_str(&value).map_err(|_| ConfigError::InvalidColor { field, value })
        }
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `PAYVIEW_THEME`: Override theme
/// - `PAYVIEW_CASE_SENSITIVE`: `1`/`true` enables case-sensitive search
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(theme) = std::env::var("PAYVIEW_THEME") {
        config.theme = theme;
    }

    if let Ok(flag) = std::env::var("PAYVIEW_CASE_SENSITIVE") {
        config.case = match flag.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => CaseSensitivity::Sensitive,
            _ => CaseSensitivity::Insensitive,
        };
    }

    config
}

/// CLI values that override configuration. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--theme`
    pub theme: Option<String>,
    /// `--case-sensitive`
    pub case_sensitive: Option<bool>,
    /// `--raw`
    pub raw: Option<bool>,
}

/// Apply CLI argument overrides to resolved config.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }

    if let Some(case_sensitive) = cli.case_sensitive {
        config.case = if case_sensitive {
            CaseSensitivity::Sensitive
        } else {
            CaseSensitivity::Insensitive
        };
    }

    if let Some(raw) = cli.raw {
        config.raw = raw;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
