//! Configuration for the Vigil console.
//!
//! A TOML file at the platform config path, overridden by `VIGIL_`
//! environment variables, translated into `vigil_core::ConsoleConfig`.
//! The CLI layers its own flag overrides on top.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use vigil_core::config::DEFAULT_OPERATOR;
use vigil_core::{
    AckFilter, ConsoleConfig, FilterSpec, SortDirection, SortKey, SortSpec, StackingMode, ViewState,
};

/// Prefix for environment overrides. Nested keys use `__`, e.g.
/// `VIGIL_DEFAULTS__SORT_KEY=priority`.
pub const ENV_PREFIX: &str = "VIGIL_";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Dataset loaded when `--data` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset: Option<PathBuf>,

    #[serde(default)]
    pub defaults: Defaults,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    /// Name recorded on acknowledgements.
    #[serde(default = "default_operator")]
    pub operator: String,

    #[serde(default = "default_sort_key")]
    pub sort_key: String,

    #[serde(default = "default_sort_direction")]
    pub sort_direction: String,

    #[serde(default = "default_stacking")]
    pub stacking: String,

    /// Acknowledgement filter: all, acknowledged or unacknowledged.
    #[serde(default = "default_status")]
    pub status: String,

    #[serde(default = "default_refresh_delay_ms")]
    pub refresh_delay_ms: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            operator: default_operator(),
            sort_key: default_sort_key(),
            sort_direction: default_sort_direction(),
            stacking: default_stacking(),
            status: default_status(),
            refresh_delay_ms: default_refresh_delay_ms(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_operator() -> String {
    DEFAULT_OPERATOR.into()
}
fn default_sort_key() -> String {
    SortKey::default().to_string()
}
fn default_sort_direction() -> String {
    SortDirection::default().to_string()
}
fn default_stacking() -> String {
    StackingMode::default().to_string()
}
fn default_status() -> String {
    AckFilter::default().to_string()
}
fn default_refresh_delay_ms() -> u64 {
    1000
}

// ── Translation ─────────────────────────────────────────────────────

impl Config {
    /// Validate the string-typed defaults and build the core settings.
    pub fn console_config(&self) -> Result<ConsoleConfig, ConfigError> {
        let d = &self.defaults;
        if d.operator.trim().is_empty() {
            return Err(ConfigError::Validation {
                field: "defaults.operator".into(),
                reason: "must not be empty".into(),
            });
        }

        let view = ViewState {
            filter: FilterSpec {
                status: parse_field("defaults.status", &d.status)?,
                ..FilterSpec::default()
            },
            sort: SortSpec::new(
                parse_field("defaults.sort_key", &d.sort_key)?,
                parse_field("defaults.sort_direction", &d.sort_direction)?,
            ),
            stacking: parse_field("defaults.stacking", &d.stacking)?,
        };

        Ok(ConsoleConfig {
            operator: d.operator.clone(),
            refresh_delay: Duration::from_millis(d.refresh_delay_ms),
            view,
        })
    }
}

fn parse_field<T: FromStr>(field: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::Validation {
        field: field.into(),
        reason: format!("unrecognized value '{value}'"),
    })
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "vigil", "vigil").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("vigil");
    p
}

// ── Config loading ──────────────────────────────────────────────────

fn file_figment(path: &Path) -> Figment {
    Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
}

/// Load the full Config from the canonical file plus environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_with_env(&config_path())
}

/// Load Config from `path`, then apply `VIGIL_` environment overrides.
/// Nested keys use `__`, e.g. `VIGIL_DEFAULTS__SORT_KEY=priority`.
pub fn load_config_with_env(path: &Path) -> Result<Config, ConfigError> {
    let config: Config = file_figment(path)
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()?;
    Ok(config)
}

/// Load Config from `path` alone, without environment overrides.
/// A missing file yields the defaults.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let config: Config = file_figment(path).extract()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    save_config_to(cfg, &path)?;
    Ok(path)
}

/// Serialize config to TOML at `path`, creating parent directories.
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}
