//! CLI-aware configuration: the config file plus global flag overrides.

use std::path::PathBuf;

use clap::ValueEnum;

use vigil_config::{Config, config_path, load_config};
use vigil_core::ConsoleConfig;

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;

/// Everything a command handler needs besides the console itself.
#[derive(Debug)]
pub struct Settings {
    pub console: ConsoleConfig,
    pub data: Option<PathBuf>,
    pub output: OutputFormat,
    pub color: bool,
    pub quiet: bool,
    pub yes: bool,
}

impl Settings {
    /// The dataset path, or an error explaining how to provide one.
    pub fn data_path(&self) -> Result<&PathBuf, CliError> {
        self.data.as_ref().ok_or_else(|| CliError::NoDataset {
            config_path: config_path().display().to_string(),
        })
    }
}

/// Merge the loaded config file with the global flags. Flags win.
pub fn resolve(global: &GlobalOpts) -> Result<Settings, CliError> {
    let cfg = load_config()?;
    resolve_with(&cfg, global)
}

pub(crate) fn resolve_with(cfg: &Config, global: &GlobalOpts) -> Result<Settings, CliError> {
    let mut console = cfg.console_config()?;
    if let Some(operator) = &global.operator {
        if operator.trim().is_empty() {
            return Err(CliError::Validation {
                field: "operator".into(),
                reason: "must not be empty".into(),
            });
        }
        console.operator.clone_from(operator);
    }

    let output = match global.output {
        Some(output) => output,
        None => parse_value("defaults.output", &cfg.defaults.output)?,
    };
    let color = match global.color {
        Some(color) => color,
        None => parse_value("defaults.color", &cfg.defaults.color)?,
    };

    Ok(Settings {
        console,
        data: global.data.clone().or_else(|| cfg.dataset.clone()),
        output,
        color: crate::output::should_color(color),
        quiet: global.quiet,
        yes: global.yes,
    })
}

fn parse_value<T: ValueEnum>(field: &str, value: &str) -> Result<T, CliError> {
    T::from_str(value, true).map_err(|reason| CliError::Validation {
        field: field.into(),
        reason,
    })
}
