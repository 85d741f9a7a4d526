//! Config subcommand handlers.

use std::io::IsTerminal;
use std::path::PathBuf;

use dialoguer::Input;

use vigil_config::{Config, config_path, load_config, save_config};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

/// Map a dialoguer / interactive I/O failure into CliError.
fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let format = global.output.unwrap_or(OutputFormat::Table);
    match args.command {
        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => {
            let cfg = load_config()?;
            // Validate before printing so a broken file is reported here.
            cfg.console_config()?;
            let out = output::render_single(
                format,
                &cfg,
                |c| toml::to_string_pretty(c).unwrap_or_else(|e| format!("# {e}")),
                |_| config_path().display().to_string(),
            )?;
            output::print_output(out.trim_end(), global.quiet);
            Ok(())
        }

        // ── Path ────────────────────────────────────────────────────
        ConfigCommand::Path => {
            output::print_output(&config_path().display().to_string(), global.quiet);
            Ok(())
        }

        // ── Init ────────────────────────────────────────────────────
        ConfigCommand::Init { force } => {
            let path = config_path();
            if path.exists() && !force {
                return Err(CliError::ConfigExists {
                    path: path.display().to_string(),
                });
            }

            let mut cfg = Config::default();
            if let Some(operator) = &global.operator {
                cfg.defaults.operator.clone_from(operator);
            }
            cfg.dataset.clone_from(&global.data);

            if !global.yes && std::io::stdin().is_terminal() {
                prompt(&mut cfg)?;
            }

            let written = save_config(&cfg)?;
            output::print_status(
                &format!("Configuration written to {}", written.display()),
                global.quiet,
            );
            Ok(())
        }
    }
}

/// Interactive wizard for the values worth asking about.
fn prompt(cfg: &mut Config) -> Result<(), CliError> {
    eprintln!("vigil configuration");
    eprintln!("   Config path: {}\n", config_path().display());

    cfg.defaults.operator = Input::new()
        .with_prompt("Operator name")
        .default(cfg.defaults.operator.clone())
        .interact_text()
        .map_err(prompt_err)?;

    let dataset: String = Input::new()
        .with_prompt("Dataset file (blank for none)")
        .default(
            cfg.dataset
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
        )
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_err)?;
    cfg.dataset = (!dataset.trim().is_empty()).then(|| PathBuf::from(dataset.trim()));
    Ok(())
}
