//! Command dispatch: bridges CLI args -> console operations -> output.

pub mod config_cmd;
pub mod events;
pub mod util;
pub mod visits;
pub mod zones;

use vigil_core::Console;

use crate::cli::Command;
use crate::config::Settings;
use crate::error::CliError;

/// Dispatch a dataset-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    console: &Console,
    settings: &Settings,
) -> Result<(), CliError> {
    match cmd {
        Command::Events(args) => events::handle(console, args, settings).await,
        Command::Zones(args) => zones::handle(console, args, settings),
        Command::Visits(args) => visits::handle(console, args, settings),
        // Config and Completions never load a dataset
        Command::Config(_) | Command::Completions(_) => Ok(()),
    }
}
