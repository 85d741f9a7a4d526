//! Shared helpers for command handlers.

use std::io::IsTerminal;

use vigil_core::{AckFilter, Console, SortDirection, SortKey, StackingMode, ViewState};

use crate::cli::{DirectionArg, SortArg, StackArg, StatusArg, ViewArgs};
use crate::config::Settings;
use crate::dataset;
use crate::error::CliError;

/// Prompt for confirmation, auto-approving if `--yes` was passed.
///
/// Without a terminal on stdin there is nobody to ask, so the operation
/// fails with a hint to pass `--yes`.
pub fn confirm(message: &str, action: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        return Err(CliError::NonInteractiveRequiresYes {
            action: action.into(),
        });
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}

/// Write the console's state back to the data file when `write` is set.
pub fn persist(console: &Console, settings: &Settings, write: bool) -> Result<(), CliError> {
    if !write {
        return Ok(());
    }
    let path = settings.data_path()?;
    dataset::save(path, &console.dataset())
}

/// Apply the filter and sort flags that were given on top of `view`.
pub fn apply_view_args(view: &mut ViewState, args: ViewArgs) {
    if let Some(status) = args.status {
        view.filter.status = status.into();
    }
    if let Some(search) = args.search {
        view.filter.search = search;
    }
    if args.building.is_some() {
        view.filter.building_id = args.building;
        view.filter.floor_id = args.floor;
    }
    if let Some(sort) = args.sort {
        view.sort.key = sort.into();
    }
    if let Some(direction) = args.direction {
        view.sort.direction = direction.into();
    }
}

// ── Flag → core conversions ─────────────────────────────────────────

impl From<StatusArg> for AckFilter {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::All => Self::All,
            StatusArg::Acknowledged => Self::Acknowledged,
            StatusArg::Unacknowledged => Self::Unacknowledged,
        }
    }
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Date => Self::Date,
            SortArg::Priority => Self::Priority,
            SortArg::Location => Self::Location,
            SortArg::Type => Self::Type,
        }
    }
}

impl From<DirectionArg> for SortDirection {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Asc => Self::Asc,
            DirectionArg::Desc => Self::Desc,
        }
    }
}

impl From<StackArg> for StackingMode {
    fn from(arg: StackArg) -> Self {
        match arg {
            StackArg::None => Self::None,
            StackArg::Priority => Self::Priority,
            StackArg::Location => Self::Location,
            StackArg::Building => Self::Building,
        }
    }
}
