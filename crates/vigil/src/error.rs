//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use vigil_config::ConfigError;
use vigil_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONFLICT: i32 = 6;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Dataset ──────────────────────────────────────────────────────
    #[error("No dataset given")]
    #[diagnostic(
        code(vigil::no_dataset),
        help(
            "Pass --data <FILE>, set VIGIL_DATA, or set `dataset` in {config_path}"
        )
    )]
    NoDataset { config_path: String },

    #[error("Could not read dataset {path}: {reason}")]
    #[diagnostic(
        code(vigil::dataset),
        help("Datasets are JSON, YAML or TOML, chosen by file extension.")
    )]
    Dataset { path: String, reason: String },

    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(vigil::not_found),
        help("Run: vigil {list_command} to see available {resource_type}s")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    #[error("{resource_type} '{identifier}' is {actual}, expected {expected}")]
    #[diagnostic(code(vigil::conflict))]
    Conflict {
        resource_type: String,
        identifier: String,
        actual: String,
        expected: String,
    },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(vigil::validation))]
    Validation { field: String, reason: String },

    #[error("An escort is required for: {zones}")]
    #[diagnostic(
        code(vigil::escort_required),
        help("Assign an escort with --escort <NAME>.")
    )]
    EscortRequired { zones: String },

    #[error("No floor map for building '{building}', floor '{floor}'")]
    #[diagnostic(
        code(vigil::selection_required),
        help("Select an existing building and floor. Run: vigil events list to see where events occurred.")
    )]
    SelectionRequired { building: String, floor: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error(transparent)]
    #[diagnostic(code(vigil::config), help("Check the file printed by: vigil config path"))]
    Config(#[from] ConfigError),

    #[error("Configuration file already exists at {path}")]
    #[diagnostic(
        code(vigil::config_exists),
        help("Use --force to overwrite it.")
    )]
    ConfigExists { path: String },

    // ── Interactive ──────────────────────────────────────────────────
    #[error("Operation '{action}' requires confirmation")]
    #[diagnostic(
        code(vigil::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    #[error("Refresh was interrupted")]
    #[diagnostic(code(vigil::cancelled))]
    Cancelled,

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render output: {0}")]
    #[diagnostic(code(vigil::render))]
    Render(String),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Conflict { .. } => exit_code::CONFLICT,
            Self::Validation { .. }
            | Self::EscortRequired { .. }
            | Self::SelectionRequired { .. }
            | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::EventNotFound { event_id } => Self::NotFound {
                resource_type: "event".into(),
                identifier: event_id,
                list_command: "events list".into(),
            },
            CoreError::VisitNotFound { visit_id } => Self::NotFound {
                resource_type: "visit".into(),
                identifier: visit_id,
                list_command: "visits list".into(),
            },
            CoreError::ZoneNotFound { zone_id } => Self::NotFound {
                resource_type: "zone".into(),
                identifier: zone_id,
                list_command: "zones list".into(),
            },
            CoreError::EscortRequired { zones, .. } => Self::EscortRequired { zones },
            CoreError::InvalidVisitState {
                visit_id,
                status,
                expected,
            } => Self::Conflict {
                resource_type: "visit".into(),
                identifier: visit_id,
                actual: status.to_string(),
                expected: expected.to_string(),
            },
            CoreError::InvalidRecord { event_id, reason } => Self::Validation {
                field: format!("event {event_id}"),
                reason,
            },
            CoreError::Cancelled => Self::Cancelled,
        }
    }
}
