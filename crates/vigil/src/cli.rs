//! Clap derive structures for the `vigil` CLI.
//!
//! Only depends on clap and clap_complete so `build.rs` can include it to
//! render man pages. Value enums here mirror the core's view types and are
//! converted in the command handlers.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// vigil -- security-event console for the operator desk
#[derive(Debug, Parser)]
#[command(
    name = "vigil",
    version,
    about = "Monitor, triage and acknowledge security events",
    long_about = "Operator console for site security events.\n\n\
        Loads a dataset of buildings, access zones, events and visitor\n\
        visits, then filters, sorts and stacks events for review.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Dataset file (.json, .yaml, .yml or .toml)
    #[arg(long, short = 'd', env = "VIGIL_DATA", global = true)]
    pub data: Option<PathBuf>,

    /// Operator name recorded on acknowledgements
    #[arg(long, env = "VIGIL_OPERATOR", global = true)]
    pub operator: Option<String>,

    /// Output format [default: table]
    #[arg(long, short = 'o', env = "VIGIL_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output [default: auto]
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── View Enums ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    All,
    Acknowledged,
    Unacknowledged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Date,
    Priority,
    Location,
    Type,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DirectionArg {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StackArg {
    None,
    Priority,
    Location,
    Building,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Review and acknowledge security events
    #[command(alias = "ev", alias = "e")]
    Events(EventsArgs),

    /// Inspect access zones and escort requirements
    #[command(alias = "z")]
    Zones(ZonesArgs),

    /// Visitor check-in and check-out
    Visits(VisitsArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Shared View Arguments ────────────────────────────────────────────

/// Filter and sort flags shared by the event views. Unset flags fall back
/// to the configured defaults.
#[derive(Debug, Args)]
pub struct ViewArgs {
    /// Acknowledgement filter
    #[arg(long)]
    pub status: Option<StatusArg>,

    /// Case-insensitive text search across event fields
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Restrict to a building (by id)
    #[arg(long, short = 'b')]
    pub building: Option<String>,

    /// Restrict to a floor of the building (by id)
    #[arg(long, short = 'f', requires = "building")]
    pub floor: Option<String>,

    /// Sort key
    #[arg(long)]
    pub sort: Option<SortArg>,

    /// Sort direction
    #[arg(long)]
    pub direction: Option<DirectionArg>,
}

// ── Events ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct EventsArgs {
    #[command(subcommand)]
    pub command: EventsCommand,
}

#[derive(Debug, Subcommand)]
pub enum EventsCommand {
    /// List events as a table
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        view: ViewArgs,
    },

    /// Show events as cards, optionally stacked into sections
    Cards {
        #[command(flatten)]
        view: ViewArgs,

        /// Group cards into sections
        #[arg(long)]
        stack: Option<StackArg>,
    },

    /// Place events and devices on a floor map
    Map {
        /// Building id
        #[arg(long, short = 'b')]
        building: String,

        /// Floor id within the building
        #[arg(long, short = 'f')]
        floor: String,

        /// Acknowledgement filter
        #[arg(long)]
        status: Option<StatusArg>,

        /// Case-insensitive text search across event fields
        #[arg(long, short = 's')]
        search: Option<String>,
    },

    /// Show dashboard counters
    Summary,

    /// Acknowledge an event as the current operator
    Ack {
        /// Event id
        id: String,

        /// Write the updated dataset back to the data file
        #[arg(long)]
        write: bool,
    },

    /// Refresh repeatedly and print the counters after each refresh
    Watch {
        /// Number of refreshes before exiting (0 = until interrupted)
        #[arg(long, short = 'n', default_value = "0")]
        count: u64,

        /// Override the configured refresh delay in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },
}

// ── Zones ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ZonesArgs {
    #[command(subcommand)]
    pub command: ZonesCommand,
}

#[derive(Debug, Subcommand)]
pub enum ZonesCommand {
    /// List the access-zone catalog
    #[command(alias = "ls")]
    List,

    /// Check whether a zone selection needs an escort
    Check {
        /// Zone id (repeatable; none means an empty selection)
        #[arg(long = "zone", short = 'z')]
        zones: Vec<String>,

        /// Assigned escort
        #[arg(long, short = 'e')]
        escort: Option<String>,
    },
}

// ── Visits ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct VisitsArgs {
    #[command(subcommand)]
    pub command: VisitsCommand,
}

#[derive(Debug, Subcommand)]
pub enum VisitsCommand {
    /// List visits
    #[command(alias = "ls")]
    List,

    /// Check a scheduled visitor in
    CheckIn {
        /// Visit id
        id: String,

        /// Zone id to grant (repeatable)
        #[arg(long = "zone", short = 'z')]
        zones: Vec<String>,

        /// Assigned escort
        #[arg(long, short = 'e')]
        escort: Option<String>,

        /// Write the updated dataset back to the data file
        #[arg(long)]
        write: bool,
    },

    /// Check a visitor out
    CheckOut {
        /// Visit id
        id: String,

        /// Write the updated dataset back to the data file
        #[arg(long)]
        write: bool,
    },
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Print the config file path
    Path,

    /// Write a config file with default values
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell
    pub shell: clap_complete::Shell,
}
