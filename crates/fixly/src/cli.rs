//! Clap derive structures for the `fixly` CLI.
//!
//! Defines the complete command tree, global flags, and shared value
//! enums (including the CLI-side mirrors of the core domain enums).

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use fixly_core::{DeviceStatus, PartType, Urgency};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// fixly -- manage an electronics repair workshop from the command line
#[derive(Debug, Parser)]
#[command(
    name = "fixly",
    version,
    about = "Track devices in repair and a spare-parts inventory",
    long_about = "A small workshop manager.\n\n\
        Works against a workshop server when one is reachable, and falls\n\
        back to a durable local store for the session otherwise.",
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
    /// Workshop server URL (overrides the config file)
    #[arg(long, short = 's', env = "FIXLY_SERVER", global = true)]
    pub server: Option<String>,

    /// API token for the workshop server
    #[arg(long, env = "FIXLY_API_TOKEN", global = true, hide_env = true)]
    pub api_token: Option<String>,

    /// Local data directory (slot files)
    #[arg(long, env = "FIXLY_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Skip the server probe and run against the local store
    #[arg(long, global = true)]
    pub offline: bool,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "FIXLY_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Request timeout in seconds
    #[arg(long, env = "FIXLY_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
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

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Domain value enums ───────────────────────────────────────────────
//
// CLI-side mirrors so clap can offer kebab-case values and completion;
// converted into the core enums at the handler boundary.

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StatusArg {
    Received,
    InProgress,
    WaitingParts,
    Ready,
    Issued,
}

impl From<StatusArg> for DeviceStatus {
    fn from(s: StatusArg) -> Self {
        match s {
            StatusArg::Received => Self::Received,
            StatusArg::InProgress => Self::InProgress,
            StatusArg::WaitingParts => Self::WaitingParts,
            StatusArg::Ready => Self::Ready,
            StatusArg::Issued => Self::Issued,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum UrgencyArg {
    Normal,
    High,
    Critical,
}

impl From<UrgencyArg> for Urgency {
    fn from(u: UrgencyArg) -> Self {
        match u {
            UrgencyArg::Normal => Self::Normal,
            UrgencyArg::High => Self::High,
            UrgencyArg::Critical => Self::Critical,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PartTypeArg {
    Capacitor,
    Resistor,
    Diode,
    Transistor,
    Led,
    Chip,
    Connector,
    Switch,
    Fuse,
    Module,
    Other,
}

impl From<PartTypeArg> for PartType {
    fn from(t: PartTypeArg) -> Self {
        match t {
            PartTypeArg::Capacitor => Self::Capacitor,
            PartTypeArg::Resistor => Self::Resistor,
            PartTypeArg::Diode => Self::Diode,
            PartTypeArg::Transistor => Self::Transistor,
            PartTypeArg::Led => Self::Led,
            PartTypeArg::Chip => Self::Chip,
            PartTypeArg::Connector => Self::Connector,
            PartTypeArg::Switch => Self::Switch,
            PartTypeArg::Fuse => Self::Fuse,
            PartTypeArg::Module => Self::Module,
            PartTypeArg::Other => Self::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StockArg {
    /// Available on the shelf
    In,
    /// Flagged to purchase
    Out,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage devices in repair
    #[command(alias = "dev", alias = "d")]
    Devices(DevicesArgs),

    /// Manage the spare-parts inventory
    #[command(alias = "p")]
    Parts(PartsArgs),

    /// Ask the diagnostic assistant for a suggestion
    Advice(AdviceArgs),

    /// Show the session mode (online vs offline)
    Status,

    /// Manage configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Devices ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct DevicesArgs {
    #[command(subcommand)]
    pub command: DevicesCommand,
}

#[derive(Debug, Subcommand)]
pub enum DevicesCommand {
    /// List all devices
    #[command(alias = "ls")]
    List,

    /// List devices flagged for the work plan
    Planned,

    /// Show one device in detail
    Show {
        /// Device id (a unique prefix is enough)
        id: String,
    },

    /// Register a new device at the intake desk
    Add {
        /// Customer name
        client: String,

        /// Device make/model
        model: String,

        /// Fault description
        #[arg(long, default_value = "")]
        issue: String,

        /// Urgency
        #[arg(long, value_enum, default_value = "normal")]
        urgency: UrgencyArg,

        /// Put the device on the work plan right away
        #[arg(long)]
        planned: bool,
    },

    /// Move a device to a new workflow status
    SetStatus {
        /// Device id (a unique prefix is enough)
        id: String,

        /// New status
        #[arg(value_enum)]
        status: StatusArg,
    },

    /// Change a device's urgency
    SetUrgency {
        /// Device id (a unique prefix is enough)
        id: String,

        #[arg(value_enum)]
        urgency: UrgencyArg,
    },

    /// Add or remove a device from the work plan
    Plan {
        /// Device id (a unique prefix is enough)
        id: String,

        /// Remove from the plan instead of adding
        #[arg(long)]
        remove: bool,
    },

    /// Replace a device's notes
    Note {
        /// Device id (a unique prefix is enough)
        id: String,

        /// Note text (empty clears the note)
        text: String,
    },

    /// Delete a device record
    #[command(alias = "rm")]
    Delete {
        /// Device id (a unique prefix is enough)
        id: String,
    },
}

// ── Parts ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct PartsArgs {
    #[command(subcommand)]
    pub command: PartsCommand,
}

#[derive(Debug, Subcommand)]
pub enum PartsCommand {
    /// List all inventory lines
    #[command(alias = "ls")]
    List,

    /// List lines flagged to purchase
    ToBuy,

    /// Add a new inventory line
    Add {
        /// Label or value, e.g. "10uF 25V"
        name: String,

        /// Component category
        #[arg(long = "type", value_enum)]
        part_type: PartTypeArg,

        /// Subcategory (see `fixly parts subtypes <type>`)
        #[arg(long)]
        subtype: Option<String>,

        /// Initial count (defaults to 1)
        #[arg(long)]
        quantity: Option<u32>,
    },

    /// Set the count of an inventory line
    SetQuantity {
        /// Part id (a unique prefix is enough)
        id: String,

        quantity: u32,
    },

    /// Mark a line as in stock or flagged to purchase
    SetStock {
        /// Part id (a unique prefix is enough)
        id: String,

        #[arg(value_enum)]
        stock: StockArg,
    },

    /// Show the suggested subcategories for a component type
    Subtypes {
        #[arg(value_enum)]
        part_type: PartTypeArg,
    },

    /// Delete an inventory line
    #[command(alias = "rm")]
    Delete {
        /// Part id (a unique prefix is enough)
        id: String,
    },
}

// ── Advice ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct AdviceArgs {
    /// Symptom description, e.g. "TV has sound but no image"
    pub prompt: String,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create or update the config file interactively
    Init,

    /// Print the config file path
    Path,

    /// Print the effective configuration
    Show,

    /// Store the server API token in the system keyring
    SetToken,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
