//! Clap derive structures for the `nxify` CLI.
//!
//! Defines the command tree, global flags, and shared value enums.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use nxify_core::ReconcileState;

// ── Top-Level CLI ────────────────────────────────────────────────────

/// nxify -- compile declared switch interface state into NX-OS commands
#[derive(Debug, Parser)]
#[command(
    name = "nxify",
    version,
    about = "Reconcile NX-OS interface configuration from the command line",
    long_about = "Compares a declared interface configuration against a device's\n\
        running configuration and prints the minimal, ordered list of NX-OS\n\
        commands that brings the device to the declared state.",
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
    /// Output format (defaults to the configured output, then table)
    #[arg(long, short = 'o', env = "NXIFY_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Configuration file to use instead of the platform default
    #[arg(long, env = "NXIFY_CONFIG", global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
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

/// Reconciliation state, as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StateArg {
    /// Add or change declared attributes only
    Merged,
    /// Reset each declared interface, then apply its declaration
    Replaced,
    /// Reset undeclared interfaces, then merge declared ones
    Overridden,
    /// Return each declared interface to its defaults
    Deleted,
}

impl From<StateArg> for ReconcileState {
    fn from(arg: StateArg) -> Self {
        match arg {
            StateArg::Merged => Self::Merged,
            StateArg::Replaced => Self::Replaced,
            StateArg::Overridden => Self::Overridden,
            StateArg::Deleted => Self::Deleted,
        }
    }
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute the commands that reconcile the running config with a declaration
    #[command(alias = "p")]
    Plan(PlanArgs),

    /// Show the interface facts rendered from a running config
    #[command(alias = "f")]
    Facts(FactsArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Plan / Facts ─────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct PlanArgs {
    /// Desired interfaces: a YAML or JSON list of interface records
    #[arg(long, short = 'w', value_name = "FILE")]
    pub want: PathBuf,

    /// Output of `show running-config | section ^interface` ("-" for stdin)
    #[arg(long, short = 'r', value_name = "FILE")]
    pub running: PathBuf,

    /// Reconciliation state (defaults to the configured state, then merged)
    #[arg(long, short = 's', value_enum)]
    pub state: Option<StateArg>,
}

#[derive(Debug, Args)]
pub struct FactsArgs {
    /// Output of `show running-config | section ^interface` ("-" for stdin)
    #[arg(long, short = 'r', value_name = "FILE")]
    pub running: PathBuf,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Display current resolved configuration
    Show,

    /// Print the config file location
    Path,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
