//! Command dispatch: bridges CLI args -> engine -> output formatting.

pub mod config_cmd;
pub mod facts;
pub mod plan;
pub mod util;

use clap::ValueEnum;

use nxify_config::Config;
use nxify_core::ReconcileState;

use crate::cli::{ColorMode, Command, GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

/// Settings resolved from flags, environment and the config file.
#[derive(Debug, Clone)]
pub struct Context {
    pub output: OutputFormat,
    pub color: bool,
    pub quiet: bool,
    /// State used when a command doesn't name one.
    pub state: ReconcileState,
}

impl Context {
    /// Flags win over the config file; the config file wins over built-ins.
    pub fn resolve(global: &GlobalOpts, cfg: &Config) -> Result<Self, CliError> {
        let output = match global.output {
            Some(format) => format,
            None => parse_value(&cfg.defaults.output, "defaults.output")?,
        };
        let color = match global.color {
            Some(mode) => mode,
            None => parse_value::<ColorMode>(&cfg.defaults.color, "defaults.color")?,
        };

        Ok(Self {
            output,
            color: output::should_color(color),
            quiet: global.quiet,
            state: cfg.defaults.state()?,
        })
    }
}

fn parse_value<T: ValueEnum>(raw: &str, field: &str) -> Result<T, CliError> {
    T::from_str(raw, true).map_err(|_| {
        let expected: Vec<String> = T::value_variants()
            .iter()
            .filter_map(|v| v.to_possible_value().map(|p| p.get_name().to_owned()))
            .collect();
        CliError::Validation {
            field: field.into(),
            reason: format!("expected one of {}, got '{raw}'", expected.join(", ")),
        }
    })
}

/// Dispatch a planning command to the appropriate handler.
pub fn dispatch(cmd: &Command, ctx: &Context) -> Result<(), CliError> {
    match cmd {
        Command::Plan(args) => plan::handle(args, ctx),
        Command::Facts(args) => facts::handle(args, ctx),
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
