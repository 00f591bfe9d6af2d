//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text and a stable process exit code.

use miette::Diagnostic;
use thiserror::Error;

use nxify_config::ConfigError;
use nxify_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const INVALID_INPUT: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONFLICT: i32 = 6;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Inputs ───────────────────────────────────────────────────────
    #[error("Input file not found: {path}")]
    #[diagnostic(
        code(nxify::file_not_found),
        help("Check the path, or pass '-' to read the running config from stdin.")
    )]
    FileNotFound { path: String },

    #[error("Could not parse desired interfaces from {path}")]
    #[diagnostic(
        code(nxify::want_parse),
        help(
            "Expected a YAML or JSON list of interface records, e.g.\n\
             - name: Ethernet1/1\n  \
               mode: layer2\n  \
               enable: true"
        )
    )]
    WantParse {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Desired interfaces were rejected")]
    #[diagnostic(
        code(nxify::invalid_declaration),
        help("Every record needs a unique interface name. Fix the declaration and plan again.")
    )]
    InvalidDeclaration {
        #[source]
        source: CoreError,
    },

    #[error("Running configuration could not be rendered")]
    #[diagnostic(
        code(nxify::invalid_running_config),
        help("Pass the output of `show running-config | section ^interface` unmodified.")
    )]
    InvalidRunningConfig {
        #[source]
        source: CoreError,
    },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(nxify::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Configuration file already exists at {path}")]
    #[diagnostic(
        code(nxify::config_exists),
        help("Use --force to overwrite it, or edit it directly.")
    )]
    ConfigExists { path: String },

    #[error(transparent)]
    #[diagnostic(code(nxify::config))]
    Config(Box<figment::Error>),

    #[error(transparent)]
    #[diagnostic(code(nxify::config))]
    ConfigFile(ConfigError),

    // ── IO / Serialization ────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render JSON output: {0}")]
    #[diagnostic(code(nxify::json))]
    Json(#[from] serde_json::Error),

    #[error("Failed to render YAML output: {0}")]
    #[diagnostic(code(nxify::yaml))]
    Yaml(#[from] serde_yaml::Error),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. } => exit_code::NOT_FOUND,
            Self::WantParse { .. }
            | Self::InvalidDeclaration { .. }
            | Self::InvalidRunningConfig { .. } => exit_code::INVALID_INPUT,
            Self::Validation { .. } => exit_code::USAGE,
            Self::ConfigExists { .. } => exit_code::CONFLICT,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::MissingName { .. }
            | CoreError::UnnormalizedName { .. }
            | CoreError::DuplicateInterface { .. } => Self::InvalidDeclaration { source: err },
            CoreError::MalformedBlock { .. } | CoreError::InvalidAttribute { .. } => {
                Self::InvalidRunningConfig { source: err }
            }
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            ConfigError::Figment(inner) => Self::Config(inner),
            ConfigError::Io(inner) => Self::Io(inner),
            other @ ConfigError::Serialization(_) => Self::ConfigFile(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declaration_errors_are_invalid_input() {
        let err = CliError::from(CoreError::DuplicateInterface {
            name: "loopback0".into(),
        });
        assert!(matches!(err, CliError::InvalidDeclaration { .. }));
        assert_eq!(err.exit_code(), exit_code::INVALID_INPUT);
    }

    #[test]
    fn parse_errors_point_at_the_running_config() {
        let err = CliError::from(CoreError::MalformedBlock {
            block: "   ".into(),
        });
        assert!(matches!(err, CliError::InvalidRunningConfig { .. }));
        assert_eq!(err.exit_code(), exit_code::INVALID_INPUT);
    }

    #[test]
    fn config_validation_is_a_usage_error() {
        let err = CliError::from(ConfigError::Validation {
            field: "defaults.state".into(),
            reason: "nope".into(),
        });
        assert_eq!(err.exit_code(), exit_code::USAGE);
    }
}
