//! Shared configuration for the nxify tools.
//!
//! A TOML file in the platform config directory, overlaid with `NXIFY_`
//! environment variables. The engine itself never reads configuration:
//! the CLI resolves defaults here and passes plain values to the core.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use nxify_core::ReconcileState;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    /// Reconciliation state used when `--state` is not given.
    #[serde(default = "default_state")]
    pub state: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            state: default_state(),
        }
    }
}

impl Defaults {
    /// The configured default state, validated.
    pub fn state(&self) -> Result<ReconcileState, ConfigError> {
        self.state.parse().map_err(|_| ConfigError::Validation {
            field: "defaults.state".into(),
            reason: format!(
                "expected 'merged', 'replaced', 'overridden' or 'deleted', got '{}'",
                self.state
            ),
        })
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_state() -> String {
    ReconcileState::default().to_string()
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("io", "nxify", "nxify").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("nxify");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical path + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load the full Config from `path` + environment.
///
/// A missing file is not an error: defaults and environment still apply.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("NXIFY_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write it to `path`.
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use figment::Jail;

    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        Jail::expect_with(|jail| {
            let cfg = load_config_from(&jail.directory().join("absent.toml")).unwrap();
            assert_eq!(cfg.defaults.output, "table");
            assert_eq!(cfg.defaults.color, "auto");
            assert_eq!(cfg.defaults.state().unwrap(), ReconcileState::Merged);
            Ok(())
        });
    }

    #[test]
    fn file_values_override_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                "[defaults]\noutput = \"plain\"\nstate = \"overridden\"\n",
            )?;
            let cfg = load_config_from(&jail.directory().join("config.toml")).unwrap();
            assert_eq!(cfg.defaults.output, "plain");
            assert_eq!(cfg.defaults.color, "auto");
            assert_eq!(cfg.defaults.state().unwrap(), ReconcileState::Overridden);
            Ok(())
        });
    }

    #[test]
    fn environment_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", "[defaults]\nstate = \"replaced\"\n")?;
            jail.set_env("NXIFY_DEFAULTS__STATE", "deleted");
            let cfg = load_config_from(&jail.directory().join("config.toml")).unwrap();
            assert_eq!(cfg.defaults.state().unwrap(), ReconcileState::Deleted);
            Ok(())
        });
    }

    #[test]
    fn invalid_state_is_a_validation_error() {
        let defaults = Defaults {
            state: "purged".into(),
            ..Defaults::default()
        };
        assert!(matches!(
            defaults.state(),
            Err(ConfigError::Validation { ref field, .. }) if field == "defaults.state"
        ));
    }

    #[test]
    fn save_round_trips_through_load() {
        Jail::expect_with(|jail| {
            let path = jail.directory().join("nested").join("config.toml");
            let cfg = Config {
                defaults: Defaults {
                    output: "yaml".into(),
                    ..Defaults::default()
                },
            };
            save_config_to(&cfg, &path).unwrap();

            let loaded = load_config_from(&path).unwrap();
            assert_eq!(loaded.defaults.output, "yaml");
            assert_eq!(loaded.defaults.state, "merged");
            Ok(())
        });
    }
}
