//! Shared helpers for command handlers.

use std::io::{self, Read};
use std::path::Path;

use nxify_core::InterfaceConfig;

use crate::error::CliError;

/// Read a text input; `-` means stdin.
pub fn read_text(path: &Path) -> Result<String, CliError> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CliError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CliError::Io(e),
    })
}

/// Read desired interface records: JSON for `.json` files, YAML otherwise.
pub fn read_want(path: &Path) -> Result<Vec<InterfaceConfig>, CliError> {
    let contents = read_text(path)?;
    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }
    parse_want(path, &contents)
}

fn parse_want(path: &Path, contents: &str) -> Result<Vec<InterfaceConfig>, CliError> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let parsed: Result<Vec<InterfaceConfig>, Box<dyn std::error::Error + Send + Sync>> =
        if is_json {
            serde_json::from_str(contents).map_err(Into::into)
        } else {
            serde_yaml::from_str(contents).map_err(Into::into)
        };

    parsed.map_err(|source| CliError::WantParse {
        path: path.display().to_string(),
        source,
    })
}
