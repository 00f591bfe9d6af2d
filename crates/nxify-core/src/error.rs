// ── Core error types ──
//
// Every variant is a contract violation on the inputs handed to the
// engine or the renderer. Nothing here is retryable: callers fix the
// input and run again. Variants carry the interface name (and the
// attribute, where one is involved) so the CLI can point at the culprit.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    // ── Desired-state preconditions ──────────────────────────────────
    #[error("Desired interface #{index} has no name")]
    MissingName { index: usize },

    #[error("Interface name '{name}' is not normalized (expected '{expected}')")]
    UnnormalizedName { name: String, expected: String },

    #[error("Interface '{name}' is declared more than once")]
    DuplicateInterface { name: String },

    // ── Running-config parsing ───────────────────────────────────────
    #[error("Configuration block has no leading interface name: {block:?}")]
    MalformedBlock { block: String },

    #[error("Invalid {attribute} '{value}' on interface {interface}: {reason}")]
    InvalidAttribute {
        interface: String,
        attribute: String,
        value: String,
        reason: String,
    },
}
