//! Interface reconciliation for NX-OS style switches.
//!
//! Compiles a declared interface configuration into the minimal,
//! ordered list of CLI commands that moves a device from what it is
//! running to what was declared:
//!
//! - **[`facts`]**: Renders `show running-config | section ^interface`
//!   output into current-state [`InterfaceConfig`] records, one block per
//!   interface. Unmanaged interface types are dropped.
//!
//! - **[`reconcile()`]**: The engine. Given desired records, current
//!   records and a [`ReconcileState`] (merged, replaced, overridden,
//!   deleted) it returns the command list. Pure and deterministic: the
//!   output order follows the desired list.
//!
//! - **[`InterfaceCommands`]**: Per-interface command group that emits
//!   the `interface <name>` context line once, and only when needed.
//!
//! - **Domain model** ([`model`]): [`InterfaceConfig`] with explicit
//!   optional fields, interface classification and name normalization.

pub mod command;
pub mod error;
pub mod facts;
pub mod model;
pub mod reconcile;

// ── Primary re-exports ──────────────────────────────────────────────
pub use command::InterfaceCommands;
pub use error::CoreError;
pub use reconcile::{Plan, plan, reconcile};

pub use model::{
    Attribute, Duplex, InterfaceConfig, InterfaceKind, IpForward, Mode, ReconcileState, classify,
    normalize_name, normalize_want,
};
