// ── Reconciliation state ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// How the desired records are applied against the running config.
///
/// One value governs an entire run; it is never chosen per interface.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ReconcileState {
    /// Add or change what is declared, leave everything else.
    #[default]
    Merged,
    /// Reset each declared interface, then apply its declaration.
    Replaced,
    /// Reset every undeclared interface, then merge the declared ones.
    Overridden,
    /// Undo the current configuration of each declared interface.
    Deleted,
}
