// ── Domain model ──
//
// Canonical types shared by the fact renderer and the reconciliation
// engine. Both sides of a run use `InterfaceConfig`; classification and
// name normalization are pure functions over the interface name.

pub mod interface;
pub mod kind;
pub mod state;

pub use interface::{Attribute, Duplex, InterfaceConfig, IpForward, Mode, find_by_name};
pub use kind::{InterfaceKind, classify, normalize_name};
pub use state::ReconcileState;

/// Return a copy of `want` with every interface name normalized.
///
/// The input is left untouched so the caller keeps the records exactly
/// as the operator wrote them.
pub fn normalize_want(want: &[InterfaceConfig]) -> Vec<InterfaceConfig> {
    want.iter()
        .map(|w| InterfaceConfig {
            name: normalize_name(&w.name),
            ..w.clone()
        })
        .collect()
}
