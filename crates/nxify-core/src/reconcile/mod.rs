// ── Reconciliation engine ──
//
// Compiles desired interface records plus the rendered running config
// into an ordered list of CLI lines. Each state is its own function;
// all of them share the per-interface merge. The engine is pure: no
// I/O, no state carried between runs.

mod delete;
mod merge;

use std::collections::HashSet;

use serde::Serialize;

use crate::error::CoreError;
use crate::model::{InterfaceConfig, InterfaceKind, ReconcileState, find_by_name, normalize_name};

use self::delete::{delete_interface, needs_reset};
use self::merge::merge_interface;

/// Outcome of a reconciliation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub state: ReconcileState,
    /// Whether any command needs to be sent.
    pub changed: bool,
    pub commands: Vec<String>,
    /// The current-state records the plan was computed against.
    pub before: Vec<InterfaceConfig>,
}

/// Reconcile and keep the inputs alongside the result.
pub fn plan(
    want: &[InterfaceConfig],
    have: &[InterfaceConfig],
    state: ReconcileState,
) -> Result<Plan, CoreError> {
    let commands = reconcile(want, have, state)?;
    Ok(Plan {
        state,
        changed: !commands.is_empty(),
        commands,
        before: have.to_vec(),
    })
}

/// Produce the commands that move the device from `have` to `want`.
///
/// `want` names must already be normalized (see
/// [`normalize_want`](crate::model::normalize_want)); the run fails
/// before emitting anything if a name is missing, not canonical, or
/// declared twice.
pub fn reconcile(
    want: &[InterfaceConfig],
    have: &[InterfaceConfig],
    state: ReconcileState,
) -> Result<Vec<String>, CoreError> {
    validate_want(want)?;

    tracing::debug!(%state, want = want.len(), have = have.len(), "reconciling interfaces");

    let commands = match state {
        ReconcileState::Merged => merged(want, have),
        ReconcileState::Replaced => replaced(want),
        ReconcileState::Overridden => overridden(want, have),
        ReconcileState::Deleted => deleted(want, have),
    };

    tracing::debug!(%state, commands = commands.len(), "reconciliation complete");
    Ok(commands)
}

fn validate_want(want: &[InterfaceConfig]) -> Result<(), CoreError> {
    let mut seen = HashSet::with_capacity(want.len());
    for (index, w) in want.iter().enumerate() {
        if w.name.trim().is_empty() {
            return Err(CoreError::MissingName { index });
        }
        let expected = normalize_name(&w.name);
        if expected != w.name {
            return Err(CoreError::UnnormalizedName {
                name: w.name.clone(),
                expected,
            });
        }
        if !seen.insert(w.name.as_str()) {
            return Err(CoreError::DuplicateInterface {
                name: w.name.clone(),
            });
        }
    }
    Ok(())
}

fn merged(want: &[InterfaceConfig], have: &[InterfaceConfig]) -> Vec<String> {
    want.iter()
        .flat_map(|w| merge_interface(w, find_by_name(have, &w.name)))
        .collect()
}

fn replaced(want: &[InterfaceConfig]) -> Vec<String> {
    let mut commands = Vec::new();
    for w in want {
        let reset = match w.kind() {
            kind if kind.is_logical() => format!("no interface {}", w.name),
            InterfaceKind::Ethernet => format!("default interface {}", w.name),
            _ => {
                tracing::warn!(interface = %w.name, "unknown interface type, not replacing");
                continue;
            }
        };
        commands.push(reset);
        // The reset wiped the previous configuration.
        commands.extend(merge_interface(w, None));
    }
    commands
}

fn overridden(want: &[InterfaceConfig], have: &[InterfaceConfig]) -> Vec<String> {
    let mut commands = Vec::new();

    // Removals first: they must never land after the merge commands.
    for h in have {
        if find_by_name(want, &h.name).is_some() {
            continue;
        }
        match h.kind() {
            kind if kind.is_logical() => {
                tracing::debug!(interface = %h.name, "removing undeclared interface");
                commands.push(format!("no interface {}", h.name));
            }
            InterfaceKind::Ethernet if needs_reset(h) => {
                tracing::debug!(interface = %h.name, "resetting undeclared port");
                commands.push(format!("default interface {}", h.name));
            }
            _ => {}
        }
    }

    commands.extend(merged(want, have));
    commands
}

fn deleted(want: &[InterfaceConfig], have: &[InterfaceConfig]) -> Vec<String> {
    want.iter()
        .flat_map(|w| delete_interface(w, find_by_name(have, &w.name)))
        .collect()
}
