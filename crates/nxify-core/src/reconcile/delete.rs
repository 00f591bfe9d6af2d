// ── Undo and reset ──
//
// `deleted` walks the attributes the device actually shows and emits
// the command that returns each one to its implicit default.
// `overridden` uses the reset test to decide whether an undeclared
// Ethernet port needs `default interface`.

use crate::command::InterfaceCommands;
use crate::model::{Attribute, InterfaceConfig, InterfaceKind, IpForward, Mode};

use super::merge::ANYCAST_GATEWAY;

const DELETE_ORDER: [Attribute; 8] = [
    Attribute::Description,
    Attribute::Enable,
    Attribute::Mode,
    Attribute::Speed,
    Attribute::Duplex,
    Attribute::Mtu,
    Attribute::IpForward,
    Attribute::FabricForwardingAnycastGateway,
];

/// Attributes whose presence marks an undeclared Ethernet port as configured.
///
/// `enable` is not among them: a port that is only shut down is treated
/// as already at its default.
const RESET_MONITORED: [Attribute; 7] = [
    Attribute::Description,
    Attribute::Mode,
    Attribute::Mtu,
    Attribute::Speed,
    Attribute::Duplex,
    Attribute::IpForward,
    Attribute::FabricForwardingAnycastGateway,
];

/// Whether `attribute` is undone on this kind of interface.
///
/// Narrower than [`Attribute::applies_to`]: a port-channel's switchport
/// mode follows its members and is never reset here.
fn undo_applies_to(attribute: Attribute, kind: InterfaceKind) -> bool {
    match attribute {
        Attribute::Mode => kind == InterfaceKind::Ethernet,
        _ => attribute.applies_to(kind),
    }
}

/// The command that undoes the current value of `attribute`, if it is
/// not already at its default.
fn undo_command(have: &InterfaceConfig, attribute: Attribute) -> Option<String> {
    match attribute {
        Attribute::Enable => (have.enable == Some(false)).then(|| "no shutdown".to_owned()),
        Attribute::Mode => (have.mode == Some(Mode::Layer3)).then(|| "switchport".to_owned()),
        Attribute::IpForward => {
            (have.ip_forward == Some(IpForward::Enable)).then(|| "no ip forward".to_owned())
        }
        Attribute::FabricForwardingAnycastGateway => {
            let configured = have.fabric_forwarding_anycast_gateway == Some(true);
            configured.then(|| format!("no {ANYCAST_GATEWAY}"))
        }
        Attribute::Description | Attribute::Speed | Attribute::Duplex | Attribute::Mtu => {
            have.is_set(attribute).then(|| format!("no {attribute}"))
        }
    }
}

/// Commands that return an existing interface to its defaults.
pub(crate) fn delete_interface(
    want: &InterfaceConfig,
    have: Option<&InterfaceConfig>,
) -> Vec<String> {
    let kind = want.kind();
    let Some(have) = have else {
        tracing::debug!(interface = %want.name, "not present on device, nothing to delete");
        return Vec::new();
    };
    if !kind.is_managed() {
        return Vec::new();
    }

    let mut group = InterfaceCommands::new(&want.name);
    for attribute in DELETE_ORDER {
        if !undo_applies_to(attribute, kind) {
            continue;
        }
        if let Some(command) = undo_command(have, attribute) {
            group.push(command);
        }
    }
    group.into_commands()
}

/// Whether an undeclared Ethernet port carries configuration worth resetting.
pub(crate) fn needs_reset(have: &InterfaceConfig) -> bool {
    RESET_MONITORED
        .into_iter()
        .any(|attribute| have.is_set(attribute))
}
