// ── Shared per-interface merge ──
//
// Used by every state. Against a missing interface every declared
// attribute is emitted as-is; against an existing one only the
// attributes whose declared value differs are emitted.

use crate::command::InterfaceCommands;
use crate::model::{Attribute, InterfaceConfig, InterfaceKind, IpForward, Mode};

/// Emission order for merged attributes.
const MERGE_ORDER: [Attribute; 8] = [
    Attribute::Mode,
    Attribute::Enable,
    Attribute::IpForward,
    Attribute::FabricForwardingAnycastGateway,
    Attribute::Speed,
    Attribute::Description,
    Attribute::Duplex,
    Attribute::Mtu,
];

pub(crate) const ANYCAST_GATEWAY: &str = "fabric forwarding mode anycast-gateway";

pub(crate) fn admin_state_command(enable: bool) -> &'static str {
    if enable { "no shutdown" } else { "shutdown" }
}

/// The command that sets `attribute` to the value declared in `want`.
fn set_command(want: &InterfaceConfig, attribute: Attribute) -> Option<String> {
    match attribute {
        Attribute::Mode => want.mode.map(|mode| match mode {
            Mode::Layer2 => "switchport".to_owned(),
            Mode::Layer3 => "no switchport".to_owned(),
        }),
        Attribute::Enable => want.enable.map(|e| admin_state_command(e).to_owned()),
        Attribute::IpForward => want.ip_forward.map(|f| match f {
            IpForward::Enable => "ip forward".to_owned(),
            IpForward::Disable => "no ip forward".to_owned(),
        }),
        Attribute::FabricForwardingAnycastGateway => {
            want.fabric_forwarding_anycast_gateway.map(|on| {
                if on {
                    ANYCAST_GATEWAY.to_owned()
                } else {
                    format!("no {ANYCAST_GATEWAY}")
                }
            })
        }
        Attribute::Speed => want
            .speed
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(|s| format!("speed {s}")),
        Attribute::Description => want
            .description
            .as_deref()
            .filter(|d| !d.is_empty())
            .map(|d| format!("description {d}")),
        Attribute::Duplex => want.duplex.map(|d| format!("duplex {d}")),
        Attribute::Mtu => want.mtu.map(|m| format!("mtu {m}")),
    }
}

/// Whether the declared value of `attribute` differs from the current one.
fn differs(want: &InterfaceConfig, have: &InterfaceConfig, attribute: Attribute) -> bool {
    match attribute {
        Attribute::Description => want.description != have.description,
        Attribute::Mode => want.mode != have.mode,
        Attribute::Enable => want.enable != have.enable,
        Attribute::Speed => want.speed != have.speed,
        Attribute::Mtu => want.mtu != have.mtu,
        Attribute::Duplex => want.duplex != have.duplex,
        Attribute::IpForward => want.ip_forward != have.ip_forward,
        Attribute::FabricForwardingAnycastGateway => {
            want.fabric_forwarding_anycast_gateway != have.fabric_forwarding_anycast_gateway
        }
    }
}

/// Declared attributes that can be applied to this kind of interface.
fn applicable(want: &InterfaceConfig, kind: InterfaceKind) -> impl Iterator<Item = Attribute> + '_ {
    MERGE_ORDER.into_iter().filter(move |&attribute| {
        if !want.is_set(attribute) {
            return false;
        }
        let applies = attribute.applies_to(kind);
        if !applies {
            tracing::warn!(
                interface = %want.name,
                %attribute,
                %kind,
                "attribute does not apply to this interface type, skipping"
            );
        }
        applies
    })
}

/// Commands that bring one interface from `have` to `want`.
///
/// `have == None` means the interface does not exist (or has just been
/// removed or reset), so the context line is emitted even when nothing
/// else is declared: it creates the interface.
pub(crate) fn merge_interface(
    want: &InterfaceConfig,
    have: Option<&InterfaceConfig>,
) -> Vec<String> {
    let kind = want.kind();
    if !kind.is_managed() {
        tracing::warn!(interface = %want.name, "unknown interface type, leaving untouched");
        return Vec::new();
    }

    let mut group = InterfaceCommands::new(&want.name);

    let Some(have) = have else {
        group.ensure_context();
        for attribute in applicable(want, kind) {
            if let Some(command) = set_command(want, attribute) {
                group.push(command);
            }
        }
        return group.into_commands();
    };

    for attribute in applicable(want, kind) {
        if differs(want, have, attribute) {
            if let Some(command) = set_command(want, attribute) {
                group.push(command);
            }
        }
    }

    // A switchport mode change resets the admin state on the device,
    // so the intended state is asserted again afterwards.
    if kind == InterfaceKind::Ethernet && want.mode.is_some() && want.mode != have.mode {
        if let Some(enable) = want.enable.or(have.enable) {
            group.push(admin_state_command(enable));
        }
    }

    if !group.is_empty() {
        tracing::debug!(interface = %want.name, "interface differs from running config");
    }
    group.into_commands()
}
