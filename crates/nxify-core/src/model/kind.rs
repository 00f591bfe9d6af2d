// ── Interface naming and classification ──
//
// Names arrive in whatever form the operator or the device used
// ("eth1/1", "Eth 1/1", "Po10"). The engine only ever compares
// canonical names, so everything funnels through `normalize_name`.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Interface classification derived from the name prefix.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum InterfaceKind {
    Ethernet,
    Loopback,
    PortChannel,
    Svi,
    Unknown,
}

impl InterfaceKind {
    /// Logical interfaces can be removed outright with `no interface`.
    pub fn is_logical(self) -> bool {
        matches!(self, Self::Loopback | Self::PortChannel | Self::Svi)
    }

    pub fn is_managed(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

/// Classify an interface by its (case-insensitive) name prefix.
///
/// Management, NVE and tunnel interfaces are `Unknown`:
/// the engine leaves them alone.
pub fn classify(name: &str) -> InterfaceKind {
    let lower = name.trim().to_ascii_lowercase();
    if lower.starts_with("et") {
        InterfaceKind::Ethernet
    } else if lower.starts_with("vl") {
        InterfaceKind::Svi
    } else if lower.starts_with("lo") {
        InterfaceKind::Loopback
    } else if lower.starts_with("po") {
        InterfaceKind::PortChannel
    } else {
        InterfaceKind::Unknown
    }
}

/// Canonical interface name as NX-OS prints it in the running config.
///
/// `"eth1/1"`, `"Eth 1/1"` and `"Ethernet1/1"` all become `"Ethernet1/1"`.
/// Names with an unrecognized prefix are returned unchanged.
pub fn normalize_name(name: &str) -> String {
    let trimmed = name.trim();
    let lower = trimmed.to_ascii_lowercase();

    let prefix = if lower.starts_with("et") {
        "Ethernet"
    } else if lower.starts_with("vl") {
        "Vlan"
    } else if lower.starts_with("lo") {
        "loopback"
    } else if lower.starts_with("po") {
        "port-channel"
    } else if lower.starts_with("nv") {
        "nve"
    } else {
        return trimmed.to_owned();
    };

    let mut words = trimmed.split_whitespace();
    let number = match (words.next(), words.next(), words.next()) {
        (Some(_), Some(number), None) => number.to_owned(),
        _ => trimmed
            .chars()
            .filter(|c| c.is_ascii_digit() || matches!(c, '/' | '.'))
            .collect(),
    };

    format!("{prefix}{number}")
}
