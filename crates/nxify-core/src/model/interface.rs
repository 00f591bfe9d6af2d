// ── Interface configuration record ──
//
// One type serves both sides of a reconciliation: the operator's
// desired state ("want") and the state rendered from the running
// config ("have"). `None` always means "not set / not shown by the
// device", never "false".

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::kind::{InterfaceKind, classify};

/// Switchport mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Mode {
    Layer2,
    Layer3,
}

/// `ip forward` state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum IpForward {
    Enable,
    Disable,
}

/// Duplex setting as accepted by the `duplex` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Duplex {
    Full,
    Half,
    Auto,
}

/// The managed attributes of an interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Attribute {
    Description,
    Mode,
    Enable,
    Speed,
    Mtu,
    Duplex,
    IpForward,
    FabricForwardingAnycastGateway,
}

impl Attribute {
    /// Whether the attribute can be configured on this kind of interface.
    pub fn applies_to(self, kind: InterfaceKind) -> bool {
        use InterfaceKind::{Ethernet, Loopback, PortChannel, Svi};

        matches!(
            (self, kind),
            (Self::Description | Self::Enable, Ethernet | Loopback | PortChannel | Svi)
                | (Self::Mode, Ethernet | PortChannel)
                | (Self::Speed | Self::Duplex, Ethernet)
                | (Self::Mtu, Ethernet | PortChannel | Svi)
                | (Self::IpForward | Self::FabricForwardingAnycastGateway, Ethernet | Svi)
        )
    }
}

/// Configuration of a single interface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InterfaceConfig {
    /// Canonical interface name, e.g. `Ethernet1/1`.
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,

    /// Administrative state: `true` is `no shutdown`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mtu: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duplex: Option<Duplex>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_forward: Option<IpForward>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fabric_forwarding_anycast_gateway: Option<bool>,
}

impl InterfaceConfig {
    /// A record carrying only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn kind(&self) -> InterfaceKind {
        classify(&self.name)
    }

    /// Whether the attribute carries a value. Empty strings count as unset.
    pub fn is_set(&self, attribute: Attribute) -> bool {
        match attribute {
            Attribute::Description => self.description.as_deref().is_some_and(|d| !d.is_empty()),
            Attribute::Mode => self.mode.is_some(),
            Attribute::Enable => self.enable.is_some(),
            Attribute::Speed => self.speed.as_deref().is_some_and(|s| !s.is_empty()),
            Attribute::Mtu => self.mtu.is_some(),
            Attribute::Duplex => self.duplex.is_some(),
            Attribute::IpForward => self.ip_forward.is_some(),
            Attribute::FabricForwardingAnycastGateway => {
                self.fabric_forwarding_anycast_gateway.is_some()
            }
        }
    }
}

/// Find a record by canonical name.
pub fn find_by_name<'a>(records: &'a [InterfaceConfig], name: &str) -> Option<&'a InterfaceConfig> {
    records.iter().find(|r| r.name == name)
}
