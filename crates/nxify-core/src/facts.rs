// ── Fact renderer ──
//
// Turns `show running-config | section ^interface` output into
// current-state records. Each block is rendered independently: the
// leading token is the interface name and every attribute is a separate
// pattern lookup against the block text.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;
use crate::model::{
    Attribute, Duplex, InterfaceConfig, InterfaceKind, IpForward, Mode, classify, normalize_name,
};

static LEADING_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\S+)").expect("leading token pattern"));

static INTERFACE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^interface[ \t]+").expect("interface header pattern"));

static DESCRIPTION: LazyLock<Regex> = LazyLock::new(|| argument_pattern("description"));
static SPEED: LazyLock<Regex> = LazyLock::new(|| argument_pattern("speed"));
static MTU: LazyLock<Regex> = LazyLock::new(|| argument_pattern("mtu"));
static DUPLEX: LazyLock<Regex> = LazyLock::new(|| argument_pattern("duplex"));

static SWITCHPORT: LazyLock<Toggle> = LazyLock::new(|| Toggle::new("switchport"));
static SHUTDOWN: LazyLock<Toggle> = LazyLock::new(|| Toggle::new("shutdown"));
static ANYCAST_GATEWAY: LazyLock<Toggle> =
    LazyLock::new(|| Toggle::new("fabric forwarding mode anycast-gateway"));
static IP_FORWARD: LazyLock<Toggle> = LazyLock::new(|| Toggle::new("ip forward"));

/// `<keyword> <argument>` on a line of its own.
fn argument_pattern(keyword: &str) -> Regex {
    Regex::new(&format!(r"(?m)^[ \t]*{}[ \t]+(.+?)\s*$", regex::escape(keyword)))
        .expect("keyword argument pattern")
}

/// A bare command and its `no` form.
struct Toggle {
    set: Regex,
    unset: Regex,
}

impl Toggle {
    fn new(command: &str) -> Self {
        let command = regex::escape(command);
        Self {
            set: Regex::new(&format!(r"(?m)^[ \t]*{command}[ \t]*\r?$")).expect("command pattern"),
            unset: Regex::new(&format!(r"(?m)^[ \t]*no[ \t]+{command}[ \t]*\r?$"))
                .expect("negated command pattern"),
        }
    }

    /// `Some(true)` for the bare command, `Some(false)` for the `no` form,
    /// `None` when the block shows neither.
    fn lookup(&self, block: &str) -> Option<bool> {
        if self.set.is_match(block) {
            Some(true)
        } else if self.unset.is_match(block) {
            Some(false)
        } else {
            None
        }
    }
}

fn argument<'a>(pattern: &Regex, block: &'a str) -> Option<&'a str> {
    pattern
        .captures(block)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

fn invalid(interface: &str, attribute: Attribute, value: &str, reason: impl ToString) -> CoreError {
    CoreError::InvalidAttribute {
        interface: interface.to_owned(),
        attribute: attribute.to_string(),
        value: value.to_owned(),
        reason: reason.to_string(),
    }
}

/// Render one interface block into a current-state record.
///
/// Returns `Ok(None)` for interfaces the engine does not manage
/// (management, NVE, tunnels...). A record always carries `enable`:
/// an interface without a `shutdown` line is administratively up.
pub fn render(block: &str) -> Result<Option<InterfaceConfig>, CoreError> {
    let raw_name = LEADING_TOKEN
        .captures(block)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| CoreError::MalformedBlock {
            block: block.to_owned(),
        })?;

    if classify(raw_name) == InterfaceKind::Unknown {
        tracing::trace!(interface = raw_name, "skipping unmanaged interface");
        return Ok(None);
    }

    let name = normalize_name(raw_name);

    let mtu = argument(&MTU, block)
        .map(|v| v.parse::<u32>().map_err(|e| invalid(&name, Attribute::Mtu, v, e)))
        .transpose()?;
    let duplex = argument(&DUPLEX, block)
        .map(|v| v.parse::<Duplex>().map_err(|e| invalid(&name, Attribute::Duplex, v, e)))
        .transpose()?;

    let config = InterfaceConfig {
        description: argument(&DESCRIPTION, block).map(str::to_owned),
        speed: argument(&SPEED, block).map(str::to_owned),
        mtu,
        duplex,
        mode: SWITCHPORT
            .lookup(block)
            .map(|on| if on { Mode::Layer2 } else { Mode::Layer3 }),
        enable: Some(SHUTDOWN.lookup(block) != Some(true)),
        fabric_forwarding_anycast_gateway: ANYCAST_GATEWAY.lookup(block),
        ip_forward: IP_FORWARD.lookup(block).map(|on| {
            if on {
                IpForward::Enable
            } else {
                IpForward::Disable
            }
        }),
        name,
    };

    tracing::trace!(interface = %config.name, ?config, "rendered interface facts");
    Ok(Some(config))
}

/// Split running-config text into per-interface blocks.
///
/// Each block starts right after the `interface ` keyword, so its first
/// token is the interface name. Text before the first header is ignored.
pub fn split_running_config(text: &str) -> Vec<&str> {
    let headers: Vec<_> = INTERFACE_HEADER.find_iter(text).collect();
    headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let end = headers.get(i + 1).map_or(text.len(), regex::Match::start);
            &text[header.end()..end]
        })
        .filter(|block| !block.trim().is_empty())
        .collect()
}

/// Render every managed interface found in running-config text.
pub fn gather(text: &str) -> Result<Vec<InterfaceConfig>, CoreError> {
    let mut facts = Vec::new();
    for block in split_running_config(text) {
        if let Some(config) = render(block)? {
            facts.push(config);
        }
    }
    tracing::debug!(count = facts.len(), "gathered interface facts");
    Ok(facts)
}
