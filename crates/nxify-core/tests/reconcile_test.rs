//! End-to-end behaviour of the reconciliation engine across all states.
#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;

use nxify_core::facts::gather;
use nxify_core::{
    Duplex, InterfaceConfig, IpForward, Mode, ReconcileState, normalize_want, reconcile,
};

// ── Helpers ─────────────────────────────────────────────────────────

fn named(name: &str) -> InterfaceConfig {
    InterfaceConfig::named(name)
}

/// One fully populated record per managed interface kind.
fn populated() -> Vec<InterfaceConfig> {
    vec![
        InterfaceConfig {
            description: Some("server port".into()),
            mode: Some(Mode::Layer3),
            enable: Some(true),
            speed: Some("10000".into()),
            mtu: Some(9216),
            duplex: Some(Duplex::Full),
            ip_forward: Some(IpForward::Enable),
            fabric_forwarding_anycast_gateway: Some(true),
            ..named("Ethernet1/1")
        },
        InterfaceConfig {
            description: Some("router id".into()),
            enable: Some(true),
            ..named("loopback0")
        },
        InterfaceConfig {
            description: Some("vpc peer".into()),
            mode: Some(Mode::Layer2),
            enable: Some(false),
            mtu: Some(9216),
            ..named("port-channel10")
        },
        InterfaceConfig {
            description: Some("tenant".into()),
            enable: Some(true),
            mtu: Some(9000),
            ip_forward: Some(IpForward::Enable),
            fabric_forwarding_anycast_gateway: Some(true),
            ..named("Vlan100")
        },
    ]
}

/// Every `interface X` line appears once and is followed by a command for X.
fn assert_context_discipline(commands: &[String]) {
    let mut seen = std::collections::HashSet::new();
    for (i, line) in commands.iter().enumerate() {
        if let Some(name) = line.strip_prefix("interface ") {
            assert!(seen.insert(name.to_owned()), "duplicate context for {name}: {commands:?}");
            let next = commands.get(i + 1);
            assert!(
                next.is_some_and(|n| !n.starts_with("interface ")),
                "context for {name} has no command after it: {commands:?}"
            );
        }
    }
}

// ── Concrete scenarios ──────────────────────────────────────────────

#[test]
fn merged_creates_missing_ethernet() {
    let want = vec![InterfaceConfig {
        mode: Some(Mode::Layer2),
        enable: Some(true),
        ..named("Ethernet1/1")
    }];
    assert_eq!(
        reconcile(&want, &[], ReconcileState::Merged).unwrap(),
        ["interface Ethernet1/1", "switchport", "no shutdown"]
    );
}

#[test]
fn replaced_recreates_logical_interface() {
    let want = vec![named("loopback0")];
    let have = vec![InterfaceConfig {
        description: Some("old".into()),
        ..named("loopback0")
    }];
    assert_eq!(
        reconcile(&want, &have, ReconcileState::Replaced).unwrap(),
        ["no interface loopback0", "interface loopback0"]
    );
}

#[test]
fn merged_with_matching_mtu_is_a_no_op() {
    let want = vec![InterfaceConfig {
        mtu: Some(9216),
        ..named("Ethernet1/1")
    }];
    let have = want.clone();
    assert!(reconcile(&want, &have, ReconcileState::Merged).unwrap().is_empty());
}

#[test]
fn deleted_brings_shutdown_port_back_up() {
    let want = vec![named("Ethernet1/1")];
    let have = vec![InterfaceConfig {
        enable: Some(false),
        ..named("Ethernet1/1")
    }];
    assert_eq!(
        reconcile(&want, &have, ReconcileState::Deleted).unwrap(),
        ["interface Ethernet1/1", "no shutdown"]
    );
}

// ── Properties ──────────────────────────────────────────────────────

#[test]
fn merged_is_idempotent_for_every_kind() {
    let records = populated();
    for record in &records {
        let one = std::slice::from_ref(record);
        assert!(
            reconcile(one, one, ReconcileState::Merged).unwrap().is_empty(),
            "{} should need no commands",
            record.name
        );
    }
    assert!(reconcile(&records, &records, ReconcileState::Merged).unwrap().is_empty());
}

#[test]
fn context_lines_are_unique_and_never_dangling() {
    let want = populated();
    let have: Vec<_> = want
        .iter()
        .map(|w| InterfaceConfig {
            enable: Some(false),
            ..named(&w.name)
        })
        .collect();

    for state in [ReconcileState::Merged, ReconcileState::Deleted] {
        let commands = reconcile(&want, &have, state).unwrap();
        assert_context_discipline(&commands);
    }
}

/// Split a command list into `(interface, configuration lines)` groups.
fn by_interface(commands: &[String]) -> Vec<(String, Vec<String>)> {
    let mut groups: Vec<(String, Vec<String>)> = Vec::new();
    for line in commands {
        if let Some(name) = line.strip_prefix("interface ") {
            groups.push((name.to_owned(), Vec::new()));
        } else if let Some((_, lines)) = groups.last_mut() {
            lines.push(line.clone());
        }
    }
    groups
}

/// The line that returns a merged configuration line to its default, or
/// `None` when the merged line already sets the default.
fn undo_of(line: &str) -> Option<String> {
    match line {
        "switchport" | "no shutdown" | "no ip forward" => None,
        "no switchport" => Some("switchport".to_owned()),
        "shutdown" => Some("no shutdown".to_owned()),
        "ip forward" => Some("no ip forward".to_owned()),
        "fabric forwarding mode anycast-gateway" => {
            Some("no fabric forwarding mode anycast-gateway".to_owned())
        }
        _ => {
            let keyword = line.split_whitespace().next()?;
            assert!(
                ["description", "speed", "duplex", "mtu"].contains(&keyword),
                "unexpected merged line {line:?}"
            );
            Some(format!("no {keyword}"))
        }
    }
}

#[test]
fn deleted_undoes_each_merged_line_exactly_once() {
    let want = populated();
    let fresh = reconcile(&want, &[], ReconcileState::Merged).unwrap();

    // The device currently runs exactly what was declared.
    let names: Vec<_> = want.iter().map(|w| named(&w.name)).collect();
    let undo = reconcile(&names, &want, ReconcileState::Deleted).unwrap();
    assert_context_discipline(&undo);

    let expected: Vec<(String, Vec<String>)> = by_interface(&fresh)
        .into_iter()
        .filter_map(|(name, lines)| {
            let mut undone: Vec<String> = lines.iter().filter_map(|l| undo_of(l)).collect();
            undone.sort();
            (!undone.is_empty()).then_some((name, undone))
        })
        .collect();
    let actual: Vec<(String, Vec<String>)> = by_interface(&undo)
        .into_iter()
        .map(|(name, mut lines)| {
            lines.sort();
            (name, lines)
        })
        .collect();
    assert_eq!(actual, expected);

    // Once undone the interfaces sit at their defaults: deleting again
    // is a no-op.
    let defaults: Vec<_> = want
        .iter()
        .map(|w| InterfaceConfig {
            enable: Some(true),
            ..named(&w.name)
        })
        .collect();
    assert!(reconcile(&names, &defaults, ReconcileState::Deleted).unwrap().is_empty());
}

#[test]
fn deleted_undoes_what_merged_set() {
    let have = vec![populated().remove(0)];
    insta::assert_snapshot!(
        reconcile(&[named("Ethernet1/1")], &have, ReconcileState::Deleted).unwrap().join("\n"),
        @r"
    interface Ethernet1/1
    no description
    switchport
    no speed
    no duplex
    no mtu
    no ip forward
    no fabric forwarding mode anycast-gateway
    "
    );
}

#[test]
fn overridden_removes_logical_and_resets_configured_ports_first() {
    let want = vec![InterfaceConfig {
        description: Some("kept".into()),
        ..named("Ethernet1/1")
    }];
    let have = vec![
        InterfaceConfig {
            enable: Some(true),
            ..named("Ethernet1/1")
        },
        InterfaceConfig {
            enable: Some(true),
            mtu: Some(9216),
            ..named("Ethernet1/2")
        },
        InterfaceConfig {
            enable: Some(false),
            ..named("Ethernet1/3")
        },
        named("loopback9"),
        named("port-channel4"),
        named("Vlan30"),
    ];
    assert_eq!(
        reconcile(&want, &have, ReconcileState::Overridden).unwrap(),
        [
            "default interface Ethernet1/2",
            "no interface loopback9",
            "no interface port-channel4",
            "no interface Vlan30",
            "interface Ethernet1/1",
            "description kept",
        ]
    );
}

#[test]
fn overridden_leaves_default_ports_alone() {
    let have = vec![
        InterfaceConfig {
            enable: Some(true),
            ..named("Ethernet1/5")
        },
        InterfaceConfig {
            enable: Some(false),
            ..named("Ethernet1/6")
        },
    ];
    assert!(reconcile(&[], &have, ReconcileState::Overridden).unwrap().is_empty());
}

/// A description is one of the monitored attributes: a port that only
/// carries a description is still reset when it is not declared.
#[test]
fn overridden_resets_port_with_only_a_description() {
    let have = vec![InterfaceConfig {
        enable: Some(true),
        description: Some("spare".into()),
        ..named("Ethernet1/7")
    }];
    assert_eq!(
        reconcile(&[], &have, ReconcileState::Overridden).unwrap(),
        ["default interface Ethernet1/7"]
    );
}

#[test]
fn replaced_recreates_every_declared_attribute() {
    let want = vec![InterfaceConfig {
        mtu: Some(9000),
        ip_forward: Some(IpForward::Enable),
        ..named("Vlan100")
    }];
    let have = want.clone();
    assert_eq!(
        reconcile(&want, &have, ReconcileState::Replaced).unwrap(),
        ["no interface Vlan100", "interface Vlan100", "ip forward", "mtu 9000"]
    );
}

// ── Running config through to commands ──────────────────────────────

const RUNNING: &str = "\
interface mgmt0
  vrf member management
interface Vlan100
  no shutdown
  ip forward
interface loopback0
  description router id
interface Ethernet1/1
  no switchport
  mtu 9216
interface Ethernet1/2
  shutdown
";

#[test]
fn rendered_facts_reconcile_against_aliases() {
    let have = gather(RUNNING).unwrap();
    let want = normalize_want(&[
        InterfaceConfig {
            mode: Some(Mode::Layer2),
            ..named("eth1/1")
        },
        InterfaceConfig {
            ip_forward: Some(IpForward::Enable),
            enable: Some(true),
            ..named("vlan 100")
        },
    ]);

    assert_eq!(
        reconcile(&want, &have, ReconcileState::Merged).unwrap(),
        ["interface Ethernet1/1", "switchport", "no shutdown"]
    );
}

#[test]
fn rendered_facts_drive_override() {
    let have = gather(RUNNING).unwrap();
    let want = vec![named("Ethernet1/1")];

    assert_eq!(
        reconcile(&want, &have, ReconcileState::Overridden).unwrap(),
        ["no interface Vlan100", "no interface loopback0"]
    );
}
