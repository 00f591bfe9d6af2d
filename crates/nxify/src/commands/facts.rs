//! `nxify facts`: show what the renderer extracts from a running config.

use std::fmt::Display;

use tabled::Tabled;

use nxify_core::InterfaceConfig;
use nxify_core::facts::gather;

use crate::cli::FactsArgs;
use crate::commands::{Context, util};
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct FactRow {
    #[tabled(rename = "Interface")]
    name: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Mode")]
    mode: String,
    #[tabled(rename = "Enabled")]
    enable: String,
    #[tabled(rename = "Speed")]
    speed: String,
    #[tabled(rename = "MTU")]
    mtu: String,
    #[tabled(rename = "IP Fwd")]
    ip_forward: String,
    #[tabled(rename = "Anycast GW")]
    anycast: String,
    #[tabled(rename = "Description")]
    description: String,
}

fn show<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".into(), |v| v.to_string())
}

fn to_row(r: &InterfaceConfig) -> FactRow {
    FactRow {
        name: r.name.clone(),
        kind: r.kind().to_string(),
        mode: show(r.mode),
        enable: show(r.enable),
        speed: show(r.speed.as_deref()),
        mtu: show(r.mtu),
        ip_forward: show(r.ip_forward),
        anycast: show(r.fabric_forwarding_anycast_gateway),
        description: show(r.description.as_deref()),
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: &FactsArgs, ctx: &Context) -> Result<(), CliError> {
    let facts = gather(&util::read_text(&args.running)?)?;
    tracing::info!(interfaces = facts.len(), "rendered running config");

    let out = output::render_list(ctx.output, &facts, to_row, |r| r.name.clone())?;
    output::print_output(&out, ctx.quiet);
    Ok(())
}
