//! `nxify plan`: running config + declaration -> command list.

use tabled::Tabled;

use nxify_core::facts::gather;
use nxify_core::{Plan, ReconcileState, normalize_want};

use crate::cli::{OutputFormat, PlanArgs};
use crate::commands::{Context, util};
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct CommandRow {
    #[tabled(rename = "#")]
    step: usize,
    #[tabled(rename = "Interface")]
    interface: String,
    #[tabled(rename = "Command")]
    command: String,
}

/// Attribute each line to the interface it configures. Context lines and
/// whole-interface resets name it directly; everything else inherits the
/// most recent context.
fn command_rows(commands: &[String]) -> Vec<CommandRow> {
    let mut current = String::new();
    commands
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let named = line
                .strip_prefix("interface ")
                .or_else(|| line.strip_prefix("no interface "))
                .or_else(|| line.strip_prefix("default interface "));
            let interface = match named {
                Some(name) => {
                    if line.starts_with("interface ") {
                        name.clone_into(&mut current);
                    }
                    name.to_owned()
                }
                None => current.clone(),
            };
            CommandRow {
                step: i + 1,
                interface,
                command: line.clone(),
            }
        })
        .collect()
}

fn plan_table(plan: &Plan) -> String {
    if plan.commands.is_empty() {
        return String::new();
    }
    output::render_table(&command_rows(&plan.commands))
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: &PlanArgs, ctx: &Context) -> Result<(), CliError> {
    let want = normalize_want(&util::read_want(&args.want)?);
    let have = gather(&util::read_text(&args.running)?)?;
    let state = args.state.map_or(ctx.state, ReconcileState::from);

    tracing::info!(%state, want = want.len(), have = have.len(), "planning");
    let plan = nxify_core::plan(&want, &have, state)?;

    let out = output::render_single(ctx.output, &plan, plan_table, |p| p.commands.join("\n"))?;
    output::print_output(&out, ctx.quiet);

    if !ctx.quiet && ctx.output == OutputFormat::Table {
        eprintln!(
            "{}",
            output::summary_line(plan.changed, plan.commands.len(), ctx.color)
        );
    }
    Ok(())
}
