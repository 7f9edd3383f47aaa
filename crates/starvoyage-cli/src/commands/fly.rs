//! Fly command handler for simulating missions and printing their logs.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use starvoyage_cli::output::text::TextRenderer;
use starvoyage_cli::output::{render_json, OutputFormat};
use starvoyage_lib::{builtin_missions, find_mission, Mission, MissionReport};

use super::CommandContext;

/// Resolve which missions to fly: a mission file, the named built-ins, or
/// every built-in mission when nothing was named.
pub fn select_missions(
    ctx: &CommandContext,
    names: &[String],
    file: Option<&Path>,
) -> Result<Vec<Mission>> {
    if let Some(path) = file {
        let mission = Mission::from_path(path)
            .with_context(|| format!("failed to load mission from {}", path.display()))?;
        return Ok(vec![mission]);
    }

    if names.is_empty() {
        return Ok(builtin_missions(&ctx.constants));
    }

    names
        .iter()
        .map(|name| find_mission(name, &ctx.constants).map_err(anyhow::Error::from))
        .collect()
}

/// Handle the fly subcommand.
///
/// In text mode each mission is printed as soon as it has been flown; JSON
/// output is written once every mission has arrived.
pub fn handle_fly(ctx: &CommandContext, names: &[String], file: Option<&Path>) -> Result<()> {
    let missions = select_missions(ctx, names, file)?;
    let renderer = TextRenderer::new(ctx.palette);
    let mut reports: Vec<MissionReport> = Vec::with_capacity(missions.len());

    for mission in &missions {
        info!(mission = %mission.name, phases = mission.phases.len(), "flying mission");
        let report = fly_mission(ctx, mission)?;
        match ctx.format {
            OutputFormat::Text => print!("{}", renderer.render_mission(&report, &ctx.constants)),
            OutputFormat::Json => reports.push(report),
        }
    }

    if ctx.format == OutputFormat::Json {
        render_json(&reports).context("failed to write mission reports as JSON")?;
    }
    Ok(())
}

pub(crate) fn fly_mission(ctx: &CommandContext, mission: &Mission) -> Result<MissionReport> {
    mission
        .fly(&ctx.constants, ctx.max_steps)
        .with_context(|| format!("mission '{}' failed", mission.name))
}
