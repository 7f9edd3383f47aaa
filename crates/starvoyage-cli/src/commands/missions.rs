//! Missions command handler for listing the built-in missions.

use anyhow::{Context, Result};

use starvoyage_cli::output::text::TextRenderer;
use starvoyage_cli::output::{render_json, OutputFormat};
use starvoyage_lib::builtin_missions;

use super::CommandContext;

/// Handle the missions subcommand.
pub fn handle_list_missions(ctx: &CommandContext) -> Result<()> {
    let missions = builtin_missions(&ctx.constants);
    match ctx.format {
        OutputFormat::Text => {
            print!("{}", TextRenderer::new(ctx.palette).render_missions(&missions));
        }
        OutputFormat::Json => {
            render_json(&missions).context("failed to write missions as JSON")?;
        }
    }
    Ok(())
}
