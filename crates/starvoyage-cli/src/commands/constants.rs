//! Constants command handler for printing the resolved physical constants.

use anyhow::{Context, Result};

use starvoyage_cli::output::text::TextRenderer;
use starvoyage_cli::output::{render_json, OutputFormat};

use super::CommandContext;

/// Handle the constants subcommand.
pub fn handle_constants(ctx: &CommandContext) -> Result<()> {
    match ctx.format {
        OutputFormat::Text => {
            print!(
                "{}",
                TextRenderer::new(ctx.palette).render_constants(&ctx.constants)
            );
        }
        OutputFormat::Json => {
            render_json(&ctx.constants).context("failed to write constants as JSON")?;
        }
    }
    Ok(())
}
