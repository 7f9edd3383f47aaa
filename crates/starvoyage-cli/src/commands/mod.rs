// Module exports for CLI subcommands
//
// Each module handles a specific CLI subcommand. main.rs parses arguments,
// builds the shared `CommandContext` and dispatches to these handlers.

pub mod constants;
pub mod fly;
pub mod missions;
pub mod voyage;

use starvoyage_cli::output::OutputFormat;
use starvoyage_cli::terminal::ColorPalette;
use starvoyage_lib::PhysicalConstants;

/// Settings shared by every subcommand, resolved once at startup.
#[derive(Debug, Clone, Copy)]
pub struct CommandContext {
    pub constants: PhysicalConstants,
    pub format: OutputFormat,
    pub max_steps: Option<u64>,
    pub palette: ColorPalette,
}
