mod commands;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use starvoyage_cli::config::resolve_constants;
use starvoyage_cli::output::{print_footer, print_logo, OutputFormat};
use starvoyage_cli::terminal::ColorPalette;

use commands::voyage::VoyageArgs;
use commands::CommandContext;

#[derive(Parser, Debug)]
#[command(author, version, about = "Constant-acceleration voyage simulator")]
struct Cli {
    /// JSON file overriding the physical constants (or set STARVOYAGE_CONSTANTS).
    #[arg(long, global = true)]
    constants: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Give up on any voyage that has not arrived after this many one-minute steps.
    #[arg(long = "max-steps", global = true)]
    max_steps: Option<u64>,

    /// Suppress the banner and footer.
    #[arg(long = "no-logo", global = true)]
    no_logo: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the built-in missions.
    Missions,
    /// Fly built-in missions (all of them when none are named) or a mission file.
    Fly {
        /// Built-in mission names.
        names: Vec<String>,
        /// JSON mission file to fly instead of the built-in missions.
        #[arg(long, conflicts_with = "names")]
        file: Option<PathBuf>,
    },
    /// Simulate a single voyage from explicit initial conditions.
    Voyage(VoyageArgs),
    /// Print the resolved physical constants.
    Constants,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let started = Instant::now();

    let ctx = CommandContext {
        constants: resolve_constants(cli.constants.as_deref())?,
        format: cli.format,
        max_steps: cli.max_steps,
        palette: ColorPalette::detect(),
    };

    let decorate = !cli.no_logo && cli.format == OutputFormat::Text;
    if decorate {
        print_logo();
    }

    match &cli.command {
        Command::Missions => commands::missions::handle_list_missions(&ctx)?,
        Command::Fly { names, file } => commands::fly::handle_fly(&ctx, names, file.as_deref())?,
        Command::Voyage(args) => commands::voyage::handle_voyage(&ctx, args)?,
        Command::Constants => commands::constants::handle_constants(&ctx)?,
    }

    if decorate {
        print_footer(started.elapsed());
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
