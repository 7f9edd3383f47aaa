//! Voyage command handler for simulating a single ad-hoc voyage.

use anyhow::{Context, Result};
use clap::{ArgGroup, Args};

use starvoyage_cli::output::text::TextRenderer;
use starvoyage_cli::output::{render_json, OutputFormat};
use starvoyage_lib::{Mission, PhaseSpec, Target};

use super::fly::fly_mission;
use super::CommandContext;

/// Arguments for the voyage command.
#[derive(Args, Debug, Clone)]
#[command(group(
    ArgGroup::new("target")
        .required(true)
        .args(["target_ly", "target_km"])
))]
pub struct VoyageArgs {
    /// Ship mass in kilograms (descriptive only).
    #[arg(long = "mass-kg", default_value_t = 100_000.0)]
    pub mass_kg: f64,
    /// Initial velocity in km/s.
    #[arg(long, default_value_t = 0.0)]
    pub velocity: f64,
    /// Constant acceleration in multiples of g.
    #[arg(long = "acceleration-g", default_value_t = 0.0)]
    pub acceleration_g: f64,
    /// Starting distance offset in kilometres.
    #[arg(long = "offset-km", default_value_t = 0.0)]
    pub offset_km: f64,
    /// Target distance in light-years.
    #[arg(long = "target-ly")]
    pub target_ly: Option<f64>,
    /// Target distance in kilometres.
    #[arg(long = "target-km")]
    pub target_km: Option<f64>,
    /// Label shown above the journey log.
    #[arg(long, default_value = "Custom Voyage")]
    pub label: String,
}

impl VoyageArgs {
    /// Wrap the voyage in a single-phase mission so it shares validation and
    /// rendering with the built-in missions.
    pub fn to_mission(&self) -> Result<Mission> {
        let target = match (self.target_ly, self.target_km) {
            (Some(ly), None) => Target::LightYears(ly),
            (None, Some(km)) => Target::Kilometres(km),
            _ => anyhow::bail!("exactly one of --target-ly or --target-km is required"),
        };

        let mission = Mission {
            name: "voyage".to_string(),
            title: self.label.clone(),
            phases: vec![PhaseSpec {
                label: self.label.clone(),
                mass_kg: self.mass_kg,
                acceleration_g: self.acceleration_g,
                target,
                initial_velocity_km_per_sec: Some(self.velocity),
                start_offset_km: Some(self.offset_km),
            }],
            note: None,
        };
        mission.validate().context("invalid voyage parameters")?;
        Ok(mission)
    }
}

/// Handle the voyage subcommand.
pub fn handle_voyage(ctx: &CommandContext, args: &VoyageArgs) -> Result<()> {
    let mission = args.to_mission()?;
    let report = fly_mission(ctx, &mission)?;

    match ctx.format {
        OutputFormat::Text => {
            print!(
                "{}",
                TextRenderer::new(ctx.palette).render_mission(&report, &ctx.constants)
            );
        }
        OutputFormat::Json => {
            let journey = report
                .phases
                .first()
                .map(|phase| &phase.journey)
                .context("voyage produced no journey")?;
            render_json(journey).context("failed to write journey as JSON")?;
        }
    }
    Ok(())
}
