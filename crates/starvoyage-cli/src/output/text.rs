use std::fmt::Write;

use starvoyage_lib::{format_grouped, Mission, MissionReport, PhaseReport, PhysicalConstants};

use crate::terminal::ColorPalette;

const RULE: &str = "--------------------------------------------";

/// Renderer for the human-readable journey log.
///
/// Builds strings rather than printing so the layout can be tested.
pub struct TextRenderer {
    palette: ColorPalette,
}

impl TextRenderer {
    #[must_use]
    pub const fn new(palette: ColorPalette) -> Self {
        Self { palette }
    }

    /// Title, rule, then each phase's log. Phase labels are only shown when
    /// the mission has more than one phase.
    pub fn render_mission(&self, report: &MissionReport, constants: &PhysicalConstants) -> String {
        let p = &self.palette;
        let mut buffer = String::new();

        let _ = writeln!(buffer);
        let _ = writeln!(buffer, "{}{}{}", p.title, report.title, p.reset);
        let _ = writeln!(buffer, "{}{}{}", p.rule, RULE, p.reset);
        let _ = writeln!(buffer);

        let labelled = report.phases.len() > 1;
        for phase in &report.phases {
            if labelled {
                let _ = writeln!(buffer, "{}{}{}", p.phase, phase.label, p.reset);
            }
            for line in phase.journey.lines() {
                let _ = writeln!(buffer, "{line}");
            }
            let _ = writeln!(buffer, "{}", self.arrival_line(phase, constants));
            let _ = writeln!(buffer);
        }

        if labelled {
            let years = constants.secs_to_years(report.total_travel_time_secs());
            let _ = writeln!(
                buffer,
                "{}Total flight time: {:.2} Years{}",
                p.arrival, years, p.reset
            );
        }
        if let Some(note) = &report.note {
            let _ = writeln!(buffer, "{}{}{}", p.note, note, p.reset);
        }

        buffer
    }

    fn arrival_line(&self, phase: &PhaseReport, constants: &PhysicalConstants) -> String {
        let p = &self.palette;
        let outcome = &phase.journey.outcome;
        format!(
            "{}Arrived after {:.2} Years at {} Km/sec ({} Km travelled){}",
            p.arrival,
            constants.secs_to_years(outcome.travel_time_secs),
            format_grouped(outcome.velocity_km_per_sec, 3),
            format_grouped(outcome.distance_km, 0),
            p.reset
        )
    }

    /// Table of the built-in missions.
    pub fn render_missions(&self, missions: &[Mission]) -> String {
        let mut buffer = String::new();
        if missions.is_empty() {
            let _ = writeln!(buffer, "No missions available.");
            return buffer;
        }

        let _ = writeln!(buffer, "Built-in missions ({}):", missions.len());
        let _ = writeln!(buffer, "{:<16} {:>6}  {}", "Name", "Phases", "Title");
        for mission in missions {
            let _ = writeln!(
                buffer,
                "{:<16} {:>6}  {}",
                mission.name,
                mission.phases.len(),
                mission.title
            );
        }
        buffer
    }

    /// Primitive and derived constants, one per line.
    pub fn render_constants(&self, constants: &PhysicalConstants) -> String {
        let rows = [
            ("Metres per km", constants.metres_per_km(), 0, ""),
            (
                "Reference distance",
                constants.reference_distance_km(),
                0,
                "Km",
            ),
            (
                "Speed of light",
                constants.speed_of_light_km_per_sec(),
                3,
                "Km/sec",
            ),
            ("Seconds per minute", constants.seconds_per_minute(), 0, "s"),
            ("Seconds per hour", constants.seconds_per_hour(), 0, "s"),
            ("Seconds per day", constants.seconds_per_day(), 0, "s"),
            ("Seconds per year", constants.seconds_per_year(), 0, "s"),
            ("Light-year", constants.light_year_km(), 0, "Km"),
            ("g", constants.g_force_km_per_sec2(), 5, "Km/sec^2"),
            (
                "Target distance",
                constants.target_body_light_years(),
                2,
                "Light Years",
            ),
            (
                "Max speed",
                constants.max_speed_km_per_sec(),
                3,
                "Km/sec",
            ),
        ];

        let mut buffer = String::new();
        let _ = writeln!(buffer, "Physical constants:");
        for (label, value, decimals, unit) in rows {
            let _ = writeln!(
                buffer,
                "  {:<20} {:>28} {}",
                label,
                format_grouped(value, decimals),
                unit
            );
        }
        let _ = writeln!(
            buffer,
            "  {:<20} {:>28} of light speed",
            "Max speed fraction",
            format!("{:.2}", constants.max_speed_fraction_of_light())
        );
        buffer
    }
}
