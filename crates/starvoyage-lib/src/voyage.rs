//! Constant-acceleration voyage model and the journey simulation loop.
//!
//! Distances are in kilometres, velocities in km/s and times in seconds
//! elapsed since the start of the voyage. Floating-point edge cases (a zero
//! target distance, inconsistent inputs) are not trapped: they surface as NaN
//! or infinity in the computed values and rows.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::constants::PhysicalConstants;
use crate::error::{Error, Result};
use crate::journey::{format_row, Journey, JourneyRow, VoyageOutcome};

/// The first loop iteration always emits a row.
const FIRST_ROW_WINDOW_SECS: f64 = 0.1;

/// Initial conditions of a single voyage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoyageParams {
    /// Descriptive only; the engine delivers its acceleration regardless of mass.
    pub mass_kg: f64,
    pub initial_velocity_km_per_sec: f64,
    /// Acceleration in multiples of g.
    pub acceleration_g: f64,
    /// Stored for chaining but never added to [`Voyage::distance_at`].
    pub start_offset_km: f64,
    pub target_distance_ly: f64,
}

impl VoyageParams {
    pub fn new(
        mass_kg: f64,
        initial_velocity_km_per_sec: f64,
        acceleration_g: f64,
        start_offset_km: f64,
        target_distance_ly: f64,
    ) -> Self {
        Self {
            mass_kg,
            initial_velocity_km_per_sec,
            acceleration_g,
            start_offset_km,
            target_distance_ly,
        }
    }
}

/// A voyage evaluated against a fixed set of physical constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Voyage {
    params: VoyageParams,
    constants: PhysicalConstants,
}

impl Voyage {
    pub fn new(params: VoyageParams, constants: &PhysicalConstants) -> Self {
        Self {
            params,
            constants: *constants,
        }
    }

    pub fn params(&self) -> &VoyageParams {
        &self.params
    }

    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    /// Acceleration in km/s². Mass does not enter the formula.
    pub fn acceleration_rate(&self) -> f64 {
        self.params.acceleration_g * self.constants.g_force_km_per_sec2()
    }

    /// Distance covered since the start of this voyage: `s = ut + ½at²`.
    pub fn distance_at(&self, secs: f64) -> f64 {
        let u = self.params.initial_velocity_km_per_sec;
        let a = self.acceleration_rate();
        u * secs + 0.5 * a * secs * secs
    }

    pub fn light_years_at(&self, secs: f64) -> f64 {
        self.distance_at(secs) / self.constants.light_year_km()
    }

    /// Velocity from `v² = u² + 2as`, capped at the maximum speed.
    pub fn velocity_at(&self, secs: f64) -> f64 {
        let u = self.params.initial_velocity_km_per_sec;
        let velocity = (u * u + 2.0 * self.acceleration_rate() * self.distance_at(secs)).sqrt();

        // Explicit comparison so a NaN velocity is reported rather than clamped.
        let max = self.constants.max_speed_km_per_sec();
        if velocity > max {
            max
        } else {
            velocity
        }
    }

    pub fn pct_of_light_speed_at(&self, secs: f64) -> f64 {
        100.0 * self.velocity_at(secs) / self.constants.speed_of_light_km_per_sec()
    }

    /// Percentage of the target distance covered. NaN or infinite when the
    /// target distance is zero.
    pub fn pct_of_journey_at(&self, secs: f64) -> f64 {
        100.0 * self.light_years_at(secs) / self.params.target_distance_ly
    }

    /// Sample every reported quantity at `secs`.
    pub fn sample(&self, secs: f64) -> JourneyRow {
        JourneyRow {
            elapsed_secs: secs,
            elapsed_years: self.constants.secs_to_years(secs),
            distance_km: self.distance_at(secs),
            pct_of_journey: self.pct_of_journey_at(secs),
            velocity_km_per_sec: self.velocity_at(secs),
            pct_of_light_speed: self.pct_of_light_speed_at(secs),
        }
    }

    pub fn format_row(&self, secs: f64) -> String {
        format_row(&self.sample(secs))
    }

    /// True when the voyage can never reach its target.
    pub fn is_stationary(&self) -> bool {
        self.params.initial_velocity_km_per_sec <= 0.0 && self.params.acceleration_g <= 0.0
    }

    /// Step the voyage forward one simulated minute at a time until it passes
    /// its target distance.
    ///
    /// A row is logged on the first step, then roughly once per simulated
    /// year, and once more on arrival.
    ///
    /// This loops forever for a [stationary](Self::is_stationary) voyage; use
    /// [`simulate_bounded`](Self::simulate_bounded) when inputs are untrusted.
    pub fn simulate(&self) -> Journey {
        self.log_start(None);
        let mut stepper = Stepper::new(self);
        loop {
            if let Some(outcome) = stepper.step() {
                return stepper.finish(outcome);
            }
        }
    }

    /// Same as [`simulate`](Self::simulate) but gives up after `max_steps`
    /// one-minute steps.
    pub fn simulate_bounded(&self, max_steps: u64) -> Result<Journey> {
        self.log_start(Some(max_steps));
        let mut stepper = Stepper::new(self);
        for _ in 0..max_steps {
            if let Some(outcome) = stepper.step() {
                return Ok(stepper.finish(outcome));
            }
        }

        warn!(
            steps = max_steps,
            elapsed_secs = stepper.elapsed_secs,
            "voyage did not arrive within step limit"
        );
        Err(Error::StepLimitExceeded {
            steps: max_steps,
            elapsed_secs: stepper.elapsed_secs,
        })
    }

    fn log_start(&self, max_steps: Option<u64>) {
        debug!(
            mass_kg = self.params.mass_kg,
            initial_velocity_km_per_sec = self.params.initial_velocity_km_per_sec,
            acceleration_g = self.params.acceleration_g,
            target_distance_ly = self.params.target_distance_ly,
            ?max_steps,
            "simulating voyage"
        );
    }
}

/// Mutable loop state of a single simulation run.
struct Stepper<'a> {
    voyage: &'a Voyage,
    elapsed_secs: f64,
    secs_since_last_row: f64,
    rows: Vec<JourneyRow>,
}

impl<'a> Stepper<'a> {
    fn new(voyage: &'a Voyage) -> Self {
        Self {
            voyage,
            elapsed_secs: 0.0,
            secs_since_last_row: 0.0,
            rows: Vec::new(),
        }
    }

    /// Advance one step. Returns the outcome once the target has been passed.
    fn step(&mut self) -> Option<VoyageOutcome> {
        let voyage = self.voyage;
        let constants = voyage.constants();
        let secs = self.elapsed_secs;

        if voyage.pct_of_journey_at(secs) > 100.0 {
            self.rows.push(voyage.sample(secs));
            return Some(VoyageOutcome {
                travel_time_secs: secs,
                distance_km: voyage.distance_at(secs),
                velocity_km_per_sec: voyage.velocity_at(secs),
            });
        }

        if self.secs_since_last_row < FIRST_ROW_WINDOW_SECS
            || self.secs_since_last_row > constants.seconds_per_year()
        {
            self.secs_since_last_row = 0.0;
            self.rows.push(voyage.sample(secs));
        }

        self.secs_since_last_row += constants.seconds_per_minute();
        self.elapsed_secs += constants.seconds_per_minute();
        None
    }

    fn finish(self, outcome: VoyageOutcome) -> Journey {
        debug!(
            travel_time_secs = outcome.travel_time_secs,
            distance_km = outcome.distance_km,
            velocity_km_per_sec = outcome.velocity_km_per_sec,
            rows = self.rows.len(),
            "voyage arrived"
        );
        Journey {
            rows: self.rows,
            outcome,
        }
    }
}
