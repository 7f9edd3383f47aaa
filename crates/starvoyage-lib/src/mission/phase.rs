//! Mission phase descriptions and how they seed from one another.

use serde::{Deserialize, Serialize};

use crate::constants::PhysicalConstants;
use crate::error::{Error, Result};
use crate::journey::VoyageOutcome;
use crate::voyage::VoyageParams;

/// Where a phase ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    LightYears(f64),
    Kilometres(f64),
}

impl Target {
    pub fn to_light_years(self, constants: &PhysicalConstants) -> f64 {
        match self {
            Target::LightYears(ly) => ly,
            Target::Kilometres(km) => constants.km_to_light_years(km),
        }
    }

    fn value(self) -> f64 {
        match self {
            Target::LightYears(value) | Target::Kilometres(value) => value,
        }
    }
}

/// One leg of a mission.
///
/// Leaving `initial_velocity_km_per_sec` or `start_offset_km` unset seeds the
/// value from the previous phase's arrival state (ending velocity and
/// distance travelled). On the first phase an unset value means zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PhaseSpec {
    pub label: String,
    pub mass_kg: f64,
    #[serde(default)]
    pub acceleration_g: f64,
    pub target: Target,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_velocity_km_per_sec: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_offset_km: Option<f64>,
}

impl PhaseSpec {
    /// Validate the phase for correctness.
    pub fn validate(&self) -> Result<()> {
        if self.label.trim().is_empty() {
            return Err(Error::invalid("label", "phase label must not be empty"));
        }

        if !self.mass_kg.is_finite() || self.mass_kg <= 0.0 {
            return Err(Error::invalid(
                "mass_kg",
                format!("must be finite and positive, got {}", self.mass_kg),
            ));
        }

        if !self.acceleration_g.is_finite() || self.acceleration_g < 0.0 {
            return Err(Error::invalid(
                "acceleration_g",
                format!(
                    "must be finite and non-negative, got {}",
                    self.acceleration_g
                ),
            ));
        }

        let target = self.target.value();
        if !target.is_finite() || target <= 0.0 {
            return Err(Error::invalid(
                "target",
                format!("must be finite and positive, got {}", target),
            ));
        }

        let optional = [
            (self.initial_velocity_km_per_sec, "initial_velocity_km_per_sec"),
            (self.start_offset_km, "start_offset_km"),
        ];
        for (value, field) in optional {
            if let Some(value) = value {
                if !value.is_finite() || value < 0.0 {
                    return Err(Error::invalid(
                        field,
                        format!("must be finite and non-negative, got {}", value),
                    ));
                }
            }
        }

        Ok(())
    }

    /// Resolve concrete voyage inputs, seeding unset values from `previous`.
    pub fn resolve(
        &self,
        previous: Option<&VoyageOutcome>,
        constants: &PhysicalConstants,
    ) -> VoyageParams {
        let initial_velocity = self
            .initial_velocity_km_per_sec
            .or_else(|| previous.map(|outcome| outcome.velocity_km_per_sec))
            .unwrap_or(0.0);
        let start_offset = self
            .start_offset_km
            .or_else(|| previous.map(|outcome| outcome.distance_km))
            .unwrap_or(0.0);

        VoyageParams::new(
            self.mass_kg,
            initial_velocity,
            self.acceleration_g,
            start_offset,
            self.target.to_light_years(constants),
        )
    }
}
