//! Multi-phase missions built by chaining independent voyages.
//!
//! This module is organized into focused submodules:
//!
//! - [`phase`] - Phase descriptions, targets and seeding rules
//! - [`catalog`] - The built-in missions and name lookup
//!
//! A voyage knows nothing about phases. A [`Mission`] simulates each phase
//! to completion, then seeds the next phase's initial velocity and start
//! offset from the arrival state of the previous one.
//!
//! # Example
//!
//! ```no_run
//! use starvoyage_lib::{find_mission, PhysicalConstants};
//!
//! let constants = PhysicalConstants::default();
//! let mission = find_mission("solar-sail", &constants).unwrap();
//! let report = mission.fly(&constants, None).unwrap();
//! for phase in &report.phases {
//!     println!("{}", phase.label);
//!     for line in phase.journey.lines() {
//!         println!("{line}");
//!     }
//! }
//! ```

pub mod catalog;
pub mod phase;

use std::{fs, io::Read, path::Path};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::constants::PhysicalConstants;
use crate::error::{Error, Result};
use crate::journey::{Journey, VoyageOutcome};
use crate::voyage::{Voyage, VoyageParams};

pub use catalog::{builtin_missions, find_mission, mission_names, SOLAR_SAIL_RANGE_KM};
pub use phase::{PhaseSpec, Target};

/// A named sequence of phases flown one after another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Mission {
    pub name: String,
    pub title: String,
    pub phases: Vec<PhaseSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Mission {
    /// Load and validate a mission from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mission: Self = serde_json::from_reader(reader)?;
        mission.validate()?;
        Ok(mission)
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::invalid("name", "mission name must not be empty"));
        }
        if self.phases.is_empty() {
            return Err(Error::EmptyMission {
                name: self.name.clone(),
            });
        }
        for phase in &self.phases {
            phase.validate()?;
        }
        Ok(())
    }

    /// Fly every phase in order.
    ///
    /// With `max_steps` set, each phase is simulated with
    /// [`Voyage::simulate_bounded`]; otherwise phases run until arrival. A
    /// phase that could never arrive is rejected before it is simulated.
    pub fn fly(
        &self,
        constants: &PhysicalConstants,
        max_steps: Option<u64>,
    ) -> Result<MissionReport> {
        self.validate()?;

        let mut phases: Vec<PhaseReport> = Vec::with_capacity(self.phases.len());
        for spec in &self.phases {
            let previous = phases.last().map(|report| &report.journey.outcome);
            let params = spec.resolve(previous, constants);
            let voyage = Voyage::new(params, constants);

            if voyage.is_stationary() {
                return Err(Error::StationaryVoyage {
                    label: spec.label.clone(),
                });
            }

            info!(
                mission = %self.name,
                phase = %spec.label,
                initial_velocity_km_per_sec = params.initial_velocity_km_per_sec,
                target_distance_ly = params.target_distance_ly,
                "flying mission phase"
            );

            let journey = match max_steps {
                Some(limit) => voyage.simulate_bounded(limit)?,
                None => voyage.simulate(),
            };

            phases.push(PhaseReport {
                label: spec.label.clone(),
                params,
                journey,
            });
        }

        Ok(MissionReport {
            name: self.name.clone(),
            title: self.title.clone(),
            phases,
            note: self.note.clone(),
        })
    }
}

/// A flown phase: the inputs it was resolved to and its journey log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseReport {
    pub label: String,
    pub params: VoyageParams,
    pub journey: Journey,
}

/// Result of flying a whole mission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissionReport {
    pub name: String,
    pub title: String,
    pub phases: Vec<PhaseReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl MissionReport {
    /// Sum of every phase's travel time.
    pub fn total_travel_time_secs(&self) -> f64 {
        self.phases
            .iter()
            .map(|phase| phase.journey.outcome.travel_time_secs)
            .sum()
    }

    /// Arrival state of the last phase.
    pub fn final_outcome(&self) -> Option<&VoyageOutcome> {
        self.phases.last().map(|phase| &phase.journey.outcome)
    }
}
