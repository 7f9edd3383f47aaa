//! starvoyage library entry points.
//!
//! This crate models spacecraft moving under constant acceleration with a
//! hard speed ceiling, simulates them forward in one-minute steps until they
//! reach a target distance, and produces a throttled journey log. Higher-level
//! consumers (the CLI) should only depend on the items exported here instead
//! of reimplementing behavior.
//!

#![deny(warnings)]

pub mod constants;
pub mod error;
pub mod journey;
pub mod mission;
pub mod voyage;

pub use constants::{ConstantsConfig, PhysicalConstants};
pub use error::{Error, Result};
pub use journey::{format_grouped, format_row, Journey, JourneyRow, VoyageOutcome};
pub use mission::{
    builtin_missions, find_mission, mission_names, Mission, MissionReport, PhaseReport, PhaseSpec,
    Target,
};
pub use voyage::{Voyage, VoyageParams};
