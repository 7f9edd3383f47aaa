//! Common test utilities and fixture helpers.

use std::path::PathBuf;

use starvoyage_lib::{PhysicalConstants, Voyage, VoyageParams};

/// Path to fixtures directory used by tests (mission and constants files).
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Build a voyage against the default constants.
#[allow(dead_code)]
pub fn voyage(mass_kg: f64, velocity: f64, acceleration_g: f64, target_ly: f64) -> Voyage {
    Voyage::new(
        VoyageParams::new(mass_kg, velocity, acceleration_g, 0.0, target_ly),
        &PhysicalConstants::default(),
    )
}

/// The impulse-engine ship flying the full 4.2 light-years.
#[allow(dead_code)]
pub fn impulse_ship() -> Voyage {
    let constants = PhysicalConstants::default();
    Voyage::new(
        VoyageParams::new(
            170_000.0,
            25.0,
            0.01,
            constants.reference_distance_km(),
            constants.target_body_light_years(),
        ),
        &constants,
    )
}

/// The solar-sail burn out to one billion kilometres.
#[allow(dead_code)]
pub fn solar_sail_burn() -> Voyage {
    let constants = PhysicalConstants::default();
    Voyage::new(
        VoyageParams::new(
            50_000.0,
            265.0,
            60.0,
            0.0,
            constants.km_to_light_years(1_000_000_000.0),
        ),
        &constants,
    )
}
