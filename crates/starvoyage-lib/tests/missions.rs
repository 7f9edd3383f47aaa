mod common;

use std::fs;

use common::fixtures_dir;
use starvoyage_lib::{
    find_mission, ConstantsConfig, Error, Mission, PhysicalConstants, Target,
};
use tempfile::tempdir;

#[test]
fn loads_fixture_mission() {
    let mission =
        Mission::from_path(&fixtures_dir().join("sprint_and_coast.json")).expect("fixture loads");
    assert_eq!(mission.name, "sprint-and-coast");
    assert_eq!(mission.phases.len(), 2);
    assert_eq!(mission.phases[0].target, Target::Kilometres(1_000_000_000.0));
    assert_eq!(mission.phases[1].initial_velocity_km_per_sec, None);
    assert!(mission.note.is_some());
}

#[test]
fn flies_fixture_mission_with_chained_phases() {
    let constants = PhysicalConstants::default();
    let mission = Mission::from_path(&fixtures_dir().join("sprint_and_coast.json")).unwrap();
    let report = mission.fly(&constants, Some(1_000_000)).expect("mission arrives");

    assert_eq!(report.title, "Test Ship: Sprint and Coast");
    assert_eq!(report.phases.len(), 2);

    let sprint = &report.phases[0];
    let coast = &report.phases[1];
    assert_eq!(coast.params.acceleration_g, 0.0);
    assert_eq!(
        coast.params.initial_velocity_km_per_sec,
        sprint.journey.outcome.velocity_km_per_sec
    );
    assert_eq!(coast.params.start_offset_km, sprint.journey.outcome.distance_km);

    // Coasting keeps the velocity reached at the end of the sprint.
    let arrival = report.final_outcome().expect("final outcome");
    assert_eq!(
        arrival.velocity_km_per_sec,
        sprint.journey.outcome.velocity_km_per_sec
    );
}

#[test]
fn solar_sail_acceleration_phase_matches_builtin() {
    let constants = PhysicalConstants::default();
    let mut mission = find_mission("solar-sail", &constants).expect("built-in");
    mission.phases.truncate(1);

    let report = mission.fly(&constants, None).expect("arrives");
    let phase = &report.phases[0];
    assert_eq!(phase.label, "Space Ship #2A: Solar Sail Acceleration Phase");
    assert!(phase.journey.outcome.distance_km > 1_000_000_000.0);
    assert!(
        phase.journey.outcome.velocity_km_per_sec < constants.max_speed_km_per_sec(),
        "the sail burn ends well below the cap"
    );
}

#[test]
fn constants_file_changes_derived_values() {
    let config = ConstantsConfig::from_path(&fixtures_dir().join("literature_light_speed.json"))
        .expect("fixture constants load");
    let constants = PhysicalConstants::new(&config);

    assert_eq!(constants.speed_of_light_km_per_sec(), 299_792.458);
    assert_eq!(constants.light_year_km(), 299_792.458 * 31_536_000.0);
    assert_eq!(constants.days_per_year(), 365.0);
}

#[test]
fn rejects_mission_file_with_negative_acceleration() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("bad.json");
    fs::write(
        &path,
        r#"{
            "name": "reverse",
            "title": "Reverse Thrust",
            "phases": [
                {
                    "label": "Backwards",
                    "mass_kg": 1.0,
                    "acceleration_g": -1.0,
                    "initial_velocity_km_per_sec": 10.0,
                    "target": { "light_years": 1.0 }
                }
            ]
        }"#,
    )
    .expect("write mission");

    let err = Mission::from_path(&path).expect_err("negative acceleration rejected");
    assert!(matches!(err, Error::InvalidParameter { ref field, .. } if field == "acceleration_g"));
}

#[test]
fn missing_mission_file_is_an_io_error() {
    let err = Mission::from_path(&fixtures_dir().join("does_not_exist.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
