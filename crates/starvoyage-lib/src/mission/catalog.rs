//! Built-in missions to Alpha Centauri.

use crate::constants::PhysicalConstants;
use crate::error::{Error, Result};

use super::phase::{PhaseSpec, Target};
use super::Mission;

/// Distance at which solar sails stop being useful, in kilometres.
pub const SOLAR_SAIL_RANGE_KM: f64 = 1_000_000_000.0;

const SUN_MANOEUVRE_NOTE: &str = "*** Plus 2 years for initial manouvering around the Sun.";

/// The built-in missions, in presentation order.
pub fn builtin_missions(constants: &PhysicalConstants) -> Vec<Mission> {
    let destination = Target::LightYears(constants.target_body_light_years());
    let sail_range = Target::Kilometres(SOLAR_SAIL_RANGE_KM);

    vec![
        Mission {
            name: "impulse".to_string(),
            title: "Space Ship #1: Impulse Engine".to_string(),
            phases: vec![PhaseSpec {
                label: "Impulse Engine".to_string(),
                mass_kg: 170_000.0,
                acceleration_g: 0.01,
                target: destination,
                initial_velocity_km_per_sec: Some(25.0),
                start_offset_km: Some(constants.reference_distance_km()),
            }],
            note: None,
        },
        Mission {
            name: "solar-sail".to_string(),
            title: "Space Ship #2: Solar Sail".to_string(),
            phases: vec![
                PhaseSpec {
                    label: "Space Ship #2A: Solar Sail Acceleration Phase".to_string(),
                    mass_kg: 50_000.0,
                    acceleration_g: 60.0,
                    target: sail_range,
                    initial_velocity_km_per_sec: Some(265.0),
                    start_offset_km: Some(0.0),
                },
                PhaseSpec {
                    label: "Space Ship #2B: Coasting Phase".to_string(),
                    mass_kg: 50_000.0,
                    acceleration_g: 0.0,
                    target: destination,
                    initial_velocity_km_per_sec: None,
                    start_offset_km: None,
                },
            ],
            note: Some(SUN_MANOEUVRE_NOTE.to_string()),
        },
        Mission {
            name: "sail-impulse".to_string(),
            title: "Space Ship #3: Solar Sail + Impulse Engine".to_string(),
            phases: vec![
                PhaseSpec {
                    label: "Space Ship #3A: Solar Sail Acceleration Phase".to_string(),
                    mass_kg: 200_000.0,
                    acceleration_g: 16.0,
                    target: sail_range,
                    initial_velocity_km_per_sec: Some(195.0),
                    start_offset_km: Some(0.0),
                },
                PhaseSpec {
                    label: "Space Ship #3B: Impulse Engine".to_string(),
                    mass_kg: 170_000.0,
                    acceleration_g: 0.01,
                    target: destination,
                    initial_velocity_km_per_sec: None,
                    start_offset_km: None,
                },
            ],
            note: Some(SUN_MANOEUVRE_NOTE.to_string()),
        },
    ]
}

/// Look up a built-in mission by name (case-insensitive).
pub fn find_mission(name: &str, constants: &PhysicalConstants) -> Result<Mission> {
    let key = normalize_name(name);
    let missions = builtin_missions(constants);

    let suggestions = suggest_names(&key, &missions);
    missions
        .into_iter()
        .find(|mission| mission.name == key)
        .ok_or_else(|| Error::UnknownMission {
            name: name.trim().to_string(),
            suggestions,
        })
}

/// Names of the built-in missions, in presentation order.
pub fn mission_names(constants: &PhysicalConstants) -> Vec<String> {
    builtin_missions(constants)
        .into_iter()
        .map(|mission| mission.name)
        .collect()
}

fn suggest_names(key: &str, missions: &[Mission]) -> Vec<String> {
    let mut scored: Vec<(f64, &str)> = missions
        .iter()
        .map(|mission| (strsim::jaro_winkler(key, &mission.name), mission.name.as_str()))
        .filter(|(score, _)| *score >= 0.7)
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored
        .into_iter()
        .take(3)
        .map(|(_, name)| name.to_string())
        .collect()
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_missions_are_valid() {
        let constants = PhysicalConstants::default();
        for mission in builtin_missions(&constants) {
            mission.validate().expect("built-in mission validates");
        }
    }

    #[test]
    fn names_are_in_presentation_order() {
        assert_eq!(
            mission_names(&PhysicalConstants::default()),
            vec!["impulse", "solar-sail", "sail-impulse"]
        );
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let constants = PhysicalConstants::default();
        let mission = find_mission("  Solar-Sail ", &constants).expect("found");
        assert_eq!(mission.phases.len(), 2);
    }

    #[test]
    fn unknown_name_suggests_close_match() {
        let constants = PhysicalConstants::default();
        match find_mission("impluse", &constants) {
            Err(Error::UnknownMission { name, suggestions }) => {
                assert_eq!(name, "impluse");
                assert_eq!(suggestions.first().map(String::as_str), Some("impulse"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn first_mission_starts_at_earth_distance() {
        let constants = PhysicalConstants::default();
        let mission = find_mission("impulse", &constants).expect("found");
        assert_eq!(
            mission.phases[0].start_offset_km,
            Some(constants.reference_distance_km())
        );
    }
}
