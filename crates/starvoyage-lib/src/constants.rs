//! Physical constants and unit conversion factors.
//!
//! The primitive values live in [`ConstantsConfig`], which can be loaded from a
//! JSON file to override any subset of the defaults. [`PhysicalConstants`]
//! derives every conversion factor from those primitives exactly once and is
//! then passed by reference to every voyage.

use std::{fs, io::Read, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Metres in one kilometre.
pub const METRES_PER_KM: f64 = 1_000.0;

/// Reference distance from the Sun to the Earth, in kilometres.
pub const SUN_TO_EARTH_KM: f64 = 93_000_000_000.0;

/// Speed of light used by the model, in km/s. This is the model's own value,
/// not the literature one.
pub const SPEED_OF_LIGHT_KM_PER_SEC: f64 = 3_000_000.0;

pub const SECONDS_PER_MINUTE: f64 = 60.0;
pub const MINUTES_PER_HOUR: f64 = 60.0;
pub const HOURS_PER_DAY: f64 = 24.0;
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Standard gravity, in m/s².
pub const G_FORCE_M_PER_SEC2: f64 = 9.81;

/// Distance to Alpha Centauri, in light-years.
pub const ALPHA_CENTAURI_LIGHT_YEARS: f64 = 4.2;

/// Ships cannot go faster than this fraction of the speed of light.
pub const MAX_SPEED_FRACTION_OF_LIGHT: f64 = 0.95;

/// Primitive constants from which every conversion factor is derived.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConstantsConfig {
    pub metres_per_km: f64,
    pub reference_distance_km: f64,
    pub speed_of_light_km_per_sec: f64,
    pub seconds_per_minute: f64,
    pub minutes_per_hour: f64,
    pub hours_per_day: f64,
    pub days_per_year: f64,
    pub g_force_m_per_sec2: f64,
    pub target_body_light_years: f64,
    pub max_speed_fraction_of_light: f64,
}

impl Default for ConstantsConfig {
    fn default() -> Self {
        Self {
            metres_per_km: METRES_PER_KM,
            reference_distance_km: SUN_TO_EARTH_KM,
            speed_of_light_km_per_sec: SPEED_OF_LIGHT_KM_PER_SEC,
            seconds_per_minute: SECONDS_PER_MINUTE,
            minutes_per_hour: MINUTES_PER_HOUR,
            hours_per_day: HOURS_PER_DAY,
            days_per_year: DAYS_PER_YEAR,
            g_force_m_per_sec2: G_FORCE_M_PER_SEC2,
            target_body_light_years: ALPHA_CENTAURI_LIGHT_YEARS,
            max_speed_fraction_of_light: MAX_SPEED_FRACTION_OF_LIGHT,
        }
    }
}

impl ConstantsConfig {
    /// Load a constants file. Fields missing from the file keep their defaults.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let config: Self = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate that every primitive is usable as a conversion factor.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            (self.metres_per_km, "metres_per_km"),
            (self.reference_distance_km, "reference_distance_km"),
            (self.speed_of_light_km_per_sec, "speed_of_light_km_per_sec"),
            (self.seconds_per_minute, "seconds_per_minute"),
            (self.minutes_per_hour, "minutes_per_hour"),
            (self.hours_per_day, "hours_per_day"),
            (self.days_per_year, "days_per_year"),
            (self.g_force_m_per_sec2, "g_force_m_per_sec2"),
            (self.target_body_light_years, "target_body_light_years"),
            (
                self.max_speed_fraction_of_light,
                "max_speed_fraction_of_light",
            ),
        ];

        for (value, field) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::invalid(field, "must be a finite positive number"));
            }
        }

        if self.max_speed_fraction_of_light > 1.0 {
            return Err(Error::invalid(
                "max_speed_fraction_of_light",
                format!(
                    "must not exceed 1.0, got {}",
                    self.max_speed_fraction_of_light
                ),
            ));
        }

        Ok(())
    }
}

/// Derived conversion factors, fixed for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhysicalConstants {
    metres_per_km: f64,
    reference_distance_km: f64,
    speed_of_light_km_per_sec: f64,
    seconds_per_minute: f64,
    seconds_per_hour: f64,
    seconds_per_day: f64,
    days_per_year: f64,
    seconds_per_year: f64,
    light_year_km: f64,
    g_force_km_per_sec2: f64,
    target_body_light_years: f64,
    max_speed_fraction_of_light: f64,
    max_speed_km_per_sec: f64,
}

impl PhysicalConstants {
    pub fn new(config: &ConstantsConfig) -> Self {
        let seconds_per_hour = config.minutes_per_hour * config.seconds_per_minute;
        let seconds_per_day = config.hours_per_day * seconds_per_hour;
        let seconds_per_year = config.days_per_year * seconds_per_day;

        Self {
            metres_per_km: config.metres_per_km,
            reference_distance_km: config.reference_distance_km,
            speed_of_light_km_per_sec: config.speed_of_light_km_per_sec,
            seconds_per_minute: config.seconds_per_minute,
            seconds_per_hour,
            seconds_per_day,
            days_per_year: config.days_per_year,
            seconds_per_year,
            light_year_km: config.speed_of_light_km_per_sec * seconds_per_year,
            g_force_km_per_sec2: config.g_force_m_per_sec2 / config.metres_per_km,
            target_body_light_years: config.target_body_light_years,
            max_speed_fraction_of_light: config.max_speed_fraction_of_light,
            max_speed_km_per_sec: config.max_speed_fraction_of_light
                * config.speed_of_light_km_per_sec,
        }
    }

    pub fn metres_per_km(&self) -> f64 {
        self.metres_per_km
    }

    pub fn reference_distance_km(&self) -> f64 {
        self.reference_distance_km
    }

    pub fn speed_of_light_km_per_sec(&self) -> f64 {
        self.speed_of_light_km_per_sec
    }

    pub fn seconds_per_minute(&self) -> f64 {
        self.seconds_per_minute
    }

    pub fn seconds_per_hour(&self) -> f64 {
        self.seconds_per_hour
    }

    pub fn seconds_per_day(&self) -> f64 {
        self.seconds_per_day
    }

    pub fn days_per_year(&self) -> f64 {
        self.days_per_year
    }

    pub fn seconds_per_year(&self) -> f64 {
        self.seconds_per_year
    }

    /// Distance light covers in one model year, in kilometres.
    pub fn light_year_km(&self) -> f64 {
        self.light_year_km
    }

    pub fn g_force_km_per_sec2(&self) -> f64 {
        self.g_force_km_per_sec2
    }

    pub fn target_body_light_years(&self) -> f64 {
        self.target_body_light_years
    }

    pub fn max_speed_fraction_of_light(&self) -> f64 {
        self.max_speed_fraction_of_light
    }

    /// Hard velocity ceiling applied by the kinematic model, in km/s.
    pub fn max_speed_km_per_sec(&self) -> f64 {
        self.max_speed_km_per_sec
    }

    pub fn km_to_light_years(&self, km: f64) -> f64 {
        km / self.light_year_km
    }

    pub fn secs_to_years(&self, secs: f64) -> f64 {
        secs / self.seconds_per_day / self.days_per_year
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::new(&ConstantsConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_values_follow_primitives() {
        let c = PhysicalConstants::default();
        assert_eq!(c.seconds_per_hour(), 3_600.0);
        assert_eq!(c.seconds_per_day(), 86_400.0);
        assert_eq!(c.seconds_per_year(), 365.0 * 24.0 * 3_600.0);
        assert_eq!(c.light_year_km(), 3_000_000.0 * 31_536_000.0);
        assert!((c.g_force_km_per_sec2() - 0.00981).abs() < 1e-15);
        assert_eq!(c.max_speed_km_per_sec(), 0.95 * 3_000_000.0);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let json = r#"{ "speed_of_light_km_per_sec": 300000.0 }"#;
        let config = ConstantsConfig::from_reader(json.as_bytes()).expect("valid config");
        assert_eq!(config.speed_of_light_km_per_sec, 300_000.0);
        assert_eq!(config.days_per_year, DAYS_PER_YEAR);

        let c = PhysicalConstants::new(&config);
        assert_eq!(c.light_year_km(), 300_000.0 * 31_536_000.0);
        assert_eq!(c.max_speed_km_per_sec(), 285_000.0);
    }

    #[test]
    fn rejects_non_positive_and_superluminal_values() {
        let json = r#"{ "days_per_year": 0.0 }"#;
        let err = ConstantsConfig::from_reader(json.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("days_per_year"));

        let json = r#"{ "max_speed_fraction_of_light": 1.5 }"#;
        let err = ConstantsConfig::from_reader(json.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("must not exceed 1.0"));
    }

    #[test]
    fn rejects_unknown_fields() {
        let json = r#"{ "warp_factor": 9.0 }"#;
        assert!(matches!(
            ConstantsConfig::from_reader(json.as_bytes()),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn converts_seconds_and_kilometres() {
        let c = PhysicalConstants::default();
        assert_eq!(c.secs_to_years(c.seconds_per_year()), 1.0);
        assert_eq!(c.km_to_light_years(c.light_year_km() * 2.0), 2.0);
    }
}
