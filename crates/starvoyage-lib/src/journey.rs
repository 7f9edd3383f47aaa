//! Journey log records and their textual rendering.

use std::fmt;

use serde::Serialize;

use crate::constants::PhysicalConstants;

/// One sampled point of a voyage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct JourneyRow {
    pub elapsed_secs: f64,
    pub elapsed_years: f64,
    pub distance_km: f64,
    pub pct_of_journey: f64,
    pub velocity_km_per_sec: f64,
    pub pct_of_light_speed: f64,
}

impl fmt::Display for JourneyRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:6.0} Years   {:>24} Km  {:6.2}%    {:>14} Km/sec  {:6.2}% Light",
            self.elapsed_years,
            format_grouped(self.distance_km, 0),
            self.pct_of_journey,
            format_grouped(self.velocity_km_per_sec, 3),
            self.pct_of_light_speed
        )
    }
}

/// Render a row as a single log line (no trailing newline).
pub fn format_row(row: &JourneyRow) -> String {
    row.to_string()
}

/// State of a voyage at the moment it passed its target distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VoyageOutcome {
    pub travel_time_secs: f64,
    pub distance_km: f64,
    pub velocity_km_per_sec: f64,
}

/// Result of simulating a voyage: the throttled log plus the arrival state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Journey {
    pub rows: Vec<JourneyRow>,
    pub outcome: VoyageOutcome,
}

impl Journey {
    /// The row emitted on arrival. Always present for a completed journey.
    pub fn final_row(&self) -> Option<&JourneyRow> {
        self.rows.last()
    }

    pub fn travel_time_years(&self, constants: &PhysicalConstants) -> f64 {
        constants.secs_to_years(self.outcome.travel_time_secs)
    }

    /// Formatted log lines, one per row.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.rows.iter().map(format_row)
    }
}

/// Format a number with thousand separators and a fixed number of decimals.
///
/// Non-finite values are rendered as-is so they stay visible in the log.
///
/// ```
/// use starvoyage_lib::format_grouped;
///
/// assert_eq!(format_grouped(999.0, 0), "999");
/// assert_eq!(format_grouped(1_234_567.0, 0), "1,234,567");
/// assert_eq!(format_grouped(12_345.6789, 3), "12,345.679");
/// assert_eq!(format_grouped(f64::NAN, 3), "NaN");
/// ```
pub fn format_grouped(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let digits = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut result = String::with_capacity(digits.len() + integer.len() / 3 + 1);
    // "-0.000" is printed as "0.000"
    if value < 0.0 && digits.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        result.push('-');
    }
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    if let Some(fraction) = fraction {
        result.push('.');
        result.push_str(fraction);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> JourneyRow {
        JourneyRow {
            elapsed_secs: 0.0,
            elapsed_years: 0.0,
            distance_km: 0.0,
            pct_of_journey: 0.0,
            velocity_km_per_sec: 25.0,
            pct_of_light_speed: 0.000_833,
        }
    }

    #[test]
    fn grouped_small_values() {
        assert_eq!(format_grouped(0.0, 0), "0");
        assert_eq!(format_grouped(1.0, 0), "1");
        assert_eq!(format_grouped(999.0, 0), "999");
        assert_eq!(format_grouped(25.0, 3), "25.000");
    }

    #[test]
    fn grouped_thousands_and_millions() {
        assert_eq!(format_grouped(1_000.0, 0), "1,000");
        assert_eq!(format_grouped(999_999.4, 0), "999,999");
        assert_eq!(format_grouped(999_999.5, 0), "1,000,000");
        assert_eq!(format_grouped(2_850_000.0, 3), "2,850,000.000");
        assert_eq!(
            format_grouped(397_310_400_000_000.0, 0),
            "397,310,400,000,000"
        );
    }

    #[test]
    fn grouped_negative_and_non_finite() {
        assert_eq!(format_grouped(-1_234.5, 1), "-1,234.5");
        assert_eq!(format_grouped(-0.0001, 3), "0.000");
        assert_eq!(format_grouped(f64::INFINITY, 0), "inf");
        assert_eq!(format_grouped(f64::NEG_INFINITY, 0), "-inf");
        assert_eq!(format_grouped(f64::NAN, 0), "NaN");
    }

    #[test]
    fn row_layout_matches_log_columns() {
        let line = format_row(&row());
        assert_eq!(
            line,
            "     0 Years                          0 Km    0.00%            25.000 Km/sec    0.00% Light"
        );
    }

    #[test]
    fn row_keeps_nan_visible() {
        let mut r = row();
        r.pct_of_journey = f64::NAN;
        assert!(format_row(&r).contains("   NaN%"));
    }

    #[test]
    fn wide_values_are_not_truncated() {
        let mut r = row();
        r.elapsed_years = 1_234_567.0;
        r.distance_km = 1e30;
        let line = format_row(&r);
        assert!(line.starts_with("1234567 Years"));
        assert!(line.contains("1,000,000,000,000,000,019,884,624,838,656 Km"));
    }
}
