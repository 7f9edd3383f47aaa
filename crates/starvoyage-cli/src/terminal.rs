//! Terminal styling and color utilities.
//!
//! ANSI escape code definitions and capability detection for the journey
//! log headings. Rows themselves are never colored so they stay greppable.

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Bright bold white for mission titles.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for rules and secondary text.
    pub const GRAY: &str = "\x1b[90m";
    /// Cyan for phase labels.
    pub const CYAN: &str = "\x1b[36m";
    /// Green for arrival summaries.
    pub const GREEN: &str = "\x1b[32m";
    /// Orange (256-color) for mission notes and the banner.
    pub const ORANGE: &str = "\x1b[38;5;208m";
}

/// Resolved color codes, either actual ANSI sequences or empty strings when
/// color is disabled.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub title: &'static str,
    pub rule: &'static str,
    pub phase: &'static str,
    pub arrival: &'static str,
    pub note: &'static str,
}

impl ColorPalette {
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            title: colors::WHITE_BOLD,
            rule: colors::GRAY,
            phase: colors::CYAN,
            arrival: colors::GREEN,
            note: colors::ORANGE,
        }
    }

    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            title: "",
            rule: "",
            phase: "",
            arrival: "",
            note: "",
        }
    }

    /// Colored when the terminal supports it, plain otherwise.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Check if the terminal supports ANSI color codes.
///
/// Respects the `NO_COLOR` environment variable (https://no-color.org/) and
/// the `TERM=dumb` convention.
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}

/// Check if the terminal supports Unicode characters, based on `LANG` and
/// `LC_ALL` hints.
#[must_use]
pub fn supports_unicode() -> bool {
    ["LANG", "LC_ALL"].iter().any(|key| {
        std::env::var(key)
            .map(|value| value.to_uppercase().contains("UTF"))
            .unwrap_or(false)
    })
}
