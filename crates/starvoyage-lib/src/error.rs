use thiserror::Error;

/// Convenient result alias for the starvoyage library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// The kinematic model itself never fails: NaN and infinities flow through
/// rows untouched. These variants cover the layers around it (bounded
/// simulation, mission composition, configuration loading).
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a bounded simulation runs out of steps before arriving.
    #[error(
        "voyage did not arrive within {steps} steps ({elapsed_secs:.0} simulated seconds)"
    )]
    StepLimitExceeded { steps: u64, elapsed_secs: f64 },

    /// Raised when a phase has neither velocity nor acceleration and would never arrive.
    #[error("phase '{label}' has no velocity and no acceleration; it would never arrive")]
    StationaryVoyage { label: String },

    /// Raised when a mission or constants value fails validation.
    #[error("invalid {field}: {message}")]
    InvalidParameter { field: String, message: String },

    /// Raised when a mission lists no phases.
    #[error("mission '{name}' has no phases")]
    EmptyMission { name: String },

    /// Raised when a mission name could not be found in the built-in catalogue.
    #[error("unknown mission: {name}{}", format_suggestions(.suggestions))]
    UnknownMission {
        name: String,
        suggestions: Vec<String>,
    },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON parsing errors in mission and constants files.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidParameter {
            field: field.into(),
            message: message.into(),
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_mission_lists_suggestions() {
        let err = Error::UnknownMission {
            name: "impluse".to_string(),
            suggestions: vec!["impulse".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unknown mission: impluse. Did you mean 'impulse'?"
        );

        let err = Error::UnknownMission {
            name: "sail".to_string(),
            suggestions: vec!["solar-sail".to_string(), "sail-impulse".to_string()],
        };
        assert!(err
            .to_string()
            .ends_with("Did you mean one of: 'solar-sail', 'sail-impulse'?"));
    }

    #[test]
    fn unknown_mission_without_suggestions_is_bare() {
        let err = Error::UnknownMission {
            name: "warp".to_string(),
            suggestions: Vec::new(),
        };
        assert_eq!(err.to_string(), "unknown mission: warp");
    }
}
