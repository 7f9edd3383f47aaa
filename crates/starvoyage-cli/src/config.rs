//! Resolution of the physical constants used by every command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use starvoyage_lib::{ConstantsConfig, PhysicalConstants};

/// Environment variable naming a JSON constants file.
pub const CONSTANTS_ENV_VAR: &str = "STARVOYAGE_CONSTANTS";

/// Where the constants came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstantsSource {
    Flag(PathBuf),
    Environment(PathBuf),
    Defaults,
}

/// Pick the constants file: `--constants` first, then `STARVOYAGE_CONSTANTS`.
pub fn constants_source(flag: Option<&Path>) -> ConstantsSource {
    if let Some(path) = flag {
        return ConstantsSource::Flag(path.to_path_buf());
    }
    match std::env::var_os(CONSTANTS_ENV_VAR) {
        Some(value) if !value.is_empty() => ConstantsSource::Environment(PathBuf::from(value)),
        _ => ConstantsSource::Defaults,
    }
}

/// Load the constants once for the whole process.
pub fn resolve_constants(flag: Option<&Path>) -> Result<PhysicalConstants> {
    let config = match constants_source(flag) {
        ConstantsSource::Flag(path) | ConstantsSource::Environment(path) => {
            debug!(path = %path.display(), "loading constants file");
            ConstantsConfig::from_path(&path)
                .with_context(|| format!("failed to load constants from {}", path.display()))?
        }
        ConstantsSource::Defaults => ConstantsConfig::default(),
    };
    Ok(PhysicalConstants::new(&config))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use tempfile::tempdir;

    #[test]
    fn flag_takes_precedence() {
        let source = constants_source(Some(Path::new("/tmp/constants.json")));
        assert_eq!(
            source,
            ConstantsSource::Flag(PathBuf::from("/tmp/constants.json"))
        );
    }

    #[test]
    fn resolves_file_overrides() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("constants.json");
        fs::write(&path, r#"{ "days_per_year": 360.0 }"#).expect("write constants");

        let constants = resolve_constants(Some(&path)).expect("constants load");
        assert_eq!(constants.seconds_per_year(), 360.0 * 86_400.0);
    }

    #[test]
    fn reports_the_offending_path() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("missing.json");
        let err = resolve_constants(Some(&path)).unwrap_err();
        assert!(format!("{err}").contains("missing.json"));
    }
}
