//! Seed roster — the embedded demo suspect pool plus a loader for
//! caller-supplied roster files.
//!
//! The engine itself takes suspects as plain values; this module only exists
//! so the CLI has data to run against without the full tracker application.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::errors::MatchError;
use crate::models::Suspect;

const BUILTIN_ROSTER_JSON: &str = include_str!("../data/suspects.json");

/// Parses the embedded demo roster. Records are validated the same way as
/// file-loaded ones.
pub fn builtin_roster() -> Result<Vec<Suspect>, MatchError> {
    let roster: Vec<Suspect> = serde_json::from_str(BUILTIN_ROSTER_JSON)?;
    for suspect in &roster {
        suspect.validate()?;
    }
    Ok(roster)
}

/// Loads a suspect roster from a JSON file (an array of suspect records).
/// Every record is validated before the roster is returned.
pub fn load_roster(path: &Path) -> Result<Vec<Suspect>, MatchError> {
    let raw = fs::read_to_string(path)?;
    let roster: Vec<Suspect> = serde_json::from_str(&raw)?;
    for suspect in &roster {
        suspect.validate()?;
    }
    info!(count = roster.len(), path = %path.display(), "Roster loaded");
    Ok(roster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_roster_parses_and_is_nonempty() {
        let roster = builtin_roster().unwrap();
        assert!(!roster.is_empty());
        for suspect in &roster {
            suspect.validate().unwrap();
        }
    }

    #[test]
    fn test_builtin_roster_ids_are_unique() {
        let roster = builtin_roster().unwrap();
        let mut ids: Vec<&str> = roster.iter().map(|s| s.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), roster.len(), "Duplicate suspect id in seed data");
    }

    #[test]
    fn test_load_roster_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(BUILTIN_ROSTER_JSON.as_bytes()).unwrap();
        let roster = load_roster(file.path()).unwrap();
        assert_eq!(roster.len(), builtin_roster().unwrap().len());
    }

    #[test]
    fn test_roster_records_validated_on_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"[{"id":"  ","name":"Jane Doe","risk_level":"low","status":"wanted"}]"#)
            .unwrap();
        assert!(matches!(
            load_roster(file.path()),
            Err(MatchError::Validation { .. })
        ));
    }

    #[test]
    fn test_load_roster_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json ]").unwrap();
        assert!(matches!(
            load_roster(file.path()),
            Err(MatchError::Seed(_))
        ));
    }

    #[test]
    fn test_load_roster_missing_file_is_io_error() {
        let err = load_roster(Path::new("/nonexistent/roster.json")).unwrap_err();
        assert!(matches!(err, MatchError::Io(_)));
    }
}
