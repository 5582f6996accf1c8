use thiserror::Error;

/// Engine-level error type.
/// Scoring and ranking only fail on caller contract violations; missing
/// optional data (no location, no offenses, unrecognized risk label) is
/// never an error and degrades to a zero contribution instead.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Validation error on field '{field}': {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("Roster I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Roster parse error: {0}")]
    Seed(#[from] serde_json::Error),
}

impl MatchError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        MatchError::Validation {
            field,
            reason: reason.into(),
        }
    }
}
