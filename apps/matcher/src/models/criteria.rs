use serde::{Deserialize, Serialize};

use crate::errors::MatchError;

/// Inclusive age bounds. Accepted by the scorer contract but unscored; the
/// calling layer owns any age-based display filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    pub min: u32,
    pub max: u32,
}

/// Search criteria supplied per match request.
/// An empty `mo_patterns` set means "no search performed" — the pipeline
/// returns an empty result rather than scoring anything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchCriteria {
    #[serde(default)]
    pub mo_patterns: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_range: Option<AgeRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl MatchCriteria {
    /// Rejects structurally invalid criteria instead of silently defaulting,
    /// so scoring stays deterministic and auditable.
    ///
    /// Checks:
    /// - no blank or duplicate requested M.O. tag (duplicates would skew the
    ///   matched/requested ratio)
    /// - a provided location must be non-blank (a blank string substring-matches
    ///   every city and would award 20 points across the board)
    /// - age range must not be inverted
    pub fn validate(&self) -> Result<(), MatchError> {
        for (idx, tag) in self.mo_patterns.iter().enumerate() {
            if tag.trim().is_empty() {
                return Err(MatchError::validation(
                    "mo_patterns",
                    format!("requested tag at index {idx} is blank"),
                ));
            }
            if self.mo_patterns[..idx].contains(tag) {
                return Err(MatchError::validation(
                    "mo_patterns",
                    format!("requested tag '{tag}' appears more than once"),
                ));
            }
        }

        if let Some(location) = &self.location {
            if location.trim().is_empty() {
                return Err(MatchError::validation(
                    "location",
                    "location filter must not be blank when provided",
                ));
            }
        }

        if let Some(range) = &self.age_range {
            if range.min > range.max {
                return Err(MatchError::validation(
                    "age_range",
                    format!("min ({}) exceeds max ({})", range.min, range.max),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_criteria_is_valid() {
        assert!(MatchCriteria::default().validate().is_ok());
    }

    #[test]
    fn test_blank_tag_rejected() {
        let criteria = MatchCriteria {
            mo_patterns: vec!["forced entry".to_string(), "   ".to_string()],
            ..Default::default()
        };
        let err = criteria.validate().unwrap_err();
        assert!(err.to_string().contains("'mo_patterns'"), "Error was: {err}");
    }

    #[test]
    fn test_duplicate_tag_rejected() {
        let criteria = MatchCriteria {
            mo_patterns: vec!["arson".to_string(), "arson".to_string()],
            ..Default::default()
        };
        let err = criteria.validate().unwrap_err();
        assert!(err.to_string().contains("more than once"), "Error was: {err}");
    }

    #[test]
    fn test_blank_location_rejected() {
        let criteria = MatchCriteria {
            location: Some("  ".to_string()),
            ..Default::default()
        };
        let err = criteria.validate().unwrap_err();
        assert!(err.to_string().contains("'location'"), "Error was: {err}");
    }

    #[test]
    fn test_inverted_age_range_rejected() {
        let criteria = MatchCriteria {
            age_range: Some(AgeRange { min: 50, max: 20 }),
            ..Default::default()
        };
        let err = criteria.validate().unwrap_err();
        assert!(err.to_string().contains("'age_range'"), "Error was: {err}");
    }

    #[test]
    fn test_unscored_filters_accepted() {
        let criteria = MatchCriteria {
            mo_patterns: vec!["burglary".to_string()],
            location: Some("Metro City".to_string()),
            age_range: Some(AgeRange { min: 20, max: 50 }),
            category: Some("property crime".to_string()),
        };
        assert!(criteria.validate().is_ok());
    }
}
