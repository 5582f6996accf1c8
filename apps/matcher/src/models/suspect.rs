use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::MatchError;

/// Risk classification assigned by investigators.
///
/// Roster data may carry labels outside the known set; those deserialize into
/// `Unclassified`, which scores zero rather than erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Extreme,
    High,
    Medium,
    Low,
    Unknown,
    #[serde(other)]
    Unclassified,
}

impl RiskLevel {
    /// Points contributed to the risk-profile sub-score.
    pub fn points(self) -> u32 {
        match self {
            RiskLevel::Extreme => 15,
            RiskLevel::High => 12,
            RiskLevel::Medium => 8,
            RiskLevel::Low => 4,
            RiskLevel::Unknown => 2,
            RiskLevel::Unclassified => 0,
        }
    }

    /// Display label used in reasoning lines and CLI output.
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Extreme => "Extreme Risk",
            RiskLevel::High => "High Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::Low => "Low Risk",
            RiskLevel::Unknown => "Unknown Risk",
            RiskLevel::Unclassified => "Unclassified",
        }
    }
}

/// Case status of a suspect. Only a caller-chosen subset of statuses is
/// eligible for matching (see `matching::pipeline::default_eligible_statuses`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuspectStatus {
    Wanted,
    UnderSurveillance,
    InCustody,
    Cleared,
    Unknown,
}

impl SuspectStatus {
    pub fn label(self) -> &'static str {
        match self {
            SuspectStatus::Wanted => "Wanted",
            SuspectStatus::UnderSurveillance => "Under Surveillance",
            SuspectStatus::InCustody => "In Custody",
            SuspectStatus::Cleared => "Cleared",
            SuspectStatus::Unknown => "Unknown",
        }
    }
}

/// A prior offense on record. Only the count of records feeds the criminal
/// history sub-score; charge and date are carried for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorOffense {
    pub charge: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

/// A suspect record from the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suspect {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Modus-operandi tags. Unordered, may be empty.
    #[serde(default)]
    pub mo_patterns: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_known_city: Option<String>,
    #[serde(default)]
    pub prior_offenses: Vec<PriorOffense>,
    pub risk_level: RiskLevel,
    pub status: SuspectStatus,
}

impl Suspect {
    /// Checks structural validity of a record before scoring.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.id.trim().is_empty() {
            return Err(MatchError::validation("id", "suspect id must not be blank"));
        }
        if self.name.trim().is_empty() {
            return Err(MatchError::validation(
                "name",
                format!("suspect '{}' has a blank name", self.id),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_points_table() {
        assert_eq!(RiskLevel::Extreme.points(), 15);
        assert_eq!(RiskLevel::High.points(), 12);
        assert_eq!(RiskLevel::Medium.points(), 8);
        assert_eq!(RiskLevel::Low.points(), 4);
        assert_eq!(RiskLevel::Unknown.points(), 2);
        assert_eq!(RiskLevel::Unclassified.points(), 0);
    }

    #[test]
    fn test_unrecognized_risk_label_deserializes_to_unclassified() {
        let level: RiskLevel = serde_json::from_str("\"volatile\"").unwrap();
        assert_eq!(level, RiskLevel::Unclassified);
    }

    #[test]
    fn test_known_risk_label_round_trips() {
        let level: RiskLevel = serde_json::from_str("\"extreme\"").unwrap();
        assert_eq!(level, RiskLevel::Extreme);
        assert_eq!(serde_json::to_string(&level).unwrap(), "\"extreme\"");
    }

    #[test]
    fn test_blank_id_fails_validation() {
        let suspect = Suspect {
            id: "  ".to_string(),
            name: "Jane Doe".to_string(),
            age: None,
            mo_patterns: vec![],
            last_known_city: None,
            prior_offenses: vec![],
            risk_level: RiskLevel::Low,
            status: SuspectStatus::Wanted,
        };
        let err = suspect.validate().unwrap_err();
        assert!(err.to_string().contains("'id'"), "Error was: {err}");
    }

    #[test]
    fn test_blank_name_fails_validation() {
        let suspect = Suspect {
            id: "SUS-001".to_string(),
            name: String::new(),
            age: None,
            mo_patterns: vec![],
            last_known_city: None,
            prior_offenses: vec![],
            risk_level: RiskLevel::Low,
            status: SuspectStatus::Wanted,
        };
        let err = suspect.validate().unwrap_err();
        assert!(err.to_string().contains("'name'"), "Error was: {err}");
    }
}
