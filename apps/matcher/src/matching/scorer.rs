//! Match Scorer — deterministic weighted-sum scoring of one suspect against
//! user-supplied criteria.
//!
//! Pure function, no LLM call, no hidden state: identical inputs always
//! produce an identical `MatchResult`.

use serde::{Deserialize, Serialize};

use crate::errors::MatchError;
use crate::models::{MatchCriteria, RiskLevel, Suspect};

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// Per-dimension sub-scores, each rounded independently of the composite.
/// The caps sum to exactly 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub mo_pattern: u32,       // 0–40
    pub location: u32,         // 0–20
    pub criminal_history: u32, // 0–25
    pub risk_profile: u32,     // 0–15
}

/// Full scoring result for one (suspect, criteria) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Composite score 0–100: the four real-valued sub-scores summed, then
    /// rounded. The breakdown rounds each sub-score separately, so the
    /// rounding happens at two points on purpose.
    pub score: u32,
    pub breakdown: ScoreBreakdown,
    /// Human-readable trail of which sub-scores fired, in evaluation order:
    /// M.O. → location → history → risk profile.
    pub reasoning: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Weights
// ────────────────────────────────────────────────────────────────────────────

/// Sub-score caps. Part of the observable contract, not internal tuning.
pub const MO_PATTERN_CAP: f64 = 40.0;
pub const LOCATION_CAP: f64 = 20.0;
pub const CRIMINAL_HISTORY_CAP: f64 = 25.0;
pub const RISK_PROFILE_CAP: f64 = 15.0;

/// Each prior offense is worth 8 points, capped at `CRIMINAL_HISTORY_CAP`.
const POINTS_PER_OFFENSE: f64 = 8.0;

// ────────────────────────────────────────────────────────────────────────────
// Core scoring algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Scores one suspect against the criteria.
///
/// Algorithm:
/// 1. M.O. overlap: `min(40, matched/requested × 40)`
/// 2. Location: binary 20 on case-insensitive substring match
/// 3. Criminal history: `min(25, 8 × offense count)`
/// 4. Risk profile: fixed lookup, always added
///
/// Absent optional criteria contribute zero and add no reasoning line.
/// Fails only on structural contract violations (blank id, inverted age
/// range), never on missing data.
pub fn score(suspect: &Suspect, criteria: &MatchCriteria) -> Result<MatchResult, MatchError> {
    suspect.validate()?;
    criteria.validate()?;

    let mut reasoning = Vec::new();

    let mo_pattern = mo_pattern_score(suspect, criteria, &mut reasoning);
    let location = location_score(suspect, criteria, &mut reasoning);
    let criminal_history = criminal_history_score(suspect, &mut reasoning);
    let risk_profile = risk_profile_score(suspect.risk_level, &mut reasoning);

    // Composite rounds the real-valued sum; the breakdown rounds each
    // component separately. Both roundings are observable behavior.
    let composite = (mo_pattern + location + criminal_history + risk_profile).round() as u32;

    Ok(MatchResult {
        score: composite,
        breakdown: ScoreBreakdown {
            mo_pattern: mo_pattern.round() as u32,
            location: location.round() as u32,
            criminal_history: criminal_history.round() as u32,
            risk_profile: risk_profile.round() as u32,
        },
        reasoning,
    })
}

/// M.O. overlap: case-sensitive exact tag intersection, proportional credit.
/// Matched tags are reported in the suspect's own tag order.
fn mo_pattern_score(
    suspect: &Suspect,
    criteria: &MatchCriteria,
    reasoning: &mut Vec<String>,
) -> f64 {
    if criteria.mo_patterns.is_empty() {
        return 0.0;
    }

    // Tags form a set: a repeated tag on a roster record counts once.
    let mut matched: Vec<&str> = Vec::new();
    for tag in &suspect.mo_patterns {
        if criteria.mo_patterns.iter().any(|wanted| wanted == tag)
            && !matched.contains(&tag.as_str())
        {
            matched.push(tag);
        }
    }

    if matched.is_empty() {
        return 0.0;
    }

    reasoning.push(format!(
        "Matched {} M.O. patterns: {}",
        matched.len(),
        matched.join(", ")
    ));

    (matched.len() as f64 / criteria.mo_patterns.len() as f64 * MO_PATTERN_CAP).min(MO_PATTERN_CAP)
}

/// Location: all-or-nothing 20 points when the suspect's last known city
/// contains the requested location, case-insensitively.
fn location_score(
    suspect: &Suspect,
    criteria: &MatchCriteria,
    reasoning: &mut Vec<String>,
) -> f64 {
    let (Some(wanted), Some(city)) = (
        criteria.location.as_deref(),
        suspect.last_known_city.as_deref(),
    ) else {
        return 0.0;
    };

    if city.to_lowercase().contains(&wanted.to_lowercase()) {
        reasoning.push(format!("Last known in {city}"));
        LOCATION_CAP
    } else {
        0.0
    }
}

/// Criminal history: record count only — offense content is display-level.
fn criminal_history_score(suspect: &Suspect, reasoning: &mut Vec<String>) -> f64 {
    let count = suspect.prior_offenses.len();
    if count == 0 {
        return 0.0;
    }

    reasoning.push(format!("{count} prior offense(s) on record"));
    (POINTS_PER_OFFENSE * count as f64).min(CRIMINAL_HISTORY_CAP)
}

/// Risk profile: always added; only extreme/high classifications are called
/// out in the reasoning trail.
fn risk_profile_score(risk_level: RiskLevel, reasoning: &mut Vec<String>) -> f64 {
    if matches!(risk_level, RiskLevel::Extreme | RiskLevel::High) {
        reasoning.push(format!("Classified as {}", risk_level.label()));
    }
    f64::from(risk_level.points())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
