//! Ranking Pipeline — filters the suspect pool to eligible candidates, scores
//! each against the criteria, and returns matches sorted best-first.
//!
//! The pipeline never truncates: display limits (e.g. top 5) belong to the
//! caller.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::MatchError;
use crate::matching::scorer::{score, MatchResult};
use crate::models::{MatchCriteria, Suspect, SuspectStatus};

/// One ranked entry: the suspect paired with its scoring result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedSuspect {
    pub suspect: Suspect,
    pub result: MatchResult,
}

/// The status set the investigation tracker matches against by default:
/// actively sought suspects and those whose whereabouts are unknown.
pub fn default_eligible_statuses() -> HashSet<SuspectStatus> {
    [SuspectStatus::Wanted, SuspectStatus::Unknown]
        .into_iter()
        .collect()
}

/// Ranks `suspects` against `criteria`.
///
/// Steps:
/// 1. Keep only suspects whose status is in `eligible_statuses`
/// 2. Empty requested M.O. set → empty result (no search performed)
/// 3. Score each remaining suspect
/// 4. Drop composite-zero results
/// 5. Stable sort descending by composite — equal scores keep input order
///
/// Inputs are never mutated; results own cloned suspect records.
pub fn rank(
    suspects: &[Suspect],
    criteria: &MatchCriteria,
    eligible_statuses: &HashSet<SuspectStatus>,
) -> Result<Vec<RankedSuspect>, MatchError> {
    criteria.validate()?;

    let pool: Vec<&Suspect> = suspects
        .iter()
        .filter(|s| eligible_statuses.contains(&s.status))
        .collect();

    if criteria.mo_patterns.is_empty() {
        debug!("No M.O. patterns requested — skipping analysis");
        return Ok(Vec::new());
    }

    let mut ranked = Vec::new();
    for suspect in pool {
        let result = score(suspect, criteria)?;
        if result.score == 0 {
            continue;
        }
        ranked.push(RankedSuspect {
            suspect: suspect.clone(),
            result,
        });
    }

    // Stable sort: ties keep the relative order of the input roster.
    ranked.sort_by(|a, b| b.result.score.cmp(&a.result.score));

    debug!(
        candidates = suspects.len(),
        matches = ranked.len(),
        "Ranking complete"
    );

    Ok(ranked)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
