//! Suspect match engine for the investigation tracker.
//!
//! The core surface is two pure functions: [`matching::score`] evaluates one
//! suspect against match criteria and returns a 0–100 composite with a
//! per-dimension breakdown and reasoning trail; [`matching::rank`] filters a
//! roster to eligible suspects, scores them, and returns matches best-first.
//! Everything else (seed roster, config, the CLI binary) stands in for the
//! tracker application that normally hosts the engine.

pub mod config;
pub mod errors;
pub mod matching;
pub mod models;
pub mod seed;

pub use errors::MatchError;
pub use matching::{default_eligible_statuses, rank, score, MatchResult, RankedSuspect};
pub use models::{MatchCriteria, Suspect};
