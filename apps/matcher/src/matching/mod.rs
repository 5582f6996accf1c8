pub mod pipeline;
pub mod scorer;

pub use pipeline::{default_eligible_statuses, rank, RankedSuspect};
pub use scorer::{score, MatchResult, ScoreBreakdown};
