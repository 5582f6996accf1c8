pub mod criteria;
pub mod suspect;

pub use criteria::{AgeRange, MatchCriteria};
pub use suspect::{PriorOffense, RiskLevel, Suspect, SuspectStatus};
