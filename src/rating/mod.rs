pub mod engine;
pub mod tiers;
pub mod types;

pub use engine::{apply_ratings, compute_ratings, leaderboard};
pub use tiers::Tier;
pub use types::{LeaderboardEntry, RatingRecord, RatingSnapshot, RatingsByPlayer};
