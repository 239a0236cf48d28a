use std::collections::BTreeMap;

use serde::Serialize;

use super::tiers::Tier;
use crate::domain::PlayerId;

pub type RatingValue = i32;

/// Ordered so that repeated runs serialize identically
pub type RatingsByPlayer = BTreeMap<PlayerId, RatingRecord>;

/// Rating after one step of the replay
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingSnapshot {
    pub label: String,
    pub points: RatingValue,
    pub level: Tier,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingRecord {
    pub current: RatingValue,
    pub history: Vec<RatingSnapshot>,
}

impl RatingRecord {
    /// Tournaments replayed for this player, excluding the starting point
    pub fn tournaments_played(&self) -> usize {
        self.history.len().saturating_sub(1)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub position: usize,
    pub player_id: PlayerId,
    pub name: String,
    pub points: RatingValue,
    pub level: Tier,
    pub tournaments_played: usize,
}
