use serde::Serialize;

use crate::domain::TeamKey;

/// One row of a tournament table
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingEntry {
    pub team: TeamKey,
    pub label: String,
    pub wins: u32,
    pub losses: u32,
    pub matches_played: u32,
    pub points_for: u64,
    pub points_against: u64,
    pub points_diff: i64,
}

impl StandingEntry {
    pub fn new(team: TeamKey) -> Self {
        let label = team.players().join(" & ");
        Self {
            team,
            label,
            wins: 0,
            losses: 0,
            matches_played: 0,
            points_for: 0,
            points_against: 0,
            points_diff: 0,
        }
    }

    pub fn record(&mut self, own: u32, opponent: u32) {
        self.matches_played += 1;
        self.points_for += u64::from(own);
        self.points_against += u64::from(opponent);
        self.points_diff += i64::from(own) - i64::from(opponent);

        if own > opponent {
            self.wins += 1;
        } else if own < opponent {
            self.losses += 1;
        }
    }
}
