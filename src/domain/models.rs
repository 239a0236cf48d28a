use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::dates::parse_date;
use super::team::TeamKey;

pub type PlayerId = String;

/// Player record as kept by the roster collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(default)]
    pub level: String,
    #[serde(rename = "rankingPoints", default, skip_serializing_if = "Option::is_none")]
    pub rating_points: Option<i32>,
    // Avatar, handedness, colours... owned by the UI, carried through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Player {
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            last_name: None,
            nickname: None,
            level: String::new(),
            rating_points: None,
            extra: Map::new(),
        }
    }

    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }

    /// Nickname when set, otherwise the first word of the name
    pub fn display_name(&self) -> &str {
        match self.nickname.as_deref() {
            Some(nickname) if !nickname.is_empty() => nickname,
            _ => self.name.split_whitespace().next().unwrap_or(&self.name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Scheduled,
    Live,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TournamentStatus {
    Scheduled,
    Live,
    Finished,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Team1,
    Team2,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Team1, Side::Team2];

    pub fn opponent(self) -> Self {
        match self {
            Side::Team1 => Side::Team2,
            Side::Team2 => Side::Team1,
        }
    }
}

/// Result of a match read strictly from the scores
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Won(Side),
    Tied,
}

/// A single game between two teams on one court
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: String,
    pub team1: TeamKey,
    pub team2: TeamKey,
    pub score1: u32,
    pub score2: u32,
    pub court: u8,
    pub round: u8,
    pub status: MatchStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl Match {
    pub fn team(&self, side: Side) -> &TeamKey {
        match side {
            Side::Team1 => &self.team1,
            Side::Team2 => &self.team2,
        }
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Team1 => self.score1,
            Side::Team2 => self.score2,
        }
    }

    pub fn score_mut(&mut self, side: Side) -> &mut u32 {
        match side {
            Side::Team1 => &mut self.score1,
            Side::Team2 => &mut self.score2,
        }
    }

    pub fn outcome(&self) -> MatchOutcome {
        if self.score1 > self.score2 {
            MatchOutcome::Won(Side::Team1)
        } else if self.score2 > self.score1 {
            MatchOutcome::Won(Side::Team2)
        } else {
            MatchOutcome::Tied
        }
    }

    pub fn total_points(&self) -> u64 {
        u64::from(self.score1) + u64::from(self.score2)
    }

    /// Absolute score difference
    pub fn margin(&self) -> u32 {
        self.score1.abs_diff(self.score2)
    }

    pub fn side_won(&self, side: Side) -> bool {
        self.outcome() == MatchOutcome::Won(side)
    }

    pub fn side_of(&self, player_id: &str) -> Option<Side> {
        Side::BOTH
            .into_iter()
            .find(|&side| self.team(side).contains(player_id))
    }

    pub fn players(&self) -> impl Iterator<Item = &PlayerId> {
        self.team1.players().iter().chain(self.team2.players().iter())
    }

    pub fn is_finished(&self) -> bool {
        self.status == MatchStatus::Finished
    }
}

/// Tournament session as stored by the persistence collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    pub status: TournamentStatus,
    #[serde(default)]
    pub confirmed_player_ids: Vec<PlayerId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matches: Option<Vec<Match>>,
}

impl Tournament {
    pub fn new(id: impl Into<String>, date: impl Into<String>, status: TournamentStatus) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            time: None,
            duration: None,
            location_id: None,
            status,
            confirmed_player_ids: Vec::new(),
            matches: None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status == TournamentStatus::Finished
    }

    pub fn parsed_date(&self) -> Option<NaiveDateTime> {
        parse_date(&self.date).ok()
    }

    pub fn matches(&self) -> &[Match] {
        self.matches.as_deref().unwrap_or_default()
    }
}

/// Finished tournaments in replay order: by date, then by id.
///
/// Tournaments whose date cannot be parsed sort first.
pub fn chronological(tournaments: &[Tournament]) -> Vec<&Tournament> {
    let mut timeline: Vec<(Option<NaiveDateTime>, &Tournament)> = tournaments
        .iter()
        .filter(|t| t.is_finished())
        .map(|t| (t.parsed_date(), t))
        .collect();

    timeline.sort_by(|(a_date, a), (b_date, b)| a_date.cmp(b_date).then_with(|| a.id.cmp(&b.id)));
    timeline.into_iter().map(|(_, t)| t).collect()
}
