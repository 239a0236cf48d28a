use std::fmt;

use serde::{Deserialize, Serialize};

use super::models::PlayerId;

/// Canonical identity of a two-player team: the sorted pair of member ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "[PlayerId; 2]", into = "[PlayerId; 2]")]
pub struct TeamKey([PlayerId; 2]);

impl TeamKey {
    pub fn new(first: impl Into<PlayerId>, second: impl Into<PlayerId>) -> Self {
        Self::from([first.into(), second.into()])
    }

    pub fn players(&self) -> &[PlayerId; 2] {
        &self.0
    }

    pub fn contains(&self, player_id: &str) -> bool {
        self.0.iter().any(|id| id == player_id)
    }

    pub fn partner_of(&self, player_id: &str) -> Option<&PlayerId> {
        match &self.0 {
            [a, b] if a == player_id => Some(b),
            [a, b] if b == player_id => Some(a),
            _ => None,
        }
    }
}

impl From<[PlayerId; 2]> for TeamKey {
    fn from(mut ids: [PlayerId; 2]) -> Self {
        ids.sort();
        Self(ids)
    }
}

impl From<TeamKey> for [PlayerId; 2] {
    fn from(key: TeamKey) -> Self {
        key.0
    }
}

impl fmt::Display for TeamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.0[0], self.0[1])
    }
}

/// Unordered pair of teams, used to remember who already met whom.
pub type Pairing = (TeamKey, TeamKey);

pub fn pairing(a: &TeamKey, b: &TeamKey) -> Pairing {
    if a <= b {
        (a.clone(), b.clone())
    } else {
        (b.clone(), a.clone())
    }
}
