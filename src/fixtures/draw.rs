use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use super::error::SchedulerError;
use super::scheduler::TEAMS;
use crate::domain::{PlayerId, TeamKey};

pub const PLAYERS: usize = TEAMS * 2;

/// Names shown for the four teams, in round-1 seeding order
pub const TEAM_NAMES: [&str; TEAMS] = ["Aces", "Kings", "Queens", "Jacks"];

/// Four teams assigned from the eight confirmed players
#[derive(Debug, Clone, PartialEq)]
pub struct TeamDraw {
    teams: [TeamKey; TEAMS],
}

impl TeamDraw {
    /// Consecutive players form a team: (1, 2), (3, 4), ...
    pub fn manual(player_ids: &[PlayerId]) -> Result<Self, SchedulerError> {
        validate_players(player_ids)?;

        let teams = [0, 1, 2, 3].map(|i| {
            TeamKey::new(player_ids[i * 2].clone(), player_ids[i * 2 + 1].clone())
        });
        Ok(Self { teams })
    }

    pub fn random<R: Rng + ?Sized>(
        player_ids: &[PlayerId],
        rng: &mut R,
    ) -> Result<Self, SchedulerError> {
        validate_players(player_ids)?;

        let mut pool = player_ids.to_vec();
        pool.shuffle(rng);
        Self::manual(&pool)
    }

    pub fn teams(&self) -> &[TeamKey; TEAMS] {
        &self.teams
    }

    pub fn named(&self) -> impl Iterator<Item = (&'static str, &TeamKey)> {
        TEAM_NAMES.into_iter().zip(self.teams.iter())
    }
}

fn validate_players(player_ids: &[PlayerId]) -> Result<(), SchedulerError> {
    if player_ids.len() != PLAYERS {
        return Err(SchedulerError::WrongPlayerCount {
            expected: PLAYERS,
            actual: player_ids.len(),
        });
    }

    let distinct: HashSet<&PlayerId> = player_ids.iter().collect();
    if distinct.len() != PLAYERS {
        return Err(SchedulerError::InvalidTeams(format!(
            "{} distinct players among {}",
            distinct.len(),
            PLAYERS
        )));
    }

    Ok(())
}
