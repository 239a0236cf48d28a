use std::collections::HashSet;

use log::{debug, info};

use super::error::SchedulerError;
use crate::config::{SchedulerSettings, TiePolicy};
use crate::domain::{
    Match, MatchOutcome, MatchStatus, Pairing, PlayerId, Side, TeamKey, Tournament, pairing,
};

pub const TEAMS: usize = 4;
pub const COURTS: usize = 2;
pub const LAST_ROUND: u8 = 3;

/// What closing the current round produced
#[derive(Debug, Clone, PartialEq)]
pub enum RoundOutcome {
    /// Not enough finished matches yet; nothing was generated
    Pending,
    Next([Match; 2]),
    Complete,
}

/// Builds the three rounds of a 4-team mini round-robin, two courts per round.
///
/// Round 1 is positional, round 2 pits the round-1 winners against each
/// other (and the losers likewise), round 3 is whatever completes the
/// round-robin.
pub struct FixtureScheduler {
    tournament_id: String,
    date: Option<String>,
    tie_policy: TiePolicy,
}

impl FixtureScheduler {
    pub fn new(
        tournament_id: impl Into<String>,
        date: Option<String>,
        settings: &SchedulerSettings,
    ) -> Self {
        Self {
            tournament_id: tournament_id.into(),
            date,
            tie_policy: settings.tie_policy,
        }
    }

    pub fn for_tournament(tournament: &Tournament, settings: &SchedulerSettings) -> Self {
        Self::new(tournament.id.clone(), Some(tournament.date.clone()), settings)
    }

    /// Court 1: A vs B, court 2: C vs D
    pub fn seed_round1(
        &self,
        team_a: TeamKey,
        team_b: TeamKey,
        team_c: TeamKey,
        team_d: TeamKey,
    ) -> Result<[Match; 2], SchedulerError> {
        validate_teams([&team_a, &team_b, &team_c, &team_d])?;

        let round = [
            self.fixture(1, 1, team_a, team_b),
            self.fixture(1, 2, team_c, team_d),
        ];
        log_round(&round);
        Ok(round)
    }

    /// Winners meet on court 1, losers on court 2
    pub fn generate_round2(&self, round1: &[Match]) -> Result<[Match; 2], SchedulerError> {
        let (court1, court2) = courts_of(round1, 1)?;
        let (winner1, loser1) = self.winner_and_loser(court1)?;
        let (winner2, loser2) = self.winner_and_loser(court2)?;

        let round = [
            self.fixture(2, 1, winner1.clone(), winner2.clone()),
            self.fixture(2, 2, loser1.clone(), loser2.clone()),
        ];
        log_round(&round);
        Ok(round)
    }

    /// Pair the anchor team (round-1 court-1 team1) with the first team it
    /// has not met yet; the remaining two teams share court 2.
    pub fn generate_round3(
        &self,
        round1: &[Match],
        round2: &[Match],
    ) -> Result<[Match; 2], SchedulerError> {
        let (court1, court2) = courts_of(round1, 1)?;
        let teams = [&court1.team1, &court1.team2, &court2.team1, &court2.team2];
        validate_teams(teams)?;
        validate_same_teams(&teams, round2)?;

        let played = played_pairings(round1.iter().chain(round2));
        let anchor = teams[0];
        let opponent = (1..TEAMS)
            .find(|&i| !played.contains(&pairing(anchor, teams[i])))
            .ok_or_else(|| SchedulerError::NoUnplayedOpponent(anchor.to_string()))?;
        let rest: Vec<&TeamKey> = (1..TEAMS)
            .filter(|&i| i != opponent)
            .map(|i| teams[i])
            .collect();

        let round = [
            self.fixture(3, 1, anchor.clone(), teams[opponent].clone()),
            self.fixture(3, 2, rest[0].clone(), rest[1].clone()),
        ];
        log_round(&round);
        Ok(round)
    }

    /// Decide what follows the latest round in `matches`.
    ///
    /// The latest round must have both of its matches finished, otherwise the
    /// call is a no-op and returns [`RoundOutcome::Pending`].
    pub fn next_round(&self, matches: &[Match]) -> Result<RoundOutcome, SchedulerError> {
        let Some(round) = matches.iter().map(|m| m.round).max() else {
            return Ok(RoundOutcome::Pending);
        };

        let finished = matches
            .iter()
            .filter(|m| m.round == round && m.is_finished())
            .count();
        if finished < COURTS {
            debug!(
                "Round {} of {} has {}/{} finished matches, waiting",
                round, self.tournament_id, finished, COURTS
            );
            return Ok(RoundOutcome::Pending);
        }

        match round {
            1 => Ok(RoundOutcome::Next(
                self.generate_round2(&in_round(matches, 1))?,
            )),
            2 => Ok(RoundOutcome::Next(
                self.generate_round3(&in_round(matches, 1), &in_round(matches, 2))?,
            )),
            LAST_ROUND => {
                info!("Tournament {} complete", self.tournament_id);
                Ok(RoundOutcome::Complete)
            }
            _ => Err(SchedulerError::MalformedRound { round }),
        }
    }

    fn winner_and_loser<'m>(
        &self,
        game: &'m Match,
    ) -> Result<(&'m TeamKey, &'m TeamKey), SchedulerError> {
        match game.outcome() {
            MatchOutcome::Won(Side::Team2) => Ok((&game.team2, &game.team1)),
            MatchOutcome::Tied if self.tie_policy == TiePolicy::Reject => {
                Err(SchedulerError::TiedMatch(game.id.clone()))
            }
            _ => Ok((&game.team1, &game.team2)),
        }
    }

    fn fixture(&self, round: u8, court: u8, team1: TeamKey, team2: TeamKey) -> Match {
        Match {
            id: format!("{}-r{}-c{}", self.tournament_id, round, court),
            team1,
            team2,
            score1: 0,
            score2: 0,
            court,
            round,
            status: MatchStatus::Live,
            date: self.date.clone(),
        }
    }
}

fn in_round(matches: &[Match], round: u8) -> Vec<Match> {
    matches.iter().filter(|m| m.round == round).cloned().collect()
}

fn courts_of(matches: &[Match], round: u8) -> Result<(&Match, &Match), SchedulerError> {
    let games: Vec<&Match> = matches.iter().filter(|m| m.round == round).collect();

    match games.as_slice() {
        [a, b] if a.court == 1 && b.court == 2 => Ok((a, b)),
        [a, b] if a.court == 2 && b.court == 1 => Ok((b, a)),
        _ => Err(SchedulerError::MalformedRound { round }),
    }
}

fn played_pairings<'m>(matches: impl Iterator<Item = &'m Match>) -> HashSet<Pairing> {
    matches.map(|m| pairing(&m.team1, &m.team2)).collect()
}

fn validate_teams(teams: [&TeamKey; TEAMS]) -> Result<(), SchedulerError> {
    let keys: HashSet<&TeamKey> = teams.iter().copied().collect();
    let players: HashSet<&PlayerId> = teams.iter().flat_map(|t| t.players()).collect();

    if keys.len() == TEAMS && players.len() == TEAMS * 2 {
        Ok(())
    } else {
        Err(SchedulerError::InvalidTeams(describe(&teams)))
    }
}

fn validate_same_teams(teams: &[&TeamKey; TEAMS], round: &[Match]) -> Result<(), SchedulerError> {
    let outsider = round
        .iter()
        .flat_map(|m| [&m.team1, &m.team2])
        .any(|team| !teams.contains(&team));

    if outsider {
        Err(SchedulerError::InvalidTeams(describe(teams)))
    } else {
        Ok(())
    }
}

fn describe(teams: &[&TeamKey]) -> String {
    teams
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn log_round(round: &[Match; 2]) {
    for game in round {
        info!(
            "  Round {} court {}: {} vs {}",
            game.round, game.court, game.team1, game.team2
        );
    }
}
