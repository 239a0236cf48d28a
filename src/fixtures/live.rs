use log::{debug, info};

use super::draw::TeamDraw;
use super::error::SchedulerError;
use super::scheduler::{COURTS, FixtureScheduler, RoundOutcome};
use crate::config::SchedulerSettings;
use crate::domain::{Match, MatchStatus, Side, Tournament, TournamentStatus};
use crate::standings::{StandingEntry, compute_standings};

/// A tournament being played, one round at a time
pub struct LiveTournament {
    tournament: Tournament,
    matches: Vec<Match>,
    current_round: u8,
    scheduler: FixtureScheduler,
}

impl LiveTournament {
    /// Seed round 1 from the drawn teams and mark the tournament live
    pub fn start(
        mut tournament: Tournament,
        draw: &TeamDraw,
        settings: &SchedulerSettings,
    ) -> Result<Self, SchedulerError> {
        let scheduler = FixtureScheduler::for_tournament(&tournament, settings);
        let [a, b, c, d] = draw.teams().clone();
        let round1 = scheduler.seed_round1(a, b, c, d)?;

        info!("Starting tournament {} ({})", tournament.id, tournament.date);
        tournament.status = TournamentStatus::Live;
        tournament.matches = None;

        Ok(Self {
            tournament,
            matches: round1.to_vec(),
            current_round: 1,
            scheduler,
        })
    }

    /// Pick up a tournament whose fixtures were already generated
    pub fn resume(
        mut tournament: Tournament,
        settings: &SchedulerSettings,
    ) -> Result<Self, SchedulerError> {
        let matches = tournament.matches.take().unwrap_or_default();
        let Some(current_round) = matches.iter().map(|m| m.round).max() else {
            return Err(SchedulerError::NotStarted(tournament.id));
        };

        Ok(Self {
            scheduler: FixtureScheduler::for_tournament(&tournament, settings),
            tournament,
            matches,
            current_round,
        })
    }

    pub fn current_round(&self) -> u8 {
        self.current_round
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn current_matches(&self) -> impl Iterator<Item = &Match> {
        self.matches
            .iter()
            .filter(move |m| m.round == self.current_round)
    }

    /// +1, or -1 floored at zero, on a match of the round being played.
    ///
    /// Returns false when no such match exists.
    pub fn adjust_score(&mut self, match_id: &str, side: Side, increment: bool) -> bool {
        let current_round = self.current_round;
        let Some(game) = self
            .matches
            .iter_mut()
            .find(|m| m.id == match_id && m.round == current_round)
        else {
            debug!("No match {} in round {}", match_id, current_round);
            return false;
        };

        let score = game.score_mut(side);
        *score = if increment {
            score.saturating_add(1)
        } else {
            score.saturating_sub(1)
        };
        true
    }

    /// Finish the current round and append the next one.
    ///
    /// Nothing changes unless the round has both of its matches and the next
    /// round could be built.
    pub fn close_round(&mut self) -> Result<RoundOutcome, SchedulerError> {
        if self.current_matches().count() < COURTS {
            return Ok(RoundOutcome::Pending);
        }

        let mut closed = self.matches.clone();
        for game in closed.iter_mut().filter(|m| m.round == self.current_round) {
            game.status = MatchStatus::Finished;
        }

        let outcome = self.scheduler.next_round(&closed)?;
        if let RoundOutcome::Next(next) = &outcome {
            closed.extend(next.iter().cloned());
            self.current_round += 1;
        }
        self.matches = closed;

        Ok(outcome)
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.scheduler.next_round(&self.matches), Ok(RoundOutcome::Complete))
    }

    /// Live leaderboard over everything played so far
    pub fn standings(&self) -> Vec<StandingEntry> {
        compute_standings(&self.matches)
    }

    /// The tournament as it goes into history: finished, every match final
    pub fn finish(self) -> Tournament {
        let mut tournament = self.tournament;
        let matches = self
            .matches
            .into_iter()
            .map(|m| Match {
                status: MatchStatus::Finished,
                ..m
            })
            .collect();

        tournament.status = TournamentStatus::Finished;
        tournament.matches = Some(matches);
        info!("Tournament {} finished", tournament.id);
        tournament
    }

    /// Snapshot of the tournament without closing anything
    pub fn to_tournament(&self) -> Tournament {
        let mut tournament = self.tournament.clone();
        tournament.matches = Some(self.matches.clone());
        tournament
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PlayerId;

    fn live() -> LiveTournament {
        let ids: Vec<PlayerId> = (1..=8).map(|i| format!("p{}", i)).collect();
        let draw = TeamDraw::manual(&ids).unwrap();
        let tournament = Tournament::new("t", "2024-06-01", TournamentStatus::Scheduled);
        LiveTournament::start(tournament, &draw, &SchedulerSettings::default()).unwrap()
    }

    fn score(live: &mut LiveTournament, match_id: &str, side: Side, points: u32) {
        for _ in 0..points {
            assert!(live.adjust_score(match_id, side, true));
        }
    }

    #[test]
    fn test_start_seeds_round1() {
        let live = live();
        assert_eq!(live.current_round(), 1);
        assert_eq!(live.current_matches().count(), 2);
        assert_eq!(live.to_tournament().status, TournamentStatus::Live);
    }

    #[test]
    fn test_score_decrement_saturates() {
        let mut live = live();
        assert!(live.adjust_score("t-r1-c1", Side::Team1, false));
        assert_eq!(live.matches()[0].score1, 0);

        score(&mut live, "t-r1-c1", Side::Team1, 2);
        live.adjust_score("t-r1-c1", Side::Team1, false);
        assert_eq!(live.matches()[0].score1, 1);

        assert!(!live.adjust_score("nope", Side::Team1, true));
    }

    #[test]
    fn test_standings_follow_live_scores() {
        let mut live = live();
        score(&mut live, "t-r1-c2", Side::Team2, 3);

        let table = live.standings();
        assert_eq!(table.len(), 4);
        assert_eq!(table[0].team, crate::domain::TeamKey::new("p7", "p8"));
        assert_eq!((table[0].wins, table[0].points_diff), (1, 3));
        assert_eq!(table[3].points_diff, -3);
    }

    #[test]
    fn test_full_tournament_flow() {
        let mut live = live();
        score(&mut live, "t-r1-c1", Side::Team1, 6);
        score(&mut live, "t-r1-c2", Side::Team2, 6);
        assert!(matches!(live.close_round().unwrap(), RoundOutcome::Next(_)));
        assert_eq!(live.current_round(), 2);

        // round-1 scores are frozen once the round is closed
        assert!(!live.adjust_score("t-r1-c1", Side::Team1, true));

        score(&mut live, "t-r2-c1", Side::Team1, 6);
        score(&mut live, "t-r2-c2", Side::Team1, 6);
        assert!(matches!(live.close_round().unwrap(), RoundOutcome::Next(_)));

        score(&mut live, "t-r3-c1", Side::Team1, 6);
        score(&mut live, "t-r3-c2", Side::Team2, 6);
        assert_eq!(live.close_round().unwrap(), RoundOutcome::Complete);
        assert!(live.is_complete());

        let finished = live.finish();
        assert_eq!(finished.status, TournamentStatus::Finished);
        assert_eq!(finished.matches().len(), 6);
        assert!(finished.matches().iter().all(Match::is_finished));
    }

    #[test]
    fn test_rejected_tie_leaves_round_open() {
        let ids: Vec<PlayerId> = (1..=8).map(|i| format!("p{}", i)).collect();
        let draw = TeamDraw::manual(&ids).unwrap();
        let settings = SchedulerSettings {
            tie_policy: crate::config::TiePolicy::Reject,
        };
        let tournament = Tournament::new("t", "2024-06-01", TournamentStatus::Scheduled);
        let mut live = LiveTournament::start(tournament, &draw, &settings).unwrap();

        score(&mut live, "t-r1-c2", Side::Team1, 3);
        assert!(live.close_round().is_err());
        assert_eq!(live.current_round(), 1);
        assert!(live.matches().iter().all(|m| m.status == MatchStatus::Live));
    }

    #[test]
    fn test_resume_requires_fixtures() {
        let tournament = Tournament::new("t", "2024-06-01", TournamentStatus::Live);
        let err = LiveTournament::resume(tournament, &SchedulerSettings::default())
            .err()
            .unwrap();
        assert_eq!(err, SchedulerError::NotStarted("t".into()));

        let resumed =
            LiveTournament::resume(live().to_tournament(), &SchedulerSettings::default()).unwrap();
        assert_eq!(resumed.current_round(), 1);
    }
}
