use anyhow::{Result, bail};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::render;
use super::report::tournament_table;
use crate::config::AppConfig;
use crate::domain::{Roster, Side, Tournament, TournamentStatus};
use crate::fixtures::{LiveTournament, RoundOutcome, TeamDraw};
use crate::rating::{apply_ratings, compute_ratings};
use crate::standings::label_standings;
use crate::storage::{Snapshot, SnapshotStore};

/// Runs a tournament day against the stored snapshot
pub struct LiveService {
    config: AppConfig,
    store: SnapshotStore,
}

impl LiveService {
    pub fn new(config: AppConfig) -> Self {
        let store = SnapshotStore::new(&config.storage.data_path);
        Self { config, store }
    }

    /// Draw teams from the confirmed players and seed round 1
    pub fn draw(&self, tournament_id: &str, seed: Option<u64>) -> Result<String> {
        let mut snapshot = self.store.load()?;
        let tournament = snapshot.tournament(tournament_id)?.clone();
        if tournament.status != TournamentStatus::Scheduled {
            bail!("Tournament {} has already started", tournament_id);
        }

        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let draw = TeamDraw::random(&tournament.confirmed_player_ids, &mut rng)?;
        let live = LiveTournament::start(tournament, &draw, &self.config.scheduler)?;

        let roster = Roster::new(&snapshot.players);
        let out = format!(
            "Teams\n{}\nRound 1\n{}",
            render::draw_lines(&draw, &roster),
            render::fixture_lines(live.current_matches(), &roster)
        );

        *snapshot.tournament_mut(tournament_id)? = live.to_tournament();
        self.store.save(&snapshot)?;
        Ok(out)
    }

    pub fn score(&self, tournament_id: &str, match_id: &str, side: Side, increment: bool) -> Result<String> {
        let mut snapshot = self.store.load()?;
        let mut live = self.resume(&snapshot, tournament_id)?;

        if !live.adjust_score(match_id, side, increment) {
            bail!(
                "No match {} in round {} of tournament {}",
                match_id,
                live.current_round(),
                tournament_id
            );
        }

        let roster = Roster::new(&snapshot.players);
        let out = format!(
            "{}\n{}",
            render::fixture_lines(live.current_matches(), &roster),
            live_table(&live, &roster)
        );

        *snapshot.tournament_mut(tournament_id)? = live.to_tournament();
        self.store.save(&snapshot)?;
        Ok(out)
    }

    /// Close the round being played; after the last one the tournament is
    /// finished and every player's rating re-derived.
    pub fn next_round(&self, tournament_id: &str) -> Result<String> {
        let mut snapshot = self.store.load()?;
        let mut live = self.resume(&snapshot, tournament_id)?;

        let out = match live.close_round()? {
            RoundOutcome::Pending => {
                return Ok(format!(
                    "Round {} is still missing matches, nothing to close\n",
                    live.current_round()
                ));
            }
            RoundOutcome::Next(_) => {
                *snapshot.tournament_mut(tournament_id)? = live.to_tournament();
                let roster = Roster::new(&snapshot.players);
                format!(
                    "Round {}\n{}\n{}",
                    live.current_round(),
                    render::fixture_lines(live.current_matches(), &roster),
                    live_table(&live, &roster)
                )
            }
            RoundOutcome::Complete => {
                *snapshot.tournament_mut(tournament_id)? = live.finish();
                refresh_ratings(&mut snapshot, &self.config);
                format!("Final standings\n{}", tournament_table(&snapshot, tournament_id)?)
            }
        };

        self.store.save(&snapshot)?;
        Ok(out)
    }

    fn resume(&self, snapshot: &Snapshot, tournament_id: &str) -> Result<LiveTournament> {
        let tournament: &Tournament = snapshot.tournament(tournament_id)?;
        if tournament.status != TournamentStatus::Live {
            bail!("Tournament {} is not being played", tournament_id);
        }
        Ok(LiveTournament::resume(tournament.clone(), &self.config.scheduler)?)
    }
}

fn live_table(live: &LiveTournament, roster: &Roster) -> String {
    let mut table = live.standings();
    label_standings(&mut table, roster);
    render::standings_table(&table, false)
}

fn refresh_ratings(snapshot: &mut Snapshot, config: &AppConfig) {
    let ratings = compute_ratings(&snapshot.players, &snapshot.tournaments, &config.rating);
    snapshot.players = apply_ratings(&snapshot.players, &ratings, &config.rating);
    info!("Ratings refreshed for {} players", snapshot.players.len());
}
