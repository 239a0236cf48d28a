use anyhow::Result;
use chrono::NaiveDate;
use log::info;

use super::render;
use crate::config::AppConfig;
use crate::domain::{Roster, TournamentStatus};
use crate::rating::{compute_ratings, leaderboard};
use crate::standings::{compute_standings, label_standings};
use crate::stats::{TimeRange, player_profile, stats_report, timeline};
use crate::storage::{Snapshot, SnapshotStore};

/// Read-only views over the stored history
pub struct ReportService {
    config: AppConfig,
    store: SnapshotStore,
}

impl ReportService {
    pub fn new(config: AppConfig) -> Self {
        let store = SnapshotStore::new(&config.storage.data_path);
        Self { config, store }
    }

    pub fn ratings(&self) -> Result<String> {
        let snapshot = self.store.load()?;
        let ratings = compute_ratings(&snapshot.players, &snapshot.tournaments, &self.config.rating);
        let board = leaderboard(&snapshot.players, &ratings, &self.config.rating);

        info!("Leaderboard over {} players", board.len());
        Ok(render::leaderboard_table(&board))
    }

    pub fn history(&self, player_id: &str) -> Result<String> {
        let snapshot = self.store.load()?;
        let player = snapshot.player(player_id)?;
        let ratings = compute_ratings(&snapshot.players, &snapshot.tournaments, &self.config.rating);
        let roster = Roster::new(&snapshot.players);

        let mut out = match ratings.get(player_id) {
            Some(record) => render::history_lines(player.display_name(), record),
            None => String::new(),
        };

        let all = timeline(&snapshot.tournaments, TimeRange::All, today());
        let profile = player_profile(player_id, &all);
        out.push('\n');
        out.push_str(&render::profile_lines(&profile, &roster));
        Ok(out)
    }

    pub fn standings(&self, tournament_id: &str) -> Result<String> {
        let snapshot = self.store.load()?;
        tournament_table(&snapshot, tournament_id)
    }

    pub fn stats(&self, range: TimeRange) -> Result<String> {
        let snapshot = self.store.load()?;
        let selected = timeline(&snapshot.tournaments, range, today());
        let roster = Roster::new(&snapshot.players);

        info!("Stats over {} tournaments ({:?})", selected.len(), range);
        Ok(render::stats_table(&stats_report(&snapshot.players, &selected), &roster))
    }
}

/// Labelled table for one tournament, live or finished
pub(super) fn tournament_table(snapshot: &Snapshot, tournament_id: &str) -> Result<String> {
    let tournament = snapshot.tournament(tournament_id)?;
    let roster = Roster::new(&snapshot.players);

    let mut table = compute_standings(tournament.matches());
    label_standings(&mut table, &roster);

    let is_final = tournament.status == TournamentStatus::Finished;
    Ok(render::standings_table(&table, is_final))
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
