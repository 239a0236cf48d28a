use std::collections::BTreeSet;

use log::{debug, info, warn};

use super::tiers::Tier;
use super::types::{LeaderboardEntry, RatingRecord, RatingSnapshot, RatingValue, RatingsByPlayer};
use crate::config::RatingSettings;
use crate::domain::dates::date_label;
use crate::domain::{Match, Player, PlayerId, Side, Tournament, chronological};
use crate::standings::champion_of;

/// Replay every finished tournament, oldest first, and return each rostered
/// player's current rating with the trajectory that led to it.
///
/// Nothing is cached between calls: the result is always re-derived from
/// `players` and `tournaments`.
pub fn compute_ratings(
    players: &[Player],
    tournaments: &[Tournament],
    settings: &RatingSettings,
) -> RatingsByPlayer {
    let mut ratings = initialize_ratings(players, settings);
    let timeline = chronological(tournaments);

    info!(
        "Replaying {} finished tournaments for {} players",
        timeline.len(),
        ratings.len()
    );

    for tournament in timeline {
        replay_tournament(&mut ratings, tournament, settings);
    }

    ratings
}

/// Players with `rating_points` and `level` re-derived from `ratings`
pub fn apply_ratings(
    players: &[Player],
    ratings: &RatingsByPlayer,
    settings: &RatingSettings,
) -> Vec<Player> {
    players
        .iter()
        .map(|player| {
            let points = current_points(ratings, &player.id, settings);
            Player {
                rating_points: Some(points),
                level: Tier::from_points(points, &settings.tiers).to_string(),
                ..player.clone()
            }
        })
        .collect()
}

/// Rostered players by rating, best first; equal ratings by name
pub fn leaderboard(
    players: &[Player],
    ratings: &RatingsByPlayer,
    settings: &RatingSettings,
) -> Vec<LeaderboardEntry> {
    let mut rows: Vec<(&Player, RatingValue, usize)> = players
        .iter()
        .map(|p| {
            let played = ratings
                .get(&p.id)
                .map_or(0, RatingRecord::tournaments_played);
            (p, current_points(ratings, &p.id, settings), played)
        })
        .collect();

    rows.sort_by(|(a, a_points, _), (b, b_points, _)| {
        b_points
            .cmp(a_points)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.id.cmp(&b.id))
    });

    rows.into_iter()
        .enumerate()
        .map(|(idx, (player, points, tournaments_played))| LeaderboardEntry {
            position: idx + 1,
            player_id: player.id.clone(),
            name: player.display_name().to_string(),
            points,
            level: Tier::from_points(points, &settings.tiers),
            tournaments_played,
        })
        .collect()
}

fn current_points(ratings: &RatingsByPlayer, player_id: &str, settings: &RatingSettings) -> RatingValue {
    ratings
        .get(player_id)
        .map_or(settings.starter_rating, |record| record.current)
}

fn initialize_ratings(players: &[Player], settings: &RatingSettings) -> RatingsByPlayer {
    players
        .iter()
        .map(|p| (p.id.clone(), starter_record(settings)))
        .collect()
}

fn starter_record(settings: &RatingSettings) -> RatingRecord {
    RatingRecord {
        current: settings.starter_rating,
        history: vec![snapshot(
            settings.starter_label.to_string(),
            settings.starter_rating,
            settings,
        )],
    }
}

fn replay_tournament(
    ratings: &mut RatingsByPlayer,
    tournament: &Tournament,
    settings: &RatingSettings,
) {
    let Some(matches) = tournament.matches.as_deref() else {
        debug!("Tournament {} has no matches, skipping", tournament.id);
        return;
    };

    if tournament.parsed_date().is_none() {
        warn!(
            "Tournament {} has an unreadable date '{}', replaying it first",
            tournament.id, tournament.date
        );
    }

    let champions = champion_of(matches);

    for game in matches {
        apply_match(ratings, game, settings);
    }

    let label = date_label(&tournament.date);
    for player_id in affected_players(matches) {
        let Some(record) = ratings.get_mut(player_id) else {
            debug!("Player {} is not on the roster, skipping", player_id);
            continue;
        };

        if champions.as_ref().is_some_and(|team| team.contains(player_id)) {
            record.current += settings.champion_bonus;
        }
        record
            .history
            .push(snapshot(label.clone(), record.current, settings));
    }
}

fn apply_match(ratings: &mut RatingsByPlayer, game: &Match, settings: &RatingSettings) {
    for side in Side::BOTH {
        let won = game.side_won(side);
        for player_id in game.team(side).players() {
            if let Some(record) = ratings.get_mut(player_id) {
                adjust_rating(record, won, settings);
            }
        }
    }
}

// A tie is not a win for either side, so both take the loss
fn adjust_rating(record: &mut RatingRecord, won: bool, settings: &RatingSettings) {
    let delta = if won {
        settings.win_points
    } else {
        -settings.loss_points
    };
    record.current = (record.current + delta).max(settings.rating_floor);
}

fn affected_players(matches: &[Match]) -> BTreeSet<&PlayerId> {
    matches.iter().flat_map(|m| m.players()).collect()
}

fn snapshot(label: String, points: RatingValue, settings: &RatingSettings) -> RatingSnapshot {
    RatingSnapshot {
        label,
        points,
        level: Tier::from_points(points, &settings.tiers),
    }
}
