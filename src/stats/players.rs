use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use super::ordered_matches;
use crate::domain::{Match, Player, PlayerId, Side, Tournament};
use crate::standings::champion_of;

/// Career numbers for one player over a set of tournaments
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub player_id: PlayerId,
    pub name: String,
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub points_scored: u64,
    pub points_conceded: u64,
    pub tournaments_played: u32,
    pub tournaments_won: u32,
    pub max_win_streak: u32,
    pub current_streak: u32,
    pub balance: i32,
}

impl PlayerStats {
    fn new(player: &Player) -> Self {
        Self {
            player_id: player.id.clone(),
            name: player.display_name().to_string(),
            ..Default::default()
        }
    }

    /// Rounded percentage of games won
    pub fn win_rate(&self) -> u32 {
        win_rate(self.wins, self.games_played)
    }

    // Anything but a win, a tie included, counts as a loss here
    fn record_game(&mut self, scored: u32, conceded: u32, won: bool) {
        self.games_played += 1;
        self.points_scored += u64::from(scored);
        self.points_conceded += u64::from(conceded);

        if won {
            self.wins += 1;
            self.current_streak += 1;
            self.max_win_streak = self.max_win_streak.max(self.current_streak);
        } else {
            self.losses += 1;
            self.current_streak = 0;
        }
        self.balance = self.wins as i32 - self.losses as i32;
    }
}

/// Totals over the selected tournaments
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Overview {
    pub tournaments: usize,
    pub matches: usize,
    pub points: u64,
}

pub fn overview(timeline: &[&Tournament]) -> Overview {
    timeline.iter().fold(Overview::default(), |mut acc, t| {
        acc.tournaments += 1;
        acc.matches += t.matches().len();
        acc.points += t.matches().iter().map(Match::total_points).sum::<u64>();
        acc
    })
}

/// Stats for every rostered player with at least one game, ranked by
/// tournaments won, then balance.
pub fn player_stats(players: &[Player], timeline: &[&Tournament]) -> Vec<PlayerStats> {
    let mut stats: Vec<PlayerStats> = players.iter().map(PlayerStats::new).collect();
    let index: HashMap<&str, usize> = players
        .iter()
        .enumerate()
        .map(|(idx, p)| (p.id.as_str(), idx))
        .collect();

    for tournament in timeline {
        let matches = ordered_matches(tournament);
        let champions = champion_of(tournament.matches());
        let mut present: BTreeSet<&PlayerId> = BTreeSet::new();

        for game in matches {
            for side in Side::BOTH {
                let won = game.side_won(side);
                for player_id in game.team(side).players() {
                    present.insert(player_id);
                    if let Some(&idx) = index.get(player_id.as_str()) {
                        stats[idx].record_game(game.score(side), game.score(side.opponent()), won);
                    }
                }
            }
        }

        for player_id in present {
            let Some(&idx) = index.get(player_id.as_str()) else {
                continue;
            };
            stats[idx].tournaments_played += 1;
            if champions.as_ref().is_some_and(|team| team.contains(player_id)) {
                stats[idx].tournaments_won += 1;
            }
        }
    }

    let mut active: Vec<PlayerStats> = stats.into_iter().filter(|s| s.games_played > 0).collect();
    active.sort_by(|a, b| {
        b.tournaments_won
            .cmp(&a.tournaments_won)
            .then_with(|| b.balance.cmp(&a.balance))
    });
    active
}

pub(super) fn win_rate(wins: u32, games: u32) -> u32 {
    if games == 0 {
        0
    } else {
        (wins as f64 * 100.0 / games as f64).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::tests::{roster, sweep};

    #[test]
    fn test_counts_games_points_and_titles() {
        let t = sweep("t", "2024-03-07");
        let stats = player_stats(&roster(), &[&t]);
        let top = &stats[0];

        assert_eq!(top.player_id, "p1");
        assert_eq!((top.games_played, top.wins, top.losses), (3, 3, 0));
        assert_eq!((top.points_scored, top.points_conceded), (18, 4));
        assert_eq!((top.tournaments_played, top.tournaments_won), (1, 1));
        assert_eq!(top.max_win_streak, 3);
        assert_eq!(top.win_rate(), 100);
    }

    #[test]
    fn test_streak_resets_on_loss() {
        // team 2 (p3, p4): lose, win, win
        let t = sweep("t", "2024-03-07");
        let stats = player_stats(&roster(), &[&t]);
        let p3 = stats.iter().find(|s| s.player_id == "p3").unwrap();

        assert_eq!((p3.wins, p3.losses, p3.balance), (2, 1, 1));
        assert_eq!(p3.current_streak, 2);
        assert_eq!(p3.max_win_streak, 2);
        assert_eq!(p3.win_rate(), 67);
    }

    #[test]
    fn test_inactive_players_are_left_out() {
        let mut players = roster();
        players.push(Player::new("bench", "Bench Warmer"));
        let t = sweep("t", "2024-03-07");

        let stats = player_stats(&players, &[&t]);
        assert_eq!(stats.len(), 8);
        assert!(stats.iter().all(|s| s.player_id != "bench"));
    }

    #[test]
    fn test_overview_totals() {
        let t = sweep("t", "2024-03-07");
        let totals = overview(&[&t]);
        assert_eq!(totals.tournaments, 1);
        assert_eq!(totals.matches, 6);
        assert_eq!(totals.points, 7 + 8 + 9 + 10 + 6 + 11);
    }

    #[test]
    fn test_overview_sums_large_scores() {
        let mut t = sweep("t", "2024-03-07");
        for game in t.matches.as_mut().unwrap() {
            game.score1 = u32::MAX;
            game.score2 = u32::MAX;
        }
        assert_eq!(overview(&[&t]).points, 12 * u64::from(u32::MAX));

        let stats = player_stats(&roster(), &[&t]);
        assert_eq!(stats[0].points_scored, 3 * u64::from(u32::MAX));
    }

    #[test]
    fn test_win_rate_without_games() {
        assert_eq!(win_rate(0, 0), 0);
        assert_eq!(win_rate(1, 3), 33);
    }
}
