use std::collections::HashMap;

use serde::Serialize;

use super::players::win_rate;
use crate::domain::{Side, TeamKey, Tournament};

/// How a fixed pair of players has done together
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DuoStats {
    pub team: TeamKey,
    pub games: u32,
    pub wins: u32,
}

impl DuoStats {
    pub fn win_rate(&self) -> u32 {
        win_rate(self.wins, self.games)
    }
}

const MIN_DUO_GAMES: u32 = 2;

/// Duos with at least two games, best win rate first, then most games
pub fn partnerships(timeline: &[&Tournament]) -> Vec<DuoStats> {
    let mut duos: Vec<DuoStats> = Vec::new();
    let mut index: HashMap<&TeamKey, usize> = HashMap::new();

    for game in timeline.iter().flat_map(|t| t.matches()) {
        for side in Side::BOTH {
            let team = game.team(side);
            let idx = *index.entry(team).or_insert_with(|| {
                duos.push(DuoStats {
                    team: team.clone(),
                    games: 0,
                    wins: 0,
                });
                duos.len() - 1
            });

            duos[idx].games += 1;
            if game.side_won(side) {
                duos[idx].wins += 1;
            }
        }
    }

    let mut ranked: Vec<DuoStats> = duos.into_iter().filter(|d| d.games >= MIN_DUO_GAMES).collect();
    ranked.sort_by(|a, b| {
        b.win_rate()
            .cmp(&a.win_rate())
            .then_with(|| b.games.cmp(&a.games))
    });
    ranked
}
