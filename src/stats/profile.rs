use serde::Serialize;

use super::ordered_matches;
use crate::domain::{Match, PlayerId, Tournament};

const RIVALS_SHOWN: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerStats {
    pub partner_id: PlayerId,
    pub games: u32,
    pub wins: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RivalStats {
    pub opponent_id: PlayerId,
    pub games: u32,
    pub wins_against: u32,
    pub losses_against: u32,
}

impl RivalStats {
    pub fn balance(&self) -> i32 {
        self.wins_against as i32 - self.losses_against as i32
    }
}

/// One player's partners, best and worst match-ups, and game log
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerProfile {
    pub player_id: PlayerId,
    pub partners: Vec<PartnerStats>,
    pub victims: Vec<RivalStats>,
    pub nemeses: Vec<RivalStats>,
    pub matches: Vec<Match>,
}

pub fn player_profile(player_id: &str, timeline: &[&Tournament]) -> PlayerProfile {
    let mut partners: Vec<PartnerStats> = Vec::new();
    let mut rivals: Vec<RivalStats> = Vec::new();
    let mut matches: Vec<Match> = Vec::new();

    for game in timeline.iter().flat_map(|t| ordered_matches(t)) {
        let Some(side) = game.side_of(player_id) else {
            continue;
        };
        let won = game.side_won(side);

        if let Some(partner_id) = game.team(side).partner_of(player_id) {
            let partner = find_or_insert(&mut partners, |p| &p.partner_id == partner_id, || PartnerStats {
                partner_id: partner_id.clone(),
                games: 0,
                wins: 0,
            });
            partner.games += 1;
            partner.wins += won as u32;
        }

        for opponent_id in game.team(side.opponent()).players() {
            let rival = find_or_insert(&mut rivals, |r| &r.opponent_id == opponent_id, || RivalStats {
                opponent_id: opponent_id.clone(),
                games: 0,
                wins_against: 0,
                losses_against: 0,
            });
            rival.games += 1;
            if won {
                rival.wins_against += 1;
            } else {
                rival.losses_against += 1;
            }
        }

        matches.push(game.clone());
    }

    partners.sort_by(|a, b| b.wins.cmp(&a.wins).then_with(|| b.games.cmp(&a.games)));

    let mut victims: Vec<RivalStats> = rivals.iter().filter(|r| r.balance() > 0).cloned().collect();
    victims.sort_by_key(|r| std::cmp::Reverse(r.balance()));
    victims.truncate(RIVALS_SHOWN);

    let mut nemeses: Vec<RivalStats> = rivals.into_iter().filter(|r| r.balance() < 0).collect();
    nemeses.sort_by_key(|r| r.balance());
    nemeses.truncate(RIVALS_SHOWN);

    PlayerProfile {
        player_id: player_id.to_string(),
        partners,
        victims,
        nemeses,
        matches,
    }
}

fn find_or_insert<T>(
    items: &mut Vec<T>,
    matches: impl Fn(&T) -> bool,
    create: impl FnOnce() -> T,
) -> &mut T {
    let idx = match items.iter().position(matches) {
        Some(idx) => idx,
        None => {
            items.push(create());
            items.len() - 1
        }
    };
    &mut items[idx]
}
