use std::collections::HashMap;

use super::types::StandingEntry;
use crate::domain::{Match, Roster, Side, TeamKey};

/// Rank every team seen in `matches` by wins, then point differential.
///
/// Teams that are still level keep the order in which they first appeared.
pub fn compute_standings(matches: &[Match]) -> Vec<StandingEntry> {
    let mut standings = accumulate(matches);
    standings.sort_by(|a, b| {
        b.wins
            .cmp(&a.wins)
            .then_with(|| b.points_diff.cmp(&a.points_diff))
    });
    standings
}

pub fn champion(standings: &[StandingEntry]) -> Option<&StandingEntry> {
    standings.first()
}

/// Team on top of the table built from `matches`
pub fn champion_of(matches: &[Match]) -> Option<TeamKey> {
    compute_standings(matches)
        .into_iter()
        .next()
        .map(|entry| entry.team)
}

/// Replace id-based labels with player display names
pub fn label_standings(standings: &mut [StandingEntry], roster: &Roster) {
    for entry in standings.iter_mut() {
        entry.label = roster.team_label(&entry.team);
    }
}

fn accumulate(matches: &[Match]) -> Vec<StandingEntry> {
    let mut entries: Vec<StandingEntry> = Vec::new();
    let mut index: HashMap<TeamKey, usize> = HashMap::new();

    for game in matches {
        for side in Side::BOTH {
            let team = game.team(side);
            let position = *index.entry(team.clone()).or_insert_with(|| {
                entries.push(StandingEntry::new(team.clone()));
                entries.len() - 1
            });
            entries[position].record(game.score(side), game.score(side.opponent()));
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MatchStatus, Player};

    fn team(n: u8) -> TeamKey {
        TeamKey::new(format!("p{}", n * 2 - 1), format!("p{}", n * 2))
    }

    fn game(t1: u8, t2: u8, score1: u32, score2: u32) -> Match {
        Match {
            id: format!("{}v{}", t1, t2),
            team1: team(t1),
            team2: team(t2),
            score1,
            score2,
            court: 1,
            round: 1,
            status: MatchStatus::Finished,
            date: None,
        }
    }

    #[test]
    fn test_empty_matches_have_no_champion() {
        let standings = compute_standings(&[]);
        assert!(standings.is_empty());
        assert!(champion(&standings).is_none());
        assert!(champion_of(&[]).is_none());
    }

    #[test]
    fn test_wins_rank_before_differential() {
        // team 2 is seen first but team 1 has the better differential
        let matches = vec![
            game(2, 4, 6, 5),
            game(2, 3, 6, 4),
            game(1, 4, 6, 4),
            game(1, 3, 6, 3),
            game(3, 4, 6, 0),
        ];
        let standings = compute_standings(&matches);

        let order: Vec<_> = standings.iter().map(|s| s.team.clone()).collect();
        assert_eq!(order, [team(1), team(2), team(3), team(4)]);
        assert_eq!((standings[0].wins, standings[0].points_diff), (2, 5));
        assert_eq!((standings[1].wins, standings[1].points_diff), (2, 3));
        assert_eq!((standings[2].wins, standings[2].points_diff), (1, 1));
    }

    #[test]
    fn test_higher_differential_breaks_equal_wins() {
        let matches = vec![game(1, 2, 6, 5), game(3, 4, 6, 0)];
        let standings = compute_standings(&matches);

        assert_eq!(standings[0].team, team(3));
        assert_eq!(standings[0].points_diff, 6);
        assert_eq!(standings[1].team, team(1));
    }

    #[test]
    fn test_full_ties_keep_first_seen_order() {
        let matches = vec![game(3, 4, 5, 5), game(1, 2, 2, 2)];
        let order: Vec<_> = compute_standings(&matches)
            .into_iter()
            .map(|s| s.team)
            .collect();
        assert_eq!(order, [team(3), team(4), team(1), team(2)]);
    }

    #[test]
    fn test_tie_credits_no_win() {
        let standings = compute_standings(&[game(1, 2, 4, 4)]);
        assert!(standings.iter().all(|s| s.wins == 0 && s.losses == 0));
        assert!(standings.iter().all(|s| s.matches_played == 1));
    }

    #[test]
    fn test_counts_for_and_against() {
        let standings = compute_standings(&[game(1, 2, 6, 2), game(2, 1, 6, 3)]);
        let first = standings.iter().find(|s| s.team == team(1)).unwrap();
        assert_eq!((first.points_for, first.points_against), (9, 8));
        assert_eq!((first.wins, first.losses), (1, 1));
    }

    #[test]
    fn test_scores_beyond_i32_keep_their_sign() {
        let big = 3_000_000_000;
        let standings = compute_standings(&[game(1, 2, big, 0), game(1, 3, big, 0)]);

        let top = &standings[0];
        assert_eq!(top.team, team(1));
        assert_eq!(top.wins, 2);
        assert_eq!(top.points_for, 6_000_000_000);
        assert_eq!(top.points_diff, 6_000_000_000);
        assert_eq!(standings[1].points_diff, -3_000_000_000);
    }

    #[test]
    fn test_labels_from_roster() {
        let players = vec![
            Player::new("p1", "Ana Costa"),
            Player::new("p2", "Rui Mendes").with_nickname("Ruizinho"),
        ];
        let mut standings = compute_standings(&[game(1, 2, 6, 2)]);
        assert_eq!(standings[0].label, "p1 & p2");

        label_standings(&mut standings, &Roster::new(&players));
        assert_eq!(standings[0].label, "Ana & Ruizinho");
        assert_eq!(standings[1].label, "p3 & p4");
    }
}
