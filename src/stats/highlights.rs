use std::collections::BTreeMap;

use serde::Serialize;

use super::ordered_matches;
use crate::domain::{Match, Tournament};

/// Average margin given to a tournament with no matches, so it ranks last
pub const NO_MATCHES_MARGIN: f64 = 99.0;

/// A match together with the tournament it was played in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayedMatch<'a> {
    pub tournament: &'a Tournament,
    pub game: &'a Match,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentSummary {
    pub tournament_id: String,
    pub date: String,
    pub location_id: Option<String>,
    pub avg_margin: f64,
    pub total_points: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationCount {
    pub location_id: String,
    pub tournaments: usize,
}

fn played_matches<'a>(timeline: &[&'a Tournament]) -> Vec<PlayedMatch<'a>> {
    timeline
        .iter()
        .flat_map(|&tournament| {
            ordered_matches(tournament)
                .into_iter()
                .map(move |game| PlayedMatch { tournament, game })
        })
        .collect()
}

/// Every match, smallest score margin first; equal margins keep play order
pub fn closest_matches<'a>(timeline: &[&'a Tournament]) -> Vec<PlayedMatch<'a>> {
    let mut matches = played_matches(timeline);
    matches.sort_by_key(|m| m.game.margin());
    matches
}

/// Every match, largest score margin first
pub fn most_lopsided_matches<'a>(timeline: &[&'a Tournament]) -> Vec<PlayedMatch<'a>> {
    let mut matches = played_matches(timeline);
    matches.sort_by_key(|m| std::cmp::Reverse(m.game.margin()));
    matches
}

/// Per-tournament average margin and points, most balanced first
pub fn balanced_tournaments(timeline: &[&Tournament]) -> Vec<TournamentSummary> {
    let mut summaries: Vec<TournamentSummary> = timeline.iter().map(|t| summarize(t)).collect();
    summaries.sort_by(|a, b| a.avg_margin.total_cmp(&b.avg_margin));
    summaries
}

/// Per-tournament summaries, most points first
pub fn highest_scoring_tournaments(timeline: &[&Tournament]) -> Vec<TournamentSummary> {
    let mut summaries = balanced_tournaments(timeline);
    summaries.sort_by_key(|s| std::cmp::Reverse(s.total_points));
    summaries
}

fn summarize(tournament: &Tournament) -> TournamentSummary {
    let matches = tournament.matches();
    let avg_margin = if matches.is_empty() {
        NO_MATCHES_MARGIN
    } else {
        let total: u64 = matches.iter().map(|m| u64::from(m.margin())).sum();
        total as f64 / matches.len() as f64
    };

    TournamentSummary {
        tournament_id: tournament.id.clone(),
        date: tournament.date.clone(),
        location_id: tournament.location_id.clone(),
        avg_margin,
        total_points: matches.iter().map(Match::total_points).sum(),
    }
}

/// Tournaments per venue, busiest first; tournaments without a venue are left out
pub fn locations_ranked(timeline: &[&Tournament]) -> Vec<LocationCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for location_id in timeline.iter().filter_map(|t| t.location_id.as_deref()) {
        *counts.entry(location_id).or_default() += 1;
    }

    let mut ranked: Vec<LocationCount> = counts
        .into_iter()
        .map(|(location_id, tournaments)| LocationCount {
            location_id: location_id.to_string(),
            tournaments,
        })
        .collect();
    ranked.sort_by_key(|l| std::cmp::Reverse(l.tournaments));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TournamentStatus;
    use crate::stats::tests::sweep;

    fn at(id: &str, date: &str, location: Option<&str>) -> Tournament {
        let mut t = sweep(id, date);
        t.location_id = location.map(str::to_string);
        t
    }

    #[test]
    fn test_matches_ranked_by_margin() {
        let t = sweep("t", "2024-03-07");

        let closest: Vec<_> = closest_matches(&[&t]).iter().map(|m| m.game.margin()).collect();
        assert_eq!(closest, [1, 2, 3, 4, 5, 6]);

        let lopsided = most_lopsided_matches(&[&t]);
        assert_eq!(lopsided[0].game.margin(), 6);
        assert_eq!(lopsided[0].game.id, "r3-c1");
        assert_eq!(lopsided[0].tournament.id, "t");
    }

    #[test]
    fn test_tournament_without_matches_ranks_least_balanced() {
        let played = sweep("played", "2024-03-07");
        let empty = Tournament::new("empty", "2024-03-08", TournamentStatus::Finished);

        let summaries = balanced_tournaments(&[&empty, &played]);
        assert_eq!(summaries[0].tournament_id, "played");
        assert_eq!(summaries[0].avg_margin, 21.0 / 6.0);
        assert_eq!(summaries[1].avg_margin, NO_MATCHES_MARGIN);
        assert_eq!(summaries[1].total_points, 0);
    }

    #[test]
    fn test_highest_scoring_first() {
        let mut low = sweep("low", "2024-03-07");
        low.matches.as_mut().unwrap().truncate(2);
        let high = sweep("high", "2024-03-14");

        let summaries = highest_scoring_tournaments(&[&low, &high]);
        assert_eq!(summaries[0].tournament_id, "high");
        assert_eq!(summaries[0].total_points, 51);
        assert_eq!(summaries[1].total_points, 15);
    }

    #[test]
    fn test_locations_counted_busiest_first() {
        let tournaments = [
            at("a", "2024-03-01", Some("north")),
            at("b", "2024-03-02", Some("south")),
            at("c", "2024-03-03", Some("south")),
            at("d", "2024-03-04", None),
        ];
        let timeline: Vec<&Tournament> = tournaments.iter().collect();

        let ranked = locations_ranked(&timeline);
        assert_eq!(ranked.len(), 2);
        assert_eq!((ranked[0].location_id.as_str(), ranked[0].tournaments), ("south", 2));
        assert_eq!((ranked[1].location_id.as_str(), ranked[1].tournaments), ("north", 1));
    }
}
