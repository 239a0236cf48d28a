mod highlights;
mod partnerships;
mod players;
mod profile;
mod range;

use crate::domain::{Match, Player, Tournament};

pub use highlights::{
    LocationCount, NO_MATCHES_MARGIN, PlayedMatch, TournamentSummary, balanced_tournaments,
    closest_matches, highest_scoring_tournaments, locations_ranked, most_lopsided_matches,
};
pub use partnerships::{DuoStats, partnerships};
pub use players::{Overview, PlayerStats, overview, player_stats};
pub use profile::{PartnerStats, PlayerProfile, RivalStats, player_profile};
pub use range::{TimeRange, timeline};

/// Everything the stats view shows for one time range
#[derive(Debug, Clone)]
pub struct StatsReport<'a> {
    pub overview: Overview,
    pub players: Vec<PlayerStats>,
    pub duos: Vec<DuoStats>,
    pub closest: Vec<PlayedMatch<'a>>,
    pub lopsided: Vec<PlayedMatch<'a>>,
    pub balanced: Vec<TournamentSummary>,
    pub highest_scoring: Vec<TournamentSummary>,
    pub locations: Vec<LocationCount>,
}

pub fn stats_report<'a>(players: &[Player], timeline: &[&'a Tournament]) -> StatsReport<'a> {
    StatsReport {
        overview: overview(timeline),
        players: player_stats(players, timeline),
        duos: partnerships(timeline),
        closest: closest_matches(timeline),
        lopsided: most_lopsided_matches(timeline),
        balanced: balanced_tournaments(timeline),
        highest_scoring: highest_scoring_tournaments(timeline),
        locations: locations_ranked(timeline),
    }
}

/// A tournament's matches in play order: by round, then court
pub(crate) fn ordered_matches(tournament: &Tournament) -> Vec<&Match> {
    let mut matches: Vec<&Match> = tournament.matches().iter().collect();
    matches.sort_by_key(|m| (m.round, m.court));
    matches
}
