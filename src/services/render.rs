use std::fmt::Write as _;

use colored::{ColoredString, Colorize};

use crate::domain::{Match, Roster};
use crate::fixtures::TeamDraw;
use crate::rating::{LeaderboardEntry, RatingRecord, Tier};
use crate::standings::StandingEntry;
use crate::stats::{PlayedMatch, PlayerProfile, StatsReport, TournamentSummary};

fn tier_label(tier: Tier) -> ColoredString {
    match tier {
        Tier::Level1 => tier.as_str().normal(),
        Tier::Level2 => tier.as_str().cyan(),
        Tier::Level3 => tier.as_str().yellow(),
        Tier::Pro => tier.as_str().magenta().bold(),
    }
}

pub fn leaderboard_table(entries: &[LeaderboardEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(
            out,
            "{:>3}. {:<20} {:>5}  {:<8} ({} played)",
            entry.position,
            entry.name,
            entry.points,
            tier_label(entry.level),
            entry.tournaments_played
        );
    }
    out
}

pub fn history_lines(name: &str, record: &RatingRecord) -> String {
    let mut out = format!("{} - {} points\n", name.bold(), record.current);
    let mut previous = None;

    for step in &record.history {
        let delta = match previous {
            Some(points) => format_delta(step.points - points),
            None => String::new(),
        };
        let _ = writeln!(
            out,
            "  {:<8} {:>5} {:>6}  {}",
            step.label,
            step.points,
            delta,
            tier_label(step.level)
        );
        previous = Some(step.points);
    }
    out
}

fn format_delta(delta: impl Into<i64>) -> String {
    let delta = delta.into();
    if delta > 0 {
        format!("+{}", delta)
    } else {
        delta.to_string()
    }
}

pub fn profile_lines(profile: &PlayerProfile, roster: &Roster) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", "Partners".bold());
    for partner in &profile.partners {
        let _ = writeln!(
            out,
            "  {:<20} {} wins in {} games",
            roster.display_name(&partner.partner_id),
            partner.wins,
            partner.games
        );
    }

    for (title, rivals) in [("Victims", &profile.victims), ("Nemeses", &profile.nemeses)] {
        let _ = writeln!(out, "{}", title.bold());
        for rival in rivals {
            let _ = writeln!(
                out,
                "  {:<20} {}-{} ({})",
                roster.display_name(&rival.opponent_id),
                rival.wins_against,
                rival.losses_against,
                format_delta(rival.balance())
            );
        }
    }
    out
}

/// Tournament table; the first row is the champion when the table is final
pub fn standings_table(entries: &[StandingEntry], is_final: bool) -> String {
    let mut out = format!(
        "{:<3} {:<28} {:>2} {:>2} {:>4} {:>4} {:>5}\n",
        "#", "Team", "W", "L", "PF", "PA", "Diff"
    );

    for (idx, entry) in entries.iter().enumerate() {
        let row = format!(
            "{:<3} {:<28} {:>2} {:>2} {:>4} {:>4} {:>5}",
            idx + 1,
            entry.label,
            entry.wins,
            entry.losses,
            entry.points_for,
            entry.points_against,
            format_delta(entry.points_diff)
        );
        if is_final && idx == 0 {
            let _ = writeln!(out, "{}", row.green().bold());
        } else {
            let _ = writeln!(out, "{}", row);
        }
    }
    out
}

pub fn draw_lines(draw: &TeamDraw, roster: &Roster) -> String {
    let mut out = String::new();
    for (name, team) in draw.named() {
        let _ = writeln!(out, "  {:<7} {}", name.bold(), roster.team_label(team));
    }
    out
}

pub fn fixture_lines<'m>(matches: impl IntoIterator<Item = &'m Match>, roster: &Roster) -> String {
    let mut out = String::new();
    for game in matches {
        let _ = writeln!(
            out,
            "  [{}] Court {}: {} {} - {} {}",
            game.id,
            game.court,
            roster.team_label(&game.team1),
            game.score1,
            game.score2,
            roster.team_label(&game.team2)
        );
    }
    out
}

const HIGHLIGHTS_SHOWN: usize = 3;

pub fn stats_table(report: &StatsReport, roster: &Roster) -> String {
    let overview = &report.overview;
    let mut out = format!(
        "{} tournaments, {} matches, {} points\n\n",
        overview.tournaments, overview.matches, overview.points
    );

    let _ = writeln!(
        out,
        "{:<20} {:>3} {:>3} {:>3} {:>5} {:>6} {:>7} {:>6}",
        "Player", "GP", "W", "L", "Win%", "Titles", "Streak", "Bal"
    );
    for s in &report.players {
        let _ = writeln!(
            out,
            "{:<20} {:>3} {:>3} {:>3} {:>4}% {:>6} {:>7} {:>6}",
            s.name,
            s.games_played,
            s.wins,
            s.losses,
            s.win_rate(),
            s.tournaments_won,
            s.max_win_streak,
            format_delta(s.balance)
        );
    }

    if !report.duos.is_empty() {
        let _ = writeln!(out, "\n{}", "Duos".bold());
        for duo in &report.duos {
            let _ = writeln!(
                out,
                "  {:<28} {:>3}% of {} games",
                roster.team_label(&duo.team),
                duo.win_rate(),
                duo.games
            );
        }
    }

    highlight_matches(&mut out, "Closest matches", &report.closest, roster);
    highlight_matches(&mut out, "Most lopsided matches", &report.lopsided, roster);
    highlight_tournaments(&mut out, "Most balanced tournaments", &report.balanced);
    highlight_tournaments(&mut out, "Highest scoring tournaments", &report.highest_scoring);

    if !report.locations.is_empty() {
        let _ = writeln!(out, "\n{}", "Venues".bold());
        for location in &report.locations {
            let _ = writeln!(out, "  {:<28} {} tournaments", location.location_id, location.tournaments);
        }
    }
    out
}

fn highlight_matches(out: &mut String, title: &str, matches: &[PlayedMatch], roster: &Roster) {
    if matches.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n{}", title.bold());
    for played in matches.iter().take(HIGHLIGHTS_SHOWN) {
        let game = played.game;
        let _ = writeln!(
            out,
            "  {:<10} {} {} - {} {}",
            played.tournament.date,
            roster.team_label(&game.team1),
            game.score1,
            game.score2,
            roster.team_label(&game.team2)
        );
    }
}

fn highlight_tournaments(out: &mut String, title: &str, summaries: &[TournamentSummary]) {
    if summaries.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n{}", title.bold());
    for summary in summaries.iter().take(HIGHLIGHTS_SHOWN) {
        let _ = writeln!(
            out,
            "  {:<10} {:<12} avg margin {:.1}, {} points",
            summary.date,
            summary.location_id.as_deref().unwrap_or("-"),
            summary.avg_margin,
            summary.total_points
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Player, TeamKey};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_history_shows_deltas() {
        plain();
        let record = RatingRecord {
            current: 1008,
            history: vec![
                crate::rating::RatingSnapshot {
                    label: "start".to_string(),
                    points: 1000,
                    level: Tier::Level1,
                },
                crate::rating::RatingSnapshot {
                    label: "07 Mar".to_string(),
                    points: 1008,
                    level: Tier::Level1,
                },
            ],
        };

        let text = history_lines("Ana", &record);
        assert!(text.starts_with("Ana - 1008 points"));
        assert!(text.contains("07 Mar"));
        assert!(text.contains("+8"));
    }

    #[test]
    fn test_standings_table_lists_every_team() {
        plain();
        let players = vec![Player::new("a", "Ana"), Player::new("b", "Bea")];
        let roster = Roster::new(&players);
        let mut entry = StandingEntry::new(TeamKey::new("a", "b"));
        entry.record(6, 2);
        crate::standings::label_standings(std::slice::from_mut(&mut entry), &roster);

        let text = standings_table(&[entry], true);
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("Ana & Bea"));
        assert!(text.contains("+4"));
    }

    #[test]
    fn test_stats_table_shows_highlights() {
        plain();
        let players = crate::stats::tests::roster();
        let mut t = crate::stats::tests::sweep("t", "2024-03-07");
        t.location_id = Some("riverside".to_string());
        let report = crate::stats::stats_report(&players, &[&t]);

        let text = stats_table(&report, &Roster::new(&players));
        assert!(text.starts_with("1 tournaments, 6 matches, 51 points"));
        assert!(text.contains("Closest matches"));
        // display names are first names, so every team reads "Player & Player"
        let closest = text.split("Closest matches").nth(1).unwrap();
        assert!(closest.starts_with("\n  2024-03-07 Player & Player 6 - 5 Player & Player"));
        assert!(text.contains("Highest scoring tournaments"));
        assert!(text.contains("riverside"));
    }
}
