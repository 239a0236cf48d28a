use padel_ranking::config::RatingSettings;
use padel_ranking::domain::{Match, MatchStatus, Player, TeamKey, Tournament, TournamentStatus};
use padel_ranking::rating::{Tier, compute_ratings};

fn roster() -> Vec<Player> {
    (1..=8)
        .map(|i| Player::new(format!("p{}", i), format!("Player {}", i)))
        .collect()
}

fn team(n: u8) -> TeamKey {
    TeamKey::new(format!("p{}", n * 2 - 1), format!("p{}", n * 2))
}

fn game(round: u8, court: u8, t1: u8, t2: u8, score1: u32, score2: u32) -> Match {
    Match {
        id: format!("r{}-c{}", round, court),
        team1: team(t1),
        team2: team(t2),
        score1,
        score2,
        court,
        round,
        status: MatchStatus::Finished,
        date: None,
    }
}

fn finished(id: &str, date: &str, matches: Vec<Match>) -> Tournament {
    let mut t = Tournament::new(id, date, TournamentStatus::Finished);
    t.matches = Some(matches);
    t
}

/// Team 4 loses both of its matches, team 1 wins both
fn two_rounds(id: &str, date: &str) -> Tournament {
    finished(
        id,
        date,
        vec![
            game(1, 1, 1, 2, 6, 2),
            game(1, 2, 3, 4, 6, 3),
            game(2, 1, 1, 3, 6, 4),
            game(2, 2, 2, 4, 6, 1),
        ],
    )
}

fn season() -> Vec<Tournament> {
    vec![
        two_rounds("spring", "2024-03-07"),
        two_rounds("summer", "2024-06-12T18:30:00"),
        finished("autumn", "2024-10-01", vec![game(1, 1, 4, 1, 6, 0)]),
        two_rounds("same-day-b", "2024-04-01"),
        two_rounds("same-day-a", "2024-04-01"),
    ]
}

#[test]
fn test_eight_losses_from_start() {
    let tournaments: Vec<Tournament> = (1..=8)
        .map(|day| two_rounds(&format!("t{}", day), &format!("2024-01-{:02}", day)))
        .collect();
    let ratings = compute_ratings(&roster(), &tournaments, &RatingSettings::default());

    // team 4 loses 2 matches per tournament
    assert_eq!(ratings["p7"].current, 1000 - 16 * 12);
    assert!(ratings.values().all(|r| r.current >= 800));
    assert_eq!(ratings["p7"].history.len(), 9);
}

#[test]
fn test_floor_holds_over_a_long_losing_run() {
    let tournaments: Vec<Tournament> = (1..=20)
        .map(|day| two_rounds(&format!("t{}", day), &format!("2024-02-{:02}", day)))
        .collect();
    let ratings = compute_ratings(&roster(), &tournaments, &RatingSettings::default());

    assert_eq!(ratings["p8"].current, 800);
    assert!(ratings["p8"].history.iter().all(|s| s.points >= 800));
}

#[test]
fn test_tier_boundaries() {
    let thresholds = RatingSettings::default().tiers;
    let cases = [
        (1199, Tier::Level1),
        (1200, Tier::Level2),
        (1399, Tier::Level2),
        (1400, Tier::Level3),
        (1600, Tier::Pro),
    ];

    for (points, tier) in cases {
        assert_eq!(Tier::from_points(points, &thresholds), tier, "{} points", points);
    }
    assert_eq!(Tier::Level2.to_string(), "Level 2");
}

#[test]
fn test_repeated_runs_serialize_identically() {
    let players = roster();
    let tournaments = season();
    let settings = RatingSettings::default();

    let first = serde_json::to_string(&compute_ratings(&players, &tournaments, &settings)).unwrap();
    let second = serde_json::to_string(&compute_ratings(&players, &tournaments, &settings)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_input_order_does_not_matter() {
    let players = roster();
    let settings = RatingSettings::default();
    let forward = season();
    let mut backward = season();
    backward.reverse();
    let mut rotated = season();
    rotated.rotate_left(2);

    let expected = compute_ratings(&players, &forward, &settings);
    assert_eq!(compute_ratings(&players, &backward, &settings), expected);
    assert_eq!(compute_ratings(&players, &rotated, &settings), expected);

    let labels: Vec<_> = expected["p1"].history.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, ["start", "07 Mar", "01 Apr", "01 Apr", "12 Jun", "01 Oct"]);
}

#[test]
fn test_scheduled_and_live_tournaments_do_not_count() {
    let players = roster();
    let settings = RatingSettings::default();
    let mut live = two_rounds("live", "2024-03-07");
    live.status = TournamentStatus::Live;
    let mut cancelled = two_rounds("cancelled", "2024-03-08");
    cancelled.status = TournamentStatus::Cancelled;

    let ratings = compute_ratings(&players, &[live, cancelled], &settings);
    assert!(ratings.values().all(|r| r.current == 1000 && r.history.len() == 1));
}

#[test]
fn test_unreadable_date_replays_first_with_raw_label() {
    let players = roster();
    let settings = RatingSettings::default();
    let dated = two_rounds("a-dated", "2024-03-07");
    let mut undated = two_rounds("z-undated", "sometime in spring");
    // team 4 wins the only match of the undated tournament
    undated.matches = Some(vec![game(1, 1, 4, 1, 6, 0)]);

    let ratings = compute_ratings(&players, &[dated, undated], &settings);

    let history = &ratings["p1"].history;
    let labels: Vec<_> = history.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, ["start", "sometime in spring", "07 Mar"]);
    assert_eq!(history[1].points, 988);
    assert_eq!(history[2].points, 988 + 2 * 20 + 50);

    assert_eq!(ratings["p7"].history[1].label, "sometime in spring");
    assert_eq!(ratings["p7"].history[1].points, 1000 + 20 + 50);
}
