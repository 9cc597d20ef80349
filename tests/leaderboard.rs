//! Unit tests for leaderboard ranking and the history tally.

use chrono::Utc;
use foosball_server::league::leaderboard::{build_leaderboard, tally_from_history, Medal};
use foosball_server::league::{MatchRecord, Player};
use uuid::Uuid;

fn player(name: &str, rating: i32, wins: i32, losses: i32) -> Player {
    Player {
        name: name.into(),
        rating,
        games_played: wins + losses,
        wins,
        losses,
    }
}

fn record(winner: &str, loser: &str) -> MatchRecord {
    MatchRecord {
        match_id: Uuid::new_v4(),
        winner: winner.into(),
        loser: loser.into(),
        score_winner: 10,
        score_loser: 5,
        played_at: Utc::now(),
    }
}

#[test]
fn sorted_by_rating_descending() {
    let players = vec![
        player("alice", 780, 1, 2),
        player("bob", 820, 2, 1),
        player("carol", 800, 1, 1),
    ];
    let rows = build_leaderboard(&players);

    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["bob", "carol", "alice"]);
    assert_eq!(rows[0].rank, 1);
    assert_eq!(rows[2].rank, 3);
}

#[test]
fn equal_ratings_keep_insertion_order() {
    let players = vec![
        player("first", 800, 0, 0),
        player("second", 800, 0, 0),
        player("third", 900, 0, 0),
    ];
    let rows = build_leaderboard(&players);

    assert_eq!(rows[0].name, "third");
    assert_eq!(rows[1].name, "first");
    assert_eq!(rows[2].name, "second");
}

#[test]
fn top_three_get_medals() {
    let players = vec![
        player("a", 900, 0, 0),
        player("b", 850, 0, 0),
        player("c", 820, 0, 0),
        player("d", 810, 0, 0),
    ];
    let rows = build_leaderboard(&players);

    assert_eq!(rows[0].medal, Some(Medal::Gold));
    assert_eq!(rows[1].medal, Some(Medal::Silver));
    assert_eq!(rows[2].medal, Some(Medal::Bronze));
    assert_eq!(rows[3].medal, None);
}

#[test]
fn zero_match_player_shows_zero_percentages() {
    let rows = build_leaderboard(&[player("fresh", 800, 0, 0)]);
    assert_eq!(rows[0].win_pct, 0.0);
    assert_eq!(rows[0].loss_pct, 0.0);
}

#[test]
fn percentages_sum_to_one_hundred() {
    let rows = build_leaderboard(&[player("vet", 830, 3, 1)]);
    assert_eq!(rows[0].win_pct, 75.0);
    assert_eq!(rows[0].loss_pct, 25.0);
    assert!((rows[0].win_pct + rows[0].loss_pct - 100.0).abs() < 1e-12);
}

#[test]
fn tally_rebuilds_counters_from_history() {
    // Stale counters on purpose.
    let mut players = vec![player("alice", 816, 9, 9), player("bob", 784, 9, 9)];
    let history = vec![
        record("alice", "bob"),
        record("alice", "bob"),
        record("bob", "alice"),
    ];

    tally_from_history(&mut players, &history);

    assert_eq!((players[0].wins, players[0].losses), (2, 1));
    assert_eq!((players[1].wins, players[1].losses), (1, 2));
}

#[test]
fn tally_ignores_orphaned_names() {
    let mut players = vec![player("alice", 800, 0, 0)];
    let history = vec![record("alice", "deleted"), record("renamed", "alice")];

    tally_from_history(&mut players, &history);

    assert_eq!((players[0].wins, players[0].losses), (1, 1));
}
