//! Ranked, display-ready view of the player table.

use serde::Serialize;

use super::{MatchRecord, Player};

/// Cosmetic tag for the podium places; carries no ranking semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardRow {
    pub rank: usize,
    pub name: String,
    pub rating: i32,
    pub games_played: i32,
    pub win_pct: f64,
    pub loss_pct: f64,
    pub medal: Option<Medal>,
}

/// Sorts players by rating, highest first; equal ratings keep their
/// original table order (stable sort). Percentages come from the
/// maintained counters; a player with no matches shows 0/0, never NaN.
pub fn build_leaderboard(players: &[Player]) -> Vec<LeaderboardRow> {
    let mut ordered: Vec<&Player> = players.iter().collect();
    ordered.sort_by(|a, b| b.rating.cmp(&a.rating));

    ordered
        .into_iter()
        .enumerate()
        .map(|(i, p)| {
            let total = p.wins + p.losses;
            let (win_pct, loss_pct) = if total == 0 {
                (0.0, 0.0)
            } else {
                (
                    p.wins as f64 * 100.0 / total as f64,
                    p.losses as f64 * 100.0 / total as f64,
                )
            };
            LeaderboardRow {
                rank: i + 1,
                name: p.name.clone(),
                rating: p.rating,
                games_played: p.games_played,
                win_pct,
                loss_pct,
                medal: match i {
                    0 => Some(Medal::Gold),
                    1 => Some(Medal::Silver),
                    2 => Some(Medal::Bronze),
                    _ => None,
                },
            }
        })
        .collect()
}

/// Recounts wins and losses from the full match history.
///
/// Per-request renders rely on the incrementally maintained counters; this
/// full scan runs at startup (and after any out-of-band edit to the history
/// table) to bring the counters back in line.
pub fn tally_from_history(players: &mut [Player], history: &[MatchRecord]) {
    for p in players.iter_mut() {
        p.wins = 0;
        p.losses = 0;
    }
    for m in history {
        // Renamed or removed players orphan their rows; no cascade.
        if let Some(p) = players.iter_mut().find(|p| p.name == m.winner) {
            p.wins += 1;
        }
        if let Some(p) = players.iter_mut().find(|p| p.name == m.loser) {
            p.losses += 1;
        }
    }
}
