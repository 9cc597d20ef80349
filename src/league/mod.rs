//! League domain logic: ratings, match records, leaderboard.

pub mod leaderboard;
pub mod recorder;
pub mod scoring;
pub mod service;
pub mod validate;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::settings;

/// One row of the player table.
///
/// `name` is the unique identifier (case-sensitive); players are never
/// deleted. `wins`/`losses` are maintained incrementally at match-record
/// time and rebuilt from history at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub rating: i32,
    pub games_played: i32,
    pub wins: i32,
    pub losses: i32,
}

impl Player {
    /// Fresh player at the configured initial rating, zero games played.
    pub fn new(name: impl Into<String>) -> Self {
        Player {
            name: name.into(),
            rating: settings().initial_rating,
            games_played: 0,
            wins: 0,
            losses: 0,
        }
    }
}

/// Immutable match-history row; the winner is always listed first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub match_id: Uuid,
    pub winner: String,
    pub loser: String,
    pub score_winner: i32,
    pub score_loser: i32,
    pub played_at: DateTime<Utc>,
}
