//! Match submissions and winner-first normalization.

use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use super::MatchRecord;

/// Raw submission as it arrives from the score form.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchSubmission {
    pub player_a: String,
    pub player_b: String,
    pub score_a: i32,
    pub score_b: i32,
}

impl MatchSubmission {
    /// Winner-first orientation: `(winner, loser, score_winner, score_loser)`.
    /// History rows always place the winner in the first position.
    pub fn normalized(&self) -> (&str, &str, i32, i32) {
        if self.score_a < self.score_b {
            (&self.player_b, &self.player_a, self.score_b, self.score_a)
        } else {
            (&self.player_a, &self.player_b, self.score_a, self.score_b)
        }
    }
}

/// Builds the immutable history row for a normalized result. Ids are
/// random UUIDs, so rapid back-to-back submissions cannot collide.
pub fn make_record(winner: &str, loser: &str, score_winner: i32, score_loser: i32) -> MatchRecord {
    MatchRecord {
        match_id: Uuid::new_v4(),
        winner: winner.to_string(),
        loser: loser.to_string(),
        score_winner,
        score_loser,
        played_at: Utc::now(),
    }
}
