//! Elo rating updates (constant K-factor 32).

use super::Player;
use crate::error::ServiceError;

/// K-factor lookup. The games-played argument is threaded through so an
/// experience-based schedule could slot in, but league policy is a flat 32.
pub fn k_factor(_games_played: i32) -> f64 {
    32.0
}

/// Probability that a player rated `ra` beats one rated `rb`.
pub fn expected_score(ra: i32, rb: i32) -> f64 {
    1.0 / (1.0 + 10f64.powf((rb - ra) as f64 / 400.0))
}

/// Scales rating movement by victory margin, floored at 1 so a minimal
/// win still earns full baseline credit.
pub fn margin_multiplier(score_winner: i32, score_loser: i32) -> f64 {
    ((score_winner - score_loser) as f64 / 10.0).max(1.0)
}

/// Applies a finished match to the player table in place.
///
/// Both participants must already be present; an unknown name aborts with
/// `PlayerNotFound` before anything is touched. Deltas are rounded to the
/// nearest integer and ratings are never clamped, so a long losing streak
/// can push a rating below zero.
pub fn apply_match(
    players: &mut [Player],
    winner: &str,
    loser: &str,
    score_winner: i32,
    score_loser: i32,
) -> Result<(), ServiceError> {
    let w = index_of(players, winner)?;
    let l = index_of(players, loser)?;

    let (rating_w, rating_l) = (players[w].rating, players[l].rating);
    let expected_w = expected_score(rating_w, rating_l);
    let expected_l = expected_score(rating_l, rating_w);
    let margin = margin_multiplier(score_winner, score_loser);
    let k_w = k_factor(players[w].games_played);
    let k_l = k_factor(players[l].games_played);

    players[w].rating = rating_w + (k_w * margin * (1.0 - expected_w)).round() as i32;
    players[l].rating = rating_l + (k_l * margin * (0.0 - expected_l)).round() as i32;

    players[w].games_played += 1;
    players[l].games_played += 1;
    players[w].wins += 1;
    players[l].losses += 1;

    Ok(())
}

fn index_of(players: &[Player], name: &str) -> Result<usize, ServiceError> {
    players
        .iter()
        .position(|p| p.name == name)
        .ok_or_else(|| ServiceError::PlayerNotFound(name.to_string()))
}
