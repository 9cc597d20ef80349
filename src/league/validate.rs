//! Boundary validation; rejects bad input before anything is mutated.

use super::recorder::MatchSubmission;
use super::Player;
use crate::config::settings;
use crate::error::ServiceError;

pub fn validate_submission(sub: &MatchSubmission) -> Result<(), ServiceError> {
    if sub.player_a.is_empty() || sub.player_b.is_empty() {
        return Err(ServiceError::Validation(
            "both players must be selected".into(),
        ));
    }
    if sub.player_a == sub.player_b {
        return Err(ServiceError::Validation(
            "a player cannot play against themselves".into(),
        ));
    }

    let win = settings().win_score;
    if !(0..=win).contains(&sub.score_a) || !(0..=win).contains(&sub.score_b) {
        return Err(ServiceError::Validation(format!(
            "scores must be between 0 and {win}"
        )));
    }
    // Exactly one side reaches the winning score; 10-10 is not a result.
    if (sub.score_a == win) == (sub.score_b == win) {
        return Err(ServiceError::Validation(format!(
            "exactly one score must be {win}"
        )));
    }
    Ok(())
}

pub fn validate_new_player(name: &str, players: &[Player]) -> Result<(), ServiceError> {
    if name.is_empty() {
        return Err(ServiceError::Validation(
            "player name must not be empty".into(),
        ));
    }
    let max = settings().max_name_len;
    if name.chars().count() > max {
        return Err(ServiceError::Validation(format!(
            "player name is limited to {max} characters"
        )));
    }
    if players.iter().any(|p| p.name == name) {
        return Err(ServiceError::Validation(format!(
            "player '{name}' already exists"
        )));
    }
    Ok(())
}
