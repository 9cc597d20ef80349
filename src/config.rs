//! Runtime configuration for the foosball league server.

use once_cell::sync::Lazy;
use std::env;

#[derive(Debug)]
pub struct Settings {
    /// Rating assigned to newly registered players.
    pub initial_rating: i32,
    /// Score a side must reach to win a match.
    pub win_score: i32,
    /// Maximum accepted player-name length (characters).
    pub max_name_len: usize,
}

impl Settings {
    fn from_env() -> Self {
        let initial_rating = env::var("INITIAL_RATING")
            .ok()
            .and_then(|v| v.parse::<i32>().ok())
            .unwrap_or(800);

        let win_score = env::var("WIN_SCORE")
            .ok()
            .and_then(|v| v.parse::<i32>().ok())
            .unwrap_or(10);

        let max_name_len = env::var("MAX_NAME_LEN")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(15); // matches the form-field limit

        Settings {
            initial_rating,
            win_score,
            max_name_len,
        }
    }
}

static SETTINGS: Lazy<Settings> = Lazy::new(Settings::from_env);

pub fn settings() -> &'static Settings {
    &SETTINGS
}
