//! Foosball league scorekeeper: Elo ratings, match history, live leaderboard.

pub mod config;
pub mod error;
pub mod http;
pub mod league;
pub mod metrics;
pub mod store;
