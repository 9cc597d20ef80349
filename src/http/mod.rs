//! HTTP surface (actix-web), one module per resource.

pub mod health;
pub mod leaderboard;
pub mod matches;
pub mod players;
pub mod routes;
