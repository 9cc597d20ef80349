//! Request-level orchestration over the storage contract.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;

use super::leaderboard::{self, LeaderboardRow};
use super::recorder::{self, MatchSubmission};
use super::{scoring, validate, MatchRecord, Player};
use crate::error::ServiceError;
use crate::store::LeagueStore;

/// Outcome handed back to the presentation layer after a mutation:
/// a transient notification plus the refreshed ranked table.
#[derive(Debug, Serialize)]
pub struct Outcome {
    pub notification: String,
    pub leaderboard: Vec<LeaderboardRow>,
}

pub struct LeagueService {
    store: Arc<dyn LeagueStore>,
    /// Serializes every read-modify-overwrite cycle. The store has no
    /// concurrency control of its own, so interleaved writers would
    /// lose updates.
    write_lock: Mutex<()>,
}

impl LeagueService {
    pub fn new(store: Arc<dyn LeagueStore>) -> Self {
        LeagueService {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Rebuilds win/loss counters from the history table. Runs once at
    /// startup so out-of-band edits to the history are reflected.
    pub async fn warm(&self) -> Result<(), ServiceError> {
        let _guard = self.write_lock.lock().await;
        let mut players = self.store.read_players().await?;
        let history = self.store.read_match_history().await?;

        let before = players.clone();
        leaderboard::tally_from_history(&mut players, &history);
        if players != before {
            log::warn!("win/loss counters diverged from match history; rebuilding");
            self.store.overwrite_players(&players).await?;
        }
        Ok(())
    }

    /// Records a confirmed match: validates, normalizes orientation,
    /// updates ratings and counters, persists the refreshed table and
    /// the new history row.
    pub async fn submit_match(&self, sub: MatchSubmission) -> Result<Outcome, ServiceError> {
        validate::validate_submission(&sub)?;

        let _guard = self.write_lock.lock().await;
        let mut players = self.store.read_players().await?;

        let (winner, loser, score_w, score_l) = sub.normalized();
        scoring::apply_match(&mut players, winner, loser, score_w, score_l)?;
        let record = recorder::make_record(winner, loser, score_w, score_l);

        self.store.overwrite_players(&players).await?;
        self.store.append_match(&record).await?;

        log::info!(
            "match {}: {} {}-{} {}",
            record.match_id,
            record.winner,
            record.score_winner,
            record.score_loser,
            record.loser
        );
        Ok(Outcome {
            notification: format!("{winner} beats {loser} {score_w}-{score_l}"),
            leaderboard: leaderboard::build_leaderboard(&players),
        })
    }

    /// Registers a new player at the initial rating. Duplicate names are
    /// rejected before anything is written.
    pub async fn add_player(&self, name: &str) -> Result<Outcome, ServiceError> {
        let _guard = self.write_lock.lock().await;
        let mut players = self.store.read_players().await?;
        validate::validate_new_player(name, &players)?;

        players.push(Player::new(name));
        self.store.overwrite_players(&players).await?;

        log::info!("added player '{name}'");
        Ok(Outcome {
            notification: format!("player '{name}' added"),
            leaderboard: leaderboard::build_leaderboard(&players),
        })
    }

    pub async fn leaderboard(&self) -> Result<Vec<LeaderboardRow>, ServiceError> {
        let players = self.store.read_players().await?;
        Ok(leaderboard::build_leaderboard(&players))
    }

    pub async fn history(&self) -> Result<Vec<MatchRecord>, ServiceError> {
        Ok(self.store.read_match_history().await?)
    }

    pub async fn players(&self) -> Result<Vec<Player>, ServiceError> {
        Ok(self.store.read_players().await?)
    }

    pub async fn ping(&self) -> Result<(), ServiceError> {
        Ok(self.store.ping().await?)
    }
}
