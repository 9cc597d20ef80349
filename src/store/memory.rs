//! In-memory store; backs the test suite so no database is needed.

use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;

use super::LeagueStore;
use crate::league::{MatchRecord, Player};

#[derive(Default)]
pub struct MemoryStore {
    players: Mutex<Vec<Player>>,
    history: Mutex<Vec<MatchRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_players(players: Vec<Player>) -> Self {
        MemoryStore {
            players: Mutex::new(players),
            history: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl LeagueStore for MemoryStore {
    async fn read_players(&self) -> Result<Vec<Player>> {
        Ok(self.players.lock().unwrap().clone())
    }

    async fn overwrite_players(&self, players: &[Player]) -> Result<()> {
        *self.players.lock().unwrap() = players.to_vec();
        Ok(())
    }

    async fn read_match_history(&self) -> Result<Vec<MatchRecord>> {
        Ok(self.history.lock().unwrap().clone())
    }

    async fn append_match(&self, record: &MatchRecord) -> Result<()> {
        self.history.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
