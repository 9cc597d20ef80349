//! Storage contract for the two league tables.
//!
//! The backing store only needs four operations: read-all and
//! overwrite-all on `players`, read-all and append on `match_history`.
//! Overwrite replaces the entire table contents; history rows are never
//! updated or deleted.

use anyhow::Result;
use async_trait::async_trait;

use crate::league::{MatchRecord, Player};

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[async_trait]
pub trait LeagueStore: Send + Sync {
    /// Player table in original insertion order.
    async fn read_players(&self) -> Result<Vec<Player>>;
    /// Replaces the whole player table, preserving the given order.
    async fn overwrite_players(&self, players: &[Player]) -> Result<()>;
    /// Match history in append order.
    async fn read_match_history(&self) -> Result<Vec<MatchRecord>>;
    /// Appends one immutable row; existing rows are never touched.
    async fn append_match(&self, record: &MatchRecord) -> Result<()>;
    /// Cheap connectivity check for the health probe.
    async fn ping(&self) -> Result<()>;
}
