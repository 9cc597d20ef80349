//! Postgres-backed store. One long-lived pool, opened at startup.

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::LeagueStore;
use crate::league::{MatchRecord, Player};

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        PgStore { pool }
    }
}

#[derive(FromRow)]
struct PlayerRow {
    name: String,
    rating: i32,
    games_played: i32,
    wins: i32,
    losses: i32,
}

impl From<PlayerRow> for Player {
    fn from(r: PlayerRow) -> Self {
        Player {
            name: r.name,
            rating: r.rating,
            games_played: r.games_played,
            wins: r.wins,
            losses: r.losses,
        }
    }
}

#[derive(FromRow)]
struct MatchRow {
    match_id: Uuid,
    winner: String,
    loser: String,
    score_winner: i32,
    score_loser: i32,
    played_at: DateTime<Utc>,
}

impl From<MatchRow> for MatchRecord {
    fn from(r: MatchRow) -> Self {
        MatchRecord {
            match_id: r.match_id,
            winner: r.winner,
            loser: r.loser,
            score_winner: r.score_winner,
            score_loser: r.score_loser,
            played_at: r.played_at,
        }
    }
}

#[async_trait]
impl LeagueStore for PgStore {
    async fn read_players(&self) -> Result<Vec<Player>> {
        let rows = sqlx::query_as::<_, PlayerRow>(
            "SELECT name, rating, games_played, wins, losses
               FROM players
              ORDER BY seq",
        )
        .fetch_all(&self.pool)
        .await
        .context("reading player table")?;
        Ok(rows.into_iter().map(Player::from).collect())
    }

    async fn overwrite_players(&self, players: &[Player]) -> Result<()> {
        // Full-table replace inside one transaction; `seq` is re-issued
        // in insert order, so the given ordering survives the rewrite.
        let mut tx = self.pool.begin().await.context("opening transaction")?;
        sqlx::query("DELETE FROM players")
            .execute(&mut *tx)
            .await
            .context("clearing player table")?;
        for p in players {
            sqlx::query(
                "INSERT INTO players (name, rating, games_played, wins, losses)
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(&p.name)
            .bind(p.rating)
            .bind(p.games_played)
            .bind(p.wins)
            .bind(p.losses)
            .execute(&mut *tx)
            .await
            .context("writing player row")?;
        }
        tx.commit().await.context("committing player overwrite")?;
        Ok(())
    }

    async fn read_match_history(&self) -> Result<Vec<MatchRecord>> {
        let rows = sqlx::query_as::<_, MatchRow>(
            "SELECT match_id, winner, loser, score_winner, score_loser, played_at
               FROM match_history
              ORDER BY seq",
        )
        .fetch_all(&self.pool)
        .await
        .context("reading match history")?;
        Ok(rows.into_iter().map(MatchRecord::from).collect())
    }

    async fn append_match(&self, record: &MatchRecord) -> Result<()> {
        sqlx::query(
            "INSERT INTO match_history
                 (match_id, winner, loser, score_winner, score_loser, played_at)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(record.match_id)
        .bind(&record.winner)
        .bind(&record.loser)
        .bind(record.score_winner)
        .bind(record.score_loser)
        .bind(record.played_at)
        .execute(&self.pool)
        .await
        .context("appending match row")?;
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .context("pinging database")?;
        Ok(())
    }
}
