//! SQLite persistence for volume snapshots and totals.
//!
//! Two tables: an append-only fact table of per-exchange-market
//! observations, and an upsert table of per-timestamp aggregate
//! totals. Nothing is ever deleted.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;
use volwatch_core::{TotalEntry, VolumeRecord};

#[derive(Error, Debug)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Database handle for the snapshot store.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect to SQLite at the given URL, creating the file and the
    /// schema when absent. Safe to call on every run.
    pub async fn connect(database_url: &str) -> Result<Self, DbError> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        let db = Self { pool };
        db.run_migrations().await?;
        debug!("snapshot store ready at {}", database_url);
        Ok(db)
    }

    async fn run_migrations(&self) -> Result<(), DbError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS volume_snapshots (
                ts INTEGER NOT NULL,
                exchange TEXT NOT NULL,
                market TEXT NOT NULL,
                base_volume REAL,
                quote_volume_usd REAL,
                raw TEXT
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_ts ON volume_snapshots(ts)")
            .execute(&self.pool)
            .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_exchange_ts ON volume_snapshots(exchange, ts)")
            .execute(&self.pool)
            .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS totals (
                ts INTEGER PRIMARY KEY,
                total_quote_volume_usd REAL NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Append one volume observation tagged with its snapshot timestamp.
    pub async fn insert_record(&self, ts: i64, record: &VolumeRecord) -> Result<(), DbError> {
        sqlx::query(
            r#"
            INSERT INTO volume_snapshots (ts, exchange, market, base_volume, quote_volume_usd, raw)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(ts)
        .bind(record.exchange.as_str())
        .bind(&record.market)
        .bind(record.base_volume)
        .bind(record.quote_volume_usd)
        .bind(record.raw.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Upsert the aggregate total for a poll timestamp. A re-run at the
    /// same timestamp replaces the earlier value.
    pub async fn upsert_total(&self, ts: i64, total_usd: f64) -> Result<(), DbError> {
        sqlx::query(
            r#"
            INSERT INTO totals (ts, total_quote_volume_usd) VALUES (?, ?)
            ON CONFLICT(ts) DO UPDATE SET total_quote_volume_usd = excluded.total_quote_volume_usd
            "#,
        )
        .bind(ts)
        .bind(total_usd)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// The two most recent totals, newest first.
    pub async fn last_two_totals(
        &self,
    ) -> Result<(Option<TotalEntry>, Option<TotalEntry>), DbError> {
        let rows = sqlx::query_as::<_, (i64, f64)>(
            "SELECT ts, total_quote_volume_usd FROM totals ORDER BY ts DESC LIMIT 2",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut entries = rows
            .into_iter()
            .map(|(ts, total_usd)| TotalEntry { ts, total_usd });

        Ok((entries.next(), entries.next()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use volwatch_core::Exchange;

    async fn memory_db() -> Database {
        Database::connect("sqlite::memory:").await.unwrap()
    }

    #[tokio::test]
    async fn test_connect_is_idempotent() {
        let db = memory_db().await;
        // Re-running migrations against an initialized schema is a no-op.
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn test_last_two_totals_empty() {
        let db = memory_db().await;
        let (last, prev) = db.last_two_totals().await.unwrap();
        assert_eq!(last, None);
        assert_eq!(prev, None);
    }

    #[tokio::test]
    async fn test_last_two_totals_single_row() {
        let db = memory_db().await;
        db.upsert_total(1_700_000_000, 1_000_000.0).await.unwrap();

        let (last, prev) = db.last_two_totals().await.unwrap();
        assert_eq!(
            last,
            Some(TotalEntry {
                ts: 1_700_000_000,
                total_usd: 1_000_000.0
            })
        );
        assert_eq!(prev, None);
    }

    #[tokio::test]
    async fn test_last_two_totals_newest_first() {
        let db = memory_db().await;
        db.upsert_total(100, 1.0).await.unwrap();
        db.upsert_total(300, 3.0).await.unwrap();
        db.upsert_total(200, 2.0).await.unwrap();

        let (last, prev) = db.last_two_totals().await.unwrap();
        assert_eq!(last.unwrap().ts, 300);
        assert_eq!(prev.unwrap().ts, 200);
    }

    #[tokio::test]
    async fn test_upsert_total_replaces_same_timestamp() {
        let db = memory_db().await;
        db.upsert_total(100, 1_000_000.0).await.unwrap();
        db.upsert_total(100, 2_000_000.0).await.unwrap();

        let (last, prev) = db.last_two_totals().await.unwrap();
        assert_eq!(last.unwrap().total_usd, 2_000_000.0);
        assert_eq!(prev, None);
    }

    #[tokio::test]
    async fn test_total_round_trips_exactly() {
        let db = memory_db().await;
        let written = 3_141_592_653.589_793;
        db.upsert_total(100, written).await.unwrap();

        let (last, _) = db.last_two_totals().await.unwrap();
        assert_eq!(last.unwrap().total_usd, written);
    }

    #[tokio::test]
    async fn test_insert_record_appends_fact_rows() {
        let db = memory_db().await;
        let record = VolumeRecord::new(
            Exchange::Deribit,
            "ETH-PERPETUAL",
            Some(150_000.0),
            Some(375_000_000.0),
            json!({"instrument_name": "ETH-PERPETUAL"}),
        );

        db.insert_record(1_700_000_000, &record).await.unwrap();
        db.insert_record(1_700_000_300, &record).await.unwrap();

        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM volume_snapshots WHERE exchange = 'deribit'")
                .fetch_one(&db.pool)
                .await
                .unwrap();
        assert_eq!(count, 2);
    }

    #[tokio::test]
    async fn test_insert_record_preserves_raw_payload() {
        let db = memory_db().await;
        let raw = json!({"turnover24h": "1250000000.75", "symbol": "ETHUSDT"});
        let record = VolumeRecord::new(
            Exchange::Bybit,
            "ETHUSDT_PERP",
            None,
            Some(1_250_000_000.75),
            raw.clone(),
        );

        db.insert_record(42, &record).await.unwrap();

        let (stored,): (String,) =
            sqlx::query_as("SELECT raw FROM volume_snapshots WHERE ts = 42")
                .fetch_one(&db.pool)
                .await
                .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&stored).unwrap();
        assert_eq!(parsed, raw);
    }
}
