//! MySQL-backed history store
//!
//! Expects an existing `t_history` table:
//!
//! ```sql
//! CREATE TABLE t_history (
//!     id BIGINT AUTO_INCREMENT PRIMARY KEY,
//!     note TEXT NOT NULL,
//!     update_time TIMESTAMP DEFAULT CURRENT_TIMESTAMP
//! );
//! ```
//!
//! The schema is an external precondition; the store client never creates or
//! migrates it.

use std::time::Duration;

use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};

use crate::config::DatabaseSection;
use crate::error::Result;
use crate::types::HistoryRecord;

/// Client handle for the relational store holding the history table.
///
/// Cheap to clone; all clones share the underlying pool.
#[derive(Clone)]
pub struct HistoryStore {
    pool: MySqlPool,
}

impl HistoryStore {
    /// Connect eagerly, failing fast when the store is unreachable.
    pub async fn connect(config: &DatabaseSection) -> Result<Self> {
        let options = Self::connect_options(config)?;
        let pool = Self::pool_options(config).connect_with(options).await?;
        Ok(Self { pool })
    }

    /// Build a store whose connections are established on first use.
    pub fn connect_lazy(config: &DatabaseSection) -> Result<Self> {
        let options = Self::connect_options(config)?;
        let pool = Self::pool_options(config).connect_lazy_with(options);
        Ok(Self { pool })
    }

    /// Resolve connection options, preferring an explicit `url`.
    ///
    /// The discrete fields are passed as typed setters, so credentials with
    /// reserved URI characters need no escaping.
    fn connect_options(config: &DatabaseSection) -> Result<MySqlConnectOptions> {
        match &config.url {
            Some(url) => Ok(url.parse()?),
            None => Ok(MySqlConnectOptions::new()
                .host(&config.host)
                .port(config.port)
                .username(&config.user)
                .password(&config.password)
                .database(&config.database)),
        }
    }

    fn pool_options(config: &DatabaseSection) -> MySqlPoolOptions {
        MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
    }

    /// The most recent records, newest first, at most `limit` rows.
    ///
    /// The limit is bound as given; the store rejects negative or oversized
    /// values as a query error.
    pub async fn recent(&self, limit: i64) -> Result<Vec<HistoryRecord>> {
        let records = sqlx::query_as::<_, HistoryRecord>(
            "SELECT id, note, update_time FROM t_history ORDER BY update_time DESC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Insert one record, returning the identifier the store assigned.
    ///
    /// `update_time` is always assigned by the store at insertion time.
    pub async fn append(&self, note: &str) -> Result<u64> {
        let result = sqlx::query("INSERT INTO t_history (note) VALUES (?)")
            .bind(note)
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_id())
    }

    /// Liveness probe against the store.
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Close the pool, waiting for checked-out connections to be returned.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
