//! Core types for jotter

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// A stored note with its identifier and store-assigned timestamp.
///
/// `id` and `update_time` are assigned by the store at insertion time; the
/// service never sets either.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct HistoryRecord {
    pub id: i64,
    pub note: String,
    pub update_time: DateTime<Utc>,
}
