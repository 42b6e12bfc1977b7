//! API handlers

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::extract::FormOrJson;
use crate::api::AppState;
use crate::error::{Error, Result};
use crate::types::HistoryRecord;

/// Records returned when the client does not ask for a specific limit.
const DEFAULT_LIMIT: i64 = 10;

/// Health check with store liveness probe.
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>> {
    state.store.ping().await?;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// List the most recent history records, newest first.
pub async fn get_history(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<HistoryRecord>>> {
    let limit = parse_limit(params.limit.as_deref())?;
    let records = state.store.recent(limit).await?;

    Ok(Json(records))
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Raw limit value; validated by [`parse_limit`] so a bad value gets the
    /// fixed invalid-argument response instead of a framework rejection.
    pub limit: Option<String>,
}

/// Parse the optional limit parameter before the store is touched.
///
/// An absent or empty value falls back to [`DEFAULT_LIMIT`]; only values that
/// are not integers at all are rejected here. Negative or oversized values
/// parse fine and are left for the store's `LIMIT` binding to reject.
fn parse_limit(raw: Option<&str>) -> Result<i64> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_LIMIT),
        Some(value) => value.parse().map_err(|_| Error::InvalidLimit),
    }
}

/// Append a new history record.
pub async fn add_history(
    State(state): State<AppState>,
    FormOrJson(payload): FormOrJson<AddHistoryRequest>,
) -> Result<Json<AddHistoryResponse>> {
    let note = payload.note.unwrap_or_default();
    if note.is_empty() {
        return Err(Error::MissingNote);
    }

    let id = state.store.append(&note).await?;

    Ok(Json(AddHistoryResponse {
        message: "Record added successfully!".to_string(),
        id,
    }))
}

#[derive(Debug, Deserialize)]
pub struct AddHistoryRequest {
    pub note: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AddHistoryResponse {
    pub message: String,
    pub id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_defaults_to_ten() {
        assert_eq!(parse_limit(None).unwrap(), 10);
        assert_eq!(parse_limit(Some("")).unwrap(), 10);
    }

    #[test]
    fn limit_accepts_any_integer() {
        assert_eq!(parse_limit(Some("0")).unwrap(), 0);
        assert_eq!(parse_limit(Some("25")).unwrap(), 25);
        assert_eq!(parse_limit(Some(" 5 ")).unwrap(), 5);
        // Out-of-range values are integers too; the store rejects them.
        assert_eq!(parse_limit(Some("-3")).unwrap(), -3);
        assert_eq!(parse_limit(Some("5000000000")).unwrap(), 5_000_000_000);
    }

    #[test]
    fn limit_rejects_non_integers() {
        assert!(matches!(parse_limit(Some("abc")), Err(Error::InvalidLimit)));
        assert!(matches!(parse_limit(Some("2.5")), Err(Error::InvalidLimit)));
        assert!(matches!(
            parse_limit(Some("10 records")),
            Err(Error::InvalidLimit)
        ));
    }
}
