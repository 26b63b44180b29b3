//! Typed record store over the `tracking_codes` table.
//!
//! The batch and lookup flows only see [`RecordStore`]; `Database` is the
//! SQLite-backed implementation.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::tracking_repo::{self, TrackingRow};
use super::{Database, DatabaseError};
use crate::code::TrackingCode;
use crate::status::TrackingStatus;

/// A record about to be inserted. Identity, status and timestamps are
/// assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTrackingRecord {
    pub code: TrackingCode,
    pub account: Option<String>,
    pub real_tracking_code: Option<String>,
}

/// A stored tracking record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackingRecord {
    pub id: Uuid,
    pub code: TrackingCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub real_tracking_code: Option<String>,
    pub status: TrackingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TrackingRecord {
    /// True when the record was touched after creation.
    pub fn was_updated(&self) -> bool {
        self.updated_at != self.created_at
    }
}

impl TryFrom<TrackingRow> for TrackingRecord {
    type Error = DatabaseError;

    fn try_from(row: TrackingRow) -> Result<Self, Self::Error> {
        let invalid = |reason: String| DatabaseError::InvalidRow {
            code: row.code.clone(),
            reason,
        };

        let id = Uuid::parse_str(&row.id).map_err(|e| invalid(format!("id: {}", e)))?;
        let code = TrackingCode::parse(&row.code).map_err(|e| invalid(e.to_string()))?;
        let status = row
            .status
            .parse::<TrackingStatus>()
            .map_err(|e| invalid(e.to_string()))?;
        let created_at = parse_timestamp(&row.created_at)
            .ok_or_else(|| invalid(format!("created_at: '{}'", row.created_at)))?;
        let updated_at = parse_timestamp(&row.updated_at)
            .ok_or_else(|| invalid(format!("updated_at: '{}'", row.updated_at)))?;

        Ok(Self {
            id,
            code,
            account: row.account.clone(),
            real_tracking_code: row.real_tracking_code.clone(),
            status,
            created_at,
            updated_at,
        })
    }
}

/// Accepts RFC 3339 (what this crate writes) and SQLite's
/// `YYYY-MM-DD HH:MM:SS` (what `datetime('now')` writes), both read as UTC.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}

/// The two operations the rest of the crate needs from persistent storage.
pub trait RecordStore {
    /// Persists all records atomically and returns them as stored.
    fn insert_many(&self, records: &[NewTrackingRecord])
        -> Result<Vec<TrackingRecord>, DatabaseError>;

    /// Looks up a record by exact code.
    fn find_by_code(&self, code: &TrackingCode) -> Result<Option<TrackingRecord>, DatabaseError>;
}

impl RecordStore for Database {
    fn insert_many(
        &self,
        records: &[NewTrackingRecord],
    ) -> Result<Vec<TrackingRecord>, DatabaseError> {
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let rows: Vec<TrackingRow> = records
            .iter()
            .map(|record| TrackingRow {
                id: Uuid::new_v4().to_string(),
                code: record.code.as_str().to_string(),
                account: record.account.clone(),
                real_tracking_code: record.real_tracking_code.clone(),
                status: TrackingStatus::Created.as_str().to_string(),
                created_at: now.clone(),
                updated_at: now.clone(),
            })
            .collect();

        tracking_repo::insert_many(self, &rows)?;
        log::debug!("Inserted {} tracking records", rows.len());

        rows.into_iter().map(TrackingRecord::try_from).collect()
    }

    fn find_by_code(&self, code: &TrackingCode) -> Result<Option<TrackingRecord>, DatabaseError> {
        tracking_repo::find_by_code(self, code.as_str())?
            .map(TrackingRecord::try_from)
            .transpose()
    }
}
