//! Tracking repository: insert and lookup for the `tracking_codes` table.

use rusqlite::{params, Row};

use super::{Database, DatabaseError};

/// A raw tracking row from the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingRow {
    pub id: String,
    pub code: String,
    pub account: Option<String>,
    pub real_tracking_code: Option<String>,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl TrackingRow {
    fn from_row(row: &Row<'_>) -> Result<Self, rusqlite::Error> {
        Ok(Self {
            id: row.get("id")?,
            code: row.get("code")?,
            account: row.get("account")?,
            real_tracking_code: row.get("real_tracking_code")?,
            status: row.get("status")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }
}

/// Inserts all rows in a single transaction.
///
/// Either every row is written or none is. A code that already exists (or
/// repeats within `rows`) yields [`DatabaseError::DuplicateCode`].
pub fn insert_many(db: &Database, rows: &[TrackingRow]) -> Result<(), DatabaseError> {
    db.with_conn(|conn| {
        let tx = conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO tracking_codes (id, code, account, real_tracking_code, status,
                 created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for row in rows {
                stmt.execute(params![
                    row.id,
                    row.code,
                    row.account,
                    row.real_tracking_code,
                    row.status,
                    row.created_at,
                    row.updated_at,
                ])
                .map_err(|e| {
                    if is_unique_violation(&e) {
                        DatabaseError::DuplicateCode {
                            code: row.code.clone(),
                        }
                    } else {
                        DatabaseError::Sqlite(e)
                    }
                })?;
            }
        }
        tx.commit()?;
        Ok(())
    })
}

/// Finds a row by its exact code.
pub fn find_by_code(db: &Database, code: &str) -> Result<Option<TrackingRow>, DatabaseError> {
    db.with_conn(|conn| {
        let mut stmt = conn.prepare("SELECT * FROM tracking_codes WHERE code = ?1")?;
        let mut rows = stmt.query_map(params![code], TrackingRow::from_row)?;
        match rows.next() {
            Some(Ok(row)) => Ok(Some(row)),
            Some(Err(e)) => Err(DatabaseError::Sqlite(e)),
            None => Ok(None),
        }
    })
}

/// Counts all stored rows.
pub fn count(db: &Database) -> Result<u64, DatabaseError> {
    db.with_conn(|conn| {
        let count: u64 = conn.query_row("SELECT COUNT(*) FROM tracking_codes", [], |r| r.get(0))?;
        Ok(count)
    })
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}
