//! Search flow for a single tracking code.
//!
//! Not finding a code is a normal outcome, reported separately from store
//! failures.

use tracing::{debug, info_span};

use crate::code::{normalize_query, TrackingCode};
use crate::db::{DatabaseError, RecordStore, TrackingRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Nothing but whitespace was entered; the store was not queried.
    Blank,
    /// The normalized query is not a well-formed code; the store was not
    /// queried.
    Malformed { query: String },
    NotFound { code: TrackingCode },
    Found(TrackingRecord),
}

/// Normalizes `raw_query`, validates it and looks it up by exact code.
pub fn search<S>(store: &S, raw_query: &str) -> Result<SearchOutcome, DatabaseError>
where
    S: RecordStore + ?Sized,
{
    let query = normalize_query(raw_query);
    if query.is_empty() {
        return Ok(SearchOutcome::Blank);
    }

    let code = match TrackingCode::parse(&query) {
        Ok(code) => code,
        Err(_) => {
            debug!(query = %query, "Rejected malformed tracking code");
            return Ok(SearchOutcome::Malformed { query });
        }
    };

    let _span = info_span!("lookup.search", code = %code).entered();
    let outcome = match store.find_by_code(&code)? {
        Some(record) => SearchOutcome::Found(record),
        None => SearchOutcome::NotFound { code },
    };
    debug!(found = matches!(outcome, SearchOutcome::Found(_)), "Lookup finished");
    Ok(outcome)
}
