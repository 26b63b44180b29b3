//! Operator-facing rendering of tracking records (pt-BR).

use std::fmt;

use chrono::{DateTime, FixedOffset, Utc};

use crate::db::TrackingRecord;

/// Brasília time, the default display offset.
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = -180;

/// Builds a display offset from minutes east of UTC.
pub fn offset_from_minutes(minutes: i32) -> Option<FixedOffset> {
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
}

/// `dd/mm/yyyy, HH:MM` in the given offset.
pub fn format_timestamp(ts: DateTime<Utc>, offset: FixedOffset) -> String {
    ts.with_timezone(&offset)
        .format("%d/%m/%Y, %H:%M")
        .to_string()
}

/// Labelled view of a record, one field per line.
pub struct RecordView<'a> {
    record: &'a TrackingRecord,
    offset: FixedOffset,
}

impl<'a> RecordView<'a> {
    pub fn new(record: &'a TrackingRecord, offset: FixedOffset) -> Self {
        Self { record, offset }
    }

    /// Label/value pairs. Absent optional fields are skipped, and the update
    /// time only appears when it differs from the creation time.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let record = self.record;
        let mut fields = vec![
            ("Código de Rastreio", record.code.to_string()),
            ("Status", record.status.label().to_string()),
        ];
        if let Some(account) = &record.account {
            fields.push(("Conta", account.clone()));
        }
        if let Some(real) = &record.real_tracking_code {
            fields.push(("Código de Rastreio Real", real.clone()));
        }
        fields.push((
            "Data de Criação",
            format_timestamp(record.created_at, self.offset),
        ));
        if record.was_updated() {
            fields.push((
                "Última Atualização",
                format_timestamp(record.updated_at, self.offset),
            ));
        }
        fields
    }
}

impl fmt::Display for RecordView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (label, value)) in self.fields().into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", label, value)?;
        }
        Ok(())
    }
}
