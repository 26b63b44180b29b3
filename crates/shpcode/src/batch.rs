//! Ephemeral batch of rows an operator fills in before generating codes.
//!
//! A batch always holds at least one row. Generating draws one code per row,
//! persists every row through a single [`RecordStore::insert_many`] call and
//! then locks the batch until [`Batch::reset`].

use std::str::FromStr;

use serde::Serialize;
use tracing::{info, info_span, warn};
use uuid::Uuid;

use crate::code::{Category, CodeGenerator, SerialSource, TrackingCode};
use crate::db::{NewTrackingRecord, RecordStore, TrackingRecord};
use crate::error::{BatchError, CodeError};

/// Operator input for one row: `CATEGORY[:ACCOUNT[:REAL_CODE]]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchRow {
    pub category: Category,
    pub account: String,
    pub real_tracking_code: String,
}

impl FromStr for BatchRow {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let category = parts.next().unwrap_or_default().parse::<Category>()?;
        Ok(Self {
            category,
            account: parts.next().unwrap_or_default().to_string(),
            real_tracking_code: parts.next().unwrap_or_default().to_string(),
        })
    }
}

/// One row of a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchItem {
    pub id: Uuid,
    pub category: Category,
    pub account: String,
    pub real_tracking_code: String,
    pub generated_code: Option<TrackingCode>,
}

impl BatchItem {
    fn from_row(row: BatchRow) -> Self {
        Self {
            id: Uuid::new_v4(),
            category: row.category,
            account: row.account,
            real_tracking_code: row.real_tracking_code,
            generated_code: None,
        }
    }

    /// Blank input is stored as absent.
    fn to_new_record(&self, code: TrackingCode) -> NewTrackingRecord {
        NewTrackingRecord {
            code,
            account: non_blank(&self.account),
            real_tracking_code: non_blank(&self.real_tracking_code),
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct Batch {
    items: Vec<BatchItem>,
    generated: bool,
}

impl Default for Batch {
    fn default() -> Self {
        Self::new()
    }
}

impl Batch {
    /// A fresh batch with a single default row.
    pub fn new() -> Self {
        Self {
            items: vec![BatchItem::from_row(BatchRow::default())],
            generated: false,
        }
    }

    pub fn from_rows(rows: Vec<BatchRow>) -> Result<Self, BatchError> {
        if rows.is_empty() {
            return Err(BatchError::Empty);
        }
        Ok(Self {
            items: rows.into_iter().map(BatchItem::from_row).collect(),
            generated: false,
        })
    }

    pub fn items(&self) -> &[BatchItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_generated(&self) -> bool {
        self.generated
    }

    /// Appends a default row and returns its id.
    pub fn add_item(&mut self) -> Result<Uuid, BatchError> {
        self.ensure_editable()?;
        let item = BatchItem::from_row(BatchRow::default());
        let id = item.id;
        self.items.push(item);
        Ok(id)
    }

    pub fn remove_item(&mut self, id: Uuid) -> Result<(), BatchError> {
        self.ensure_editable()?;
        let index = self.position(id)?;
        if self.items.len() == 1 {
            return Err(BatchError::LastItem);
        }
        self.items.remove(index);
        Ok(())
    }

    pub fn set_category(&mut self, id: Uuid, category: Category) -> Result<(), BatchError> {
        self.item_mut(id)?.category = category;
        Ok(())
    }

    pub fn set_account(&mut self, id: Uuid, account: impl Into<String>) -> Result<(), BatchError> {
        self.item_mut(id)?.account = account.into();
        Ok(())
    }

    pub fn set_real_tracking_code(
        &mut self,
        id: Uuid,
        real_tracking_code: impl Into<String>,
    ) -> Result<(), BatchError> {
        self.item_mut(id)?.real_tracking_code = real_tracking_code.into();
        Ok(())
    }

    /// Draws a code for every row and persists them in one insert.
    ///
    /// On a store failure the batch is left exactly as it was: no codes
    /// assigned and still editable.
    pub fn generate<St, S>(
        &mut self,
        store: &St,
        generator: &mut CodeGenerator<S>,
    ) -> Result<Vec<TrackingRecord>, BatchError>
    where
        St: RecordStore + ?Sized,
        S: SerialSource,
    {
        self.ensure_editable()?;
        let _span = info_span!("batch.generate", items = self.items.len()).entered();

        let codes: Vec<TrackingCode> = self
            .items
            .iter()
            .map(|item| generator.generate(item.category))
            .collect();
        let records: Vec<NewTrackingRecord> = self
            .items
            .iter()
            .zip(&codes)
            .map(|(item, code)| item.to_new_record(code.clone()))
            .collect();

        let stored = store.insert_many(&records).map_err(|e| {
            warn!(error = %e, "Failed to store generated batch");
            BatchError::Store(e)
        })?;

        for (item, code) in self.items.iter_mut().zip(codes) {
            item.generated_code = Some(code);
        }
        self.generated = true;
        info!(count = stored.len(), "Generated tracking codes");

        Ok(stored)
    }

    /// Back to a single default row, editable again.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn ensure_editable(&self) -> Result<(), BatchError> {
        if self.generated {
            Err(BatchError::Locked)
        } else {
            Ok(())
        }
    }

    fn position(&self, id: Uuid) -> Result<usize, BatchError> {
        self.items
            .iter()
            .position(|item| item.id == id)
            .ok_or(BatchError::UnknownItem(id))
    }

    fn item_mut(&mut self, id: Uuid) -> Result<&mut BatchItem, BatchError> {
        self.ensure_editable()?;
        let index = self.position(id)?;
        Ok(&mut self.items[index])
    }
}
