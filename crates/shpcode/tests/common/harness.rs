//! Test harness for isolated test execution.
//!
//! Each harness owns a temporary directory holding the SQLite database and an
//! export directory, and removes both on drop.

#![allow(dead_code)]

use std::path::PathBuf;

use tempfile::TempDir;

use shpcode::code::SerialSource;
use shpcode::{Batch, BatchRow, CodeGenerator, Config, Database, TrackingRecord};

/// Generator whose serials count up from `start`.
pub fn sequential_generator(start: u64) -> CodeGenerator<impl SerialSource> {
    let mut next = start;
    CodeGenerator::new(move || {
        let serial = next;
        next += 1;
        serial
    })
}

pub struct TestHarness {
    temp_dir: TempDir,
    pub db_path: PathBuf,
    pub export_dir: PathBuf,
    pub db: Database,
}

impl TestHarness {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("data").join("shpcode.db");
        let export_dir = temp_dir.path().join("exports");
        let db = Database::open(&db_path).expect("Failed to open test database");

        Self {
            temp_dir,
            db_path,
            export_dir,
            db,
        }
    }

    /// Config pointing at this harness's database and export directory.
    pub fn config(&self) -> Config {
        Config {
            database_path: Some(self.db_path.clone()),
            export_directory: self.export_dir.clone(),
            utc_offset_minutes: 0,
        }
    }

    /// Builds a batch from `CATEGORY[:ACCOUNT[:REAL_CODE]]` specs.
    pub fn batch(&self, rows: &[&str]) -> Batch {
        let rows: Vec<BatchRow> = rows
            .iter()
            .map(|r| r.parse().expect("invalid row spec"))
            .collect();
        Batch::from_rows(rows).expect("empty batch")
    }

    /// Generates and stores a batch with serials counting up from `start`.
    pub fn generate(&self, rows: &[&str], start: u64) -> (Batch, Vec<TrackingRecord>) {
        let mut batch = self.batch(rows);
        let stored = batch
            .generate(&self.db, &mut sequential_generator(start))
            .expect("generation failed");
        (batch, stored)
    }

    /// Executes raw SQL, for simulating out-of-band administrative writes.
    pub fn execute(&self, sql: &str) {
        self.db
            .with_conn(|conn| {
                conn.execute_batch(sql)?;
                Ok(())
            })
            .expect("SQL failed");
    }
}
