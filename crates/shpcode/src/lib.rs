pub mod batch;
pub mod code;
pub mod config;
pub mod db;
pub mod display;
pub mod error;
pub mod export;
pub mod lookup;
pub mod status;
pub mod telemetry;

pub use batch::{Batch, BatchItem, BatchRow};
pub use code::{
    generate_code, is_valid_code, normalize_query, Category, CodeGenerator, TrackingCode,
};
pub use config::{load_config, Config};
pub use db::{Database, DatabaseError, NewTrackingRecord, RecordStore, TrackingRecord};
pub use display::RecordView;
pub use error::{BatchError, CodeError, ConfigError, ExportError, Result, ShpError, StatusError};
pub use lookup::{search, SearchOutcome};
pub use status::TrackingStatus;
