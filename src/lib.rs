//! Snapshot the immediate subdirectories of a project path as JSON.

pub mod core;
pub mod models;
pub mod services;

pub use crate::core::errors::{Error, Result};
pub use crate::core::telemetry::logging::init_logging;
pub use crate::models::config::{
    ExtraConfig, JsonFormat, SnapshotConfig, DEFAULT_SNAPSHOT_FILE_NAME,
};
pub use crate::models::directory_entry::DirectoryEntryRecord;
pub use crate::services::fs::snapshot::{
    scan, scan_sync, write_snapshot, write_snapshot_sync, ScanParams, WriteSnapshotParams,
};
