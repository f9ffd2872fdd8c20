//! ms-results: run records, derived run status and the on-disk record store.

pub mod hash;
pub mod store;
pub mod types;

pub use hash::compute_parameters_hash;
pub use store::RunStore;
pub use types::*;

use std::path::PathBuf;

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Run record not found: {run_number}")]
    RecordNotFound { run_number: u32 },

    #[error("Unreadable run record {}: {message}", .path.display())]
    CorruptRecord { path: PathBuf, message: String },

    #[error("Invalid run record {run_number}: {reason}")]
    InvalidRecord { run_number: u32, reason: String },

    #[error("Invalid path: {message}")]
    InvalidPath { message: String },
}
