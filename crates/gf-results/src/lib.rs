//! gf-results: run reporting, summary statistics and the run summary store.
//!
//! Everything here works on plain series (`RunSeries`); nothing depends on
//! the simulation engine.

pub mod export;
pub mod hash;
pub mod store;
pub mod summary;
pub mod types;

pub use export::{series_to_csv, write_csv};
pub use hash::compute_run_id;
pub use store::RunStore;
pub use summary::{RunSummary, SummaryThresholds};
pub use types::*;

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Run not found: {run_id}")]
    RunNotFound { run_id: String },

    #[error("Invalid path: {message}")]
    InvalidPath { message: String },

    #[error("Series '{name}' has {len} values, expected {expected}")]
    Misaligned {
        name: &'static str,
        len: usize,
        expected: usize,
    },

    #[error("No values to summarize")]
    EmptySeries,
}
