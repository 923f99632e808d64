//! Shared application service layer for gateflow.
//!
//! Front ends go through this crate: it loads and validates projects,
//! compiles them into engine parameters, runs simulations and records
//! their summary statistics.

pub mod compile;
pub mod error;
pub mod project_service;
pub mod query;
pub mod run_service;

pub use compile::{compile_project, summary_thresholds};
pub use error::{AppError, AppResult};
pub use project_service::{LoadedProject, load_project, validate_project};
pub use query::compare_summaries;
pub use run_service::{
    ComparisonResponse, ENGINE_VERSION, RunOptions, RunRequest, RunResponse, compare_runs,
    execute_run, list_runs, load_run, record_to_series,
};
