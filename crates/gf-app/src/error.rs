//! Error types for the gf-app service layer.

use std::path::PathBuf;

/// Application error wrapping the backend crates for the front ends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Project error: {0}")]
    Project(String),

    #[error("Failed to load project {path}: {message}")]
    ProjectLoad { path: PathBuf, message: String },

    #[error("Project validation failed: {0}")]
    Validation(String),

    #[error("Parameter compilation failed: {0}")]
    Compile(String),

    #[error("Simulation error: {0}")]
    Simulation(#[from] gf_sim::SimError),

    #[error("Results error: {0}")]
    Results(String),

    #[error("Run not found: {0}")]
    RunNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for gf-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<gf_project::ProjectError> for AppError {
    fn from(err: gf_project::ProjectError) -> Self {
        match err {
            gf_project::ProjectError::Validation(e) => AppError::Validation(e.to_string()),
            other => AppError::Project(other.to_string()),
        }
    }
}

impl From<gf_project::ValidationError> for AppError {
    fn from(err: gf_project::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<gf_results::ResultsError> for AppError {
    fn from(err: gf_results::ResultsError) -> Self {
        match err {
            gf_results::ResultsError::RunNotFound { run_id } => AppError::RunNotFound(run_id),
            other => AppError::Results(other.to_string()),
        }
    }
}

impl From<gf_hydraulics::HydraulicsError> for AppError {
    fn from(err: gf_hydraulics::HydraulicsError) -> Self {
        AppError::Compile(err.to_string())
    }
}
