//! gf-project: project file format, validation and inflow loading.

pub mod inflow;
pub mod schema;
pub mod validate;

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;

pub use inflow::{InflowError, load_inflow, parse_csv_column};
pub use schema::*;
pub use validate::{ValidationError, validate_project};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Inflow error: {0}")]
    Inflow(#[from] InflowError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk encoding of a project file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    /// `.json` is JSON, anything else YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Yaml,
        }
    }
}

pub fn load<T: DeserializeOwned>(path: &Path, format: Format) -> ProjectResult<T> {
    let content = std::fs::read_to_string(path)?;
    Ok(match format {
        Format::Yaml => serde_yaml::from_str(&content)?,
        Format::Json => serde_json::from_str(&content)?,
    })
}

pub fn save<T: Serialize>(path: &Path, value: &T, format: Format) -> ProjectResult<()> {
    let content = match format {
        Format::Yaml => serde_yaml::to_string(value)?,
        Format::Json => serde_json::to_string_pretty(value)?,
    };
    std::fs::write(path, content)?;
    Ok(())
}

/// Read and validate a project, choosing the format from the extension.
pub fn load_project(path: &Path) -> ProjectResult<Project> {
    let project: Project = load(path, Format::from_path(path))?;
    validate_project(&project)?;
    Ok(project)
}

/// Validate and write a project, choosing the format from the extension.
pub fn save_project(path: &Path, project: &Project) -> ProjectResult<()> {
    validate_project(project)?;
    save(path, project, Format::from_path(path))
}
