//! Project loading and validation.

use std::path::{Path, PathBuf};

use gf_project::Project;

use crate::error::{AppError, AppResult};

/// A validated project together with its resolved inflow series.
#[derive(Debug, Clone)]
pub struct LoadedProject {
    pub path: PathBuf,
    pub project: Project,
    pub inflow: Vec<f64>,
}

/// Load a YAML/JSON project and resolve its inflow source.
pub fn load_project(path: &Path) -> AppResult<LoadedProject> {
    let project = gf_project::load_project(path).map_err(|e| match e {
        gf_project::ProjectError::Validation(v) => AppError::Validation(v.to_string()),
        other => AppError::ProjectLoad {
            path: path.to_path_buf(),
            message: other.to_string(),
        },
    })?;
    let inflow = gf_project::load_inflow(&project, path)?;
    tracing::debug!(
        project = %project.name,
        steps = inflow.len(),
        "loaded project"
    );
    Ok(LoadedProject {
        path: path.to_path_buf(),
        project,
        inflow,
    })
}

/// Schema and parameter validation without touching the inflow source.
pub fn validate_project(project: &Project) -> AppResult<()> {
    gf_project::validate_project(project)?;
    crate::compile::compile_project(project)?;
    Ok(())
}
