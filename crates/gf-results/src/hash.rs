//! Content-based hashing for run IDs.

use gf_project::schema::Project;
use sha2::{Digest, Sha256};

/// Run ID from project content, the resolved inflow series, mode and engine version.
///
/// The inflow values are hashed explicitly because a CSV-backed project
/// only names its inflow file.
pub fn compute_run_id(
    project: &Project,
    inflow: &[f64],
    run_label: &str,
    engine_version: &str,
) -> String {
    let mut hasher = Sha256::new();

    let project_json = serde_json::to_string(project).unwrap_or_default();
    hasher.update(project_json.as_bytes());

    for q in inflow {
        hasher.update(q.to_le_bytes());
    }

    hasher.update(run_label.as_bytes());
    hasher.update(engine_version.as_bytes());

    let result = hasher.finalize();
    format!("{:x}", result)
}
