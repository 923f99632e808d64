//! Summary records of past runs: one `<run_id>.json` manifest per run under
//! `.gateflow/runs`. Series are never written; they are recomputed on demand.

use crate::types::RunManifest;
use crate::{ResultsError, ResultsResult};
use std::fs;
use std::path::{Path, PathBuf};

const MANIFEST_EXT: &str = "json";

#[derive(Debug, Clone)]
pub struct RunStore {
    root_dir: PathBuf,
}

impl RunStore {
    pub fn new(root_dir: PathBuf) -> ResultsResult<Self> {
        fs::create_dir_all(&root_dir)?;
        Ok(Self { root_dir })
    }

    /// Store in `.gateflow/runs` beside the project file.
    pub fn for_project(project_path: &Path) -> ResultsResult<Self> {
        let project_dir = project_path
            .parent()
            .ok_or_else(|| ResultsError::InvalidPath {
                message: format!("{} has no parent directory", project_path.display()),
            })?;
        Self::new(project_dir.join(".gateflow").join("runs"))
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    fn manifest_path(&self, run_id: &str) -> PathBuf {
        self.root_dir.join(run_id).with_extension(MANIFEST_EXT)
    }

    pub fn has_run(&self, run_id: &str) -> bool {
        self.manifest_path(run_id).is_file()
    }

    /// Write the manifest, replacing an earlier record of the same run.
    pub fn save_manifest(&self, manifest: &RunManifest) -> ResultsResult<PathBuf> {
        let path = self.manifest_path(&manifest.run_id);
        fs::write(&path, serde_json::to_string_pretty(manifest)?)?;
        Ok(path)
    }

    pub fn load_manifest(&self, run_id: &str) -> ResultsResult<RunManifest> {
        let path = self.manifest_path(run_id);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ResultsError::RunNotFound {
                    run_id: run_id.to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&content)?)
    }

    /// Recorded runs of one project, newest first. Unreadable files are skipped.
    pub fn list_runs(&self, project_name: &str) -> ResultsResult<Vec<RunManifest>> {
        let mut runs: Vec<RunManifest> = fs::read_dir(&self.root_dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.extension().and_then(|e| e.to_str()) == Some(MANIFEST_EXT))
            .filter_map(|path| fs::read_to_string(path).ok())
            .filter_map(|content| serde_json::from_str::<RunManifest>(&content).ok())
            .filter(|manifest| manifest.project_name == project_name)
            .collect();
        runs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(runs)
    }

    pub fn delete_run(&self, run_id: &str) -> ResultsResult<()> {
        match fs::remove_file(self.manifest_path(run_id)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
