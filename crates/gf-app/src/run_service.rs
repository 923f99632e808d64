//! Run execution service.
//!
//! Every request simulates from the project file; only the manifest with the
//! summary statistics of a run is recorded.

use std::path::Path;

use gf_results::{RunManifest, RunSeries, RunStore, RunSummary, RunType, compute_run_id};
use gf_sim::{SimMode, SimRecord};

use crate::compile;
use crate::error::AppResult;
use crate::project_service::{self, LoadedProject};

/// Engine version stamped into run ids and manifests.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Options for running simulations.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub engine_version: String,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            engine_version: ENGINE_VERSION.to_string(),
        }
    }
}

/// Request to execute a run.
pub struct RunRequest<'a> {
    pub project_path: &'a Path,
    pub mode: SimMode,
    pub options: RunOptions,
}

/// Response from a run execution. The series lives only in memory.
#[derive(Debug, Clone)]
pub struct RunResponse {
    pub run_id: String,
    pub manifest: RunManifest,
    pub series: RunSeries,
}

/// Both variants of one project.
#[derive(Debug, Clone)]
pub struct ComparisonResponse {
    pub controlled: RunResponse,
    pub fixed: RunResponse,
}

/// Simulate the requested variant and record its summary.
pub fn execute_run(request: &RunRequest) -> AppResult<RunResponse> {
    let loaded = project_service::load_project(request.project_path)?;
    let store = RunStore::for_project(request.project_path)?;
    let config = compile::compile_project(&loaded.project)?;
    let record = gf_sim::run_mode(request.mode, &config, &loaded.inflow)?;
    record_summary(&store, &loaded, record, &request.options)
}

/// Run both variants concurrently and record each summary.
pub fn compare_runs(project_path: &Path, options: &RunOptions) -> AppResult<ComparisonResponse> {
    let loaded = project_service::load_project(project_path)?;
    let store = RunStore::for_project(project_path)?;
    let config = compile::compile_project(&loaded.project)?;
    let (controlled, fixed) = gf_sim::run_both(&config, &loaded.inflow)?;
    Ok(ComparisonResponse {
        controlled: record_summary(&store, &loaded, controlled, options)?,
        fixed: record_summary(&store, &loaded, fixed, options)?,
    })
}

fn record_summary(
    store: &RunStore,
    loaded: &LoadedProject,
    record: SimRecord,
    options: &RunOptions,
) -> AppResult<RunResponse> {
    let run_id = compute_run_id(
        &loaded.project,
        &loaded.inflow,
        record.mode.as_str(),
        &options.engine_version,
    );
    let run_type = match record.mode {
        SimMode::Controlled => RunType::Controlled {
            dt_s: record.dt_s,
            steps: record.len(),
        },
        SimMode::FixedGate => RunType::FixedGate {
            dt_s: record.dt_s,
            steps: record.len(),
        },
    };
    let series = record_to_series(record);
    let thresholds = compile::summary_thresholds(&loaded.project);
    let summary = RunSummary::from_series(&series, &thresholds)?;

    let manifest = RunManifest::new(
        run_id.clone(),
        &loaded.project.name,
        run_type,
        &options.engine_version,
        summary,
    );
    store.save_manifest(&manifest)?;
    tracing::info!(run_id = %run_id, mode = run_type.label(), "recorded run summary");

    Ok(RunResponse {
        run_id,
        manifest,
        series,
    })
}

/// Engine output reduced to the series reporting works on.
pub fn record_to_series(record: SimRecord) -> RunSeries {
    RunSeries {
        dt_s: record.dt_s,
        setpoint: record.setpoint,
        inflow: record.inflow,
        outflow: record.outflow,
        level: record.level,
        gate: record.gate,
        control: record.control,
    }
}

/// List runs of the project, most recent first.
pub fn list_runs(project_path: &Path) -> AppResult<Vec<RunManifest>> {
    let loaded = project_service::load_project(project_path)?;
    let store = RunStore::for_project(project_path)?;
    Ok(store.list_runs(&loaded.project.name)?)
}

/// Recorded summary of a specific run.
pub fn load_run(project_path: &Path, run_id: &str) -> AppResult<RunManifest> {
    let store = RunStore::for_project(project_path)?;
    Ok(store.load_manifest(run_id)?)
}
