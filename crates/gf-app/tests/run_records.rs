use std::path::PathBuf;

use gf_app::{AppError, RunOptions, RunRequest, query, run_service};
use gf_hydraulics::HydraulicsError;
use gf_project::{InflowDef, Project};
use gf_sim::{SimError, SimMode};

fn project_dir(name: &str, project: &Project) -> PathBuf {
    let dir = std::env::temp_dir().join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("study.yaml");
    gf_project::save_project(&path, project).unwrap();
    path
}

fn request(path: &std::path::Path, mode: SimMode) -> RunRequest<'_> {
    RunRequest {
        project_path: path,
        mode,
        options: RunOptions::default(),
    }
}

#[test]
fn controlled_run_records_summary_only() {
    let path = project_dir(
        "gf_app_controlled_summary",
        &Project::reference("summary study", vec![100.0; 4]),
    );

    let run = run_service::execute_run(&request(&path, SimMode::Controlled)).unwrap();
    assert_eq!(run.series.len(), 4);
    assert!(run.series.control.is_some());
    assert!((run.manifest.summary.max_level_m - 3.147_752_353_420_635).abs() < 1e-9);
    assert!((run.manifest.summary.max_outflow_m3s - 33.194_760_175_449_225).abs() < 1e-9);
    let [level, outflow] = run.manifest.summary.headline();
    assert_eq!(level, "maximum water level = 3.15 m");
    assert_eq!(outflow, "maximum output discharge = 33.19 m3/s");

    let runs_dir = path.parent().unwrap().join(".gateflow").join("runs");
    let files: Vec<_> = std::fs::read_dir(&runs_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(files, vec![format!("{}.json", run.run_id)]);

    let manifest = run_service::load_run(&path, &run.run_id).unwrap();
    assert_eq!(manifest.summary, run.manifest.summary);
    assert_eq!(manifest.run_type.steps(), 4);
}

#[test]
fn rerun_recomputes_with_same_id() {
    let path = project_dir(
        "gf_app_rerun",
        &Project::reference("rerun study", vec![100.0; 3]),
    );
    let first = run_service::execute_run(&request(&path, SimMode::FixedGate)).unwrap();
    let second = run_service::execute_run(&request(&path, SimMode::FixedGate)).unwrap();
    assert_eq!(first.run_id, second.run_id);
    assert_eq!(first.series, second.series);
    assert!(second.series.control.is_none());
    assert!(second.series.gate.iter().all(|&g| g == 3.0));
    assert_eq!(run_service::list_runs(&path).unwrap().len(), 1);
}

#[test]
fn compare_records_both_variants() {
    let path = project_dir(
        "gf_app_compare",
        &Project::reference("compare study", vec![100.0; 4]),
    );
    let cmp = run_service::compare_runs(&path, &RunOptions::default()).unwrap();
    assert_ne!(cmp.controlled.run_id, cmp.fixed.run_id);
    assert_eq!(cmp.controlled.manifest.run_type.label(), "controlled");
    assert_eq!(cmp.fixed.manifest.run_type.label(), "fixed");
    assert_eq!(cmp.controlled.series.outflow[0], cmp.fixed.series.outflow[0]);

    let rows =
        query::compare_summaries(&cmp.controlled.manifest.summary, &cmp.fixed.manifest.summary);
    assert_eq!(rows[0].0, "max level (m)");
    assert_eq!(run_service::list_runs(&path).unwrap().len(), 2);
}

#[test]
fn csv_inflow_is_resolved_beside_project() {
    let mut project = Project::reference("csv study", vec![]);
    project.inflow = InflowDef::Csv {
        path: "Qinp.csv".to_string(),
        column: "Qinp".to_string(),
    };
    let dir = std::env::temp_dir().join("gf_app_csv_inflow");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    let rows: String = (1..=4)
        .map(|day| format!("\"{day} Jan, 2022\",100\n"))
        .collect();
    std::fs::write(dir.join("Qinp.csv"), format!("date,Qinp\n{rows}")).unwrap();
    let path = dir.join("study.yaml");
    gf_project::save_project(&path, &project).unwrap();

    let run = run_service::execute_run(&request(&path, SimMode::Controlled)).unwrap();
    assert_eq!(run.series.inflow, vec![100.0; 4]);
    assert!((run.series.level[3] - 3.147_752_353_420_635).abs() < 1e-9);
}

#[test]
fn engine_failure_keeps_step_and_cause() {
    let mut project = Project::reference("drained", vec![0.0; 3]);
    project.reservoir.area_m2 = 10.0;
    let path = project_dir("gf_app_drained", &project);

    let err = run_service::execute_run(&request(&path, SimMode::FixedGate)).unwrap_err();
    let sim = match err {
        AppError::Simulation(sim) => sim,
        other => panic!("expected a simulation error, got {other:?}"),
    };
    assert!(matches!(sim, SimError::Step { step: 1, .. }));
    assert_eq!(
        sim.root(),
        &SimError::Hydraulics(HydraulicsError::NonPhysical {
            what: "upstream level"
        })
    );
    assert!(run_service::list_runs(&path).unwrap().is_empty());
}

#[test]
fn unknown_run_is_reported() {
    let path = project_dir(
        "gf_app_unknown_run",
        &Project::reference("missing", vec![100.0]),
    );
    assert!(matches!(
        run_service::load_run(&path, "deadbeef"),
        Err(AppError::RunNotFound(_))
    ));
}

#[test]
fn empty_inflow_is_rejected_at_load() {
    let dir = std::env::temp_dir().join("gf_app_empty_inflow");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("Qinp.csv"), "Qinp\n").unwrap();
    let mut project = Project::reference("empty", vec![100.0]);
    project.inflow = InflowDef::Csv {
        path: "Qinp.csv".to_string(),
        column: "Qinp".to_string(),
    };
    let path = dir.join("study.yaml");
    gf_project::save_project(&path, &project).unwrap();

    assert!(run_service::execute_run(&request(&path, SimMode::Controlled)).is_err());
}
