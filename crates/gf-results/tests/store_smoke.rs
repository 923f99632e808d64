use gf_results::*;

fn series() -> RunSeries {
    RunSeries {
        dt_s: 7200.0,
        setpoint: 3.5,
        inflow: vec![100.0, 100.0, 100.0, 100.0],
        outflow: vec![
            33.194_760_175_449_225,
            30.287_934_974_831_433,
            31.305_702_876_615_452,
            32.200_112_249_671_41,
        ],
        level: vec![
            3.0,
            3.048_099_772_673_676_7,
            3.098_292_459_491_798,
            3.147_752_353_420_635,
        ],
        gate: vec![
            3.0,
            2.647_058_523_424_506_8,
            2.718_639_549_878_295_4,
            2.776_847_314_006_026,
        ],
        control: Some(vec![
            -0.625,
            -0.352_941_476_575_493_35,
            -0.281_360_450_121_704_6,
            -0.223_152_685_993_973_75,
        ]),
    }
}

fn manifest(run_id: &str, project_name: &str, s: &RunSeries) -> RunManifest {
    let summary = RunSummary::from_series(s, &SummaryThresholds::default()).unwrap();
    RunManifest::new(
        run_id.to_string(),
        project_name,
        RunType::Controlled {
            dt_s: s.dt_s,
            steps: s.len(),
        },
        "test",
        summary,
    )
}

fn scratch(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(name);
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn save_and_load_manifest() {
    let store = RunStore::new(scratch("gf_results_save_load")).unwrap();
    let s = series();
    let m = manifest("run_a", "reservoir", &s);

    let path = store.save_manifest(&m).unwrap();
    assert!(path.ends_with("run_a.json"));
    assert!(store.has_run("run_a"));

    let loaded = store.load_manifest("run_a").unwrap();
    assert_eq!(loaded.run_id, "run_a");
    assert_eq!(loaded.run_type.steps(), 4);
    assert_eq!(loaded.summary.steps, 4);
    assert!((loaded.summary.max_level_m - m.summary.max_level_m).abs() < 1e-12);
}

#[test]
fn only_the_manifest_is_written() {
    let dir = scratch("gf_results_manifest_only");
    let store = RunStore::new(dir.clone()).unwrap();
    let s = series();
    store.save_manifest(&manifest("run_b", "reservoir", &s)).unwrap();

    let entries: Vec<_> = std::fs::read_dir(&dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(entries, vec!["run_b.json".to_string()]);

    let content = std::fs::read_to_string(dir.join("run_b.json")).unwrap();
    assert!(!content.contains("inflow_m3s"));
    assert!(content.contains("max_level_m"));
}

#[test]
fn saving_again_replaces_the_record() {
    let store = RunStore::new(scratch("gf_results_replace")).unwrap();
    let s = series();
    store.save_manifest(&manifest("same", "alpha", &s)).unwrap();
    store.save_manifest(&manifest("same", "alpha", &s)).unwrap();
    assert_eq!(store.list_runs("alpha").unwrap().len(), 1);
}

#[test]
fn list_runs_by_project() {
    let store = RunStore::new(scratch("gf_results_list")).unwrap();
    let s = series();
    store.save_manifest(&manifest("r1", "alpha", &s)).unwrap();
    store.save_manifest(&manifest("r2", "beta", &s)).unwrap();
    std::fs::write(store.root_dir().join("notes.txt"), "not a run").unwrap();

    let alpha = store.list_runs("alpha").unwrap();
    assert_eq!(alpha.len(), 1);
    assert_eq!(alpha[0].run_id, "r1");
    assert!(store.list_runs("gamma").unwrap().is_empty());
}

#[test]
fn missing_and_deleted_runs() {
    let store = RunStore::new(scratch("gf_results_delete")).unwrap();
    assert!(matches!(
        store.load_manifest("nope"),
        Err(ResultsError::RunNotFound { .. })
    ));

    let s = series();
    store.save_manifest(&manifest("gone", "alpha", &s)).unwrap();
    store.delete_run("gone").unwrap();
    assert!(!store.has_run("gone"));
    assert!(matches!(
        store.load_manifest("gone"),
        Err(ResultsError::RunNotFound { .. })
    ));
    store.delete_run("gone").unwrap();
}

#[test]
fn store_beside_project_file() {
    let dir = scratch("gf_results_for_project");
    std::fs::create_dir_all(&dir).unwrap();
    let store = RunStore::for_project(&dir.join("study.yaml")).unwrap();
    assert!(store.root_dir().ends_with(".gateflow/runs"));
    assert!(store.root_dir().exists());
}

#[test]
fn summary_reports_maxima() {
    let summary = RunSummary::from_series(&series(), &SummaryThresholds::default()).unwrap();
    let [level, outflow] = summary.headline();
    assert_eq!(level, "maximum water level = 3.15 m");
    assert_eq!(outflow, "maximum output discharge = 33.19 m3/s");
    assert_eq!(summary.steps_below_drought, 4);
    assert_eq!(summary.steps_above_flood, 0);
}
