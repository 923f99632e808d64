use clap::{Parser, Subcommand, ValueEnum};
use gf_app::{AppError, AppResult, RunOptions, RunRequest, project_service, query, run_service};
use gf_sim::SimMode;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gateflow")]
#[command(about = "gateflow - PID-controlled reservoir outlet gate simulation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate project file and inflow source
    Validate {
        /// Path to the project YAML/JSON file
        project_path: PathBuf,
    },
    /// Run a simulation
    Run {
        /// Path to the project YAML/JSON file
        project_path: PathBuf,
        /// Gate strategy
        #[arg(long, value_enum, default_value_t = ModeArg::Controlled)]
        mode: ModeArg,
    },
    /// Run the controlled and fixed-gate variants side by side
    Compare {
        /// Path to the project YAML/JSON file
        project_path: PathBuf,
    },
    /// List recorded run summaries for a project
    Runs {
        /// Path to the project YAML/JSON file
        project_path: PathBuf,
    },
    /// Show the recorded summary of a run
    ShowRun {
        /// Path to the project YAML/JSON file
        project_path: PathBuf,
        /// Run ID to display
        run_id: String,
    },
    /// Re-run a simulation and export its aligned series as CSV
    ExportSeries {
        /// Path to the project YAML/JSON file
        project_path: PathBuf,
        /// Gate strategy
        #[arg(long, value_enum, default_value_t = ModeArg::Controlled)]
        mode: ModeArg,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Controlled,
    Fixed,
}

impl From<ModeArg> for SimMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Controlled => SimMode::Controlled,
            ModeArg::Fixed => SimMode::FixedGate,
        }
    }
}

fn main() -> std::process::ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate { project_path } => cmd_validate(&project_path),
        Commands::Run { project_path, mode } => cmd_run(&project_path, mode.into()),
        Commands::Compare { project_path } => cmd_compare(&project_path),
        Commands::Runs { project_path } => cmd_runs(&project_path),
        Commands::ShowRun {
            project_path,
            run_id,
        } => cmd_show_run(&project_path, &run_id),
        Commands::ExportSeries {
            project_path,
            mode,
            output,
        } => cmd_export_series(&project_path, mode.into(), output.as_deref()),
    };

    match result {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            std::process::ExitCode::FAILURE
        }
    }
}

fn report(err: &AppError) {
    eprintln!("Error: {err}");
    if let AppError::Simulation(sim) = err
        && let gf_sim::SimError::Step { step, .. } = sim
    {
        eprintln!("  failed at step {step}: {}", sim.root());
    }
}

fn cmd_validate(project_path: &Path) -> AppResult<()> {
    println!("Validating project: {}", project_path.display());
    let loaded = project_service::load_project(project_path)?;
    project_service::validate_project(&loaded.project)?;
    println!(
        "✓ Project '{}' is valid ({} inflow values)",
        loaded.project.name,
        loaded.inflow.len()
    );
    Ok(())
}

fn cmd_run(project_path: &Path, mode: SimMode) -> AppResult<()> {
    println!("Running {} simulation", mode);

    let request = RunRequest {
        project_path,
        mode,
        options: RunOptions::default(),
    };
    let response = run_service::execute_run(&request)?;
    info!(run_id = %response.run_id, steps = response.series.len(), "run finished");

    println!("✓ Simulation completed: {}", response.run_id);
    println!("  Steps: {}", response.series.len());

    for line in response.manifest.summary.headline() {
        println!("{}", line);
    }
    Ok(())
}

fn cmd_compare(project_path: &Path) -> AppResult<()> {
    let cmp = run_service::compare_runs(project_path, &RunOptions::default())?;

    println!("Controlled run: {}", cmp.controlled.run_id);
    println!("Fixed-gate run: {}", cmp.fixed.run_id);
    println!("\n  {:<22} {:>12} {:>12}", "", "controlled", "fixed");
    let rows =
        query::compare_summaries(&cmp.controlled.manifest.summary, &cmp.fixed.manifest.summary);
    for (label, controlled, fixed) in rows {
        println!("  {:<22} {:>12} {:>12}", label, controlled, fixed);
    }
    Ok(())
}

fn cmd_runs(project_path: &Path) -> AppResult<()> {
    let runs = run_service::list_runs(project_path)?;

    if runs.is_empty() {
        println!("No recorded runs found");
    } else {
        println!("Recorded runs:");
        for manifest in runs {
            println!(
                "  {} {:<10} ({})",
                manifest.run_id,
                manifest.run_type.label(),
                manifest.timestamp
            );
        }
    }
    Ok(())
}

fn cmd_show_run(project_path: &Path, run_id: &str) -> AppResult<()> {
    println!("Loading run: {}", run_id);

    let manifest = run_service::load_run(project_path, run_id)?;
    let summary = &manifest.summary;

    println!("\nRun Summary:");
    println!("  Project: {}", manifest.project_name);
    println!("  Mode: {}", manifest.run_type.label());
    println!("  Engine: {}", manifest.engine_version);
    println!("  Recorded: {}", manifest.timestamp);
    println!("  Time points: {}", summary.steps);
    println!("  Min level: {:.2} m", summary.min_level_m);
    println!("  Mean level: {:.2} m", summary.mean_level_m);
    println!("  Final level: {:.2} m", summary.final_level_m);
    println!("  Steps above flood level: {}", summary.steps_above_flood);
    println!("  Steps below drought level: {}", summary.steps_below_drought);
    println!(
        "  Gate at bounds: {} min / {} max",
        summary.steps_gate_at_min, summary.steps_gate_at_max
    );
    for line in summary.headline() {
        println!("{}", line);
    }

    Ok(())
}

fn cmd_export_series(project_path: &Path, mode: SimMode, output: Option<&Path>) -> AppResult<()> {
    let request = RunRequest {
        project_path,
        mode,
        options: RunOptions::default(),
    };
    let response = run_service::execute_run(&request)?;
    let records = response.series.records()?;
    let csv = gf_results::series_to_csv(&records)?;

    if let Some(path) = output {
        std::fs::write(path, csv)?;
        info!(run_id = %response.run_id, path = %path.display(), "series exported");
        println!(
            "✓ Exported {} data points to {}",
            records.len(),
            path.display()
        );
    } else {
        print!("{}", csv);
    }

    Ok(())
}
