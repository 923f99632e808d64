//! Project definition to engine parameters.

use gf_controls::PidGains;
use gf_hydraulics::{GateLimits, SiteConstants};
use gf_project::Project;
use gf_results::SummaryThresholds;
use gf_sim::SimConfig;

use crate::error::{AppError, AppResult};

/// Build the engine configuration of a project and check it.
pub fn compile_project(project: &Project) -> AppResult<SimConfig> {
    let gate = &project.gate;
    let limits = GateLimits::new(gate.min_opening_m, gate.max_opening_m)?;

    let config = SimConfig {
        setpoint_m: project.controller.setpoint_m,
        area_m2: project.reservoir.area_m2,
        gate_width_m: gate.width_m,
        contraction_coeff: gate.contraction_coeff,
        dt_s: project.timestep_s,
        initial_level_m: project.reservoir.initial_level_m,
        reference_opening_m: gate.reference_opening_m,
        gains: PidGains {
            k: project.controller.k,
            ti: project.controller.ti_s,
            td: project.controller.td_s,
        },
        limits,
        site: SiteConstants {
            manning_n: project.channel.manning_n,
            bed_slope: project.channel.bed_slope,
            gravity_mps2: project.channel.gravity_mps2,
        },
    };

    config
        .validate()
        .map_err(|e| AppError::Compile(e.to_string()))?;
    Ok(config)
}

/// Reporting thresholds from the project's reference levels and gate bounds.
pub fn summary_thresholds(project: &Project) -> SummaryThresholds {
    SummaryThresholds {
        flood_m: project.reference_levels.flood_m,
        drought_m: project.reference_levels.drought_m,
        gate_min_m: project.gate.min_opening_m,
        gate_max_m: project.gate.max_opening_m,
    }
}
