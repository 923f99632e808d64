//! Project validation logic.

use crate::schema::{InflowDef, LATEST_VERSION, Project};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Inflow series is empty")]
    EmptyInflow,

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

fn invalid(field: &str, value: f64, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn finite(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, value, "must be finite"))
    }
}

fn positive(field: &str, value: f64) -> Result<(), ValidationError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, value, "must be positive"))
    }
}

pub fn validate_project(project: &Project) -> Result<(), ValidationError> {
    if project.version == 0 || project.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: project.version,
        });
    }

    positive("reservoir.area_m2", project.reservoir.area_m2)?;
    positive("reservoir.initial_level_m", project.reservoir.initial_level_m)?;
    positive("timestep_s", project.timestep_s)?;

    let gate = &project.gate;
    positive("gate.width_m", gate.width_m)?;
    positive("gate.contraction_coeff", gate.contraction_coeff)?;
    finite("gate.min_opening_m", gate.min_opening_m)?;
    finite("gate.max_opening_m", gate.max_opening_m)?;
    if gate.min_opening_m >= gate.max_opening_m {
        return Err(invalid(
            "gate.min_opening_m",
            gate.min_opening_m,
            "must be less than gate.max_opening_m",
        ));
    }
    finite("gate.reference_opening_m", gate.reference_opening_m)?;
    if gate.reference_opening_m < gate.min_opening_m
        || gate.reference_opening_m > gate.max_opening_m
    {
        return Err(invalid(
            "gate.reference_opening_m",
            gate.reference_opening_m,
            "must lie within the gate opening limits",
        ));
    }

    positive("channel.manning_n", project.channel.manning_n)?;
    positive("channel.bed_slope", project.channel.bed_slope)?;
    positive("channel.gravity_mps2", project.channel.gravity_mps2)?;

    let ctl = &project.controller;
    finite("controller.setpoint_m", ctl.setpoint_m)?;
    finite("controller.k", ctl.k)?;
    positive("controller.ti_s", ctl.ti_s)?;
    finite("controller.td_s", ctl.td_s)?;
    if ctl.td_s < 0.0 {
        return Err(invalid("controller.td_s", ctl.td_s, "must be non-negative"));
    }

    finite("reference_levels.flood_m", project.reference_levels.flood_m)?;
    finite("reference_levels.drought_m", project.reference_levels.drought_m)?;

    match &project.inflow {
        InflowDef::Inline { values } => validate_inflow_values(values)?,
        InflowDef::Csv { path, column } => {
            if path.trim().is_empty() {
                return Err(ValidationError::InvalidValue {
                    field: "inflow.path".to_string(),
                    value: path.clone(),
                    reason: "must not be empty".to_string(),
                });
            }
            if column.trim().is_empty() {
                return Err(ValidationError::InvalidValue {
                    field: "inflow.column".to_string(),
                    value: column.clone(),
                    reason: "must not be empty".to_string(),
                });
            }
        }
    }

    Ok(())
}

/// Discharge values: non-empty, finite, non-negative.
pub fn validate_inflow_values(values: &[f64]) -> Result<(), ValidationError> {
    if values.is_empty() {
        return Err(ValidationError::EmptyInflow);
    }
    for (i, &q) in values.iter().enumerate() {
        let field = format!("inflow[{i}]");
        finite(&field, q)?;
        if q < 0.0 {
            return Err(invalid(&field, q, "discharge must be non-negative"));
        }
    }
    Ok(())
}
