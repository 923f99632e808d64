//! Result data types.

use crate::summary::RunSummary;
use crate::{ResultsError, ResultsResult};
use serde::{Deserialize, Serialize};

pub type RunId = String;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunManifest {
    pub run_id: RunId,
    pub project_name: String,
    pub timestamp: String,
    pub run_type: RunType,
    pub engine_version: String,
    pub summary: RunSummary,
}

impl RunManifest {
    /// Manifest stamped with the current UTC time.
    pub fn new(
        run_id: RunId,
        project_name: &str,
        run_type: RunType,
        engine_version: &str,
        summary: RunSummary,
    ) -> Self {
        Self {
            run_id,
            project_name: project_name.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            run_type,
            engine_version: engine_version.to_string(),
            summary,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RunType {
    Controlled { dt_s: f64, steps: usize },
    FixedGate { dt_s: f64, steps: usize },
}

impl RunType {
    pub fn label(&self) -> &'static str {
        match self {
            RunType::Controlled { .. } => "controlled",
            RunType::FixedGate { .. } => "fixed",
        }
    }

    pub fn steps(&self) -> usize {
        match self {
            RunType::Controlled { steps, .. } | RunType::FixedGate { steps, .. } => *steps,
        }
    }
}

/// One timestep of a run, as exported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeseriesRecord {
    pub step: usize,
    pub time_s: f64,
    pub inflow_m3s: f64,
    pub outflow_m3s: f64,
    pub setpoint_m: f64,
    pub level_m: f64,
    pub gate_m: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control: Option<f64>,
}

/// Aligned output series of a run, as handed to reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSeries {
    pub dt_s: f64,
    pub setpoint: f64,
    pub inflow: Vec<f64>,
    pub outflow: Vec<f64>,
    pub level: Vec<f64>,
    pub gate: Vec<f64>,
    pub control: Option<Vec<f64>>,
}

impl RunSeries {
    pub fn len(&self) -> usize {
        self.inflow.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inflow.is_empty()
    }

    /// Every series must match the inflow length.
    pub fn check_aligned(&self) -> ResultsResult<()> {
        let expected = self.inflow.len();
        let mut series: Vec<(&'static str, usize)> = vec![
            ("outflow", self.outflow.len()),
            ("level", self.level.len()),
            ("gate", self.gate.len()),
        ];
        if let Some(control) = &self.control {
            series.push(("control", control.len()));
        }
        for (name, len) in series {
            if len != expected {
                return Err(ResultsError::Misaligned {
                    name,
                    len,
                    expected,
                });
            }
        }
        Ok(())
    }

    pub fn records(&self) -> ResultsResult<Vec<TimeseriesRecord>> {
        self.check_aligned()?;
        Ok((0..self.len())
            .map(|t| TimeseriesRecord {
                step: t,
                time_s: t as f64 * self.dt_s,
                inflow_m3s: self.inflow[t],
                outflow_m3s: self.outflow[t],
                setpoint_m: self.setpoint,
                level_m: self.level[t],
                gate_m: self.gate[t],
                control: self.control.as_ref().map(|c| c[t]),
            })
            .collect())
    }

}
