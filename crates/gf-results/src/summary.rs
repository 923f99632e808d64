//! Summary statistics of a run.

use crate::types::RunSeries;
use crate::{ResultsError, ResultsResult};
use gf_core::numeric::{round_to, series_max, series_min};
use serde::{Deserialize, Serialize};

/// Reporting thresholds and gate bounds used for counting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryThresholds {
    pub flood_m: f64,
    pub drought_m: f64,
    pub gate_min_m: f64,
    pub gate_max_m: f64,
}

impl Default for SummaryThresholds {
    fn default() -> Self {
        Self {
            flood_m: 4.5,
            drought_m: 3.2,
            gate_min_m: 2.0,
            gate_max_m: 4.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub steps: usize,
    pub max_level_m: f64,
    pub min_level_m: f64,
    pub mean_level_m: f64,
    pub final_level_m: f64,
    pub max_outflow_m3s: f64,
    pub steps_above_flood: usize,
    pub steps_below_drought: usize,
    pub steps_gate_at_min: usize,
    pub steps_gate_at_max: usize,
}

impl RunSummary {
    pub fn from_series(series: &RunSeries, thresholds: &SummaryThresholds) -> ResultsResult<Self> {
        series.check_aligned()?;
        let max_level_m = series_max(&series.level).ok_or(ResultsError::EmptySeries)?;
        let min_level_m = series_min(&series.level).ok_or(ResultsError::EmptySeries)?;
        let max_outflow_m3s = series_max(&series.outflow).ok_or(ResultsError::EmptySeries)?;
        let final_level_m = *series.level.last().ok_or(ResultsError::EmptySeries)?;
        let steps = series.len();

        Ok(Self {
            steps,
            max_level_m,
            min_level_m,
            mean_level_m: series.level.iter().sum::<f64>() / steps as f64,
            final_level_m,
            max_outflow_m3s,
            steps_above_flood: series
                .level
                .iter()
                .filter(|&&y| y > thresholds.flood_m)
                .count(),
            steps_below_drought: series
                .level
                .iter()
                .filter(|&&y| y < thresholds.drought_m)
                .count(),
            steps_gate_at_min: series
                .gate
                .iter()
                .filter(|&&g| g <= thresholds.gate_min_m)
                .count(),
            steps_gate_at_max: series
                .gate
                .iter()
                .filter(|&&g| g >= thresholds.gate_max_m)
                .count(),
        })
    }

    /// Headline figures, two decimals.
    pub fn headline(&self) -> [String; 2] {
        [
            format!("maximum water level = {:.2} m", round_to(self.max_level_m, 2)),
            format!(
                "maximum output discharge = {:.2} m3/s",
                round_to(self.max_outflow_m3s, 2)
            ),
        ]
    }
}
