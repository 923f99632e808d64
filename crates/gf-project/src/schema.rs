//! Project schema definitions.

use serde::{Deserialize, Serialize};

/// Newest schema version this crate reads and writes.
pub const LATEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub version: u32,
    pub name: String,
    pub reservoir: ReservoirDef,
    pub gate: GateDef,
    #[serde(default)]
    pub channel: ChannelDef,
    pub controller: ControllerDef,
    pub timestep_s: f64,
    pub inflow: InflowDef,
    #[serde(default)]
    pub reference_levels: ReferenceLevelsDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReservoirDef {
    pub area_m2: f64,
    pub initial_level_m: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GateDef {
    pub width_m: f64,
    pub contraction_coeff: f64,
    pub reference_opening_m: f64,
    #[serde(default = "default_min_opening")]
    pub min_opening_m: f64,
    #[serde(default = "default_max_opening")]
    pub max_opening_m: f64,
}

fn default_min_opening() -> f64 {
    2.0
}

fn default_max_opening() -> f64 {
    4.0
}

/// Outlet channel and site constants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChannelDef {
    pub manning_n: f64,
    pub bed_slope: f64,
    pub gravity_mps2: f64,
}

impl Default for ChannelDef {
    fn default() -> Self {
        Self {
            manning_n: 0.015,
            bed_slope: 0.001,
            gravity_mps2: 9.81,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ControllerDef {
    pub setpoint_m: f64,
    pub k: f64,
    pub ti_s: f64,
    pub td_s: f64,
}

/// Source of the inflow discharge series (m3/s, one value per timestep).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum InflowDef {
    Inline {
        values: Vec<f64>,
    },
    /// Named column of a CSV file; relative paths resolve against the project file.
    Csv {
        path: String,
        column: String,
    },
}

/// Reporting thresholds; not model constraints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReferenceLevelsDef {
    pub flood_m: f64,
    pub drought_m: f64,
}

impl Default for ReferenceLevelsDef {
    fn default() -> Self {
        Self {
            flood_m: 4.5,
            drought_m: 3.2,
        }
    }
}

impl Project {
    /// Parameters of the studied reservoir with an inline inflow series.
    pub fn reference(name: &str, inflow: Vec<f64>) -> Self {
        Self {
            version: LATEST_VERSION,
            name: name.to_string(),
            reservoir: ReservoirDef {
                area_m2: 1.0e7,
                initial_level_m: 3.0,
            },
            gate: GateDef {
                width_m: 3.0,
                contraction_coeff: 0.61,
                reference_opening_m: 3.0,
                min_opening_m: default_min_opening(),
                max_opening_m: default_max_opening(),
            },
            channel: ChannelDef::default(),
            controller: ControllerDef {
                setpoint_m: 3.5,
                k: 1.25,
                ti_s: 8.5e6,
                td_s: 25_500.0,
            },
            timestep_s: 7200.0,
            inflow: InflowDef::Inline { values: inflow },
            reference_levels: ReferenceLevelsDef::default(),
        }
    }
}
