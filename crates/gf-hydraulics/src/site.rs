//! Physical constants of the outlet site.

use gf_core::units::constants::G_MPS2;
use serde::{Deserialize, Serialize};

/// Constants of the outlet channel and site that are not gate parameters.
///
/// The defaults describe the modeled site: a concrete-lined outlet channel
/// (Manning `n = 0.015`) on a `0.001` bed slope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SiteConstants {
    /// Manning roughness coefficient (s/m^(1/3)).
    pub manning_n: f64,
    /// Channel bed slope (m/m).
    pub bed_slope: f64,
    /// Gravitational acceleration (m/s^2).
    pub gravity_mps2: f64,
}

impl Default for SiteConstants {
    fn default() -> Self {
        Self {
            manning_n: 0.015,
            bed_slope: 0.001,
            gravity_mps2: G_MPS2,
        }
    }
}
