//! Vertical sluice gate at the reservoir outlet.

use crate::common::{check_finite, check_positive};
use crate::error::{HydraulicsError, HydraulicsResult};
use crate::site::SiteConstants;
use gf_core::numeric::clamp_inclusive;
use gf_core::units::{Length, VolumeRate, m, m3ps};
use serde::{Deserialize, Serialize};

/// Physical operating range of the gate opening (m).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GateLimits {
    pub min_m: f64,
    pub max_m: f64,
}

impl GateLimits {
    pub fn new(min_m: f64, max_m: f64) -> HydraulicsResult<Self> {
        check_finite(min_m, "gate min opening")?;
        check_finite(max_m, "gate max opening")?;
        if min_m >= max_m {
            return Err(HydraulicsError::InvalidArg {
                what: "gate min opening must be less than max opening",
            });
        }
        Ok(Self { min_m, max_m })
    }

    /// Clamp an opening into the operating range; ties go to the bound.
    pub fn clamp(&self, opening_m: f64) -> f64 {
        clamp_inclusive(opening_m, self.min_m, self.max_m)
    }

    pub fn contains(&self, opening_m: f64) -> bool {
        opening_m >= self.min_m && opening_m <= self.max_m
    }
}

impl Default for GateLimits {
    fn default() -> Self {
        Self {
            min_m: 2.0,
            max_m: 4.0,
        }
    }
}

/// Which discharge formula governs the outlet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowRegime {
    /// Upstream level below the gate lip: open-channel flow (Manning).
    FreeFlow,
    /// Gate lip at or below the upstream level: gate orifice equation.
    Orifice,
}

/// Sluice gate with a rectangular opening.
///
/// For `upstream_level < opening` the outlet behaves as a wide rectangular
/// channel and discharge follows Manning's equation. Otherwise the gate
/// controls the flow and the orifice equation with a contraction-corrected
/// discharge coefficient applies.
#[derive(Debug, Clone)]
pub struct SluiceGate {
    name: String,
    /// Gate width.
    pub width: Length,
    /// Coefficient of contraction (dimensionless, typically ~0.61).
    pub contraction_coeff: f64,
    /// Operating range of the opening.
    pub limits: GateLimits,
    /// Channel and site constants.
    pub site: SiteConstants,
}

impl SluiceGate {
    /// Create a gate with default limits `[2, 4]` m and default site constants.
    pub fn new(name: String, width: Length, contraction_coeff: f64) -> HydraulicsResult<Self> {
        check_positive(width.value, "gate width")?;
        check_positive(contraction_coeff, "contraction coefficient")?;
        Ok(Self {
            name,
            width,
            contraction_coeff,
            limits: GateLimits::default(),
            site: SiteConstants::default(),
        })
    }

    pub fn with_limits(mut self, limits: GateLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_site(mut self, site: SiteConstants) -> Self {
        self.site = site;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Opening actually seen by the flow, after clamping to the gate limits.
    pub fn effective_opening(&self, gate_opening: Length) -> Length {
        m(self.limits.clamp(gate_opening.value))
    }

    /// Governing regime for an upstream level and (unclamped) gate opening.
    pub fn regime(&self, upstream_level: Length, gate_opening: Length) -> FlowRegime {
        let a = self.limits.clamp(gate_opening.value);
        if upstream_level.value < a {
            FlowRegime::FreeFlow
        } else {
            FlowRegime::Orifice
        }
    }

    /// Effective discharge coefficient `Cd = Cc / sqrt(1 + Cc*a/y1)`.
    pub fn discharge_coefficient(&self, upstream_level: Length, gate_opening: Length) -> f64 {
        let cc = self.contraction_coeff;
        let a = self.limits.clamp(gate_opening.value);
        cc / (1.0 + cc * a / upstream_level.value).sqrt()
    }

    /// Outlet discharge for an upstream level and gate opening.
    ///
    /// The opening is clamped to the gate limits first. The upstream level must
    /// be strictly positive.
    pub fn discharge(
        &self,
        upstream_level: Length,
        gate_opening: Length,
    ) -> HydraulicsResult<VolumeRate> {
        let y1 = check_positive(upstream_level.value, "upstream level")?;
        check_finite(gate_opening.value, "gate opening")?;

        let q = match self.regime(upstream_level, gate_opening) {
            FlowRegime::FreeFlow => self.free_flow(y1),
            FlowRegime::Orifice => {
                let a = self.limits.clamp(gate_opening.value);
                let cd = self.discharge_coefficient(upstream_level, gate_opening);
                a * self.width.value * cd * (2.0 * self.site.gravity_mps2 * y1).sqrt()
            }
        };

        check_finite(q, "outlet discharge")?;
        Ok(m3ps(q))
    }

    /// Manning flow in a wide rectangular channel of the gate width.
    fn free_flow(&self, y1: f64) -> f64 {
        let w = self.width.value;
        let area = w * y1;
        let hydraulic_radius = area / (w + 2.0 * y1);
        (1.0 / self.site.manning_n)
            * area
            * hydraulic_radius.powf(2.0 / 3.0)
            * self.site.bed_slope.sqrt()
    }
}
