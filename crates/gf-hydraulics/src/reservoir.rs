//! Reservoir storage: explicit continuity equation.

use crate::common::{check_finite, check_positive};
use crate::error::HydraulicsResult;
use gf_core::units::{Area, Length, Time, VolumeRate, m};

/// Prismatic reservoir with a constant surface area.
#[derive(Debug, Clone)]
pub struct Reservoir {
    /// Free-surface area.
    pub area: Area,
}

impl Reservoir {
    pub fn new(area: Area) -> HydraulicsResult<Self> {
        check_positive(area.value, "reservoir area")?;
        Ok(Self { area })
    }

    /// Level after one step: `level + dt/area * (inflow - outflow)`.
    ///
    /// Forward Euler on `A dh/dt = Qin - Qout`. The level is not clamped;
    /// flood and drought levels are reporting thresholds.
    pub fn next_level(
        &self,
        level: Length,
        inflow: VolumeRate,
        outflow: VolumeRate,
        dt: Time,
    ) -> HydraulicsResult<Length> {
        let next = level.value + dt.value / self.area.value * (inflow.value - outflow.value);
        check_finite(next, "water level")?;
        Ok(m(next))
    }
}
