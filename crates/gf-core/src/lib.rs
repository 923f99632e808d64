//! gf-core: shared foundation for gateflow.
//!
//! Contains:
//! - units (uom SI types + constructors for levels, areas, flows, time)
//! - numeric (Real + float guards, series extrema, clamping)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{GfError, GfResult};
pub use numeric::*;
pub use units::*;
