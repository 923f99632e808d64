//! gf-hydraulics: hydraulic models for a gated reservoir outlet.
//!
//! Provides:
//! - `SluiceGate`: outlet discharge from upstream level and gate opening,
//!   switching between a free-flow channel regime (Manning) and a gate
//!   orifice regime
//! - `Reservoir`: explicit mass balance advancing the water level one step
//!
//! Both models are deterministic functions of state and parameters. Physical
//! site constants live in `SiteConstants` so they can be overridden.
//!
//! # Example
//!
//! ```
//! use gf_core::units::{m, m3ps, s, m2};
//! use gf_hydraulics::{Reservoir, SluiceGate};
//!
//! let gate = SluiceGate::new("outlet".into(), m(3.0), 0.61).unwrap();
//! let q_out = gate.discharge(m(3.0), m(3.0)).unwrap();
//! assert!(q_out.value > 33.0 && q_out.value < 33.3);
//!
//! let reservoir = Reservoir::new(m2(1.0e7)).unwrap();
//! let next = reservoir.next_level(m(3.0), m3ps(100.0), q_out, s(7200.0)).unwrap();
//! assert!(next.value > 3.0);
//! ```

pub mod common;
pub mod error;
pub mod gate;
pub mod reservoir;
pub mod site;

pub use error::{HydraulicsError, HydraulicsResult};
pub use gate::{FlowRegime, GateLimits, SluiceGate};
pub use reservoir::Reservoir;
pub use site::SiteConstants;
