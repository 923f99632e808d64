//! Feedback control primitives for the reservoir gate.
//!
//! # Architecture
//!
//! The gate loop is split into three small pieces:
//! - `ErrorTracker` turns a level series into error, accumulated error and
//!   backward-difference samples
//! - `PidLaw` maps one sample to a control signal
//! - `GateActuator` turns the signal into a gate opening inside the physical
//!   operating range
//!
//! Controllers are positional and evaluated once per simulation step; the
//! integral term uses the raw running sum of errors scaled by `dt/Ti` inside
//! the law.

pub mod actuator;
pub mod error;
pub mod pid;
pub mod tracker;

pub use actuator::GateActuator;
pub use error::{ControlError, ControlResult};
pub use pid::{PidGains, PidLaw};
pub use tracker::{ErrorSample, ErrorTracker};
