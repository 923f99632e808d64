//! Closed-loop simulation of a gated reservoir outlet.
//!
//! Provides:
//! - `SimConfig`: immutable parameter set threaded through every model
//! - `GateStrategy`: pluggable gate update (PID-driven or fixed)
//! - `run_sim`: the single stepping loop shared by both strategies
//! - `run_controlled` / `run_fixed_gate`: the two selectable entry points
//! - `run_both`: both variants on the same inflow, side by side

pub mod config;
pub mod error;
pub mod sim;
pub mod strategy;

pub use config::SimConfig;
pub use error::{SimError, SimResult};
pub use sim::{SimMode, SimRecord, run_both, run_controlled, run_fixed_gate, run_mode, run_sim};
pub use strategy::{FixedGate, GateCommand, GateStrategy, PidGate};
