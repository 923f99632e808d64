//! Error types for hydraulic calculations.

use gf_core::error::GfError;
use thiserror::Error;

/// Errors that can occur during hydraulic calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HydraulicsError {
    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

pub type HydraulicsResult<T> = Result<T, HydraulicsError>;

impl From<GfError> for HydraulicsError {
    fn from(e: GfError) -> Self {
        match e {
            GfError::NonFinite { what, .. } | GfError::NotPositive { what, .. } => {
                HydraulicsError::NonPhysical { what }
            }
        }
    }
}
