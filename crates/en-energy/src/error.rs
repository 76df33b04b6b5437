//! Error types for the EROEI model.

use thiserror::Error;

/// Errors that can occur while constructing energy components.
#[derive(Error, Debug, Clone)]
pub enum EnergyError {
    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

pub type EnergyResult<T> = Result<T, EnergyError>;
