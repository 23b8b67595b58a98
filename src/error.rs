/*
 * Error Module
 *
 * This module defines the error type shared by the vector math, the
 * parameter loading and the flock constructors.
 */

use thiserror::Error;

use crate::agent::AgentId;

#[derive(Error, Debug)]
pub enum FlockError {
    /// A vector was divided by zero
    #[error("division by zero")]
    DivisionByZero,

    /// Normalizing or comparing against a zero-length vector
    #[error("undefined operation: {0}")]
    UndefinedOperation(&'static str),

    /// Parameters that cannot describe a valid simulation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Two agents handed to the same flock share an id
    #[error("duplicate agent id {0}")]
    DuplicateAgentId(AgentId),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, FlockError>;
