use thiserror::Error;

use crate::core::types::SpeciesKind;

#[derive(Error, Debug)]
pub enum SpeciesError {
    #[error("Invariant violated: {species} has no attributes after construction")]
    InvariantViolation { species: SpeciesKind },

    #[error("Unknown species: {0}")]
    UnknownSpecies(String),

    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),

    #[error("Species already registered: {0}")]
    DuplicateSpecies(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SpeciesError>;
