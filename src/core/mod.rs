pub mod config;
pub mod error;
pub mod types;

pub use config::DisplayConfig;
pub use error::{Result, SpeciesError};
pub use types::{Attribute, SpeciesKind};
