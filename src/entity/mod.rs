pub mod registry;
pub mod species;

pub use registry::{SpeciesBuilder, SpeciesRegistry};
pub use species::{AttributeFactory, Species};
