//! Species construction
//!
//! A `Species` never fills its own attribute list. Each variant module
//! provides an `AttributeFactory`, and `Species::build` runs that factory
//! before the value exists, so nothing can observe a species without
//! attributes.

pub mod immortal;
pub mod mortal;

pub use immortal::Immortal;
pub use mortal::Mortal;

use serde::Serialize;
use std::fmt;

use crate::core::error::{Result, SpeciesError};
use crate::core::types::{Attribute, SpeciesKind};

/// Variant-specific creation step for a species' attributes
pub trait AttributeFactory {
    /// The species this factory builds
    fn kind(&self) -> SpeciesKind;

    /// Produce the ordered attribute list for a fresh species
    fn create_attributes(&self) -> Vec<Attribute>;
}

impl SpeciesKind {
    /// Factory responsible for this kind
    pub fn factory(&self) -> &'static dyn AttributeFactory {
        match self {
            SpeciesKind::Immortal => &Immortal,
            SpeciesKind::Mortal => &Mortal,
        }
    }
}

/// A constructed species and the attributes its factory produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Species {
    #[serde(rename = "species")]
    kind: SpeciesKind,
    attributes: Vec<Attribute>,
}

impl Species {
    /// Build a species of the given kind
    pub fn new(kind: SpeciesKind) -> Result<Self> {
        Self::build(kind.factory())
    }

    /// Run `factory` and assemble the populated species
    ///
    /// Returns `InvariantViolation` if the factory produces no attributes.
    pub fn build(factory: &dyn AttributeFactory) -> Result<Self> {
        let kind = factory.kind();
        let attributes = factory.create_attributes();

        if attributes.is_empty() {
            return Err(SpeciesError::InvariantViolation { species: kind });
        }

        tracing::debug!("Built {} with {} attributes", kind, attributes.len());
        Ok(Self { kind, attributes })
    }

    pub fn kind(&self) -> SpeciesKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn has_attribute(&self, attribute: Attribute) -> bool {
        self.attributes.contains(&attribute)
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
