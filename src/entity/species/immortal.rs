//! Immortal species
//!
//! Immortals draw on power, intellect, and the experience of a long existence.

use crate::core::types::{Attribute, SpeciesKind};
use crate::entity::species::AttributeFactory;

/// Factory for immortal species
#[derive(Debug, Clone, Copy, Default)]
pub struct Immortal;

impl AttributeFactory for Immortal {
    fn kind(&self) -> SpeciesKind {
        SpeciesKind::Immortal
    }

    fn create_attributes(&self) -> Vec<Attribute> {
        vec![
            Attribute::ImmortalPower,
            Attribute::Intelligence,
            Attribute::Experience,
        ]
    }
}
