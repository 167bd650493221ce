//! Mortal species

use crate::core::types::{Attribute, SpeciesKind};
use crate::entity::species::AttributeFactory;

/// Factory for mortal species
#[derive(Debug, Clone, Copy, Default)]
pub struct Mortal;

impl AttributeFactory for Mortal {
    fn kind(&self) -> SpeciesKind {
        SpeciesKind::Mortal
    }

    fn create_attributes(&self) -> Vec<Attribute> {
        vec![
            Attribute::Disposition,
            Attribute::TechnicalExpertise,
            Attribute::FightingSkills,
            Attribute::Spirituality,
            Attribute::LifeSpan,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::species::Species;

    #[test]
    fn test_mortal_attribute_order() {
        let species = Species::build(&Mortal).unwrap();
        assert_eq!(
            species.attributes(),
            &[
                Attribute::Disposition,
                Attribute::TechnicalExpertise,
                Attribute::FightingSkills,
                Attribute::Spirituality,
                Attribute::LifeSpan,
            ]
        );
    }

    #[test]
    fn test_mortal_shares_nothing_with_immortal() {
        let mortal = Mortal.create_attributes();
        let immortal = crate::entity::species::Immortal.create_attributes();
        assert!(mortal.iter().all(|a| !immortal.contains(a)));
    }
}
