//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::SpeciesError;

/// Trait markers a species may possess
///
/// Markers carry no data. Their only content is the variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    ImmortalPower,
    Intelligence,
    Experience,
    Disposition,
    TechnicalExpertise,
    FightingSkills,
    Spirituality,
    LifeSpan,
}

impl Attribute {
    /// Every attribute in declaration order
    pub const ALL: [Attribute; 8] = [
        Attribute::ImmortalPower,
        Attribute::Intelligence,
        Attribute::Experience,
        Attribute::Disposition,
        Attribute::TechnicalExpertise,
        Attribute::FightingSkills,
        Attribute::Spirituality,
        Attribute::LifeSpan,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Attribute::ImmortalPower => "ImmortalPower",
            Attribute::Intelligence => "Intelligence",
            Attribute::Experience => "Experience",
            Attribute::Disposition => "Disposition",
            Attribute::TechnicalExpertise => "TechnicalExpertise",
            Attribute::FightingSkills => "FightingSkills",
            Attribute::Spirituality => "Spirituality",
            Attribute::LifeSpan => "LifeSpan",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Attribute {
    type Err = SpeciesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Attribute::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SpeciesError::UnknownAttribute(s.to_string()))
    }
}

/// Species enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpeciesKind {
    Immortal,
    Mortal,
}

impl SpeciesKind {
    pub const ALL: [SpeciesKind; 2] = [SpeciesKind::Immortal, SpeciesKind::Mortal];

    pub fn name(&self) -> &'static str {
        match self {
            SpeciesKind::Immortal => "Immortal",
            SpeciesKind::Mortal => "Mortal",
        }
    }
}

impl fmt::Display for SpeciesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SpeciesKind {
    type Err = SpeciesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        SpeciesKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SpeciesError::UnknownSpecies(s.to_string()))
    }
}
