//! Named species builders
//!
//! The registry maps a species name to a zero-argument builder. Lookups are
//! case-insensitive and `names()` preserves registration order.

use ahash::AHashMap;

use crate::core::error::{Result, SpeciesError};
use crate::core::types::SpeciesKind;
use crate::entity::species::Species;

/// Zero-argument constructor for a species
pub type SpeciesBuilder = fn() -> Result<Species>;

/// Registry of species builders
pub struct SpeciesRegistry {
    /// Builders indexed by lowercase name
    builders: AHashMap<String, SpeciesBuilder>,
    /// Display names in registration order
    order: Vec<String>,
}

impl SpeciesRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            builders: AHashMap::new(),
            order: Vec::new(),
        }
    }

    /// Registry holding every built-in kind, Immortal first
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.insert(SpeciesKind::Immortal.name(), || Species::new(SpeciesKind::Immortal));
        registry.insert(SpeciesKind::Mortal.name(), || Species::new(SpeciesKind::Mortal));
        registry
    }

    fn insert(&mut self, name: &str, builder: SpeciesBuilder) {
        self.builders.insert(name.to_lowercase(), builder);
        self.order.push(name.to_string());
    }

    /// Register a builder under `name`
    pub fn register(&mut self, name: impl Into<String>, builder: SpeciesBuilder) -> Result<()> {
        let name = name.into();
        if self.contains(&name) {
            return Err(SpeciesError::DuplicateSpecies(name));
        }
        self.insert(&name, builder);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.builders.contains_key(&name.trim().to_lowercase())
    }

    /// Build the species registered under `name`
    pub fn build(&self, name: &str) -> Result<Species> {
        let builder = self
            .builders
            .get(&name.trim().to_lowercase())
            .ok_or_else(|| SpeciesError::UnknownSpecies(name.trim().to_string()))?;
        builder()
    }

    /// Build each named species in the given order
    pub fn build_all<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<Species>> {
        names.iter().map(|name| self.build(name.as_ref())).collect()
    }

    /// Registered names in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Default for SpeciesRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Attribute;

    #[test]
    fn test_builtin_order() {
        let registry = SpeciesRegistry::builtin();
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, vec!["Immortal", "Mortal"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_build_by_name() {
        let registry = SpeciesRegistry::builtin();
        let species = registry.build("mortal").unwrap();
        assert_eq!(species.kind(), SpeciesKind::Mortal);
        assert_eq!(species.attributes()[0], Attribute::Disposition);
    }

    #[test]
    fn test_unknown_species() {
        let registry = SpeciesRegistry::builtin();
        assert!(matches!(
            registry.build("Elf"),
            Err(SpeciesError::UnknownSpecies(name)) if name == "Elf"
        ));
    }

    #[test]
    fn test_duplicate_registration() {
        let mut registry = SpeciesRegistry::builtin();
        let result = registry.register("IMMORTAL", || Species::new(SpeciesKind::Immortal));
        assert!(matches!(result, Err(SpeciesError::DuplicateSpecies(_))));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_register_alias() {
        let mut registry = SpeciesRegistry::new();
        assert!(registry.is_empty());

        registry
            .register("Elder", || Species::new(SpeciesKind::Immortal))
            .unwrap();

        assert!(registry.contains("elder"));
        assert_eq!(registry.build("Elder").unwrap().name(), "Immortal");
    }

    #[test]
    fn test_build_all_preserves_order() {
        let registry = SpeciesRegistry::builtin();
        let built = registry.build_all(&["Mortal", "Immortal", "Mortal"]).unwrap();
        let kinds: Vec<SpeciesKind> = built.iter().map(Species::kind).collect();
        assert_eq!(
            kinds,
            vec![SpeciesKind::Mortal, SpeciesKind::Immortal, SpeciesKind::Mortal]
        );
    }

    #[test]
    fn test_build_all_stops_on_unknown() {
        let registry = SpeciesRegistry::builtin();
        assert!(registry.build_all(&["Mortal", "Dwarf"]).is_err());
    }
}
