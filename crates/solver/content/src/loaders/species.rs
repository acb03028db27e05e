//! Species catalog loader.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use solver_core::BaseStats;

use crate::loaders::{LoadResult, read_file};

/// Base stats for one species form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Species {
    pub dex: u16,
    pub name: String,
    /// `None` for the standard form.
    #[serde(default)]
    pub form: Option<String>,
    pub base: BaseStats,
}

impl Species {
    /// Display name including the form, e.g. `Raichu (Alola)`.
    pub fn label(&self) -> String {
        match &self.form {
            Some(form) => format!("{} ({})", self.name, form),
            None => self.name.clone(),
        }
    }
}

/// Species catalog structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpeciesCatalog {
    pub species: Vec<Species>,
}

/// Loader for species catalogs from RON files.
pub struct SpeciesLoader;

impl SpeciesLoader {
    /// Load a species catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<Species>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a species catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<Species>> {
        let catalog: SpeciesCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse species catalog RON: {}", e))?;

        Ok(catalog.species)
    }

    /// The catalog shipped with the crate.
    pub fn embedded() -> LoadResult<Vec<Species>> {
        Self::parse(include_str!("../../data/species.ron"))
    }
}

type SpeciesKey = (String, Option<String>);

fn key(name: &str, form: Option<&str>) -> SpeciesKey {
    (
        name.trim().to_lowercase(),
        form.map(|form| form.trim().to_lowercase())
            .filter(|form| !form.is_empty()),
    )
}

/// Registry for species base stats.
///
/// Provides lookup by case-insensitive `(name, form)`.
#[derive(Debug, Clone, Default)]
pub struct SpeciesRegistry {
    species: Vec<Species>,
    index: HashMap<SpeciesKey, usize>,
}

impl SpeciesRegistry {
    /// Builds a registry, rejecting duplicate `(name, form)` pairs.
    pub fn new(species: Vec<Species>) -> LoadResult<Self> {
        let mut index = HashMap::with_capacity(species.len());
        for (position, entry) in species.iter().enumerate() {
            let key = key(&entry.name, entry.form.as_deref());
            if index.insert(key, position).is_some() {
                anyhow::bail!("Duplicate species entry: {}", entry.label());
            }
        }

        Ok(Self { species, index })
    }

    /// Registry over the catalog shipped with the crate.
    pub fn embedded() -> LoadResult<Self> {
        Self::new(SpeciesLoader::embedded()?)
    }

    /// Looks up a species form. `None` or a blank form means the standard form.
    pub fn get(&self, name: &str, form: Option<&str>) -> Option<&Species> {
        self.index
            .get(&key(name, form))
            .map(|position| &self.species[*position])
    }

    /// All forms of a species, in catalog order.
    pub fn forms<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a Species> + 'a {
        let name = name.trim().to_lowercase();
        self.species
            .iter()
            .filter(move |entry| entry.name.to_lowercase() == name)
    }

    /// Entries whose label contains `filter` (case-insensitive).
    pub fn search<'a>(&'a self, filter: &str) -> impl Iterator<Item = &'a Species> + 'a {
        let filter = filter.trim().to_lowercase();
        self.species
            .iter()
            .filter(move |entry| entry.label().to_lowercase().contains(&filter))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Species> {
        self.species.iter()
    }

    /// Returns the number of registered species forms.
    pub fn len(&self) -> usize {
        self.species.len()
    }

    /// Returns true if no species are registered.
    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_embedded_catalog() {
        let registry = SpeciesRegistry::embedded().expect("Failed to load species catalog");
        assert!(registry.len() >= 20, "Should have at least 20 species forms");

        let venusaur = registry.get("Venusaur", None).unwrap();
        assert_eq!(venusaur.base, BaseStats::new(198, 189, 190));
        assert_eq!(venusaur.dex, 3);
    }

    #[test]
    fn lookup_is_case_insensitive_and_form_aware() {
        let registry = SpeciesRegistry::embedded().unwrap();

        let alola = registry.get("raichu", Some("ALOLA")).unwrap();
        assert_eq!(alola.base, BaseStats::new(201, 154, 155));
        assert_eq!(alola.label(), "Raichu (Alola)");

        let standard = registry.get(" Raichu ", Some("")).unwrap();
        assert_eq!(standard.form, None);

        assert!(registry.get("Raichu", Some("Galar")).is_none());
        assert!(registry.get("Missingno", None).is_none());
        assert_eq!(registry.forms("raichu").count(), 2);
    }

    #[test]
    fn search_matches_labels() {
        let registry = SpeciesRegistry::embedded().unwrap();
        let labels: Vec<_> = registry.search("saur").map(Species::label).collect();
        assert_eq!(labels, vec!["Bulbasaur", "Ivysaur", "Venusaur"]);
        assert!(registry.search("galar").all(|entry| entry.form.is_some()));
    }

    #[test]
    fn duplicates_are_rejected() {
        let content = r#"(
            species: [
                (dex: 25, name: "Pikachu", base: (attack: 112, defense: 96, stamina: 111)),
                (dex: 25, name: "pikachu", base: (attack: 1, defense: 1, stamina: 1)),
            ],
        )"#;
        let species = SpeciesLoader::parse(content).unwrap();
        let err = SpeciesRegistry::new(species).unwrap_err();
        assert!(err.to_string().contains("Duplicate species entry"));
    }

    #[test]
    fn malformed_catalog_is_an_error() {
        let err = SpeciesLoader::parse("(species: [(name: \"x\")])").unwrap_err();
        assert!(err.to_string().contains("Failed to parse species catalog RON"));
    }
}
