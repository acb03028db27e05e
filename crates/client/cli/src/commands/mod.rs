//! Subcommand implementations.

mod cp;
mod levels;
mod species;
mod validate;

pub use cp::Cp;
pub use levels::Levels;
pub use species::ListSpecies;
pub use validate::Validate;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use solver_content::{Species, SpeciesRegistry};

/// Species selection shared by commands that need base stats.
#[derive(Args, Debug, Clone)]
pub struct SpeciesArgs {
    /// Species name (case-insensitive)
    #[arg(long, value_name = "NAME")]
    pub species: String,

    /// Form name, e.g. Alola (omit for the standard form)
    #[arg(long, value_name = "FORM")]
    pub form: Option<String>,
}

impl SpeciesArgs {
    pub fn resolve<'a>(&self, registry: &'a SpeciesRegistry) -> Result<&'a Species> {
        if let Some(species) = registry.get(&self.species, self.form.as_deref()) {
            return Ok(species);
        }

        let forms: Vec<String> = registry.forms(&self.species).map(Species::label).collect();
        if forms.is_empty() {
            anyhow::bail!(
                "Unknown species: {}\n\nHint: run `stat-solver species` to list the catalog",
                self.species
            );
        }
        anyhow::bail!(
            "Unknown form {:?} for {}\n\nAvailable: {}",
            self.form.as_deref().unwrap_or_default(),
            self.species,
            forms.join(", ")
        )
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(species: &str, form: Option<&str>) -> SpeciesArgs {
        SpeciesArgs {
            species: species.to_string(),
            form: form.map(str::to_string),
        }
    }

    #[test]
    fn resolves_species_and_forms() {
        let registry = SpeciesRegistry::embedded().unwrap();
        assert_eq!(args("venusaur", None).resolve(&registry).unwrap().dex, 3);
        assert_eq!(
            args("Meowth", Some("galar")).resolve(&registry).unwrap().label(),
            "Meowth (Galar)"
        );
    }

    #[test]
    fn unknown_species_and_forms_are_explained() {
        let registry = SpeciesRegistry::embedded().unwrap();

        let err = args("Agumon", None).resolve(&registry).unwrap_err();
        assert!(err.to_string().contains("Unknown species"));

        let err = args("Raichu", Some("Galar")).resolve(&registry).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Unknown form"));
        assert!(message.contains("Raichu (Alola)"));
    }
}
