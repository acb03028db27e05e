//! List the species catalog.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use console::style;
use solver_content::{ContentFactory, Species, SpeciesRegistry};

use super::print_json;
use crate::config::CliConfig;

/// List species and their base stats
#[derive(Parser)]
pub struct ListSpecies {
    /// Only show entries whose name or form contains this text
    #[arg(short, long, value_name = "TEXT")]
    filter: Option<String>,

    /// Print the catalog as JSON
    #[arg(long)]
    json: bool,
}

impl ListSpecies {
    pub fn execute(self, config: &CliConfig) -> Result<ExitCode> {
        let factory = ContentFactory::new(config.data_dir());
        let registry = factory.load_species()?;
        let entries = select(&registry, self.filter.as_deref());

        if self.json {
            print_json(&entries)?;
            return Ok(ExitCode::SUCCESS);
        }

        if entries.is_empty() {
            println!("{}", style("No matching species").yellow());
            return Ok(ExitCode::SUCCESS);
        }

        println!(
            "{}",
            style(format!("{:>4}  {:<20} {:>4} {:>4} {:>4}", "#", "Species", "ATK", "DEF", "STA"))
                .bold()
        );
        for species in &entries {
            println!(
                "{:>4}  {:<20} {:>4} {:>4} {:>4}",
                species.dex,
                species.label(),
                species.base.attack,
                species.base.defense,
                species.base.stamina
            );
        }

        Ok(ExitCode::SUCCESS)
    }
}

fn select<'a>(registry: &'a SpeciesRegistry, filter: Option<&str>) -> Vec<&'a Species> {
    match filter {
        Some(filter) => registry.search(filter).collect(),
        None => registry.iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_narrows_the_catalog() {
        let registry = SpeciesRegistry::embedded().unwrap();

        assert_eq!(select(&registry, None).len(), registry.len());

        let alola: Vec<_> = select(&registry, Some("alola"))
            .into_iter()
            .map(Species::label)
            .collect();
        assert_eq!(alola, vec!["Rattata (Alola)", "Raichu (Alola)"]);

        assert!(select(&registry, Some("digimon")).is_empty());
    }
}
