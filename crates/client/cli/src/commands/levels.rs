//! Print the level ladder with its CP multipliers.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use console::style;
use solver_content::ContentFactory;
use solver_core::{Multiplier, MultiplierTable};

use super::print_json;
use crate::config::CliConfig;

/// Print every level and its CP multiplier
#[derive(Parser)]
pub struct Levels {
    /// Only show whole levels
    #[arg(long)]
    whole: bool,

    /// Print the table as JSON
    #[arg(long)]
    json: bool,
}

impl Levels {
    pub fn execute(self, config: &CliConfig) -> Result<ExitCode> {
        let factory = ContentFactory::new(config.data_dir());
        let table = factory.load_multipliers()?;
        let rows = select(&table, self.whole);

        if self.json {
            print_json(&rows)?;
            return Ok(ExitCode::SUCCESS);
        }

        println!("{}", style(format!("{:>6}  {}", "Level", "Multiplier")).bold());
        for row in rows {
            println!("{:>6}  {:.10}", row.level.to_string(), row.value);
        }

        Ok(ExitCode::SUCCESS)
    }
}

fn select<T: MultiplierTable>(table: &T, whole: bool) -> Vec<Multiplier> {
    table
        .entries()
        .iter()
        .filter(|entry| !whole || !entry.level.is_half())
        .copied()
        .collect()
}
