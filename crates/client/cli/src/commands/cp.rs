//! Compute CP directly from level and IVs.

use std::process::ExitCode;

use anyhow::{Result, anyhow};
use clap::Parser;
use console::style;
use serde::Serialize;
use solver_content::{ContentFactory, Species};
use solver_core::{IvTriple, Level, MultiplierTable, StatSolver, cp_range};

use super::{SpeciesArgs, print_json};
use crate::config::CliConfig;

/// Compute the CP of a species at a level with the given IVs
#[derive(Parser)]
pub struct Cp {
    #[command(flatten)]
    species: SpeciesArgs,

    /// Level (1 to 51 in half-level steps)
    #[arg(short, long, value_name = "LEVEL")]
    level: Level,

    /// IVs written as attack/defense/stamina, e.g. 15/10/15
    #[arg(short, long, value_name = "A/D/S")]
    ivs: IvTriple,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct CpReport {
    species: String,
    level: Level,
    ivs: IvTriple,
    cp: u32,
    /// CP at this level with all-zero and all-fifteen IVs.
    range: (u32, u32),
}

impl Cp {
    pub fn execute(self, config: &CliConfig) -> Result<ExitCode> {
        let factory = ContentFactory::new(config.data_dir());
        let registry = factory.load_species()?;
        let species = self.species.resolve(&registry)?;
        let solver = factory.build_solver()?;

        let report = compute(&solver, species, self.level, self.ivs)?;

        if self.json {
            print_json(&report)?;
        } else {
            println!(
                "{} {} {} {}",
                style(&report.species).bold().cyan(),
                style(format!("L{}", report.level)).yellow(),
                report.ivs,
                style(format!("CP {}", report.cp)).green().bold()
            );
            println!(
                "  {}",
                style(format!(
                    "CP range at level {}: {} to {}",
                    report.level, report.range.0, report.range.1
                ))
                .dim()
            );
        }

        Ok(ExitCode::SUCCESS)
    }
}

fn compute<T: MultiplierTable>(
    solver: &StatSolver<T>,
    species: &Species,
    level: Level,
    ivs: IvTriple,
) -> Result<CpReport> {
    let table = solver.table();
    let outside_table = || {
        anyhow!(
            "Level {} is outside the multiplier table ({} to {})",
            level,
            table.min_level(),
            table.max_level()
        )
    };

    let cp = solver
        .cp(species.base, ivs, level)
        .ok_or_else(outside_table)?;
    let range = cp_range(table, species.base, level).ok_or_else(outside_table)?;

    Ok(CpReport {
        species: species.label(),
        level,
        ivs,
        cp,
        range,
    })
}
