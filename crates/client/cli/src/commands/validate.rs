//! Validate a Level / CP / IV combination and fill in what is missing.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use console::style;
use serde::Serialize;
use solver_content::{ContentFactory, Species};
use solver_core::{
    BaseStats, Computed, FieldErrors, FormInput, InstanceStats, MultiplierTable, SolverError,
    StatSolver,
};

use super::{SpeciesArgs, print_json};
use crate::config::CliConfig;

/// Validate stats for a species, inferring the missing value
#[derive(Parser)]
pub struct Validate {
    #[command(flatten)]
    species: SpeciesArgs,

    /// Level (1 to 51 in half-level steps)
    #[arg(short, long, value_name = "LEVEL")]
    level: Option<String>,

    /// Combat power
    #[arg(short, long, value_name = "CP")]
    cp: Option<String>,

    /// Attack IV (0 to 15)
    #[arg(short, long, value_name = "IV")]
    attack: Option<String>,

    /// Defense IV (0 to 15)
    #[arg(short, long, value_name = "IV")]
    defense: Option<String>,

    /// Stamina IV (0 to 15)
    #[arg(short, long, value_name = "IV")]
    stamina: Option<String>,

    /// Print the verdict as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct ErrorEntry {
    field: &'static str,
    code: &'static str,
    kind: &'static str,
    message: String,
}

#[derive(Debug, Serialize)]
struct ValidateReport {
    species: String,
    base: BaseStats,
    valid: bool,
    errors: Vec<ErrorEntry>,
    computed: Computed,
    stats: Option<InstanceStats>,
}

impl Validate {
    pub fn execute(self, config: &CliConfig) -> Result<ExitCode> {
        let factory = ContentFactory::new(config.data_dir());
        let registry = factory.load_species()?;
        let species = self.species.resolve(&registry)?;
        let solver = factory.build_solver()?;

        let report = build_report(&solver, species, &self.form_input());
        tracing::info!(
            species = %report.species,
            valid = report.valid,
            errors = report.errors.len(),
            "validated stats"
        );

        if self.json {
            print_json(&report)?;
        } else {
            print_text(&report);
        }

        Ok(if report.valid {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        })
    }

    fn form_input(&self) -> FormInput {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        FormInput {
            level: text(&self.level),
            cp: text(&self.cp),
            attack: text(&self.attack),
            defense: text(&self.defense),
            stamina: text(&self.stamina),
        }
    }
}

fn build_report<T: MultiplierTable>(
    solver: &StatSolver<T>,
    species: &Species,
    form: &FormInput,
) -> ValidateReport {
    let (errors, computed, stats) = match form.parse() {
        Ok(request) => {
            let result = solver.validate(&request, species.base);
            let computed = result.computed;
            match InstanceStats::merge(&request, result) {
                Ok(stats) => (FieldErrors::default(), computed, Some(stats)),
                Err(errors) => (errors, Computed::default(), None),
            }
        }
        Err(errors) => (errors, Computed::default(), None),
    };

    let errors: Vec<ErrorEntry> = errors
        .iter()
        .map(|(field, error)| ErrorEntry {
            field,
            code: error.error_code(),
            kind: error.kind().into(),
            message: error.to_string(),
        })
        .collect();

    ValidateReport {
        species: species.label(),
        base: species.base,
        valid: errors.is_empty(),
        errors,
        computed,
        stats,
    }
}

fn print_text(report: &ValidateReport) {
    println!(
        "{} {}",
        style(&report.species).bold().cyan(),
        style(format!("(base {})", report.base)).dim()
    );

    if !report.valid {
        for error in &report.errors {
            println!("  {} {}", style("✗").red().bold(), error.message);
        }
        return;
    }

    let Some(stats) = report.stats else {
        return;
    };
    let row = |label: &str, value: Option<String>, computed: bool| {
        let value = value.unwrap_or_else(|| "-".to_string());
        if computed {
            println!(
                "  {:<6} {} {}",
                label,
                style(value).green().bold(),
                style("(computed)").dim()
            );
        } else {
            println!("  {:<6} {}", label, value);
        }
    };

    row(
        "Level",
        stats.level.map(|level| level.to_string()),
        report.computed.level.is_some(),
    );
    row(
        "CP",
        stats.cp.map(|cp| cp.to_string()),
        report.computed.cp.is_some(),
    );
    row(
        "IVs",
        stats.ivs.map(|ivs| format!("{} ({}%)", ivs, ivs.percent())),
        report.computed.ivs.is_some(),
    );
}
