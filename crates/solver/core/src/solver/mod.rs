//! Stat consistency solver.
//!
//! A pure decision procedure run once per commit of an edited instance. It
//! looks at which of Level, CP, and IVs were given and either reports
//! structured errors or fills in the missing quantity:
//!
//! | Level | CP | IVs | Outcome |
//! |---|---|---|---|
//! | - | - | - | no-op |
//! | one given | | | range check, then `general` error |
//! | ✓ | ✓ | - | search all 4096 IV triples |
//! | ✓ | - | ✓ | compute CP |
//! | - | ✓ | ✓ | search every table level |
//! | ✓ | ✓ | ✓ | consistency check within tolerance |
//!
//! Range errors are reported before any inference and suppress it.

mod request;
mod result;
mod search;

pub use request::{Field, ValidationRequest};
pub use result::{Computed, FieldErrors, ValidationResult};

use crate::config::SolverConfig;
use crate::error::StatError;
use crate::formula::{compute_cp, cp_range};
use crate::level::Level;
use crate::stats::{BaseStats, IvInput, IvTriple, StatKind};
use crate::table::{MultiplierTable, StandardMultipliers};
use search::{Matches, search_ivs, search_levels};

/// Validates `request` against the standard multiplier table.
pub fn validate(request: &ValidationRequest, base: BaseStats) -> ValidationResult {
    StatSolver::standard().validate(request, base)
}

/// Values that passed range checks.
#[derive(Debug, Default)]
struct Checked {
    level: Option<Level>,
    cp: Option<u32>,
    ivs: Option<IvTriple>,
}

/// Solver bound to a multiplier table and configuration.
#[derive(Clone, Debug)]
pub struct StatSolver<T: MultiplierTable = StandardMultipliers> {
    table: T,
    config: SolverConfig,
}

impl StatSolver<StandardMultipliers> {
    pub fn standard() -> Self {
        Self::new(StandardMultipliers, SolverConfig::default())
    }
}

impl Default for StatSolver<StandardMultipliers> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<T: MultiplierTable> StatSolver<T> {
    pub fn new(table: T, config: SolverConfig) -> Self {
        Self { table, config }
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// CP at `level`, or `None` if the table does not cover it.
    pub fn cp(&self, base: BaseStats, ivs: IvTriple, level: Level) -> Option<u32> {
        crate::formula::cp_at_level(&self.table, base, ivs, level)
    }

    /// Reconciles the given quantities.
    ///
    /// Never panics and never overwrites a caller-supplied value.
    pub fn validate(&self, request: &ValidationRequest, base: BaseStats) -> ValidationResult {
        let given = request.given();
        if given.is_empty() {
            tracing::trace!("nothing to validate");
            return ValidationResult::default();
        }

        let mut errors = FieldErrors::default();
        let checked = self.check_ranges(request, &mut errors);

        if let [only] = given.as_slice() {
            tracing::debug!("only {} given, nothing to infer", only);
            errors.general = Some(StatError::InsufficientInput { given: *only });
            return ValidationResult::failed(errors);
        }
        if !errors.is_empty() {
            tracing::debug!("range check failed: {}", errors.joined("; "));
            return ValidationResult::failed(errors);
        }

        match (checked.level, checked.cp, checked.ivs) {
            (Some(level), Some(cp), None) => self.infer_ivs(base, level, cp),
            (Some(level), None, Some(ivs)) => self.infer_cp(base, level, ivs),
            (None, Some(cp), Some(ivs)) => self.infer_level(base, cp, ivs),
            (Some(level), Some(cp), Some(ivs)) => self.check_consistency(base, level, cp, ivs),
            // At least two fields were given and all passed range checks.
            _ => ValidationResult::default(),
        }
    }

    fn check_ranges(&self, request: &ValidationRequest, errors: &mut FieldErrors) -> Checked {
        let mut checked = Checked::default();

        if let Some(value) = request.level {
            match Level::from_f64(value).filter(|level| self.table.entry(*level).is_some()) {
                Some(level) => checked.level = Some(level),
                None => errors.report(
                    Field::Level,
                    StatError::LevelOutOfRange {
                        value,
                        min: self.table.min_level(),
                        max: self.table.max_level(),
                    },
                ),
            }
        }

        if let Some(value) = request.cp {
            match u32::try_from(value).ok().filter(|cp| *cp > 0) {
                Some(cp) => checked.cp = Some(cp),
                None => errors.report(Field::Cp, StatError::CpOutOfRange { value }),
            }
        }

        if !request.ivs.is_empty() {
            match check_ivs(&request.ivs) {
                Ok(ivs) => checked.ivs = Some(ivs),
                Err(error) => errors.report(Field::Ivs, error),
            }
        }

        checked
    }

    fn infer_ivs(&self, base: BaseStats, level: Level, cp: u32) -> ValidationResult {
        let Some(multiplier) = self.table.entry(level) else {
            return ValidationResult::failed_on(Field::Level, self.level_error(level));
        };

        let matches = search_ivs(base, multiplier, cp);
        tracing::debug!(
            "IV search at level {} for CP {}: {} match(es)",
            level,
            cp,
            matches.count()
        );

        match matches {
            Matches::Unique(ivs) => ValidationResult::computed(Computed {
                ivs: Some(ivs),
                ..Computed::default()
            }),
            Matches::None => {
                let (min_cp, max_cp) = cp_range(&self.table, base, level).unwrap_or((0, 0));
                ValidationResult::failed_on(
                    Field::Ivs,
                    StatError::NoIvMatch {
                        level,
                        cp,
                        min_cp,
                        max_cp,
                    },
                )
            }
            Matches::Many { count, sample } => ValidationResult::failed_on(
                Field::Ivs,
                StatError::AmbiguousIvs {
                    level,
                    cp,
                    count,
                    sample,
                },
            ),
        }
    }

    fn infer_cp(&self, base: BaseStats, level: Level, ivs: IvTriple) -> ValidationResult {
        match self.table.entry(level) {
            Some(multiplier) => {
                let cp = compute_cp(base, ivs, multiplier);
                tracing::debug!("computed CP {} at level {} with IVs {}", cp, level, ivs);
                ValidationResult::computed(Computed {
                    cp: Some(cp),
                    ..Computed::default()
                })
            }
            None => ValidationResult::failed_on(Field::Level, self.level_error(level)),
        }
    }

    fn infer_level(&self, base: BaseStats, cp: u32, ivs: IvTriple) -> ValidationResult {
        let matches = search_levels(&self.table, base, ivs, cp);
        tracing::debug!(
            "level search for CP {} with IVs {}: {} match(es)",
            cp,
            ivs,
            matches.count()
        );

        match matches {
            Matches::Unique(level) => ValidationResult::computed(Computed {
                level: Some(level),
                ..Computed::default()
            }),
            Matches::None => {
                ValidationResult::failed_on(Field::Level, StatError::NoLevelMatch { cp, ivs })
            }
            Matches::Many { count, sample } => ValidationResult::failed_on(
                Field::Level,
                StatError::AmbiguousLevels {
                    cp,
                    ivs,
                    count,
                    sample,
                },
            ),
        }
    }

    fn check_consistency(
        &self,
        base: BaseStats,
        level: Level,
        provided: u32,
        ivs: IvTriple,
    ) -> ValidationResult {
        let Some(multiplier) = self.table.entry(level) else {
            return ValidationResult::failed_on(Field::Level, self.level_error(level));
        };

        let calculated = compute_cp(base, ivs, multiplier);
        if (f64::from(calculated) - f64::from(provided)).abs() > self.config.cp_tolerance {
            tracing::debug!("CP {} disagrees with calculated {}", provided, calculated);
            return ValidationResult::failed_on(
                Field::Cp,
                StatError::CpMismatch {
                    provided,
                    calculated,
                    level,
                    ivs,
                },
            );
        }

        ValidationResult::default()
    }

    fn level_error(&self, level: Level) -> StatError {
        StatError::LevelOutOfRange {
            value: level.as_f64(),
            min: self.table.min_level(),
            max: self.table.max_level(),
        }
    }
}

fn check_ivs(input: &IvInput) -> Result<IvTriple, StatError> {
    if !input.is_complete() {
        return Err(StatError::IncompleteIvs {
            missing: input.missing(),
        });
    }

    let component = |stat: StatKind| -> Result<u8, StatError> {
        let value = input.get(stat).unwrap_or_default();
        u8::try_from(value)
            .ok()
            .filter(|iv| *iv <= SolverConfig::IV_MAX)
            .ok_or(StatError::IvOutOfRange { stat, value })
    };

    Ok(IvTriple {
        attack: component(StatKind::Attack)?,
        defense: component(StatKind::Defense)?,
        stamina: component(StatKind::Stamina)?,
    })
}
