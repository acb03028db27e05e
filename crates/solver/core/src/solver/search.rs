//! Exhaustive searches over the two bounded inference domains.
//!
//! Both searches visit every candidate and keep the zero / one / many
//! distinction intact. Neither ever picks among several matches.

use arrayvec::ArrayVec;

use crate::config::SolverConfig;
use crate::formula::compute_cp;
use crate::level::Level;
use crate::stats::{BaseStats, IvTriple};
use crate::table::{Multiplier, MultiplierTable};

/// Outcome of a search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Matches<T> {
    None,
    Unique(T),
    Many {
        count: usize,
        sample: ArrayVec<T, { SolverConfig::AMBIGUITY_SAMPLE }>,
    },
}

impl<T> FromIterator<T> for Matches<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut sample = ArrayVec::new();
        let mut count = 0usize;
        for candidate in iter {
            count += 1;
            if !sample.is_full() {
                sample.push(candidate);
            }
        }

        match count {
            0 => Matches::None,
            1 => match sample.pop() {
                Some(only) => Matches::Unique(only),
                None => Matches::None,
            },
            _ => Matches::Many { count, sample },
        }
    }
}

impl<T> Matches<T> {
    pub(crate) fn count(&self) -> usize {
        match self {
            Matches::None => 0,
            Matches::Unique(_) => 1,
            Matches::Many { count, .. } => *count,
        }
    }
}

/// Search A: every IV triple whose CP at `multiplier` equals `cp`.
pub(crate) fn search_ivs(base: BaseStats, multiplier: Multiplier, cp: u32) -> Matches<IvTriple> {
    IvTriple::all()
        .filter(|ivs| compute_cp(base, *ivs, multiplier) == cp)
        .collect()
}

/// Search B: every table level at which `ivs` produce `cp`.
pub(crate) fn search_levels<T: MultiplierTable + ?Sized>(
    table: &T,
    base: BaseStats,
    ivs: IvTriple,
    cp: u32,
) -> Matches<Level> {
    table
        .entries()
        .iter()
        .filter(|multiplier| compute_cp(base, ivs, **multiplier) == cp)
        .map(|multiplier| multiplier.level)
        .collect()
}
