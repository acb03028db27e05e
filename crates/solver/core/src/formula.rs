//! CP formula.
//!
//! ```text
//! CP = max(10, floor((Atk + ivAtk) × √(Def + ivDef) × √(Sta + ivSta) × m² / 10))
//! ```
//!
//! `m` is the level multiplier. The formula is monotonically non-decreasing in
//! every IV and in the multiplier.

use crate::config::SolverConfig;
use crate::level::Level;
use crate::stats::{BaseStats, IvTriple};
use crate::table::{Multiplier, MultiplierTable};

/// Computes CP for concrete IVs at a table entry.
///
/// Results below [`SolverConfig::MIN_CP`] are clamped up to it.
pub fn compute_cp(base: BaseStats, ivs: IvTriple, multiplier: Multiplier) -> u32 {
    let (attack, defense, stamina) = base.with_ivs(ivs);
    let m = multiplier.value;
    let raw = f64::from(attack) * f64::from(defense).sqrt() * f64::from(stamina).sqrt() * m * m
        / 10.0;
    (raw.floor() as u32).max(SolverConfig::MIN_CP)
}

/// Computes CP at `level`, or `None` if the table does not cover it.
pub fn cp_at_level<T: MultiplierTable + ?Sized>(
    table: &T,
    base: BaseStats,
    ivs: IvTriple,
    level: Level,
) -> Option<u32> {
    table
        .entry(level)
        .map(|multiplier| compute_cp(base, ivs, multiplier))
}

/// Inclusive CP bounds reachable at `level` (all-zero to all-fifteen IVs).
pub fn cp_range<T: MultiplierTable + ?Sized>(
    table: &T,
    base: BaseStats,
    level: Level,
) -> Option<(u32, u32)> {
    let multiplier = table.entry(level)?;
    Some((
        compute_cp(base, IvTriple::ZERO, multiplier),
        compute_cp(base, IvTriple::PERFECT, multiplier),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::StandardMultipliers;

    const BASE: BaseStats = BaseStats::new(198, 189, 190);

    fn level(value: f64) -> Level {
        Level::from_f64(value).unwrap()
    }

    fn ivs(a: u8, d: u8, s: u8) -> IvTriple {
        IvTriple::new(a, d, s).unwrap()
    }

    #[test]
    fn perfect_ivs_at_level_twenty_five() {
        // 213 × √204 × √205 × 0.667934² / 10 = 1943.3…
        assert_eq!(
            cp_at_level(&StandardMultipliers, BASE, IvTriple::PERFECT, level(25.0)),
            Some(1943)
        );
    }

    #[test]
    fn known_values_across_the_ladder() {
        let table = StandardMultipliers;
        assert_eq!(cp_at_level(&table, BASE, ivs(15, 15, 15), level(10.0)), Some(777));
        assert_eq!(cp_at_level(&table, BASE, ivs(4, 0, 0), level(25.0)), Some(1707));
        assert_eq!(cp_at_level(&table, BASE, ivs(0, 15, 7), level(40.0)), Some(2479));
        assert_eq!(cp_at_level(&table, BASE, ivs(15, 15, 15), level(51.0)), Some(3112));
        assert_eq!(cp_at_level(&table, BASE, ivs(0, 0, 0), level(1.0)), Some(33));
    }

    #[test]
    fn cp_never_drops_below_floor() {
        let tiny = BaseStats::new(10, 10, 10);
        let lowest = StandardMultipliers.entry(Level::MIN).unwrap();
        let highest = StandardMultipliers.entry(Level::MAX).unwrap();
        assert_eq!(compute_cp(tiny, IvTriple::ZERO, lowest), SolverConfig::MIN_CP);
        assert_eq!(compute_cp(tiny, IvTriple::ZERO, highest), SolverConfig::MIN_CP);
    }

    #[test]
    fn highest_level_perfect_exceeds_lowest_level_zero() {
        let table = StandardMultipliers;
        let low = cp_at_level(&table, BASE, IvTriple::ZERO, Level::MIN).unwrap();
        let high = cp_at_level(&table, BASE, IvTriple::PERFECT, Level::MAX).unwrap();
        assert!(low >= SolverConfig::MIN_CP);
        assert!(high > low);
    }

    #[test]
    fn non_decreasing_in_level() {
        let table = StandardMultipliers;
        let cps: Vec<u32> = Level::ladder()
            .map(|l| cp_at_level(&table, BASE, ivs(7, 3, 11), l).unwrap())
            .collect();
        assert!(cps.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn range_brackets_every_triple() {
        let table = StandardMultipliers;
        let at = level(25.0);
        let (min, max) = cp_range(&table, BASE, at).unwrap();
        assert_eq!((min, max), (1673, 1943));

        let multiplier = table.entry(at).unwrap();
        assert!(
            IvTriple::all()
                .map(|ivs| compute_cp(BASE, ivs, multiplier))
                .all(|cp| (min..=max).contains(&cp))
        );
    }

    #[test]
    fn deterministic() {
        let multiplier = StandardMultipliers.entry(level(33.5)).unwrap();
        let first = compute_cp(BASE, ivs(9, 12, 1), multiplier);
        for _ in 0..10 {
            assert_eq!(compute_cp(BASE, ivs(9, 12, 1), multiplier), first);
        }
    }
}
