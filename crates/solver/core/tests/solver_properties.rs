use solver_core::{
    BaseStats, ErrorKind, IvTriple, Level, MultiplierTable, SolverConfig, SolverError,
    StandardMultipliers, StatError, ValidationRequest, cp_at_level, multiplier_for, validate,
};

/// Asymmetric mid-tier species used throughout.
const BASE: BaseStats = BaseStats::new(198, 189, 190);

fn level(value: f64) -> Level {
    Level::from_f64(value).expect("test level should be on the ladder")
}

fn ivs(attack: u8, defense: u8, stamina: u8) -> IvTriple {
    IvTriple::new(attack, defense, stamina).expect("test IVs should be in range")
}

fn cp(ivs: IvTriple, at: Level) -> u32 {
    cp_at_level(&StandardMultipliers, BASE, ivs, at).expect("standard table covers the ladder")
}

fn request(at: Option<Level>, cp: Option<u32>, ivs: Option<IvTriple>) -> ValidationRequest {
    ValidationRequest::from_known(at, cp, ivs)
}

/// A coarse grid over the ladder and the IV cube.
fn grid() -> impl Iterator<Item = (Level, IvTriple)> {
    Level::ladder().step_by(10).flat_map(|at| {
        IvTriple::all()
            .filter(|ivs| ivs.attack() % 5 == 0 && ivs.defense() % 5 == 0 && ivs.stamina() % 5 == 0)
            .map(move |ivs| (at, ivs))
    })
}

#[test]
fn concrete_scenario_level_twenty_five_perfect() {
    assert_eq!(multiplier_for(25.0), Some(0.667934));

    let calculated = cp(IvTriple::PERFECT, level(25.0));
    assert_eq!(calculated, 1943);

    let result = validate(&request(Some(level(25.0)), Some(calculated), None), BASE);
    assert!(result.is_valid(), "unexpected errors: {}", result.errors);
    assert_eq!(result.computed.ivs, Some(IvTriple::PERFECT));
}

#[test]
fn search_a_round_trips_unambiguous_cases() {
    let cases = [
        (level(25.0), ivs(4, 0, 0), 1707),
        (level(40.0), ivs(0, 2, 1), 2362),
        (level(10.0), ivs(15, 10, 15), 767),
        (level(51.0), ivs(7, 0, 0), 2775),
        (level(10.0), IvTriple::PERFECT, 777),
        (level(51.0), IvTriple::PERFECT, 3112),
    ];

    for (at, original, expected_cp) in cases {
        let calculated = cp(original, at);
        assert_eq!(calculated, expected_cp, "CP for {original} at level {at}");

        let result = validate(&request(Some(at), Some(calculated), None), BASE);
        assert_eq!(
            result.computed.ivs,
            Some(original),
            "level {at}, CP {calculated}: {}",
            result.errors
        );
    }
}

#[test]
fn search_a_never_guesses() {
    for (at, original) in grid() {
        let result = validate(&request(Some(at), Some(cp(original, at)), None), BASE);
        match (&result.computed.ivs, &result.errors.ivs) {
            (Some(found), None) => assert_eq!(*found, original),
            (None, Some(StatError::AmbiguousIvs { count, .. })) => assert!(*count > 1),
            other => panic!("level {at}, IVs {original}: unexpected {other:?}"),
        }
    }
}

#[test]
fn search_b_round_trips() {
    for at in Level::ladder() {
        for original in [ivs(0, 15, 7), IvTriple::PERFECT, ivs(4, 0, 0), ivs(9, 12, 1)] {
            let calculated = cp(original, at);
            let result = validate(&request(None, Some(calculated), Some(original)), BASE);
            match (&result.computed.level, &result.errors.level) {
                (Some(found), None) => assert_eq!(*found, at),
                (None, Some(error)) => {
                    assert_eq!(error.kind(), ErrorKind::AmbiguousInference, "{error}")
                }
                other => panic!("level {at}, IVs {original}: unexpected {other:?}"),
            }
        }
    }

    let result = validate(&request(None, Some(2479), Some(ivs(0, 15, 7))), BASE);
    assert_eq!(result.computed.level, Some(level(40.0)));
}

#[test]
fn consistency_check_never_false_positive() {
    for (at, original) in grid() {
        let result = validate(&request(Some(at), Some(cp(original, at)), Some(original)), BASE);
        assert!(result.is_valid(), "level {at}, IVs {original}: {}", result.errors);
        assert!(result.computed.is_empty());
    }
}

#[test]
fn computed_cp_matches_formula() {
    for (at, original) in grid() {
        let result = validate(&request(Some(at), None, Some(original)), BASE);
        assert_eq!(result.computed.cp, Some(cp(original, at)));
    }
}

#[test]
fn monotonicity_boundary() {
    let lowest = cp(IvTriple::ZERO, Level::MIN);
    let highest = cp(IvTriple::PERFECT, Level::MAX);
    assert!(lowest >= SolverConfig::MIN_CP);
    assert!(highest > lowest);

    let tiny = BaseStats::new(1, 1, 1);
    let floor = cp_at_level(&StandardMultipliers, tiny, IvTriple::ZERO, Level::MIN);
    assert_eq!(floor, Some(SolverConfig::MIN_CP));
}

#[test]
fn ambiguity_is_reported_not_resolved() {
    // Tiny base stats pin every triple to the CP floor at level 1.
    let tiny = BaseStats::new(10, 10, 10);
    let result = validate(
        &request(Some(Level::MIN), Some(SolverConfig::MIN_CP), None),
        tiny,
    );
    let Some(StatError::AmbiguousIvs { count, .. }) = &result.errors.ivs else {
        panic!("expected ambiguous IVs, got {:?}", result.errors);
    };
    assert_eq!(*count, SolverConfig::IV_COMBINATIONS);
    assert_eq!(result.computed.ivs, None);

    let result = validate(&request(Some(level(25.0)), Some(1851), None), BASE);
    assert_eq!(
        result.errors.ivs.as_ref().map(SolverError::kind),
        Some(ErrorKind::AmbiguousInference)
    );
    assert_eq!(result.computed.ivs, None);
}

#[test]
fn insufficient_input_shapes() {
    let result = validate(&ValidationRequest::new(), BASE);
    assert!(result.errors.is_empty());
    assert!(result.computed.is_empty());

    let result = validate(&ValidationRequest::new().with_level(20.0), BASE);
    assert_eq!(
        result.errors.general.as_ref().map(SolverError::error_code),
        Some("STAT_INSUFFICIENT_INPUT")
    );
    assert!(result.computed.is_empty());
}

#[test]
fn table_is_monotonic() {
    let entries = StandardMultipliers.entries();
    assert!(entries.windows(2).all(|pair| pair[0].value < pair[1].value));
    assert_eq!(entries.len(), Level::ladder().len());
}
