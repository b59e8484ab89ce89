use std::collections::HashSet;

use seabattle::{SelectorError, ShotOutcome, Strategy, TargetSelector, Targeting, GRID};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_pool_starts_full() {
    let selector = TargetSelector::new();
    assert_eq!(selector.remaining(), GRID * GRID);
    assert!(selector.contains((0, 0)));
    assert!(selector.contains((GRID - 1, GRID - 1)));
}

#[test]
fn test_exhausted_pool_fails_loudly() {
    let mut rng = SmallRng::seed_from_u64(9);
    let mut selector = TargetSelector::new();
    for _ in 0..GRID * GRID {
        selector.pick(&mut rng).unwrap();
    }
    assert!(selector.is_empty());
    assert_eq!(selector.pick(&mut rng), Err(SelectorError::ExhaustedPool));

    selector.reset();
    assert_eq!(selector.remaining(), GRID * GRID);
}

#[test]
fn test_same_seed_same_sequence() {
    let draw = |seed| {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut selector = TargetSelector::new();
        (0..10).map(|_| selector.pick(&mut rng).unwrap()).collect::<Vec<_>>()
    };
    assert_eq!(draw(11), draw(11));
}

proptest! {
    #[test]
    fn pool_never_repeats_and_empties(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut selector = TargetSelector::new();
        let mut seen = HashSet::new();
        for i in 0..GRID * GRID {
            let coord = selector.pick(&mut rng).unwrap();
            prop_assert!(coord.0 < GRID && coord.1 < GRID);
            prop_assert!(seen.insert(coord), "{:?} picked twice", coord);
            prop_assert_eq!(selector.remaining(), GRID * GRID - i - 1);
        }
        prop_assert!(selector.is_empty());
    }

    #[test]
    fn hunting_never_repeats(seed in any::<u64>(), hit_rate in 0.0f64..0.6) {
        use rand::Rng;
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut targeting = Targeting::new(Strategy::Hunt);
        let mut seen = HashSet::new();
        loop {
            let coord = match targeting.next_target(&mut rng) {
                Ok(coord) => coord,
                Err(SelectorError::ExhaustedPool) => break,
            };
            prop_assert!(seen.insert(coord), "{:?} picked twice", coord);
            // fake feedback; the pool must hold up whatever it is told
            let outcome = if rng.random_bool(hit_rate) {
                ShotOutcome::Hit
            } else {
                ShotOutcome::Miss
            };
            targeting.observe(coord, outcome, &[]);
        }
        prop_assert!(seen.len() <= GRID * GRID);
        prop_assert!(targeting.pool().is_empty());
    }
}
