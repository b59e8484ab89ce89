use std::collections::HashSet;

use seabattle::{Board, ShotOutcome, Strategy, Targeting, FLEET, GRID};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Shots the given strategy needs to sink a randomly placed standard fleet.
fn shots_to_sink(strategy: Strategy, seed: u64) -> usize {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new();
    board.place_fleet(&mut rng, &FLEET).unwrap();
    let mut targeting = Targeting::new(strategy);
    let mut fired = HashSet::new();

    while !board.all_ships_sunk() {
        let target = targeting.next_target(&mut rng).unwrap();
        assert!(fired.insert(target), "{:?} fired twice", target);
        let (outcome, ship) = board.receive_shot(target.0, target.1).unwrap();
        assert_ne!(outcome, ShotOutcome::Repeat);
        let sunk = match (outcome, ship) {
            (ShotOutcome::Sunk, Some(idx)) => board.ship(idx).unwrap().positions().to_vec(),
            _ => Vec::new(),
        };
        targeting.observe(target, outcome, &sunk);
    }
    fired.len()
}

fn average(strategy: Strategy, games: u64) -> f64 {
    let total: usize = (0..games).map(|seed| shots_to_sink(strategy, seed)).sum();
    total as f64 / games as f64
}

#[test]
fn test_random_targeting_always_finishes() {
    for seed in 0..20 {
        let shots = shots_to_sink(Strategy::Random, seed);
        assert!(shots >= FLEET.iter().sum::<usize>() && shots <= GRID * GRID);
    }
    // the last of 20 ship cells among 100 lands around shot 96 on average
    let avg = average(Strategy::Random, 30);
    assert!(avg > 80.0, "avg shots {avg}");
}

#[test]
fn test_hunting_beats_random() {
    let random = average(Strategy::Random, 30);
    let hunt = average(Strategy::Hunt, 30);
    assert!(hunt < random, "hunt {hunt} vs random {random}");
}
