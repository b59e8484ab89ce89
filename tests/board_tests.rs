use seabattle::{
    Board, BoardError, CellState, Orientation, ShotOutcome, BOARD_SIZE, FLEET, GRID,
    TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_single_battleship_hit_hit_hit_sunk() {
    let mut board = Board::new();
    let idx = board.place_ship(4, 0, 0, Orientation::Horizontal).unwrap();
    assert_eq!(idx, 0);

    for c in 0..3 {
        assert_eq!(board.receive_shot(0, c).unwrap(), (ShotOutcome::Hit, Some(0)));
        assert!(!board.all_ships_sunk());
    }
    assert_eq!(board.receive_shot(0, 3).unwrap(), (ShotOutcome::Sunk, Some(0)));
    assert!(board.all_ships_sunk());
    assert_eq!(board.remaining_ships(), 0);
}

#[test]
fn test_miss_then_repeat() {
    let mut board = Board::new();
    board.place_ship(1, 0, 0, Orientation::Horizontal).unwrap();
    assert_eq!(board.receive_shot(5, 5).unwrap(), (ShotOutcome::Miss, None));
    assert_eq!(board.cell_state(5, 5).unwrap(), CellState::Miss);
    assert_eq!(board.receive_shot(5, 5).unwrap(), (ShotOutcome::Repeat, None));
    assert_eq!(board.cell_state(5, 5).unwrap(), CellState::Miss);
}

#[test]
fn test_repeat_on_hit_does_not_count_twice() {
    let mut board = Board::new();
    board.place_ship(2, 3, 3, Orientation::Vertical).unwrap();
    assert_eq!(board.receive_shot(3, 3).unwrap().0, ShotOutcome::Hit);
    assert_eq!(board.receive_shot(3, 3).unwrap(), (ShotOutcome::Repeat, None));
    assert_eq!(board.ship(0).unwrap().hit_count(), 1);
    assert_eq!(board.receive_shot(4, 3).unwrap().0, ShotOutcome::Sunk);
}

#[test]
fn test_out_of_bounds_shots_are_rejected() {
    let mut board = Board::new();
    let n = BOARD_SIZE as usize;
    assert_eq!(
        board.receive_shot(n, 0).unwrap_err(),
        BoardError::OutOfBounds { row: n, col: 0 }
    );
    assert_eq!(
        board.cell(0, n).unwrap_err(),
        BoardError::OutOfBounds { row: 0, col: n }
    );
}

#[test]
fn test_cells_record_their_owner() {
    let mut board = Board::new();
    board.place_ship(3, 6, 2, Orientation::Horizontal).unwrap();
    board.place_ship(2, 0, 9, Orientation::Vertical).unwrap();
    for c in 2..5 {
        let cell = board.cell(6, c).unwrap();
        assert_eq!(cell.state(), CellState::Occupied);
        assert_eq!(cell.owner(), Some(0));
    }
    assert_eq!(board.cell(1, 9).unwrap().owner(), Some(1));
    assert_eq!(board.cell(5, 5).unwrap().owner(), None);
}

#[test]
fn test_empty_fleet_is_not_destroyed() {
    assert!(!Board::new().all_ships_sunk());
}

#[test]
fn test_place_fleet_standard_layout() {
    let mut board = Board::new();
    let mut rng = SmallRng::seed_from_u64(42);
    board.place_fleet(&mut rng, &FLEET).unwrap();

    let lengths: Vec<usize> = board.ships().iter().map(|s| s.len()).collect();
    assert_eq!(lengths, FLEET.to_vec());
    assert_eq!(board.ship_map().len(), TOTAL_SHIP_CELLS);
    let occupied = (0..GRID)
        .flat_map(|r| (0..GRID).map(move |c| (r, c)))
        .filter(|&(r, c)| board.cell_state(r, c).unwrap() == CellState::Occupied)
        .count();
    assert_eq!(occupied, TOTAL_SHIP_CELLS);
}

#[test]
fn test_place_fleet_replaces_previous_fleet() {
    let mut board = Board::new();
    let mut rng = SmallRng::seed_from_u64(7);
    board.place_fleet(&mut rng, &FLEET).unwrap();
    board.receive_shot(0, 0).unwrap();
    board.place_fleet(&mut rng, &[2]).unwrap();
    assert_eq!(board.ships().len(), 1);
    assert_eq!(board.ship_map().len(), 2);
    assert_ne!(board.cell_state(0, 0).unwrap(), CellState::Miss);
}

#[test]
fn test_place_fleet_rejects_invalid_lengths() {
    let mut board = Board::new();
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(
        board.place_fleet(&mut rng, &[3, 0]).unwrap_err(),
        BoardError::InvalidShipLength(0)
    );
    assert_eq!(
        board.random_placement(&mut rng, GRID + 1).unwrap_err(),
        BoardError::InvalidShipLength(GRID + 1)
    );
}

#[test]
fn test_unsatisfiable_fleet_fails_instead_of_spinning() {
    // At most five full-length ships fit, one on every other row.
    let mut board = Board::new();
    let mut rng = SmallRng::seed_from_u64(3);
    let err = board.place_fleet(&mut rng, &[10; 6]).unwrap_err();
    assert!(matches!(err, BoardError::UnableToPlaceFleet { .. }));
    assert!(board.ships().is_empty());
}

#[test]
fn test_perimeter_reveal_marks_only_water() {
    let mut board = Board::new();
    board.place_ship(2, 0, 0, Orientation::Horizontal).unwrap();
    board.place_ship(1, 2, 0, Orientation::Horizontal).unwrap();
    board.receive_shot(1, 1).unwrap();

    // afloat ships are left alone
    assert!(board.mark_perimeter(0).unwrap().is_empty());

    board.receive_shot(0, 0).unwrap();
    board.receive_shot(0, 1).unwrap();
    let mut revealed = board.mark_perimeter(0).unwrap();
    revealed.sort();
    assert_eq!(revealed, vec![(0, 2), (1, 0), (1, 2)]);
    assert_eq!(board.cell_state(2, 0).unwrap(), CellState::Occupied);
    assert_eq!(board.mark_perimeter(5).unwrap_err(), BoardError::InvalidIndex);
}
