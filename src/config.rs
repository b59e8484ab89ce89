//! Fixed game parameters.

/// Width and height of each grid.
pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 10;
/// Ship lengths placed for each side, in placement order.
pub const FLEET: [usize; NUM_SHIPS] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 4 + 3 + 3 + 2 + 2 + 2 + 1 + 1 + 1 + 1;

/// Single random placement attempts allowed for one ship before the fleet
/// is cleared and placed again from scratch.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;
/// Fleet restarts allowed before placement is reported as unsatisfiable.
pub const MAX_FLEET_RESTARTS: usize = 32;

/// [`BOARD_SIZE`] as a `usize` for indexing.
pub const GRID: usize = BOARD_SIZE as usize;

/// Display name for a ship of the given length.
pub fn ship_class(length: usize) -> &'static str {
    match length {
        1 => "Patrol boat",
        2 => "Destroyer",
        3 => "Cruiser",
        4 => "Battleship",
        _ => "Carrier",
    }
}
