//! A player's grid: cell states, the fleet placed on it, and shot resolution.

use alloc::vec::Vec;
use core::fmt;
use log::{debug, trace};
use rand::Rng;

use crate::common::{BoardError, Coord, ShotOutcome};
use crate::config::{GRID, MAX_FLEET_RESTARTS, MAX_PLACEMENT_ATTEMPTS};
use crate::ship::{Grid, Orientation, Ship};

/// What a single cell currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    Empty,
    Occupied,
    Miss,
    Hit,
}

/// One grid position. `owner` indexes [`Board::ships`] for ship cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    row: usize,
    col: usize,
    state: CellState,
    owner: Option<usize>,
}

impl Cell {
    const fn empty(row: usize, col: usize) -> Self {
        Cell {
            row,
            col,
            state: CellState::Empty,
            owner: None,
        }
    }

    pub fn coord(&self) -> Coord {
        (self.row, self.col)
    }

    pub fn state(&self) -> CellState {
        self.state
    }

    /// Index of the ship covering this cell, if any.
    pub fn owner(&self) -> Option<usize> {
        self.owner
    }

    /// `true` once the cell carries a `Miss` or `Hit`.
    pub fn is_shot(&self) -> bool {
        matches!(self.state, CellState::Miss | CellState::Hit)
    }
}

/// Main board state: cells, ship placements, and the placement mask.
#[derive(Clone)]
pub struct Board {
    cells: [[Cell; GRID]; GRID],
    ships: Vec<Ship>,
    ship_map: Grid,
}

impl Board {
    /// An empty board with no ships.
    pub fn new() -> Self {
        Board {
            cells: core::array::from_fn(|r| core::array::from_fn(|c| Cell::empty(r, c))),
            ships: Vec::new(),
            ship_map: Grid::new(),
        }
    }

    /// Clear every cell and drop the fleet.
    pub fn reset(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            *cell = Cell::empty(cell.row, cell.col);
        }
        self.ships.clear();
        self.ship_map.clear();
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        check_bounds(row, col)?;
        Ok(self.cells[row][col])
    }

    pub fn cell_state(&self, row: usize, col: usize) -> Result<CellState, BoardError> {
        self.cell(row, col).map(|c| c.state)
    }

    /// Placed ships, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, index: usize) -> Option<&Ship> {
        self.ships.get(index)
    }

    /// Ships not yet sunk.
    pub fn remaining_ships(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }

    /// Every cell covered by a ship, hit or not.
    pub fn ship_map(&self) -> Grid {
        self.ship_map
    }

    /// Place a ship manually. Returns the index assigned to it.
    pub fn place_ship(
        &mut self,
        length: usize,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<usize, BoardError> {
        let ship = Ship::new(length, row, col, orientation)?;
        self.check_clearance(&ship)?;
        Ok(self.commit(ship))
    }

    /// A random origin and orientation where a ship of `length` fits without
    /// overlapping or touching the ships already placed.
    ///
    /// Gives up after [`MAX_PLACEMENT_ATTEMPTS`] tries.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        length: usize,
    ) -> Result<(usize, usize, Orientation), BoardError> {
        if length == 0 || length > GRID {
            return Err(BoardError::InvalidShipLength(length));
        }
        for attempt in 1..=MAX_PLACEMENT_ATTEMPTS {
            let orientation = Orientation::random(rng);
            let (max_row, max_col) = match orientation {
                Orientation::Horizontal => (GRID - 1, GRID - length),
                Orientation::Vertical => (GRID - length, GRID - 1),
            };
            let row = rng.random_range(0..=max_row);
            let col = rng.random_range(0..=max_col);
            let ship = Ship::new(length, row, col, orientation)?;
            if self.check_clearance(&ship).is_ok() {
                trace!("length {} placed at ({}, {}) after {} attempts", length, row, col, attempt);
                return Ok((row, col, orientation));
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    /// Clear the board and place ships of the given lengths at random, in
    /// order. A ship that cannot be placed within the attempt cap restarts
    /// the whole fleet; after [`MAX_FLEET_RESTARTS`] restarts the board is
    /// left empty and `UnableToPlaceFleet` is returned.
    pub fn place_fleet<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        lengths: &[usize],
    ) -> Result<(), BoardError> {
        if let Some(&bad) = lengths.iter().find(|&&len| len == 0 || len > GRID) {
            return Err(BoardError::InvalidShipLength(bad));
        }
        'restart: for restart in 0..MAX_FLEET_RESTARTS {
            self.reset();
            for &length in lengths {
                match self.random_placement(rng, length) {
                    Ok((row, col, orientation)) => {
                        self.place_ship(length, row, col, orientation)?;
                    }
                    Err(BoardError::UnableToPlaceShip) => {
                        debug!(
                            "no room for a ship of length {}, restarting fleet ({}/{})",
                            length,
                            restart + 1,
                            MAX_FLEET_RESTARTS
                        );
                        continue 'restart;
                    }
                    Err(e) => return Err(e),
                }
            }
            debug!("placed {} ships", self.ships.len());
            return Ok(());
        }
        self.reset();
        Err(BoardError::UnableToPlaceFleet {
            restarts: MAX_FLEET_RESTARTS,
        })
    }

    /// Resolve a shot at (`row`, `col`).
    ///
    /// Cells already shot yield `Repeat` and are left untouched. For `Hit` and
    /// `Sunk` the index of the struck ship is returned alongside.
    pub fn receive_shot(
        &mut self,
        row: usize,
        col: usize,
    ) -> Result<(ShotOutcome, Option<usize>), BoardError> {
        check_bounds(row, col)?;
        let cell = &mut self.cells[row][col];
        match cell.state {
            CellState::Miss | CellState::Hit => Ok((ShotOutcome::Repeat, None)),
            CellState::Empty => {
                cell.state = CellState::Miss;
                Ok((ShotOutcome::Miss, None))
            }
            CellState::Occupied => {
                let index = cell.owner.ok_or(BoardError::InvalidIndex)?;
                let ship = self.ships.get_mut(index).ok_or(BoardError::InvalidIndex)?;
                cell.state = CellState::Hit;
                ship.register_hit(row, col);
                if ship.is_sunk() {
                    Ok((ShotOutcome::Sunk, Some(index)))
                } else {
                    Ok((ShotOutcome::Hit, Some(index)))
                }
            }
        }
    }

    /// `true` when every placed ship is sunk. A board without ships is not
    /// considered destroyed.
    pub fn all_ships_sunk(&self) -> bool {
        !self.ships.is_empty() && self.ships.iter().all(Ship::is_sunk)
    }

    /// Mark every untouched cell around a sunk ship as a miss and return
    /// those cells. Ships still afloat are left alone.
    pub fn mark_perimeter(&mut self, index: usize) -> Result<Vec<Coord>, BoardError> {
        let ship = self.ships.get(index).ok_or(BoardError::InvalidIndex)?;
        if !ship.is_sunk() {
            return Ok(Vec::new());
        }
        let ring = ship.halo() & !ship.mask();
        let mut revealed = Vec::new();
        for (r, c) in ring.iter() {
            let cell = &mut self.cells[r][c];
            if cell.state == CellState::Empty {
                cell.state = CellState::Miss;
                revealed.push((r, c));
            }
        }
        Ok(revealed)
    }

    fn check_clearance(&self, ship: &Ship) -> Result<(), BoardError> {
        if self.ship_map.intersects(&ship.mask()) {
            return Err(BoardError::ShipOverlaps);
        }
        if self.ship_map.intersects(&ship.halo()) {
            return Err(BoardError::ShipAdjacent);
        }
        Ok(())
    }

    fn commit(&mut self, ship: Ship) -> usize {
        let index = self.ships.len();
        for &(r, c) in ship.positions() {
            let cell = &mut self.cells[r][c];
            cell.state = CellState::Occupied;
            cell.owner = Some(index);
        }
        self.ship_map = self.ship_map | ship.mask();
        self.ships.push(ship);
        index
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

fn check_bounds(row: usize, col: usize) -> Result<(), BoardError> {
    if row >= GRID || col >= GRID {
        Err(BoardError::OutOfBounds { row, col })
    } else {
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{ ships: {:?}", self.ships)?;
        for row in self.cells.iter() {
            f.write_str("  ")?;
            for cell in row {
                let ch = match cell.state {
                    CellState::Empty => '.',
                    CellState::Occupied => 'S',
                    CellState::Miss => 'o',
                    CellState::Hit => 'X',
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal_contact_is_rejected() {
        let mut board = Board::new();
        board.place_ship(2, 0, 0, Orientation::Horizontal).unwrap();
        assert_eq!(
            board.place_ship(1, 1, 2, Orientation::Horizontal),
            Err(BoardError::ShipAdjacent)
        );
        assert_eq!(
            board.place_ship(3, 0, 1, Orientation::Vertical),
            Err(BoardError::ShipOverlaps)
        );
        assert_eq!(board.place_ship(1, 2, 2, Orientation::Horizontal), Ok(1));
    }

    #[test]
    fn reset_clears_cells_and_fleet() {
        let mut board = Board::new();
        board.place_ship(3, 4, 4, Orientation::Vertical).unwrap();
        board.receive_shot(4, 4).unwrap();
        board.receive_shot(0, 0).unwrap();
        board.reset();
        assert!(board.ships().is_empty());
        assert!(board.ship_map().is_empty());
        for r in 0..GRID {
            for c in 0..GRID {
                let cell = board.cell(r, c).unwrap();
                assert_eq!(cell.state(), CellState::Empty);
                assert_eq!(cell.owner(), None);
                assert_eq!(cell.coord(), (r, c));
            }
        }
    }
}
