//! Ship geometry and hit tracking.

use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, Coord};
use crate::config::GRID;

/// Cell set sized for the game board.
pub type Grid = BitBoard<u128, GRID>;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Uniformly chosen orientation.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    /// Cell `offset` steps from `(row, col)` along this orientation.
    fn advance(self, row: usize, col: usize, offset: usize) -> Coord {
        match self {
            Orientation::Horizontal => (row, col + offset),
            Orientation::Vertical => (row + offset, col),
        }
    }
}

/// A straight ship on the board. The shape never changes after
/// construction; only the hit set grows.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    orientation: Orientation,
    positions: Vec<Coord>,
    mask: Grid,
    hits: Grid,
}

impl Ship {
    /// Lay out a ship of `length` cells starting at (`row`, `col`).
    pub fn new(
        length: usize,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<Self, BoardError> {
        if length == 0 || length > GRID {
            return Err(BoardError::InvalidShipLength(length));
        }
        if row >= GRID || col >= GRID {
            return Err(BoardError::OutOfBounds { row, col });
        }
        let (end_row, end_col) = orientation.advance(row, col, length - 1);
        if end_row >= GRID || end_col >= GRID {
            return Err(BoardError::ShipOutOfBounds);
        }

        let positions: Vec<Coord> = (0..length)
            .map(|i| orientation.advance(row, col, i))
            .collect();
        let mask = Grid::from_cells(positions.iter().copied())?;
        Ok(Ship {
            orientation,
            positions,
            mask,
            hits: Grid::new(),
        })
    }

    /// Number of cells the ship covers.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// First cell of the ship (top-most or left-most).
    pub fn origin(&self) -> Coord {
        self.positions[0]
    }

    /// Covered cells in order from the origin.
    pub fn positions(&self) -> &[Coord] {
        &self.positions
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.mask.contains(row, col)
    }

    /// Record a hit at (`row`, `col`). Returns `false` when the cell is not
    /// part of this ship, in which case nothing is recorded.
    pub fn register_hit(&mut self, row: usize, col: usize) -> bool {
        if !self.contains(row, col) {
            return false;
        }
        let _ = self.hits.insert(row, col);
        true
    }

    pub fn is_hit(&self, row: usize, col: usize) -> bool {
        self.hits.contains(row, col)
    }

    pub fn hit_count(&self) -> usize {
        self.hits.len()
    }

    /// Sunk once every segment has been hit.
    pub fn is_sunk(&self) -> bool {
        self.hits.len() == self.positions.len()
    }

    pub(crate) fn mask(&self) -> Grid {
        self.mask
    }

    /// The ship's cells and every cell touching them.
    pub(crate) fn halo(&self) -> Grid {
        self.mask.halo()
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (row, col) = self.origin();
        write!(
            f,
            "Ship {{ len: {}, origin: ({}, {}), orientation: {:?}, hits: {} }}",
            self.len(),
            row,
            col,
            self.orientation,
            self.hit_count(),
        )
    }
}
