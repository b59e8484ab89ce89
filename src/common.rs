//! Common types: coordinates, shot outcomes and the engine's error enums.

use crate::bitboard::BitBoardError;
use core::fmt;

/// A `(row, col)` position on a grid.
pub type Coord = (usize, usize);

/// Result of resolving one shot against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// The cell had already been fired upon; nothing changed.
    Repeat,
    /// The shot landed in open water.
    Miss,
    /// The shot struck a ship that is still afloat.
    Hit,
    /// The shot struck the last intact segment of a ship.
    Sunk,
}

impl ShotOutcome {
    pub fn is_repeat(self) -> bool {
        self == ShotOutcome::Repeat
    }

    /// `true` for `Hit` and `Sunk`.
    pub fn struck_ship(self) -> bool {
        matches!(self, ShotOutcome::Hit | ShotOutcome::Sunk)
    }
}

/// Errors returned by board and ship operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error other than an out-of-range index.
    BitBoardError(BitBoardError),
    /// Coordinate outside the grid.
    OutOfBounds { row: usize, col: usize },
    /// Ship does not fit on the board from the requested origin.
    ShipOutOfBounds,
    /// Ship length is zero or longer than the board.
    InvalidShipLength(usize),
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Ship placement touches another ship, diagonals included.
    ShipAdjacent,
    /// Ship index does not refer to a placed ship.
    InvalidIndex,
    /// No free spot was found for a single ship within the attempt cap.
    UnableToPlaceShip,
    /// Random placement gave up after every allowed restart.
    UnableToPlaceFleet { restarts: usize },
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::IndexOutOfBounds { row, col } => BoardError::OutOfBounds { row, col },
            other => BoardError::BitBoardError(other),
        }
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Coordinate ({}, {}) is outside the board", row, col)
            }
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::InvalidShipLength(len) => write!(f, "Invalid ship length {}", len),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipAdjacent => write!(f, "Ship placement touches another ship"),
            BoardError::InvalidIndex => write!(f, "Ship index is out of range"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
            BoardError::UnableToPlaceFleet { restarts } => {
                write!(f, "Unable to place fleet after {} restarts", restarts)
            }
        }
    }
}

/// Errors returned by the opponent's target selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorError {
    /// Every coordinate has already been fired upon.
    ExhaustedPool,
}

impl fmt::Display for SelectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectorError::ExhaustedPool => write!(f, "No untargeted cells remain"),
        }
    }
}

/// Errors surfaced by [`crate::Match`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    Board(BoardError),
    Selector(SelectorError),
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl From<SelectorError> for GameError {
    fn from(err: SelectorError) -> Self {
        GameError::Selector(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Board(e) => write!(f, "board: {}", e),
            GameError::Selector(e) => write!(f, "targeting: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BitBoardError {}
#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for SelectorError {}
#[cfg(feature = "std")]
impl std::error::Error for GameError {}
