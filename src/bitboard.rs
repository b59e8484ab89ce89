//! Fixed-size `N×N` cell sets packed into a single unsigned integer.
//!
//! `BitBoard` backs ship masks, hit masks and the placement halo used to keep
//! ships apart. It is `Copy`, allocation free and usable without `std`.

use core::ops::{BitAnd, BitOr, Not};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitBoardError {
    /// `N*N` does not fit into the bits of `T`.
    SizeTooLarge { n: usize, capacity: usize },
    /// Row or column outside `[0, N)`.
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::SizeTooLarge { n, capacity } => {
                write!(f, "a {n}x{n} board needs {} bits, only {capacity} available", n * n)
            }
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "cell ({row}, {col}) is outside the board")
            }
        }
    }
}

/// A set of cells on an `N×N` grid stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    const CELLS: usize = N * N;

    fn full_mask() -> T {
        if Self::CELLS >= mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::CELLS) - T::one()
        }
    }

    #[inline]
    fn bit(row: usize, col: usize) -> T {
        T::one() << (row * N + col)
    }

    /// An empty set. Size is not checked; use [`BitBoard::try_new`] for that.
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// An empty set, or `SizeTooLarge` if `T` cannot hold `N*N` cells.
    pub fn try_new() -> Result<Self, BitBoardError> {
        let capacity = mem::size_of::<T>() * 8;
        if Self::CELLS > capacity {
            return Err(BitBoardError::SizeTooLarge { n: N, capacity });
        }
        Ok(Self::new())
    }

    /// Number of cells in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Membership test. Out-of-range cells are never members.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < N && col < N && !(self.bits & Self::bit(row, col)).is_zero()
    }

    /// Adds a cell; returns `true` if it was not already present.
    pub fn insert(&mut self, row: usize, col: usize) -> Result<bool, BitBoardError> {
        Self::check(row, col)?;
        let fresh = !self.contains(row, col);
        self.bits = self.bits | Self::bit(row, col);
        Ok(fresh)
    }

    /// Removes a cell; returns `true` if it was present.
    pub fn remove(&mut self, row: usize, col: usize) -> Result<bool, BitBoardError> {
        Self::check(row, col)?;
        let present = self.contains(row, col);
        self.bits = self.bits & !Self::bit(row, col);
        Ok(present)
    }

    pub fn clear(&mut self) {
        self.bits = T::zero();
    }

    /// `true` when the two sets share at least one cell.
    pub fn intersects(&self, other: &Self) -> bool {
        !(self.bits & other.bits).is_zero()
    }

    /// The set grown by one cell in all eight directions, clipped to the grid.
    pub fn halo(&self) -> Self {
        let mut grown = *self;
        for (row, col) in self.iter() {
            for r in row.saturating_sub(1)..=(row + 1).min(N - 1) {
                for c in col.saturating_sub(1)..=(col + 1).min(N - 1) {
                    grown.bits = grown.bits | Self::bit(r, c);
                }
            }
        }
        grown
    }

    /// Builds a set from `(row, col)` pairs.
    pub fn from_cells<I>(cells: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut board = Self::new();
        for (r, c) in cells {
            board.insert(r, c)?;
        }
        Ok(board)
    }

    /// Iterates member cells in row-major order.
    pub fn iter(&self) -> Cells<T, N> {
        Cells {
            bits: self.bits,
            idx: 0,
        }
    }

    #[inline]
    fn check(row: usize, col: usize) -> Result<(), BitBoardError> {
        if row >= N || col >= N {
            Err(BitBoardError::IndexOutOfBounds { row, col })
        } else {
            Ok(())
        }
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> BitOr for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits | rhs.bits,
        }
    }
}

impl<T, const N: usize> BitAnd for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits & rhs.bits,
        }
    }
}

impl<T, const N: usize> Not for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn not(self) -> Self {
        BitBoard {
            bits: !self.bits & Self::full_mask(),
        }
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{N}> ({} set)", self.len())?;
        for r in 0..N {
            for c in 0..N {
                let ch = if self.contains(r, c) { '■' } else { '□' };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Row-major iterator over the members of a [`BitBoard`].
#[derive(Clone, Copy)]
pub struct Cells<T, const N: usize> {
    bits: T,
    idx: usize,
}

impl<T, const N: usize> Iterator for Cells<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if !((self.bits >> idx) & T::one()).is_zero() {
                return Some((idx / N, idx % N));
            }
        }
        None
    }
}
