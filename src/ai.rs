//! Target selection for the automated side.
//!
//! Every strategy draws from one shrinking [`TargetSelector`] pool, so no
//! coordinate is ever fired upon twice, whichever strategy is in use.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use log::trace;
use rand::Rng;

use crate::common::{Coord, SelectorError, ShotOutcome};
use crate::config::GRID;
use crate::ship::Grid;

/// Pool of coordinates not yet fired upon, drawn uniformly without
/// replacement.
#[derive(Debug, Clone)]
pub struct TargetSelector {
    remaining: Vec<Coord>,
}

impl TargetSelector {
    /// A pool holding every cell of the board.
    pub fn new() -> Self {
        let mut selector = TargetSelector {
            remaining: Vec::with_capacity(GRID * GRID),
        };
        selector.reset();
        selector
    }

    /// Refill the pool with every cell of the board.
    pub fn reset(&mut self) {
        self.remaining.clear();
        self.remaining
            .extend((0..GRID).flat_map(|r| (0..GRID).map(move |c| (r, c))));
    }

    /// Remove and return a uniformly chosen coordinate.
    pub fn pick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Coord, SelectorError> {
        if self.remaining.is_empty() {
            return Err(SelectorError::ExhaustedPool);
        }
        let idx = rng.random_range(0..self.remaining.len());
        Ok(self.remaining.swap_remove(idx))
    }

    /// Drop `coord` from the pool without firing at it. Returns `false` if it
    /// was not in the pool.
    pub fn discard(&mut self, coord: Coord) -> bool {
        match self.remaining.iter().position(|&c| c == coord) {
            Some(idx) => {
                self.remaining.swap_remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.remaining.contains(&coord)
    }

    /// Number of coordinates still available.
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }
}

impl Default for TargetSelector {
    fn default() -> Self {
        Self::new()
    }
}

/// How the automated side chooses where to fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Uniform random over untargeted cells, ignoring results.
    #[default]
    Random,
    /// Follow up hits on neighbouring cells and along the line they form.
    Hunt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line {
    Row(usize),
    Col(usize),
}

/// Target pool plus whatever follow-up state the strategy keeps.
#[derive(Debug, Clone)]
pub struct Targeting {
    strategy: Strategy,
    pool: TargetSelector,
    queue: VecDeque<Coord>,
    streak: Vec<Coord>,
}

impl Targeting {
    pub fn new(strategy: Strategy) -> Self {
        Targeting {
            strategy,
            pool: TargetSelector::new(),
            queue: VecDeque::new(),
            streak: Vec::new(),
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn pool(&self) -> &TargetSelector {
        &self.pool
    }

    /// Refill the pool and forget any pursuit in progress.
    pub fn reset(&mut self) {
        self.pool.reset();
        self.queue.clear();
        self.streak.clear();
    }

    /// Choose and consume the next coordinate to fire at.
    pub fn next_target<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Coord, SelectorError> {
        if self.strategy == Strategy::Hunt {
            if let Some(coord) = self.extend_line(rng) {
                trace!("extending line to {:?}", coord);
                return Ok(coord);
            }
            while let Some(coord) = self.queue.pop_front() {
                if self.pool.discard(coord) {
                    trace!("probing neighbour {:?}", coord);
                    return Ok(coord);
                }
            }
        }
        self.pool.pick(rng)
    }

    /// Feed back the result of the last shot. `sunk` holds the sunk ship's
    /// cells when `outcome` is `Sunk`.
    pub fn observe(&mut self, target: Coord, outcome: ShotOutcome, sunk: &[Coord]) {
        if self.strategy != Strategy::Hunt {
            return;
        }
        match outcome {
            ShotOutcome::Hit => {
                if !self.streak.contains(&target) {
                    self.streak.push(target);
                }
                self.enqueue_neighbours(target);
                if let Some(line) = self.line() {
                    self.queue.retain(|&c| on_line(line, c));
                }
            }
            ShotOutcome::Sunk => {
                self.streak.clear();
                self.queue.clear();
                // Ships never touch, so nothing around a wreck is worth a shot.
                if let Ok(wreck) = Grid::from_cells(sunk.iter().copied()) {
                    for cell in wreck.halo().iter() {
                        self.pool.discard(cell);
                    }
                }
            }
            ShotOutcome::Miss | ShotOutcome::Repeat => {}
        }
    }

    /// Remove cells from the pool that the shooter already knows are open
    /// water.
    pub fn discard_all(&mut self, cells: &[Coord]) {
        for &cell in cells {
            self.pool.discard(cell);
        }
    }

    fn enqueue_neighbours(&mut self, (row, col): Coord) {
        let candidates = [
            (row.checked_add(1), Some(col)),
            (row.checked_sub(1), Some(col)),
            (Some(row), col.checked_add(1)),
            (Some(row), col.checked_sub(1)),
        ];
        for (r, c) in candidates {
            if let (Some(r), Some(c)) = (r, c) {
                let coord = (r, c);
                if r < GRID && c < GRID && self.pool.contains(coord) && !self.queue.contains(&coord)
                {
                    self.queue.push_back(coord);
                }
            }
        }
    }

    fn line(&self) -> Option<Line> {
        match self.streak.as_slice() {
            [a, b, ..] if a.0 == b.0 => Some(Line::Row(a.0)),
            [a, b, ..] if a.1 == b.1 => Some(Line::Col(a.1)),
            _ => None,
        }
    }

    fn extend_line<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Coord> {
        let line = self.line()?;
        let mut ends: [Option<Coord>; 2] = match line {
            Line::Row(row) => {
                let lo = self.streak.iter().map(|c| c.1).min()?;
                let hi = self.streak.iter().map(|c| c.1).max()?;
                [lo.checked_sub(1).map(|c| (row, c)), Some((row, hi + 1))]
            }
            Line::Col(col) => {
                let lo = self.streak.iter().map(|c| c.0).min()?;
                let hi = self.streak.iter().map(|c| c.0).max()?;
                [lo.checked_sub(1).map(|r| (r, col)), Some((hi + 1, col))]
            }
        };
        if rng.random() {
            ends.swap(0, 1);
        }
        ends.into_iter()
            .flatten()
            .find(|&coord| self.pool.discard(coord))
    }
}

fn on_line(line: Line, (row, col): Coord) -> bool {
    match line {
        Line::Row(r) => row == r,
        Line::Col(c) => col == c,
    }
}
