//! Engine for a human-versus-computer game of Battleship on two 10×10 grids.
//!
//! The engine places both fleets at random (ships never touch, not even
//! diagonally), resolves shots, detects when a fleet is destroyed, and picks
//! the computer's targets. [`Match`] ties it together as a turn state machine
//! that front-ends drive through [`Match::fire`] and [`Match::opponent_acts`].

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod ai;
mod bitboard;
mod board;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
mod player;
mod ship;
#[cfg(feature = "std")]
pub mod ui;

pub use ai::*;
pub use bitboard::{BitBoard, BitBoardError, Cells};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
pub use player::*;
pub use ship::*;
