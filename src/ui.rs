#![cfg(feature = "std")]
//! Text rendering and input parsing for terminal front-ends.

use std::fmt::Write;
use std::string::String;

use rand::Rng;

use crate::{
    board::{Board, CellState},
    common::{Coord, ShotOutcome},
    config::{ship_class, GRID},
    game::{Match, Outcome, Side, ShotReport},
};

/// `(row, col)` as spreadsheet-style text, e.g. `(4, 1)` → `B5`.
pub fn coord_to_string(row: usize, col: usize) -> String {
    let letter = (b'A' + col as u8) as char;
    format!("{}{}", letter, row + 1)
}

/// Parse `B5` (case-insensitive) into `(row, col)`. Rejects cells off the
/// board.
pub fn parse_coord(input: &str) -> Option<Coord> {
    let input = input.trim();
    let mut chars = input.chars();
    let letter = chars.next()?.to_ascii_uppercase();
    if !letter.is_ascii_uppercase() {
        return None;
    }
    let col = (letter as u8 - b'A') as usize;
    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let row: usize = digits.parse().ok()?;
    if row == 0 || row > GRID || col >= GRID {
        return None;
    }
    Some((row - 1, col))
}

fn glyph(state: CellState, reveal: bool) -> char {
    match state {
        CellState::Hit => 'X',
        CellState::Miss => 'o',
        CellState::Occupied if reveal => 'S',
        CellState::Occupied | CellState::Empty => '.',
    }
}

/// Draw a board. With `reveal` unset, intact ship cells look like water.
pub fn render_board(board: &Board, reveal: bool) -> String {
    let mut out = String::from("   ");
    for c in 0..GRID {
        let _ = write!(out, " {}", (b'A' + c as u8) as char);
    }
    out.push('\n');
    for r in 0..GRID {
        let _ = write!(out, "{:2} ", r + 1);
        for c in 0..GRID {
            let state = board.cell_state(r, c).unwrap_or(CellState::Empty);
            let _ = write!(out, " {}", glyph(state, reveal));
        }
        out.push('\n');
    }
    out
}

/// Opponent's waters on top, the human's fleet below.
pub fn render_view<R: Rng>(game: &Match<R>) -> String {
    let reveal_enemy = game.is_finished();
    format!(
        "Enemy waters ({} ships afloat):\n{}\nYour fleet ({} ships afloat):\n{}",
        game.board(Side::Opponent).remaining_ships(),
        render_board(game.board(Side::Opponent), reveal_enemy),
        game.board(Side::Human).remaining_ships(),
        render_board(game.board(Side::Human), true),
    )
}

/// Status line for a shot report, credited to the player named `shooter`.
pub fn describe(report: &ShotReport, shooter: &str) -> String {
    let at = coord_to_string(report.target.0, report.target.1);
    let mut line = match report.outcome {
        ShotOutcome::Repeat => format!("{shooter}: {at} was already targeted."),
        ShotOutcome::Miss => format!("{shooter}: {at} miss."),
        ShotOutcome::Hit => format!("{shooter}: {at} hit!"),
        ShotOutcome::Sunk => format!(
            "{shooter}: {at} hit! {} sunk!",
            ship_class(report.sunk_positions.len())
        ),
    };
    if let Some(outcome) = report.finished {
        line.push(' ');
        line.push_str(outcome_message(outcome));
    }
    line
}

pub fn outcome_message(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Victory => "Victory! The enemy fleet is destroyed.",
        Outcome::Defeat => "Defeat. All your ships have been sunk.",
    }
}
