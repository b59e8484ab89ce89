//! Match orchestration: two boards, the opponent's targeting, and the turn
//! state machine.
//!
//! Every mutating call returns a [`ShotReport`] describing what happened, so
//! a front-end can render the result without the engine calling back into it.

use alloc::vec::Vec;
use log::{debug, info, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{
    ai::Strategy,
    board::{Board, CellState},
    common::{BoardError, Coord, GameError, ShotOutcome},
    config::FLEET,
    player::{AiPlayer, Player},
};

/// A participant in the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Human,
    Opponent,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::Human => Side::Opponent,
            Side::Opponent => Side::Human,
        }
    }
}

/// How a finished match ended, from the human's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Victory,
    Defeat,
}

/// Turn state of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    HumanTurn,
    OpponentTurn,
    Finished(Outcome),
}

/// Rule options fixed for the lifetime of a [`Match`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Rules {
    /// Targeting used by the automated side.
    pub strategy: Strategy,
    /// Mark the water around a sunk ship as missed.
    pub reveal_perimeter: bool,
}

/// Everything that resulted from one accepted shot.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotReport {
    pub shooter: Side,
    pub target: Coord,
    pub outcome: ShotOutcome,
    /// Index of the struck ship on the target board.
    pub ship: Option<usize>,
    /// Cells of the ship when `outcome` is `Sunk`.
    pub sunk_positions: Vec<Coord>,
    /// Cells marked as misses by the perimeter rule.
    pub revealed: Vec<Coord>,
    /// Set when this shot ended the match.
    pub finished: Option<Outcome>,
}

/// Shot counters for one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SideStats {
    pub shots: usize,
    pub hits: usize,
    pub ships_sunk: usize,
}

impl SideStats {
    fn record(&mut self, outcome: ShotOutcome) {
        if outcome.is_repeat() {
            return;
        }
        self.shots += 1;
        if outcome.struck_ship() {
            self.hits += 1;
        }
        if outcome == ShotOutcome::Sunk {
            self.ships_sunk += 1;
        }
    }
}

/// Counters for the current match plus results across every match played on
/// this instance. Nothing is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchStats {
    pub human: SideStats,
    pub opponent: SideStats,
    pub victories: u32,
    pub defeats: u32,
}

/// A human-versus-computer match.
///
/// All randomness (both fleet placements and the opponent's targeting) is
/// drawn from the single generator `R`, so a seeded generator reproduces a
/// match exactly.
pub struct Match<R: Rng = SmallRng> {
    rng: R,
    rules: Rules,
    human: Player,
    opponent: AiPlayer,
    turn: Side,
    outcome: Option<Outcome>,
    stats: MatchStats,
}

impl Match<SmallRng> {
    /// A match with default rules driven by `SmallRng::seed_from_u64(seed)`.
    pub fn from_seed(seed: u64) -> Result<Self, GameError> {
        Match::new(SmallRng::seed_from_u64(seed))
    }

    /// A match with default rules seeded from the thread-local generator.
    #[cfg(feature = "std")]
    pub fn from_entropy() -> Result<Self, GameError> {
        let mut seed_rng = rand::rng();
        Match::new(SmallRng::from_rng(&mut seed_rng))
    }
}

impl<R: Rng> Match<R> {
    /// Start a match with default rules.
    pub fn new(rng: R) -> Result<Self, GameError> {
        Self::with_rules(rng, Rules::default())
    }

    /// Start a match: both fleets placed, human to move.
    pub fn with_rules(rng: R, rules: Rules) -> Result<Self, GameError> {
        let mut game = Match {
            rng,
            rules,
            human: Player::new("You"),
            opponent: AiPlayer::new(rules.strategy),
            turn: Side::Human,
            outcome: None,
            stats: MatchStats::default(),
        };
        game.new_game()?;
        Ok(game)
    }

    /// Discard the current match and start over: both fleets redeployed,
    /// targeting refilled, human to move. Session totals are kept.
    pub fn new_game(&mut self) -> Result<(), GameError> {
        self.redeploy(&FLEET)
    }

    /// Deploy `fleet` on fresh boards for both sides. Nothing is replaced
    /// unless both placements succeed.
    fn redeploy(&mut self, fleet: &[usize]) -> Result<(), GameError> {
        let mut human = Player::new(self.human.name());
        human.deploy(&mut self.rng, fleet)?;
        let mut opponent = AiPlayer::new(self.rules.strategy);
        opponent.deploy(&mut self.rng, fleet)?;
        self.human = human;
        self.opponent = opponent;
        self.turn = Side::Human;
        self.outcome = None;
        self.stats.human = SideStats::default();
        self.stats.opponent = SideStats::default();
        info!("new game: {} ships per side", self.human.board().ships().len());
        Ok(())
    }

    /// Human fires at the opponent's board.
    ///
    /// Returns `Ok(None)` when it is not the human's turn or the match is
    /// over. A `Repeat` report leaves the turn with the human.
    pub fn fire(&mut self, row: usize, col: usize) -> Result<Option<ShotReport>, GameError> {
        if self.phase() != Phase::HumanTurn {
            debug!("ignoring human shot at ({}, {}) during {:?}", row, col, self.phase());
            return Ok(None);
        }
        let mut report = strike(
            self.opponent.player_mut().board_mut(),
            Side::Human,
            (row, col),
            self.rules,
        )?;
        self.stats.human.record(report.outcome);
        if report.outcome.is_repeat() {
            debug!("human repeated ({}, {})", row, col);
            return Ok(Some(report));
        }
        if self.opponent.player().board().all_ships_sunk() {
            report.finished = Some(self.finish(Outcome::Victory));
        } else {
            self.turn = self.turn.other();
        }
        Ok(Some(report))
    }

    /// The computer takes its shot at the human's board.
    ///
    /// Returns `Ok(None)` outside the opponent's turn. An exhausted target
    /// pool is reported as an error: a live match always ends first.
    pub fn opponent_acts(&mut self) -> Result<Option<ShotReport>, GameError> {
        if self.phase() != Phase::OpponentTurn {
            debug!("ignoring opponent action during {:?}", self.phase());
            return Ok(None);
        }
        let target = self.opponent.select_target(&mut self.rng)?;
        let mut report = strike(self.human.board_mut(), Side::Opponent, target, self.rules)?;
        if report.outcome.is_repeat() {
            warn!("opponent fired at {:?} twice", target);
        }
        self.opponent.handle_shot_result(
            target,
            report.outcome,
            &report.sunk_positions,
            &report.revealed,
        );
        self.stats.opponent.record(report.outcome);
        if self.human.board().all_ships_sunk() {
            report.finished = Some(self.finish(Outcome::Defeat));
        } else {
            self.turn = self.turn.other();
        }
        Ok(Some(report))
    }

    fn finish(&mut self, outcome: Outcome) -> Outcome {
        self.outcome = Some(outcome);
        match outcome {
            Outcome::Victory => self.stats.victories += 1,
            Outcome::Defeat => self.stats.defeats += 1,
        }
        info!(
            "match finished: {:?} after {} human and {} opponent shots",
            outcome, self.stats.human.shots, self.stats.opponent.shots
        );
        outcome
    }

    pub fn phase(&self) -> Phase {
        match (self.outcome, self.turn) {
            (Some(outcome), _) => Phase::Finished(outcome),
            (None, Side::Human) => Phase::HumanTurn,
            (None, Side::Opponent) => Phase::OpponentTurn,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Side holding the move. After the match ends this is the side that
    /// fired the last shot.
    pub fn current_turn(&self) -> Side {
        self.turn
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// State of a cell on the given side's own board.
    pub fn cell_state(&self, side: Side, row: usize, col: usize) -> Result<CellState, GameError> {
        Ok(self.board(side).cell_state(row, col)?)
    }

    /// The given side's own board.
    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::Human => self.human.board(),
            Side::Opponent => self.opponent.player().board(),
        }
    }

    pub fn player(&self, side: Side) -> &Player {
        match side {
            Side::Human => &self.human,
            Side::Opponent => self.opponent.player(),
        }
    }

    pub fn opponent(&self) -> &AiPlayer {
        &self.opponent
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    pub fn stats(&self) -> MatchStats {
        self.stats
    }
}

/// Resolve one shot on `board` and assemble the report.
fn strike(
    board: &mut Board,
    shooter: Side,
    target: Coord,
    rules: Rules,
) -> Result<ShotReport, BoardError> {
    let (outcome, ship) = board.receive_shot(target.0, target.1)?;
    let mut sunk_positions = Vec::new();
    let mut revealed = Vec::new();
    if let (ShotOutcome::Sunk, Some(index)) = (outcome, ship) {
        if let Some(sunk) = board.ship(index) {
            sunk_positions.extend_from_slice(sunk.positions());
        }
        if rules.reveal_perimeter {
            revealed = board.mark_perimeter(index)?;
        }
    }
    debug!("{:?} fired at {:?}: {:?}", shooter, target, outcome);
    Ok(ShotReport {
        shooter,
        target,
        outcome,
        ship,
        sunk_positions,
        revealed,
        finished: None,
    })
}
