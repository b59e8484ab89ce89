use rand::Rng;

use crate::{
    ai::{Strategy, Targeting},
    board::Board,
    common::{BoardError, Coord, SelectorError, ShotOutcome},
};

/// One side of a match: a name and the board holding its fleet.
#[derive(Debug, Clone)]
pub struct Player {
    name: &'static str,
    board: Board,
}

impl Player {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            board: Board::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for manual placement and for resolving shots.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Clear the board and place ships of the given lengths at random,
    /// usually [`FLEET`](crate::config::FLEET).
    pub fn deploy<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        lengths: &[usize],
    ) -> Result<(), BoardError> {
        self.board.place_fleet(rng, lengths)
    }
}

/// The automated side: a [`Player`] with a targeting capability attached.
#[derive(Debug, Clone)]
pub struct AiPlayer {
    player: Player,
    targeting: Targeting,
}

impl AiPlayer {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            player: Player::new("Computer"),
            targeting: Targeting::new(strategy),
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn targeting(&self) -> &Targeting {
        &self.targeting
    }

    /// Redeploy the fleet and refill the target pool.
    pub fn deploy<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        lengths: &[usize],
    ) -> Result<(), BoardError> {
        self.targeting.reset();
        self.player.deploy(rng, lengths)
    }

    pub fn select_target<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Coord, SelectorError> {
        self.targeting.next_target(rng)
    }

    /// Inform the targeting of the result of its last shot, plus any cells
    /// revealed as open water around a sunk ship.
    pub fn handle_shot_result(
        &mut self,
        target: Coord,
        outcome: ShotOutcome,
        sunk: &[Coord],
        revealed: &[Coord],
    ) {
        self.targeting.observe(target, outcome, sunk);
        self.targeting.discard_all(revealed);
    }
}
