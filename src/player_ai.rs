use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::BoardError,
    player::{Command, Player, Shot, TurnView},
    targeting,
};

/// Computer player: random placement and weight-map targeting.
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn place_fleet(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError> {
        board.place_randomly(rng)
    }

    fn next_command(&mut self, view: &TurnView) -> Command {
        let target = targeting::select_target(&view.targeting, view.opponent_smallest_afloat);
        Command::Shot(Shot::Fire(target))
    }
}
