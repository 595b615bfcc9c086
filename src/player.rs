use rand::rngs::SmallRng;

use crate::{
    board::{Board, Fleet, Grid},
    common::{BoardError, ShotOutcome, Side},
    coord::Coord,
    rules::Variant,
};

/// An action the engine can resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Shot {
    /// Fire at a cell of the opponent's board.
    Fire(Coord),
    /// The firing side gives up.
    Forfeit,
    /// The opposing side is made to give up.
    ForceOpponentForfeit,
}

/// What a player hands the engine when asked for its next move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Shot(Shot),
    /// Show the opponent's fleet. Consumes no shot and changes nothing.
    Peek,
}

impl From<Shot> for Command {
    fn from(shot: Shot) -> Self {
        Command::Shot(shot)
    }
}

/// Read-only snapshot of the session from one side's point of view.
///
/// Targets already chosen earlier in the same turn are marked as misses on
/// `targeting`, so they are not picked twice.
#[derive(Debug, Clone, Copy)]
pub struct TurnView {
    pub side: Side,
    pub variant: Variant,
    /// Shots fired at the opponent, plus this turn's pending targets.
    pub targeting: Grid,
    /// Own-ship grid with damage taken.
    pub own: Grid,
    /// Own fleet, for status display.
    pub fleet: Fleet,
    /// Length of the opponent's shortest vessel still afloat.
    pub opponent_smallest_afloat: usize,
    /// Shots granted this turn.
    pub shots: usize,
    /// Zero-based index of the shot being asked for.
    pub shot_index: usize,
}

impl TurnView {
    /// Whether `coord` may be chosen as a target this turn.
    pub fn can_target(&self, coord: Coord) -> bool {
        coord.in_bounds() && self.targeting.get(coord).is_open()
    }
}

/// Interface implemented by the different player types.
pub trait Player {
    /// Place every vessel onto the provided board.
    fn place_fleet(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError>;

    /// Choose the next command for the turn described by `view`.
    fn next_command(&mut self, view: &TurnView) -> Command;

    /// Inform the player of the result of one of its shots.
    fn handle_shot_result(&mut self, _target: Coord, _outcome: ShotOutcome) {}

    /// Inform the player of an opponent shot against its board.
    fn handle_opponent_shot(&mut self, _target: Coord, _outcome: ShotOutcome) {}

    /// Answer to a peek request: the opponent's own-ship grid.
    fn reveal_opponent(&mut self, _grid: &Grid) {}
}
