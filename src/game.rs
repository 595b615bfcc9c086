//! Session state machine: placement, turn sequencing, shot resolution and
//! win detection.

use alloc::vec::Vec;
use core::fmt;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::{
    board::{Board, Cell},
    common::{BoardError, ShotOutcome, Side},
    coord::Coord,
    event::{EventSink, GameEvent},
    player::{Command, Player, Shot, TurnView},
    rules::{self, Variant},
    targeting,
};

/// Current status of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameStatus {
    Waiting,
    InProgress,
    Won(Side),
}

/// Errors that end a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    Board(BoardError),
    /// Setup was attempted after the session started.
    NotWaiting,
    /// Play was attempted before start or after a win.
    NotInProgress,
    /// The session cannot start while a side has no vessels.
    FleetNotPlaced(Side),
    /// A target off the grid reached the engine.
    OffGrid(Coord),
    /// An occupied cell has no vessel behind it.
    MissingVessel { owner: Side, coord: Coord },
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Board(e) => write!(f, "Board error: {}", e),
            GameError::NotWaiting => write!(f, "Game has already started"),
            GameError::NotInProgress => write!(f, "Game is not in progress"),
            GameError::FleetNotPlaced(side) => write!(f, "Side {:?} has no vessels placed", side),
            GameError::OffGrid(c) => write!(f, "Target ({}, {}) is off the grid", c.row, c.col),
            GameError::MissingVessel { owner, coord } => write!(
                f,
                "Cell {} of side {:?} is occupied but no vessel owns it",
                coord, owner
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}

/// Everything that happened during one side's turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub side: Side,
    /// Shots in the order they were resolved, with their outcomes.
    pub shots: Vec<(Shot, ShotOutcome)>,
    /// Winner decided by this turn, if any.
    pub winner: Option<Side>,
}

/// One play session between side A and side B.
pub struct Game {
    variant: Variant,
    status: GameStatus,
    boards: [Board; 2],
    rng: SmallRng,
    turns: usize,
    shots_fired: [usize; 2],
}

impl Game {
    /// Create a waiting session. `rng` drives placement and interception.
    pub fn new(variant: Variant, rng: SmallRng) -> Self {
        Self {
            variant,
            status: GameStatus::Waiting,
            boards: [Board::new(), Board::new()],
            rng,
            turns: 0,
            shots_fired: [0; 2],
        }
    }

    /// Create a waiting session with a reproducible random source.
    pub fn with_seed(variant: Variant, seed: u64) -> Self {
        Self::new(variant, SmallRng::seed_from_u64(seed))
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of turns taken so far.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Fire commands resolved for `side`.
    pub fn shots_fired(&self, side: Side) -> usize {
        self.shots_fired[side.index()]
    }

    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    /// Mutable board access for manual setup.
    pub fn board_mut(&mut self, side: Side) -> &mut Board {
        &mut self.boards[side.index()]
    }

    /// Let `player` place `side`'s fleet and report every placement.
    pub fn place_fleet(
        &mut self,
        side: Side,
        player: &mut dyn Player,
        sink: &mut dyn EventSink,
    ) -> Result<(), GameError> {
        if self.status != GameStatus::Waiting {
            return Err(GameError::NotWaiting);
        }
        let board = &mut self.boards[side.index()];
        player.place_fleet(&mut self.rng, board)?;
        for (_, vessel) in board.fleet.vessels() {
            sink.record(&GameEvent::VesselPlaced {
                side,
                vessel: *vessel,
            });
        }
        Ok(())
    }

    /// Move from waiting to in progress.
    pub fn start(&mut self, sink: &mut dyn EventSink) -> Result<(), GameError> {
        if self.status != GameStatus::Waiting {
            return Err(GameError::NotWaiting);
        }
        for side in Side::BOTH {
            if self.board(side).fleet.placed_count() == 0 {
                return Err(GameError::FleetNotPlaced(side));
            }
        }
        self.status = GameStatus::InProgress;
        sink.record(&GameEvent::Started {
            variant: self.variant,
        });
        Ok(())
    }

    /// Number of `side`'s vessels still afloat.
    pub fn vessels_afloat(&self, side: Side) -> usize {
        self.board(side).fleet.afloat_count()
    }

    /// True when every vessel of `side` is sunk.
    pub fn is_fleet_destroyed(&self, side: Side) -> bool {
        self.board(side).fleet.is_destroyed()
    }

    /// Fleet slot of the vessel `owner` has at `coord`.
    pub fn find_vessel_at(&self, coord: Coord, owner: Side) -> Option<usize> {
        self.board(owner).fleet.find(coord)
    }

    /// Snapshot of the session as seen by `side` before its first shot.
    pub fn turn_view(&self, side: Side) -> TurnView {
        let board = self.board(side);
        let opponent = self.board(side.opponent());
        TurnView {
            side,
            variant: self.variant,
            targeting: board.targeting,
            own: board.own,
            fleet: board.fleet,
            opponent_smallest_afloat: targeting::smallest_vessel_alive(&opponent.fleet),
            shots: rules::shots_per_turn(self.variant, board.fleet.afloat_count()),
            shot_index: 0,
        }
    }

    fn boards_mut(&mut self, firing: Side) -> (&mut Board, &mut Board) {
        let [a, b] = &mut self.boards;
        match firing {
            Side::A => (a, b),
            Side::B => (b, a),
        }
    }

    /// Apply one shot fired by `firing` and report the outcome.
    pub fn resolve_shot(
        &mut self,
        shot: Shot,
        firing: Side,
        sink: &mut dyn EventSink,
    ) -> Result<ShotOutcome, GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::NotInProgress);
        }
        let target = match shot {
            Shot::Forfeit => return Ok(self.forfeit(firing, sink)),
            Shot::ForceOpponentForfeit => return Ok(self.forfeit(firing.opponent(), sink)),
            Shot::Fire(target) => target,
        };
        if !target.in_bounds() {
            return Err(GameError::OffGrid(target));
        }

        let defending = firing.opponent();
        let vessel_cell = {
            let (attacker, defender) = self.boards_mut(firing);
            if !attacker.targeting.get(target).is_open() {
                return Err(BoardError::AlreadyTargeted(target).into());
            }
            matches!(defender.own.get(target), Cell::Occupied | Cell::ShotDown)
        };
        let intercepted = vessel_cell
            && rules::interception_enabled(self.variant)
            && rules::roll_interception(&mut self.rng);

        let (attacker, defender) = self.boards_mut(firing);
        let mut damaged = None;
        let outcome = match defender.own.get(target) {
            Cell::Occupied | Cell::ShotDown if intercepted => {
                attacker.targeting.record_outcome(target, Cell::ShotDown)?;
                defender.own.record_outcome(target, Cell::ShotDown)?;
                ShotOutcome::ShotDown
            }
            Cell::Occupied | Cell::ShotDown => {
                let missing = GameError::MissingVessel {
                    owner: defending,
                    coord: target,
                };
                let index = defender.fleet.find(target).ok_or(missing.clone())?;
                attacker.targeting.record_outcome(target, Cell::Hit)?;
                defender.own.record_outcome(target, Cell::Hit)?;
                let vessel = defender.fleet.vessel_mut(index).ok_or(missing)?;
                let sank = vessel.damage();
                let vessel = *vessel;
                damaged = Some((vessel, sank));
                if sank {
                    for &coord in vessel.coords() {
                        attacker.targeting.mark_sunk(coord)?;
                        defender.own.mark_sunk(coord)?;
                    }
                    ShotOutcome::Sunk(vessel.name())
                } else {
                    ShotOutcome::Hit
                }
            }
            Cell::Empty => {
                attacker.targeting.record_outcome(target, Cell::Miss)?;
                defender.own.record_outcome(target, Cell::Miss)?;
                ShotOutcome::Miss
            }
            Cell::Miss | Cell::Hit | Cell::Sunk => {
                return Err(BoardError::AlreadyTargeted(target).into());
            }
        };
        self.shots_fired[firing.index()] += 1;

        sink.record(&GameEvent::ShotResolved {
            side: firing,
            target,
            outcome,
        });
        if let Some((vessel, sank)) = damaged {
            sink.record(&GameEvent::VesselDamaged {
                owner: defending,
                vessel,
            });
            if sank {
                sink.record(&GameEvent::VesselSunk {
                    owner: defending,
                    vessel,
                });
            }
        }
        Ok(outcome)
    }

    fn forfeit(&mut self, side: Side, sink: &mut dyn EventSink) -> ShotOutcome {
        self.boards[side.index()].fleet.scuttle_all();
        sink.record(&GameEvent::Forfeited { side });
        ShotOutcome::Forfeit(side)
    }

    /// Decide the session if a fleet is gone after `acting`'s shots.
    ///
    /// The opponent's fleet is checked first, so a side that sinks the last
    /// enemy vessel wins even if it forfeited in the same turn.
    pub fn check_win(&mut self, acting: Side, sink: &mut dyn EventSink) -> Option<Side> {
        if let GameStatus::Won(side) = self.status {
            return Some(side);
        }
        if self.status != GameStatus::InProgress {
            return None;
        }
        let winner = if self.is_fleet_destroyed(acting.opponent()) {
            acting
        } else if self.is_fleet_destroyed(acting) {
            acting.opponent()
        } else {
            return None;
        };
        sink.record(&GameEvent::FleetDestroyed {
            side: winner.opponent(),
        });
        self.status = GameStatus::Won(winner);
        sink.record(&GameEvent::Won { side: winner });
        Some(winner)
    }

    /// Run one full turn for `side`: collect every shot it is granted, resolve
    /// them as a batch, then check for a winner.
    ///
    /// The shot count is fixed from the vessels afloat when the turn begins.
    pub fn take_turn(
        &mut self,
        side: Side,
        player: &mut dyn Player,
        sink: &mut dyn EventSink,
    ) -> Result<TurnReport, GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::NotInProgress);
        }
        self.turns += 1;
        let mut view = self.turn_view(side);
        sink.record(&GameEvent::TurnStarted {
            side,
            shots: view.shots,
        });

        let mut batch: Vec<Shot> = Vec::with_capacity(view.shots);
        while batch.len() < view.shots {
            // Shots beyond the number of open cells are lost.
            if !view.targeting.iter().any(|(_, cell)| cell.is_open()) {
                break;
            }
            view.shot_index = batch.len();
            match player.next_command(&view) {
                Command::Peek => {
                    let opponent_fleet = self.board(side.opponent()).own;
                    sink.record(&GameEvent::Peeked {
                        side,
                        opponent_fleet,
                    });
                    player.reveal_opponent(&opponent_fleet);
                }
                Command::Shot(shot) => {
                    batch.push(shot);
                    match shot {
                        Shot::Fire(target) if target.in_bounds() => {
                            view.targeting.set(target, Cell::Miss);
                        }
                        Shot::Fire(_) => {}
                        Shot::Forfeit | Shot::ForceOpponentForfeit => break,
                    }
                }
            }
        }

        let mut shots = Vec::with_capacity(batch.len());
        for shot in batch {
            let outcome = self.resolve_shot(shot, side, sink)?;
            if let Shot::Fire(target) = shot {
                player.handle_shot_result(target, outcome);
            }
            shots.push((shot, outcome));
        }

        let winner = self.check_win(side, sink);
        Ok(TurnReport {
            side,
            shots,
            winner,
        })
    }

    /// Play until one side wins. Side A moves first. Starts the session if it
    /// is still waiting.
    pub fn play<'p>(
        &mut self,
        a: &mut (dyn Player + 'p),
        b: &mut (dyn Player + 'p),
        sink: &mut dyn EventSink,
    ) -> Result<Side, GameError> {
        if self.status == GameStatus::Waiting {
            self.start(sink)?;
        }
        loop {
            if let GameStatus::Won(side) = self.status {
                return Ok(side);
            }
            for side in Side::BOTH {
                let (player, opponent) = match side {
                    Side::A => (&mut *a, &mut *b),
                    Side::B => (&mut *b, &mut *a),
                };
                let report = self.take_turn(side, player, sink)?;
                for (shot, outcome) in report.shots.iter() {
                    if let Shot::Fire(target) = shot {
                        opponent.handle_opponent_shot(*target, *outcome);
                    }
                }
                if let Some(winner) = report.winner {
                    return Ok(winner);
                }
            }
        }
    }
}
