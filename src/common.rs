//! Common types: sides, shot outcomes and board errors.

use core::fmt;

use crate::bitboard::BitBoardError;
use crate::coord::Coord;

/// One of the two sides of a session. Side A always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Side {
    A,
    B,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::A, Side::B];

    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

/// Resolved result of a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum ShotOutcome {
    /// Shot struck a vessel that is still afloat.
    Hit,
    /// Shot landed in open water.
    Miss,
    /// Shot sank a vessel, carrying its name.
    Sunk(&'static str),
    /// Shot was intercepted before impact; the cell may be fired on again.
    ShotDown,
    /// The named side forfeited; every vessel of its fleet was sunk.
    Forfeit(Side),
}

impl fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotOutcome::Hit => write!(f, "HIT"),
            ShotOutcome::Miss => write!(f, "MISS"),
            ShotOutcome::Sunk(name) => write!(f, "HIT and sank the {}", name),
            ShotOutcome::ShotDown => write!(f, "SHOT DOWN"),
            ShotOutcome::Forfeit(side) => write!(f, "FORFEIT by side {:?}", side),
        }
    }
}

/// Errors returned by board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error.
    BitBoardError(BitBoardError),
    /// Specified fleet slot is out of range.
    InvalidIndex,
    /// Vessel length outside the supported range.
    InvalidLength(usize),
    /// Attempted to place a vessel that is already placed.
    ShipAlreadyPlaced,
    /// Placement overlaps a non-empty cell.
    ShipOverlaps,
    /// Placement runs off the grid.
    ShipOutOfBounds,
    /// Random placement gave up after exhausting its attempts.
    UnableToPlaceShip,
    /// A shot was already resolved at this cell.
    AlreadyTargeted(Coord),
    /// Sinking was requested for a cell that was never hit.
    NotHit(Coord),
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::InvalidIndex => write!(f, "Index is out of range"),
            BoardError::InvalidLength(len) => write!(f, "Vessel length {} is not supported", len),
            BoardError::ShipAlreadyPlaced => write!(f, "Ship is already placed on the board"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
            BoardError::AlreadyTargeted(c) => write!(f, "Shot already resolved at {}", c),
            BoardError::NotHit(c) => write!(f, "Cell {} cannot sink before it is hit", c),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
