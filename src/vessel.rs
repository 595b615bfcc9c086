//! Vessel definitions: class, footprint and damage tracking.

use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::BoardError;
use crate::config::{BOARD_SIZE, MAX_VESSEL_LEN};
use crate::coord::{Coord, Direction};

/// Footprint mask type shared by vessels and fleets.
pub type Footprint = BitBoard<u128, { BOARD_SIZE as usize }>;

/// Class of vessel: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VesselClass {
    name: &'static str,
    length: usize,
}

impl VesselClass {
    /// Create a new vessel class.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// Lifecycle of a vessel. `Sunk` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum VesselState {
    Afloat,
    Sunk,
}

/// A vessel placed on the board, with health tracked per hit.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Vessel {
    class: VesselClass,
    coords: [Coord; MAX_VESSEL_LEN],
    mask: Footprint,
    health: usize,
    state: VesselState,
}

impl Vessel {
    /// Place a vessel at `origin`, extending `length` cells in `direction`.
    pub fn new(class: VesselClass, origin: Coord, direction: Direction) -> Result<Self, BoardError> {
        let len = class.length();
        if len == 0 || len > MAX_VESSEL_LEN {
            return Err(BoardError::InvalidLength(len));
        }
        let mut coords = [origin; MAX_VESSEL_LEN];
        for (step, slot) in coords.iter_mut().enumerate().take(len) {
            *slot = origin
                .offset(direction, step)
                .ok_or(BoardError::ShipOutOfBounds)?;
        }
        let mask = Footprint::from_coords(coords[..len].iter().copied())?;
        Ok(Vessel {
            class,
            coords,
            mask,
            health: len,
            state: VesselState::Afloat,
        })
    }

    /// Apply one point of damage. Returns `true` when this hit took the last
    /// point of health.
    pub fn damage(&mut self) -> bool {
        if self.health == 0 {
            return false;
        }
        self.health -= 1;
        if self.health == 0 {
            self.state = VesselState::Sunk;
            return true;
        }
        false
    }

    /// Sink the vessel without damage, as happens when its side forfeits.
    pub fn scuttle(&mut self) {
        self.state = VesselState::Sunk;
    }

    pub fn class(&self) -> VesselClass {
        self.class
    }

    pub fn name(&self) -> &'static str {
        self.class.name()
    }

    pub fn length(&self) -> usize {
        self.class.length()
    }

    /// Remaining hit points.
    pub fn health(&self) -> usize {
        self.health
    }

    /// Hits registered against the vessel.
    pub fn damage_taken(&self) -> usize {
        self.length() - self.health
    }

    pub fn state(&self) -> VesselState {
        self.state
    }

    pub fn is_sunk(&self) -> bool {
        self.state == VesselState::Sunk
    }

    /// Coordinates in placement order, starting at the origin.
    pub fn coords(&self) -> &[Coord] {
        &self.coords[..self.length()]
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.mask.contains(coord)
    }

    /// Occupancy mask of the vessel on the board.
    pub fn mask(&self) -> Footprint {
        self.mask
    }
}

impl fmt::Debug for Vessel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vessel {{ name: \"{}\", coords: {:?}, health: {}/{}, state: {:?} }}",
            self.name(),
            self.coords(),
            self.health,
            self.length(),
            self.state,
        )
    }
}
