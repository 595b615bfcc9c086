//! Per-side board state: own-ship grid, targeting grid and fleet.

use core::fmt;
use log::{trace, warn};
use rand::Rng;

use crate::common::BoardError;
use crate::config::{BOARD_SIZE, FLEET, NUM_SHIPS};
use crate::coord::{Coord, Direction};
use crate::fit::{self, FitPolicy};
use crate::vessel::{Footprint, Vessel};

const GRID: usize = BOARD_SIZE as usize;

/// Placement gives up after this many random draws for one vessel.
const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// State of one grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Cell {
    Empty,
    /// A vessel segment that has not been fired on.
    Occupied,
    Miss,
    Hit,
    Sunk,
    /// An intercepted shot. The cell can be fired on again.
    ShotDown,
}

impl Cell {
    /// Whether a shot may still be resolved on this cell.
    pub fn is_open(self) -> bool {
        matches!(self, Cell::Empty | Cell::Occupied | Cell::ShotDown)
    }
}

/// A 10×10 grid of cells addressed by [`Coord`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cells: [[Cell; GRID]; GRID],
}

impl Grid {
    /// An all-empty grid.
    pub fn new() -> Self {
        Grid {
            cells: [[Cell::Empty; GRID]; GRID],
        }
    }

    /// State of the cell at `coord`.
    ///
    /// # Panics
    /// Panics if `coord` is off the grid.
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.row][coord.col]
    }

    /// Overwrite a cell without any transition check.
    ///
    /// # Panics
    /// Panics if `coord` is off the grid.
    pub fn set(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.row][coord.col] = cell;
    }

    /// Write the result of a fresh shot. Fails if the cell already holds a
    /// resolved shot; shot-down cells stay open.
    pub fn record_outcome(&mut self, coord: Coord, outcome: Cell) -> Result<(), BoardError> {
        let current = self.checked_get(coord)?;
        if !current.is_open() {
            return Err(BoardError::AlreadyTargeted(coord));
        }
        self.set(coord, outcome);
        Ok(())
    }

    /// Turn a hit cell into a sunk cell.
    pub fn mark_sunk(&mut self, coord: Coord) -> Result<(), BoardError> {
        match self.checked_get(coord)? {
            Cell::Hit | Cell::Sunk => {
                self.set(coord, Cell::Sunk);
                Ok(())
            }
            _ => Err(BoardError::NotHit(coord)),
        }
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: Cell) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == state)
            .count()
    }

    /// Every coordinate with its cell, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        Coord::all().map(move |c| (c, self.get(c)))
    }

    fn checked_get(&self, coord: Coord) -> Result<Cell, BoardError> {
        if !coord.in_bounds() {
            return Err(crate::bitboard::BitBoardError::IndexOutOfBounds {
                row: coord.row,
                col: coord.col,
            }
            .into());
        }
        Ok(self.get(coord))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.iter() {
            for cell in row.iter() {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::Occupied => 'S',
                    Cell::Miss => 'o',
                    Cell::Hit => 'X',
                    Cell::Sunk => '#',
                    Cell::ShotDown => '+',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The five vessel slots of one side, indexed like [`FLEET`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fleet {
    slots: [Option<Vessel>; NUM_SHIPS],
    occupancy: Footprint,
}

impl Fleet {
    pub fn new() -> Self {
        Fleet {
            slots: [None; NUM_SHIPS],
            occupancy: Footprint::new(),
        }
    }

    /// Vessel in slot `index`, if placed.
    pub fn vessel(&self, index: usize) -> Option<&Vessel> {
        self.slots.get(index).and_then(|slot| slot.as_ref())
    }

    /// Placed vessels with their slot index.
    pub fn vessels(&self) -> impl Iterator<Item = (usize, &Vessel)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|v| (i, v)))
    }

    pub fn placed_count(&self) -> usize {
        self.vessels().count()
    }

    /// Number of placed vessels still afloat.
    pub fn afloat_count(&self) -> usize {
        self.vessels().filter(|(_, v)| !v.is_sunk()).count()
    }

    /// True when no placed vessel is afloat.
    pub fn is_destroyed(&self) -> bool {
        self.afloat_count() == 0
    }

    /// Slot index of the vessel occupying `coord`.
    pub fn find(&self, coord: Coord) -> Option<usize> {
        if !self.occupancy.contains(coord) {
            return None;
        }
        self.vessels().find(|(_, v)| v.contains(coord)).map(|(i, _)| i)
    }

    /// Union of every placed vessel's footprint.
    pub fn occupancy(&self) -> Footprint {
        self.occupancy
    }

    pub(crate) fn vessel_mut(&mut self, index: usize) -> Option<&mut Vessel> {
        self.slots.get_mut(index).and_then(|slot| slot.as_mut())
    }

    pub(crate) fn scuttle_all(&mut self) {
        for vessel in self.slots.iter_mut().flatten() {
            vessel.scuttle();
        }
    }

    fn insert(&mut self, index: usize, vessel: Vessel) -> Result<(), BoardError> {
        if !(self.occupancy & vessel.mask()).is_empty() {
            return Err(BoardError::ShipOverlaps);
        }
        self.occupancy |= vessel.mask();
        self.slots[index] = Some(vessel);
        Ok(())
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything one side owns: its fleet, the grid its fleet sits on, and the
/// grid of shots it has fired at the opponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) own: Grid,
    pub(crate) targeting: Grid,
    pub(crate) fleet: Fleet,
}

impl Board {
    /// Create a board with no vessels placed and no shots fired.
    pub fn new() -> Self {
        Board {
            own: Grid::new(),
            targeting: Grid::new(),
            fleet: Fleet::new(),
        }
    }

    /// Own-ship grid: placement and damage taken.
    pub fn own(&self) -> &Grid {
        &self.own
    }

    /// Targeting grid: observed results of shots fired at the opponent.
    pub fn targeting(&self) -> &Grid {
        &self.targeting
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// True when every fleet slot holds a vessel.
    pub fn fully_placed(&self) -> bool {
        self.fleet.placed_count() == NUM_SHIPS
    }

    /// Place the vessel of slot `index` at `origin`, extending in `direction`.
    pub fn place(&mut self, index: usize, origin: Coord, direction: Direction) -> Result<(), BoardError> {
        if index >= NUM_SHIPS {
            return Err(BoardError::InvalidIndex);
        }
        if self.fleet.vessel(index).is_some() {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        let vessel = Vessel::new(FLEET[index], origin, direction)?;
        if !fit::fits(&self.own, origin, vessel.length(), direction, FitPolicy::Placement) {
            return Err(BoardError::ShipOverlaps);
        }
        self.fleet.insert(index, vessel)?;
        for &coord in vessel.coords() {
            self.own.set(coord, Cell::Occupied);
        }
        Ok(())
    }

    /// Returns a random valid origin and direction for slot `index`.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        index: usize,
    ) -> Result<(Coord, Direction), BoardError> {
        if index >= NUM_SHIPS {
            return Err(BoardError::InvalidIndex);
        }
        let len = FLEET[index].length();
        for attempt in 0..MAX_PLACEMENT_ATTEMPTS {
            let origin = Coord::new(rng.random_range(0..GRID), rng.random_range(0..GRID));
            let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
            if fit::fits(&self.own, origin, len, direction, FitPolicy::Placement) {
                trace!(
                    "placement for {} found after {} attempts",
                    FLEET[index].name(),
                    attempt + 1
                );
                return Ok((origin, direction));
            }
        }
        warn!(
            "no placement found for {} after {} attempts",
            FLEET[index].name(),
            MAX_PLACEMENT_ATTEMPTS
        );
        Err(BoardError::UnableToPlaceShip)
    }

    /// Randomly place every vessel not yet on the board.
    pub fn place_randomly<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        for index in 0..NUM_SHIPS {
            if self.fleet.vessel(index).is_some() {
                continue;
            }
            let (origin, direction) = self.random_placement(rng, index)?;
            self.place(index, origin, direction)?;
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
