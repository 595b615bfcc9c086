//! Directional fit checks shared by placement and targeting.
//!
//! A run is `length` contiguous cells starting at an origin and extending in
//! one direction. Placement and targeting disagree on which cells block a run,
//! so the policy is passed alongside the direction.

use crate::board::{Cell, Grid};
use crate::coord::{Coord, Direction};

/// Which cells disqualify a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitPolicy {
    /// Any non-empty cell of the run blocks it.
    Placement,
    /// A miss or sunk cell strictly between the run's endpoints blocks it.
    /// Hit cells are a valid continuation of a damaged vessel.
    Targeting,
}

impl FitPolicy {
    fn blocks(self, cell: Cell) -> bool {
        match self {
            FitPolicy::Placement => cell != Cell::Empty,
            FitPolicy::Targeting => matches!(cell, Cell::Miss | Cell::Sunk),
        }
    }
}

/// Cells of the run from `origin`, or `None` if any of them is off the grid.
pub fn run(origin: Coord, length: usize, direction: Direction) -> Option<impl Iterator<Item = Coord>> {
    if length == 0 || !origin.in_bounds() {
        return None;
    }
    origin.offset(direction, length - 1)?;
    Some((0..length).filter_map(move |step| origin.offset(direction, step)))
}

/// Whether a run of `length` cells from `origin` in `direction` stays on the
/// grid and avoids every cell `policy` disqualifies.
pub fn fits(grid: &Grid, origin: Coord, length: usize, direction: Direction, policy: FitPolicy) -> bool {
    let Some(cells) = run(origin, length, direction) else {
        return false;
    };
    match policy {
        FitPolicy::Placement => cells.into_iter().all(|c| !policy.blocks(grid.get(c))),
        FitPolicy::Targeting => cells
            .skip(1)
            .take(length.saturating_sub(2))
            .all(|c| !policy.blocks(grid.get(c))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_rejects_off_grid_tail() {
        assert!(run(Coord::new(0, 7), 3, Direction::Right).is_some());
        assert!(run(Coord::new(0, 8), 3, Direction::Right).is_none());
        assert!(run(Coord::new(1, 0), 3, Direction::Up).is_none());
        assert!(run(Coord::new(0, 0), 0, Direction::Down).is_none());
    }

    #[test]
    fn targeting_ignores_endpoints() {
        let mut grid = Grid::new();
        grid.set(Coord::new(0, 2), Cell::Miss);
        // endpoints are (0,0) and (0,2); only (0,1) is checked
        assert!(fits(&grid, Coord::new(0, 0), 3, Direction::Right, FitPolicy::Targeting));
        assert!(!fits(&grid, Coord::new(0, 0), 4, Direction::Right, FitPolicy::Targeting));
        assert!(!fits(&grid, Coord::new(0, 0), 3, Direction::Right, FitPolicy::Placement));
    }
}
