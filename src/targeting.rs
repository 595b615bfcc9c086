//! Shot selection for the computer side.
//!
//! Every open cell of the targeting grid gets an integer weight: the number of
//! runs of a still-possible vessel length that cover it, counted once from
//! each end. Cells next to an unfinished hit get a bonus, shot-down cells are
//! pinned above everything else, and resolved cells stay at zero. The heaviest
//! cell is fired on, ties broken row-major.

use log::trace;

use crate::{
    board::{Cell, Fleet, Grid},
    config::{BOARD_SIZE, MAX_VESSEL_LEN},
    coord::{Coord, Direction},
    fit::{self, FitPolicy},
};

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// Bonus for the cell next to a confirmed hit.
pub const ADJACENT_HIT_BONUS: u32 = 100;
/// Bonus for the cell two away from a confirmed hit.
pub const NEAR_HIT_BONUS: u32 = 50;
/// Weight forced onto shot-down cells so they are fired on again first.
pub const SHOT_DOWN_WEIGHT: u32 = 1_000_000;

/// Per-cell weights, indexed `[row][col]`.
pub type WeightMap = [[u32; GRID_SIZE]; GRID_SIZE];

/// Count, for every cell, how many ways a surviving vessel could cover it
/// given the shots observed so far, then bias towards finishing damaged
/// vessels. Resolved cells always end up at zero.
pub fn weight_map(grid: &Grid, smallest_alive: usize) -> WeightMap {
    let mut weights = [[0u32; GRID_SIZE]; GRID_SIZE];
    let smallest = smallest_alive.clamp(1, MAX_VESSEL_LEN);

    for (coord, cell) in grid.iter() {
        match cell {
            Cell::Empty => {
                for len in smallest..=MAX_VESSEL_LEN {
                    for dir in Direction::ALL {
                        if !fit::fits(grid, coord, len, dir, FitPolicy::Targeting) {
                            continue;
                        }
                        if let Some(run) = fit::run(coord, len, dir) {
                            for c in run {
                                weights[c.row][c.col] += 1;
                            }
                        }
                    }
                }
            }
            Cell::Hit => {
                for dir in Direction::ALL {
                    if fit::fits(grid, coord, 3, dir, FitPolicy::Targeting) {
                        add(&mut weights, coord.offset(dir, 1), ADJACENT_HIT_BONUS);
                        add(&mut weights, coord.offset(dir, 2), NEAR_HIT_BONUS);
                    } else if fit::fits(grid, coord, 2, dir, FitPolicy::Targeting) {
                        add(&mut weights, coord.offset(dir, 1), ADJACENT_HIT_BONUS);
                    }
                }
            }
            _ => {}
        }
    }

    for (coord, cell) in grid.iter() {
        match cell {
            Cell::ShotDown => weights[coord.row][coord.col] = SHOT_DOWN_WEIGHT,
            Cell::Hit | Cell::Miss | Cell::Sunk => weights[coord.row][coord.col] = 0,
            _ => {}
        }
    }
    weights
}

fn add(weights: &mut WeightMap, coord: Option<Coord>, bonus: u32) {
    if let Some(c) = coord {
        weights[c.row][c.col] += bonus;
    }
}

/// Coordinate of the heaviest cell. Ties go to the first cell in row-major
/// order. With an all-zero map the first open cell is chosen instead.
pub fn best_target(weights: &WeightMap, grid: &Grid) -> Coord {
    let mut best: Option<(Coord, u32)> = None;
    for coord in Coord::all() {
        let w = weights[coord.row][coord.col];
        if w > best.map_or(0, |(_, bw)| bw) {
            best = Some((coord, w));
        }
    }
    match best {
        Some((coord, _)) => coord,
        None => grid
            .iter()
            .find(|(_, cell)| matches!(cell, Cell::Empty | Cell::ShotDown))
            .map(|(coord, _)| coord)
            .unwrap_or(Coord::new(GRID_SIZE - 1, GRID_SIZE - 1)),
    }
}

/// Build the weight map and pick the best next shot.
pub fn select_target(grid: &Grid, smallest_alive: usize) -> Coord {
    let weights = weight_map(grid, smallest_alive);
    let target = best_target(&weights, grid);
    trace!(
        "selected {} with weight {}",
        target,
        weights[target.row][target.col]
    );
    target
}

/// Length of the shortest vessel still afloat, or the longest class length
/// when nothing is afloat.
pub fn smallest_vessel_alive(fleet: &Fleet) -> usize {
    fleet
        .vessels()
        .filter(|(_, v)| !v.is_sunk())
        .map(|(_, v)| v.length())
        .min()
        .unwrap_or(MAX_VESSEL_LEN)
}
