//! Terminal rendering of grids, fleet status and weight maps.

use std::io::{self, Write};
use std::string::String;

use rand::rngs::SmallRng;

use crate::{
    board::{Board, Cell, Fleet, Grid},
    common::{BoardError, ShotOutcome},
    config::{BOARD_SIZE, FLEET},
    coord::Coord,
    player::{Command, Player, TurnView},
    targeting::{self, WeightMap},
};

const GRID: usize = BOARD_SIZE as usize;
const RULE: &str = "  -----------------------------------------";

/// `name` with a combining strike-through on every character.
pub fn strike(name: &str) -> String {
    let mut struck = String::with_capacity(name.len() * 3);
    for ch in name.chars() {
        struck.push('\u{0336}');
        struck.push(ch);
    }
    struck
}

fn symbol(cell: Cell, reveal_ships: bool) -> String {
    match cell {
        Cell::Empty => "   ".into(),
        Cell::Occupied if reveal_ships => "!S!".into(),
        Cell::Occupied => "   ".into(),
        Cell::Miss => " O ".into(),
        Cell::Hit => " X ".into(),
        Cell::Sunk => strike(" X "),
        Cell::ShotDown => " + ".into(),
    }
}

fn header<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "\n   ")?;
    for col in 1..=GRID {
        write!(out, " {:>2} ", col)?;
    }
    writeln!(out)?;
    writeln!(out, "{}", RULE)
}

/// Render a grid with lettered rows and numbered columns.
pub fn write_grid<W: Write>(out: &mut W, grid: &Grid, reveal_ships: bool) -> io::Result<()> {
    header(out)?;
    for row in 0..GRID {
        write!(out, "{} |", (b'A' + row as u8) as char)?;
        for col in 0..GRID {
            let cell = grid.get(crate::coord::Coord::new(row, col));
            write!(out, "{}|", symbol(cell, reveal_ships))?;
        }
        writeln!(out)?;
        writeln!(out, "{}", RULE)?;
    }
    Ok(())
}

/// Render each vessel's remaining health; sunk vessels are struck through.
pub fn write_fleet_status<W: Write>(out: &mut W, fleet: &Fleet) -> io::Result<()> {
    for (index, class) in FLEET.iter().enumerate() {
        let Some(vessel) = fleet.vessel(index) else {
            writeln!(out, "  {:<12} (not placed)", class.name())?;
            continue;
        };
        let name = if vessel.is_sunk() {
            strike(vessel.name())
        } else {
            vessel.name().into()
        };
        let mut bar = String::new();
        for segment in 0..vessel.length() {
            bar.push('|');
            if vessel.is_sunk() {
                bar.push_str(&strike(" X "));
            } else if segment < vessel.damage_taken() {
                bar.push_str(" X ");
            } else {
                bar.push_str("   ");
            }
        }
        bar.push('|');
        writeln!(out, "  {:<12} {} {}/{}", name, bar, vessel.health(), vessel.length())?;
    }
    Ok(())
}

/// Render the targeting weight map cell by cell.
pub fn write_weight_map<W: Write>(out: &mut W, weights: &WeightMap) -> io::Result<()> {
    writeln!(out, "\nCOMPUTER TARGETING WEIGHTS")?;
    write!(out, "   ")?;
    for col in 1..=GRID {
        write!(out, " {:>7}", col)?;
    }
    writeln!(out)?;
    for (row, line) in weights.iter().enumerate() {
        write!(out, "{}  ", (b'A' + row as u8) as char)?;
        for w in line.iter() {
            write!(out, " {:>7}", w)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Wraps a player and prints the weight map it is aiming with at the start of
/// each of its turns.
pub struct ShowWeights<P, W> {
    inner: P,
    out: W,
}

impl<P, W> ShowWeights<P, W> {
    pub fn new(inner: P, out: W) -> Self {
        Self { inner, out }
    }

    pub fn into_inner(self) -> (P, W) {
        (self.inner, self.out)
    }
}

impl<P: Player, W: Write> Player for ShowWeights<P, W> {
    fn place_fleet(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError> {
        self.inner.place_fleet(rng, board)
    }

    fn next_command(&mut self, view: &TurnView) -> Command {
        if view.shot_index == 0 {
            let weights = targeting::weight_map(&view.targeting, view.opponent_smallest_afloat);
            // display only
            let _ = write_weight_map(&mut self.out, &weights);
        }
        self.inner.next_command(view)
    }

    fn handle_shot_result(&mut self, target: Coord, outcome: ShotOutcome) {
        self.inner.handle_shot_result(target, outcome);
    }

    fn handle_opponent_shot(&mut self, target: Coord, outcome: ShotOutcome) {
        self.inner.handle_opponent_shot(target, outcome);
    }

    fn reveal_opponent(&mut self, grid: &Grid) {
        self.inner.reveal_opponent(grid);
    }
}
