//! Human player driven from a terminal.

use std::io::{self, BufRead, Stdout, StdinLock, Write};
use std::string::String;

use rand::rngs::SmallRng;

use crate::{
    board::{Board, Grid},
    common::{BoardError, ShotOutcome},
    config::{FLEET, NUM_SHIPS},
    coord::{Coord, CoordParseError, Direction},
    fit::{self, FitPolicy},
    player::{Command, Player, Shot, TurnView},
    ui,
};

/// Input that forfeits the turn's side.
pub const FORFEIT_INPUT: &str = "ff";
/// Input that makes the opponent forfeit.
pub const FORCE_FORFEIT_INPUT: &str = "YOUSUNKMYBATTLESHIP";
/// Input that shows the opponent's fleet.
pub const PEEK_INPUT: &str = "~";

/// How a [`CliPlayer`] sets up its fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementMode {
    Random,
    Manual,
}

/// Parse one line of turn input.
///
/// `ff` or `FF` forfeits, `YOUSUNKMYBATTLESHIP` forces the opponent to
/// forfeit, `~` peeks. Anything else must be a coordinate such as `C5`.
pub fn parse_command(input: &str) -> Result<Command, CoordParseError> {
    let input = input.trim();
    match input {
        "ff" | "FF" => Ok(Shot::Forfeit.into()),
        FORCE_FORFEIT_INPUT => Ok(Shot::ForceOpponentForfeit.into()),
        PEEK_INPUT => Ok(Command::Peek),
        _ => input.parse::<Coord>().map(|c| Shot::Fire(c).into()),
    }
}

/// Parse a direction menu choice. `None` means re-enter the origin.
pub fn parse_direction_choice(input: &str) -> Option<Option<Direction>> {
    match input.trim() {
        "1" => Some(Some(Direction::Right)),
        "2" => Some(Some(Direction::Down)),
        "3" => Some(Some(Direction::Left)),
        "4" => Some(Some(Direction::Up)),
        "5" => Some(None),
        _ => None,
    }
}

/// Parse a play-again menu choice: `1` is yes, `2` is no.
pub fn parse_play_again(input: &str) -> Option<bool> {
    match input.trim() {
        "1" => Some(true),
        "2" => Some(false),
        _ => None,
    }
}

/// Terminal player reading commands from `input` and printing to `output`.
///
/// End of input is treated as a forfeit.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
    placement: PlacementMode,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player attached to the process's stdin and stdout.
    pub fn new(placement: PlacementMode) -> Self {
        Self::with_io(io::stdin().lock(), io::stdout(), placement)
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn with_io(input: R, output: W, placement: PlacementMode) -> Self {
        Self {
            input,
            output,
            placement,
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> Option<String> {
        let _ = self.output.flush();
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().into()),
        }
    }

    fn say(&mut self, text: &str) {
        let _ = writeln!(self.output, "{}", text);
    }

    fn prompt(&mut self, text: &str) {
        let _ = write!(self.output, "{}", text);
    }

    /// Ask whether to start another session. End of input means no.
    pub fn ask_play_again(&mut self) -> bool {
        loop {
            self.say("\nPLAY AGAIN?");
            self.say("1. Yes");
            self.say("2. No");
            self.prompt("> ");
            let Some(line) = self.read_line() else {
                return false;
            };
            match parse_play_again(&line) {
                Some(true) => return true,
                Some(false) => {
                    self.say("Goodbye!");
                    return false;
                }
                None => self.say("Invalid entry, please enter either 1 or 2."),
            }
        }
    }

    /// Ask for a direction until the vessel fits. `None` asks for a new origin.
    fn choose_direction(&mut self, board: &Board, origin: Coord, length: usize) -> Option<Direction> {
        loop {
            self.say("Which direction should the ship extend?");
            self.say("  1) Right  2) Down  3) Left  4) Up  5) Re-enter origin");
            self.prompt("> ");
            let line = self.read_line()?;
            match parse_direction_choice(&line) {
                Some(Some(dir)) if fit::fits(board.own(), origin, length, dir, FitPolicy::Placement) => {
                    return Some(dir);
                }
                Some(Some(_)) => self.say("The ship does not fit that way. Pick another direction."),
                Some(None) => return None,
                None => self.say("Enter a number from 1 to 5."),
            }
        }
    }

    fn place_manually(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError> {
        self.say("Place your ships. Press Enter to place a ship at random.");
        for index in 0..NUM_SHIPS {
            let class = FLEET[index];
            loop {
                let _ = ui::write_grid(&mut self.output, board.own(), true);
                self.prompt(&std::format!(
                    "Origin for {} (length {}), e.g. C5: ",
                    class.name(),
                    class.length()
                ));
                let Some(line) = self.read_line() else {
                    return board.place_randomly(rng);
                };
                if line.is_empty() {
                    let (origin, dir) = board.random_placement(rng, index)?;
                    board.place(index, origin, dir)?;
                    break;
                }
                let origin = match line.parse::<Coord>() {
                    Ok(c) => c,
                    Err(e) => {
                        self.say(&std::format!("Invalid input: {}", e));
                        continue;
                    }
                };
                if let Some(dir) = self.choose_direction(board, origin, class.length()) {
                    board.place(index, origin, dir)?;
                    break;
                }
            }
        }
        let _ = ui::write_grid(&mut self.output, board.own(), true);
        Ok(())
    }

    fn show_turn(&mut self, view: &TurnView) {
        self.say(&std::format!("\n{} - YOUR FLEET", view.variant));
        let _ = ui::write_grid(&mut self.output, &view.own, true);
        let _ = ui::write_fleet_status(&mut self.output, &view.fleet);
        self.say("\nYOUR SHOTS");
        let _ = ui::write_grid(&mut self.output, &view.targeting, false);
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn place_fleet(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError> {
        match self.placement {
            PlacementMode::Random => {
                board.place_randomly(rng)?;
                self.say("Your ships were placed at random.");
                let _ = ui::write_grid(&mut self.output, board.own(), true);
                Ok(())
            }
            PlacementMode::Manual => self.place_manually(rng, board),
        }
    }

    fn next_command(&mut self, view: &TurnView) -> Command {
        if view.shot_index == 0 {
            self.show_turn(view);
        }
        loop {
            self.prompt(&std::format!(
                "Shot {}/{}: enter a target (ex: C5), {} to peek, {} to forfeit: ",
                view.shot_index + 1,
                view.shots,
                PEEK_INPUT,
                FORFEIT_INPUT
            ));
            let Some(line) = self.read_line() else {
                return Shot::Forfeit.into();
            };
            match parse_command(&line) {
                Ok(Command::Shot(Shot::Fire(target))) if !view.can_target(target) => {
                    self.say(&std::format!("You have already fired at {}.", target));
                }
                Ok(command) => return command,
                Err(e) => self.say(&std::format!("Invalid input: {}", e)),
            }
        }
    }

    fn handle_shot_result(&mut self, target: Coord, outcome: ShotOutcome) {
        self.say(&std::format!("You fired at {}: {}", target, outcome));
    }

    fn handle_opponent_shot(&mut self, target: Coord, outcome: ShotOutcome) {
        self.say(&std::format!("Opponent fired at {}: {}", target, outcome));
    }

    fn reveal_opponent(&mut self, grid: &Grid) {
        self.say("\nOPPONENT FLEET");
        let _ = ui::write_grid(&mut self.output, grid, true);
    }
}
