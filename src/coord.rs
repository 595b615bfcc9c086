//! Grid addressing: coordinates, directions and the letter+number notation.
//!
//! Rows render as a letter `A`-`J` and columns as a number `1`-`10`, so the
//! cell at row 2, column 4 is written `C5`. Both are 0-indexed internally.

use core::fmt;
use core::str::FromStr;

use crate::config::BOARD_SIZE;

const GRID: usize = BOARD_SIZE as usize;

/// A cell position on a 10×10 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Build a coordinate without a bounds check.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Build a coordinate, returning `None` when it lies off the grid.
    pub fn checked(row: usize, col: usize) -> Option<Self> {
        if row < GRID && col < GRID {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// True when the coordinate lies on the grid.
    pub fn in_bounds(&self) -> bool {
        self.row < GRID && self.col < GRID
    }

    /// The cell `steps` cells away in `dir`, or `None` past the grid edge.
    pub fn offset(&self, dir: Direction, steps: usize) -> Option<Self> {
        let (dr, dc) = dir.delta();
        let row = shift(self.row, dr, steps)?;
        let col = shift(self.col, dc, steps)?;
        Self::checked(row, col)
    }

    /// Every grid coordinate in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..GRID).flat_map(|row| (0..GRID).map(move |col| Coord { row, col }))
    }
}

fn shift(value: usize, delta: isize, steps: usize) -> Option<usize> {
    match delta {
        0 => Some(value),
        1 => value.checked_add(steps),
        _ => value.checked_sub(steps),
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.row as u8) as char, self.col + 1)
    }
}

/// Errors produced while parsing letter+number notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordParseError {
    /// Input was too short or too long to be a coordinate.
    BadLength,
    /// First character was not a letter.
    BadRow(char),
    /// Trailing characters were not a number.
    BadColumn,
    /// Letter or number falls outside the grid.
    OffGrid,
}

impl fmt::Display for CoordParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordParseError::BadLength | CoordParseError::BadColumn => write!(
                f,
                "the correct format is LetterNumber, with no decimals (ex: C5)"
            ),
            CoordParseError::BadRow(c) => write!(f, "'{}' is not a row letter A-J", c),
            CoordParseError::OffGrid => write!(f, "those coordinates are off the grid"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoordParseError {}

impl FromStr for Coord {
    type Err = CoordParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        if input.len() < 2 || input.len() > 3 {
            return Err(CoordParseError::BadLength);
        }
        let mut chars = input.chars();
        let row_ch = chars.next().ok_or(CoordParseError::BadLength)?;
        if !row_ch.is_ascii_alphabetic() {
            return Err(CoordParseError::BadRow(row_ch));
        }
        let digits = chars.as_str();
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoordParseError::BadColumn);
        }
        let number: usize = digits.parse().map_err(|_| CoordParseError::BadColumn)?;
        let row = (row_ch.to_ascii_uppercase() as u8 - b'A') as usize;
        if number == 0 {
            return Err(CoordParseError::OffGrid);
        }
        Coord::checked(row, number - 1).ok_or(CoordParseError::OffGrid)
    }
}

/// One of the four axis-aligned directions a run can extend in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Row and column step for one cell in this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_letter_number_case_insensitively() {
        assert_eq!("C5".parse::<Coord>(), Ok(Coord::new(2, 4)));
        assert_eq!("c5".parse::<Coord>(), Ok(Coord::new(2, 4)));
        assert_eq!("J10".parse::<Coord>(), Ok(Coord::new(9, 9)));
        assert_eq!(" a1 ".parse::<Coord>(), Ok(Coord::new(0, 0)));
    }

    #[test]
    fn rejects_malformed_and_off_grid() {
        assert_eq!("A".parse::<Coord>(), Err(CoordParseError::BadLength));
        assert_eq!("A100".parse::<Coord>(), Err(CoordParseError::BadLength));
        assert_eq!("5C".parse::<Coord>(), Err(CoordParseError::BadRow('5')));
        assert_eq!("A1.".parse::<Coord>(), Err(CoordParseError::BadColumn));
        assert_eq!("K1".parse::<Coord>(), Err(CoordParseError::OffGrid));
        assert_eq!("A11".parse::<Coord>(), Err(CoordParseError::OffGrid));
        assert_eq!("A0".parse::<Coord>(), Err(CoordParseError::OffGrid));
    }

    #[test]
    fn displays_in_letter_number_form() {
        assert_eq!(std::format!("{}", Coord::new(2, 4)), "C5");
        assert_eq!(std::format!("{}", Coord::new(9, 9)), "J10");
    }

    #[test]
    fn offset_stops_at_the_edge() {
        let corner = Coord::new(0, 0);
        assert_eq!(corner.offset(Direction::Up, 1), None);
        assert_eq!(corner.offset(Direction::Left, 1), None);
        assert_eq!(corner.offset(Direction::Right, 4), Some(Coord::new(0, 4)));
        assert_eq!(corner.offset(Direction::Down, 9), Some(Coord::new(9, 0)));
        assert_eq!(corner.offset(Direction::Down, 10), None);
    }
}
