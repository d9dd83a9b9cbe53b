//! Board squares and their algebraic names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseSquareError;

/// Files (and ranks) per side of the board.
pub const BOARD_SIZE: i8 = 8;

/// A square on the 8x8 board.
///
/// Index = rank * 8 + file, so a1 = 0, b1 = 1, ..., h8 = 63. The textual
/// form (`"e4"`) is the only interchange format, so serde goes through it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Square from signed file/rank coordinates, `None` when off the board.
    pub const fn new(file: i8, rank: i8) -> Option<Square> {
        if file >= 0 && file < BOARD_SIZE && rank >= 0 && rank < BOARD_SIZE {
            Some(Square((rank as u8) * 8 + file as u8))
        } else {
            None
        }
    }

    /// Square from in-range coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `file` or `rank` is not in `0..8`. Callers only build squares
    /// from coordinates they already know to be on the board.
    pub const fn at(file: u8, rank: u8) -> Square {
        assert!(file < 8 && rank < 8, "square coordinates out of range");
        Square(rank * 8 + file)
    }

    /// Square from a zero-based index, `None` if out of range.
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 { Some(Square(index)) } else { None }
    }

    pub(crate) const fn from_index_unchecked(index: u8) -> Square {
        debug_assert!(index < 64);
        Square(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// File 0..8 (a..h).
    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Rank 0..8 (1..8).
    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// The square `df` files and `dr` ranks away, if it is on the board.
    pub const fn offset(self, df: i8, dr: i8) -> Option<Square> {
        Square::new(self.file() as i8 + df, self.rank() as i8 + dr)
    }

    /// Light squares have an odd file + rank sum; a1 is dark.
    pub const fn is_light(self) -> bool {
        (self.file() + self.rank()) % 2 == 1
    }

    /// All 64 squares in index order (a1, b1, ..., h8).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).filter_map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.file()) as char;
        let rank = (b'1' + self.rank()) as char;
        write!(f, "{file}{rank}")
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let b = s.as_bytes();
        if b.len() != 2 {
            return Err(ParseSquareError(s.to_string()));
        }
        let (f, r) = (b[0], b[1]);
        if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
            return Err(ParseSquareError(s.to_string()));
        }
        Ok(Square::at(f - b'a', r - b'1'))
    }
}

impl TryFrom<String> for Square {
    type Error = ParseSquareError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Square> for String {
    fn from(sq: Square) -> String {
        sq.to_string()
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
