//! Knight move generation.
//!
//! Knight routing ignores occupancy entirely: the knight graph is plain
//! reachability on an empty board, so the table below is the whole adjacency.

use crate::squareset::SquareSet;
use crate::types::{BOARD_SIZE, Square};

/// The eight (file, rank) jumps of a knight.
pub const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Pre-computed knight destinations for each square.
pub static KNIGHT_MOVES: [SquareSet; 64] = {
    let mut table = [SquareSet::EMPTY; 64];
    let mut idx = 0usize;
    while idx < 64 {
        let file = (idx % 8) as i8;
        let rank = (idx / 8) as i8;

        let mut bits = 0u64;
        let mut d = 0;
        while d < KNIGHT_DELTAS.len() {
            let (df, dr) = KNIGHT_DELTAS[d];
            let f = file + df;
            let r = rank + dr;
            // Drop jumps that leave the board
            if f >= 0 && f < BOARD_SIZE && r >= 0 && r < BOARD_SIZE {
                bits |= 1u64 << ((r * 8 + f) as u32);
            }
            d += 1;
        }

        table[idx] = SquareSet(bits);
        idx += 1;
    }
    table
};

/// Squares one knight jump away from `sq`: 2 in a corner, 8 in the centre.
#[inline(always)]
pub fn knight_moves(sq: Square) -> SquareSet {
    KNIGHT_MOVES[sq.index()]
}

#[inline]
pub fn is_knight_move(from: Square, to: Square) -> bool {
    knight_moves(from).contains(to)
}

/// True when `path` is non-empty and every consecutive pair is a knight jump.
pub fn is_knight_path(path: &[Square]) -> bool {
    !path.is_empty() && path.windows(2).all(|w| is_knight_move(w[0], w[1]))
}

#[cfg(test)]
#[path = "moves_tests.rs"]
mod moves_tests;
