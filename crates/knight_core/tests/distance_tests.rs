//! All-pairs checks of the knight shortest-path search.
//!
//! Every one of the 4096 (start, target) pairs is searched and compared
//! against the layered distance table; the sweep runs in parallel.

use rayon::prelude::*;

use knight_core::{Square, is_knight_path, knight_distances, knight_moves, shortest_knight_path};

fn all_pairs() -> Vec<(Square, Square)> {
    Square::all()
        .flat_map(|a| Square::all().map(move |b| (a, b)))
        .collect()
}

#[test]
fn test_every_pair_is_reachable_with_a_valid_shortest_path() {
    let tables: Vec<[Option<u8>; 64]> = Square::all().map(knight_distances).collect();

    let failures: Vec<String> = all_pairs()
        .par_iter()
        .filter_map(|&(a, b)| {
            let result = shortest_knight_path(a, b);
            let Some(d) = result.distance else {
                return Some(format!("{a} -> {b}: unreachable"));
            };
            let expected = tables[a.index()][b.index()].map(u32::from);
            if Some(d) != expected {
                return Some(format!("{a} -> {b}: got {d}, expected {expected:?}"));
            }
            if result.path.len() != d as usize + 1
                || result.path.first() != Some(&a)
                || result.path.last() != Some(&b)
                || !is_knight_path(&result.path)
            {
                return Some(format!("{a} -> {b}: bad path {:?}", result.path));
            }
            None
        })
        .collect();

    assert!(failures.is_empty(), "{} failures:\n{}", failures.len(), failures.join("\n"));
}

#[test]
fn test_distance_is_symmetric() {
    let asymmetric = all_pairs()
        .par_iter()
        .filter(|&&(a, b)| {
            shortest_knight_path(a, b).distance != shortest_knight_path(b, a).distance
        })
        .count();
    assert_eq!(asymmetric, 0);
}

#[test]
fn test_board_diameter_is_six() {
    let max = all_pairs()
        .par_iter()
        .filter_map(|&(a, b)| shortest_knight_path(a, b).distance)
        .max();
    assert_eq!(max, Some(6));

    // Only opposite corners are six apart: a1/h8 and h1/a8, both directions
    let farthest: Vec<String> = all_pairs()
        .into_iter()
        .filter(|&(a, b)| shortest_knight_path(a, b).distance == Some(6))
        .map(|(a, b)| format!("{a}{b}"))
        .collect();
    assert_eq!(farthest, vec!["a1h8", "h1a8", "a8h1", "h8a1"]);
}

#[test]
fn test_one_move_pairs_match_generator() {
    for a in Square::all() {
        for b in Square::all() {
            let one_move = shortest_knight_path(a, b).distance == Some(1);
            assert_eq!(one_move, knight_moves(a).contains(b), "{a} -> {b}");
        }
    }
}
