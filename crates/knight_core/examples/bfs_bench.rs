//! Shortest-path benchmark for profiling with cargo-flamegraph.
//!
//! Runs the knight BFS over a handful of representative pairs, then over
//! all 4096 pairs of the board.
//!
//! Usage:
//!   cargo flamegraph --example bfs_bench -p knight_core

use knight_core::{Square, shortest_knight_path};
use std::time::{Duration, Instant};

/// Pairs covering short, typical and worst-case routes
const TEST_PAIRS: &[(&str, &str, &str)] = &[
    ("One move", "b1", "c3"),
    ("Adjacent", "a1", "b1"),
    ("Fallback", "b1", "c5"),
    ("Centre", "d4", "e5"),
    ("Across", "a4", "h5"),
    ("Corner to corner", "a1", "h8"),
];

const ITERATIONS: usize = 20_000;

fn main() {
    println!("=== Knight BFS Benchmark ===");
    println!("Iterations per pair: {ITERATIONS}");
    println!();

    let mut total_time = Duration::ZERO;

    for (name, from, to) in TEST_PAIRS {
        let (Ok(a), Ok(b)) = (from.parse::<Square>(), to.parse::<Square>()) else {
            eprintln!("bad pair {from}-{to}");
            continue;
        };

        print!("{name:.<20}");

        let start = Instant::now();
        let mut nodes = 0u64;
        let mut distance = None;
        for _ in 0..ITERATIONS {
            let result = shortest_knight_path(a, b);
            nodes += result.nodes_expanded as u64;
            distance = result.distance;
        }

        let elapsed = start.elapsed();
        total_time += elapsed;
        let per_search = elapsed / ITERATIONS as u32;
        let nodes_per = nodes as f64 / ITERATIONS as f64;

        println!(
            " dist {:>1}, {nodes_per:>5.1} nodes/search, {per_search:>9.3?}/search",
            distance.map_or_else(|| "-".to_string(), |d| d.to_string())
        );
    }

    println!();
    let start = Instant::now();
    let mut sum = 0u64;
    for a in Square::all() {
        for b in Square::all() {
            sum += shortest_knight_path(a, b).distance.unwrap_or(0) as u64;
        }
    }
    let all_pairs = start.elapsed();

    println!("{:=<70}", "");
    println!("ALL PAIRS: 4096 searches in {all_pairs:.3?} (mean distance {:.3})", sum as f64 / 4096.0);
    println!("TOTAL: {:.3?}", total_time + all_pairs);
}
