//! Text rendering of the trainer board.

use knight_core::{RouteTrainer, Square};
use rand::Rng;

/// Draw the board, rank 8 at the top unless `flipped`.
///
/// Cell legend: `N` knight, `S`/`T` start and target, digits for the step at
/// which the route visited a square, `+` hinted or revealed shortest-route
/// squares, `*` legal next jumps, `.` dark squares.
pub fn render<R: Rng>(trainer: &RouteTrainer<R>, flipped: bool) -> String {
    let path = trainer.current_path();
    let head = trainer.head();
    let legal = trainer.legal_next();
    let marked = trainer.marked_squares();
    let (start, target) = match trainer.task() {
        Some(task) => (Some(task.start()), Some(task.target())),
        None => (None, None),
    };

    let ranks: Vec<u8> = if flipped { (0..8).collect() } else { (0..8).rev().collect() };
    let files: Vec<u8> = if flipped { (0..8).rev().collect() } else { (0..8).collect() };

    let mut out = String::new();
    for &rank in &ranks {
        out.push_str(&format!("{} ", rank + 1));
        for &file in &files {
            let sq = Square::at(file, rank);
            let cell = if Some(sq) == head {
                "N".to_string()
            } else if Some(sq) == start {
                "S".to_string()
            } else if Some(sq) == target {
                "T".to_string()
            } else if let Some(step) = path.iter().position(|&p| p == sq) {
                step.to_string()
            } else if marked.contains(&sq) {
                "+".to_string()
            } else if legal.contains(sq) {
                "*".to_string()
            } else if sq.is_light() {
                " ".to_string()
            } else {
                ".".to_string()
            };
            out.push_str(&format!("{cell:^3}"));
        }
        out.push('\n');
    }

    out.push_str("  ");
    for &file in &files {
        let name = (b'a' + file) as char;
        out.push_str(&format!("{name:^3}"));
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use knight_core::{Task, TrainerConfig};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    fn trainer() -> RouteTrainer<StdRng> {
        let mut trainer = RouteTrainer::with_rng(TrainerConfig::default(), StdRng::seed_from_u64(1));
        trainer.start_task(Task::new(sq("b1"), sq("c5")).unwrap());
        trainer
    }

    /// Character drawn for a square, with rank 8 on the first line.
    fn cell(board: &str, name: &str) -> char {
        let s = sq(name);
        let line = board.lines().nth(7 - s.rank() as usize).unwrap();
        line.chars().nth(2 + 3 * s.file() as usize + 1).unwrap()
    }

    #[test]
    fn test_initial_board() {
        let board = render(&trainer(), false);
        assert_eq!(board.lines().count(), 9);
        assert!(board.lines().next().unwrap().starts_with("8 "));
        assert!(board.lines().last().unwrap().contains('h'));

        assert_eq!(cell(&board, "b1"), 'N');
        assert_eq!(cell(&board, "c5"), 'T');
        assert_eq!(cell(&board, "a3"), '*');
        assert_eq!(cell(&board, "c3"), '*');
        assert_eq!(cell(&board, "d2"), '*');
        assert_eq!(cell(&board, "a1"), '.');
        assert_eq!(cell(&board, "h1"), ' ');
    }

    #[test]
    fn test_route_and_hints() {
        let mut t = trainer();
        t.attempt_move(sq("c3"));
        t.attempt_move(sq("a4"));
        let board = render(&t, false);
        assert_eq!(cell(&board, "b1"), 'S');
        assert_eq!(cell(&board, "c3"), '1');
        assert_eq!(cell(&board, "a4"), 'N');

        t.reveal();
        let board = render(&t, false);
        let optimal = t.task().unwrap().optimal_path().to_vec();
        let middle = optimal[1..optimal.len() - 1]
            .iter()
            .filter(|s| !t.current_path().contains(*s));
        for s in middle {
            assert_eq!(cell(&board, &s.to_string()), '+');
        }
    }

    #[test]
    fn test_flipped_board() {
        let board = render(&trainer(), true);
        assert!(board.lines().next().unwrap().starts_with("1 "));
        let files: String = board.lines().last().unwrap().split_whitespace().collect();
        assert_eq!(files, "hgfedcba");
    }
}
