use super::*;
use crate::moves::is_knight_path;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

#[test]
fn test_task_new() {
    let task = Task::new(sq("b1"), sq("c5")).unwrap();
    assert_eq!(task.start(), sq("b1"));
    assert_eq!(task.target(), sq("c5"));
    assert_eq!(task.optimal_distance(), 3);
    assert_eq!(task.optimal_path().len(), 4);
    assert!(is_knight_path(task.optimal_path()));
}

#[test]
fn test_task_rejects_equal_squares() {
    assert!(Task::new(sq("e4"), sq("e4")).is_none());
}

#[test]
fn test_default_fallback_pair() {
    assert_eq!(DEFAULT_FALLBACK, (sq("b1"), sq("c5")));
}

#[test]
fn test_random_tasks_meet_min_distance() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..1000 {
        let task = Task::random(&mut rng, 2, DEFAULT_MAX_TRIES, DEFAULT_FALLBACK);
        assert_ne!(task.start(), task.target());
        assert!(task.optimal_distance() >= 2);
        assert_eq!(task.optimal_path().first(), Some(&task.start()));
        assert_eq!(task.optimal_path().last(), Some(&task.target()));
    }
}

#[test]
fn test_random_tasks_vary() {
    let mut rng = StdRng::seed_from_u64(42);
    let tasks: Vec<Task> = (0..20)
        .map(|_| Task::random(&mut rng, 2, DEFAULT_MAX_TRIES, DEFAULT_FALLBACK))
        .collect();
    assert!(tasks.iter().any(|t| t.start() != tasks[0].start()));
}

#[test]
fn test_same_seed_same_task() {
    let a = Task::random(&mut StdRng::seed_from_u64(3), 3, 200, DEFAULT_FALLBACK);
    let b = Task::random(&mut StdRng::seed_from_u64(3), 3, 200, DEFAULT_FALLBACK);
    assert_eq!(a, b);
}

#[test]
fn test_unsatisfiable_minimum_uses_fallback() {
    // No pair on 8x8 is more than 6 moves apart
    let mut rng = StdRng::seed_from_u64(1);
    let task = Task::random(&mut rng, 7, 50, (sq("a1"), sq("h8")));
    assert_eq!(task.start(), sq("a1"));
    assert_eq!(task.target(), sq("h8"));
    assert_eq!(task.optimal_distance(), 6);
}

#[test]
fn test_zero_tries_uses_fallback() {
    let mut rng = StdRng::seed_from_u64(1);
    let task = Task::random(&mut rng, 2, 0, DEFAULT_FALLBACK);
    assert_eq!(task.start(), sq("b1"));
    assert_eq!(task.target(), sq("c5"));
}

#[test]
fn test_degenerate_fallback_uses_default_pair() {
    let mut rng = StdRng::seed_from_u64(1);
    let task = Task::random(&mut rng, 9, 5, (sq("d4"), sq("d4")));
    assert_eq!((task.start(), task.target()), DEFAULT_FALLBACK);
}

#[test]
fn test_one_move_fallback_uses_default_pair() {
    let mut rng = StdRng::seed_from_u64(1);
    let task = Task::random(&mut rng, 2, 0, (sq("b1"), sq("c3")));
    assert_eq!((task.start(), task.target()), DEFAULT_FALLBACK);
    assert!(task.optimal_distance() >= MIN_FALLBACK_DISTANCE);
}

#[test]
fn test_longest_route_constant() {
    let longest = Square::all()
        .flat_map(|a| Square::all().map(move |b| (a, b)))
        .filter_map(|(a, b)| Task::new(a, b))
        .map(|t| t.optimal_distance())
        .max();
    assert_eq!(longest, Some(MAX_KNIGHT_DISTANCE));
}
