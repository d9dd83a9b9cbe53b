use super::*;
use std::time::Duration;

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn grade(moves: u32, optimal: u32, elapsed: Option<Duration>) -> Grade {
    Grade {
        moves,
        optimal,
        is_optimal: moves == optimal,
        elapsed,
    }
}

fn sample_log() -> TrainingLog {
    let task = Task::new(sq("b1"), sq("c5")).unwrap();
    let mut log = TrainingLog::new();
    log.record(&task, &grade(3, 3, Some(Duration::from_micros(1_234_567))));
    log.record(&task, &grade(5, 3, None));
    log
}

#[test]
fn test_record_and_stats() {
    let log = sample_log();
    assert_eq!(log.len(), 2);
    assert_eq!(log.optimal_count(), 1);
    assert!((log.optimal_rate() - 0.5).abs() < 1e-9);
    assert!((log.average_excess() - 1.0).abs() < 1e-9);

    let first = &log.rounds[0];
    assert_eq!(first.start, sq("b1"));
    assert_eq!(first.elapsed_ms, Some(1234.567));
    assert!(first.is_optimal());
    assert!(!log.rounds[1].is_optimal());
}

#[test]
fn test_empty_stats() {
    let log = TrainingLog::new();
    assert!(log.is_empty());
    assert_eq!(log.optimal_rate(), 0.0);
    assert_eq!(log.average_excess(), 0.0);
}

#[test]
fn test_json_uses_square_names() {
    let json = serde_json::to_string(&sample_log()).unwrap();
    assert!(json.contains("\"start\":\"b1\""));
    assert!(json.contains("\"target\":\"c5\""));
}

#[test]
fn test_save_and_load() {
    let path = std::env::temp_dir().join(format!("knight_log_{}.json", std::process::id()));
    let log = sample_log();
    log.save(&path).unwrap();
    let loaded = TrainingLog::load(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(loaded.rounds, log.rounds);
}

#[test]
fn test_load_or_default() {
    let missing = std::env::temp_dir().join("knight_log_does_not_exist.json");
    assert!(TrainingLog::load_or_default(&missing).is_empty());

    let garbage = std::env::temp_dir().join(format!("knight_log_bad_{}.json", std::process::id()));
    std::fs::write(&garbage, "not json").unwrap();
    let log = TrainingLog::load_or_default(&garbage);
    std::fs::remove_file(&garbage).ok();
    assert!(log.is_empty());
}

#[test]
fn test_report() {
    let report = sample_log().generate_report();
    assert!(report.contains("Solved: 2, optimal: 1 (50.0%)"));
    assert!(report.contains("b1"));
    assert!(report.contains("1234.6"));
}
