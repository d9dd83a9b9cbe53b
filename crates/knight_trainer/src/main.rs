//! Knight routes trainer CLI
//!
//! Reads one command per line from stdin and answers on stdout. Logs go to
//! stderr (filter with `RUST_LOG`).

mod board;

use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use knight_core::{
    MoveOutcome, Phase, RouteTrainer, Square, TrainerConfig, TrainingLog, knight_distances,
    shortest_knight_path,
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILE: &str = "knight_routes.json";

fn print_usage() {
    println!("Knight Routes Trainer");
    println!();
    println!("Usage:");
    println!("  knight_trainer [--config FILE] [--log FILE] [--seed N] [--min N]");
    println!();
    println!("Options:");
    println!("  --config, -c FILE   TOML trainer config");
    println!("  --log, -l FILE      JSON history of solved rounds (default {DEFAULT_LOG_FILE})");
    println!("  --seed, -s N        Fixed seed for reproducible tasks");
    println!("  --min, -m N         Minimum route length for new tasks");
}

fn print_commands() {
    println!("Commands:");
    println!("  <square> | move <square>   jump the knight (e.g. c3)");
    println!("  new [min]                  new random task");
    println!("  undo                       take back the last jump");
    println!("  reset                      restart the current task");
    println!("  hint                       show the next square of a shortest route");
    println!("  reveal                     show a whole shortest route");
    println!("  flip                       turn the board around");
    println!("  show | status              board / one-line status");
    println!("  path <from> <to>           shortest route between two squares");
    println!("  table <square>             knight distances from a square");
    println!("  stats                      history report");
    println!("  quit");
}

struct Options {
    config: Option<PathBuf>,
    log: PathBuf,
    seed: Option<u64>,
    min_distance: Option<u32>,
}

/// Returns None when usage was requested.
fn parse_args(args: &[String]) -> Option<Options> {
    let mut opts = Options {
        config: None,
        log: PathBuf::from(DEFAULT_LOG_FILE),
        seed: None,
        min_distance: None,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    opts.config = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--log" | "-l" => {
                if i + 1 < args.len() {
                    opts.log = PathBuf::from(&args[i + 1]);
                    i += 1;
                }
            }
            "--seed" | "-s" => {
                if i + 1 < args.len() {
                    opts.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--min" | "-m" => {
                if i + 1 < args.len() {
                    opts.min_distance = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--help" | "-h" => return None,
            other => warn!(arg = other, "ignoring unknown argument"),
        }
        i += 1;
    }

    Some(opts)
}

/// Trainer plus everything the terminal front end keeps between commands.
struct Shell {
    trainer: RouteTrainer,
    history: TrainingLog,
    log_path: PathBuf,
    flipped: bool,
}

impl Shell {
    fn show(&self, out: &mut impl Write) {
        write!(out, "{}", board::render(&self.trainer, self.flipped)).ok();
        self.status(out);
    }

    fn status(&self, out: &mut impl Write) {
        let Some(task) = self.trainer.task() else {
            writeln!(out, "No task. Type `new`.").ok();
            return;
        };
        let state = match self.trainer.phase() {
            Phase::Idle => "idle".to_string(),
            Phase::InProgress => "in progress".to_string(),
            Phase::Solved => match self.trainer.grade() {
                Some(g) if g.is_optimal => "solved (optimal)".to_string(),
                Some(g) => format!("solved (+{} moves)", g.excess()),
                None => "solved".to_string(),
            },
        };
        let time = self
            .trainer
            .elapsed()
            .map_or_else(|| "-".to_string(), |d| format!("{:.1}s", d.as_secs_f64()));
        writeln!(
            out,
            "Task {} -> {} | min {} | moves {} | solved {} | time {} | {}",
            task.start(),
            task.target(),
            task.optimal_distance(),
            self.trainer.moves_made(),
            self.trainer.solved_count(),
            time,
            state
        )
        .ok();
    }

    fn new_task(&mut self, min_distance: u32, out: &mut impl Write) {
        self.trainer.new_task(min_distance);
        self.show(out);
    }

    fn jump(&mut self, sq: Square, out: &mut impl Write) {
        match self.trainer.attempt_move(sq) {
            MoveOutcome::Moved | MoveOutcome::SteppedBack => self.show(out),
            MoveOutcome::Unchanged => {
                if self.trainer.phase() == Phase::Solved {
                    writeln!(out, "Already solved. Type `new` or `reset`.").ok();
                }
            }
            MoveOutcome::Rejected => {
                if let Some(head) = self.trainer.head() {
                    writeln!(out, "{sq} is not a knight move from {head}.").ok();
                }
            }
            MoveOutcome::Solved(grade) => {
                self.show(out);
                if grade.is_optimal {
                    writeln!(out, "Solved in {} moves, optimal!", grade.moves).ok();
                } else {
                    writeln!(
                        out,
                        "Solved in {} moves, shortest is {}.",
                        grade.moves, grade.optimal
                    )
                    .ok();
                }
                if let Some(task) = self.trainer.task() {
                    self.history.record(task, &grade);
                }
                if let Err(e) = self.history.save(&self.log_path) {
                    warn!(path = %self.log_path.display(), error = %e, "failed to save history");
                }
            }
        }
    }

    fn hint(&mut self, out: &mut impl Write) {
        match self.trainer.request_hint() {
            Some(sq) => {
                self.show(out);
                writeln!(out, "Hint: {sq}").ok();
            }
            None => {
                writeln!(out, "No more hints.").ok();
            }
        }
    }

    fn path(&self, from: &str, to: &str, out: &mut impl Write) {
        let (from, to) = match (from.parse::<Square>(), to.parse::<Square>()) {
            (Ok(a), Ok(b)) => (a, b),
            (Err(e), _) | (_, Err(e)) => {
                writeln!(out, "{e}").ok();
                return;
            }
        };
        let result = shortest_knight_path(from, to);
        let route: Vec<String> = result.path.iter().map(|s| s.to_string()).collect();
        let written = match result.distance {
            Some(d) => writeln!(
                out,
                "{from} -> {to}: {d} moves: {} ({} nodes, {:.3} ms)",
                route.join(" "),
                result.nodes_expanded,
                result.elapsed.as_secs_f64() * 1000.0
            ),
            None => writeln!(out, "{from} -> {to}: unreachable"),
        };
        written.ok();
    }

    fn table(&self, from: &str, out: &mut impl Write) {
        let from = match from.parse::<Square>() {
            Ok(sq) => sq,
            Err(e) => {
                writeln!(out, "{e}").ok();
                return;
            }
        };
        let dist = knight_distances(from);
        for rank in (0..8u8).rev() {
            write!(out, "{} ", rank + 1).ok();
            for file in 0..8u8 {
                let sq = Square::at(file, rank);
                match dist[sq.index()] {
                    Some(d) => write!(out, "{d:^3}").ok(),
                    None => write!(out, " - ").ok(),
                };
            }
            writeln!(out).ok();
        }
        writeln!(out, "   a  b  c  d  e  f  g  h").ok();
    }

    /// Handle one input line. Returns false on `quit`.
    fn handle(&mut self, line: &str, out: &mut impl Write) -> bool {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            return true;
        }

        match parts[0] {
            "new" | "n" => {
                let min = parts
                    .get(1)
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(self.trainer.config().min_distance);
                self.new_task(min, out);
            }
            "move" | "m" => match parts.get(1).map(|s| s.parse::<Square>()) {
                Some(Ok(sq)) => self.jump(sq, out),
                Some(Err(e)) => {
                    writeln!(out, "{e}").ok();
                }
                None => {
                    writeln!(out, "move needs a square").ok();
                }
            },
            "undo" | "u" => {
                if self.trainer.undo() {
                    self.show(out);
                } else {
                    writeln!(out, "Nothing to undo.").ok();
                }
            }
            "reset" | "r" => {
                self.trainer.reset();
                self.show(out);
            }
            "hint" => self.hint(out),
            "reveal" => {
                self.trainer.reveal();
                self.show(out);
                let route: Vec<String> = self
                    .trainer
                    .marked_squares()
                    .iter()
                    .map(|s| s.to_string())
                    .collect();
                writeln!(out, "Shortest route: {}", route.join(" ")).ok();
            }
            "flip" => {
                self.flipped = !self.flipped;
                self.show(out);
            }
            "show" | "board" => self.show(out),
            "status" => self.status(out),
            "path" => {
                if parts.len() < 3 {
                    writeln!(out, "usage: path <from> <to>").ok();
                } else {
                    self.path(parts[1], parts[2], out);
                }
            }
            "table" => match parts.get(1) {
                Some(sq) => self.table(sq, out),
                None => {
                    writeln!(out, "usage: table <square>").ok();
                }
            },
            "stats" => {
                write!(out, "{}", self.history.generate_report()).ok();
            }
            "help" | "?" => print_commands(),
            "quit" | "exit" | "q" => return false,
            other => match other.parse::<Square>() {
                Ok(sq) => self.jump(sq, out),
                Err(_) => {
                    writeln!(out, "Unknown command `{other}`. Type `help`.").ok();
                }
            },
        }
        true
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(opts) = parse_args(&args) else {
        print_usage();
        return;
    };

    let mut config = match &opts.config {
        Some(path) => match TrainerConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                error!(path = %path.display(), error = %e, "failed to load config");
                std::process::exit(1);
            }
        },
        None => TrainerConfig::default(),
    };
    if opts.seed.is_some() {
        config.seed = opts.seed;
    }
    if let Some(min) = opts.min_distance {
        config.min_distance = min;
    }
    if let Err(e) = config.validate() {
        error!(error = %e, "invalid configuration");
        std::process::exit(1);
    }

    let history = TrainingLog::load_or_default(&opts.log);
    info!(
        rounds = history.len(),
        log = %opts.log.display(),
        min_distance = config.min_distance,
        "starting trainer"
    );

    let min_distance = config.min_distance;
    let mut shell = Shell {
        trainer: RouteTrainer::new(config),
        history,
        log_path: opts.log,
        flipped: false,
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print_commands();
    println!();
    shell.new_task(min_distance, &mut stdout);
    stdout.flush().ok();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        if !shell.handle(&line, &mut stdout) {
            break;
        }
        stdout.flush().ok();
    }
}
