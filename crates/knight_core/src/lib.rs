//! Knight routes: shortest knight paths and a route-finding trainer.
//!
//! This crate provides:
//! - Knight move generation on the 8x8 board
//! - Breadth-first shortest paths over the knight-move graph
//! - Random route tasks with a minimum length
//! - The trainer state machine that checks and grades a player's route
//!
//! # Usage
//!
//! ```
//! use knight_core::{RouteTrainer, Square, Task, TrainerConfig};
//!
//! let b1: Square = "b1".parse().unwrap();
//! let c5: Square = "c5".parse().unwrap();
//!
//! let mut trainer = RouteTrainer::new(TrainerConfig::default());
//! trainer.start_task(Task::new(b1, c5).unwrap());
//!
//! for name in ["c3", "a4", "c5"] {
//!     trainer.attempt_move(name.parse().unwrap());
//! }
//! assert!(trainer.grade().unwrap().is_optimal);
//! ```

pub mod config;
pub mod error;
pub mod history;
pub mod moves;
pub mod path;
pub mod squareset;
pub mod stopwatch;
pub mod task;
pub mod trainer;
pub mod types;

pub use config::*;
pub use error::*;
pub use history::*;
pub use moves::*;
pub use path::*;
pub use squareset::*;
pub use stopwatch::*;
pub use task::*;
pub use trainer::*;
pub use types::*;
