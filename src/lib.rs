//! Perfect maze generation by randomized recursive backtracking, exposed as a
//! steppable state machine so a driver can pause between steps and draw.

pub mod config;
pub mod error;
pub mod generators;
pub mod grids;

pub use config::MazeConfig;
pub use error::MazeError;
pub use generators::{Generator, RandomSource, RecursiveBacktracker, SeededSource, StepOutcome};
pub use grids::{Cell, Direction, WallGrid};
