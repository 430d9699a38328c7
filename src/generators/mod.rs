pub mod backtracker;
pub mod rng;

use crate::grids::WallGrid;

pub use backtracker::RecursiveBacktracker;
pub use rng::{RandomSource, SeededSource};

/// What a single generation step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Moved forward into an unvisited neighbor, opening the wall between them.
    Carved { from: usize, to: usize },
    /// No unvisited neighbor; popped the stack.
    Backtracked { to: usize },
    /// This step finished the maze.
    Completed,
    /// Step called after completion; nothing changed.
    Idle,
}

impl StepOutcome {
    pub fn made_progress(&self) -> bool {
        match self {
            StepOutcome::Carved { .. } | StepOutcome::Backtracked { .. } => true,
            StepOutcome::Completed | StepOutcome::Idle => false,
        }
    }
}

pub trait Generator {
    fn step_generation(&mut self) -> StepOutcome;
    fn next_step(&mut self) -> &WallGrid;
    fn generate_maze(&mut self) -> &WallGrid;
    fn is_done(&self) -> bool;
    fn grid(&self) -> &WallGrid;
}
