use log::{debug, trace};

use crate::error::MazeError;
use crate::generators::{Generator, RandomSource, SeededSource, StepOutcome};
use crate::grids::{Cell, WallGrid};

/// Randomized depth-first carving with an explicit stack, advanced one step at a time.
///
/// The grid owns every cell; `current` and the stack hold linear indices into it.
#[derive(Debug, Clone)]
pub struct RecursiveBacktracker<R = SeededSource> {
    grid: WallGrid,
    stack: Vec<usize>,
    current: usize,
    rng: R,
    steps: usize,
    done: bool,
}

impl RecursiveBacktracker<SeededSource> {
    pub fn new(columns: usize, rows: usize, seed: u64) -> Result<Self, MazeError> {
        Self::with_source(columns, rows, SeededSource::new(seed))
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Starts over from the seed, so the next run carves the same maze again.
    pub fn restart(&mut self) {
        self.rng.reseed();
        self.reset();
    }
}

impl<R: RandomSource> RecursiveBacktracker<R> {
    pub fn with_source(columns: usize, rows: usize, rng: R) -> Result<Self, MazeError> {
        let grid = WallGrid::with_dims(columns, rows)?;

        Ok(Self {
            grid,
            stack: Vec::new(),
            current: 0,
            rng,
            steps: 0,
            done: false,
        })
    }

    /// Fresh fully walled grid of the same size. The random source keeps its position.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.stack.clear();
        self.current = 0;
        self.steps = 0;
        self.done = false;
    }

    /// Picks one unvisited neighbor of the current cell, probing top, right, bottom, left.
    ///
    /// Draws from the random source only when there is at least one candidate.
    pub(crate) fn check_neighbors(&mut self) -> Option<usize> {
        let grid = &self.grid;
        let candidates: Vec<usize> = grid
            .neighborhood_of(self.current)
            .map(|(index, _)| index)
            .filter(|index| !grid.cells()[*index].visited)
            .collect();

        trace!("candidates around {}: {:?}", self.current, candidates);

        if candidates.is_empty() {
            return None;
        }

        let n = candidates.len();
        let r = self.rng.pick(n);
        assert!(r < n, "random source picked {} from {} candidates", r, n);

        Some(candidates[r])
    }

    pub fn step(&mut self) -> StepOutcome {
        if self.done {
            return StepOutcome::Idle;
        }
        self.steps += 1;

        self.grid.cell_mut(self.current).visited = true;

        let outcome = if let Some(next) = self.check_neighbors() {
            self.grid.cell_mut(next).visited = true;
            self.stack.push(self.current);
            self.grid.clear_wall_between(self.current, next);

            let from = self.current;
            self.current = next;
            StepOutcome::Carved { from, to: next }
        } else if let Some(previous) = self.stack.pop() {
            self.current = previous;
            StepOutcome::Backtracked { to: previous }
        } else {
            self.done = true;
            StepOutcome::Completed
        };

        debug!(
            "step {}: {:?} (stack depth {})",
            self.steps,
            outcome,
            self.stack.len()
        );

        outcome
    }

    /// Steps until the maze is complete and returns the total number of steps taken.
    pub fn run_to_completion(&mut self) -> usize {
        while !self.done {
            self.step();
        }

        self.steps
    }

    pub fn is_complete(&self) -> bool {
        self.done
    }

    pub fn grid(&self) -> &WallGrid {
        &self.grid
    }

    pub fn cells(&self) -> &[Cell] {
        self.grid.cells()
    }

    pub fn current(&self) -> &Cell {
        &self.grid.cells()[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn stack(&self) -> &[usize] {
        &self.stack
    }

    pub fn steps_taken(&self) -> usize {
        self.steps
    }
}

impl<R: RandomSource> Generator for RecursiveBacktracker<R> {
    fn step_generation(&mut self) -> StepOutcome {
        self.step()
    }

    fn next_step(&mut self) -> &WallGrid {
        self.step();
        &self.grid
    }

    fn generate_maze(&mut self) -> &WallGrid {
        self.run_to_completion();
        &self.grid
    }

    fn is_done(&self) -> bool {
        self.done
    }

    fn grid(&self) -> &WallGrid {
        &self.grid
    }
}

#[cfg(test)]
mod test_backtracker {
    use super::*;
    use crate::grids::Direction;
    use std::collections::VecDeque;

    /// Always takes the first candidate.
    struct FirstPick {
        draws: usize,
    }

    impl RandomSource for FirstPick {
        fn pick(&mut self, _n: usize) -> usize {
            self.draws += 1;
            0
        }
    }

    /// Picks one past the last candidate.
    struct PastTheEnd;

    impl RandomSource for PastTheEnd {
        fn pick(&mut self, n: usize) -> usize {
            n
        }
    }

    fn first_pick() -> FirstPick {
        FirstPick { draws: 0 }
    }

    fn reachable_from_origin(grid: &WallGrid) -> usize {
        let mut adjacency = vec![Vec::new(); grid.len()];
        for (a, b) in grid.open_passages() {
            adjacency[a].push(b);
            adjacency[b].push(a);
        }

        let mut seen = vec![false; grid.len()];
        let mut queue = VecDeque::new();
        seen[0] = true;
        queue.push_back(0);
        while let Some(index) = queue.pop_front() {
            for next in &adjacency[index] {
                if !seen[*next] {
                    seen[*next] = true;
                    queue.push_back(*next);
                }
            }
        }

        seen.iter().filter(|seen| **seen).count()
    }

    #[test]
    fn starts_at_top_left() {
        let maze = RecursiveBacktracker::new(4, 3, 7).unwrap();

        assert_eq!(maze.current_index(), 0);
        assert_eq!(maze.current().coords(), (0, 0));
        assert!(maze.stack().is_empty());
        assert!(!maze.is_complete());
        assert_eq!(maze.cells().len(), 12);
    }

    #[test]
    fn rejects_invalid_dimensions() {
        assert!(RecursiveBacktracker::new(0, 3, 1).is_err());
        assert_eq!(
            RecursiveBacktracker::with_source(3, 0, first_pick()).err(),
            Some(MazeError::InvalidDimensions { columns: 3, rows: 0 })
        );
    }

    #[test]
    fn two_by_one_walkthrough() {
        let mut maze = RecursiveBacktracker::with_source(2, 1, first_pick()).unwrap();

        assert_eq!(maze.step(), StepOutcome::Carved { from: 0, to: 1 });
        assert!(maze.cells()[0].visited);
        assert!(maze.cells()[1].visited);
        assert!(!maze.cells()[0].has_wall(Direction::Right));
        assert!(!maze.cells()[1].has_wall(Direction::Left));
        assert_eq!(maze.stack(), &[0]);
        assert_eq!(maze.current().coords(), (1, 0));

        let outcome = maze.step();
        assert_eq!(outcome, StepOutcome::Backtracked { to: 0 });
        assert!(outcome.made_progress());
        assert!(maze.stack().is_empty());
        assert!(!maze.is_complete());

        let outcome = maze.step();
        assert_eq!(outcome, StepOutcome::Completed);
        assert!(!outcome.made_progress());
        assert!(maze.is_complete());

        assert_eq!(maze.steps_taken(), 3);
        assert_eq!(maze.grid().open_passages(), vec![(0, 1)]);
        assert!(maze.grid().all_visited());
    }

    #[test]
    fn draws_only_when_candidates_exist() {
        let mut maze = RecursiveBacktracker::with_source(2, 1, first_pick()).unwrap();
        maze.run_to_completion();

        assert_eq!(maze.rng.draws, 1);
    }

    #[test]
    #[should_panic(expected = "random source picked 1 from 1 candidates")]
    fn out_of_range_pick_fails_fast() {
        let mut maze = RecursiveBacktracker::with_source(2, 1, PastTheEnd).unwrap();
        maze.step();
    }

    #[test]
    fn single_cell_completes_in_one_step() {
        let mut maze = RecursiveBacktracker::new(1, 1, 42).unwrap();

        assert_eq!(maze.step(), StepOutcome::Completed);
        assert!(maze.cells()[0].visited);
        assert_eq!(maze.cells()[0].walls, [true; 4]);
    }

    #[test]
    fn first_pick_carves_a_snake() {
        let mut maze = RecursiveBacktracker::with_source(3, 2, first_pick()).unwrap();
        maze.run_to_completion();

        // right until the edge, down, then left along the bottom row
        assert_eq!(
            maze.grid().open_passages(),
            vec![(0, 1), (1, 2), (2, 5), (3, 4), (4, 5)]
        );
    }

    #[test]
    fn same_seed_same_maze() {
        let mut one = RecursiveBacktracker::new(12, 12, 513).unwrap();
        let mut two = RecursiveBacktracker::new(12, 12, 513).unwrap();

        let steps_one = one.run_to_completion();
        let steps_two = two.run_to_completion();

        assert_eq!(steps_one, steps_two);
        assert_eq!(one.grid(), two.grid());
    }

    #[test]
    fn different_seeds_differ() {
        let mut one = RecursiveBacktracker::new(12, 12, 126).unwrap();
        let mut two = RecursiveBacktracker::new(12, 12, 513).unwrap();
        one.run_to_completion();
        two.run_to_completion();

        assert_ne!(one.grid(), two.grid());
    }

    #[test]
    fn completed_maze_is_spanning_tree() {
        for (columns, rows, seed) in [(12, 12, 513), (1, 9, 3), (7, 1, 4), (9, 5, 126)].iter() {
            let mut maze = RecursiveBacktracker::new(*columns, *rows, *seed).unwrap();
            maze.run_to_completion();

            let grid = maze.grid();
            let cells = columns * rows;
            assert!(grid.all_visited());
            assert_eq!(grid.open_passages().len(), cells - 1);
            assert_eq!(reachable_from_origin(grid), cells);
        }
    }

    #[test]
    fn walls_stay_symmetric() {
        let mut maze = RecursiveBacktracker::new(8, 6, 99).unwrap();
        maze.run_to_completion();
        let grid = maze.grid();

        for (index, cell) in grid.cells().iter().enumerate() {
            for (neighbor, dir) in grid.neighborhood_of(index) {
                assert_eq!(
                    cell.has_wall(dir),
                    grid.cells()[neighbor].has_wall(-dir),
                    "mismatch between {} and {}",
                    index,
                    neighbor
                );
            }
        }
    }

    #[test]
    fn stack_and_step_bounds() {
        let mut maze = RecursiveBacktracker::new(10, 7, 2024).unwrap();
        let cells = 70;

        while !maze.is_complete() {
            let outcome = maze.step();
            assert!(maze.stack().len() <= cells - 1);
            if let StepOutcome::Carved { from, to } = outcome {
                assert_eq!(maze.stack().last(), Some(&from));
                assert_eq!(maze.current_index(), to);
            }
        }

        assert!(maze.steps_taken() <= 2 * cells);
        assert!(maze.stack().is_empty());
    }

    #[test]
    fn reports_complete_only_once_every_cell_is_visited() {
        let mut maze = RecursiveBacktracker::new(4, 4, 1).unwrap();

        while !maze.is_done() {
            let outcome = maze.step();
            assert_eq!(
                maze.is_complete(),
                outcome == StepOutcome::Completed,
                "completion flag out of step with outcome {:?}",
                outcome
            );
            if !maze.is_complete() {
                assert!(outcome.made_progress());
            }
        }

        assert!(maze.grid().all_visited());
        assert_eq!(maze.grid().open_passages().len(), 15);
    }

    #[test]
    fn step_after_completion_is_a_no_op() {
        let mut maze = RecursiveBacktracker::new(5, 5, 8).unwrap();
        maze.run_to_completion();

        let grid = maze.grid().clone();
        let current = maze.current_index();
        let steps = maze.steps_taken();

        assert_eq!(maze.step(), StepOutcome::Idle);
        assert!(!maze.step().made_progress());
        assert_eq!(maze.grid(), &grid);
        assert_eq!(maze.current_index(), current);
        assert_eq!(maze.steps_taken(), steps);
        assert!(maze.stack().is_empty());
        assert!(maze.is_complete());
    }

    #[test]
    fn restart_replays_the_same_maze() {
        let mut maze = RecursiveBacktracker::new(6, 6, 77).unwrap();
        let first = maze.generate_maze().clone();

        maze.restart();
        assert!(!maze.is_done());
        assert_eq!(maze.current_index(), 0);
        assert!(maze.stack().is_empty());
        assert!(maze.grid().open_passages().is_empty());
        assert_eq!(maze.steps_taken(), 0);
        assert!(maze.cells().iter().all(|cell| !cell.visited));

        let second = maze.generate_maze().clone();
        assert_eq!(first, second);
        assert_eq!(maze.seed(), 77);
    }

    #[test]
    fn driven_through_generator_trait() {
        let mut maze: Box<dyn Generator> =
            Box::new(RecursiveBacktracker::new(4, 4, 5).unwrap());

        let mut ticks = 0;
        while !maze.is_done() {
            maze.next_step();
            ticks += 1;
        }

        assert!(ticks <= 32);
        assert_eq!(maze.grid().open_passages().len(), 15);
        assert_eq!(maze.step_generation(), StepOutcome::Idle);
    }
}
