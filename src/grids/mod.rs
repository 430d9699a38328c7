pub mod cell;
pub mod wall_grid;

pub use cell::Cell;
pub use wall_grid::WallGrid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub columns: usize,
    pub rows: usize,
}

/// Sides of a cell, numbered the way the wall flags are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Top = 0,
    Right = 1,
    Bottom = 2,
    Left = 3,
}

impl Direction {
    /// Probe order used when enumerating neighbors.
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
    ];

    /// Column and row delta to the neighbor across this side.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Top => (0, -1),
            Direction::Right => (1, 0),
            Direction::Bottom => (0, 1),
            Direction::Left => (-1, 0),
        }
    }
}

impl std::ops::Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Self::Output {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Right => Direction::Left,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
        }
    }
}

impl From<usize> for Direction {
    fn from(dir: usize) -> Self {
        match dir {
            0 => Direction::Top,
            1 => Direction::Right,
            2 => Direction::Bottom,
            3 => Direction::Left,
            _ => unreachable!(),
        }
    }
}

/// Linear index of a neighbor plus the side of the probing cell it sits on.
pub type Neighbor = (usize, Direction);

/// The four orthogonal probes around a cell. `None` means the probe fell off the grid.
#[derive(Debug, Clone, Copy)]
pub struct Neighborhood {
    pub top: Option<usize>,
    pub right: Option<usize>,
    pub bottom: Option<usize>,
    pub left: Option<usize>,

    counter: usize,
}

impl Neighborhood {
    pub fn new() -> Self {
        Self {
            top: None,
            right: None,
            bottom: None,
            left: None,
            counter: 0,
        }
    }

    pub fn get(&self, dir: Direction) -> Option<usize> {
        match dir {
            Direction::Top => self.top,
            Direction::Right => self.right,
            Direction::Bottom => self.bottom,
            Direction::Left => self.left,
        }
    }

    pub fn set(&mut self, dir: Direction, index: Option<usize>) {
        match dir {
            Direction::Top => self.top = index,
            Direction::Right => self.right = index,
            Direction::Bottom => self.bottom = index,
            Direction::Left => self.left = index,
        }
    }
}

impl Default for Neighborhood {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Neighborhood {
    type Item = Neighbor;

    // yields present neighbors in top, right, bottom, left order
    fn next(&mut self) -> Option<Self::Item> {
        while self.counter < Direction::ALL.len() {
            let dir = Direction::ALL[self.counter];
            self.counter += 1;
            if let Some(index) = self.get(dir) {
                return Some((index, dir));
            }
        }

        None
    }
}
