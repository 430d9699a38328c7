use crate::grids::Direction;

/// One grid position: its coordinates, wall flags and visitation mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// column
    pub i: usize,
    /// row
    pub j: usize,
    /// top, right, bottom, left
    pub walls: [bool; 4],
    pub visited: bool,
}

impl Cell {
    pub fn new(i: usize, j: usize) -> Self {
        Self {
            i,
            j,
            walls: [true; 4],
            visited: false,
        }
    }

    #[inline]
    pub fn has_wall(&self, dir: Direction) -> bool {
        self.walls[dir as usize]
    }

    #[inline]
    pub fn remove_wall(&mut self, dir: Direction) {
        self.walls[dir as usize] = false;
    }

    pub fn open_sides(&self) -> usize {
        self.walls.iter().filter(|wall| !**wall).count()
    }

    #[inline]
    pub fn coords(&self) -> (usize, usize) {
        (self.i, self.j)
    }
}
