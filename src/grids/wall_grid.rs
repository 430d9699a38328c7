use std::fmt;

use crate::error::MazeError;
use crate::grids::{Cell, Dimensions, Direction, Neighborhood};

/// Row-major arena of cells. Everything else refers to cells by linear index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallGrid {
    pub dims: Dimensions,

    cells: Vec<Cell>,
}

impl WallGrid {
    pub fn with_dims(columns: usize, rows: usize) -> Result<Self, MazeError> {
        let len = match columns.checked_mul(rows) {
            Some(len) if len > 0 => len,
            _ => return Err(MazeError::InvalidDimensions { columns, rows }),
        };

        let cells = (0..len)
            .map(|index| Cell::new(index % columns, index / columns))
            .collect();

        Ok(Self {
            dims: Dimensions { columns, rows },
            cells,
        })
    }

    /// Linear index of `(i, j)`, or `None` when the position is off the grid.
    #[inline]
    pub fn index_of(&self, i: isize, j: isize) -> Option<usize> {
        if i < 0 || j < 0 {
            return None;
        }
        let (i, j) = (i as usize, j as usize);
        if i >= self.dims.columns || j >= self.dims.rows {
            return None;
        }

        Some(i + j * self.dims.columns)
    }

    pub fn cell_at(&self, i: isize, j: isize) -> Option<&Cell> {
        self.index_of(i, j).map(|index| &self.cells[index])
    }

    #[inline]
    pub(crate) fn cell_mut(&mut self, index: usize) -> &mut Cell {
        &mut self.cells[index]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Back to fully walled, unvisited cells without reallocating.
    pub fn clear(&mut self) {
        let columns = self.dims.columns;
        for (index, cell) in self.cells.iter_mut().enumerate() {
            *cell = Cell::new(index % columns, index / columns);
        }
    }

    pub fn neighborhood_of(&self, index: usize) -> Neighborhood {
        let mut neighbors = Neighborhood::new();
        let cell = match self.cells.get(index) {
            Some(cell) => cell,
            None => return neighbors,
        };

        for dir in Direction::ALL.iter() {
            let (di, dj) = dir.offset();
            let probe = self.index_of(cell.i as isize + di, cell.j as isize + dj);
            neighbors.set(*dir, probe);
        }

        neighbors
    }

    /// Opens the wall pair between two orthogonal neighbors.
    pub fn remove_walls(&mut self, a: usize, b: usize) -> Result<(), MazeError> {
        let len = self.cells.len();
        for index in [a, b].iter() {
            if *index >= len {
                return Err(MazeError::OutOfBounds { index: *index, len });
            }
        }

        let (one, two) = (self.cells[a].coords(), self.cells[b].coords());
        let di = one.0 as isize - two.0 as isize;
        let dj = one.1 as isize - two.1 as isize;
        if di.abs() + dj.abs() != 1 {
            return Err(MazeError::NotAdjacent { a: one, b: two });
        }

        self.clear_wall_between(a, b);
        Ok(())
    }

    // column and row deltas are checked independently; only one pair fires for
    // orthogonal neighbors
    pub(crate) fn clear_wall_between(&mut self, a: usize, b: usize) {
        let di = self.cells[a].i as isize - self.cells[b].i as isize;
        if di == 1 {
            self.cells[a].remove_wall(Direction::Left);
            self.cells[b].remove_wall(Direction::Right);
        } else if di == -1 {
            self.cells[a].remove_wall(Direction::Right);
            self.cells[b].remove_wall(Direction::Left);
        }

        let dj = self.cells[a].j as isize - self.cells[b].j as isize;
        if dj == 1 {
            self.cells[a].remove_wall(Direction::Top);
            self.cells[b].remove_wall(Direction::Bottom);
        } else if dj == -1 {
            self.cells[a].remove_wall(Direction::Bottom);
            self.cells[b].remove_wall(Direction::Top);
        }
    }

    /// Every carved passage once, as `(index, index)` with the lower index first.
    pub fn open_passages(&self) -> Vec<(usize, usize)> {
        let columns = self.dims.columns;
        let mut passages = Vec::new();

        for (index, cell) in self.cells.iter().enumerate() {
            if !cell.has_wall(Direction::Right) && cell.i + 1 < columns {
                passages.push((index, index + 1));
            }
            if !cell.has_wall(Direction::Bottom) && cell.j + 1 < self.dims.rows {
                passages.push((index, index + columns));
            }
        }

        passages
    }

    pub fn all_visited(&self) -> bool {
        self.cells.iter().all(|cell| cell.visited)
    }
}

impl fmt::Display for WallGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = self.dims.columns;

        for row in self.cells.chunks(columns) {
            write!(f, "+")?;
            for cell in row {
                let top = if cell.has_wall(Direction::Top) { "--" } else { "  " };
                write!(f, "{}+", top)?;
            }
            writeln!(f)?;

            let left = if row[0].has_wall(Direction::Left) { "|" } else { " " };
            write!(f, "{}", left)?;
            for cell in row {
                let right = if cell.has_wall(Direction::Right) { "|" } else { " " };
                write!(f, "  {}", right)?;
            }
            writeln!(f)?;
        }

        write!(f, "+")?;
        if let Some(last_row) = self.cells.chunks(columns).last() {
            for cell in last_row {
                let bottom = if cell.has_wall(Direction::Bottom) { "--" } else { "  " };
                write!(f, "{}+", bottom)?;
            }
        }
        writeln!(f)
    }
}
