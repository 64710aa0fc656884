use super::Cell;
use rand::Rng;
use rayon::prelude::*;

/// What a call to [`Grid::seed`] did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Seeded {
    /// Origin was alive and has been killed
    Killed,
    /// Origin plus this many in-bounds offset cells were set alive
    Stamped(usize),
    /// Origin lies outside the grid
    Ignored,
}

/// Square N×N grid of cells.
/// Generations are produced as new grids; the grid being read is never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    side: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells dead. A side of 0 is raised to 1.
    pub fn new(side: usize) -> Self {
        let side = side.max(1);
        Self {
            side,
            cells: vec![Cell::Dead; side * side],
        }
    }

    /// Build a grid with the given coordinates alive; out-of-bounds ones are skipped
    pub fn with_alive(side: usize, alive: &[(usize, usize)]) -> Self {
        let mut grid = Self::new(side);
        for &(x, y) in alive {
            grid.set(x, y, Cell::Alive);
        }
        grid
    }

    pub const fn side(&self) -> usize {
        self.side
    }

    pub const fn cell_count(&self) -> usize {
        self.side * self.side
    }

    /// Bounds check on signed coordinates
    pub const fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.side && (y as usize) < self.side
    }

    /// Convert 2D coordinates to a row-major index
    pub const fn index_of(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.side && y < self.side {
            Some(y * self.side + x)
        } else {
            None
        }
    }

    /// Inverse of [`Grid::index_of`]
    pub const fn coord_of(&self, index: usize) -> Option<(usize, usize)> {
        if index < self.cell_count() {
            Some((index % self.side, index / self.side))
        } else {
            None
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.index_of(x, y).map(|idx| self.cells[idx])
    }

    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_some_and(Cell::is_alive)
    }

    /// Set cell at position; out-of-bounds writes are dropped
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if let Some(idx) = self.index_of(x, y) {
            self.cells[idx] = cell;
        }
    }

    pub fn toggle(&mut self, x: usize, y: usize) {
        if let Some(idx) = self.index_of(x, y) {
            self.cells[idx] = self.cells[idx].toggle();
        }
    }

    /// Count live neighbors among the 8 surrounding cells. Cells past the
    /// edge count as dead; there is no wraparound.
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        let (x, y) = (x as i64, y as i64);

        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .map(|(dx, dy)| (x + dx, y + dy))
            .filter(|&(nx, ny)| self.contains(nx, ny) && self.is_alive(nx as usize, ny as usize))
            .count() as u8
    }

    fn next_cell(&self, index: usize) -> Cell {
        let (x, y) = (index % self.side, index / self.side);
        self.cells[index].evolve(self.count_live_neighbors(x, y))
    }

    /// Compute the next generation (serial)
    pub fn advance(&self) -> Self {
        let cells = (0..self.cells.len()).map(|idx| self.next_cell(idx)).collect();
        Self { side: self.side, cells }
    }

    /// Compute the next generation with rayon. Same result as [`Grid::advance`].
    pub fn advance_parallel(&self) -> Self {
        let cells = (0..self.cells.len())
            .into_par_iter()
            .map(|idx| self.next_cell(idx))
            .collect();
        Self { side: self.side, cells }
    }

    /// All cells dead, same side length
    pub fn clear(mut self) -> Self {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
        self
    }

    /// Every cell alive with probability `density`
    pub fn randomize<R: Rng>(mut self, rng: &mut R, density: f64) -> Self {
        let density = density.clamp(0.0, 1.0);
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from_alive(rng.random_bool(density)));
        self
    }

    /// Click-to-seed. An alive origin is killed and nothing else happens.
    /// Otherwise the origin and every in-bounds `origin + offset` become alive.
    pub fn seed(&mut self, x: usize, y: usize, offsets: &[(i32, i32)]) -> Seeded {
        match self.get(x, y) {
            None => Seeded::Ignored,
            Some(Cell::Alive) => {
                self.set(x, y, Cell::Dead);
                Seeded::Killed
            }
            Some(Cell::Dead) => {
                self.set(x, y, Cell::Alive);
                let mut stamped = 1;
                for &(dx, dy) in offsets {
                    let (sx, sy) = (x as i64 + dx as i64, y as i64 + dy as i64);
                    if self.contains(sx, sy) {
                        self.set(sx as usize, sy as usize, Cell::Alive);
                        stamped += 1;
                    }
                }
                Seeded::Stamped(stamped)
            }
        }
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions, row by row
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx % self.side, idx / self.side, cell))
    }

    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(x, y, _)| (x, y))
    }
}
