/// A single grid square, either Dead or Alive.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    pub const fn from_alive(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }

    pub const fn toggle(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    /// Next state under B3/S23:
    /// alive next iff exactly 3 neighbors, or alive now with exactly 2.
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (_, 3) => Cell::Alive,
            (Cell::Alive, 2) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}
