mod cell;
mod grid;
mod patterns;

pub use cell::Cell;
pub use grid::{Grid, Seeded};
pub use patterns::Pattern;
