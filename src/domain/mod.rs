mod cell;
mod grid;
mod patterns;

pub use cell::Cell;
pub use grid::{GRID_SIZE, Grid};
pub use patterns::GLIDER;
