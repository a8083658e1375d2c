// Domain layer - the automaton itself
pub mod domain;

// Application layer - state owned by the frame loop
pub mod application;

// Infrastructure layer - screen layout, rendering, input
pub mod input;
pub mod rendering;
pub mod ui;

// Re-exports for convenience
pub use application::{GameState, SimClock};
pub use domain::{Cell, GRID_SIZE, Grid};
