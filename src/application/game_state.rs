use tracing::{debug, info, trace};

use super::SimClock;
use crate::domain::{GLIDER, GRID_SIZE, Grid};

/// GameState owns one generation of the lattice and the simulation clock.
/// This is the application layer: the frame loop constructs it once at
/// startup and drives it every frame; no simulation state lives anywhere
/// else.
pub struct GameState {
    pub grid: Grid,
    pub clock: SimClock,
    pub generation: u64,
}

impl GameState {
    /// Fresh state: glider-seeded grid, default clock
    pub fn new() -> Self {
        let state = Self {
            grid: Grid::seeded(&GLIDER),
            clock: SimClock::new(),
            generation: 0,
        };
        info!(
            "starting {}x{} toroidal grid, glider seed, interval {}ms",
            GRID_SIZE,
            GRID_SIZE,
            state.clock.interval_ms()
        );
        state
    }

    /// Advance the simulation by one frame: when a tick is due and the
    /// clock is not paused, swap in the next generation
    pub fn advance(&mut self, frame_dt: f32) {
        if self.clock.poll(frame_dt) {
            self.grid = self.grid.step();
            self.generation += 1;
            trace!("generation {}", self.generation);
        }
    }

    /// Flip between running and paused
    pub fn toggle_paused(&mut self) {
        let paused = self.clock.toggle_paused();
        debug!("{}", if paused { "paused" } else { "resumed" });
    }

    /// Shorten the tick interval, clamped by the clock
    pub fn speed_up(&mut self) {
        self.clock.speed_up();
        debug!("interval now {}ms", self.clock.interval_ms());
    }

    /// Lengthen the tick interval, clamped by the clock
    pub fn slow_down(&mut self) {
        self.clock.slow_down();
        debug!("interval now {}ms", self.clock.interval_ms());
    }

    /// Flip the clicked cell between alive and dead
    pub fn toggle_cell(&mut self, x: usize, y: usize) {
        let cell = self.grid.toggle(x, y);
        debug!("cell ({}, {}) now {:?}", x, y, cell);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_running_at_generation_zero() {
        let state = GameState::new();
        assert!(!state.clock.is_paused());
        assert_eq!(state.generation, 0);
    }

    #[test]
    fn test_advance_steps_once_per_elapsed_interval() {
        let mut state = GameState::new();

        state.advance(0.1); // 100ms of the 200ms interval
        assert_eq!(state.generation, 0);
        state.advance(0.1);
        assert_eq!(state.generation, 1);
        state.advance(0.25);
        assert_eq!(state.generation, 2);
    }

    #[test]
    fn test_paused_state_never_changes_the_grid() {
        let mut state = GameState::new();
        let seeded = state.grid.clone();

        state.toggle_paused();
        for _ in 0..20 {
            // every call is a full tick opportunity
            state.advance(0.3);
        }

        assert_eq!(state.grid, seeded);
        assert_eq!(state.generation, 0);
    }

    #[test]
    fn test_toggle_cell_affects_exactly_one_cell() {
        let mut state = GameState::new();
        let before = state.grid.clone();

        state.toggle_cell(30, 40);
        assert!(state.grid.get(30, 40).is_alive());

        let changed: Vec<_> = state
            .grid
            .iter_cells()
            .filter(|&(x, y, cell)| before.get(x, y) != cell)
            .map(|(x, y, _)| (x, y))
            .collect();
        assert_eq!(changed, vec![(30, 40)]);
    }
}
