use super::Cell;

/// Side length of the square lattice, fixed for the life of the process
pub const GRID_SIZE: usize = 50;

/// Map a coordinate onto the torus, one axis at a time.
/// Any integer lands back in [0, GRID_SIZE): -1 wraps to the far edge,
/// GRID_SIZE wraps to 0, so the left and right edges are adjacent and
/// likewise top and bottom.
const fn wrap(v: i32) -> usize {
    const N: i32 = GRID_SIZE as i32;
    ((v % N + N) % N) as usize
}

/// Grid holds one generation of the automaton: a complete mapping from
/// every coordinate in [0, GRID_SIZE) x [0, GRID_SIZE) to a cell state,
/// stored flat in row-major order. Updates are functional - stepping
/// builds a fresh grid so no cell ever reads a half-updated neighbor.
#[derive(Clone, PartialEq, Debug)]
pub struct Grid {
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with all cells initially dead
    pub fn new() -> Self {
        Self {
            cells: vec![Cell::Dead; GRID_SIZE * GRID_SIZE],
        }
    }

    /// Create a grid that is dead everywhere except the given cells
    pub fn seeded(alive: &[(usize, usize)]) -> Self {
        let mut grid = Self::new();
        for &(x, y) in alive {
            grid.set(x, y, Cell::Alive);
        }
        grid
    }

    /// Side length of the lattice
    pub const fn size(&self) -> usize {
        GRID_SIZE
    }

    /// Convert 2D coordinates to the flat index. The only coordinate
    /// sources are wrapped neighbor lookups and clicks bounded by the
    /// window, so an out-of-range coordinate is a programming error.
    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < GRID_SIZE && y < GRID_SIZE,
            "({x}, {y}) is outside the {GRID_SIZE}x{GRID_SIZE} lattice"
        );
        y * GRID_SIZE + x
    }

    /// Get cell at position
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[self.index(x, y)]
    }

    /// Set cell at position
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        let idx = self.index(x, y);
        self.cells[idx] = cell;
    }

    /// Flip the cell at position, returning its new state
    pub fn toggle(&mut self, x: usize, y: usize) -> Cell {
        let idx = self.index(x, y);
        self.cells[idx] = self.cells[idx].toggle();
        self.cells[idx]
    }

    /// Count live neighbors over the 8 wrapped unit offsets
    fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .map(|(dx, dy)| self.get(wrap(x as i32 + dx), wrap(y as i32 + dy)))
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// One tick: apply the rule to every cell of this snapshot and
    /// collect the next generation, leaving this one untouched
    pub fn step(&self) -> Self {
        let cells = (0..GRID_SIZE)
            .flat_map(|y| (0..GRID_SIZE).map(move |x| (x, y)))
            .map(|(x, y)| self.get(x, y).next_state(self.live_neighbors(x, y)))
            .collect();

        Self { cells }
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..GRID_SIZE)
            .flat_map(move |y| (0..GRID_SIZE).map(move |x| (x, y)))
            .map(|(x, y)| (x, y, self.get(x, y)))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
