/// One lattice position's state.
/// A cell is either Dead or Alive; no other states exist.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Cell {
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Flip between alive and dead, used when a cell is clicked
    pub const fn toggle(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    /// Next state under Conway's rules:
    /// 1. A live cell with 2-3 live neighbors survives
    /// 2. A dead cell with exactly 3 live neighbors becomes alive
    /// 3. All other cases result in death
    pub const fn next_state(self, live_neighbors: u8) -> Self {
        match (self, live_neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underpopulation() {
        assert_eq!(Cell::Alive.next_state(0), Cell::Dead);
        assert_eq!(Cell::Alive.next_state(1), Cell::Dead);
    }

    #[test]
    fn test_survival() {
        assert_eq!(Cell::Alive.next_state(2), Cell::Alive);
        assert_eq!(Cell::Alive.next_state(3), Cell::Alive);
    }

    #[test]
    fn test_overpopulation() {
        assert_eq!(Cell::Alive.next_state(4), Cell::Dead);
        assert_eq!(Cell::Alive.next_state(8), Cell::Dead);
    }

    #[test]
    fn test_reproduction() {
        assert_eq!(Cell::Dead.next_state(3), Cell::Alive);
        assert_eq!(Cell::Dead.next_state(2), Cell::Dead);
        assert_eq!(Cell::Dead.next_state(4), Cell::Dead);
    }

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(Cell::Dead.toggle(), Cell::Alive);
        assert_eq!(Cell::Alive.toggle(), Cell::Dead);
        assert_eq!(Cell::Dead.toggle().toggle(), Cell::Dead);
    }
}
