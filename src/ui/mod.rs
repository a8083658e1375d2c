//! Screen geometry shared by rendering and input.
//!
//! Cell (x, y) occupies the 9x9 pixel square at (x * 10, y * 10), leaving
//! a one pixel gutter between cells, and the window ends exactly on the
//! last cell's final pixel.

use crate::domain::GRID_SIZE;

/// Pixel pitch of one cell on screen
pub const CELL_PIXELS: usize = 10;
/// Drawn size of a cell; one pixel under the pitch leaves the gutter
pub const CELL_FILL: f32 = 9.0;
/// Window side length in pixels
pub const WINDOW_SPAN: i32 = (GRID_SIZE * CELL_PIXELS - 1) as i32;

// Overlay label layout: both labels sit in the top-left corner, the
// speed readout below the pause banner.
pub const LABEL_X: f32 = 10.0;
pub const PAUSE_LABEL_Y: f32 = 10.0;
pub const SPEED_LABEL_Y: f32 = 45.0;
pub const LABEL_PAD: f32 = 5.0;
pub const LABEL_FONT_SIZE: u16 = 20;

/// Map a window pixel position to the lattice cell under it.
///
/// Integer division by the cell pitch, no further clamping: the fixed
/// window keeps client coordinates under GRID_SIZE * CELL_PIXELS, so the
/// quotient stays in range, and the cast saturates any stray negative
/// cursor report to cell 0.
pub fn cell_under(pixel: (f32, f32)) -> (usize, usize) {
    (
        pixel.0 as usize / CELL_PIXELS,
        pixel.1 as usize / CELL_PIXELS,
    )
}

/// Top-left pixel of a cell's drawn square
pub fn cell_origin(x: usize, y: usize) -> (f32, f32) {
    ((x * CELL_PIXELS) as f32, (y * CELL_PIXELS) as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_under_floors_to_the_cell() {
        assert_eq!(cell_under((0.0, 0.0)), (0, 0));
        assert_eq!(cell_under((9.9, 9.9)), (0, 0));
        assert_eq!(cell_under((10.0, 10.0)), (1, 1));
        assert_eq!(cell_under((57.0, 123.0)), (5, 12));
    }

    #[test]
    fn test_window_edge_maps_to_the_last_cell() {
        // the largest client coordinate the fixed window can report
        let edge = (WINDOW_SPAN - 1) as f32;
        assert_eq!(cell_under((edge, edge)), (GRID_SIZE - 1, GRID_SIZE - 1));
    }

    #[test]
    fn test_negative_positions_saturate_to_cell_zero() {
        assert_eq!(cell_under((-3.0, -0.5)), (0, 0));
    }

    #[test]
    fn test_cell_origin_matches_the_pitch() {
        assert_eq!(cell_origin(0, 0), (0.0, 0.0));
        assert_eq!(cell_origin(5, 12), (50.0, 120.0));
    }
}
