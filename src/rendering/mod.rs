use macroquad::prelude::*;

use crate::application::GameState;
use crate::domain::Grid;
use crate::ui::{
    CELL_FILL, LABEL_FONT_SIZE, LABEL_PAD, LABEL_X, PAUSE_LABEL_Y, SPEED_LABEL_Y, cell_origin,
    cell_under,
};

/// Window clear color; dead cells are filled with it as well
pub const BACKGROUND: Color = Color::new(18.0 / 255.0, 18.0 / 255.0, 18.0 / 255.0, 1.0);

/// Translucent fill for the cell under the cursor
const HIGHLIGHT: Color = Color::new(1.0, 1.0, 1.0, 128.0 / 255.0);

/// Draw every cell of the grid, colored by state
pub fn draw_grid(grid: &Grid) {
    for (x, y, cell) in grid.iter_cells() {
        let (px, py) = cell_origin(x, y);
        let color = if cell.is_alive() { WHITE } else { BACKGROUND };
        draw_rectangle(px, py, CELL_FILL, CELL_FILL, color);
    }
}

/// Text with a padded rectangle outline around it, anchored at the text's
/// top-left corner. macroquad positions text by baseline, so the measured
/// offset shifts it down to make (x, y) the top-left.
fn draw_boxed_label(text: &str, x: f32, y: f32) {
    let dims = measure_text(text, None, LABEL_FONT_SIZE, 1.0);
    draw_text(text, x, y + dims.offset_y, LABEL_FONT_SIZE as f32, WHITE);
    draw_rectangle_lines(
        x - LABEL_PAD,
        y - LABEL_PAD,
        dims.width + 2.0 * LABEL_PAD,
        dims.height + 2.0 * LABEL_PAD,
        1.0,
        WHITE,
    );
}

/// Draw the frame's overlays: the pause banner while paused, the speed
/// readout, and the highlight over the cell under the cursor
pub fn draw_overlays(state: &GameState, mouse_pos: (f32, f32)) {
    if state.clock.is_paused() {
        draw_boxed_label("game is paused", LABEL_X, PAUSE_LABEL_Y);
    }

    // trailing zeros drop: interval 200 reads "8", 175 reads "8.25"
    let speed = format!("{}", state.clock.speed_value());
    draw_boxed_label(&speed, LABEL_X, SPEED_LABEL_Y);

    let (cx, cy) = cell_under(mouse_pos);
    let (px, py) = cell_origin(cx, cy);
    draw_rectangle(px, py, CELL_FILL, CELL_FILL, HIGHLIGHT);
}
