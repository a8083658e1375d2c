use macroquad::prelude::*;

use crate::application::GameState;
use crate::ui;

/// Keyboard events, edge-triggered once per press: Space pauses and
/// resumes, Up shortens the tick interval, Down lengthens it
pub fn apply_keyboard(state: &mut GameState) {
    if is_key_pressed(KeyCode::Space) {
        state.toggle_paused();
    }
    if is_key_pressed(KeyCode::Up) {
        state.speed_up();
    }
    if is_key_pressed(KeyCode::Down) {
        state.slow_down();
    }
}

/// Mouse events: a left press toggles the cell under the cursor.
/// Pressed, not held - dragging across the grid changes nothing.
pub fn apply_mouse(state: &mut GameState, mouse_pos: (f32, f32)) {
    if is_mouse_button_pressed(MouseButton::Left) {
        let (x, y) = ui::cell_under(mouse_pos);
        state.toggle_cell(x, y);
    }
}
