use macroquad::prelude::*;
use tracing_subscriber::EnvFilter;

use toroidal_life::{GameState, input, rendering, ui};

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: ui::WINDOW_SPAN,
        window_height: ui::WINDOW_SPAN,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut state = GameState::new();

    // Exit happens inside next_frame() when the window reports a close request.
    loop {
        let mouse_pos = mouse_position();

        input::apply_keyboard(&mut state);
        input::apply_mouse(&mut state, mouse_pos);

        state.advance(get_frame_time());

        clear_background(rendering::BACKGROUND);
        rendering::draw_grid(&state.grid);
        rendering::draw_overlays(&state, mouse_pos);

        next_frame().await;
    }
}
