mod game_state;
mod sim_clock;

pub use game_state::GameState;
pub use sim_clock::SimClock;
