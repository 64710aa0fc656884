mod game_state;
mod timing;
mod transition;

pub use game_state::GameState;
pub use timing::{FrameClock, Timing};
pub use transition::{GridOverlay, Transition};
