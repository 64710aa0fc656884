mod button;
mod slider;
mod text_input;

pub use button::Button;
pub use slider::{Slider, interval_from_slider, offset_to_value, slider_from_interval, value_to_offset};
pub use text_input::TextInput;

// UI constants - functions for responsive layout
use macroquad::prelude::{screen_height, screen_width};

use crate::application::GameState;
use crate::domain::Pattern;

pub const PANEL_WIDTH: f32 = 200.0;
pub const BUTTON_HEIGHT: f32 = 36.0;
const GAP: f32 = 8.0;
const INSET: f32 = 10.0;

pub const SLIDER_Y: f32 = 335.0;
pub const SPEED_INPUT_Y: f32 = 385.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the board area
pub fn grid_area_width() -> f32 {
    (screen_width() - PANEL_WIDTH).max(0.0)
}

/// Get the height of the board area
pub fn grid_area_height() -> f32 {
    screen_height()
}

/// What a panel button does
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    PlayPause,
    Step,
    Clear,
    Random,
    Grid,
    Theme,
    Pattern(Pattern),
}

/// Build the panel buttons for the current state.
/// Labels and highlights follow the state, so they are rebuilt every frame.
pub fn create_buttons(state: &GameState) -> Vec<(Control, Button)> {
    let x = panel_x() + INSET;
    let width = PANEL_WIDTH - 2.0 * INSET;
    let half = (width - GAP) / 2.0;
    let row = |i: usize| INSET + i as f32 * (BUTTON_HEIGHT + GAP);

    let play_label = if state.is_running() { "Pause" } else { "Play" };

    let mut buttons = vec![
        (Control::PlayPause, Button::new(x, row(0), width, BUTTON_HEIGHT, play_label)),
        (Control::Step, Button::new(x, row(1), half, BUTTON_HEIGHT, "Step")),
        (Control::Clear, Button::new(x + half + GAP, row(1), half, BUTTON_HEIGHT, "Clear")),
        (Control::Random, Button::new(x, row(2), width, BUTTON_HEIGHT, "Random")),
        (Control::Grid, Button::new(x, row(3), half, BUTTON_HEIGHT, "Grid").with_active(state.grid_on)),
        (Control::Theme, Button::new(x + half + GAP, row(3), half, BUTTON_HEIGHT, "Dark")
            .with_active(state.theme_dark)),
    ];

    buttons.extend(Pattern::all().into_iter().enumerate().map(|(i, pattern)| {
        let bx = if i % 2 == 0 { x } else { x + half + GAP };
        let button = Button::new(bx, row(4 + i / 2), half, BUTTON_HEIGHT, pattern.name())
            .with_active(state.pattern == pattern);
        (Control::Pattern(pattern), button)
    }));

    buttons
}
