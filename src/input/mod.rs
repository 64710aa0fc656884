use macroquad::prelude::*;
use crate::application::GameState;
use crate::domain::{Pattern, Seeded};
use crate::rendering::BoardGeometry;
use crate::ui::{Button, Control, grid_area_width};

/// Apply one panel control to the state
pub fn apply_control(mut state: GameState, control: Control) -> GameState {
    match control {
        Control::PlayPause => state.toggle_running(),
        Control::Step => {
            state.step_once();
            state
        }
        Control::Clear => state.clear(),
        Control::Random => state.randomize(),
        Control::Grid => state.toggle_grid(),
        Control::Theme => state.toggle_theme(),
        Control::Pattern(pattern) => {
            state.set_pattern(pattern);
            state
        }
    }
}

/// Process button clicks functionally
pub fn process_button_clicks(
    state: GameState,
    buttons: &[(Control, Button)],
    mouse_pos: (f32, f32),
) -> GameState {
    buttons.iter().fold(state, |s, (control, btn)| {
        if btn.is_clicked(mouse_pos) {
            apply_control(s, *control)
        } else {
            s
        }
    })
}

/// Keyboard shortcut table
pub const SHORTCUTS: [(KeyCode, Control); 10] = [
    (KeyCode::Space, Control::PlayPause),
    (KeyCode::S, Control::Step),
    (KeyCode::C, Control::Clear),
    (KeyCode::R, Control::Random),
    (KeyCode::G, Control::Grid),
    (KeyCode::T, Control::Theme),
    (KeyCode::Key1, Control::Pattern(Pattern::Cell)),
    (KeyCode::Key2, Control::Pattern(Pattern::Blinker)),
    (KeyCode::Key3, Control::Pattern(Pattern::Glider)),
    (KeyCode::Key4, Control::Pattern(Pattern::Block)),
];

/// Process keyboard input functionally
pub fn process_keyboard_input(state: GameState) -> GameState {
    SHORTCUTS.iter().fold(state, |s, (key, control)| {
        if is_key_pressed(*key) { apply_control(s, *control) } else { s }
    })
}

/// Seed at a screen position. Positions off the board are dropped.
pub fn seed_at(state: &mut GameState, geometry: &BoardGeometry, pos: (f32, f32)) -> Option<Seeded> {
    let (x, y) = geometry.cell_at(pos.0, pos.1)?;
    Some(state.seed_selected(x, y))
}

/// Handle a left click on the board
pub fn handle_board_click(state: &mut GameState, geometry: &BoardGeometry, mouse_pos: (f32, f32)) {
    if mouse_pos.0 >= grid_area_width() || !is_mouse_button_pressed(MouseButton::Left) {
        return;
    }
    seed_at(state, geometry, mouse_pos);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn new_state() -> GameState {
        GameState::new(&Config::default())
    }

    #[test]
    fn test_controls_map_to_state_changes() {
        let state = apply_control(new_state(), Control::PlayPause);
        assert!(state.is_running());
        let state = apply_control(state, Control::Theme);
        assert!(state.theme_dark);
        let state = apply_control(state, Control::Grid);
        assert!(!state.grid_on);
        let state = apply_control(state, Control::Pattern(Pattern::Glider));
        assert_eq!(state.pattern, Pattern::Glider);
    }

    #[test]
    fn test_step_control_advances_while_paused() {
        let state = apply_control(new_state(), Control::Step);
        assert_eq!(state.generation, 1);
        assert!(!state.is_running());
    }

    #[test]
    fn test_random_then_clear() {
        let state = apply_control(new_state(), Control::Random);
        assert!(state.grid().population() > 0);
        let state = apply_control(state, Control::Clear);
        assert_eq!(state.grid().population(), 0);
    }

    #[test]
    fn test_seed_at_maps_pixels_to_cells() {
        let mut state = new_state();
        state.set_pattern(Pattern::Blinker);
        let geometry = BoardGeometry::compute(304.0, 304.0, 2.0, 15);

        // Center of cell (7, 7)
        assert_eq!(seed_at(&mut state, &geometry, (152.0, 152.0)), Some(Seeded::Stamped(3)));
        assert!(state.grid().is_alive(7, 6));
        assert!(state.grid().is_alive(7, 8));

        assert_eq!(seed_at(&mut state, &geometry, (152.0, 152.0)), Some(Seeded::Killed));
        assert_eq!(seed_at(&mut state, &geometry, (303.0, 10.0)), None);
    }

    #[test]
    fn test_shortcuts_are_unique() {
        let mut keys: Vec<_> = SHORTCUTS.iter().map(|(key, _)| *key as u32).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), SHORTCUTS.len());
    }
}
