mod geometry;

pub use geometry::BoardGeometry;

use macroquad::prelude::*;
use crate::application::GameState;
use crate::ui::{Button, Control, Slider, TextInput, panel_x, PANEL_WIDTH};

/// Theme-dependent colours
struct Palette {
    background: Color,
    panel: Color,
    text: Color,
    muted: Color,
}

fn palette(theme_dark: bool) -> Palette {
    if theme_dark {
        Palette {
            background: Color::from_rgba(18, 18, 18, 255),
            panel: Color::from_rgba(30, 30, 30, 255),
            text: WHITE,
            muted: GRAY,
        }
    } else {
        Palette {
            background: Color::from_rgba(250, 250, 250, 255),
            panel: Color::from_rgba(228, 228, 228, 255),
            text: Color::from_rgba(20, 20, 20, 255),
            muted: DARKGRAY,
        }
    }
}

const ALIVE_COLOR: Color = Color::new(1.0, 80.0 / 255.0, 80.0 / 255.0, 1.0);

/// Paint the board: background, outline, live cells, then the overlay
pub fn draw_board(state: &GameState, geometry: &BoardGeometry) {
    let colors = palette(state.theme_dark);
    clear_background(colors.background);

    let (r, g, b, alpha) = state.overlay.rgba();
    let line_color = Color::from_rgba(r, g, b, 255);

    draw_rectangle_lines(
        geometry.origin_x,
        geometry.origin_y,
        geometry.board_len,
        geometry.board_len,
        geometry.line,
        line_color,
    );

    if geometry.cell_len <= 0.0 {
        return;
    }

    for (x, y) in state.grid().alive_cells() {
        let (cx, cy, w, h) = geometry.cell_rect(x, y);
        draw_rectangle(cx, cy, w, h, ALIVE_COLOR);
    }

    if state.overlay.is_visible() {
        let overlay_color = Color { a: alpha, ..line_color };
        for (x, y, _) in state.grid().iter_cells() {
            let (cx, cy, w, h) = geometry.cell_rect(x, y);
            draw_rectangle_lines(cx, cy, w, h, geometry.line, overlay_color);
        }
    }
}

/// Helper to draw text labels
fn draw_text_label(text: &str, x: f32, y: f32, size: f32, color: Color) {
    draw_text(text, x, y, size, color);
}

/// Draw the control panel: buttons, speed controls and status
pub fn draw_controls(
    state: &GameState,
    buttons: &[(Control, Button)],
    slider: &Slider,
    speed_input: &TextInput,
    mouse_pos: (f32, f32),
) {
    let colors = palette(state.theme_dark);
    let px = panel_x();
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), colors.panel);

    buttons.iter().for_each(|(_, btn)| btn.draw(mouse_pos));
    slider.draw(colors.text);
    speed_input.draw(colors.text);

    let status = if state.is_running() { "Running" } else { "Paused" };
    let status_color = if state.is_running() {
        Color::from_rgba(0, 200, 0, 255)
    } else {
        Color::from_rgba(255, 165, 0, 255)
    };

    let info_y = speed_input_bottom(speed_input) + 30.0;
    let labels = [
        (format!("Pattern: {}", state.pattern.name()), 14.0, colors.text),
        (state.pattern.description().to_string(), 12.0, colors.muted),
        (format!("Generation: {}", state.generation), 16.0, colors.text),
        (format!("Population: {}", state.grid().population()), 14.0, colors.text),
        (format!("{:.0} ms / gen", state.interval_ms()), 14.0, colors.muted),
        (format!("Evolve: {:.2}ms", state.last_evolution_time_ms), 12.0, colors.muted),
        (format!("FPS: {}", get_fps()), 12.0, colors.muted),
        (status.to_string(), 16.0, status_color),
    ];

    labels.iter().enumerate().for_each(|(i, (text, size, color))| {
        draw_text_label(text, px + 10.0, info_y + i as f32 * 20.0, *size, *color);
    });

    // Time left until the next generation
    let bar_y = info_y + labels.len() as f32 * 20.0;
    let bar_width = PANEL_WIDTH - 20.0;
    draw_rectangle_lines(px + 10.0, bar_y, bar_width, 8.0, 1.0, colors.muted);
    if state.is_running() {
        let fill = bar_width * (1.0 - state.countdown_fraction() as f32);
        draw_rectangle(px + 10.0, bar_y, fill, 8.0, ALIVE_COLOR);
    }
}

fn speed_input_bottom(input: &TextInput) -> f32 {
    let (_, y, _, h) = input.bounds();
    y + h
}
