use std::sync::OnceLock;

use log::{error, info};
use macroquad::prelude::*;
use life_canvas::{
    Config, GameState,
    ui::{self, Slider, TextInput, PANEL_WIDTH, SLIDER_Y, SPEED_INPUT_Y},
    rendering::{self, BoardGeometry},
    input,
};

/// Optional config file looked up in the working directory
const CONFIG_PATH: &str = "life_canvas.json";

static CONFIG: OnceLock<Config> = OnceLock::new();

fn init_logging() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let env = env_logger::Env::default().default_filter_or("info");
        let _ = env_logger::Builder::from_env(env).try_init();
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> Config {
    if !std::path::Path::new(CONFIG_PATH).exists() {
        return Config::default();
    }
    match Config::load(CONFIG_PATH) {
        Ok(config) => {
            info!("loaded {CONFIG_PATH}");
            config
        }
        Err(err) => {
            error!("{err}; using defaults");
            Config::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn load_config() -> Config {
    Config::default()
}

fn config() -> &'static Config {
    CONFIG.get_or_init(|| {
        init_logging();
        load_config()
    })
}

fn window_conf() -> Conf {
    let config = config();
    Conf {
        window_title: "Game of Life".to_owned(),
        window_width: config.window_width,
        window_height: config.window_height,
        window_resizable: true,
        ..Default::default()
    }
}

/// Interval text shown next to the slider
fn format_interval(interval_ms: f64) -> String {
    format!("{interval_ms}")
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = config();
    let seed = config
        .random_seed
        .unwrap_or_else(|| (macroquad::miniquad::date::now() * 1000.0) as u64);
    let mut state = GameState::new(&Config {
        random_seed: Some(seed),
        ..config.clone()
    });
    info!(
        "{}x{} grid, {}ms per generation",
        config.grid_size, config.grid_size, config.interval_ms
    );

    let (min, max) = (config.slider_min_ms, config.slider_max_ms);
    let track_inset = 10.0;
    let track_width = PANEL_WIDTH - 2.0 * track_inset;
    let mut slider = Slider::new(ui::panel_x() + track_inset, SLIDER_Y, track_width, min, max, "Speed");
    slider.set_value(ui::slider_from_interval(state.interval_ms(), min, max));

    let mut speed_input = TextInput::new(ui::panel_x() + track_inset, SPEED_INPUT_Y, track_width, "ms per generation");
    speed_input.set_text(&format_interval(state.interval_ms()));

    loop {
        let mouse_pos = mouse_position();

        // Update UI positions for responsiveness
        let px = ui::panel_x();
        slider.set_track(px + track_inset, SLIDER_Y, track_width);
        speed_input.set_position(px + track_inset, SPEED_INPUT_Y);

        // Rebuilt each frame so labels follow the state
        let buttons = ui::create_buttons(&state);

        if let Some(value) = slider.update(mouse_pos) {
            let interval = ui::interval_from_slider(value, min, max);
            if state.set_interval(interval).is_ok() {
                speed_input.set_text(&format_interval(interval));
            }
        }

        if let Some(text) = speed_input.update(mouse_pos) {
            match state.set_interval_text(&text) {
                Ok(interval) => slider.set_value(ui::slider_from_interval(interval, min, max)),
                Err(_) => speed_input.set_text(&format_interval(state.interval_ms())),
            }
        }

        state = input::process_button_clicks(state, &buttons, mouse_pos);
        if !speed_input.is_focused() {
            state = input::process_keyboard_input(state);
        }

        let geometry = BoardGeometry::compute(
            ui::grid_area_width(),
            ui::grid_area_height(),
            config.line_thickness,
            state.grid().side(),
        );
        if !slider.is_dragging() {
            input::handle_board_click(&mut state, &geometry, mouse_pos);
        }

        state.frame(get_time() * 1000.0);

        rendering::draw_board(&state, &geometry);
        rendering::draw_controls(&state, &buttons, &slider, &speed_input, mouse_pos);

        next_frame().await;
    }
}
