use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::timing::{FrameClock, Timing};
use super::transition::GridOverlay;
use crate::config::Config;
use crate::domain::{Grid, Pattern, Seeded};
use crate::error::{Error, Result};

/// GameState owns everything the frame loop mutates.
/// Input handlers and the renderer receive it by reference.
pub struct GameState {
    pub grid: Grid,
    pub pattern: Pattern,
    pub generation: u64,
    pub theme_dark: bool,
    pub grid_on: bool,
    pub overlay: GridOverlay,
    timing: Timing,
    clock: FrameClock,
    random_density: f64,
    rng: StdRng,
    parallel_threshold: usize,
    /// Evolution performance metric
    pub last_evolution_time_ms: f32,
}

impl GameState {
    pub fn new(config: &Config) -> Self {
        Self {
            grid: Grid::new(config.grid_size),
            pattern: Pattern::default(),
            generation: 0,
            theme_dark: false,
            grid_on: true,
            overlay: GridOverlay::new(config.transition_ms),
            timing: Timing::new(config.interval_ms),
            clock: FrameClock::new(),
            random_density: config.random_density,
            rng: StdRng::seed_from_u64(config.random_seed.unwrap_or_default()),
            parallel_threshold: config.parallel_threshold,
            last_evolution_time_ms: 0.0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn is_running(&self) -> bool {
        !self.timing.is_paused()
    }

    pub fn interval_ms(&self) -> f64 {
        self.timing.interval_ms()
    }

    pub fn countdown_fraction(&self) -> f64 {
        self.timing.countdown_fraction()
    }

    /// Replace the grid with its next generation
    pub fn advance(&mut self) {
        let parallel = self.grid.cell_count() >= self.parallel_threshold;
        let (next, elapsed_ms) = timed(|| {
            if parallel {
                self.grid.advance_parallel()
            } else {
                self.grid.advance()
            }
        });
        self.grid = next;
        self.last_evolution_time_ms = elapsed_ms;
        self.generation += 1;
    }

    /// The Step button: one generation right now, whatever the pause state
    pub fn step_once(&mut self) {
        self.advance();
    }

    pub fn request_immediate_step(&mut self) {
        self.timing.request_immediate_step();
    }

    pub fn set_paused(&mut self, paused: bool) {
        if paused == self.timing.is_paused() {
            return;
        }
        self.timing.set_paused(paused);
        info!("simulation {}", if paused { "paused" } else { "running" });
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        let paused = self.is_running();
        self.set_paused(paused);
        self
    }

    /// Clear grid and reset generation counter
    pub fn clear(mut self) -> Self {
        self.grid = self.grid.clear();
        self.generation = 0;
        info!("grid cleared");
        self
    }

    /// Randomize grid and reset generation counter
    pub fn randomize(mut self) -> Self {
        self.grid = self.grid.randomize(&mut self.rng, self.random_density);
        self.generation = 0;
        info!("grid randomized, population {}", self.grid.population());
        self
    }

    pub fn toggle_grid(mut self) -> Self {
        self.grid_on = !self.grid_on;
        self
    }

    pub fn toggle_theme(mut self) -> Self {
        self.theme_dark = !self.theme_dark;
        self
    }

    pub fn set_pattern(&mut self, pattern: Pattern) {
        self.pattern = pattern;
    }

    /// Click-to-seed with the selected pattern
    pub fn seed_selected(&mut self, x: usize, y: usize) -> Seeded {
        let offsets = self.pattern.offsets();
        self.seed(x, y, offsets)
    }

    pub fn seed(&mut self, x: usize, y: usize, offsets: &[(i32, i32)]) -> Seeded {
        let result = self.grid.seed(x, y, offsets);
        debug!("seed at ({x}, {y}): {result:?}");
        result
    }

    pub fn set_interval(&mut self, interval_ms: f64) -> Result<()> {
        self.timing.set_interval(interval_ms)
    }

    /// Interval typed by the user. Anything but a finite positive number is
    /// rejected and leaves both the interval and the pause flag alone.
    pub fn set_interval_text(&mut self, text: &str) -> Result<f64> {
        let interval = text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|ms| ms.is_finite() && *ms > 0.0)
            .ok_or_else(|| Error::InvalidInterval(text.to_owned()))
            .inspect_err(|err| warn!("{err}"))?;
        self.set_interval(interval)?;
        Ok(interval)
    }

    /// Host frame callback: derive elapsed time from the timestamp, then tick
    pub fn frame(&mut self, timestamp_ms: f64) {
        let elapsed = self.clock.elapsed(timestamp_ms);
        self.tick(elapsed);
    }

    /// Advance the loop by `elapsed_ms` of wall time
    pub fn tick(&mut self, elapsed_ms: f64) {
        if self.timing.consume(elapsed_ms) {
            self.advance();
        }
        self.overlay.update(elapsed_ms, self.theme_dark, self.grid_on);
    }
}

/// Run `f` and report how long it took in milliseconds
#[cfg(not(target_arch = "wasm32"))]
fn timed<T>(f: impl FnOnce() -> T) -> (T, f32) {
    let start = std::time::Instant::now();
    let out = f();
    (out, start.elapsed().as_secs_f32() * 1000.0)
}

// No monotonic clock in the browser sandbox through std
#[cfg(target_arch = "wasm32")]
fn timed<T>(f: impl FnOnce() -> T) -> (T, f32) {
    (f(), 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_state(grid_size: usize) -> GameState {
        GameState::new(&Config {
            grid_size,
            ..Config::default()
        })
    }

    #[test]
    fn test_starts_paused_and_empty() {
        let state = new_state(15);
        assert!(!state.is_running());
        assert_eq!(state.grid().side(), 15);
        assert_eq!(state.grid().population(), 0);
        assert_eq!(state.interval_ms(), 110.0);
    }

    #[test]
    fn test_paused_tick_does_not_advance() {
        let mut state = new_state(5);
        state.seed(2, 2, Pattern::Blinker.offsets());
        state.tick(10_000.0);
        assert_eq!(state.generation, 0);
    }

    #[test]
    fn test_resume_steps_on_next_frame() {
        let mut state = new_state(5).toggle_running();
        state.frame(0.0);
        assert_eq!(state.generation, 1);
        state.frame(50.0);
        assert_eq!(state.generation, 1);

        let mut state = state.toggle_running().toggle_running();
        state.frame(66.0);
        assert_eq!(state.generation, 2);
    }

    #[test]
    fn test_fixed_interval_stepping() {
        let mut state = new_state(5).toggle_running();
        state.set_interval(100.0).unwrap();
        let mut timestamp = 0.0;
        for _ in 0..=60 {
            state.frame(timestamp);
            timestamp += 10.0;
        }
        // Immediate step at t=0 and then one every 100ms up to t=600
        assert_eq!(state.generation, 7);
    }

    #[test]
    fn test_request_immediate_step() {
        let mut state = new_state(5).toggle_running();
        state.tick(0.0);
        state.tick(1.0);
        assert_eq!(state.generation, 1);
        state.request_immediate_step();
        state.tick(0.0);
        assert_eq!(state.generation, 2);
    }

    #[test]
    fn test_step_once_while_paused() {
        let mut state = new_state(5);
        state.seed(2, 2, Pattern::Blinker.offsets());
        state.step_once();
        assert_eq!(state.generation, 1);
        assert!(state.grid().is_alive(1, 2));
        assert!(!state.is_running());
    }

    #[test]
    fn test_invalid_text_keeps_interval_and_pause() {
        let mut state = new_state(5);
        for bad in ["", "abc", "-10", "0", "inf", "NaN"] {
            assert!(state.set_interval_text(bad).is_err(), "{bad:?}");
        }
        assert_eq!(state.interval_ms(), 110.0);
        assert!(!state.is_running());

        let mut state = state.toggle_running();
        assert!(state.set_interval_text("oops").is_err());
        assert!(state.is_running());
        assert_eq!(state.set_interval_text(" 75 ").unwrap(), 75.0);
        assert_eq!(state.interval_ms(), 75.0);
    }

    #[test]
    fn test_clear_resets_generation_but_not_pause() {
        let mut state = new_state(6).toggle_running();
        state.seed(3, 3, Pattern::Block.offsets());
        state.advance();
        let state = state.clear().clear();
        assert_eq!(state.generation, 0);
        assert_eq!(state.grid().population(), 0);
        assert!(state.is_running());
    }

    #[test]
    fn test_seed_selected_uses_pattern() {
        let mut state = new_state(6);
        state.set_pattern(Pattern::Block);
        assert_eq!(state.seed_selected(5, 5), Seeded::Stamped(1));
        assert_eq!(state.seed_selected(5, 5), Seeded::Killed);
        assert_eq!(state.seed_selected(1, 1), Seeded::Stamped(4));
    }

    #[test]
    fn test_large_grid_uses_parallel_path() {
        let mut state = GameState::new(&Config {
            grid_size: 30,
            parallel_threshold: 100,
            ..Config::default()
        });
        state.seed(10, 10, Pattern::Glider.offsets());
        let expected = state.grid().advance();
        state.advance();
        assert_eq!(state.grid(), &expected);
    }

    #[test]
    fn test_tick_drives_overlay() {
        let mut state = new_state(5);
        state.tick(200.0);
        assert_eq!(state.overlay.rgba().3, 1.0);
        let mut state = state.toggle_grid();
        state.tick(100.0);
        assert!((state.overlay.rgba().3 - 0.5).abs() < 1e-6);
    }
}
