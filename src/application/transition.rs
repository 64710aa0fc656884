/// Scalar that slides linearly between two bounds.
/// The flag passed to [`Transition::step`] picks which bound it heads to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    value: f64,
    from: f64,
    to: f64,
    duration_ms: f64,
}

impl Transition {
    pub fn new(value: f64, from: f64, to: f64, duration_ms: f64) -> Self {
        Self {
            value,
            from,
            to,
            duration_ms,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Move toward `to` when `forward`, else toward `from`, never past the bound.
    /// A full sweep takes `duration_ms`.
    pub fn step(&mut self, elapsed_ms: f64, forward: bool) {
        let delta = elapsed_ms / self.duration_ms * (self.to - self.from);
        self.value = if forward {
            (self.value + delta).min(self.to)
        } else {
            (self.value - delta).max(self.from)
        };
    }
}

/// Animated grid-line colour: light lines on the dark theme, dark lines on
/// the light theme, faded out when the overlay is off.
#[derive(Clone, Copy, Debug)]
pub struct GridOverlay {
    red: Transition,
    green: Transition,
    blue: Transition,
    alpha: Transition,
}

pub const LINE_SHADE_DARK: f64 = 24.0;
pub const LINE_SHADE_LIGHT: f64 = 244.0;

impl GridOverlay {
    /// Starts invisible with light lines, so the first frames fade the overlay in
    pub fn new(duration_ms: f64) -> Self {
        let channel = Transition::new(LINE_SHADE_LIGHT, LINE_SHADE_DARK, LINE_SHADE_LIGHT, duration_ms);
        Self {
            red: channel,
            green: channel,
            blue: channel,
            alpha: Transition::new(0.0, 0.0, 1.0, duration_ms),
        }
    }

    pub fn update(&mut self, elapsed_ms: f64, theme_dark: bool, grid_on: bool) {
        for channel in [&mut self.red, &mut self.green, &mut self.blue] {
            channel.step(elapsed_ms, theme_dark);
        }
        self.alpha.step(elapsed_ms, grid_on);
    }

    /// (r, g, b) in 0..=255 and alpha in 0..=1
    pub fn rgba(&self) -> (u8, u8, u8, f32) {
        (
            self.red.value().round() as u8,
            self.green.value().round() as u8,
            self.blue.value().round() as u8,
            self.alpha.value() as f32,
        )
    }

    pub fn is_visible(&self) -> bool {
        self.alpha.value() > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_is_linear() {
        let mut t = Transition::new(0.0, 0.0, 1.0, 200.0);
        t.step(50.0, true);
        assert!((t.value() - 0.25).abs() < 1e-9);
        t.step(50.0, true);
        assert!((t.value() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_step_clamps_both_ways() {
        let mut t = Transition::new(0.9, 0.0, 1.0, 200.0);
        t.step(1_000.0, true);
        assert_eq!(t.value(), 1.0);
        t.step(1_000.0, false);
        assert_eq!(t.value(), 0.0);
    }

    #[test]
    fn test_value_above_bound_moves_down() {
        // A start value beyond `to` is pulled back inside by a forward step
        let mut t = Transition::new(255.0, 24.0, 244.0, 200.0);
        t.step(0.0, true);
        assert_eq!(t.value(), 244.0);
    }

    #[test]
    fn test_overlay_fades_in_then_out() {
        let mut overlay = GridOverlay::new(200.0);
        assert!(!overlay.is_visible());
        overlay.update(100.0, false, true);
        assert!((overlay.rgba().3 - 0.5).abs() < 1e-6);
        overlay.update(100.0, false, true);
        assert_eq!(overlay.rgba().3, 1.0);
        overlay.update(200.0, false, false);
        assert!(!overlay.is_visible());
    }

    #[test]
    fn test_theme_moves_colour_channels() {
        let mut overlay = GridOverlay::new(200.0);
        overlay.update(200.0, false, true);
        let (r, g, b, _) = overlay.rgba();
        assert_eq!((r, g, b), (24, 24, 24));

        overlay.update(100.0, true, true);
        assert_eq!(overlay.rgba().0, 134);
        overlay.update(100.0, true, true);
        assert_eq!(overlay.rgba().0, 244);
    }
}
