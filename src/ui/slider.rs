//! Drag slider and the value/pixel mapping behind it.
//!
//! The mapping functions are free of any drawing so other drag controls
//! can reuse them.

use macroquad::prelude::*;

/// Pixel offset of `value` along a track `track_width` wide, clamped to the track
pub fn value_to_offset(value: f64, min: f64, max: f64, track_width: f64) -> f64 {
    if track_width <= 0.0 || max <= min {
        return 0.0;
    }
    (track_width * (value - min) / (max - min)).clamp(0.0, track_width)
}

/// Value at pixel `offset` along a track `track_width` wide
pub fn offset_to_value(offset: f64, min: f64, max: f64, track_width: f64) -> f64 {
    if track_width <= 0.0 {
        return min;
    }
    (max - min) * offset / track_width + min
}

/// The speed slider runs the other way from the interval it controls:
/// further right means fewer milliseconds per generation.
pub fn interval_from_slider(value: f64, min: f64, max: f64) -> f64 {
    min + max - value.round()
}

pub fn slider_from_interval(interval_ms: f64, min: f64, max: f64) -> f64 {
    min + max - interval_ms
}

const TRACK_HEIGHT: f32 = 6.0;
const THUMB_RADIUS: f32 = 9.0;

#[derive(Clone, Debug)]
pub struct Slider {
    x: f32,
    y: f32,
    width: f32,
    min: f64,
    max: f64,
    offset: f64,
    dragging: bool,
    label: String,
}

impl Slider {
    pub fn new(x: f32, y: f32, width: f32, min: f64, max: f64, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            min,
            max,
            offset: 0.0,
            dragging: false,
            label: label.into(),
        }
    }

    /// Track geometry may change every frame with the window
    pub fn set_track(&mut self, x: f32, y: f32, width: f32) {
        let value = self.value();
        self.x = x;
        self.y = y;
        self.width = width;
        self.set_value(value);
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn value(&self) -> f64 {
        offset_to_value(self.offset, self.min, self.max, self.width as f64)
    }

    /// Move the thumb to represent `value` without emitting a change
    pub fn set_value(&mut self, value: f64) {
        self.offset = value_to_offset(value, self.min, self.max, self.width as f64);
    }

    /// Move the thumb under a pointer at screen x and return the new value
    pub fn drag_to(&mut self, pointer_x: f32) -> f64 {
        let raw = (pointer_x - self.x) as f64;
        self.offset = raw.clamp(0.0, self.width.max(0.0) as f64);
        self.value()
    }

    fn is_over(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x - THUMB_RADIUS
            && mouse_pos.0 <= self.x + self.width + THUMB_RADIUS
            && (mouse_pos.1 - self.y).abs() <= THUMB_RADIUS
    }

    /// Pointer state machine: press on the track engages, holding drags,
    /// release disengages. Returns the value whenever the thumb moved.
    pub fn handle_pointer(&mut self, mouse_pos: (f32, f32), pressed: bool, down: bool) -> Option<f64> {
        if pressed && self.is_over(mouse_pos) {
            self.dragging = true;
        }
        if !down {
            self.dragging = false;
        }
        if self.dragging {
            Some(self.drag_to(mouse_pos.0))
        } else {
            None
        }
    }

    pub fn update(&mut self, mouse_pos: (f32, f32)) -> Option<f64> {
        self.handle_pointer(
            mouse_pos,
            is_mouse_button_pressed(MouseButton::Left),
            is_mouse_button_down(MouseButton::Left),
        )
    }

    pub fn draw(&self, text_color: Color) {
        draw_text(&self.label, self.x, self.y - 14.0, 14.0, text_color);

        let fill_color = Color::from_rgba(255, 80, 80, 255);
        draw_rectangle(self.x, self.y - TRACK_HEIGHT / 2.0, self.width, TRACK_HEIGHT, GRAY);
        draw_rectangle(self.x, self.y - TRACK_HEIGHT / 2.0, self.offset as f32, TRACK_HEIGHT, fill_color);

        let thumb_x = self.x + self.offset as f32;
        draw_circle(thumb_x, self.y, THUMB_RADIUS, fill_color);
        if self.dragging {
            draw_circle_lines(thumb_x, self.y, THUMB_RADIUS, 2.0, text_color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_to_offset_linear() {
        assert_eq!(value_to_offset(20.0, 20.0, 200.0, 180.0), 0.0);
        assert_eq!(value_to_offset(110.0, 20.0, 200.0, 180.0), 90.0);
        assert_eq!(value_to_offset(200.0, 20.0, 200.0, 180.0), 180.0);
    }

    #[test]
    fn test_value_to_offset_clamps() {
        assert_eq!(value_to_offset(5.0, 20.0, 200.0, 180.0), 0.0);
        assert_eq!(value_to_offset(900.0, 20.0, 200.0, 180.0), 180.0);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(value_to_offset(50.0, 20.0, 200.0, 0.0), 0.0);
        assert_eq!(value_to_offset(50.0, 20.0, 20.0, 100.0), 0.0);
        assert_eq!(offset_to_value(10.0, 20.0, 200.0, 0.0), 20.0);
    }

    #[test]
    fn test_round_trip() {
        for width in [1.0, 37.0, 160.0, 1234.5] {
            for step in 0..=50 {
                let value = 20.0 + 180.0 * step as f64 / 50.0;
                let offset = value_to_offset(value, 20.0, 200.0, width);
                let back = offset_to_value(offset, 20.0, 200.0, width);
                assert!((back - value).abs() < 1e-9, "{value} at width {width}");
            }
        }
    }

    #[test]
    fn test_reversed_speed_mapping() {
        assert_eq!(interval_from_slider(20.0, 20.0, 200.0), 200.0);
        assert_eq!(interval_from_slider(200.0, 20.0, 200.0), 20.0);
        assert_eq!(interval_from_slider(89.6, 20.0, 200.0), 130.0);
        assert_eq!(slider_from_interval(130.0, 20.0, 200.0), 90.0);
    }

    #[test]
    fn test_drag_clamps_to_track() {
        let mut slider = Slider::new(100.0, 50.0, 180.0, 20.0, 200.0, "Speed");
        assert_eq!(slider.drag_to(10.0), 20.0);
        assert_eq!(slider.drag_to(400.0), 200.0);
        assert_eq!(slider.drag_to(190.0), 110.0);
        assert_eq!(slider.offset(), 90.0);
    }

    #[test]
    fn test_pointer_engage_drag_release() {
        let mut slider = Slider::new(100.0, 50.0, 180.0, 20.0, 200.0, "Speed");
        // Press away from the track does nothing
        assert_eq!(slider.handle_pointer((100.0, 200.0), true, true), None);
        assert!(!slider.is_dragging());

        assert_eq!(slider.handle_pointer((145.0, 52.0), true, true), Some(65.0));
        assert!(slider.is_dragging());
        // Dragging continues off the track
        assert_eq!(slider.handle_pointer((280.0, 300.0), false, true), Some(200.0));
        assert_eq!(slider.handle_pointer((150.0, 50.0), false, false), None);
        assert!(!slider.is_dragging());
        assert_eq!(slider.value(), 200.0);
    }

    #[test]
    fn test_set_track_keeps_value() {
        let mut slider = Slider::new(0.0, 0.0, 180.0, 20.0, 200.0, "Speed");
        slider.set_value(110.0);
        slider.set_track(40.0, 10.0, 360.0);
        assert_eq!(slider.offset(), 180.0);
        assert!((slider.value() - 110.0).abs() < 1e-9);
    }
}
