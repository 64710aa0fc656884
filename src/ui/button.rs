use macroquad::prelude::*;

/// Button UI component with hover, click detection and a latched look for
/// toggles and the selected pattern
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    text: String,
    active: bool,
}

const IDLE: Color = Color::new(70.0 / 255.0, 130.0 / 255.0, 180.0 / 255.0, 1.0);
const HOVER: Color = Color::new(100.0 / 255.0, 149.0 / 255.0, 237.0 / 255.0, 1.0);
const ACTIVE: Color = Color::new(1.0, 80.0 / 255.0, 80.0 / 255.0, 1.0);

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            text: text.into(),
            active: false,
        }
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Check if mouse is hovering over button
    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let color = if self.active {
            ACTIVE
        } else if self.is_hovered(mouse_pos) {
            HOVER
        } else {
            IDLE
        };

        draw_rectangle(self.x, self.y, self.width, self.height, color);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, WHITE);

        let text_size = measure_text(&self.text, None, 18, 1.0);
        draw_text(
            &self.text,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            18.0,
            WHITE,
        );
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}
