use macroquad::prelude::*;

const MAX_CHARS: usize = 12;

/// Single-line text field. Click to focus, Enter to submit.
#[derive(Clone, Debug)]
pub struct TextInput {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    text: String,
    focused: bool,
    label: String,
}

impl TextInput {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height: 28.0,
            text: String::new(),
            focused: false,
            label: label.into(),
        }
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub fn bounds(&self) -> (f32, f32, f32, f32) {
        (self.x, self.y, self.width, self.height)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the contents unless the user is typing
    pub fn set_text(&mut self, text: &str) {
        if !self.focused {
            self.text = text.to_owned();
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn push_char(&mut self, c: char) {
        if self.focused && !c.is_control() && self.text.chars().count() < MAX_CHARS {
            self.text.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if self.focused {
            self.text.pop();
        }
    }

    /// Leave focus and hand out the contents
    pub fn submit(&mut self) -> Option<String> {
        if !self.focused {
            return None;
        }
        self.focused = false;
        Some(self.text.clone())
    }

    fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    /// Handle focus clicks and keystrokes. Returns the text on Enter.
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> Option<String> {
        if is_mouse_button_pressed(MouseButton::Left) {
            self.focused = self.is_hovered(mouse_pos);
        }
        if !self.focused {
            // Drain so keys typed elsewhere do not show up on focus
            while get_char_pressed().is_some() {}
            return None;
        }
        while let Some(c) = get_char_pressed() {
            self.push_char(c);
        }
        if is_key_pressed(KeyCode::Backspace) {
            self.backspace();
        }
        if is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter) {
            return self.submit();
        }
        None
    }

    pub fn draw(&self, text_color: Color) {
        draw_text(&self.label, self.x, self.y - 5.0, 14.0, text_color);

        let border = if self.focused { Color::from_rgba(255, 80, 80, 255) } else { GRAY };
        draw_rectangle(self.x, self.y, self.width, self.height, Color::from_rgba(45, 45, 45, 255));
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, border);

        let shown = if self.focused { format!("{}_", self.text) } else { self.text.clone() };
        draw_text(&shown, self.x + 6.0, self.y + 20.0, 18.0, WHITE);
    }
}
