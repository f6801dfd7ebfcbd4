//! Text input widget
//!
//! A single-line text field. The cursor counts characters, not bytes, so
//! accented input such as "café" edits correctly.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// A single-line text input
#[derive(Debug, Clone)]
pub struct TextInput {
    content: String,
    /// Cursor position in characters
    cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    /// Shown while empty
    pub placeholder: String,
    /// Color of typed text
    pub text_color: Color,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self {
            content: String::new(),
            cursor: 0,
            focused: false,
            placeholder: String::new(),
            text_color: Color::White,
        }
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the color of typed text
    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Set content and move the cursor to the end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self.cursor = self.char_count();
        self
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let index = self.byte_index(self.cursor);
        self.content.insert(index, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let index = self.byte_index(self.cursor);
            self.content.remove(index);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let index = self.byte_index(self.cursor);
            self.content.remove(index);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Cursor position in characters
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether nothing has been typed
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        if self.content.is_empty() {
            buf.set_stringn(
                area.x,
                area.y,
                &self.placeholder,
                area.width as usize,
                Style::default().fg(Color::DarkGray),
            );
        } else {
            buf.set_stringn(
                area.x,
                area.y,
                &self.content,
                area.width as usize,
                Style::default().fg(self.text_color),
            );
        }

        if self.focused {
            let cursor_x = area.x.saturating_add(self.cursor as u16);
            if cursor_x < area.x + area.width {
                let cursor_char = self.content.chars().nth(self.cursor).unwrap_or(' ');
                buf.set_string(
                    cursor_x,
                    area.y,
                    cursor_char.to_string(),
                    Style::default().fg(Color::Black).bg(self.text_color),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editing() {
        let mut input = TextInput::new();
        for c in "12,5".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "12,5");

        input.backspace();
        input.move_start();
        input.delete();
        assert_eq!(input.value(), "2,");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_multibyte_characters() {
        let mut input = TextInput::new().content("cafe");
        input.backspace();
        input.insert('é');
        input.insert('s');
        assert_eq!(input.value(), "cafés");

        input.move_left();
        input.backspace();
        assert_eq!(input.value(), "cafs");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn test_clear() {
        let mut input = TextInput::new().content("Luz");
        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.cursor(), 0);
        input.move_right();
        assert_eq!(input.cursor(), 0);
    }
}
