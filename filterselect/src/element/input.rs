use unicode_width::UnicodeWidthStr;

use crate::event::{Key, Modifiers};

/// The search field: text, cursor and focus.
///
/// The cursor is a character index, not a byte index.
#[derive(Debug, Clone)]
pub struct TextInput {
    value: String,
    cursor: usize,
    outer_height: u16,
    focused: bool,
}

impl Default for TextInput {
    fn default() -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            outer_height: 1,
            focused: false,
        }
    }
}

impl TextInput {
    pub fn new(value: impl Into<String>) -> Self {
        let mut input = Self::default();
        input.set_value(value);
        input
    }

    /// Rendered height including borders and padding.
    pub fn outer_height(mut self, height: u16) -> Self {
        self.outer_height = height;
        self
    }

    pub fn height(&self) -> u16 {
        self.outer_height
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the text, placing the cursor at the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.chars().count();
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Display width of the text before the cursor.
    pub fn cursor_column(&self) -> usize {
        let byte_pos = char_to_byte_index(&self.value, self.cursor);
        self.value[..byte_pos].width()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub(crate) fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Apply an editing key.
    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> TextEditResult {
        match key {
            Key::Char(c) if !modifiers.ctrl && !modifiers.alt => {
                self.insert_char(c);
                TextEditResult::Changed
            }
            Key::Char('u') if modifiers.ctrl => {
                if self.value.is_empty() {
                    TextEditResult::Handled
                } else {
                    self.set_value("");
                    TextEditResult::Changed
                }
            }
            Key::Backspace => {
                if self.delete_back() {
                    TextEditResult::Changed
                } else {
                    TextEditResult::Handled
                }
            }
            Key::Delete => {
                if self.delete_forward() {
                    TextEditResult::Changed
                } else {
                    TextEditResult::Handled
                }
            }
            Key::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                TextEditResult::Handled
            }
            Key::Right => {
                self.cursor = (self.cursor + 1).min(self.value.chars().count());
                TextEditResult::Handled
            }
            Key::Home => {
                self.cursor = 0;
                TextEditResult::Handled
            }
            Key::End => {
                self.cursor = self.value.chars().count();
                TextEditResult::Handled
            }
            _ => TextEditResult::Ignored,
        }
    }

    fn insert_char(&mut self, c: char) {
        let byte_pos = char_to_byte_index(&self.value, self.cursor);
        self.value.insert(byte_pos, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor. Returns true if text changed.
    fn delete_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let byte_pos = char_to_byte_index(&self.value, self.cursor - 1);
        self.value.remove(byte_pos);
        self.cursor -= 1;
        true
    }

    /// Delete the character under the cursor. Returns true if text changed.
    fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.value.chars().count() {
            return false;
        }
        let byte_pos = char_to_byte_index(&self.value, self.cursor);
        self.value.remove(byte_pos);
        true
    }
}

/// Result of handling a text editing key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEditResult {
    /// Text was modified.
    Changed,
    /// Key was handled but text didn't change (e.g., cursor movement).
    Handled,
    /// Key was not handled, should be passed on.
    Ignored,
}

/// Convert character index to byte index in a string.
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
