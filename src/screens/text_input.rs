// ABOUTME: Single-line text field with a cursor, shared by the form screens

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    /// Cursor position in chars, not bytes
    cursor: usize,
    char_limit: usize,
}

impl TextInput {
    pub fn new(char_limit: usize) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            char_limit,
        }
    }

    pub fn with_value(char_limit: usize, value: &str) -> Self {
        let mut input = Self::new(char_limit);
        input.set_value(value);
        input
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = value.chars().take(self.char_limit).collect();
        self.cursor = self.value.chars().count();
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(i, _)| i)
    }

    /// Applies an editing key. Returns true if the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return false;
        }
        match key.code {
            KeyCode::Char(c) => {
                if self.value.chars().count() < self.char_limit {
                    let at = self.byte_offset(self.cursor);
                    self.value.insert(at, c);
                    self.cursor += 1;
                }
                true
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    let at = self.byte_offset(self.cursor - 1);
                    self.value.remove(at);
                    self.cursor -= 1;
                }
                true
            }
            KeyCode::Delete => {
                if self.cursor < self.value.chars().count() {
                    let at = self.byte_offset(self.cursor);
                    self.value.remove(at);
                }
                true
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                true
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.value.chars().count());
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = self.value.chars().count();
                true
            }
            _ => false,
        }
    }

    /// Value with an underscore marking the cursor when focused
    pub fn display(&self, focused: bool, placeholder: &str) -> String {
        if !focused {
            return if self.value.is_empty() {
                placeholder.to_string()
            } else {
                self.value.clone()
            };
        }
        let at = self.byte_offset(self.cursor);
        format!("{}_{}", &self.value[..at], &self.value[at..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_and_editing() {
        let mut input = TextInput::new(10);
        for c in "demo".chars() {
            assert!(input.handle_key(key(KeyCode::Char(c))));
        }
        assert_eq!(input.value(), "demo");

        input.handle_key(key(KeyCode::Left));
        input.handle_key(key(KeyCode::Backspace));
        assert_eq!(input.value(), "deo");

        input.handle_key(key(KeyCode::Home));
        input.handle_key(key(KeyCode::Char('x')));
        assert_eq!(input.value(), "xdeo");
        assert_eq!(input.display(true, ""), "x_deo");
    }

    #[test]
    fn test_char_limit() {
        let mut input = TextInput::with_value(3, "abcdef");
        assert_eq!(input.value(), "abc");
        input.handle_key(key(KeyCode::Char('z')));
        assert_eq!(input.value(), "abc");
    }

    #[test]
    fn test_control_keys_not_consumed() {
        let mut input = TextInput::new(10);
        assert!(!input.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!input.handle_key(key(KeyCode::Enter)));
        assert!(input.is_empty());
    }

    #[test]
    fn test_multibyte_chars() {
        let mut input = TextInput::new(10);
        input.handle_key(key(KeyCode::Char('é')));
        input.handle_key(key(KeyCode::Char('a')));
        input.handle_key(key(KeyCode::Left));
        input.handle_key(key(KeyCode::Backspace));
        assert_eq!(input.value(), "a");
    }

    #[test]
    fn test_placeholder() {
        let input = TextInput::new(10);
        assert_eq!(input.display(false, "type here"), "type here");
    }
}
