//! The text-entry buffer in front of the chips.

use super::style::Styles;
use lipgloss_extras::prelude::*;

/// Single-line entry buffer.
///
/// Holds the text typed since the last commit. While disabled it ignores
/// edits, which is how the chip limit blocks typing.
#[derive(Debug, Clone, Default)]
pub struct Entry {
    value: Vec<char>,
    pos: usize,
    placeholder: String,
    prompt: String,
    focus: bool,
    disabled: bool,
}

impl Entry {
    /// Creates an empty entry.
    pub fn new(prompt: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            placeholder: placeholder.into(),
            ..Default::default()
        }
    }

    /// Current text.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Replaces the text and moves the cursor to the end.
    pub fn set_value(&mut self, s: &str) {
        self.value = s.chars().collect();
        self.pos = self.value.len();
    }

    /// Clears the buffer.
    pub fn reset(&mut self) {
        self.value.clear();
        self.pos = 0;
    }

    /// Whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Cursor position in characters.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Placeholder text.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Whether edits are ignored.
    pub fn disabled(&self) -> bool {
        self.disabled
    }

    pub(crate) fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Whether the entry has focus.
    pub fn focused(&self) -> bool {
        self.focus
    }

    pub(crate) fn set_focus(&mut self, focus: bool) {
        self.focus = focus;
    }

    /// Inserts a character at the cursor.
    pub fn insert(&mut self, ch: char) {
        if self.disabled {
            return;
        }
        self.value.insert(self.pos, ch);
        self.pos += 1;
    }

    /// Deletes the character before the cursor.
    pub fn delete_backward(&mut self) {
        if self.disabled || self.pos == 0 {
            return;
        }
        self.value.remove(self.pos - 1);
        self.pos -= 1;
    }

    /// Deletes the character under the cursor.
    pub fn delete_forward(&mut self) {
        if self.disabled || self.pos >= self.value.len() {
            return;
        }
        self.value.remove(self.pos);
    }

    /// Moves the cursor one character left.
    pub fn cursor_left(&mut self) {
        self.pos = self.pos.saturating_sub(1);
    }

    /// Moves the cursor one character right.
    pub fn cursor_right(&mut self) {
        self.pos = (self.pos + 1).min(self.value.len());
    }

    /// Moves the cursor to the start.
    pub fn cursor_start(&mut self) {
        self.pos = 0;
    }

    /// Moves the cursor to the end.
    pub fn cursor_end(&mut self) {
        self.pos = self.value.len();
    }

    /// Renders the prompt, the text (or placeholder) and the cursor.
    pub fn view(&self, styles: &Styles) -> String {
        let prompt = styles.prompt.clone().inline(true).render(&self.prompt);

        if self.disabled {
            let text = if self.value.is_empty() {
                self.placeholder.clone()
            } else {
                self.value()
            };
            return format!("{}{}", prompt, styles.disabled.clone().inline(true).render(&text));
        }

        if self.value.is_empty() {
            return format!("{}{}", prompt, self.placeholder_view(styles));
        }

        let before: String = self.value[..self.pos].iter().collect();
        let mut v = styles.text.clone().inline(true).render(&before);

        if self.pos < self.value.len() {
            v.push_str(&self.cursor_view(self.value[self.pos]));
            let after: String = self.value[self.pos + 1..].iter().collect();
            if !after.is_empty() {
                v.push_str(&styles.text.clone().inline(true).render(&after));
            }
        } else if self.focus {
            v.push_str(&self.cursor_view(' '));
        }

        format!("{}{}", prompt, v)
    }

    fn placeholder_view(&self, styles: &Styles) -> String {
        let mut chars = self.placeholder.chars();
        match chars.next() {
            Some(first) if self.focus => {
                let rest: String = chars.collect();
                format!(
                    "{}{}",
                    self.cursor_view(first),
                    styles.placeholder.clone().inline(true).render(&rest)
                )
            }
            Some(_) => styles
                .placeholder
                .clone()
                .inline(true)
                .render(&self.placeholder),
            None if self.focus => self.cursor_view(' '),
            None => String::new(),
        }
    }

    fn cursor_view(&self, ch: char) -> String {
        if !self.focus {
            return ch.to_string();
        }
        Style::new()
            .inline(true)
            .reverse(true)
            .render(&ch.to_string())
    }
}
