//! Key bindings for the chip input.

use crate::key::{self, new_binding, with_help, with_keys, with_keys_str, Binding};
use crossterm::event::KeyCode;

/// Key bindings for the chip input.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Turn the typed text into a chip.
    pub commit: Binding,
    /// Delete the character before the cursor, or the last chip when the
    /// entry is empty.
    pub delete_character_backward: Binding,
    /// Delete the character under the cursor.
    pub delete_character_forward: Binding,
    /// Move the cursor one character left.
    pub character_backward: Binding,
    /// Move the cursor one character right.
    pub character_forward: Binding,
    /// Move the cursor to the start of the entry.
    pub line_start: Binding,
    /// Move the cursor to the end of the entry.
    pub line_end: Binding,
    /// Select the previous chip.
    pub select_prev: Binding,
    /// Select the next chip.
    pub select_next: Binding,
    /// Activate the selected chip's delete affordance.
    pub delete_selected: Binding,
    /// Drop the chip selection.
    pub deselect: Binding,
}

/// The default bindings.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        commit: new_binding(vec![with_keys_str(&["enter"]), with_help("enter", "add")]),
        delete_character_backward: new_binding(vec![
            with_keys_str(&["backspace", "ctrl+h"]),
            with_help("⌫", "delete"),
        ]),
        delete_character_forward: new_binding(vec![with_keys_str(&["delete", "ctrl+d"])]),
        character_backward: new_binding(vec![with_keys_str(&["left", "ctrl+b"])]),
        character_forward: new_binding(vec![with_keys_str(&["right", "ctrl+f"])]),
        line_start: new_binding(vec![with_keys_str(&["home", "ctrl+a"])]),
        line_end: new_binding(vec![with_keys_str(&["end", "ctrl+e"])]),
        select_prev: new_binding(vec![
            with_keys_str(&["shift+left", "alt+left"]),
            with_help("shift+←", "prev chip"),
        ]),
        select_next: new_binding(vec![
            with_keys_str(&["shift+right", "alt+right"]),
            with_help("shift+→", "next chip"),
        ]),
        delete_selected: new_binding(vec![
            with_keys_str(&["delete", "backspace", "ctrl+h", "x"]),
            with_help("del", "remove chip"),
        ]),
        deselect: new_binding(vec![
            with_keys(vec![KeyCode::Esc.into()]),
            with_help("esc", "back to input"),
        ]),
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        default_key_map()
    }
}

impl key::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![
            &self.commit,
            &self.delete_character_backward,
            &self.select_prev,
            &self.select_next,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.commit, &self.delete_character_backward],
            vec![&self.select_prev, &self.select_next],
            vec![&self.delete_selected, &self.deselect],
        ]
    }
}
