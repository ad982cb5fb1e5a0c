//! Core methods for the Model struct.

use super::controller::{CommitOutcome, DeleteOutcome};
use super::model::Model;
use super::render::RenderContext;
use super::types::{Chip, ChipKey, DeleteChipMsg, EmailChip};
use crate::key::matches_binding;
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};

impl Model {
    /// Chips in display order.
    pub fn chips(&self) -> &[Chip] {
        self.chips.chips()
    }

    /// Chips in the shape handed to the change callback.
    pub fn emails(&self) -> Vec<EmailChip> {
        self.chips.emails()
    }

    /// Current entry text.
    pub fn value(&self) -> String {
        self.entry.value()
    }

    /// Replaces the entry text. Ignored while typing is disabled.
    pub fn set_value(&mut self, s: &str) {
        if !self.entry.disabled() {
            self.entry.set_value(s);
        }
    }

    /// Commits the entry text.
    ///
    /// The buffer is cleared when a chip is added or the value was a
    /// duplicate.
    pub fn commit(&mut self) -> CommitOutcome {
        let outcome = self.chips.commit_entry(&self.entry.value());
        if outcome.clears_entry() {
            self.entry.reset();
        }
        self.sync();
        outcome
    }

    /// Deletes a chip by key, subject to the required rule.
    pub fn delete_chip(&mut self, key: ChipKey) -> DeleteOutcome {
        let outcome = self.chips.delete_chip(key);
        self.sync();
        outcome
    }

    /// Deletes the most recently added chip, subject to the required rule.
    pub fn delete_last(&mut self) -> DeleteOutcome {
        let outcome = self.chips.delete_last();
        self.sync();
        outcome
    }

    /// Whether the input has focus.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Focuses the input.
    pub fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        self.entry.set_focus(true);
        None
    }

    /// Blurs the input, committing whatever was typed first.
    pub fn blur(&mut self) {
        if self.focus {
            self.commit();
        }
        self.focus = false;
        self.selected = None;
        self.entry.set_focus(false);
    }

    /// Handles key presses and delete messages.
    ///
    /// The commit key is always absorbed here. While a chip is selected its
    /// delete affordance can be activated; the returned command resolves to
    /// a [`DeleteChipMsg`] that must be fed back into `update`.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(delete) = msg.downcast_ref::<DeleteChipMsg>() {
            if delete.id == self.id {
                self.delete_chip(delete.key);
            }
            return None;
        }

        if !self.focus {
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if let Some(cmd) = self.handle_selection_keys(key_msg) {
                return cmd;
            }
            self.handle_entry_keys(key_msg);
        }

        None
    }

    fn handle_selection_keys(&mut self, key_msg: &KeyMsg) -> Option<Option<Cmd>> {
        let km = &self.config.key_map;

        let Some(i) = self.selected else {
            if matches_binding(key_msg, &km.select_prev) {
                self.selected = self.chips.len().checked_sub(1);
                return Some(None);
            }
            return None;
        };

        if matches_binding(key_msg, &km.delete_selected) {
            return Some(self.activate_delete(i));
        }
        if matches_binding(key_msg, &km.select_prev) {
            self.selected = Some(i.saturating_sub(1));
            return Some(None);
        }
        if matches_binding(key_msg, &km.select_next) {
            self.selected = (i + 1 < self.chips.len()).then_some(i + 1);
            return Some(None);
        }
        if matches_binding(key_msg, &km.deselect) {
            self.selected = None;
            return Some(None);
        }

        // Anything else goes back to the entry.
        self.selected = None;
        None
    }

    fn handle_entry_keys(&mut self, key_msg: &KeyMsg) {
        let km = &self.config.key_map;

        if matches_binding(key_msg, &km.commit) {
            self.commit();
        } else if matches_binding(key_msg, &km.delete_character_backward) {
            if self.entry.is_empty() {
                self.delete_last();
            } else {
                self.entry.delete_backward();
            }
        } else if matches_binding(key_msg, &km.delete_character_forward) {
            self.entry.delete_forward();
        } else if matches_binding(key_msg, &km.character_backward) {
            self.entry.cursor_left();
        } else if matches_binding(key_msg, &km.character_forward) {
            self.entry.cursor_right();
        } else if matches_binding(key_msg, &km.line_start) {
            self.entry.cursor_start();
        } else if matches_binding(key_msg, &km.line_end) {
            self.entry.cursor_end();
        } else if let KeyCode::Char(ch) = key_msg.key {
            if !key_msg.modifiers.contains(KeyModifiers::CONTROL)
                && !key_msg.modifiers.contains(KeyModifiers::ALT)
            {
                self.entry.insert(ch);
            }
        }
    }

    fn activate_delete(&self, index: usize) -> Option<Cmd> {
        let chip = self.chips.chips().get(index)?;
        let ctx = RenderContext {
            id: self.id,
            styles: &self.config.styles,
            delete_button: self.config.delete_button.as_ref(),
        };
        Some(ctx.delete_button(chip.key).activate())
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus()
    }

    fn blur(&mut self) {
        self.blur()
    }

    fn focused(&self) -> bool {
        self.focused()
    }
}
