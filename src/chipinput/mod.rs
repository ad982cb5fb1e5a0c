//! Email chip input component for Bubble Tea applications.
//!
//! Typed email addresses are committed into removable chips. Each chip is
//! validated when committed and drawn as valid or invalid, duplicates are
//! dropped silently, an optional limit disables typing once reached, and an
//! optional required rule refuses to delete the last valid chip.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_chips::chipinput::{is_email, new, with_on_chip_change, with_validate_email};
//!
//! let mut input = new(&[
//!     with_validate_email(is_email),
//!     with_on_chip_change(|chips| {
//!         for chip in chips {
//!             println!("{} valid={}", chip.email, chip.valid);
//!         }
//!     }),
//! ])
//! .unwrap();
//!
//! input.focus();
//! input.set_value("bob@example.com");
//! input.commit();
//! input.set_value("not an email");
//! input.commit();
//!
//! assert_eq!(input.chips().len(), 2);
//! assert!(!input.chips()[1].valid);
//! ```
//!
//! # Keys
//!
//! | Key | Action |
//! |-----|--------|
//! | `enter` | commit the typed text |
//! | `backspace` on an empty entry | delete the last chip |
//! | `shift+←` / `shift+→` | select a chip |
//! | `delete` / `backspace` / `ctrl+h` / `x` on a selected chip | activate its delete affordance |
//! | `esc` | back to the entry |
//!
//! Losing focus through [`Model::blur`] commits the typed text as well.

pub mod config;
pub mod controller;
pub mod entry;
pub mod keymap;
pub mod methods;
pub mod model;
pub mod render;
pub mod style;
pub mod types;
pub mod validate;
pub mod view;

#[cfg(test)]
mod tests;

pub use config::{
    with_delete_button, with_initial_emails, with_key_map, with_limit, with_limit_message,
    with_on_chip_change, with_placeholder, with_prompt, with_required, with_styles,
    with_validate_email, ChangeFn, ChipInputOption, Config, ConfigError,
};
pub use controller::{ChipList, CommitOutcome, DeleteOutcome};
pub use entry::Entry;
pub use keymap::{default_key_map, KeyMap};
pub use model::{new, Model};
pub use render::{
    render_chip, render_chips, ChipsViewCache, DeleteButton, DeleteButtonFn, DeleteTrigger,
    RenderContext, DEFAULT_DELETE_LABEL,
};
pub use style::Styles;
pub use types::{normalize, Chip, ChipKey, DeleteChipMsg, EmailChip};
pub use validate::{always_valid, is_email, ValidateFn, MAX_EMAIL_LEN};
