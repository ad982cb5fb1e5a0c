#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-chips/")]

//! # bubbletea-chips
//!
//! An email chip input for terminal applications built with
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! ## Overview
//!
//! The chip input turns typed email addresses into removable tokens
//! ("chips"). It follows the Elm Architecture used by bubbletea-rs, with
//! `update()` and `view()` methods, and keeps its list logic in a separate
//! [`chipinput::ChipList`] controller that can be driven without a terminal.
//!
//! ## Features
//!
//! - **Normalization**: entries are trimmed and lower-cased before they become chips
//! - **Validation**: invalid addresses still become chips, drawn with their own style
//! - **Duplicates** are dropped silently
//! - **Limit**: typing is disabled once the configured number of chips is reached
//! - **Required**: the last valid chip cannot be deleted
//! - **Change notification** with the full list after every change
//! - **Custom delete affordance** built from a factory
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_chips::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     to: ChipInput,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut to = chipinput_new(&[
//!             with_placeholder("Add recipients"),
//!             with_validate_email(is_email),
//!             with_limit(5),
//!             with_limit_message("At most five recipients"),
//!         ])
//!         .expect("valid chip input config");
//!         let cmd = to.focus();
//!         (Self { to }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.to.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         format!("To: {}", self.to.view())
//!     }
//! }
//! ```
//!
//! Commands returned from `update` (for example a chip's delete affordance
//! firing) resolve to messages that must be routed back into the same
//! `update`, which bubbletea-rs does automatically.

pub mod chipinput;
pub mod key;

use bubbletea_rs::Cmd;

/// Core trait for components that support focus management.
///
/// - `focus()` sets the focused state and may return a command
/// - `blur()` unsets it; the chip input also commits pending text here
/// - `focused()` reports the current state
///
/// ```rust
/// use bubbletea_chips::prelude::*;
///
/// fn cycle<T: Component>(component: &mut T) {
///     let _ = component.focus();
///     assert!(component.focused());
///     component.blur();
///     assert!(!component.focused());
/// }
///
/// let mut input = ChipInput::default();
/// cycle(&mut input);
/// ```
pub trait Component {
    /// Sets the component to focused state.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred (unfocused) state.
    fn blur(&mut self);

    /// Returns the current focus state of the component.
    fn focused(&self) -> bool;
}

pub use chipinput::{
    default_key_map as chipinput_default_key_map, is_email, new as chipinput_new, Chip,
    ChipKey, ConfigError, DeleteButton, DeleteChipMsg, DeleteTrigger, EmailChip,
    KeyMap as ChipInputKeyMap, Model as ChipInput, Styles as ChipInputStyles,
};
pub use key::{
    matches, matches_binding, new_binding, with_disabled, with_help, with_keys, with_keys_str,
    Binding, Help as KeyHelp, KeyMap, KeyPress,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_chips::prelude::*;
///
/// let input = chipinput_new(&[with_required("Add at least one recipient")]).unwrap();
/// assert!(!input.required_message_visible());
/// ```
pub mod prelude {
    pub use crate::chipinput::{
        default_key_map as chipinput_default_key_map, is_email, new as chipinput_new,
        with_delete_button, with_initial_emails, with_key_map, with_limit, with_limit_message,
        with_on_chip_change, with_placeholder, with_prompt, with_required, with_styles,
        with_validate_email, Chip, ChipInputOption, ChipKey, CommitOutcome, Config,
        ConfigError, DeleteButton, DeleteChipMsg, DeleteOutcome, DeleteTrigger, EmailChip,
        KeyMap as ChipInputKeyMap, Model as ChipInput, Styles as ChipInputStyles,
    };
    pub use crate::key::{
        matches, matches_binding, new_binding, with_disabled, with_help, with_keys,
        with_keys_str, Binding, Help as KeyHelp, KeyMap, KeyPress,
    };
    pub use crate::Component;
}
