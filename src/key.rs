//! Type-safe key bindings for components.
//!
//! A [`Binding`] groups one or more [`KeyPress`]es with help text and an
//! enabled flag. Bindings are usually built with the option-style helpers:
//!
//! ```rust
//! use bubbletea_chips::key;
//!
//! let commit = key::new_binding(vec![
//!     key::with_keys_str(&["enter"]),
//!     key::with_help("enter", "add email"),
//! ]);
//! assert!(commit.enabled());
//! assert_eq!(commit.help().key, "enter");
//! ```
//!
//! Components expose their bindings through the [`KeyMap`] trait so that help
//! views can list them.

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key combination: a key code plus modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    /// The key code.
    pub code: KeyCode,
    /// Modifiers that must be held.
    pub modifiers: KeyModifiers,
}

impl KeyPress {
    /// Creates a key press from a code and modifiers.
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Parses a key description such as `"enter"`, `"ctrl+h"` or `"shift+left"`.
    ///
    /// Returns `None` for unknown key names.
    ///
    /// ```rust
    /// use bubbletea_chips::key::KeyPress;
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// let kp = KeyPress::parse("ctrl+w").unwrap();
    /// assert_eq!(kp.code, KeyCode::Char('w'));
    /// assert_eq!(kp.modifiers, KeyModifiers::CONTROL);
    /// assert!(KeyPress::parse("hyper+q").is_none());
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let mut parts: Vec<&str> = s.split('+').collect();

        // "+" on its own, or as the final key of a combo ("ctrl++").
        let name = if s.ends_with("++") || s == "+" {
            parts.truncate(parts.len().saturating_sub(2));
            "+"
        } else {
            parts.pop()?
        };

        for m in parts {
            match m {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        let code = match name {
            "enter" => KeyCode::Enter,
            "tab" => KeyCode::Tab,
            "backtab" => KeyCode::BackTab,
            "backspace" => KeyCode::Backspace,
            "delete" => KeyCode::Delete,
            "esc" | "escape" => KeyCode::Esc,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pgup" => KeyCode::PageUp,
            "pgdown" => KeyCode::PageDown,
            "insert" => KeyCode::Insert,
            " " | "space" => KeyCode::Char(' '),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return None,
                }
            }
        };

        Some(Self { code, modifiers })
    }

    /// Whether this key press matches an incoming key message.
    ///
    /// Shift is ignored for character keys since it is already reflected in
    /// the character itself.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if self.code != msg.key {
            return false;
        }
        match self.code {
            KeyCode::Char(_) => {
                self.modifiers.difference(KeyModifiers::SHIFT)
                    == msg.modifiers.difference(KeyModifiers::SHIFT)
            }
            _ => self.modifiers == msg.modifiers,
        }
    }
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self::new(code, modifiers)
    }
}

/// Help text for a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short key label, e.g. `"enter"`.
    pub key: String,
    /// What the key does.
    pub desc: String,
}

/// A set of key presses bound to one action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding for the given keys.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Sets the help text.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Returns the bound keys.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Returns the help text.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// A binding is enabled when it is not disabled and has at least one key.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Whether the key message triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|k| k.matches(msg))
    }
}

/// Option applied by [`new_binding`].
pub type BindingOpt = Box<dyn FnOnce(&mut Binding)>;

/// Builds a binding from a list of options.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut b = Binding::default();
    for opt in opts {
        opt(&mut b);
    }
    b
}

/// Sets keys from their string descriptions. Unknown names are skipped.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    let parsed: Vec<KeyPress> = keys.iter().filter_map(|k| KeyPress::parse(k)).collect();
    Box::new(move |b| b.keys = parsed)
}

/// Sets keys directly.
pub fn with_keys(keys: Vec<KeyPress>) -> BindingOpt {
    Box::new(move |b| b.keys = keys)
}

/// Sets the help text.
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    let help = Help {
        key: key.to_string(),
        desc: desc.to_string(),
    };
    Box::new(move |b| b.help = help)
}

/// Starts the binding in the disabled state.
pub fn with_disabled() -> BindingOpt {
    Box::new(|b| b.disabled = true)
}

/// Whether `msg` matches `binding`.
pub fn matches_binding(msg: &KeyMsg, binding: &Binding) -> bool {
    binding.matches(msg)
}

/// Whether `msg` matches any of `bindings`.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(msg))
}

/// Implemented by components to expose their bindings to help views.
pub trait KeyMap {
    /// Bindings for the compact, single-line help view.
    fn short_help(&self) -> Vec<&Binding>;
    /// Bindings grouped into columns for the expanded help view.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}
