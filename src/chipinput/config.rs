//! Configuration for the chip input.
//!
//! Configuration is fixed for the lifetime of a widget. It can be built with
//! the option functions, mirroring how the spinner is configured:
//!
//! ```rust
//! use bubbletea_chips::chipinput::{new, with_limit, with_required, with_validate_email, is_email};
//!
//! let input = new(&[
//!     with_limit(2),
//!     with_required("Email is required"),
//!     with_validate_email(is_email),
//! ])
//! .unwrap();
//! assert_eq!(input.config().limit, Some(2));
//! ```
//!
//! or with the builder methods on [`Config`].

use super::keymap::{default_key_map, KeyMap};
use super::render::{DeleteButton, DeleteButtonFn, DeleteTrigger};
use super::style::Styles;
use super::types::EmailChip;
use super::validate::{always_valid, ValidateFn};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Called with the full chip list after every change to it.
pub type ChangeFn = Arc<dyn Fn(&[EmailChip]) + Send + Sync>;

/// Rejected configurations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `required` was set without a message to show on violation.
    #[error("required chip input has no required message")]
    MissingRequiredMessage,
    /// A limit of zero would disable the entry before anything is typed.
    #[error("chip limit must be at least 1")]
    ZeroLimit,
}

/// Chip input configuration.
#[derive(Clone)]
pub struct Config {
    /// Maximum number of chips. `None` means unlimited.
    pub limit: Option<usize>,
    /// Shown while the limit is reached.
    pub limit_message: Option<String>,
    /// Whether at least one valid chip must be kept.
    pub required: bool,
    /// Shown on a required violation. Mandatory when `required` is set.
    pub required_message: Option<String>,
    /// Seed chips. They are all marked valid.
    pub initial_emails: Vec<String>,
    /// Custom delete affordance.
    pub delete_button: Option<DeleteButtonFn>,
    /// Entry placeholder.
    pub placeholder: String,
    /// Entry prompt.
    pub prompt: String,
    /// Validity predicate.
    pub validate_email: ValidateFn,
    /// Change notification.
    pub on_chip_change: Option<ChangeFn>,
    /// Visual treatments.
    pub styles: Styles,
    /// Key bindings.
    pub key_map: KeyMap,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            limit: None,
            limit_message: None,
            required: false,
            required_message: None,
            initial_emails: Vec::new(),
            delete_button: None,
            placeholder: String::new(),
            prompt: "> ".to_string(),
            validate_email: always_valid(),
            on_chip_change: None,
            styles: Styles::default(),
            key_map: default_key_map(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("limit", &self.limit)
            .field("limit_message", &self.limit_message)
            .field("required", &self.required)
            .field("required_message", &self.required_message)
            .field("initial_emails", &self.initial_emails)
            .field("delete_button", &self.delete_button.is_some())
            .field("placeholder", &self.placeholder)
            .field("prompt", &self.prompt)
            .field("on_chip_change", &self.on_chip_change.is_some())
            .finish_non_exhaustive()
    }
}

impl Config {
    /// Creates the permissive default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks the configuration invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limit == Some(0) {
            return Err(ConfigError::ZeroLimit);
        }
        if self.required && self.required_message.as_deref().map_or(true, str::is_empty) {
            return Err(ConfigError::MissingRequiredMessage);
        }
        Ok(())
    }

    /// Sets the chip limit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the message shown at the limit.
    pub fn with_limit_message(mut self, message: impl Into<String>) -> Self {
        self.limit_message = Some(message.into());
        self
    }

    /// Requires at least one valid chip, with the message shown on violation.
    pub fn with_required(mut self, message: impl Into<String>) -> Self {
        self.required = true;
        self.required_message = Some(message.into());
        self
    }

    /// Seeds the chip list.
    pub fn with_initial_emails<S: AsRef<str>>(mut self, emails: &[S]) -> Self {
        self.initial_emails = emails.iter().map(|e| e.as_ref().to_string()).collect();
        self
    }

    /// Replaces the delete affordance.
    pub fn with_delete_button<F>(mut self, factory: F) -> Self
    where
        F: Fn(DeleteTrigger) -> DeleteButton + Send + Sync + 'static,
    {
        self.delete_button = Some(Arc::new(factory));
        self
    }

    /// Sets the entry placeholder.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Sets the entry prompt.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Sets the validity predicate.
    pub fn with_validate_email<F>(mut self, validate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.validate_email = Arc::new(validate);
        self
    }

    /// Sets the change notification.
    pub fn with_on_chip_change<F>(mut self, on_change: F) -> Self
    where
        F: Fn(&[EmailChip]) + Send + Sync + 'static,
    {
        self.on_chip_change = Some(Arc::new(on_change));
        self
    }

    /// Sets the styles.
    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    /// Sets the key bindings.
    pub fn with_key_map(mut self, key_map: KeyMap) -> Self {
        self.key_map = key_map;
        self
    }
}

/// A single configuration option, applied in order by
/// [`new`](super::new).
#[derive(Clone)]
pub enum ChipInputOption {
    /// See [`with_limit`].
    Limit(usize),
    /// See [`with_limit_message`].
    LimitMessage(String),
    /// See [`with_required`].
    Required(String),
    /// See [`with_initial_emails`].
    InitialEmails(Vec<String>),
    /// See [`with_delete_button`].
    DeleteButton(DeleteButtonFn),
    /// See [`with_placeholder`].
    Placeholder(String),
    /// See [`with_prompt`].
    Prompt(String),
    /// See [`with_validate_email`].
    ValidateEmail(ValidateFn),
    /// See [`with_on_chip_change`].
    OnChipChange(ChangeFn),
    /// See [`with_styles`].
    Styles(Box<Styles>),
    /// See [`with_key_map`].
    KeyMap(Box<KeyMap>),
}

impl ChipInputOption {
    pub(crate) fn apply(&self, c: &mut Config) {
        match self {
            ChipInputOption::Limit(limit) => c.limit = Some(*limit),
            ChipInputOption::LimitMessage(m) => c.limit_message = Some(m.clone()),
            ChipInputOption::Required(m) => {
                c.required = true;
                c.required_message = Some(m.clone());
            }
            ChipInputOption::InitialEmails(emails) => c.initial_emails = emails.clone(),
            ChipInputOption::DeleteButton(f) => c.delete_button = Some(Arc::clone(f)),
            ChipInputOption::Placeholder(p) => c.placeholder = p.clone(),
            ChipInputOption::Prompt(p) => c.prompt = p.clone(),
            ChipInputOption::ValidateEmail(f) => c.validate_email = Arc::clone(f),
            ChipInputOption::OnChipChange(f) => c.on_chip_change = Some(Arc::clone(f)),
            ChipInputOption::Styles(s) => c.styles = s.as_ref().clone(),
            ChipInputOption::KeyMap(k) => c.key_map = k.as_ref().clone(),
        }
    }
}

/// Limits the number of chips.
pub fn with_limit(limit: usize) -> ChipInputOption {
    ChipInputOption::Limit(limit)
}

/// Message shown while the limit is reached.
pub fn with_limit_message(message: &str) -> ChipInputOption {
    ChipInputOption::LimitMessage(message.to_string())
}

/// Requires at least one valid chip.
pub fn with_required(message: &str) -> ChipInputOption {
    ChipInputOption::Required(message.to_string())
}

/// Seeds the chip list; seeded chips are always valid.
pub fn with_initial_emails(emails: &[&str]) -> ChipInputOption {
    ChipInputOption::InitialEmails(emails.iter().map(|e| e.to_string()).collect())
}

/// Replaces the delete affordance.
pub fn with_delete_button<F>(factory: F) -> ChipInputOption
where
    F: Fn(DeleteTrigger) -> DeleteButton + Send + Sync + 'static,
{
    ChipInputOption::DeleteButton(Arc::new(factory))
}

/// Entry placeholder.
pub fn with_placeholder(placeholder: &str) -> ChipInputOption {
    ChipInputOption::Placeholder(placeholder.to_string())
}

/// Entry prompt.
pub fn with_prompt(prompt: &str) -> ChipInputOption {
    ChipInputOption::Prompt(prompt.to_string())
}

/// Validity predicate for committed entries.
pub fn with_validate_email<F>(validate: F) -> ChipInputOption
where
    F: Fn(&str) -> bool + Send + Sync + 'static,
{
    ChipInputOption::ValidateEmail(Arc::new(validate))
}

/// Change notification.
pub fn with_on_chip_change<F>(on_change: F) -> ChipInputOption
where
    F: Fn(&[EmailChip]) + Send + Sync + 'static,
{
    ChipInputOption::OnChipChange(Arc::new(on_change))
}

/// Visual treatments.
pub fn with_styles(styles: Styles) -> ChipInputOption {
    ChipInputOption::Styles(Box::new(styles))
}

/// Key bindings.
pub fn with_key_map(key_map: KeyMap) -> ChipInputOption {
    ChipInputOption::KeyMap(Box::new(key_map))
}
