//! Core model implementation for the chip input component.

use super::config::{ChipInputOption, Config, ConfigError};
use super::controller::ChipList;
use super::entry::Entry;
use super::keymap::KeyMap;
use super::render::ChipsViewCache;
use super::style::Styles;
use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
use std::cell::RefCell;
use std::sync::atomic::{AtomicU64, Ordering};

// Used to route delete messages to the chip input that rendered the chip.
static LAST_ID: AtomicU64 = AtomicU64::new(0);

fn next_id() -> u64 {
    LAST_ID.fetch_add(1, Ordering::Relaxed) + 1
}

/// An email chip input.
///
/// Typed text is committed into chips with the commit key (enter) or when
/// the input loses focus. Each chip shows its address, is drawn as valid or
/// invalid, and carries a delete affordance. An optional limit disables
/// typing once reached, and an optional required rule keeps at least one
/// valid chip around.
///
/// # Examples
///
/// ```rust
/// use bubbletea_chips::chipinput::{new, with_limit, with_placeholder};
///
/// let mut input = new(&[with_limit(3), with_placeholder("Add recipients")]).unwrap();
/// input.focus();
/// input.set_value("Alice@Example.com");
/// input.commit();
/// assert_eq!(input.chips()[0].email, "alice@example.com");
/// assert_eq!(input.value(), "");
/// ```
pub struct Model {
    pub(super) id: u64,
    pub(super) config: Config,
    pub(super) chips: ChipList,
    pub(super) entry: Entry,
    pub(super) selected: Option<usize>,
    pub(super) focus: bool,
    pub(super) cache: RefCell<ChipsViewCache>,
}

/// Creates a chip input from a list of options.
///
/// # Errors
///
/// Returns a [`ConfigError`] when the options are inconsistent, e.g. a
/// required input without a required message.
pub fn new(opts: &[ChipInputOption]) -> Result<Model, ConfigError> {
    let mut config = Config::default();
    for opt in opts {
        opt.apply(&mut config);
    }
    Model::from_config(config)
}

impl Model {
    /// Creates a chip input from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when [`Config::validate`] fails.
    pub fn from_config(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: Config) -> Self {
        let chips = ChipList::new(&config);
        let entry = Entry::new(config.prompt.clone(), config.placeholder.clone());
        let mut m = Self {
            id: next_id(),
            config,
            chips,
            entry,
            selected: None,
            focus: false,
            cache: RefCell::new(ChipsViewCache::new()),
        };
        m.sync();
        m
    }

    /// Identifier carried by this input's delete messages.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The configuration this input was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Key bindings.
    pub fn key_map(&self) -> &KeyMap {
        &self.config.key_map
    }

    /// Styles.
    pub fn styles(&self) -> &Styles {
        &self.config.styles
    }

    /// Replaces the styles and drops the cached chip row.
    pub fn set_styles(&mut self, styles: Styles) {
        self.config.styles = styles;
        self.cache.borrow_mut().clear();
    }

    /// The text-entry buffer.
    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    /// Index of the selected chip, if any.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Whether typing is disabled by the limit.
    pub fn input_disabled(&self) -> bool {
        self.chips.input_disabled()
    }

    /// Whether the limit message is showing.
    pub fn limit_message_visible(&self) -> bool {
        self.chips.limit_message_visible()
    }

    /// Whether the required message is showing.
    pub fn required_message_visible(&self) -> bool {
        self.chips.required_message_visible()
    }

    /// Re-derives entry and selection state from the chip list.
    pub(super) fn sync(&mut self) {
        self.entry.set_disabled(self.chips.input_disabled());
        if let Some(i) = self.selected {
            let len = self.chips.len();
            self.selected = if len == 0 { None } else { Some(i.min(len - 1)) };
        }
    }

    #[cfg(test)]
    pub(super) fn chip_row_renders(&self) -> usize {
        self.cache.borrow().renders()
    }
}

impl Default for Model {
    /// A chip input with the permissive default configuration.
    fn default() -> Self {
        Self::build(Config::default())
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        let mut model = Self::default();
        let cmd = model.focus();
        (model, cmd)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
