//! The chip list controller.
//!
//! [`ChipList`] owns the ordered chips and decides what each discrete user
//! action does to them. It knows nothing about keys or rendering, so every
//! rule can be exercised directly.

use super::config::{ChangeFn, Config};
use super::types::{normalize, Chip, ChipKey, EmailChip};
use super::validate::ValidateFn;
use tracing::{debug, trace};

/// What a commit did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// A chip was appended.
    Added {
        /// Key of the new chip.
        key: ChipKey,
        /// Validator result.
        valid: bool,
    },
    /// Nothing to commit after trimming.
    Empty,
    /// The normalized value is already a chip. The entry should be cleared.
    Duplicate,
    /// The limit is reached and the entry is disabled.
    LimitReached,
}

impl CommitOutcome {
    /// Whether the entry buffer should be cleared after this commit.
    pub fn clears_entry(&self) -> bool {
        matches!(self, CommitOutcome::Added { .. } | CommitOutcome::Duplicate)
    }
}

/// What a deletion did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The chip was removed.
    Removed(Chip),
    /// Removing the chip would leave no valid chip behind.
    Refused,
    /// No chip has that key.
    NotFound,
}

/// Ordered chip collection plus the flags derived from it.
pub struct ChipList {
    chips: Vec<Chip>,
    limit: Option<usize>,
    required: bool,
    required_violation: bool,
    validate: ValidateFn,
    on_change: Option<ChangeFn>,
    revision: u64,
}

impl ChipList {
    /// Seeds the list from `config.initial_emails`.
    ///
    /// Seeds are normalized and marked valid without running the validator.
    /// Each gets its own key even when two seeds look alike.
    pub fn new(config: &Config) -> Self {
        let chips = config
            .initial_emails
            .iter()
            .map(|raw| Chip::new(normalize(raw), true))
            .collect();

        Self {
            chips,
            limit: config.limit,
            required: config.required,
            required_violation: false,
            validate: config.validate_email.clone(),
            on_change: config.on_chip_change.clone(),
            revision: 0,
        }
    }

    /// Commits raw entry text.
    ///
    /// Empty input is ignored. A value already present is dropped silently.
    /// Otherwise the validator runs and a chip is appended, valid or not.
    pub fn commit_entry(&mut self, raw: &str) -> CommitOutcome {
        let email = normalize(raw);
        if email.is_empty() {
            trace!("ignoring empty commit");
            return CommitOutcome::Empty;
        }
        if self.input_disabled() {
            debug!(%email, "commit ignored, chip limit reached");
            return CommitOutcome::LimitReached;
        }
        if self.contains(&email) {
            debug!(%email, "duplicate chip ignored");
            return CommitOutcome::Duplicate;
        }

        let valid = (self.validate)(&email);
        let chip = Chip::new(email, valid);
        let key = chip.key;
        debug!(email = %chip.email, valid, %key, "chip added");
        self.chips.push(chip);

        // An invalid addition only flags when no valid chip exists at all.
        self.required_violation = self.required && !self.has_valid();

        self.changed();
        CommitOutcome::Added { key, valid }
    }

    /// Deletes the chip with `key`.
    ///
    /// When a valid chip is required and `key` names the last valid one,
    /// the chip stays and the required violation is raised instead.
    pub fn delete_chip(&mut self, key: ChipKey) -> DeleteOutcome {
        let Some(index) = self.chips.iter().position(|c| c.key == key) else {
            trace!(%key, "delete of unknown chip");
            return DeleteOutcome::NotFound;
        };

        if self.required && self.chips[index].valid && self.valid_count() == 1 {
            debug!(email = %self.chips[index].email, "refusing to delete last valid chip");
            self.required_violation = true;
            return DeleteOutcome::Refused;
        }

        let chip = self.chips.remove(index);
        debug!(email = %chip.email, %key, "chip removed");
        if self.has_valid() {
            self.required_violation = false;
        }

        self.changed();
        DeleteOutcome::Removed(chip)
    }

    /// Deletes the most recently added chip, with the same protection as
    /// [`Self::delete_chip`].
    pub fn delete_last(&mut self) -> DeleteOutcome {
        match self.chips.last().map(|c| c.key) {
            Some(key) => self.delete_chip(key),
            None => DeleteOutcome::NotFound,
        }
    }

    /// Chips in display order.
    pub fn chips(&self) -> &[Chip] {
        &self.chips
    }

    /// Chips in their public shape.
    pub fn emails(&self) -> Vec<EmailChip> {
        self.chips.iter().map(Chip::to_email_chip).collect()
    }

    /// Number of chips.
    pub fn len(&self) -> usize {
        self.chips.len()
    }

    /// Whether there are no chips.
    pub fn is_empty(&self) -> bool {
        self.chips.is_empty()
    }

    /// Whether a chip with this normalized value exists.
    pub fn contains(&self, email: &str) -> bool {
        self.chips.iter().any(|c| c.email == email)
    }

    /// Incremented on every change to the chip list.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Typing is disabled while a limit is set and reached.
    pub fn input_disabled(&self) -> bool {
        self.limit.is_some_and(|limit| self.chips.len() >= limit)
    }

    /// The limit message follows [`Self::input_disabled`].
    pub fn limit_message_visible(&self) -> bool {
        self.input_disabled()
    }

    /// Whether the required message should be shown.
    pub fn required_message_visible(&self) -> bool {
        self.required_violation
    }

    fn valid_count(&self) -> usize {
        self.chips.iter().filter(|c| c.valid).count()
    }

    fn has_valid(&self) -> bool {
        self.chips.iter().any(|c| c.valid)
    }

    fn changed(&mut self) {
        self.revision += 1;
        if let Some(on_change) = &self.on_change {
            on_change(&self.emails());
        }
    }
}
