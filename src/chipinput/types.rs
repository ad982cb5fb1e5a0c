//! Core types for the chip input component.

use bubbletea_rs::Msg;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

// Keys are handed out in creation order across every widget in the process.
static LAST_CHIP_KEY: AtomicU64 = AtomicU64::new(0);

/// Opaque identifier of a chip.
///
/// Keys are issued from a process-wide counter, so two chips seeded from the
/// same string still get distinct keys, and a later chip always compares
/// greater than an earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChipKey(u64);

impl ChipKey {
    pub(crate) fn next() -> Self {
        ChipKey(LAST_CHIP_KEY.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

impl fmt::Display for ChipKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chip-{}", self.0)
    }
}

/// A committed email entry as held by the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    /// Stable identifier, never exposed through the change callback.
    pub key: ChipKey,
    /// Normalized (trimmed, lower-cased) address.
    pub email: String,
    /// Result of the configured validator at commit time.
    pub valid: bool,
}

impl Chip {
    pub(crate) fn new(email: String, valid: bool) -> Self {
        Self {
            key: ChipKey::next(),
            email,
            valid,
        }
    }

    /// The public shape of this chip.
    pub fn to_email_chip(&self) -> EmailChip {
        EmailChip {
            email: self.email.clone(),
            valid: self.valid,
        }
    }
}

/// What the change callback receives for each chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailChip {
    /// Normalized address.
    pub email: String,
    /// Whether the address passed validation.
    pub valid: bool,
}

impl EmailChip {
    /// Convenience constructor, mostly useful in tests and callbacks.
    pub fn new(email: impl Into<String>, valid: bool) -> Self {
        Self {
            email: email.into(),
            valid,
        }
    }
}

/// Normalizes raw entry text: surrounding whitespace is trimmed and the
/// result is lower-cased.
///
/// ```rust
/// use bubbletea_chips::chipinput::normalize;
///
/// assert_eq!(normalize("  Alice@Example.COM \t"), "alice@example.com");
/// assert_eq!(normalize("   "), "");
/// ```
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Asks a chip input to delete one of its chips.
///
/// Produced when a chip's delete affordance is activated. `id` names the
/// widget that rendered the affordance so that several chip inputs can share
/// one program without deleting each other's chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteChipMsg {
    /// Id of the owning chip input.
    pub id: u64,
    /// Chip to delete.
    pub key: ChipKey,
}

impl From<DeleteChipMsg> for Msg {
    fn from(msg: DeleteChipMsg) -> Self {
        Box::new(msg) as Msg
    }
}
