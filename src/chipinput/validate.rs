//! Validity predicates for committed entries.

use std::sync::Arc;
use validator::ValidateEmail;

/// Decides whether a normalized entry is a valid address.
///
/// Invalid entries still become chips; they are only drawn differently.
pub type ValidateFn = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Maximum length of a whole address, in bytes (RFC 5321).
pub const MAX_EMAIL_LEN: usize = 254;

/// The default predicate: every entry is valid.
pub fn always_valid() -> ValidateFn {
    Arc::new(|_| true)
}

/// HTML5-style address check backed by `validator`, capped at
/// [`MAX_EMAIL_LEN`] bytes.
///
/// ```rust
/// use bubbletea_chips::chipinput::is_email;
///
/// assert!(is_email("first.last+tag@sub.example.org"));
/// assert!(!is_email("bad"));
/// assert!(!is_email("a@x..com"));
/// ```
pub fn is_email(s: &str) -> bool {
    s.len() <= MAX_EMAIL_LEN && s.validate_email()
}
