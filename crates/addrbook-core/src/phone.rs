//! Phone number normalization.
//!
//! Raw phone strings arrive in many shapes (`+7(999)111-22-33`,
//! `8 999 111 22 33`, ...). Records are keyed by the 10 characters left after
//! stripping punctuation and dropping the country/trunk prefix.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Characters removed before the length check.
const STRIPPED: &[char] = &['(', ')', '-', '+', ' '];

/// Length of a stripped number that still carries its prefix digit.
const PREFIXED_LEN: usize = 11;

/// Length of a canonical key.
pub const KEY_LEN: usize = 10;

/// Store key produced by [`normalize`].
///
/// Not guaranteed to be all digits: `normalize` only checks length, so
/// callers that need a well-formed number check [`PhoneKey::is_canonical`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhoneKey(String);

impl PhoneKey {
    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `true` iff the key is exactly ten ASCII digits.
    pub fn is_canonical(&self) -> bool {
        self.0.len() == KEY_LEN && self.0.bytes().all(|b| b.is_ascii_digit())
    }

    /// Converts into the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for PhoneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PhoneKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Normalize a raw phone string into a store key.
///
/// Strips `( ) - + space`; if exactly 11 characters remain, the first one is
/// dropped and the rest becomes the key. Anything else yields `None`,
/// including a bare 10-digit number.
///
/// # Examples
///
/// ```
/// use addrbook_core::normalize;
///
/// assert_eq!(normalize("+7(999)111-22-33").unwrap().as_str(), "9991112233");
/// assert_eq!(normalize("8 999 111 22 33").unwrap().as_str(), "9991112233");
/// assert!(normalize("9991112233").is_none());
/// ```
pub fn normalize(raw: &str) -> Option<PhoneKey> {
    let stripped: String = raw.chars().filter(|c| !STRIPPED.contains(c)).collect();

    if stripped.chars().count() != PREFIXED_LEN {
        return None;
    }
    Some(PhoneKey(stripped.chars().skip(1).collect()))
}
