//! Record and suggestion types.

use serde::{Deserialize, Serialize};

use crate::phone::PhoneKey;

/// A persisted phone → address pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Canonical store key.
    pub phone_key: PhoneKey,
    /// Address as it was validated at write time.
    pub address: String,
}

/// One entry of the suggestion service's `suggestions` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Canonical address text.
    pub value: String,
}

/// Body returned by the address-suggestion service.
///
/// Entries carry other fields besides `value`; those are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuggestionsResponse {
    /// Suggestions in the order the service ranked them.
    pub suggestions: Vec<Suggestion>,
}

impl SuggestionsResponse {
    /// Consumes the response, keeping only the suggestion values in order.
    pub fn into_values(self) -> Vec<String> {
        self.suggestions.into_iter().map(|s| s.value).collect()
    }
}
