//! Canned suggester for tests and offline runs.

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;

use crate::client::AddressSuggester;
use crate::{Error, Result};

/// Returns the same suggestions for every query, or fails every call.
///
/// Queries are recorded so tests can assert what was asked.
#[derive(Clone, Debug, Default)]
pub struct MockSuggester {
    suggestions: Vec<String>,
    failure: Option<String>,
    queries: Arc<Mutex<Vec<String>>>,
}

impl MockSuggester {
    /// A suggester that always answers with `suggestions`.
    pub fn new<I, S>(suggestions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            suggestions: suggestions.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// A suggester whose every call fails as unavailable.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Queries received so far.
    pub fn queries(&self) -> Vec<String> {
        self.queries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl AddressSuggester for MockSuggester {
    async fn suggestions(&self, query: &str) -> Result<Vec<String>> {
        self.queries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(query.to_string());
        match &self.failure {
            Some(reason) => Err(Error::Unavailable(reason.clone())),
            None => Ok(self.suggestions.clone()),
        }
    }
}
