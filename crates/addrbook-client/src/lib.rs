//! # addrbook-client
//!
//! Address validation against an external autocomplete service.
//!
//! - [`AddressSuggester`]: suggestion lookup plus the derived `is_valid` check
//! - [`AhunterClient`]: reqwest implementation for the Ahunter suggest API
//! - [`MockSuggester`]: canned suggestions for tests and offline runs
//!
//! An address is valid when the service, asked to autocomplete that exact
//! string, offers it back verbatim.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod client;
pub mod error;
pub mod mock;

pub use client::{AddressSuggester, AhunterClient, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use mock::MockSuggester;
