//! # addrbook-core
//!
//! Shared types, errors, and utilities.
//!
//! This crate has no internal addrbook dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`phone`]: Phone number normalization into canonical store keys
//! - [`record`]: Record and suggestion types
//! - [`traits`]: Configuration management trait shared by the binaries

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod phone;
pub mod record;
pub mod traits;

// Re-export key types at crate root for convenience
pub use error::{Error, Field, Result};
pub use phone::{PhoneKey, normalize};
pub use record::{Record, Suggestion, SuggestionsResponse};
pub use traits::ConfigManager;
