//! # addrbook-api
//!
//! HTTP API server for addrbook.
//!
//! - [`AddressBook`]: lookup/create/update orchestration over an injected
//!   record store and address suggester
//! - [`routes::router`]: axum routes for `/check_data`, `/write_data`,
//!   `/get_suggestions`, and `/health`
//! - [`Server`]: binds, serves, and shuts down on ctrl-c

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod routes;
pub mod server;
pub mod service;

pub use error::{Error, Result};
pub use server::Server;
pub use service::{AddressBook, Lookup, WriteOutcome};
