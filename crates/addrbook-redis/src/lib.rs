//! # addrbook-redis
//!
//! Record store gateway for addrbook.
//!
//! - [`RecordStore`]: get/set accessor keyed by canonical phone key
//! - [`RedisStore`]: Redis backend over an auto-reconnecting connection manager
//! - [`MemoryStore`]: in-process backend for tests and local runs
//!
//! No transactions, no TTL; last write wins.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod memory;
pub mod store;

pub use error::{Error, Result};
pub use memory::MemoryStore;
pub use store::{RecordStore, RedisStore};
