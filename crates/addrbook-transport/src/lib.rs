//! # addrbook-transport
//!
//! Copies transport status codes from `short_names` onto `full_names`.
//!
//! A full name such as `bus42.north` takes the status of the short name
//! before its first `.` (`bus42`). The run is all-or-nothing: every mapping
//! is resolved before anything is written, and writes share one transaction.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod postgres;
pub mod reconcile;
pub mod tables;

pub use error::{Error, Result};
pub use postgres::PgStatusTables;
pub use reconcile::{ReconcileReport, StatusUpdate, plan, prefix_of, reconcile};
pub use tables::{MemoryStatusTables, StatusTables};
