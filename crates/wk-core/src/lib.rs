//! # wk-core
//!
//! Error definitions shared across the weekcal workspace.
//!
//! Every fallible operation in the library crates returns
//! [`Result<T>`](errors::Result); the binary wraps these in `anyhow` at the
//! I/O boundary.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types.
pub mod errors;

pub use errors::{Error, Result};
