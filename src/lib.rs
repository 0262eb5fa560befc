//! pocketsync - incremental Pocket bookmark retrieval.
//!
//! Fetches bookmark items from the Pocket `v3/get` API, normalizes the
//! loosely-shaped response into immutable [`pocket::Item`] records, and
//! returns a cursor for the next incremental call. Downstream export and
//! cursor persistence are the caller's concern.

pub mod cli;
pub mod core;
pub mod error;
pub mod pocket;
pub mod storage;

pub use error::{ExitCode, PocketError, Result};
