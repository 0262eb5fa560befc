//! Command-line interface.

pub mod args;
pub mod fetch;

pub use args::{Cli, Commands, FetchArgs};
