//! Configuration storage: platform paths and consumer-key resolution.

pub mod config;
pub mod paths;

pub use config::{ConfigSource, resolve_consumer_key};
pub use paths::AppPaths;
