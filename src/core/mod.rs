//! Shared infrastructure: HTTP client and logging.

pub mod http;
pub mod logging;
