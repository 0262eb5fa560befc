//! HTTP client construction.
//!
//! One configured client is built at startup and shared by the fetcher.

use std::time::Duration;

use reqwest::{Client, ClientBuilder};

use crate::error::{PocketError, Result};

/// Default timeout for HTTP requests.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Build a configured HTTP client.
///
/// # Errors
///
/// Returns error if client construction fails.
pub fn build_client(timeout: Duration) -> Result<Client> {
    ClientBuilder::new()
        .timeout(timeout)
        .user_agent(format!("pocketsync/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| PocketError::Network(e.to_string()))
}

/// Get or create a default HTTP client.
pub fn default_client() -> Result<Client> {
    build_client(DEFAULT_TIMEOUT)
}
