//! Item retrieval from the Pocket `v3/get` endpoint.
//!
//! One POST per call: send the credentials and optional `since` cursor,
//! decode the page, normalize it, and hand back the items plus the next
//! cursor. No retry, no pagination, no state between calls.

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::core::http;
use crate::error::{PocketError, Result};
use crate::pocket::item::{Item, RawItem};

/// The provider's fixed retrieval endpoint.
pub const ENDPOINT: &str = "https://getpocket.com/v3/get";

/// Fetches bookmark items from the provider.
///
/// Holds the shared HTTP client and the application consumer key; both are
/// injected at construction and never mutated.
#[derive(Debug, Clone)]
pub struct ItemFetcher {
    client: Client,
    consumer_key: String,
    endpoint: String,
}

/// One decoded response page: the raw entries plus the next cursor.
///
/// The page is consumed by [`ItemPage::into_items`], a finite single-pass
/// iterator that normalizes entries lazily and drops the ones without a
/// resolved URL.
#[derive(Debug)]
pub struct ItemPage {
    /// The new cursor to persist and re-supply on the next call.
    pub since: String,
    raw: Vec<RawItem>,
}

impl ItemPage {
    /// Number of raw entries in the page, before drop-filtering.
    #[must_use]
    pub fn raw_len(&self) -> usize {
        self.raw.len()
    }

    /// Consume the page, yielding normalized items.
    pub fn into_items(self) -> impl Iterator<Item = Item> {
        self.raw.into_iter().filter_map(Item::from_raw)
    }
}

/// Successful `v3/get` response. Missing `since` or `list` is a decode
/// error, surfaced unmodified.
#[derive(Debug, Deserialize)]
struct GetResponse {
    since: Cursor,
    list: Value,
}

/// The provider encodes the cursor as either a JSON string or a number;
/// both collapse to an opaque string for the caller.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Cursor {
    Text(String),
    Numeric(serde_json::Number),
}

impl Cursor {
    fn into_string(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Numeric(n) => n.to_string(),
        }
    }
}

impl ItemFetcher {
    /// Create a fetcher with a default HTTP client.
    ///
    /// # Errors
    ///
    /// Returns error if client construction fails.
    pub fn new(consumer_key: String) -> Result<Self> {
        Ok(Self::with_client(http::default_client()?, consumer_key))
    }

    /// Create a fetcher with a caller-supplied HTTP client.
    #[must_use]
    pub fn with_client(client: Client, consumer_key: String) -> Self {
        Self {
            client,
            consumer_key,
            endpoint: ENDPOINT.to_string(),
        }
    }

    /// Override the endpoint URL. Used to point at a mock server in tests.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Fetch all items updated after `since`.
    ///
    /// Returns one [`ItemPage`]: the items of this response (normalized
    /// lazily when the page is iterated) and the new cursor to persist for
    /// the next incremental call.
    ///
    /// # Errors
    ///
    /// - [`PocketError::Retrieval`] for any non-200 status, carrying the
    ///   status code and raw body.
    /// - [`PocketError::Timeout`] / [`PocketError::Network`] for transport
    ///   failures.
    /// - [`PocketError::ParseResponse`] / [`PocketError::Json`] when a 200
    ///   body is not the expected JSON shape.
    pub async fn get_items(&self, access_token: &str, since: Option<&str>) -> Result<ItemPage> {
        let mut payload = vec![
            ("consumer_key", self.consumer_key.as_str()),
            ("access_token", access_token),
            ("state", "all"),
            ("detailType", "complete"),
        ];
        if let Some(since) = since {
            payload.push(("since", since));
        }

        let response = self
            .client
            .post(&self.endpoint)
            .header("X-Accept", "application/json")
            .form(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PocketError::Timeout(http::DEFAULT_TIMEOUT.as_secs())
                } else {
                    PocketError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(PocketError::Retrieval {
                status: status.as_u16(),
                body,
            });
        }

        let page: GetResponse = response
            .json()
            .await
            .map_err(|e| PocketError::ParseResponse(e.to_string()))?;
        let since = page.since.into_string();
        let raw = normalize_list(page.list)?;
        debug!(count = raw.len(), since = %since, "retrieved page");

        Ok(ItemPage { since, raw })
    }
}

/// Normalize the `list` payload into an ordered sequence of raw entries.
///
/// The provider sends an empty array when there are no items, but a map of
/// item-id to entry when there are. Neither encoding carries a meaningful
/// order.
fn normalize_list(list: Value) -> Result<Vec<RawItem>> {
    let entries: Vec<Value> = match list {
        Value::Array(entries) => entries,
        Value::Object(map) => map.into_iter().map(|(_, entry)| entry).collect(),
        other => {
            return Err(PocketError::ParseResponse(format!(
                "unexpected list shape: {other}"
            )));
        }
    };
    entries
        .into_iter()
        .map(|entry| serde_json::from_value(entry).map_err(PocketError::Json))
        .collect()
}
