//! The `fetch` command: retrieve one page of items and print it.
//!
//! Output is a single JSON document `{ "since": ..., "items": [...] }` on
//! stdout. Persisting the cursor for the next incremental run is left to
//! the caller.

use serde::Serialize;
use tracing::{debug, info};

use crate::cli::args::FetchArgs;
use crate::error::Result;
use crate::pocket::{Item, ItemFetcher};
use crate::storage;

/// The exported document shape.
#[derive(Debug, Serialize)]
struct ExportDocument {
    since: String,
    items: Vec<Item>,
}

/// Execute the fetch command.
pub async fn execute(args: &FetchArgs) -> Result<()> {
    let (consumer_key, source) = storage::resolve_consumer_key(args.consumer_key.clone())?;
    debug!(%source, "resolved consumer key");

    let fetcher = ItemFetcher::new(consumer_key)?;
    let page = fetcher
        .get_items(&args.access_token, args.since.as_deref())
        .await?;

    let since = page.since.clone();
    let raw_count = page.raw_len();
    let items: Vec<Item> = page.into_items().collect();
    info!(
        count = items.len(),
        dropped = raw_count - items.len(),
        since = %since,
        "fetched items"
    );

    let document = ExportDocument { since, items };
    let output = if args.pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };
    println!("{output}");
    Ok(())
}
