//! Pocket API domain: the normalized item record and the retrieval call.

pub mod item;
pub mod retrieve;

pub use item::{DEFAULT_TITLE, Item, RawItem};
pub use retrieve::{ENDPOINT, ItemFetcher, ItemPage};
