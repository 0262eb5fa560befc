//! Normalized bookmark items.
//!
//! The provider's raw entries are loosely shaped: most fields are optional,
//! timestamps arrive as strings, and tags come as a map whose values we do
//! not care about. [`Item::from_raw`] is the single place where that shape
//! is turned into the immutable record handed to downstream consumers.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder title for entries without one.
pub const DEFAULT_TITLE: &str = "No title";

/// A normalized, immutable bookmark record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    /// Resolved destination URL. Always non-empty.
    pub url: String,
    /// Title, or `"No title"` when the provider had none.
    pub title: String,
    /// Excerpt, or empty string when absent.
    pub excerpt: String,
    /// Last-update time; epoch zero when the provider omitted it.
    pub time_updated: DateTime<Utc>,
    /// Tag names. Per-tag metadata from the provider is discarded.
    pub tags: BTreeSet<String>,
}

/// One raw entry from the provider's `list` payload, prior to normalization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawItem {
    #[serde(default)]
    pub resolved_url: Option<String>,
    #[serde(default)]
    pub resolved_title: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    /// Epoch seconds, usually encoded as a string.
    #[serde(default)]
    pub time_updated: Option<Value>,
    /// Map of tag name to tag metadata; only the keys matter.
    #[serde(default)]
    pub tags: Option<serde_json::Map<String, Value>>,
}

impl Item {
    /// Normalize a raw entry into an [`Item`].
    ///
    /// Returns `None` when the entry has no non-empty `resolved_url`; such
    /// entries are silently dropped rather than errored. All default
    /// substitutions live here: missing or empty title becomes
    /// [`DEFAULT_TITLE`], missing excerpt becomes the empty string, missing
    /// `time_updated` becomes epoch zero, and missing tags become an empty
    /// set.
    #[must_use]
    pub fn from_raw(raw: RawItem) -> Option<Self> {
        let url = raw.resolved_url.filter(|u| !u.is_empty())?;
        let title = raw
            .resolved_title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());
        let excerpt = raw.excerpt.unwrap_or_default();
        let time_updated = raw
            .time_updated
            .as_ref()
            .and_then(epoch_seconds)
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .unwrap_or(DateTime::UNIX_EPOCH);
        let tags = raw
            .tags
            .map(|map| map.into_iter().map(|(name, _)| name).collect())
            .unwrap_or_default();
        Some(Self { url, title, excerpt, time_updated, tags })
    }
}

/// Interpret a JSON value as epoch seconds.
///
/// The provider encodes timestamps as strings (`"1000"`), but bare numbers
/// are tolerated too. Fractional seconds are truncated.
fn epoch_seconds(value: &Value) -> Option<i64> {
    match value {
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
    .map(|secs| secs.trunc() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawItem {
        serde_json::from_value(value).expect("raw item should deserialize")
    }

    #[test]
    fn full_entry_normalizes_all_fields() {
        let item = Item::from_raw(raw(json!({
            "resolved_url": "http://a.com",
            "resolved_title": "A",
            "excerpt": "an excerpt",
            "time_updated": "1000",
            "tags": {"x": {}, "y": {}}
        })))
        .expect("entry with url should normalize");

        assert_eq!(item.url, "http://a.com");
        assert_eq!(item.title, "A");
        assert_eq!(item.excerpt, "an excerpt");
        assert_eq!(item.time_updated, DateTime::from_timestamp(1000, 0).unwrap());
        assert_eq!(
            item.tags,
            BTreeSet::from(["x".to_string(), "y".to_string()])
        );
    }

    #[test]
    fn missing_url_drops_entry() {
        assert!(Item::from_raw(raw(json!({"resolved_title": "No URL item"}))).is_none());
    }

    #[test]
    fn empty_url_drops_entry() {
        assert!(
            Item::from_raw(raw(json!({"resolved_url": "", "resolved_title": "t"}))).is_none()
        );
    }

    #[test]
    fn missing_title_gets_placeholder() {
        let item = Item::from_raw(raw(json!({"resolved_url": "http://a.com"}))).unwrap();
        assert_eq!(item.title, DEFAULT_TITLE);
    }

    #[test]
    fn empty_title_gets_placeholder() {
        let item = Item::from_raw(raw(json!({
            "resolved_url": "http://a.com",
            "resolved_title": ""
        })))
        .unwrap();
        assert_eq!(item.title, DEFAULT_TITLE);
    }

    #[test]
    fn missing_excerpt_defaults_to_empty() {
        let item = Item::from_raw(raw(json!({"resolved_url": "http://a.com"}))).unwrap();
        assert_eq!(item.excerpt, "");
    }

    #[test]
    fn missing_time_updated_defaults_to_epoch() {
        let item = Item::from_raw(raw(json!({"resolved_url": "http://a.com"}))).unwrap();
        assert_eq!(item.time_updated, DateTime::UNIX_EPOCH);
    }

    #[test]
    fn time_updated_accepts_string_and_number() {
        let from_string = Item::from_raw(raw(json!({
            "resolved_url": "http://a.com",
            "time_updated": "1500"
        })))
        .unwrap();
        let from_number = Item::from_raw(raw(json!({
            "resolved_url": "http://a.com",
            "time_updated": 1500
        })))
        .unwrap();
        assert_eq!(from_string.time_updated, from_number.time_updated);
        assert_eq!(
            from_string.time_updated,
            DateTime::from_timestamp(1500, 0).unwrap()
        );
    }

    #[test]
    fn unparseable_time_updated_defaults_to_epoch() {
        let item = Item::from_raw(raw(json!({
            "resolved_url": "http://a.com",
            "time_updated": "not a number"
        })))
        .unwrap();
        assert_eq!(item.time_updated, DateTime::UNIX_EPOCH);
    }

    #[test]
    fn missing_tags_default_to_empty_set() {
        let item = Item::from_raw(raw(json!({"resolved_url": "http://a.com"}))).unwrap();
        assert!(item.tags.is_empty());
    }

    #[test]
    fn tag_metadata_is_discarded() {
        let item = Item::from_raw(raw(json!({
            "resolved_url": "http://a.com",
            "tags": {"rust": {"item_id": "1", "tag": "rust"}}
        })))
        .unwrap();
        assert_eq!(item.tags, BTreeSet::from(["rust".to_string()]));
    }

    #[test]
    fn item_serializes_with_stable_shape() {
        let item = Item::from_raw(raw(json!({
            "resolved_url": "http://a.com",
            "resolved_title": "A",
            "time_updated": "1000",
            "tags": {"x": {}}
        })))
        .unwrap();
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["url"], "http://a.com");
        assert_eq!(value["title"], "A");
        assert_eq!(value["excerpt"], "");
        assert_eq!(value["tags"], json!(["x"]));
    }
}
