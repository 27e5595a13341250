//! The document model: raw sources, metadata mappings, and documents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use folio_core::util::ids::{id_from_name, normalize_id};

use crate::dates;
use crate::frontmatter;

/// One raw content source: stable storage name plus raw text.
///
/// How sources are enumerated (filesystem, bundler, fixture) is the
/// caller's concern; the repository only sees the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSource {
    /// Storage name, e.g. `sqli-basics.md`. Case-sensitive and stable.
    pub name: String,
    /// The raw text, header block included.
    pub text: String,
}

impl RawSource {
    /// Create a raw source from a name and its text.
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Open mapping of string keys to scalar/array values from a header block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata(BTreeMap<String, Value>);

impl Metadata {
    /// Whether the mapping has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Raw value for a key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// String value for a key, if the value is a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// The `tags` entry as a list of strings (empty when absent).
    pub fn tags(&self) -> Vec<&str> {
        self.0
            .get("tags")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// Iterate over the entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

/// One content item: identity, metadata, body, and its ordering key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    /// Unique identifier within the collection.
    pub id: String,
    /// Metadata extracted from the header block (may be empty).
    pub metadata: Metadata,
    /// Raw text remaining after the header block is removed.
    pub body: String,
    /// Point in time used only for ordering; unparseable dates map to
    /// the oldest representable instant.
    pub sort_key: DateTime<Utc>,
}

impl Document {
    /// Build a document from a raw source.
    ///
    /// Identity resolution is two-step: the metadata `id` field if
    /// present and non-empty, else the storage name with its extension
    /// stripped. A malformed header degrades to an empty mapping with
    /// the whole original text as body; it never fails.
    pub fn from_source(source: &RawSource) -> Self {
        let (metadata, body) = frontmatter::extract(&source.name, &source.text);

        let id = metadata
            .get_str("id")
            .and_then(normalize_id)
            .unwrap_or_else(|| id_from_name(&source.name));

        let sort_key = dates::parse_sort_key(metadata.get_str("date"));

        Self {
            id,
            metadata,
            body: body.to_string(),
            sort_key,
        }
    }

    /// Display title, if the header provided one.
    pub fn title(&self) -> Option<&str> {
        self.metadata.get_str("title")
    }

    /// Display date as free text, exactly as authored.
    pub fn date_display(&self) -> Option<&str> {
        self.metadata.get_str("date")
    }

    /// Tag list (empty when absent).
    pub fn tags(&self) -> Vec<&str> {
        self.metadata.tags()
    }
}
