//! The document collection: one atomic batch load, then read-only.
//!
//! [`Collection::load`] consumes raw sources in discovery order and
//! produces a frozen, stable-sorted sequence (newest first) with an
//! identifier index for point lookups. There is no incremental update
//! path; a session loads once and shares the result.

use futures::future::join_all;
use std::collections::HashMap;
use std::path::Path;

use folio_core::util::files;
use folio_core::Result;

use crate::document::{Document, RawSource};

/// File extension of raw content sources.
const SOURCE_EXTENSION: &str = "md";

/// Immutable, ordered set of all loaded documents for one session.
///
/// Sorted by sort key descending (newest first); equal keys keep their
/// relative discovery order. The collection exposes no mutation API, so
/// it is safe to share across arbitrarily many concurrent readers.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    docs: Vec<Document>,
    index: HashMap<String, usize>,
}

impl Collection {
    /// Build a collection from raw sources, in discovery order.
    ///
    /// Duplicate identifiers resolve last-write-wins: the earlier
    /// document is dropped and the later one keeps its later discovery
    /// position. A malformed source degrades to a metadata-less
    /// document; no source aborts the batch.
    pub fn load(sources: Vec<RawSource>) -> Self {
        let mut docs: Vec<Document> = Vec::with_capacity(sources.len());

        for source in &sources {
            let doc = Document::from_source(source);
            if let Some(pos) = docs.iter().position(|d| d.id == doc.id) {
                log::warn!(
                    "duplicate document id '{}' from '{}'; later source wins",
                    doc.id,
                    source.name
                );
                docs.remove(pos);
            }
            docs.push(doc);
        }

        // Stable sort: equal sort keys keep discovery order.
        docs.sort_by(|a, b| b.sort_key.cmp(&a.sort_key));

        let index = docs
            .iter()
            .enumerate()
            .map(|(i, d)| (d.id.clone(), i))
            .collect();

        Self { docs, index }
    }

    /// Enumerate `*.md` files under `path`, read them all, and build
    /// the collection.
    ///
    /// Reads fan out concurrently but the collection is only produced
    /// after the whole batch settles — no partial result is ever
    /// visible. A missing directory yields an empty collection; an
    /// unreadable file is logged and skipped.
    pub async fn load_dir(path: &Path) -> Result<Self> {
        let entries = files::find_all_files(path, SOURCE_EXTENSION).await?;

        let reads = entries.iter().map(|entry| files::read_file(&entry.path));
        let texts = join_all(reads).await;

        let mut sources = Vec::with_capacity(entries.len());
        for (entry, text) in entries.into_iter().zip(texts) {
            match text {
                Ok(text) => sources.push(RawSource::new(entry.name, text)),
                Err(e) => log::warn!("skipping unreadable source '{}': {e}", entry.name),
            }
        }

        Ok(Self::load(sources))
    }

    /// Point lookup by identifier.
    ///
    /// `None` is the expected not-found outcome; callers render a
    /// not-found state rather than failing.
    pub fn find_by_id(&self, id: &str) -> Option<&Document> {
        self.index.get(id).map(|&i| &self.docs[i])
    }

    /// Documents in order, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.docs.iter()
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// Whether the collection holds no documents.
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.docs.iter()
    }
}
