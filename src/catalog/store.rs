//! Append-only link storage guarded by a reader/writer lock.

use super::types::Link;

use std::collections::HashSet;
use tokio::sync::RwLock;

#[derive(Default)]
struct CatalogState {
    /// Entries in commit order.
    links: Vec<Link>,
    /// URL index used for the uniqueness check.
    urls: HashSet<String>,
}

/// Deduplicated, insertion-ordered set of links.
///
/// The lock is only ever held for a single lookup, append or copy. Callers must not
/// keep a guard across network I/O, so none is exposed.
#[derive(Default)]
pub struct LinkCatalog {
    state: RwLock<CatalogState>,
}

impl LinkCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `link` unless an entry with the same URL already exists.
    ///
    /// Returns `true` when the link was appended, `false` when it was a duplicate.
    pub async fn add(&self, link: Link) -> bool {
        let mut state = self.state.write().await;

        if state.urls.contains(link.url()) {
            tracing::trace!("Catalog already holds {}", link.url());
            return false;
        }

        state.urls.insert(link.url().to_string());
        state.links.push(link);
        true
    }

    /// Advisory existence check. The answer may be stale by the time the caller acts on it;
    /// only `add` is authoritative.
    pub async fn contains(&self, url: &str) -> bool {
        self.state.read().await.urls.contains(url)
    }

    /// Point-in-time copy of every entry, in commit order.
    pub async fn snapshot(&self) -> Vec<Link> {
        self.state.read().await.links.clone()
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.links.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
