//! Link Mesh Node Library
//!
//! A node keeps a local catalog of `(URL, title)` links and shares it with a manually wired
//! mesh of peers. New links are resolved, committed once, and flooded to every neighbour;
//! duplicates stop the flood.
//!
//! ## Modules
//! - **`catalog`**: Append-only, URL-deduplicated link store.
//! - **`peers`**: `host:port` validation and the grow-only peer set.
//! - **`resolver`**: Bounded FIFO plus the single worker that fetches page titles.
//! - **`dissemination`**: Commit-then-broadcast with duplicate suppression.
//! - **`ingress`**: HTTP handlers, request validation and the catalog page.
//! - **`node`**: Wires the above into one context and router.

pub mod catalog;
pub mod config;
pub mod dissemination;
pub mod ingress;
pub mod logging;
pub mod node;
pub mod peers;
pub mod resolver;

#[cfg(test)]
mod testing;
