//! Link Catalog Module
//!
//! The node-local, append-only store of resolved links.
//!
//! ## Guarantees
//! - **Uniqueness**: Two entries never share a URL. Identity is the exact URL string
//!   (case-sensitive, no normalization).
//! - **Order**: Snapshots reflect commit order. Nothing is ever removed or reordered.
//! - **Single source of truth**: `LinkCatalog::add` is the only place that decides whether a
//!   link is new, which is what bounds the flood in the dissemination layer.

pub mod store;
pub mod types;
