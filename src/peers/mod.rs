//! Peer Registry Module
//!
//! Holds the manually wired neighbours of this node. Peers are registered through
//! `POST /peers` or the `--peer` flag and are never removed, evicted or discovered
//! automatically.
//!
//! - **`address`**: `host:port` validation (`PeerAddress`).
//! - **`registry`**: The monotonically growing peer set.

pub mod address;
pub mod registry;

#[cfg(test)]
mod tests;
