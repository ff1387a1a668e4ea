//! Dissemination Module
//!
//! Commits resolved links into the local catalog and floods new ones to every known peer.
//!
//! ## Flood-fill with suppression
//! A node forwards a link at most once: the first time `LinkCatalog::add` accepts it.
//! Every later arrival (from a peer or a resubmission) is a duplicate and goes no further.
//! On a finite peer graph this bounds total deliveries by the directed edges traversed
//! before every reachable node holds the link.
//!
//! ## Delivery
//! - Peers are contacted one at a time, over the same `POST /links` endpoint humans use.
//! - A failed delivery is logged and skipped. It never rolls back the local commit and
//!   never stops delivery to the remaining peers. There is no retry and no timeout.
//! - No catalog or registry lock is held while a delivery is in flight.

pub mod engine;
pub mod protocol;
