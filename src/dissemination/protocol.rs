//! HTTP endpoints shared by human submitters and peers.
//!
//! The network is homogeneous: a broadcast is an ordinary `POST /links` carrying the
//! same JSON link schema as a direct submission.

use crate::peers::address::PeerAddress;

/// Link submission and peer broadcast.
pub const ENDPOINT_LINKS: &str = "/links";
/// Peer registration.
pub const ENDPOINT_PEERS: &str = "/peers";
/// Catalog listing (HTML).
pub const ENDPOINT_HOME: &str = "/";

pub fn peer_links_url(peer: &PeerAddress) -> String {
    format!("http://{}{}", peer, ENDPOINT_LINKS)
}
