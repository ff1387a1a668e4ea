use super::address::{PeerAddress, PeerError};

use dashmap::DashSet;

/// The set of peers this node floods new links to.
///
/// Only grows. A peer registered while a broadcast is in flight may or may not receive
/// that broadcast.
#[derive(Default)]
pub struct PeerRegistry {
    peers: DashSet<PeerAddress>,
}

impl PeerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates every address, then merges the batch into the set.
    ///
    /// Nothing is registered if any entry is malformed. Returns how many addresses were new.
    pub fn register<I, S>(&self, addresses: I) -> Result<usize, PeerError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let batch = addresses
            .into_iter()
            .map(|a| a.as_ref().parse::<PeerAddress>())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(self.register_validated(batch))
    }

    /// Merges addresses that have already been validated.
    pub fn register_validated(&self, batch: Vec<PeerAddress>) -> usize {
        let mut added = 0;
        for peer in batch {
            if self.peers.insert(peer.clone()) {
                tracing::info!("Registered peer {}", peer);
                added += 1;
            }
        }
        added
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, peer: &str) -> bool {
        self.peers.contains(peer)
    }

    /// Copy of the current peer set, used by a single broadcast.
    pub fn snapshot(&self) -> Vec<PeerAddress> {
        self.peers.iter().map(|p| p.key().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.peers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }
}
