use super::protocol::peer_links_url;
use crate::catalog::store::LinkCatalog;
use crate::catalog::types::Link;
use crate::peers::address::PeerAddress;
use crate::peers::registry::PeerRegistry;

use anyhow::Result;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Result of a single `commit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The link was new here and a broadcast was attempted.
    Committed(BroadcastReport),
    /// The catalog already held this URL. Nothing was forwarded.
    AlreadyPresent,
}

/// Tally of one broadcast round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BroadcastReport {
    pub attempted: usize,
    pub delivered: usize,
    pub failed: usize,
}

/// Lifetime totals for one engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisseminationStats {
    /// Broadcast rounds started, one per committed link.
    pub broadcasts: usize,
    /// Commits turned away because the URL was already stored.
    pub suppressed: usize,
    pub deliveries_attempted: usize,
    pub deliveries_failed: usize,
}

#[derive(Default)]
struct Counters {
    broadcasts: AtomicUsize,
    suppressed: AtomicUsize,
    deliveries_attempted: AtomicUsize,
    deliveries_failed: AtomicUsize,
}

/// Glue between the catalog and the peer set.
pub struct DisseminationEngine {
    catalog: Arc<LinkCatalog>,
    peers: Arc<PeerRegistry>,
    /// Client for peer deliveries. Built without a timeout.
    http_client: reqwest::Client,
    counters: Counters,
}

impl DisseminationEngine {
    pub fn new(catalog: Arc<LinkCatalog>, peers: Arc<PeerRegistry>) -> Self {
        Self {
            catalog,
            peers,
            http_client: reqwest::Client::new(),
            counters: Counters::default(),
        }
    }

    pub fn catalog(&self) -> &Arc<LinkCatalog> {
        &self.catalog
    }

    pub fn peers(&self) -> &Arc<PeerRegistry> {
        &self.peers
    }

    pub fn stats(&self) -> DisseminationStats {
        DisseminationStats {
            broadcasts: self.counters.broadcasts.load(Ordering::SeqCst),
            suppressed: self.counters.suppressed.load(Ordering::SeqCst),
            deliveries_attempted: self.counters.deliveries_attempted.load(Ordering::SeqCst),
            deliveries_failed: self.counters.deliveries_failed.load(Ordering::SeqCst),
        }
    }

    /// Adds `link` to the catalog and, only if it was new, floods it to every known peer.
    ///
    /// Returns once delivery has been attempted to every peer in the snapshot taken
    /// right after the commit.
    pub async fn commit(&self, link: Link) -> CommitOutcome {
        if !self.catalog.add(link.clone()).await {
            tracing::debug!("Suppressed {}: already in catalog", link.url());
            self.counters.suppressed.fetch_add(1, Ordering::SeqCst);
            return CommitOutcome::AlreadyPresent;
        }

        tracing::info!("Committed {}", link);
        CommitOutcome::Committed(self.broadcast(&link).await)
    }

    /// Delivers `link` to each peer in the current snapshot, one at a time.
    pub async fn broadcast(&self, link: &Link) -> BroadcastReport {
        let peers = self.peers.snapshot();
        self.counters.broadcasts.fetch_add(1, Ordering::SeqCst);
        let mut report = BroadcastReport {
            attempted: peers.len(),
            ..Default::default()
        };

        for peer in &peers {
            tracing::debug!("Broadcasting to peer {}: {}", peer, link);
            self.counters.deliveries_attempted.fetch_add(1, Ordering::SeqCst);

            match self.deliver(peer, link).await {
                Ok(()) => {
                    report.delivered += 1;
                    tracing::debug!("Finished broadcasting to peer {}: {}", peer, link.url());
                }
                Err(e) => {
                    report.failed += 1;
                    self.counters.deliveries_failed.fetch_add(1, Ordering::SeqCst);
                    tracing::warn!("Broadcasting {} to peer {} failed: {}", link.url(), peer, e);
                }
            }
        }

        report
    }

    async fn deliver(&self, peer: &PeerAddress, link: &Link) -> Result<()> {
        let response = self
            .http_client
            .post(peer_links_url(peer))
            .json(link)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!("peer answered {}", response.status()));
        }

        Ok(())
    }
}
