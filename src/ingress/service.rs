use super::types::{LinkSubmission, SubmitOutcome};
use super::validate::{LinkError, validate_submission};
use crate::catalog::store::LinkCatalog;
use crate::catalog::types::Link;
use crate::dissemination::engine::{CommitOutcome, DisseminationEngine, DisseminationStats};
use crate::peers::address::PeerError;
use crate::peers::registry::PeerRegistry;
use crate::resolver::queue::{EnqueueError, TitleResolutionQueue};

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] LinkError),

    #[error(transparent)]
    Enqueue(#[from] EnqueueError),

    #[error("commit task failed: {0}")]
    Commit(#[from] tokio::task::JoinError),
}

/// Per-outcome tally of accepted submissions (direct and from peers).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArrivalCounts {
    pub committed: usize,
    pub queued: usize,
    pub duplicate: usize,
}

#[derive(Default)]
struct ArrivalCounters {
    committed: AtomicUsize,
    queued: AtomicUsize,
    duplicate: AtomicUsize,
}

impl ArrivalCounters {
    fn record(&self, outcome: SubmitOutcome) {
        let counter = match outcome {
            SubmitOutcome::Committed => &self.committed,
            SubmitOutcome::Queued => &self.queued,
            SubmitOutcome::Duplicate => &self.duplicate,
        };
        counter.fetch_add(1, Ordering::SeqCst);
    }
}

/// The node context shared by every request handler.
///
/// Owns the catalog, the peer registry, the dissemination engine and the submit side of
/// the title queue. Handlers only reach shared state through these narrow operations.
#[derive(Clone)]
pub struct IngressService {
    catalog: Arc<LinkCatalog>,
    peers: Arc<PeerRegistry>,
    engine: Arc<DisseminationEngine>,
    queue: TitleResolutionQueue,
    arrivals: Arc<ArrivalCounters>,
}

impl IngressService {
    pub fn new(engine: Arc<DisseminationEngine>, queue: TitleResolutionQueue) -> Self {
        Self {
            catalog: engine.catalog().clone(),
            peers: engine.peers().clone(),
            engine,
            queue,
            arrivals: Arc::new(ArrivalCounters::default()),
        }
    }

    /// Accepts a link from a human or a peer.
    ///
    /// The "already present" check here is advisory: two submissions of the same untitled
    /// URL may both be fetched, but `LinkCatalog::add` still stores only one.
    pub async fn submit(&self, submission: LinkSubmission) -> Result<SubmitOutcome, SubmitError> {
        let outcome = self.route(submission).await?;
        self.arrivals.record(outcome);
        Ok(outcome)
    }

    async fn route(&self, submission: LinkSubmission) -> Result<SubmitOutcome, SubmitError> {
        let submission = validate_submission(submission)?;

        if self.catalog.contains(&submission.url).await {
            tracing::trace!("Already have {}", submission.url);
            return Ok(SubmitOutcome::Duplicate);
        }

        match submission.title {
            None => {
                tracing::debug!("New link (needs fetch): {:?}", submission.url);
                self.queue.enqueue(submission.url).await?;
                Ok(SubmitOutcome::Queued)
            }
            Some(title) => {
                tracing::debug!("New link (no fetch needed): {:?}", submission.url);
                // Commit and fan-out run detached from the request future: once the link
                // is in the catalog, every peer in the snapshot gets an attempt even if
                // the submitter hangs up. The response still waits for all of them.
                let engine = self.engine.clone();
                let link = Link::new(submission.url, title);
                let commit = tokio::spawn(async move { engine.commit(link).await });

                match commit.await? {
                    CommitOutcome::Committed(_) => Ok(SubmitOutcome::Committed),
                    CommitOutcome::AlreadyPresent => Ok(SubmitOutcome::Duplicate),
                }
            }
        }
    }

    /// Registers a batch of peers. Any malformed entry rejects the whole batch.
    pub fn announce_peers<I, S>(&self, addresses: I) -> Result<usize, PeerError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.peers.register(addresses)
    }

    pub async fn list(&self) -> Vec<Link> {
        self.catalog.snapshot().await
    }

    pub fn peer_count(&self) -> usize {
        self.peers.len()
    }

    pub fn arrivals(&self) -> ArrivalCounts {
        ArrivalCounts {
            committed: self.arrivals.committed.load(Ordering::SeqCst),
            queued: self.arrivals.queued.load(Ordering::SeqCst),
            duplicate: self.arrivals.duplicate.load(Ordering::SeqCst),
        }
    }

    pub fn dissemination(&self) -> DisseminationStats {
        self.engine.stats()
    }

    #[cfg(test)]
    pub(crate) fn peers(&self) -> Vec<crate::peers::address::PeerAddress> {
        self.peers.snapshot()
    }
}
