use super::title::extract_title;
use crate::catalog::types::Link;
use crate::dissemination::engine::{CommitOutcome, DisseminationEngine};

use anyhow::Result;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Smallest buffer a tokio channel supports; the closest thing to a rendezvous hand-off.
pub const DEFAULT_QUEUE_CAPACITY: usize = 1;

#[derive(Debug, Error)]
pub enum EnqueueError {
    #[error("title resolution worker has stopped")]
    WorkerGone,
}

/// Submission side of the title-resolution FIFO.
#[derive(Clone)]
pub struct TitleResolutionQueue {
    tx: mpsc::Sender<String>,
}

/// The single consumer. Owns the read end of the FIFO.
pub struct TitleWorker {
    rx: mpsc::Receiver<String>,
    engine: Arc<DisseminationEngine>,
    http_client: reqwest::Client,
}

impl TitleResolutionQueue {
    /// Creates the queue and its worker. The worker does nothing until `spawn`ed.
    pub fn new(capacity: usize, engine: Arc<DisseminationEngine>) -> (Self, TitleWorker) {
        let (tx, rx) = mpsc::channel(capacity.max(1));

        let worker = TitleWorker {
            rx,
            engine,
            http_client: reqwest::Client::new(),
        };

        (Self { tx }, worker)
    }

    /// Pushes `url` onto the FIFO, waiting for room if the buffer is full.
    pub async fn enqueue(&self, url: String) -> Result<(), EnqueueError> {
        self.tx.send(url).await.map_err(|_| EnqueueError::WorkerGone)
    }

    /// Free slots right now. Zero means the next `enqueue` will wait.
    #[cfg(test)]
    pub(crate) fn available(&self) -> usize {
        self.tx.capacity()
    }
}

impl TitleWorker {
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    /// Processes URLs strictly in arrival order until every sender is dropped.
    pub async fn run(mut self) {
        tracing::info!("Title resolution worker started");

        while let Some(url) = self.rx.recv().await {
            match self.resolve(&url).await {
                Ok(link) => match self.engine.commit(link).await {
                    CommitOutcome::Committed(report) => {
                        tracing::debug!(
                            "Resolved {} and broadcast to {}/{} peers",
                            url,
                            report.delivered,
                            report.attempted
                        );
                    }
                    CommitOutcome::AlreadyPresent => {
                        tracing::debug!("Resolved {} but it was committed meanwhile", url);
                    }
                },
                Err(e) => {
                    tracing::warn!("Error fetching {:?}: {}", url, e);
                }
            }
        }

        tracing::info!("Title resolution worker stopped");
    }

    async fn resolve(&self, url: &str) -> Result<Link> {
        let title = fetch_title(&self.http_client, url).await?;
        Ok(Link::new(url, title))
    }
}

/// Downloads `url` and extracts its title. Non-success statuses count as failures.
pub async fn fetch_title(client: &reqwest::Client, url: &str) -> Result<String> {
    let response = client.get(url).send().await?.error_for_status()?;
    let body = response.text().await?;
    Ok(extract_title(&body))
}
