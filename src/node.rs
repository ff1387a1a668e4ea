//! Node assembly.
//!
//! Builds the explicit node context (catalog, peers, dissemination engine, title queue),
//! starts the single title worker and exposes the HTTP router.

use crate::catalog::store::LinkCatalog;
use crate::config::NodeConfig;
use crate::dissemination::engine::DisseminationEngine;
use crate::dissemination::protocol::{ENDPOINT_HOME, ENDPOINT_LINKS, ENDPOINT_PEERS};
use crate::ingress::handlers::{handle_announce_peers, handle_home, handle_submit_link};
use crate::ingress::service::IngressService;
use crate::peers::registry::PeerRegistry;
use crate::resolver::queue::TitleResolutionQueue;

use anyhow::Result;
use axum::{
    Extension, Router,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub struct Node {
    ingress: Arc<IngressService>,
    worker: JoinHandle<()>,
}

impl Node {
    /// Wires the components together and spawns the title worker.
    /// Must be called from within a tokio runtime.
    pub fn start(config: &NodeConfig) -> Self {
        let catalog = Arc::new(LinkCatalog::new());
        let peers = Arc::new(PeerRegistry::new());
        peers.register_validated(config.peers.clone());

        let engine = Arc::new(DisseminationEngine::new(catalog, peers));
        let (queue, worker) = TitleResolutionQueue::new(config.queue_capacity, engine.clone());

        Self {
            ingress: Arc::new(IngressService::new(engine, queue)),
            worker: worker.spawn(),
        }
    }

    pub fn ingress(&self) -> &Arc<IngressService> {
        &self.ingress
    }

    pub fn router(&self) -> Router {
        router(self.ingress.clone())
    }

    pub async fn serve(self, listener: TcpListener) -> Result<()> {
        tracing::info!(
            "Node serving on {} with {} peer(s)",
            listener.local_addr()?,
            self.ingress.peer_count()
        );

        let app = self.router();
        let result = axum::serve(listener, app).await;
        self.worker.abort();
        result?;

        Ok(())
    }
}

pub fn router(ingress: Arc<IngressService>) -> Router {
    Router::new()
        .route(ENDPOINT_LINKS, post(handle_submit_link))
        .route(ENDPOINT_PEERS, post(handle_announce_peers))
        .route(ENDPOINT_HOME, get(handle_home))
        .layer(Extension(ingress))
}
