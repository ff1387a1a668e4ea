//! Test fixtures: real nodes, page servers and recording peers on ephemeral ports.

use crate::config::NodeConfig;
use crate::ingress::service::IngressService;
use crate::node::Node;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::{get, post};
use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

pub const WAIT: Duration = Duration::from_secs(5);

pub async fn serve(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// An address nothing listens on.
pub async fn dead_address() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

/// Polls `check` until it holds or `WAIT` elapses.
pub async fn wait_until<F, Fut>(mut check: F) -> bool
where
    F: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    let deadline = tokio::time::Instant::now() + WAIT;
    while tokio::time::Instant::now() < deadline {
        if check().await {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    check().await
}

// ============================================================
// NODES
// ============================================================

pub struct TestNode {
    pub addr: SocketAddr,
    pub ingress: Arc<IngressService>,
}

impl TestNode {
    pub fn peer_address(&self) -> String {
        self.addr.to_string()
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn urls(&self) -> Vec<String> {
        self.ingress
            .list()
            .await
            .iter()
            .map(|l| l.url().to_string())
            .collect()
    }
}

pub async fn spawn_node() -> TestNode {
    spawn_node_with(NodeConfig::default()).await
}

pub async fn spawn_node_with(config: NodeConfig) -> TestNode {
    let node = Node::start(&config);
    let ingress = node.ingress().clone();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        node.serve(listener).await.unwrap();
    });
    TestNode { addr, ingress }
}

// ============================================================
// PAGE SERVER
// ============================================================

/// Serves pages whose titles the resolver fetches.
///
/// - `/hello`        -> `<title>Hello</title>`
/// - `/untitled`     -> page without a title
/// - `/missing`      -> 404
/// - `/hang`         -> never answers
/// - `/page/:id`     -> `<title>fetched-{id}</title>`, after a short delay
#[derive(Default)]
pub struct PageStats {
    pub fetches: AtomicUsize,
    pub in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
}

pub struct PageServer {
    pub addr: SocketAddr,
    pub stats: Arc<PageStats>,
}

impl PageServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

pub async fn spawn_page_server() -> PageServer {
    let stats = Arc::new(PageStats::default());

    let app = Router::new()
        .route(
            "/hello",
            get(|State(s): State<Arc<PageStats>>| async move {
                s.fetches.fetch_add(1, Ordering::SeqCst);
                Html("<html><head><title>Hello</title></head><body>hi</body></html>")
            }),
        )
        .route(
            "/untitled",
            get(|State(s): State<Arc<PageStats>>| async move {
                s.fetches.fetch_add(1, Ordering::SeqCst);
                Html("<html><body>no title here</body></html>")
            }),
        )
        .route(
            "/missing",
            get(|State(s): State<Arc<PageStats>>| async move {
                s.fetches.fetch_add(1, Ordering::SeqCst);
                StatusCode::NOT_FOUND
            }),
        )
        .route(
            "/hang",
            get(|State(s): State<Arc<PageStats>>| async move {
                s.fetches.fetch_add(1, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Html("<title>too late</title>")
            }),
        )
        .route(
            "/page/:id",
            get(
                |State(s): State<Arc<PageStats>>, Path(id): Path<String>| async move {
                    s.fetches.fetch_add(1, Ordering::SeqCst);
                    let now = s.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                    s.max_in_flight.fetch_max(now, Ordering::SeqCst);
                    tokio::time::sleep(Duration::from_millis(20)).await;
                    s.in_flight.fetch_sub(1, Ordering::SeqCst);
                    Html(format!("<title>fetched-{}</title>", id))
                },
            ),
        )
        .with_state(stats.clone());

    PageServer {
        addr: serve(app).await,
        stats,
    }
}

// ============================================================
// RECORDING PEER
// ============================================================

/// A fake peer that records every `POST /links` body and answers with a fixed status.
pub struct RecordingPeer {
    pub addr: SocketAddr,
    pub bodies: Arc<Mutex<Vec<String>>>,
}

impl RecordingPeer {
    pub fn peer_address(&self) -> String {
        self.addr.to_string()
    }

    pub async fn received(&self) -> Vec<String> {
        self.bodies.lock().await.clone()
    }
}

pub async fn spawn_recording_peer(status: StatusCode) -> RecordingPeer {
    spawn_slow_recording_peer(status, Duration::ZERO).await
}

/// Records each body as soon as it arrives, then holds the reply for `delay`.
pub async fn spawn_slow_recording_peer(status: StatusCode, delay: Duration) -> RecordingPeer {
    let bodies = Arc::new(Mutex::new(Vec::new()));

    let app = Router::new()
        .route(
            "/links",
            post(
                move |State(b): State<Arc<Mutex<Vec<String>>>>, body: String| async move {
                    b.lock().await.push(body);
                    tokio::time::sleep(delay).await;
                    status
                },
            ),
        )
        .with_state(bodies.clone());

    RecordingPeer {
        addr: serve(app).await,
        bodies,
    }
}
