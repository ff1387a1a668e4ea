use clap::Parser;
use linkmesh::config::NodeConfig;
use linkmesh::logging;
use linkmesh::node::Node;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = NodeConfig::parse();
    logging::init_logging(config.verbose)?;

    tracing::info!(
        "Starting node on {} (queue capacity {})",
        config.http_addr,
        config.queue_capacity
    );
    if !config.peers.is_empty() {
        tracing::info!("Initial peers: {:?}", config.peers);
    }

    let node = Node::start(&config);
    let listener = tokio::net::TcpListener::bind(&config.http_addr).await?;
    node.serve(listener).await
}
