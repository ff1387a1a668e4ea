//! Command-line configuration for a node.

use crate::peers::address::{PeerAddress, PeerError};
use crate::resolver::queue::DEFAULT_QUEUE_CAPACITY;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "linkmesh")]
#[command(about = "Peer-to-peer link sharing node", long_about = None)]
pub struct NodeConfig {
    /// HTTP service address (host:port).
    #[arg(long = "http", default_value = "127.0.0.1:7000", value_name = "ADDR")]
    pub http_addr: String,

    /// Peer to flood new links to. May be given more than once.
    #[arg(long = "peer", value_name = "HOST:PORT", value_parser = parse_peer_arg)]
    pub peers: Vec<PeerAddress>,

    /// Slots in the title-resolution queue before submitters start to wait.
    #[arg(long, default_value_t = DEFAULT_QUEUE_CAPACITY, value_name = "N", value_parser = parse_capacity)]
    pub queue_capacity: usize,

    /// Log every new link and every peer delivery.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            http_addr: "127.0.0.1:7000".to_string(),
            peers: Vec::new(),
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            verbose: false,
        }
    }
}

fn parse_peer_arg(s: &str) -> Result<PeerAddress, PeerError> {
    s.parse()
}

fn parse_capacity(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("queue capacity must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}
