use serde::Serialize;
use std::borrow::Borrow;
use std::fmt;
use std::net::Ipv6Addr;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while registering peers.
#[derive(Debug, Error)]
pub enum PeerError {
    #[error("bad JSON: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("invalid peer address {0:?}: expected host:port")]
    InvalidAddress(String),
}

/// A validated `host:port` peer address.
///
/// The input string is kept verbatim; it is both the registry key and the
/// authority used when delivering to the peer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PeerAddress(String);

impl PeerAddress {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PeerAddress {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PeerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PeerAddress {
    type Err = PeerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_host_port(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(PeerError::InvalidAddress(s.to_string()))
        }
    }
}

/// Accepts `name:port`, `1.2.3.4:port` and `[v6]:port`. The port must fit in a `u16`.
fn is_host_port(s: &str) -> bool {
    let (host, port) = if let Some(rest) = s.strip_prefix('[') {
        let Some((v6, port)) = rest.split_once("]:") else {
            return false;
        };
        if v6.parse::<Ipv6Addr>().is_err() {
            return false;
        }
        (v6, port)
    } else {
        let Some((host, port)) = s.rsplit_once(':') else {
            return false;
        };
        // Bare IPv6 literals are ambiguous without brackets.
        if host.contains(':') {
            return false;
        }
        (host, port)
    };

    valid_host(host) && valid_port(port)
}

fn valid_host(host: &str) -> bool {
    !host.is_empty()
        && host
            .chars()
            .all(|c| !c.is_whitespace() && !matches!(c, '/' | '?' | '#' | '@' | '[' | ']'))
}

fn valid_port(port: &str) -> bool {
    !port.is_empty() && port.chars().all(|c| c.is_ascii_digit()) && port.parse::<u16>().is_ok()
}

/// Decodes a `POST /peers` body: a JSON array of strings.
///
/// Entries are not validated here; `PeerRegistry::register` rejects the whole batch if
/// any of them is not `host:port`.
pub fn parse_peer_batch(body: &[u8]) -> Result<Vec<String>, PeerError> {
    Ok(serde_json::from_slice(body)?)
}
