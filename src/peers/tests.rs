//! Peer Module Tests
//!
//! ## Test Scopes
//! - **Address syntax**: `host:port` acceptance and rejection rules.
//! - **Batch atomicity**: One malformed entry rejects the whole registration.
//! - **Monotonicity**: The registry never shrinks and re-registration is a no-op.

#[cfg(test)]
mod tests {
    use crate::peers::address::{PeerAddress, PeerError, parse_peer_batch};
    use crate::peers::registry::PeerRegistry;

    // ============================================================
    // ADDRESS VALIDATION
    // ============================================================

    #[test]
    fn test_valid_addresses() {
        for addr in [
            "example.com:1234",
            "b.example:7000",
            "localhost:7000",
            "127.0.0.1:65535",
            "[::1]:7000",
            "node-3:0",
        ] {
            assert!(addr.parse::<PeerAddress>().is_ok(), "{} should be valid", addr);
        }
    }

    #[test]
    fn test_invalid_addresses() {
        for addr in [
            "bad-address",
            "",
            ":7000",
            "host:",
            "host:port",
            "host:70000",
            "host:-1",
            "::1:7000",
            "[::1]7000",
            "[nothex]:7000",
            "http://host:7000",
            "host name:7000",
            "user@host:7000",
        ] {
            assert!(addr.parse::<PeerAddress>().is_err(), "{:?} should be rejected", addr);
        }
    }

    #[test]
    fn test_address_is_kept_verbatim() {
        let addr: PeerAddress = "Example.COM:80".parse().unwrap();

        assert_eq!(addr.as_str(), "Example.COM:80");
        assert_eq!(addr.to_string(), "Example.COM:80");
    }

    // ============================================================
    // BODY PARSING
    // ============================================================

    #[test]
    fn test_parse_peer_batch() {
        let batch = parse_peer_batch(br#"["a:1","b:2"]"#).unwrap();

        assert_eq!(batch, vec!["a:1".to_string(), "b:2".to_string()]);
    }

    #[test]
    fn test_parse_peer_batch_rejects_absent_body() {
        assert!(matches!(parse_peer_batch(b""), Err(PeerError::MalformedBody(_))));
        assert!(matches!(parse_peer_batch(b"{}"), Err(PeerError::MalformedBody(_))));
        assert!(matches!(parse_peer_batch(b"[1,2]"), Err(PeerError::MalformedBody(_))));
    }

    #[test]
    fn test_parse_peer_batch_names_bad_entry() {
        let registry = PeerRegistry::new();
        let batch = parse_peer_batch(br#"["b.example:7000","bad-address"]"#).unwrap();

        let err = registry.register(batch).unwrap_err();

        match err {
            PeerError::InvalidAddress(addr) => assert_eq!(addr, "bad-address"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    // ============================================================
    // REGISTRY
    // ============================================================

    #[test]
    fn test_register_adds_peers() {
        let registry = PeerRegistry::new();

        let added = registry.register(["example.com:1234"]).unwrap();

        assert_eq!(added, 1);
        assert!(registry.contains("example.com:1234"));
    }

    #[test]
    fn test_register_rejects_whole_batch() {
        let registry = PeerRegistry::new();

        let result = registry.register(["b.example:7000", "bad-address"]);

        assert!(result.is_err());
        assert!(registry.is_empty(), "No partial registration");
        assert!(!registry.contains("b.example:7000"));
    }

    #[test]
    fn test_reregistering_is_noop() {
        let registry = PeerRegistry::new();
        registry.register(["a:1", "b:2"]).unwrap();

        let added = registry.register(["b:2", "a:1", "b:2"]).unwrap();

        assert_eq!(added, 0);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_registry_never_shrinks() {
        let registry = PeerRegistry::new();
        let mut last = 0;

        for batch in [vec!["a:1"], vec!["a:1", "b:2"], vec!["bad"], vec![], vec!["c:3"]] {
            let _ = registry.register(batch);
            assert!(registry.len() >= last);
            last = registry.len();
        }

        assert_eq!(last, 3);
    }

    #[test]
    fn test_snapshot_is_point_in_time() {
        let registry = PeerRegistry::new();
        registry.register(["a:1"]).unwrap();

        let snapshot = registry.snapshot();
        registry.register(["b:2"]).unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(registry.snapshot().len(), 2);
    }
}
