//! Ingress Module
//!
//! The HTTP boundary of a node. Human submitters and peer broadcasts arrive through the
//! same endpoints and are handled identically.
//!
//! ## Routing
//! - **`POST /links`**: Validate, then skip if already known, queue for title resolution if
//!   untitled, or commit (and broadcast) directly if titled.
//! - **`POST /peers`**: Register a batch of `host:port` peers, all or nothing.
//! - **`GET /`**: Render the catalog.
//!
//! Validation failures are rejected with `400` before anything is stored or queued.

pub mod handlers;
pub mod render;
pub mod service;
pub mod types;
pub mod validate;
