//! Title Resolution Module
//!
//! Links submitted without a title are resolved in the background by exactly one worker.
//!
//! ## Workflow
//! 1. **Enqueue**: Ingress pushes the URL into a bounded FIFO. When the buffer is full the
//!    submitter waits; that wait is the node's only backpressure.
//! 2. **Fetch**: The worker downloads the page. There is no timeout, so a stalled fetch
//!    holds up every URL queued behind it.
//! 3. **Extract**: The `<title>` text becomes the link title, or `(untitled)` if empty.
//! 4. **Commit**: The resolved link is handed to the `DisseminationEngine`.
//!
//! A failed fetch drops the URL. It is logged, never retried, and never reaches the catalog.

pub mod queue;
pub mod title;
