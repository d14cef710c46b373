//! JSON-RPC 2.0 bridge between the viewer and its host page.
//!
//! When the viewer runs inside a web page (or an iframe), the host page can
//! drive the carousel and listen for viewer events over `postMessage`.
//!
//! ## Message Flow
//!
//! ```text
//! Host page (parent window)  <──postMessage──>  Viewer (wasm canvas)
//!        │                                        │
//!        ├─ Request (with ID) ──────────────────> │
//!        │                                        ├─ Apply carousel/modal change
//!        │ <───────────────── Response (with ID) ─┤
//!        │                                        │
//!        │ <────────── Notification (no ID) ──────┤
//! ```
//!
//! Requests without an `id` are treated as notifications: they are still
//! applied but no response is sent. Page navigation is only accepted once
//! every model has loaded.
//!
//! ## Methods
//!
//! - `next_page`: advance the carousel by one page
//! - `previous_page`: go back one page
//! - `close_modal`: hide the detail modal
//! - `get_carousel_state`: current page, visible model names, and navigation availability
//!
//! ## Notifications
//!
//! - `loading_progress`: per-entry load status while models load
//! - `page_changed`: carousel snapshot after every page render
//! - `model_selected`: name and description when the modal opens
//! - `modal_closed`: the modal was dismissed
//!
//! ## Error Handling
//!
//! Standard JSON-RPC 2.0 error codes:
//! - `-32600`: Invalid request
//! - `-32601`: Method not found
//! - `-32603`: Internal error
//! - `-32000`: Models still loading (server-defined)
//!
//! Native builds keep the queues but never transmit.

/// JSON-RPC 2.0 message types, request dispatch, and the WASM message listener.
pub mod web_rpc;
