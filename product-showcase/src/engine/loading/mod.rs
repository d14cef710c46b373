//! Asset loading pipeline for the showcase.
//!
//! Loads the catalog, fans out one glTF fetch per entry, and joins the
//! results before the carousel shows its first page.

/// Catalog JSON loading with validation and built-in fallback.
pub mod catalog_loader;

/// Join over the pending catalog loads that fires exactly once.
pub mod load_gate;

/// Per-entry glTF fetches and completion polling.
pub mod model_loader;

/// Loading status reported to the UI and the host page.
pub mod progress;
