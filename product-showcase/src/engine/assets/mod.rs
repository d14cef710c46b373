//! Showcase asset data: the catalog of models to fetch and the sequence of
//! models that finished loading.

/// Catalog entries with source locators, display names, and placements.
pub mod catalog;

/// Append-only sequence of loaded scene handles in completion order.
pub mod loaded_models;
