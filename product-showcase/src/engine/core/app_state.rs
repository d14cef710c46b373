use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    LoadingCatalog,
    LoadingModels,
    Running,
}

/// Per-frame ordering of showcase systems in `Update`.
///
/// Input turns clicks, keys, and RPC messages into commands; Apply mutates
/// carousel and modal state; Render rebuilds the visible page; Present
/// refreshes UI that mirrors state.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ShowcaseSet {
    Input,
    Apply,
    Render,
    Present,
}
