//! Detail modal shown when a model canvas is clicked.
//!
//! The modal is a full-window backdrop with a centred content panel. A click
//! on the backdrop closes it; clicks inside the panel are ignored. Whether a
//! click hit the panel is decided by an explicit cursor-in-rect test against
//! the panel's laid-out bounds.

/// Modal state, commands, and the click hit test.
pub mod state;

/// Backdrop and panel nodes plus the systems that open, close, and refresh them.
pub mod ui;

use crate::engine::core::app_state::ShowcaseSet;
use bevy::prelude::*;

use state::{ModalCommand, ModalState, apply_modal_commands};
use ui::{dismiss_on_backdrop_click, dismiss_on_escape, spawn_modal_ui, sync_modal_ui};

pub struct ModalPlugin;

impl Plugin for ModalPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ModalState>()
            .add_event::<ModalCommand>()
            .add_systems(Startup, spawn_modal_ui)
            .add_systems(
                Update,
                (dismiss_on_backdrop_click, dismiss_on_escape).in_set(ShowcaseSet::Input),
            )
            .add_systems(Update, apply_modal_commands.in_set(ShowcaseSet::Apply))
            .add_systems(Update, sync_modal_ui.in_set(ShowcaseSet::Present));
    }
}
