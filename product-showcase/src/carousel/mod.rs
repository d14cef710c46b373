//! Three-at-a-time model carousel.
//!
//! ## Data Flow
//!
//! ```text
//! CarouselCommand (Event)      <- nav buttons, arrow keys
//!   └─> apply_carousel_commands: bounded next/previous on CarouselState
//!         └─> RenderPageRequest (Event), only when the page moved
//!               (host page RPC moves the page itself and writes this too)
//!               └─> render_visible_page
//!                     ├─ release every live ViewportHandle
//!                     └─ build_viewport per visible model (≤ 3)
//! ```
//!
//! The [`controller::Carousel`] resource is the single owner of the loaded
//! models, the page offset, and the live viewports.

/// Carousel resource, navigation events, and page rendering.
pub mod controller;

/// Button and canvas click handling, plus native keyboard shortcuts.
pub mod interactions;

/// Bounded page arithmetic over the loaded models.
pub mod state;

/// Carousel layout, navigation buttons, and page label.
pub mod ui;

use crate::engine::core::app_state::{AppState, ShowcaseSet};
use crate::engine::viewport::rotation::rotate_visible_models;
use bevy::prelude::*;

use controller::{
    Carousel, CarouselCommand, RenderPageRequest, apply_carousel_commands,
    render_visible_page, request_initial_render,
};
use interactions::{handle_navigation_keys, nav_button_interaction, slot_click_interaction};
use ui::{reflect_carousel_state, spawn_carousel_ui};

pub struct CarouselPlugin;

impl Plugin for CarouselPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Carousel>()
            .add_event::<CarouselCommand>()
            .add_event::<RenderPageRequest>()
            .add_systems(Startup, spawn_carousel_ui)
            .add_systems(OnEnter(AppState::Running), request_initial_render)
            .add_systems(
                Update,
                (
                    nav_button_interaction,
                    slot_click_interaction,
                    handle_navigation_keys,
                )
                    .in_set(ShowcaseSet::Input)
                    .run_if(in_state(AppState::Running)),
            )
            .add_systems(
                Update,
                apply_carousel_commands
                    .in_set(ShowcaseSet::Apply)
                    .run_if(in_state(AppState::Running)),
            )
            .add_systems(Update, render_visible_page.in_set(ShowcaseSet::Render))
            .add_systems(
                Update,
                (rotate_visible_models, reflect_carousel_state).in_set(ShowcaseSet::Present),
            );
    }
}
