use super::controller::{Carousel, CarouselCommand};
use super::ui::{NavButton, idle_colour, nav_enabled};
use crate::constants::ui_style::*;
use crate::engine::viewport::ModelSlot;
use crate::modal::state::ModalCommand;
use bevy::prelude::*;

// Previous/next buttons send their carousel command; unavailable directions stay dimmed
pub fn nav_button_interaction(
    mut q: Query<(&Interaction, &NavButton, &mut BackgroundColor), (Changed<Interaction>, With<Button>)>,
    carousel: Res<Carousel>,
    mut carousel_commands: EventWriter<CarouselCommand>,
) {
    for (interaction, nav, mut bg) in &mut q {
        let enabled = nav_enabled(&carousel, nav.0);
        match *interaction {
            Interaction::Pressed => {
                carousel_commands.write(nav.0);
                if enabled {
                    *bg = BackgroundColor(BUTTON_PRESSED);
                }
            }
            Interaction::Hovered => {
                *bg = BackgroundColor(if enabled { BUTTON_HOVER } else { BUTTON_DISABLED })
            }
            Interaction::None => *bg = BackgroundColor(idle_colour(enabled)),
        }
    }
}

// Clicking a model canvas opens the detail modal for that model
pub fn slot_click_interaction(
    mut q: Query<(&Interaction, &ModelSlot, &mut BackgroundColor), (Changed<Interaction>, With<Button>)>,
    mut modal_commands: EventWriter<ModalCommand>,
) {
    for (interaction, slot, mut bg) in &mut q {
        match *interaction {
            Interaction::Pressed => {
                debug!("Slot {} clicked: {}", slot.slot, slot.display_name);
                modal_commands.write(ModalCommand::Show(slot.display_name.clone()));
            }
            Interaction::Hovered => *bg = BackgroundColor(SLOT_HOVER),
            Interaction::None => *bg = BackgroundColor(SLOT_BACKGROUND),
        }
    }
}

/// Arrow keys page through the carousel (native builds only).
#[cfg(not(target_arch = "wasm32"))]
pub fn handle_navigation_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut carousel_commands: EventWriter<CarouselCommand>,
) {
    if keyboard.just_pressed(KeyCode::ArrowRight) {
        carousel_commands.write(CarouselCommand::Next);
    }
    if keyboard.just_pressed(KeyCode::ArrowLeft) {
        carousel_commands.write(CarouselCommand::Previous);
    }
}

/// Placeholder system for WASM builds where the host page drives navigation.
#[cfg(target_arch = "wasm32")]
pub fn handle_navigation_keys() {
    // Navigation comes from the on-canvas buttons and RPC in WASM builds.
}
