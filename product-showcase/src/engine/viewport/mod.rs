//! Per-model viewports for the visible carousel page.
//!
//! Every visible slot renders its model with a dedicated camera into an
//! offscreen image that the UI shows as the slot's canvas. A slot's live
//! entities are owned by a [`ViewportHandle`] that releases them together.

/// Builds the camera, render target, scene instance, and UI canvas of a slot.
pub mod factory;

/// Continuous spin of models inside their viewports.
pub mod rotation;

use bevy::prelude::*;

/// Marks the UI node of a visible slot. Clicking it opens the detail modal.
#[derive(Component, Debug, Clone)]
pub struct ModelSlot {
    pub slot: usize,
    pub display_name: String,
}

/// Live resources of one visible slot.
///
/// Dropping the handle without calling [`ViewportHandle::release`] leaves
/// the entities (and their rotation) running.
#[derive(Debug)]
pub struct ViewportHandle {
    pub slot: usize,
    pub display_name: String,
    wrapper: Entity,
    camera: Entity,
    scene_root: Entity,
    target: Handle<Image>,
}

impl ViewportHandle {
    pub fn new(
        slot: usize,
        display_name: String,
        wrapper: Entity,
        camera: Entity,
        scene_root: Entity,
        target: Handle<Image>,
    ) -> Self {
        Self {
            slot,
            display_name,
            wrapper,
            camera,
            scene_root,
            target,
        }
    }

    pub fn entities(&self) -> [Entity; 3] {
        [self.wrapper, self.camera, self.scene_root]
    }

    /// Despawn the slot's UI canvas, camera, and scene instance. Despawning
    /// the scene root stops its rotation; the render target image is freed
    /// once its last strong handle goes away with this handle.
    pub fn release(self, commands: &mut Commands) {
        for entity in self.entities() {
            commands.entity(entity).try_despawn();
        }
        debug!(
            "Released viewport slot {} ({}), target {:?}",
            self.slot,
            self.display_name,
            self.target.id()
        );
    }
}
