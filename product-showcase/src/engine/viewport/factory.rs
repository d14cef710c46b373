use crate::constants::carousel::{CANVAS_SIZE, SLOT_SPACING};
use crate::constants::render_settings::{CAMERA_DISTANCE, CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR};
use crate::constants::ui_style::SLOT_BACKGROUND;
use crate::engine::assets::loaded_models::LoadedModel;
use crate::engine::viewport::rotation::Rotating;
use crate::engine::viewport::{ModelSlot, ViewportHandle};
use bevy::prelude::*;
use bevy::render::camera::{ClearColorConfig, RenderTarget};
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat, TextureUsages};
use bevy::ui::FocusPolicy;

/// World-space origin of a viewport slot. Slots are spread along X so each
/// camera only ever sees its own model.
pub fn slot_origin(slot: usize) -> Vec3 {
    Vec3::new(slot as f32 * SLOT_SPACING, 0.0, 0.0)
}

/// Square offscreen colour target a slot camera renders into.
pub fn create_render_target(size: u32) -> Image {
    let extent = Extent3d {
        width: size,
        height: size,
        ..default()
    };

    let mut image = Image::new_fill(
        extent,
        TextureDimension::D2,
        &[0, 0, 0, 0],
        TextureFormat::Bgra8UnormSrgb,
        RenderAssetUsages::default(),
    );
    image.texture_descriptor.usage =
        TextureUsages::TEXTURE_BINDING | TextureUsages::COPY_DST | TextureUsages::RENDER_ATTACHMENT;
    image
}

/// Build one visible slot: render target, camera, spinning scene instance,
/// and the clickable canvas inside `container`.
pub fn build_viewport(
    commands: &mut Commands,
    images: &mut Assets<Image>,
    container: Entity,
    slot: usize,
    model: &LoadedModel,
) -> ViewportHandle {
    let origin = slot_origin(slot);
    let target = images.add(create_render_target(CANVAS_SIZE));

    let scene_root = commands
        .spawn((
            Name::new(format!("Showcase model: {}", model.display_name)),
            SceneRoot(model.scene.clone()),
            Transform::from_translation(origin + model.placement),
            Rotating::default(),
        ))
        .id();

    let camera = commands
        .spawn((
            Name::new(format!("Slot camera {slot}")),
            Camera3d::default(),
            Camera {
                target: RenderTarget::Image(target.clone().into()),
                clear_color: ClearColorConfig::Custom(Color::NONE),
                order: -(slot as isize) - 1,
                ..default()
            },
            Projection::from(PerspectiveProjection {
                fov: CAMERA_FOV_DEGREES.to_radians(),
                aspect_ratio: 1.0,
                near: CAMERA_NEAR,
                far: CAMERA_FAR,
                ..default()
            }),
            Transform::from_translation(origin + Vec3::Z * CAMERA_DISTANCE),
        ))
        .id();

    let wrapper = commands
        .spawn((
            Name::new(format!("Model slot {slot}")),
            ModelSlot {
                slot,
                display_name: model.display_name.clone(),
            },
            Button,
            BackgroundColor(SLOT_BACKGROUND),
            BorderRadius::all(Val::Px(8.0)),
            Node {
                width: Val::Px(CANVAS_SIZE as f32),
                height: Val::Px(CANVAS_SIZE as f32),
                overflow: Overflow::clip(),
                ..default()
            },
        ))
        .with_children(|wrapper| {
            wrapper.spawn((
                ImageNode::new(target.clone()),
                FocusPolicy::Pass,
                Node {
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    ..default()
                },
            ));
        })
        .id();
    commands.entity(container).add_child(wrapper);

    ViewportHandle::new(
        slot,
        model.display_name.clone(),
        wrapper,
        camera,
        scene_root,
        target,
    )
}
