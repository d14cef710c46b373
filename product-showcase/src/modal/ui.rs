use super::state::{ModalClick, ModalCommand, ModalState};
use crate::constants::ui_style::*;
use bevy::prelude::*;
use bevy::ui::FocusPolicy;
use bevy::window::PrimaryWindow;

/// Full-window overlay behind the modal panel.
#[derive(Component)]
pub struct ModalBackdrop;

/// Panel holding the modal text. Clicks inside it keep the modal open.
#[derive(Component)]
pub struct ModalContent;

#[derive(Component)]
pub struct ModalHeading;

#[derive(Component)]
pub struct ModalBody;

pub fn spawn_modal_ui(mut commands: Commands) {
    commands
        .spawn((
            ModalBackdrop,
            Name::new("ModalBackdrop"),
            BackgroundColor(MODAL_BACKDROP),
            FocusPolicy::Block,
            GlobalZIndex(10),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                display: Display::None,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                ..default()
            },
        ))
        .with_children(|backdrop| {
            backdrop
                .spawn((
                    ModalContent,
                    Name::new("ModalContent"),
                    BackgroundColor(MODAL_CONTENT),
                    BorderRadius::all(Val::Px(10.0)),
                    Node {
                        width: Val::Px(MODAL_WIDTH),
                        padding: UiRect::all(Val::Px(20.0)),
                        display: Display::Flex,
                        flex_direction: FlexDirection::Column,
                        row_gap: Val::Px(10.0),
                        ..default()
                    },
                ))
                .with_children(|content| {
                    content.spawn((
                        ModalHeading,
                        Text::new(""),
                        TextFont {
                            font_size: 24.0,
                            ..default()
                        },
                        TextColor(TEXT_PRIMARY),
                    ));
                    content.spawn((
                        ModalBody,
                        Text::new(""),
                        TextFont {
                            font_size: 16.0,
                            ..default()
                        },
                        TextColor(TEXT_MUTED),
                    ));
                });
        });
}

/// Close the modal when a click lands outside its content panel.
///
/// Runs before this frame's modal commands are applied, so the click that
/// opens the modal cannot also close it.
pub fn dismiss_on_backdrop_click(
    modal: Res<ModalState>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    content: Query<(&ComputedNode, &GlobalTransform), With<ModalContent>>,
    mut modal_commands: EventWriter<ModalCommand>,
) {
    if !modal.is_visible() || !mouse_button.just_pressed(MouseButton::Left) {
        return;
    }

    let Ok(window) = windows.single() else { return; };
    // UI layout is computed in physical pixels.
    let Some(cursor) = window.physical_cursor_position() else { return; };
    let Ok((node, transform)) = content.single() else { return; };

    let content_rect = Rect::from_center_size(transform.translation().truncate(), node.size());
    if ModalClick::classify(cursor, content_rect) == ModalClick::Backdrop {
        modal_commands.write(ModalCommand::Hide);
    }
}

/// Escape closes the modal (native builds only).
#[cfg(not(target_arch = "wasm32"))]
pub fn dismiss_on_escape(
    keyboard: Res<ButtonInput<KeyCode>>,
    modal: Res<ModalState>,
    mut modal_commands: EventWriter<ModalCommand>,
) {
    if modal.is_visible() && keyboard.just_pressed(KeyCode::Escape) {
        modal_commands.write(ModalCommand::Hide);
    }
}

#[cfg(target_arch = "wasm32")]
pub fn dismiss_on_escape() {}

pub fn sync_modal_ui(
    modal: Res<ModalState>,
    mut backdrop: Query<&mut Node, With<ModalBackdrop>>,
    mut texts: ParamSet<(
        Query<&mut Text, With<ModalHeading>>,
        Query<&mut Text, With<ModalBody>>,
    )>,
) {
    if !modal.is_changed() {
        return;
    }

    if let Ok(mut node) = backdrop.single_mut() {
        node.display = if modal.is_visible() { Display::Flex } else { Display::None };
    }
    if let Ok(mut heading) = texts.p0().single_mut() {
        heading.0 = modal.heading().to_string();
    }
    if let Ok(mut body) = texts.p1().single_mut() {
        body.0 = modal.body();
    }
}
