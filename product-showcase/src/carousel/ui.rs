use super::controller::{Carousel, CarouselCommand};
use crate::constants::carousel::CANVAS_SIZE;
use crate::constants::ui_style::*;
use crate::engine::loading::progress::LoadingText;
use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::prelude::*;

/// Row that receives one canvas per visible model.
#[derive(Component)]
pub struct ModelsContainer;

/// Page navigation control; carries the command it sends when pressed.
#[derive(Component, Debug, Clone, Copy)]
pub struct NavButton(pub CarouselCommand);

#[derive(Component)]
pub struct PageLabel;

// Spawns the carousel layout: title, previous/next controls around the model row, page and loading labels
pub fn spawn_carousel_ui(mut commands: Commands) {
    commands
        .spawn((
            Name::new("CarouselRoot"),
            BackgroundColor(BACKGROUND),
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                row_gap: Val::Px(16.0),
                ..default()
            },
        ))
        .with_children(|root| {
            root.spawn((
                Name::new("Title"),
                Text::new("Product Showcase"),
                TextFont {
                    font_size: 28.0,
                    ..default()
                },
                TextColor(TEXT_PRIMARY),
            ));

            root.spawn((
                Name::new("CarouselRow"),
                Node {
                    display: Display::Flex,
                    flex_direction: FlexDirection::Row,
                    align_items: AlignItems::Center,
                    column_gap: Val::Px(16.0),
                    ..default()
                },
            ))
            .with_children(|row| {
                spawn_nav_button(row, CarouselCommand::Previous, "<");

                row.spawn((
                    ModelsContainer,
                    Name::new("ModelsContainer"),
                    Node {
                        min_height: Val::Px(CANVAS_SIZE as f32),
                        display: Display::Flex,
                        flex_direction: FlexDirection::Row,
                        column_gap: Val::Px(16.0),
                        ..default()
                    },
                ));

                spawn_nav_button(row, CarouselCommand::Next, ">");
            });

            root.spawn((
                PageLabel,
                Name::new("PageLabel"),
                Text::new(""),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(TEXT_MUTED),
            ));

            root.spawn((
                LoadingText,
                Name::new("LoadingText"),
                Text::new("Loading catalog..."),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(TEXT_MUTED),
            ));
        });
}

fn spawn_nav_button(parent: &mut ChildSpawnerCommands, command: CarouselCommand, label: &str) {
    parent
        .spawn((
            NavButton(command),
            Button,
            Name::new(format!("{command:?}Button")),
            BackgroundColor(BUTTON_DISABLED),
            BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.25)),
            BorderRadius::all(Val::Px(NAV_BUTTON_SIZE * 0.5)),
            Node {
                width: Val::Px(NAV_BUTTON_SIZE),
                height: Val::Px(NAV_BUTTON_SIZE),
                display: Display::Flex,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
        ))
        .with_children(|btn| {
            btn.spawn((
                Text::new(label),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(TEXT_PRIMARY),
            ));
        });
}

/// Whether pressing a navigation button would move the page.
pub fn nav_enabled(carousel: &Carousel, command: CarouselCommand) -> bool {
    match command {
        CarouselCommand::Next => carousel.can_next(),
        CarouselCommand::Previous => carousel.can_previous(),
    }
}

pub fn idle_colour(enabled: bool) -> Color {
    if enabled { BUTTON_IDLE } else { BUTTON_DISABLED }
}

// Dims unavailable navigation buttons and refreshes the page label when the carousel changes
pub fn reflect_carousel_state(
    carousel: Res<Carousel>,
    mut buttons: Query<(&NavButton, &Interaction, &mut BackgroundColor)>,
    mut labels: Query<&mut Text, With<PageLabel>>,
) {
    if !carousel.is_changed() {
        return;
    }

    for (nav, interaction, mut bg) in &mut buttons {
        let enabled = nav_enabled(&carousel, nav.0);
        if !enabled || *interaction == Interaction::None {
            *bg = BackgroundColor(idle_colour(enabled));
        }
    }

    let snapshot = carousel.snapshot();
    let label = if snapshot.page_count == 0 {
        String::new()
    } else {
        format!("Page {} of {}", snapshot.page_index + 1, snapshot.page_count)
    };
    for mut text in &mut labels {
        if text.0 != label {
            text.0 = label.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::loaded_models::LoadedModel;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn hovered_button_dims_once_its_direction_is_unavailable() {
        let mut world = World::new();
        let mut carousel = Carousel::default();
        for i in 0..6 {
            carousel.models_mut().push(LoadedModel {
                scene: Handle::default(),
                display_name: format!("Model {i}"),
                placement: Vec3::ZERO,
            });
        }
        assert!(carousel.next());
        world.insert_resource(carousel);

        let next = world
            .spawn((
                NavButton(CarouselCommand::Next),
                Interaction::Hovered,
                BackgroundColor(BUTTON_HOVER),
            ))
            .id();
        let previous = world
            .spawn((
                NavButton(CarouselCommand::Previous),
                Interaction::Hovered,
                BackgroundColor(BUTTON_HOVER),
            ))
            .id();
        let label = world.spawn((PageLabel, Text::new(""))).id();

        world.run_system_once(reflect_carousel_state).unwrap();

        assert_eq!(
            world.get::<BackgroundColor>(next),
            Some(&BackgroundColor(BUTTON_DISABLED))
        );
        assert_eq!(
            world.get::<BackgroundColor>(previous),
            Some(&BackgroundColor(BUTTON_HOVER))
        );
        assert_eq!(world.get::<Text>(label).map(|t| t.0.as_str()), Some("Page 2 of 2"));
    }
}
