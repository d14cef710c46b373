use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;
use bevy::ui::IsDefaultUiCamera;
use bevy_common_assets::json::JsonAssetPlugin;

use crate::carousel::CarouselPlugin;
use crate::constants::render_settings::{
    AMBIENT_BRIGHTNESS, DIRECTIONAL_ILLUMINANCE, DIRECTIONAL_LIGHT_POSITION,
};
use crate::engine::assets::catalog::AssetCatalog;
use crate::engine::core::app_state::{AppState, ShowcaseSet};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::catalog_loader::{CatalogLoader, resolve_catalog, start_loading};
use crate::engine::loading::load_gate::LoadGate;
use crate::engine::loading::model_loader::{ModelLoader, poll_model_loads, start_model_loads};
use crate::engine::loading::progress::{LoadingProgress, finish_loading_text, update_loading_frontend};
use crate::modal::ModalPlugin;
use crate::rpc::web_rpc::WebRpcPlugin;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        // Registers AssetCatalog as a loadable asset type from catalog.json.
        .add_plugins(JsonAssetPlugin::<AssetCatalog>::new(&["catalog.json"]))
        .add_plugins(WebRpcPlugin)
        .add_plugins(CarouselPlugin)
        .add_plugins(ModalPlugin);

    app.configure_sets(
        Update,
        (
            ShowcaseSet::Input,
            ShowcaseSet::Apply,
            ShowcaseSet::Render,
            ShowcaseSet::Present,
        )
            .chain(),
    );

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<CatalogLoader>()
        .init_resource::<ModelLoader>()
        .init_resource::<LoadGate>();

    // State-based system scheduling
    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            resolve_catalog
                .in_set(ShowcaseSet::Apply)
                .run_if(in_state(AppState::LoadingCatalog)),
        )
        .add_systems(OnEnter(AppState::LoadingModels), start_model_loads)
        .add_systems(
            Update,
            poll_model_loads
                .in_set(ShowcaseSet::Apply)
                .run_if(in_state(AppState::LoadingModels)),
        )
        .add_systems(
            Update,
            update_loading_frontend
                .in_set(ShowcaseSet::Present)
                .run_if(not(in_state(AppState::Running))),
        )
        .add_systems(OnEnter(AppState::Running), finish_loading_text);

    app
}

fn spawn_lighting(commands: &mut Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_BRIGHTNESS,
        ..default()
    });

    commands.spawn((
        DirectionalLight {
            illuminance: DIRECTIONAL_ILLUMINANCE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(DIRECTIONAL_LIGHT_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

// Window camera that draws the carousel UI; model viewports have their own cameras.
fn spawn_ui_camera(commands: &mut Commands) {
    commands.spawn((Camera2d, IsDefaultUiCamera));
}

// Startup system that only handles basic initialisation
fn setup(mut commands: Commands) {
    info!("=== PRODUCT SHOWCASE VIEWER ===");
    spawn_lighting(&mut commands);
    spawn_ui_camera(&mut commands);
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
