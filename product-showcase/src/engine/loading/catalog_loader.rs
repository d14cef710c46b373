use crate::constants::path::CATALOG_PATH;
use crate::engine::assets::catalog::AssetCatalog;
use crate::engine::core::app_state::AppState;
use bevy::asset::LoadState;
use bevy::prelude::*;

#[derive(Resource, Default)]
pub struct CatalogLoader {
    handle: Option<Handle<AssetCatalog>>,
}

// Start the loading process
pub fn start_loading(mut catalog_loader: ResMut<CatalogLoader>, asset_server: Res<AssetServer>) {
    info!("Loading showcase catalog from: {}", CATALOG_PATH);
    catalog_loader.handle = Some(asset_server.load(CATALOG_PATH));
}

/// Publish the catalog resource once `catalog.json` resolves, then move on to
/// loading models. A missing or unreadable file falls back to the built-in
/// showcase.
pub fn resolve_catalog(
    catalog_loader: Res<CatalogLoader>,
    catalogs: Res<Assets<AssetCatalog>>,
    asset_server: Res<AssetServer>,
    mut commands: Commands,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Some(handle) = catalog_loader.handle.as_ref() else {
        return;
    };

    let catalog = match asset_server.get_load_state(handle) {
        Some(LoadState::Loaded) => {
            let Some(catalog) = catalogs.get(handle) else {
                return;
            };
            catalog.clone().validated_or_showcase()
        }
        Some(LoadState::Failed(err)) => {
            warn!("Catalog {CATALOG_PATH} failed to load ({err}), using built-in showcase");
            AssetCatalog::showcase()
        }
        _ => return,
    };

    info!("✓ Catalog ready with {} entries", catalog.len());
    commands.insert_resource(catalog);
    info!("→ Transitioning to LoadingModels state");
    next_state.set(AppState::LoadingModels);
}
