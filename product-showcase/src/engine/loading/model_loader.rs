use crate::carousel::controller::Carousel;
use crate::engine::assets::catalog::{AssetCatalog, CatalogEntry};
use crate::engine::assets::loaded_models::{LoadedModel, LoadedModels};
use crate::engine::core::app_state::AppState;
use crate::engine::loading::load_gate::{JoinStatus, LoadGate};
use crate::engine::loading::progress::{EntryStatus, LoadingProgress};
use bevy::asset::LoadState;
use bevy::gltf::Gltf;
use bevy::prelude::*;

/// A catalog entry whose glTF fetch is in flight.
#[derive(Debug, Clone)]
pub struct PendingModel {
    /// Position of the entry in the catalog.
    pub index: usize,
    pub entry: CatalogEntry,
    pub handle: Handle<Gltf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(Handle<Scene>),
    Failed(String),
}

/// Outstanding glTF fetches, one per catalog entry.
#[derive(Resource, Debug, Default)]
pub struct ModelLoader {
    pending: Vec<PendingModel>,
}

impl ModelLoader {
    pub fn request(&mut self, pending: PendingModel) {
        self.pending.push(pending);
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Remove and return every fetch `probe` reports as settled, in the
    /// order they are found. Unsettled fetches stay pending.
    pub fn drain_settled(
        &mut self,
        mut probe: impl FnMut(&PendingModel) -> Option<LoadOutcome>,
    ) -> Vec<(PendingModel, LoadOutcome)> {
        let mut settled = Vec::new();
        let mut still_pending = Vec::with_capacity(self.pending.len());

        for pending in self.pending.drain(..) {
            match probe(&pending) {
                Some(outcome) => settled.push((pending, outcome)),
                None => still_pending.push(pending),
            }
        }

        self.pending = still_pending;
        settled
    }
}

/// Record one finished fetch. Successful loads are appended to `models`;
/// failures are logged and skipped. Both count towards the gate so a broken
/// asset cannot stall the carousel.
pub fn settle_model(
    models: &mut LoadedModels,
    gate: &mut LoadGate,
    progress: &mut LoadingProgress,
    pending: PendingModel,
    outcome: LoadOutcome,
) -> JoinStatus {
    match outcome {
        LoadOutcome::Loaded(scene) => {
            info!(
                "✓ Loaded {} from {}",
                pending.entry.display_name, pending.entry.source
            );
            models.push(LoadedModel {
                scene,
                display_name: pending.entry.display_name.clone(),
                placement: pending.entry.placement(),
            });
            progress.record(pending.index, EntryStatus::Loaded);
        }
        LoadOutcome::Failed(reason) => {
            error!(
                "✗ Failed to load {} from {}: {}",
                pending.entry.display_name, pending.entry.source, reason
            );
            progress.record(pending.index, EntryStatus::Failed);
        }
    }

    gate.settle(pending.index)
}

/// Fan out one glTF fetch per catalog entry.
pub fn start_model_loads(
    catalog: Res<AssetCatalog>,
    asset_server: Res<AssetServer>,
    mut loader: ResMut<ModelLoader>,
    mut gate: ResMut<LoadGate>,
    mut progress: ResMut<LoadingProgress>,
) {
    if catalog.is_empty() {
        warn!("Catalog has no entries, the carousel will stay empty");
    }
    info!("Loading {} showcase models", catalog.len());

    for (index, entry) in catalog.entries.iter().enumerate() {
        let handle = asset_server.load::<Gltf>(entry.source.clone());
        loader.request(PendingModel {
            index,
            entry: entry.clone(),
            handle,
        });
    }

    *gate = LoadGate::new(catalog.len());
    progress.begin(&catalog);
}

/// Collect finished fetches each frame and switch to `Running` when the gate
/// completes.
pub fn poll_model_loads(
    mut loader: ResMut<ModelLoader>,
    asset_server: Res<AssetServer>,
    gltfs: Res<Assets<Gltf>>,
    mut carousel: ResMut<Carousel>,
    mut gate: ResMut<LoadGate>,
    mut progress: ResMut<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loader.pending_count() == 0 || gate.is_complete() {
        return;
    }

    let settled = loader.drain_settled(|pending| probe_load(&asset_server, &gltfs, pending));

    for (pending, outcome) in settled {
        let status = settle_model(
            carousel.models_mut(),
            &mut gate,
            &mut progress,
            pending,
            outcome,
        );

        match status {
            JoinStatus::Complete => {
                let names: Vec<&str> = carousel
                    .models()
                    .iter()
                    .map(|m| m.display_name.as_str())
                    .collect();
                info!(
                    "→ All {} catalog entries settled ({} loaded: {:?}), transitioning to Running state",
                    gate.expected(),
                    names.len(),
                    names
                );
                next_state.set(AppState::Running);
            }
            JoinStatus::Pending => debug!("{} catalog entries still loading", gate.remaining()),
            JoinStatus::AlreadyComplete => {}
        }
    }
}

fn probe_load(
    asset_server: &AssetServer,
    gltfs: &Assets<Gltf>,
    pending: &PendingModel,
) -> Option<LoadOutcome> {
    match asset_server.get_load_state(&pending.handle)? {
        LoadState::Loaded => {
            let gltf = gltfs.get(&pending.handle)?;
            let scene = gltf
                .default_scene
                .clone()
                .or_else(|| gltf.scenes.first().cloned());

            Some(match scene {
                Some(scene) => LoadOutcome::Loaded(scene),
                None => LoadOutcome::Failed("file contains no scenes".to_string()),
            })
        }
        LoadState::Failed(err) => Some(LoadOutcome::Failed(err.to_string())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending(index: usize, name: &str) -> PendingModel {
        PendingModel {
            index,
            entry: CatalogEntry::new(&format!("{name}.glb"), name, [0.0, 0.0, index as f32]),
            handle: Handle::default(),
        }
    }

    fn permutations(items: &[usize]) -> Vec<Vec<usize>> {
        if items.len() <= 1 {
            return vec![items.to_vec()];
        }
        let mut result = Vec::new();
        for (i, &first) in items.iter().enumerate() {
            let mut rest = items.to_vec();
            rest.remove(i);
            for mut tail in permutations(&rest) {
                tail.insert(0, first);
                result.push(tail);
            }
        }
        result
    }

    #[test]
    fn every_completion_order_fills_models_and_completes_once() {
        let names = ["Scythe", "Handgun", "Pistol", "Sunglasses"];

        for order in permutations(&[0, 1, 2, 3]) {
            let mut models = LoadedModels::default();
            let mut gate = LoadGate::new(names.len());
            let mut progress = LoadingProgress::default();
            let mut completions = 0;

            for &index in &order {
                let status = settle_model(
                    &mut models,
                    &mut gate,
                    &mut progress,
                    pending(index, names[index]),
                    LoadOutcome::Loaded(Handle::default()),
                );
                if status == JoinStatus::Complete {
                    completions += 1;
                }
            }

            assert_eq!(completions, 1, "order {order:?}");
            assert_eq!(models.len(), names.len());

            let loaded: Vec<_> = models.iter().map(|m| m.display_name.as_str()).collect();
            let expected: Vec<_> = order.iter().map(|&i| names[i]).collect();
            assert_eq!(loaded, expected, "models must be in completion order");
        }
    }

    #[test]
    fn failed_load_is_skipped_but_still_completes_the_gate() {
        let mut models = LoadedModels::default();
        let mut gate = LoadGate::new(3);
        let mut progress = LoadingProgress::default();
        progress.begin(&AssetCatalog {
            entries: vec![
                CatalogEntry::new("a.glb", "A", [0.0; 3]),
                CatalogEntry::new("b.glb", "B", [0.0; 3]),
                CatalogEntry::new("c.glb", "C", [0.0; 3]),
            ],
        });

        let outcomes = [
            (pending(0, "A"), LoadOutcome::Loaded(Handle::default())),
            (pending(1, "B"), LoadOutcome::Failed("404".to_string())),
            (pending(2, "C"), LoadOutcome::Loaded(Handle::default())),
        ];

        let statuses: Vec<_> = outcomes
            .into_iter()
            .map(|(p, o)| settle_model(&mut models, &mut gate, &mut progress, p, o))
            .collect();

        assert_eq!(
            statuses,
            [JoinStatus::Pending, JoinStatus::Pending, JoinStatus::Complete]
        );
        assert_eq!(models.len(), 2);
        assert_eq!(progress.count(EntryStatus::Failed), 1);
        assert_eq!(progress.count(EntryStatus::Loaded), 2);
    }

    #[test]
    fn drain_settled_keeps_unfinished_fetches() {
        let mut loader = ModelLoader::default();
        for (index, name) in ["A", "B", "C"].into_iter().enumerate() {
            loader.request(pending(index, name));
        }

        let settled = loader.drain_settled(|p| {
            (p.index != 1).then(|| LoadOutcome::Loaded(Handle::default()))
        });

        let indices: Vec<_> = settled.iter().map(|(p, _)| p.index).collect();
        assert_eq!(indices, [0, 2]);
        assert_eq!(loader.pending_count(), 1);

        let settled = loader.drain_settled(|_| Some(LoadOutcome::Failed("timeout".into())));
        assert_eq!(settled.len(), 1);
        assert_eq!(loader.pending_count(), 0);
    }
}
