use crate::carousel::controller::Carousel;
use crate::engine::assets::catalog::AssetCatalog;
use crate::rpc::web_rpc::WebRpcInterface;
use bevy::prelude::*;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    Pending,
    Loaded,
    Failed,
}

#[derive(Debug, Clone, Serialize)]
pub struct EntryProgress {
    pub display_name: String,
    pub status: EntryStatus,
}

/// Load status of every catalog entry, indexed by catalog position.
#[derive(Resource, Debug, Default)]
pub struct LoadingProgress {
    pub entries: Vec<EntryProgress>,
}

/// Label showing loading status until the first page renders.
#[derive(Component)]
pub struct LoadingText;

impl LoadingProgress {
    pub fn begin(&mut self, catalog: &AssetCatalog) {
        self.entries = catalog
            .entries
            .iter()
            .map(|entry| EntryProgress {
                display_name: entry.display_name.clone(),
                status: EntryStatus::Pending,
            })
            .collect();
    }

    pub fn record(&mut self, index: usize, status: EntryStatus) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.status = status;
        }
    }

    pub fn count(&self, status: EntryStatus) -> usize {
        self.entries.iter().filter(|e| e.status == status).count()
    }

    pub fn settled(&self) -> usize {
        self.entries.len() - self.count(EntryStatus::Pending)
    }

    pub fn summary(&self) -> String {
        if self.entries.is_empty() {
            return "Loading catalog...".to_string();
        }
        let failed = self.count(EntryStatus::Failed);
        let mut text = format!("Loading models {}/{}", self.settled(), self.entries.len());
        if failed > 0 {
            text.push_str(&format!(" ({failed} failed)"));
        }
        text
    }
}

/// Push loading status to the on-screen label and the host page.
pub fn update_loading_frontend(
    progress: Res<LoadingProgress>,
    mut labels: Query<&mut Text, With<LoadingText>>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    if !progress.is_changed() {
        return;
    }

    let summary = progress.summary();
    for mut text in &mut labels {
        text.0 = summary.clone();
    }

    rpc_interface.send_notification(
        "loading_progress",
        serde_json::json!({
            "settled": progress.settled(),
            "total": progress.entries.len(),
            "failed": progress.count(EntryStatus::Failed),
            "entries": progress.entries,
        }),
    );
}

/// Hide the loading label once the carousel is running, unless nothing
/// loaded at all.
pub fn finish_loading_text(
    carousel: Res<Carousel>,
    mut labels: Query<(&mut Text, &mut Node), With<LoadingText>>,
) {
    for (mut text, mut node) in &mut labels {
        if carousel.models().is_empty() {
            text.0 = "No models could be loaded".to_string();
        } else {
            node.display = Display::None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_tracks_settled_and_failed_entries() {
        let mut progress = LoadingProgress::default();
        assert_eq!(progress.summary(), "Loading catalog...");

        progress.begin(&AssetCatalog::showcase());
        assert_eq!(progress.summary(), "Loading models 0/6");

        progress.record(0, EntryStatus::Loaded);
        progress.record(4, EntryStatus::Failed);
        assert_eq!(progress.settled(), 2);
        assert_eq!(progress.summary(), "Loading models 2/6 (1 failed)");
    }

    #[test]
    fn out_of_range_records_are_ignored() {
        let mut progress = LoadingProgress::default();
        progress.begin(&AssetCatalog::showcase());
        progress.record(99, EntryStatus::Loaded);
        assert_eq!(progress.settled(), 0);
    }
}
