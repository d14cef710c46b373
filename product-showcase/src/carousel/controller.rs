use crate::carousel::state::CarouselState;
use crate::carousel::ui::ModelsContainer;
use crate::engine::assets::loaded_models::{LoadedModel, LoadedModels};
use crate::engine::viewport::ViewportHandle;
use crate::engine::viewport::factory::build_viewport;
use crate::rpc::web_rpc::WebRpcInterface;
use bevy::prelude::*;
use serde::Serialize;

/// Page navigation requested by the UI buttons, keyboard, or host page.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselCommand {
    Next,
    Previous,
}

/// Rebuild the viewports of the current page.
#[derive(Event, Debug, Default, Clone, Copy)]
pub struct RenderPageRequest;

/// Owns everything the carousel shows: the loaded models, the page position,
/// and the live viewports of the visible page.
#[derive(Resource, Default)]
pub struct Carousel {
    models: LoadedModels,
    state: CarouselState,
    live: Vec<ViewportHandle>,
}

/// Serializable view of the carousel for the host page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarouselSnapshot {
    pub page_index: usize,
    pub page_count: usize,
    pub page_offset: usize,
    pub loaded: usize,
    pub visible: Vec<String>,
    pub can_next: bool,
    pub can_previous: bool,
}

impl Carousel {
    pub fn models(&self) -> &LoadedModels {
        &self.models
    }

    pub fn models_mut(&mut self) -> &mut LoadedModels {
        &mut self.models
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn next(&mut self) -> bool {
        self.state.next(self.models.len())
    }

    pub fn previous(&mut self) -> bool {
        self.state.previous()
    }

    pub fn can_next(&self) -> bool {
        self.state.can_advance(self.models.len())
    }

    pub fn can_previous(&self) -> bool {
        self.state.can_retreat()
    }

    /// Models on the current page, at most one page long.
    pub fn visible_models(&self) -> &[LoadedModel] {
        self.models.slice(self.state.visible_range(self.models.len()))
    }

    pub fn live_viewports(&self) -> &[ViewportHandle] {
        &self.live
    }

    /// Hand over every live viewport for release. Leaves no live viewports.
    pub fn take_live(&mut self) -> Vec<ViewportHandle> {
        std::mem::take(&mut self.live)
    }

    /// Build one viewport per visible model with `build(slot, model)`.
    /// Must follow [`Carousel::take_live`] so no earlier page stays live.
    pub fn build_page(&mut self, mut build: impl FnMut(usize, &LoadedModel) -> ViewportHandle) {
        debug_assert!(self.live.is_empty(), "previous page was not released");
        let live = self
            .visible_models()
            .iter()
            .enumerate()
            .map(|(slot, model)| build(slot, model))
            .collect();
        self.live = live;
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        let len = self.models.len();
        CarouselSnapshot {
            page_index: self.state.page_index(),
            page_count: self.state.page_count(len),
            page_offset: self.state.page_offset(),
            loaded: len,
            visible: self
                .visible_models()
                .iter()
                .map(|m| m.display_name.clone())
                .collect(),
            can_next: self.can_next(),
            can_previous: self.can_previous(),
        }
    }
}

/// Apply navigation commands. Only transitions that move the page request a
/// re-render.
pub fn apply_carousel_commands(
    mut commands_in: EventReader<CarouselCommand>,
    mut carousel: ResMut<Carousel>,
    mut render_requests: EventWriter<RenderPageRequest>,
) {
    for command in commands_in.read() {
        let moved = match command {
            CarouselCommand::Next => carousel.next(),
            CarouselCommand::Previous => carousel.previous(),
        };

        if moved {
            info!(
                "Carousel {:?} → page offset {}",
                command,
                carousel.state().page_offset()
            );
            render_requests.write(RenderPageRequest);
        }
    }
}

/// Show the first page once every model has settled.
pub fn request_initial_render(mut render_requests: EventWriter<RenderPageRequest>) {
    info!("→ All models settled, rendering first carousel page");
    render_requests.write(RenderPageRequest);
}

/// Tear down the previous page's viewports and build the current page.
/// Several requests in one frame produce a single rebuild.
pub fn render_visible_page(
    mut requests: EventReader<RenderPageRequest>,
    mut commands: Commands,
    mut carousel: ResMut<Carousel>,
    mut images: ResMut<Assets<Image>>,
    container: Query<Entity, With<ModelsContainer>>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    if requests.is_empty() {
        return;
    }
    requests.clear();

    let Ok(container) = container.single() else {
        warn!("Carousel container missing, skipping page render");
        return;
    };

    for handle in carousel.take_live() {
        handle.release(&mut commands);
    }

    carousel.build_page(|slot, model| {
        build_viewport(&mut commands, &mut images, container, slot, model)
    });

    let snapshot = carousel.snapshot();
    info!(
        "Rendered page {}/{}: {:?} ({} live viewports)",
        snapshot.page_index + 1,
        snapshot.page_count,
        snapshot.visible,
        carousel.live_viewports().len()
    );

    match serde_json::to_value(&snapshot) {
        Ok(params) => rpc_interface.send_notification("page_changed", params),
        Err(e) => error!("Failed to serialize carousel snapshot: {}", e),
    }
}
