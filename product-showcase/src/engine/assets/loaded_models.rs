use bevy::prelude::*;
use std::ops::Range;

/// A catalog entry whose scene finished loading.
#[derive(Debug, Clone)]
pub struct LoadedModel {
    pub scene: Handle<Scene>,
    pub display_name: String,
    pub placement: Vec3,
}

/// Loaded models in completion order. Append-only: entries are never
/// removed or reordered once pushed.
#[derive(Debug, Default)]
pub struct LoadedModels {
    models: Vec<LoadedModel>,
}

impl LoadedModels {
    pub fn push(&mut self, model: LoadedModel) {
        self.models.push(model);
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Models within `range`, clamped to the loaded length.
    pub fn slice(&self, range: Range<usize>) -> &[LoadedModel] {
        let end = range.end.min(self.models.len());
        let start = range.start.min(end);
        &self.models[start..end]
    }

    pub fn iter(&self) -> impl Iterator<Item = &LoadedModel> {
        self.models.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(name: &str) -> LoadedModel {
        LoadedModel {
            scene: Handle::default(),
            display_name: name.to_string(),
            placement: Vec3::ZERO,
        }
    }

    #[test]
    fn keeps_insertion_order() {
        let mut models = LoadedModels::default();
        for name in ["Pistol", "Scythe", "Guitar"] {
            models.push(model(name));
        }

        let names: Vec<_> = models.iter().map(|m| m.display_name.as_str()).collect();
        assert_eq!(names, ["Pistol", "Scythe", "Guitar"]);
    }

    #[test]
    fn slice_clamps_to_length() {
        let mut models = LoadedModels::default();
        for name in ["A", "B", "C", "D"] {
            models.push(model(name));
        }

        assert_eq!(models.slice(3..6).len(), 1);
        assert!(models.slice(6..9).is_empty());
        assert_eq!(models.slice(0..3)[2].display_name, "C");
    }
}
