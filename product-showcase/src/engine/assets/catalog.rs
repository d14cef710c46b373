use crate::constants::path::SUPPORTED_MODEL_EXTENSIONS;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// One model the viewer should fetch, with display metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Path of the `.gltf`/`.glb` file relative to the asset root.
    pub source: String,
    pub display_name: String,
    /// Model translation relative to its viewport slot origin.
    #[serde(default)]
    pub placement: [f32; 3],
}

impl CatalogEntry {
    pub fn new(source: &str, display_name: &str, placement: [f32; 3]) -> Self {
        Self {
            source: source.to_string(),
            display_name: display_name.to_string(),
            placement,
        }
    }

    pub fn placement(&self) -> Vec3 {
        Vec3::from_array(self.placement)
    }
}

/// Catalog of showcase models as a Bevy asset. Mirrors `catalog.json` exactly.
#[derive(Asset, TypePath, Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetCatalog {
    pub entries: Vec<CatalogEntry>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog has no entries")]
    Empty,
    #[error("entry {index} has a blank display name")]
    BlankDisplayName { index: usize },
    #[error("model `{path}` is listed more than once")]
    DuplicateSource { path: String },
    #[error("model `{path}` is not a .gltf or .glb file")]
    UnsupportedFormat { path: String },
}

impl AssetCatalog {
    /// Built-in showcase used when `catalog.json` is missing or invalid.
    pub fn showcase() -> Self {
        Self {
            entries: vec![
                CatalogEntry::new("scythe/scene.gltf", "Scythe", [0.0, 0.0, 2.0]),
                CatalogEntry::new("handgun/scene.gltf", "Handgun", [0.0, 0.0, -55.0]),
                CatalogEntry::new("pistol.glb", "Pistol", [0.0, 0.0, 4.0]),
                CatalogEntry::new("white_sunglasses.glb", "Sunglasses", [0.0, 0.0, 2.0]),
                CatalogEntry::new("backpack.glb", "Backpack", [0.0, -0.1, 4.0]),
                CatalogEntry::new("guitar.glb", "Electric Guitar", [0.0, -0.7, 3.0]),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reject catalogs the loader could never satisfy.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for (index, entry) in self.entries.iter().enumerate() {
            if entry.display_name.trim().is_empty() {
                return Err(CatalogError::BlankDisplayName { index });
            }
            if !has_supported_extension(&entry.source) {
                return Err(CatalogError::UnsupportedFormat {
                    path: entry.source.clone(),
                });
            }
            if !seen.insert(entry.source.as_str()) {
                return Err(CatalogError::DuplicateSource {
                    path: entry.source.clone(),
                });
            }
        }
        Ok(())
    }

    /// Validated copy of this catalog, or the built-in showcase on error.
    pub fn validated_or_showcase(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                warn!("Catalog rejected ({e}), falling back to built-in showcase");
                Self::showcase()
            }
        }
    }
}

fn has_supported_extension(source: &str) -> bool {
    Path::new(source)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_MODEL_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_catalog_json_with_default_placement() {
        let json = r#"{
            "entries": [
                { "source": "pistol.glb", "display_name": "Pistol", "placement": [0.0, 0.0, 4.0] },
                { "source": "crate/scene.gltf", "display_name": "Crate" }
            ]
        }"#;

        let catalog: AssetCatalog = serde_json::from_str(json).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.entries[0].placement(), Vec3::new(0.0, 0.0, 4.0));
        assert_eq!(catalog.entries[1].placement(), Vec3::ZERO);
        assert_eq!(catalog.validate(), Ok(()));
    }

    #[test]
    fn built_in_showcase_is_valid() {
        let catalog = AssetCatalog::showcase();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.validate(), Ok(()));
    }

    #[test]
    fn rejects_empty_catalog() {
        assert_eq!(AssetCatalog::default().validate(), Err(CatalogError::Empty));
    }

    #[test]
    fn rejects_blank_display_name() {
        let catalog = AssetCatalog {
            entries: vec![
                CatalogEntry::new("a.glb", "A", [0.0; 3]),
                CatalogEntry::new("b.glb", "   ", [0.0; 3]),
            ],
        };
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::BlankDisplayName { index: 1 })
        );
    }

    #[test]
    fn rejects_duplicate_sources() {
        let catalog = AssetCatalog {
            entries: vec![
                CatalogEntry::new("a.glb", "A", [0.0; 3]),
                CatalogEntry::new("a.glb", "Also A", [0.0; 3]),
            ],
        };
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::DuplicateSource {
                path: "a.glb".to_string()
            })
        );
    }

    #[test]
    fn rejects_unsupported_formats() {
        let catalog = AssetCatalog {
            entries: vec![CatalogEntry::new("model.obj", "Obj", [0.0; 3])],
        };
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::UnsupportedFormat {
                path: "model.obj".to_string()
            })
        );

        let upper = AssetCatalog {
            entries: vec![CatalogEntry::new("MODEL.GLB", "Upper", [0.0; 3])],
        };
        assert_eq!(upper.validate(), Ok(()));
    }

    #[test]
    fn invalid_catalog_falls_back_to_showcase() {
        let catalog = AssetCatalog::default().validated_or_showcase();
        assert_eq!(catalog.entries, AssetCatalog::showcase().entries);
    }
}
