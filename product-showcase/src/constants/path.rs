/// Catalog of showcase models, relative to the asset root.
pub const CATALOG_PATH: &str = "catalog.json";

/// File extensions the glTF loader accepts for catalog sources.
pub const SUPPORTED_MODEL_EXTENSIONS: &[&str] = &["gltf", "glb"];
