//! Fixed tunables for the showcase viewer.

/// Page size, canvas dimensions, and slot placement for the carousel.
pub mod carousel;

/// Asset paths served alongside the viewer.
pub mod path;

/// Camera, lighting, and rotation parameters for the per-model viewports.
pub mod render_settings;

/// Colours and sizes shared by the carousel and modal UI.
pub mod ui_style;
