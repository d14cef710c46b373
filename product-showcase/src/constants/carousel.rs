/// Number of models shown on one carousel page.
pub const PAGE_SIZE: usize = 3;

/// Width and height of each model canvas in logical pixels.
pub const CANVAS_SIZE: u32 = 300;

/// World-space distance between the origins of neighbouring viewport slots.
/// Each slot renders its own model in isolation, so slots must sit far
/// enough apart that no camera frustum (far plane included) reaches into
/// another slot.
pub const SLOT_SPACING: f32 = 2500.0;
