use bevy::prelude::Color;

pub const BACKGROUND: Color = Color::srgb(0.08, 0.09, 0.10);
pub const SLOT_BACKGROUND: Color = Color::srgb(0.12, 0.13, 0.15);
pub const SLOT_HOVER: Color = Color::srgb(0.16, 0.18, 0.21);

pub const BUTTON_IDLE: Color = Color::srgb(0.22, 0.24, 0.28);
pub const BUTTON_HOVER: Color = Color::srgb(0.26, 0.28, 0.32);
pub const BUTTON_PRESSED: Color = Color::srgb(0.18, 0.20, 0.24);
pub const BUTTON_DISABLED: Color = Color::srgb(0.14, 0.15, 0.17);

pub const TEXT_PRIMARY: Color = Color::srgb(1.0, 1.0, 1.0);
pub const TEXT_MUTED: Color = Color::srgb(0.62, 0.64, 0.68);

pub const MODAL_BACKDROP: Color = Color::srgba(0.0, 0.0, 0.0, 0.6);
pub const MODAL_CONTENT: Color = Color::srgb(0.14, 0.16, 0.20);

pub const NAV_BUTTON_SIZE: f32 = 48.0;
pub const MODAL_WIDTH: f32 = 420.0;
