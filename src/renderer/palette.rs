//! Fixed colors and sizes for scene elements

use crate::sim::state::Rgb;

pub const BACKGROUND: Rgb = Rgb::new(0.06, 0.08, 0.12);
pub const GRID: Rgb = Rgb::new(0.08, 0.1, 0.15);
pub const HIGHLIGHT: Rgb = Rgb::new(1.0, 1.0, 1.0);
pub const PROJECTILE: Rgb = Rgb::new(1.0, 0.9, 0.6);
pub const LAUNCHER_BASE: Rgb = Rgb::new(0.2, 0.2, 0.25);
pub const BARREL: Rgb = Rgb::new(0.85, 0.85, 0.9);
pub const AIM_LINE: Rgb = Rgb::new(0.9, 0.6, 0.2);
pub const HUD_BAR: Rgb = Rgb::new(0.9, 0.9, 0.2);

/// Outline = bubble color minus this per channel
pub const OUTLINE_DARKEN: f32 = 0.18;

/// Background grid spacing (px)
pub const GRID_SPACING: usize = 60;
pub const PROJECTILE_RADIUS: i32 = 3;
pub const LAUNCHER_BASE_RADIUS: i32 = 10;
pub const BARREL_LENGTH: f32 = 40.0;
pub const AIM_DASH: u32 = 8;

/// Score bar block: top-left corner and size
pub const HUD_BAR_INSET: (i32, i32) = (12, 20);
pub const HUD_BAR_SIZE: (i32, i32) = (6, 12);
