//! Bubble Shooter - a depth-shaded arcade shooter drawn pixel by pixel
//!
//! Core modules:
//! - `raster`: Pixel algorithms (DDA / Bresenham lines, midpoint circles)
//! - `renderer`: CPU framebuffer and the scene compositor
//! - `sim`: Deterministic entity simulation (bubbles, projectiles, collisions)
//! - `platform`: Host abstraction and coalesced input
//! - `frame`: Per-frame orchestration
//! - `tuning`: Data-driven game balance

pub mod autopilot;
pub mod frame;
pub mod platform;
pub mod raster;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use frame::FrameController;
pub use settings::Settings;
pub use tuning::Tuning;

use glam::{IVec2, Vec2};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions in pixels (origin bottom-left, Y up)
    pub const SCREEN_W: i32 = 900;
    pub const SCREEN_H: i32 = 700;

    /// Launcher base position (bottom center)
    pub const GUN_X: i32 = SCREEN_W / 2;
    pub const GUN_Y: i32 = 60;
}

/// Launcher base as a float point
#[inline]
pub fn gun_base() -> Vec2 {
    Vec2::new(consts::GUN_X as f32, consts::GUN_Y as f32)
}

/// Round a float position to the nearest pixel (half away from zero)
#[inline]
pub fn to_pixel(pos: Vec2) -> IVec2 {
    IVec2::new(pos.x.round() as i32, pos.y.round() as i32)
}
