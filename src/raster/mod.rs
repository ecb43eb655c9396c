//! Pixel-emitting raster algorithms
//!
//! Every function here is pure: it takes geometry and hands integer pixel
//! coordinates to a `plot` callback. Nothing is stored between calls and
//! nothing is clipped; the sink decides what to do with off-surface points.

pub mod circle;
pub mod line;

pub use circle::{circle_filled, circle_outline};
pub use line::{line_bresenham, line_dashed, line_dda};

use glam::IVec2;

/// Run a raster function and collect what it emits (handy for tests and tools)
pub fn collect(draw: impl FnOnce(&mut dyn FnMut(IVec2))) -> Vec<IVec2> {
    let mut points = Vec::new();
    draw(&mut |p| points.push(p));
    points
}
