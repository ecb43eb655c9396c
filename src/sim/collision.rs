//! Circle-circle overlap tests

use glam::Vec2;

/// True when two circles touch or overlap (boundary inclusive)
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    let rsum = ra + rb;
    a.distance_squared(b) <= rsum * rsum
}
