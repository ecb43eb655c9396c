//! Line rasterization
//!
//! Two interchangeable line algorithms plus a dashed variant:
//! - `line_dda`: incremental-step (digital differential analyzer), float accumulation
//! - `line_bresenham`: integer error accumulation, 8-connected
//! - `line_dashed`: DDA that alternates emit/skip runs of `dash_len` steps

use glam::IVec2;

use crate::to_pixel;

/// Incremental-step line from `p0` to `p1`, both ends inclusive.
///
/// Steps along the major axis, adding `delta / steps` per step and rounding
/// the accumulated position to the nearest pixel. Coincident endpoints emit
/// exactly one point.
pub fn line_dda(p0: IVec2, p1: IVec2, plot: &mut dyn FnMut(IVec2)) {
    let delta = p1 - p0;
    let steps = delta.x.abs().max(delta.y.abs());
    if steps == 0 {
        plot(p0);
        return;
    }

    let inc = delta.as_vec2() / steps as f32;
    let mut pos = p0.as_vec2();
    for _ in 0..=steps {
        plot(to_pixel(pos));
        pos += inc;
    }
}

/// Dashed incremental-step line.
///
/// Walks the same pixels as [`line_dda`] but only emits while inside an "on"
/// run; runs toggle every `dash_len` steps, starting "on". Coincident
/// endpoints or a zero dash length emit nothing.
pub fn line_dashed(p0: IVec2, p1: IVec2, dash_len: u32, plot: &mut dyn FnMut(IVec2)) {
    let delta = p1 - p0;
    let steps = delta.x.abs().max(delta.y.abs());
    if steps == 0 || dash_len == 0 {
        return;
    }

    let inc = delta.as_vec2() / steps as f32;
    let mut pos = p0.as_vec2();
    let mut drawing = true;
    let mut run = 0;
    for _ in 0..=steps {
        if drawing {
            plot(to_pixel(pos));
        }
        run += 1;
        if run >= dash_len {
            drawing = !drawing;
            run = 0;
        }
        pos += inc;
    }
}

/// Integer-only error-accumulation line, both ends inclusive.
///
/// The walk always starts from the lexicographically smaller endpoint so that
/// tie-breaking is identical in both directions; when the caller's order is
/// the other way round the same pixels are emitted in reverse.
pub fn line_bresenham(p0: IVec2, p1: IVec2, plot: &mut dyn FnMut(IVec2)) {
    if (p1.x, p1.y) < (p0.x, p0.y) {
        let mut path = Vec::with_capacity(path_len(p0, p1));
        bresenham_walk(p1, p0, &mut |p| path.push(p));
        for p in path.into_iter().rev() {
            plot(p);
        }
    } else {
        bresenham_walk(p0, p1, plot);
    }
}

fn bresenham_walk(from: IVec2, to: IVec2, plot: &mut dyn FnMut(IVec2)) {
    let dx = (to.x - from.x).abs();
    let dy = (to.y - from.y).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };
    let mut err = dx - dy;
    let mut cur = from;

    loop {
        plot(cur);
        if cur == to {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            cur.x += sx;
        }
        if e2 < dx {
            err += dx;
            cur.y += sy;
        }
    }
}

#[inline]
fn path_len(p0: IVec2, p1: IVec2) -> usize {
    let d = (p1 - p0).abs();
    d.x.max(d.y) as usize + 1
}
