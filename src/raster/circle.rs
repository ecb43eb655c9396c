//! Midpoint circle rasterization

use glam::IVec2;

/// Midpoint circle outline.
///
/// Computes one octant starting at `(0, r)` with decision variable `1 - r`
/// and mirrors every step into all eight octants. Points on the diagonal and
/// at the poles are emitted more than once. Negative radii emit nothing.
pub fn circle_outline(center: IVec2, radius: i32, plot: &mut dyn FnMut(IVec2)) {
    if radius < 0 {
        return;
    }

    let mut x = 0;
    let mut y = radius;
    let mut d = 1 - radius;

    while x <= y {
        plot_octants(center, x, y, plot);

        if d < 0 {
            d += 2 * x + 3;
        } else {
            d += 2 * (x - y) + 5;
            y -= 1;
        }
        x += 1;
    }
}

/// Filled disk as concentric midpoint outlines from `radius` down to 0.
///
/// This is not a scanline fill: it costs O(r²) through r+1 outline passes,
/// which is fine for the tens-of-pixels radii drawn here.
pub fn circle_filled(center: IVec2, radius: i32, plot: &mut dyn FnMut(IVec2)) {
    for r in (0..=radius).rev() {
        circle_outline(center, r, plot);
    }
}

#[inline]
fn plot_octants(c: IVec2, x: i32, y: i32, plot: &mut dyn FnMut(IVec2)) {
    plot(IVec2::new(c.x + x, c.y + y));
    plot(IVec2::new(c.x - x, c.y + y));
    plot(IVec2::new(c.x + x, c.y - y));
    plot(IVec2::new(c.x - x, c.y - y));
    plot(IVec2::new(c.x + y, c.y + x));
    plot(IVec2::new(c.x - y, c.y + x));
    plot(IVec2::new(c.x + y, c.y - x));
    plot(IVec2::new(c.x - y, c.y - x));
}
