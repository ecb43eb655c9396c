//! Scene compositor
//!
//! Turns the simulation's entities into raster calls, back to front:
//! grid, bubbles (far to near), projectiles, launcher, aim line, HUD.
//! It only borrows the simulation for the duration of one `render` call.

use glam::{IVec2, Vec2};

use super::framebuffer::Framebuffer;
use super::palette::*;
use crate::consts::{SCREEN_H, SCREEN_W};
use crate::raster::{circle_filled, circle_outline, line_bresenham, line_dashed, line_dda};
use crate::settings::Settings;
use crate::sim::state::{Bubble, Projectile};
use crate::sim::SimState;
use crate::to_pixel;

/// Which optional layers get drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layers {
    pub grid: bool,
    pub aim_line: bool,
    pub hud: bool,
}

impl Default for Layers {
    fn default() -> Self {
        Self {
            grid: true,
            aim_line: true,
            hud: true,
        }
    }
}

impl From<&Settings> for Layers {
    fn from(settings: &Settings) -> Self {
        Self {
            grid: settings.show_grid,
            aim_line: settings.show_aim_line,
            hud: settings.show_hud,
        }
    }
}

/// Draws a full frame from the simulation state
#[derive(Debug, Clone, Default)]
pub struct Compositor {
    pub layers: Layers,
}

impl Compositor {
    pub fn new(layers: Layers) -> Self {
        Self { layers }
    }

    /// Render the frame for `sim` with the launcher aimed at `aim`
    pub fn render(&self, fb: &mut Framebuffer, sim: &SimState, base: IVec2, aim: IVec2) {
        fb.clear(BACKGROUND);

        if self.layers.grid {
            draw_grid(fb);
        }

        for i in depth_order(&sim.bubbles) {
            let bubble = &sim.bubbles[i];
            draw_bubble(fb, bubble, bubble.effective_radius(&sim.tuning));
        }

        for p in sim.projectiles.iter().filter(|p| p.alive) {
            draw_projectile(fb, p);
        }

        draw_launcher(fb, base, aim);

        if self.layers.aim_line {
            line_dashed(base, aim, AIM_DASH, &mut fb.pen(AIM_LINE));
        }

        if self.layers.hud {
            draw_hud(fb);
        }
    }
}

/// Indices of live bubbles, farthest first (stable for equal depth)
pub fn depth_order(bubbles: &[Bubble]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..bubbles.len()).filter(|&i| bubbles[i].alive).collect();
    order.sort_by(|&a, &b| bubbles[b].z.total_cmp(&bubbles[a].z));
    order
}

/// Faint full-screen grid of DDA lines
pub fn draw_grid(fb: &mut Framebuffer) {
    let mut pen = fb.pen(GRID);
    for gx in (0..=SCREEN_W).step_by(GRID_SPACING) {
        line_dda(IVec2::new(gx, 0), IVec2::new(gx, SCREEN_H), &mut pen);
    }
    for gy in (0..=SCREEN_H).step_by(GRID_SPACING) {
        line_dda(IVec2::new(0, gy), IVec2::new(SCREEN_W, gy), &mut pen);
    }
}

/// Body, corner highlight and darker rim at the given on-screen radius
pub fn draw_bubble(fb: &mut Framebuffer, bubble: &Bubble, radius: f32) {
    let r = radius.round() as i32;
    let c = to_pixel(bubble.pos);

    circle_filled(c, r, &mut fb.pen(bubble.color));

    let highlight = IVec2::new(c.x - r / 3, c.y + r / 3);
    circle_filled(highlight, (r / 6).max(1), &mut fb.pen(HIGHLIGHT));

    circle_outline(c, r, &mut fb.pen(bubble.color.darken(OUTLINE_DARKEN)));
}

pub fn draw_projectile(fb: &mut Framebuffer, p: &Projectile) {
    circle_filled(to_pixel(p.pos), PROJECTILE_RADIUS, &mut fb.pen(PROJECTILE));
}

/// Base disk plus a three-pixel-wide Bresenham barrel toward `aim`
pub fn draw_launcher(fb: &mut Framebuffer, base: IVec2, aim: IVec2) {
    circle_filled(base, LAUNCHER_BASE_RADIUS, &mut fb.pen(LAUNCHER_BASE));

    let tip = to_pixel(barrel_tip(base.as_vec2(), aim.as_vec2()));

    let mut pen = fb.pen(BARREL);
    for dx in [0, -1, 1] {
        let offset = IVec2::new(dx, 0);
        line_bresenham(base + offset, tip + offset, &mut pen);
    }
}

/// Score indicator block in the top-left corner
pub fn draw_hud(fb: &mut Framebuffer) {
    let (sx, inset) = HUD_BAR_INSET;
    let sy = SCREEN_H - inset;
    let (w, h) = HUD_BAR_SIZE;
    let mut pen = fb.pen(HUD_BAR);
    for i in 0..w {
        for j in 0..h {
            pen(IVec2::new(sx + i, sy - j));
        }
    }
}

/// Barrel end: `BARREL_LENGTH` from the base toward the aim (unit length when they coincide)
pub fn barrel_tip(base: Vec2, aim: Vec2) -> Vec2 {
    let dir = aim - base;
    let len = dir.length();
    let len = if len < 1e-6 { 1.0 } else { len };
    base + dir / len * BARREL_LENGTH
}
