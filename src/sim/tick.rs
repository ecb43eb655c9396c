//! Per-frame simulation step
//!
//! Advances kinematics, applies the boundary policy, resolves collisions and
//! mutates the populations. Entities go alive -> dead -> removed; nothing is
//! ever revived.

use glam::Vec2;

use super::collision::circles_overlap;
use super::spawn;
use super::state::{Projectile, SimState};
use crate::consts::{SCREEN_H, SCREEN_W};

/// What happened during one tick (for logging and tests)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Bubbles created by the respawn roll
    pub spawned: u32,
    /// Bubbles that drifted below the screen
    pub drifted_off: u32,
    /// Projectiles that expired or left the bounds
    pub expired: u32,
    /// Successful projectile/bubble hits
    pub pops: u32,
    /// Pops that produced two children
    pub splits: u32,
}

/// Fire a projectile from `origin` toward `aim`.
///
/// Returns false (and creates nothing) when the two points coincide.
pub fn fire(state: &mut SimState, origin: Vec2, aim: Vec2) -> bool {
    let Some(dir) = (aim - origin).try_normalize() else {
        log::debug!("Ignoring fire with zero-length aim at {:?}", origin);
        return false;
    };

    state.projectiles.push(Projectile {
        pos: origin,
        vel: dir * state.tuning.projectile_speed,
        life: state.tuning.projectile_lifetime,
        alive: true,
    });
    log::debug!("Fired toward {:?} ({} in flight)", aim, state.projectiles.len());
    true
}

/// Advance the simulation by `dt` seconds
pub fn tick(state: &mut SimState, dt: f32) -> TickReport {
    let mut report = TickReport::default();
    state.time_ticks += 1;

    // --- SPAWN ---
    if spawn::maybe_respawn(state) {
        report.spawned += 1;
    }

    // --- BUBBLES ---
    let t = &state.tuning;
    let left = t.bounce_margin;
    let right = SCREEN_W as f32 - t.bounce_margin;
    let floor = -t.despawn_margin;
    let step = dt * t.bubble_velocity_scale;

    for bubble in state.bubbles.iter_mut().filter(|b| b.alive) {
        bubble.pos += bubble.vel * step;

        // Bounce off the sides
        if bubble.pos.x < left {
            bubble.pos.x = left;
            bubble.vel.x = bubble.vel.x.abs();
        }
        if bubble.pos.x > right {
            bubble.pos.x = right;
            bubble.vel.x = -bubble.vel.x.abs();
        }

        if bubble.pos.y < floor {
            bubble.alive = false;
            report.drifted_off += 1;
        }
    }
    state.bubbles.retain(|b| b.alive);

    // --- PROJECTILES ---
    let m = state.tuning.projectile_bounds_margin;
    let (min, max) = (
        Vec2::splat(-m),
        Vec2::new(SCREEN_W as f32 + m, SCREEN_H as f32 + m),
    );

    for p in state.projectiles.iter_mut().filter(|p| p.alive) {
        p.pos += p.vel * dt;
        p.life -= dt;
        let outside = p.pos.cmplt(min).any() || p.pos.cmpgt(max).any();
        if p.life <= 0.0 || outside {
            p.alive = false;
            report.expired += 1;
        }
    }
    state.projectiles.retain(|p| p.alive);

    // --- COLLISIONS ---
    resolve_hits(state, &mut report);

    if report != TickReport::default() {
        log::trace!("Tick {}: {:?}", state.time_ticks, report);
    }
    report
}

/// Test every live projectile against every live bubble.
///
/// A projectile stops at its first hit and a bubble popped earlier in the
/// pass is skipped by later projectiles. Split children join after the pass.
fn resolve_hits(state: &mut SimState, report: &mut TickReport) {
    let pr = state.tuning.projectile_collision_radius;
    let mut children = Vec::new();

    for pi in 0..state.projectiles.len() {
        if !state.projectiles[pi].alive {
            continue;
        }
        let ppos = state.projectiles[pi].pos;

        let tuning = &state.tuning;
        let Some(bi) = state
            .bubbles
            .iter()
            .position(|b| b.alive && circles_overlap(ppos, pr, b.pos, b.effective_radius(tuning)))
        else {
            continue;
        };

        state.projectiles[pi].alive = false;
        state.bubbles[bi].alive = false;
        state.score += state.tuning.score_per_hit;
        state.pops += 1;
        report.pops += 1;

        let parent = state.bubbles[bi].clone();
        log::debug!(
            "Popped bubble r={:.1} z={:.2} at {:?}, score {}",
            parent.radius,
            parent.z,
            parent.pos,
            state.score
        );
        if let Some(pair) = spawn::split(&parent, state) {
            report.splits += 1;
            children.extend(pair);
        }
    }

    state.compact();
    state.bubbles.extend(children);
}
