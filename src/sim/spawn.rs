//! Procedural bubble spawning and splitting
//!
//! All randomness is drawn from the state's seeded RNG.

use glam::Vec2;
use rand::Rng;

use super::state::{Bubble, Rgb, SimState};

/// Spawn one fresh bubble in the upper half of the screen
pub fn spawn_bubble(state: &mut SimState) {
    let t = &state.tuning;
    let rng = &mut state.rng;

    let pos = Vec2::new(t.spawn_x.sample(rng), t.spawn_y.sample(rng));
    let z = t.spawn_z.sample(rng);
    let radius = t.spawn_radius.sample(rng).floor();
    let vel = Vec2::new(t.spawn_vx.sample(rng), t.spawn_vy.sample(rng));
    let color = Rgb::new(
        t.spawn_channel.sample(rng),
        t.spawn_channel.sample(rng),
        t.spawn_channel.sample(rng),
    );

    state.bubbles.push(Bubble::new(pos, z, radius, vel, color));
}

/// Roll the respawn chance; spawns at most one bubble while under the cap
pub fn maybe_respawn(state: &mut SimState) -> bool {
    if state.live_bubbles() >= state.tuning.max_bubbles {
        return false;
    }
    let chance = f64::from(state.tuning.spawn_chance.clamp(0.0, 1.0));
    if !state.rng.random_bool(chance) {
        return false;
    }
    spawn_bubble(state);
    true
}

/// Roll the split chance for a popped bubble.
///
/// Returns the two children on success; bubbles at or below the split
/// radius never split and consume no randomness.
pub fn split(parent: &Bubble, state: &mut SimState) -> Option<[Bubble; 2]> {
    let t = &state.tuning;
    if parent.radius <= t.split_min_radius {
        return None;
    }
    let chance = f64::from(t.split_chance.clamp(0.0, 1.0));
    if !state.rng.random_bool(chance) {
        return None;
    }

    let rng = &mut state.rng;
    let j = t.split_jitter.abs();
    let mut child = || {
        let jitter = Vec2::new(rng.random_range(-j..=j), rng.random_range(-j..=j));
        let depth_steps = rng.random_range(0..3u8);
        let vel = Vec2::new(t.split_vx.sample(rng), t.split_vy.sample(rng));
        Bubble::new(
            parent.pos + jitter,
            parent.z + t.split_depth_step.max(0.0) * f32::from(depth_steps),
            parent.radius * t.split_shrink,
            vel,
            parent.color,
        )
    };
    let first = child();
    let second = child();
    Some([first, second])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    fn parent(radius: f32) -> Bubble {
        Bubble::new(
            Vec2::new(300.0, 400.0),
            0.2,
            radius,
            Vec2::ZERO,
            Rgb::new(0.5, 0.6, 0.7),
        )
    }

    #[test]
    fn test_spawn_within_ranges() {
        let mut state = SimState::empty(Tuning::default(), 11);
        for _ in 0..200 {
            spawn_bubble(&mut state);
        }
        for b in &state.bubbles {
            assert!((60.0..840.0).contains(&b.pos.x));
            assert!((350.0..700.0).contains(&b.pos.y));
            assert!((0.0..0.5).contains(&b.z));
            assert!((18.0..36.0).contains(&b.radius));
            assert!(b.vel.y < 0.0, "bubbles drift downward");
        }
    }

    #[test]
    fn test_respawn_respects_cap() {
        let tuning = Tuning {
            spawn_chance: 1.0,
            max_bubbles: 3,
            ..Tuning::default()
        };
        let mut state = SimState::empty(tuning, 5);
        for _ in 0..10 {
            maybe_respawn(&mut state);
        }
        assert_eq!(state.bubbles.len(), 3);
    }

    #[test]
    fn test_respawn_zero_chance() {
        let tuning = Tuning {
            spawn_chance: 0.0,
            ..Tuning::default()
        };
        let mut state = SimState::empty(tuning, 5);
        assert!(!maybe_respawn(&mut state));
        assert!(state.bubbles.is_empty());
    }

    #[test]
    fn test_split_children() {
        let tuning = Tuning {
            split_chance: 1.0,
            ..Tuning::default()
        };
        let mut state = SimState::empty(tuning, 9);
        let p = parent(30.0);
        let children = split(&p, &mut state).expect("forced split");
        for c in &children {
            assert!((c.radius - 18.0).abs() < 1e-5);
            assert!(c.z >= p.z);
            assert!((c.pos - p.pos).abs().max_element() <= 20.0);
            assert_eq!(c.color, p.color);
            assert!(c.alive);
        }
    }

    #[test]
    fn test_small_bubbles_never_split() {
        let tuning = Tuning {
            split_chance: 1.0,
            ..Tuning::default()
        };
        let mut state = SimState::empty(tuning, 9);
        assert!(split(&parent(14.0), &mut state).is_none());
    }
}
