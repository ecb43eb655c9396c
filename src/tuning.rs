//! Data-driven game balance
//!
//! Every simulation constant lives here so a settings file can retune the
//! game without touching code. Defaults reproduce the classic feel.

use serde::{Deserialize, Serialize};

use crate::consts::{SCREEN_H, SCREEN_W};

/// Half-open float range used by the spawners
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Draw a value in `[min, max)`; an empty or inverted span yields `min`
    pub fn sample(&self, rng: &mut impl rand::Rng) -> f32 {
        if self.max > self.min {
            rng.random_range(self.min..self.max)
        } else {
            self.min
        }
    }
}

/// Simulation tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Bubbles ===
    /// Multiplier applied to bubble velocities (velocities are per 1/60 s)
    pub bubble_velocity_scale: f32,
    /// Horizontal bounce band: bubbles stay within [margin, W - margin]
    pub bounce_margin: f32,
    /// Bubbles die once their center falls below -despawn_margin
    pub despawn_margin: f32,
    /// Pseudo-depth is clamped to [0, depth_clamp] before scaling the radius
    pub depth_clamp: f32,

    // === Spawning ===
    pub initial_bubbles: usize,
    /// No respawn while this many bubbles are alive
    pub max_bubbles: usize,
    /// Chance per tick of spawning one bubble while under the cap
    pub spawn_chance: f32,
    pub spawn_x: Span,
    pub spawn_y: Span,
    pub spawn_z: Span,
    pub spawn_radius: Span,
    pub spawn_vx: Span,
    pub spawn_vy: Span,
    /// Each color channel is drawn from this span
    pub spawn_channel: Span,

    // === Projectiles ===
    /// Pixels per second
    pub projectile_speed: f32,
    /// Seconds
    pub projectile_lifetime: f32,
    pub projectile_collision_radius: f32,
    /// Projectiles die outside the screen grown by this margin
    pub projectile_bounds_margin: f32,

    // === Scoring / splitting ===
    pub score_per_hit: u64,
    /// Only bubbles with a base radius above this may split
    pub split_min_radius: f32,
    pub split_chance: f32,
    pub split_shrink: f32,
    /// Children land within +/- this many pixels of the parent
    pub split_jitter: f32,
    /// Child depth = parent depth + step * {0, 1, 2}
    pub split_depth_step: f32,
    pub split_vx: Span,
    pub split_vy: Span,
}

impl Default for Tuning {
    fn default() -> Self {
        let w = SCREEN_W as f32;
        let h = SCREEN_H as f32;
        Self {
            bubble_velocity_scale: 60.0,
            bounce_margin: 30.0,
            despawn_margin: 50.0,
            depth_clamp: 0.8,

            initial_bubbles: 8,
            max_bubbles: 14,
            spawn_chance: 0.05,
            spawn_x: Span::new(60.0, w - 60.0),
            spawn_y: Span::new(h / 2.0, h),
            spawn_z: Span::new(0.0, 0.5),
            spawn_radius: Span::new(18.0, 36.0),
            spawn_vx: Span::new(-0.5, 0.5),
            spawn_vy: Span::new(-0.6, -0.1),
            spawn_channel: Span::new(0.4, 0.8),

            projectile_speed: 600.0,
            projectile_lifetime: 3.0,
            projectile_collision_radius: 4.0,
            projectile_bounds_margin: 50.0,

            score_per_hit: 10,
            split_min_radius: 14.0,
            split_chance: 0.5,
            split_shrink: 0.6,
            split_jitter: 20.0,
            split_depth_step: 0.05,
            split_vx: Span::new(-50.0 / 120.0, 50.0 / 120.0),
            split_vy: Span::new(0.0, 50.0 / 120.0),
        }
    }
}

impl Tuning {
    /// Radius a bubble is drawn and collided with after depth attenuation
    #[inline]
    pub fn depth_scaled_radius(&self, base_radius: f32, z: f32) -> f32 {
        let depth = z.max(0.0).min(self.depth_clamp.max(0.0));
        (base_radius * (1.0 - depth)).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_depth_scaled_radius() {
        let t = Tuning::default();
        assert_eq!(t.depth_scaled_radius(20.0, 0.0), 20.0);
        assert!((t.depth_scaled_radius(20.0, 0.5) - 10.0).abs() < 1e-5);
        // Clamped at 0.8 so far bubbles never vanish
        assert!((t.depth_scaled_radius(20.0, 3.0) - 4.0).abs() < 1e-5);
        // Negative depth is treated as nearest
        assert_eq!(t.depth_scaled_radius(20.0, -1.0), 20.0);
        assert_eq!(t.depth_scaled_radius(-5.0, 0.0), 0.0);
    }

    #[test]
    fn test_negative_depth_clamp_does_not_panic() {
        let t = Tuning {
            depth_clamp: -0.1,
            ..Tuning::default()
        };
        assert_eq!(t.depth_scaled_radius(20.0, 0.5), 20.0);
    }

    #[test]
    fn test_span_sample() {
        let mut rng = Pcg32::seed_from_u64(7);
        let span = Span::new(2.0, 3.0);
        for _ in 0..100 {
            let v = span.sample(&mut rng);
            assert!((2.0..3.0).contains(&v));
        }
        assert_eq!(Span::new(5.0, 5.0).sample(&mut rng), 5.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let t: Tuning = serde_json::from_str(r#"{ "spawn_chance": 0.25 }"#).unwrap();
        assert_eq!(t.spawn_chance, 0.25);
        assert_eq!(t.max_bubbles, 14);
    }
}
